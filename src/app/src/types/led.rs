use serde::{Deserialize, Serialize};

/// The UI's belief about the device LED.
///
/// Never inferred from probes and never downgraded by a failure; only an
/// accepted switch command moves it off `Unknown`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedStatus {
    On,
    Off,
    #[default]
    Unknown,
}

/// A state-changing command for the LED.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedCommand {
    On,
    Off,
}

impl LedCommand {
    /// Device endpoint path for this command.
    pub fn path(&self) -> &'static str {
        match self {
            LedCommand::On => "/on",
            LedCommand::Off => "/off",
        }
    }

    /// The status an accepted command settles the belief to.
    pub fn status(&self) -> LedStatus {
        match self {
            LedCommand::On => LedStatus::On,
            LedCommand::Off => LedStatus::Off,
        }
    }
}
