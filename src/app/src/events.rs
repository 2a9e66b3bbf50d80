use serde::{Deserialize, Serialize};

use crate::commands::device::{ProbeOutcome, SwitchOutcome};
use crate::types::LedCommand;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize,

    // Connectivity monitor domain
    Monitor(MonitorEvent),

    // Command dispatcher domain
    Control(ControlEvent),

    // Assistant panel domain
    Assistant(AssistantEvent),

    // UI actions domain
    Ui(UiEvent),
}

/// Reachability probing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Periodic probe. The shell fires this every
    /// [`crate::PROBE_INTERVAL_SECS`] seconds while the UI is mounted and
    /// clears the interval on teardown. Failures stay silent.
    ProbeTick,

    /// User asked for a probe (the ping button). Failures are surfaced.
    ProbeRequested,

    // Probe settlement (internal event, skipped from serialization)
    #[serde(skip)]
    ProbeResponse { outcome: ProbeOutcome, silent: bool },
}

/// Device address edits and LED switch commands.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    SetAddress {
        address: String,
    },

    Switch {
        command: LedCommand,
    },

    // Switch settlement (internal event, skipped from serialization)
    #[serde(skip)]
    SwitchResponse {
        command: LedCommand,
        outcome: SwitchOutcome,
    },
}

/// Assistant chat panel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AssistantEvent {
    Ask {
        prompt: String,
    },

    // Guidance settlement (internal event, skipped from serialization)
    #[serde(skip)]
    GuidanceResponse {
        text: String,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
}
