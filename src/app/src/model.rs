use serde::{Deserialize, Serialize};

use crate::types::*;

/// Address the UI starts with before the user edits it.
pub const DEFAULT_DEVICE_ADDRESS: &str = "192.168.1.100";

pub(crate) const EMPTY_ADDRESS_ERROR: &str = "Device address is empty. Enter the ESP8266's IP.";

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Device configuration
    pub device_address: String,

    /// The core's belief about the LED, updated only by accepted switch
    /// commands. Probes prove reachability, not LED state.
    pub led_status: LedStatus,

    /// Round-trip latency of the most recent probe. `None` always means
    /// "unreachable as of the last probe"; a new reading fully replaces
    /// the previous one.
    pub latency_ms: Option<u32>,

    /// Single error surface. Replaced, never accumulated.
    pub error_message: Option<String>,

    // In-flight flags, independent of each other
    pub is_probing: bool,
    pub is_switching: bool,

    // Assistant panel state
    pub chat_messages: Vec<ChatMessage>,
    pub is_replying: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            device_address: DEFAULT_DEVICE_ADDRESS.to_string(),
            led_status: LedStatus::Unknown,
            latency_ms: None,
            error_message: None,
            is_probing: false,
            is_switching: false,
            chat_messages: vec![ChatMessage::assistant(ASSISTANT_GREETING)],
            is_replying: false,
        }
    }
}

impl Model {
    /// Set an error message, replacing any previous one.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: impl Into<String>,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
