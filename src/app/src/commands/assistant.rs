//! Assistant collaborator definitions.
//!
//! The setup assistant is an external collaborator: the shell forwards the
//! prompt to its text-generation backend and resolves with whatever text
//! comes back. The call always resolves - on any internal failure the shell
//! answers with [`GUIDANCE_FALLBACK`] instead of rejecting, so no error
//! variant exists here.

use crux_core::{capability::Operation, Request};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;

/// System instruction the shell hands to its text-generation backend.
pub const GUIDANCE_SYSTEM_INSTRUCTION: &str = "You are an expert IoT and Embedded Systems Engineer. \
Your goal is to help users set up their ESP8266 to be controlled by a web application over a local network. \
Always provide clear, technical advice. \
If they ask for code, ensure it uses the ESP8266WebServer library and handles CORS correctly (Access-Control-Allow-Origin: *). \
Explain things like IP addresses, local networks, and how to find the ESP8266's IP in the Serial Monitor.";

/// Reply the shell resolves with when the backend call fails.
pub const GUIDANCE_FALLBACK: &str = "I'm sorry, I encountered an error while processing your request. Please check your connection.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantOperation {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuidanceReply {
    pub text: String,
}

impl Operation for AssistantOperation {
    type Output = GuidanceReply;
}

/// Command-based assistant API
pub struct Assistant<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Assistant<Effect, Event>
where
    Effect: Send + From<Request<AssistantOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the collaborator for setup guidance
    pub fn guidance(prompt: impl Into<String>) -> RequestBuilder<Effect, Event, AssistantOperation> {
        RequestBuilder::new(AssistantOperation {
            prompt: prompt.into(),
        })
    }
}
