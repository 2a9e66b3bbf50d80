pub mod commands;
pub mod events;
pub mod firmware;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::assistant::{
        AssistantOperation, GuidanceReply, GUIDANCE_FALLBACK, GUIDANCE_SYSTEM_INSTRUCTION,
    },
    commands::device::{device_url, ProbeOperation, ProbeOutcome, SwitchOperation, SwitchOutcome},
    events::Event,
    firmware::SETUP_SKETCH,
    model::{Model, DEFAULT_DEVICE_ADDRESS},
    types::*,
    update::{PROBE_INTERVAL_SECS, PROBE_TIMEOUT_MS, SWITCH_TIMEOUT_MS},
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Probe(ProbeOperation),
    Switch(SwitchOperation),
    Assistant(AssistantOperation),
}

pub type DeviceCmd = commands::device::Device<Effect, Event>;
pub type AssistantCmd = commands::assistant::Assistant<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
