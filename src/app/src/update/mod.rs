pub(crate) mod assistant;
pub(crate) mod control;
pub(crate) mod monitor;
mod ui;

pub use control::SWITCH_TIMEOUT_MS;
pub use monitor::{PROBE_INTERVAL_SECS, PROBE_TIMEOUT_MS};

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization. The first probe arrives with the first shell tick;
        // mounting alone does not force one.
        Event::Initialize => render(),

        Event::Monitor(event) => monitor::handle(event, model),
        Event::Control(event) => control::handle(event, model),
        Event::Assistant(event) => assistant::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
