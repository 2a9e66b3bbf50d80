use crux_core::{render::render, Command};

use crate::events::{AssistantEvent, Event};
use crate::model::Model;
use crate::types::ChatMessage;
use crate::{AssistantCmd, Effect};

/// Handle assistant chat panel events
pub fn handle(event: AssistantEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AssistantEvent::Ask { prompt } => {
            let prompt = prompt.trim().to_string();
            if prompt.is_empty() || model.is_replying {
                return Command::done();
            }

            model.chat_messages.push(ChatMessage::user(prompt.clone()));
            model.is_replying = true;

            Command::all([
                render(),
                AssistantCmd::guidance(prompt).build().then_send(|reply| {
                    Event::Assistant(AssistantEvent::GuidanceResponse { text: reply.text })
                }),
            ])
        }

        AssistantEvent::GuidanceResponse { text } => {
            model.is_replying = false;
            model.chat_messages.push(ChatMessage::assistant(text));
            render()
        }
    }
}
