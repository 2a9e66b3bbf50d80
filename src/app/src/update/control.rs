use crux_core::{render::render, Command};

use crate::commands::device::{device_url, SwitchOutcome};
use crate::events::{ControlEvent, Event};
use crate::model::{Model, EMPTY_ADDRESS_ERROR};
use crate::types::LedCommand;
use crate::update_field;
use crate::{DeviceCmd, Effect};

use super::monitor;

/// Timeout budget for a switch command. Longer than the probe budget; the
/// user explicitly asked for this one.
pub const SWITCH_TIMEOUT_MS: u32 = 3_500;

pub(crate) const SWITCH_TIMEOUT_ERROR: &str = "Timeout. Is the ESP8266 still connected?";
pub(crate) const SWITCH_NETWORK_ERROR: &str =
    "Connection failed. Please verify the ESP IP address.";

/// Handle device address edits and LED switch events
pub fn handle(event: ControlEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // An address edit alone forces no re-probe; the next tick reads the
        // new address.
        ControlEvent::SetAddress { address } => update_field!(model.device_address, address),

        ControlEvent::Switch { command } => start_switch(command, model),

        ControlEvent::SwitchResponse { command, outcome } => {
            settle_switch(command, outcome, model)
        }
    }
}

/// Issue a switch command.
///
/// The shell is expected to disable re-entrant dispatch on `is_switching`;
/// the dispatcher itself does not queue or serialize. Concurrent calls both
/// run and the store reflects whichever settles last.
fn start_switch(command: LedCommand, model: &mut Model) -> Command<Effect, Event> {
    if model.device_address.trim().is_empty() {
        return model.set_error_and_render(EMPTY_ADDRESS_ERROR);
    }

    model.is_switching = true;
    model.clear_error();

    let url = device_url(&model.device_address, command.path());
    Command::all([
        render(),
        DeviceCmd::switch(url, SWITCH_TIMEOUT_MS)
            .build()
            .then_send(move |outcome| {
                Event::Control(ControlEvent::SwitchResponse { command, outcome })
            }),
    ])
}

fn settle_switch(
    command: LedCommand,
    outcome: SwitchOutcome,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.is_switching = false;

    match outcome {
        SwitchOutcome::Accepted => {
            model.led_status = command.status();
            model.clear_error();
            // Refresh latency with a single dependent probe, issued only now
            // that the command has settled. Its failure must not roll back
            // led_status; it may clear the latency reading.
            monitor::start_probe(model, true)
        }

        // led_status stays untouched on every failure path; a failed "on"
        // does not mean the device is off.
        SwitchOutcome::Rejected { code } => {
            log::warn!("device rejected {command:?} with HTTP {code}");
            model.set_error_and_render(format!("Device error: {code}"))
        }

        SwitchOutcome::TimedOut => model.set_error_and_render(SWITCH_TIMEOUT_ERROR),

        SwitchOutcome::NetworkFailure => model.set_error_and_render(SWITCH_NETWORK_ERROR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LedStatus;

    mod dispatch {
        use super::*;

        #[test]
        fn switch_sets_in_flight_and_clears_error() {
            let mut model = Model {
                error_message: Some("stale".to_string()),
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::Switch {
                    command: LedCommand::On,
                },
                &mut model,
            );

            assert!(model.is_switching);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn switch_with_empty_address_fails_fast() {
            let mut model = Model {
                device_address: String::new(),
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::Switch {
                    command: LedCommand::Off,
                },
                &mut model,
            );

            assert!(!model.is_switching);
            assert_eq!(model.error_message.as_deref(), Some(EMPTY_ADDRESS_ERROR));
        }

        #[test]
        fn set_address_updates_model() {
            let mut model = Model::default();

            let _ = handle(
                ControlEvent::SetAddress {
                    address: "10.0.0.42".to_string(),
                },
                &mut model,
            );

            assert_eq!(model.device_address, "10.0.0.42");
            assert!(!model.is_probing);
        }
    }

    mod settlement {
        use super::*;

        #[test]
        fn accepted_switch_sets_status_and_issues_refresh_probe() {
            let mut model = Model {
                is_switching: true,
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::SwitchResponse {
                    command: LedCommand::On,
                    outcome: SwitchOutcome::Accepted,
                },
                &mut model,
            );

            assert!(!model.is_switching);
            assert_eq!(model.led_status, LedStatus::On);
            assert_eq!(model.error_message, None);
            // the dependent probe is in flight
            assert!(model.is_probing);
        }

        #[test]
        fn accepted_switch_clears_prior_error() {
            // Idempotent re-send: already ON, device accepts again.
            let mut model = Model {
                led_status: LedStatus::On,
                error_message: Some(SWITCH_TIMEOUT_ERROR.to_string()),
                is_switching: true,
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::SwitchResponse {
                    command: LedCommand::On,
                    outcome: SwitchOutcome::Accepted,
                },
                &mut model,
            );

            assert_eq!(model.led_status, LedStatus::On);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn rejected_switch_keeps_status_and_names_the_code() {
            let mut model = Model {
                is_switching: true,
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::SwitchResponse {
                    command: LedCommand::On,
                    outcome: SwitchOutcome::Rejected { code: 500 },
                },
                &mut model,
            );

            assert!(!model.is_switching);
            assert_eq!(model.led_status, LedStatus::Unknown);
            assert_eq!(model.error_message.as_deref(), Some("Device error: 500"));
            assert!(!model.is_probing);
        }

        #[test]
        fn timed_out_switch_uses_timeout_specific_message() {
            let mut model = Model {
                led_status: LedStatus::On,
                is_switching: true,
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::SwitchResponse {
                    command: LedCommand::Off,
                    outcome: SwitchOutcome::TimedOut,
                },
                &mut model,
            );

            assert_eq!(model.led_status, LedStatus::On);
            assert_eq!(model.error_message.as_deref(), Some(SWITCH_TIMEOUT_ERROR));
        }

        #[test]
        fn network_failure_uses_generic_message() {
            let mut model = Model {
                is_switching: true,
                ..Default::default()
            };

            let _ = handle(
                ControlEvent::SwitchResponse {
                    command: LedCommand::Off,
                    outcome: SwitchOutcome::NetworkFailure,
                },
                &mut model,
            );

            assert_eq!(model.led_status, LedStatus::Unknown);
            assert_eq!(model.error_message.as_deref(), Some(SWITCH_NETWORK_ERROR));
        }
    }
}
