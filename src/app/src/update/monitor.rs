use crux_core::{render::render, Command};

use crate::commands::device::{device_url, ProbeOutcome};
use crate::events::{Event, MonitorEvent};
use crate::model::{Model, EMPTY_ADDRESS_ERROR};
use crate::{DeviceCmd, Effect};

/// Cadence of shell-sent [`MonitorEvent::ProbeTick`] events. The shell owns
/// the interval handle and must clear it on teardown.
pub const PROBE_INTERVAL_SECS: u32 = 10;

/// Timeout budget for a single probe. Shorter than the switch budget; an
/// unreachable device is a steady-state condition here, not an anomaly.
pub const PROBE_TIMEOUT_MS: u32 = 1_500;

pub(crate) const UNREACHABLE_ERROR: &str = "Device unreachable. Check IP or WiFi.";

/// Handle reachability probing events
pub fn handle(event: MonitorEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        MonitorEvent::ProbeTick => start_probe(model, true),
        MonitorEvent::ProbeRequested => start_probe(model, false),
        MonitorEvent::ProbeResponse { outcome, silent } => settle_probe(outcome, silent, model),
    }
}

/// Issue a probe against the device root endpoint.
///
/// `silent` decides whether a failure reaches the error surface: timer
/// ticks and the dependent post-switch refresh probe pass `true`, the ping
/// button passes `false`. Probes run unconditionally; an already in-flight
/// probe or switch does not block a new one, and whichever settles last
/// wins.
pub fn start_probe(model: &mut Model, silent: bool) -> Command<Effect, Event> {
    if model.device_address.trim().is_empty() {
        if silent {
            return render();
        }
        return model.set_error_and_render(EMPTY_ADDRESS_ERROR);
    }

    if !silent {
        model.clear_error();
    }
    model.is_probing = true;

    let url = device_url(&model.device_address, "/");
    Command::all([
        render(),
        DeviceCmd::probe(url, PROBE_TIMEOUT_MS)
            .build()
            .then_send(move |outcome| {
                Event::Monitor(MonitorEvent::ProbeResponse { outcome, silent })
            }),
    ])
}

fn settle_probe(outcome: ProbeOutcome, silent: bool, model: &mut Model) -> Command<Effect, Event> {
    model.is_probing = false;

    match outcome {
        ProbeOutcome::Reachable { latency_ms } => {
            model.latency_ms = Some(latency_ms);
            model.clear_error();
        }
        ProbeOutcome::Unreachable => {
            model.latency_ms = None;
            if silent {
                log::debug!("probe found device unreachable");
            } else {
                model.set_error(UNREACHABLE_ERROR);
            }
        }
    }

    render()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod probing {
        use super::*;

        #[test]
        fn tick_sets_probing_flag() {
            let mut model = Model::default();

            let _ = handle(MonitorEvent::ProbeTick, &mut model);

            assert!(model.is_probing);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn manual_probe_clears_previous_error() {
            let mut model = Model {
                error_message: Some("Device error: 500".to_string()),
                ..Default::default()
            };

            let _ = handle(MonitorEvent::ProbeRequested, &mut model);

            assert!(model.is_probing);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn tick_leaves_existing_error_visible() {
            let mut model = Model {
                error_message: Some("Device error: 500".to_string()),
                ..Default::default()
            };

            let _ = handle(MonitorEvent::ProbeTick, &mut model);

            assert_eq!(model.error_message.as_deref(), Some("Device error: 500"));
        }

        #[test]
        fn tick_with_empty_address_skips_quietly() {
            let mut model = Model {
                device_address: "   ".to_string(),
                ..Default::default()
            };

            let _ = handle(MonitorEvent::ProbeTick, &mut model);

            assert!(!model.is_probing);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn manual_probe_with_empty_address_errors() {
            let mut model = Model {
                device_address: String::new(),
                ..Default::default()
            };

            let _ = handle(MonitorEvent::ProbeRequested, &mut model);

            assert!(!model.is_probing);
            assert_eq!(model.error_message.as_deref(), Some(EMPTY_ADDRESS_ERROR));
        }
    }

    mod settlement {
        use super::*;
        use crate::types::LedStatus;

        #[test]
        fn reachable_stores_latency_and_clears_error() {
            let mut model = Model {
                is_probing: true,
                error_message: Some(UNREACHABLE_ERROR.to_string()),
                ..Default::default()
            };

            let _ = handle(
                MonitorEvent::ProbeResponse {
                    outcome: ProbeOutcome::Reachable { latency_ms: 40 },
                    silent: true,
                },
                &mut model,
            );

            assert!(!model.is_probing);
            assert_eq!(model.latency_ms, Some(40));
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn new_reading_replaces_previous_one() {
            let mut model = Model {
                latency_ms: Some(40),
                ..Default::default()
            };

            let _ = handle(
                MonitorEvent::ProbeResponse {
                    outcome: ProbeOutcome::Reachable { latency_ms: 95 },
                    silent: true,
                },
                &mut model,
            );

            assert_eq!(model.latency_ms, Some(95));
        }

        #[test]
        fn silent_unreachable_clears_latency_without_error() {
            let mut model = Model {
                latency_ms: Some(40),
                is_probing: true,
                ..Default::default()
            };

            let _ = handle(
                MonitorEvent::ProbeResponse {
                    outcome: ProbeOutcome::Unreachable,
                    silent: true,
                },
                &mut model,
            );

            assert!(!model.is_probing);
            assert_eq!(model.latency_ms, None);
            assert_eq!(model.error_message, None);
        }

        #[test]
        fn manual_unreachable_surfaces_error() {
            let mut model = Model::default();

            let _ = handle(
                MonitorEvent::ProbeResponse {
                    outcome: ProbeOutcome::Unreachable,
                    silent: false,
                },
                &mut model,
            );

            assert_eq!(model.latency_ms, None);
            assert_eq!(model.error_message.as_deref(), Some(UNREACHABLE_ERROR));
        }

        #[test]
        fn probe_never_touches_led_status() {
            let mut model = Model {
                led_status: LedStatus::On,
                ..Default::default()
            };

            let _ = handle(
                MonitorEvent::ProbeResponse {
                    outcome: ProbeOutcome::Unreachable,
                    silent: false,
                },
                &mut model,
            );

            assert_eq!(model.led_status, LedStatus::On);
        }
    }
}
