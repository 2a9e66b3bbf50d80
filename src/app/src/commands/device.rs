//! Device command definitions.
//!
//! Two operations reach the ESP8266, both plain GETs with their own timeout
//! budget. The shell ties one abort handle to each request, cancels it when
//! the budget expires, and releases the handle on settlement so a stale
//! timer can never cancel a later request.
//!
//! The probe is sent in no-cors mode: the root endpoint of stock device
//! firmware often lacks CORS headers, so the response may be opaque. Any
//! settled exchange, readable or not, proves reachability. The switch
//! endpoints (`/on`, `/off`) are sent in cors mode and MUST answer with
//! `Access-Control-Allow-Origin: *` on the device side; that is a deployment
//! requirement of the firmware, not something this core can enforce.

use crux_core::{capability::Operation, Request};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;

/// Reachability check against the device root endpoint.
///
/// The shell measures wall-clock time from just before issuing the request
/// to just after it settles and reports it as `latency_ms` on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeOperation {
    pub url: String,
    pub timeout_ms: u32,
}

/// What a probe found out. Timeout and network-level failure both collapse
/// to `Unreachable`; the probe cannot tell them apart and does not need to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable { latency_ms: u32 },
    Unreachable,
}

impl Operation for ProbeOperation {
    type Output = ProbeOutcome;
}

/// State-changing request against `/on` or `/off`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwitchOperation {
    pub url: String,
    pub timeout_ms: u32,
}

/// How a switch request settled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Response received and marked successful (2xx).
    Accepted,
    /// Response received but not successful.
    Rejected { code: u16 },
    /// Cancelled when the timeout budget expired.
    TimedOut,
    /// Any other network-level failure.
    NetworkFailure,
}

impl Operation for SwitchOperation {
    type Output = SwitchOutcome;
}

/// Command-based device API
pub struct Device<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Device<Effect, Event>
where
    Effect: Send + From<Request<ProbeOperation>> + From<Request<SwitchOperation>> + 'static,
    Event: Send + 'static,
{
    /// Probe the device root endpoint for reachability
    pub fn probe(
        url: impl Into<String>,
        timeout_ms: u32,
    ) -> RequestBuilder<Effect, Event, ProbeOperation> {
        RequestBuilder::new(ProbeOperation {
            url: url.into(),
            timeout_ms,
        })
    }

    /// Send an LED switch command
    pub fn switch(
        url: impl Into<String>,
        timeout_ms: u32,
    ) -> RequestBuilder<Effect, Event, SwitchOperation> {
        RequestBuilder::new(SwitchOperation {
            url: url.into(),
            timeout_ms,
        })
    }
}

/// Constructs a device URL from the user-entered address.
///
/// The address is free text; it is trimmed, an accidentally pasted scheme is
/// stripped, and the request goes out over plain HTTP (the device speaks
/// nothing else).
///
/// # Example
/// ```
/// use esp_control_ui_core::device_url;
/// assert_eq!(device_url("192.168.1.100", "/on"), "http://192.168.1.100/on");
/// assert_eq!(device_url(" http://192.168.1.100/ ", "/"), "http://192.168.1.100/");
/// ```
pub fn device_url(address: &str, path: &str) -> String {
    let address = address.trim();
    let address = address.strip_prefix("http://").unwrap_or(address);
    let address = address.trim_end_matches('/');
    format!("http://{address}{path}")
}
