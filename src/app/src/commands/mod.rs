//! Shell operation definitions.
//!
//! These types define the interface between the Core and the Shell. Each
//! operation is a typed request the shell executes; its typed output resumes
//! the core as an event.

pub mod assistant;
pub mod device;

use crux_core::{capability::Operation, command, Command, Request};
use std::marker::PhantomData;

/// Builds a shell request for any [`Operation`] into a Command.
#[must_use]
pub struct RequestBuilder<Effect, Event, Op> {
    operation: Op,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event, Op> RequestBuilder<Effect, Event, Op>
where
    Effect: Send + From<Request<Op>> + 'static,
    Event: Send + 'static,
    Op: Operation,
{
    pub(crate) fn new(operation: Op) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = Op::Output>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
