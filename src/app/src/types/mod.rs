//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - chat: Assistant panel types
//! - led: LED status and command types

pub mod chat;
pub mod led;

pub use chat::*;
pub use led::*;
