//! Type generation target for the web shell.
//!
//! The interesting part is `build.rs`, which traces the core's public
//! surface and emits TypeScript bindings under `generated/typescript`.
