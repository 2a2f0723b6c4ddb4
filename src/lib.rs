//! Pointer-driven range controls bound to a time-based media source.
//!
//! [`controls`] holds the headless core: the scrubber state machine, the
//! media and volume bindings and their helpers. The remaining modules host
//! those controls in a terminal transport bar playing a local file.

pub mod app;
pub mod cli;
pub mod controls;
pub mod data;
pub mod playback;
pub mod ui;
pub mod utils;
