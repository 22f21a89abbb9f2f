//! Core polytype library (content, sequencing, reveal engine, config).

pub mod config;
pub mod content;
pub mod interrupt;
pub mod logging;
pub mod panel;
pub mod renderer;
pub mod reveal;
pub mod sequencer;
pub mod surface;
