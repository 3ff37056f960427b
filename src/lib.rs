// src/lib.rs
//! Scene-driven harness around the flow layout engine.

pub mod report;
pub mod scene;

pub use report::*;
pub use scene::*;
