// crates/flowbox-core/src/lib.rs
pub mod geometry;
pub mod measure_spec;
pub mod params;
pub mod element;
pub mod density;

pub use geometry::*;
pub use measure_spec::*;
pub use params::*;
pub use element::*;
pub use density::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid display density: {0}")]
    InvalidDensity(f32),

    #[error("Negative {axis} spacing: {value}dp")]
    NegativeSpacing { axis: Axis, value: i32 },

    #[error("Stale measurement: measured {measured} children, {current} present now")]
    StaleMeasurement { measured: usize, current: usize },

    #[error("Child index {index} out of range for {len} children")]
    ChildOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FlowError>;
