// crates/flowbox-core/src/density.rs
//! Density-independent pixel conversion.

use crate::{FlowError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Device pixels per dp.
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(FlowError::InvalidDensity(density));
        }
        debug!("Display density set to {:.2}", density);
        Ok(Self { density })
    }

    /// Truncates toward zero, like an integer cast.
    pub fn dp_to_px(&self, dp: i32) -> i32 {
        (dp as f32 * self.density) as i32
    }
}
