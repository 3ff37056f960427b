// crates/flowbox-core/src/measure_spec.rs
//! Size constraints handed from a container to its children.

use crate::params::ChildDimension;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// The size is dictated by the parent.
    Exactly,
    /// The child may be as large as it wants up to the size.
    AtMost,
    /// No constraint; the size is only a hint.
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasureSpec {
    #[serde(default)]
    pub size: i32,
    #[serde(default)]
    pub mode: MeasureMode,
}

impl MeasureSpec {
    pub const fn new(size: i32, mode: MeasureMode) -> Self {
        Self { size, mode }
    }

    pub const fn exactly(size: i32) -> Self {
        Self::new(size, MeasureMode::Exactly)
    }

    pub const fn at_most(size: i32) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    pub const fn unspecified() -> Self {
        Self::new(0, MeasureMode::Unspecified)
    }

    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exactly
    }

    /// Derives the spec a child is measured with.
    ///
    /// `padding` is the container's padding along the same axis. A child
    /// that declares a fixed dimension always gets exactly that; otherwise
    /// the space left after padding is passed down with a mode picked from
    /// the parent's mode and whether the child fills or wraps.
    pub fn for_child(parent: MeasureSpec, padding: i32, dimension: ChildDimension) -> MeasureSpec {
        let size = (parent.size - padding).max(0);

        match (parent.mode, dimension) {
            (_, ChildDimension::Exact(px)) => MeasureSpec::exactly(px.max(0)),
            (MeasureMode::Exactly, ChildDimension::MatchParent) => MeasureSpec::exactly(size),
            (MeasureMode::Exactly, ChildDimension::WrapContent) => MeasureSpec::at_most(size),
            (MeasureMode::AtMost, _) => MeasureSpec::at_most(size),
            (MeasureMode::Unspecified, _) => MeasureSpec::new(size, MeasureMode::Unspecified),
        }
    }

    /// The size a leaf should report given its content size.
    pub fn resolve(&self, content: i32) -> i32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => content.min(self.size),
            MeasureMode::Unspecified => content,
        }
    }
}

impl fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            MeasureMode::Exactly => write!(f, "EXACTLY {}", self.size),
            MeasureMode::AtMost => write!(f, "AT_MOST {}", self.size),
            MeasureMode::Unspecified => write!(f, "UNSPECIFIED {}", self.size),
        }
    }
}
