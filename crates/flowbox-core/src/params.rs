// crates/flowbox-core/src/params.rs

use serde::{Deserialize, Serialize};

/// How a child declares its size along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildDimension {
    /// Fixed size in device pixels.
    Exact(i32),
    /// Fill the space the container makes available.
    MatchParent,
    /// Size to content.
    #[default]
    WrapContent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub width: ChildDimension,
    pub height: ChildDimension,
}

impl LayoutParams {
    pub const fn new(width: ChildDimension, height: ChildDimension) -> Self {
        Self { width, height }
    }

    pub const fn fixed(width: i32, height: i32) -> Self {
        Self::new(ChildDimension::Exact(width), ChildDimension::Exact(height))
    }

    pub const fn wrap_content() -> Self {
        Self::new(ChildDimension::WrapContent, ChildDimension::WrapContent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Visible,
    /// Not drawn, but still measured and given space.
    Invisible,
    /// Removed from layout entirely.
    Gone,
}

impl Visibility {
    pub fn takes_space(&self) -> bool {
        !matches!(self, Visibility::Gone)
    }
}
