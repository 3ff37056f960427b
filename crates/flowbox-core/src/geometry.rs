// crates/flowbox-core/src/geometry.rs
//! Integer pixel geometry shared by the layout passes and their hosts.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// A measured size in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn to_ivec2(self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An edge-based rectangle, right and bottom exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_origin_size(origin: IVec2, size: Size) -> Self {
        let end = origin.saturating_add(size.to_ivec2());
        Self::new(origin.x, origin.y, end.x, end.y)
    }

    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.left, self.top)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.left, self.top, self.right, self.bottom)
    }
}

/// Container padding in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets { left: 0, top: 0, right: 0, bottom: 0 };

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(IVec2::new(10, 20), Size::new(30, 40));
        assert_eq!(rect, Rect::new(10, 20, 40, 60));
        assert_eq!(rect.size(), Size::new(30, 40));
        assert_eq!(rect.origin(), IVec2::new(10, 20));
    }

    #[test]
    fn test_rect_from_origin_size_saturates() {
        let rect = Rect::from_origin_size(IVec2::new(i32::MAX - 5, 0), Size::new(100, 10));
        assert_eq!(rect, Rect::new(i32::MAX - 5, 0, i32::MAX, 10));
    }

    #[test]
    fn test_rect_contains_and_union() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 90, 90);
        let spill = Rect::new(50, 50, 150, 80);

        assert!(outer.contains(&inner));
        assert!(!outer.contains(&spill));
        assert_eq!(outer.union(&spill), Rect::new(0, 0, 150, 100));
    }

    #[test]
    fn test_edge_insets_sums() {
        let padding = EdgeInsets::new(1, 2, 3, 4);
        assert_eq!(padding.horizontal(), 4);
        assert_eq!(padding.vertical(), 6);
        assert_eq!(padding.along(Axis::Vertical), 6);
    }

    #[test]
    fn test_edge_insets_partial_json() {
        let padding: EdgeInsets = serde_json::from_str(r#"{"left": 8}"#).unwrap();
        assert_eq!(padding, EdgeInsets::new(8, 0, 0, 0));
    }
}
