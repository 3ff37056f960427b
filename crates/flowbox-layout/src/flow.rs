// crates/flowbox-layout/src/flow.rs
//! Greedy left-to-right line packing and the matching placement pass.

use crate::constraints::ConstraintBox;
use crate::{LayoutResult, Placement};
use flowbox_core::{Axis, DisplayMetrics, EdgeInsets, FlowChild, FlowError, Rect, Result, Size};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_HORIZONTAL_SPACING_DP: i32 = 16;
pub const DEFAULT_VERTICAL_SPACING_DP: i32 = 8;

/// Container settings, spacing in dp and padding in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub horizontal_spacing_dp: i32,
    pub vertical_spacing_dp: i32,
    pub padding: EdgeInsets,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing_dp: DEFAULT_HORIZONTAL_SPACING_DP,
            vertical_spacing_dp: DEFAULT_VERTICAL_SPACING_DP,
            padding: EdgeInsets::ZERO,
        }
    }
}

impl FlowConfig {
    pub fn spacing(&self, metrics: &DisplayMetrics) -> Result<FlowSpacing> {
        if self.horizontal_spacing_dp < 0 {
            return Err(FlowError::NegativeSpacing {
                axis: Axis::Horizontal,
                value: self.horizontal_spacing_dp,
            });
        }
        if self.vertical_spacing_dp < 0 {
            return Err(FlowError::NegativeSpacing {
                axis: Axis::Vertical,
                value: self.vertical_spacing_dp,
            });
        }

        Ok(FlowSpacing::new(
            metrics.dp_to_px(self.horizontal_spacing_dp),
            metrics.dp_to_px(self.vertical_spacing_dp),
        ))
    }
}

/// Spacing resolved to device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowSpacing {
    /// Between items on a line.
    pub horizontal: i32,
    /// Between lines.
    pub vertical: i32,
}

impl FlowSpacing {
    pub const fn new(horizontal: i32, vertical: i32) -> Self {
        Self { horizontal, vertical }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    /// Position in the container's child list.
    pub index: usize,
    pub size: Size,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLine {
    pub items: Vec<LineItem>,
    /// Tallest item on the line.
    pub height: i32,
}

impl FlowLine {
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.index)
    }

    /// Item widths plus the spacing between them.
    pub fn content_width(&self, spacing: FlowSpacing) -> i32 {
        let widths: i32 = self.items.iter().map(|item| item.size.width).sum();
        let gaps = self.items.len().saturating_sub(1) as i32;
        widths + gaps * spacing.horizontal
    }
}

/// Output of the measurement pass and sole input of the placement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    pub lines: Vec<FlowLine>,
    /// The container's own resolved size, padding included.
    pub size: Size,
    /// Per child, whether it took part in layout.
    pub laid_out: Vec<bool>,
}

impl Measurement {
    pub fn child_count(&self) -> usize {
        self.laid_out.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn item_count(&self) -> usize {
        self.lines.iter().map(|line| line.items.len()).sum()
    }

    /// Child indices in line order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().flat_map(FlowLine::indices)
    }

    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.items.iter().any(|item| item.index == index))
    }
}

#[derive(Default)]
struct LineBuilder {
    items: Vec<LineItem>,
    used: i32,
    height: i32,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A lone item never wraps, however wide it is.
    fn would_overflow(&self, width: i32, spacing: i32, available: i32) -> bool {
        !self.is_empty() && self.used.saturating_add(spacing).saturating_add(width) > available
    }

    fn push(&mut self, index: usize, size: Size, spacing: i32) {
        self.items.push(LineItem { index, size });
        self.used = self.used.saturating_add(size.width).saturating_add(spacing);
        self.height = self.height.max(size.height);
    }

    fn close(&mut self) -> FlowLine {
        let line = FlowLine {
            items: std::mem::take(&mut self.items),
            height: self.height,
        };
        self.used = 0;
        self.height = 0;
        line
    }
}

/// Measures every child that takes space and packs them into lines.
pub fn measure<C: FlowChild>(
    constraints: ConstraintBox,
    padding: EdgeInsets,
    spacing: FlowSpacing,
    children: &mut [C],
) -> Measurement {
    let available = constraints.available_width();
    let mut lines = Vec::new();
    let mut laid_out = Vec::with_capacity(children.len());
    let mut current = LineBuilder::default();
    let mut needed = Size::ZERO;

    for (index, child) in children.iter_mut().enumerate() {
        let takes_space = child.visibility().takes_space();
        laid_out.push(takes_space);
        if !takes_space {
            trace!("Child {} is gone, skipping", index);
            continue;
        }

        let (width_spec, height_spec) = constraints.child_specs(padding, child.layout_params());
        let size = child.measure(width_spec, height_spec);
        trace!("Child {} measured {} under [{}, {}]", index, size, width_spec, height_spec);

        if current.would_overflow(size.width, spacing.horizontal, available) {
            needed.width = needed.width.max(current.used.saturating_add(spacing.horizontal));
            let line = current.close();
            needed.height = needed.height.saturating_add(line.height).saturating_add(spacing.vertical);
            trace!("Line {} closed with {} items before child {}", lines.len(), line.items.len(), index);
            lines.push(line);
        }

        current.push(index, size, spacing.horizontal);
    }

    if !current.is_empty() {
        needed.width = needed.width.max(current.used.saturating_add(spacing.horizontal));
        let line = current.close();
        needed.height = needed.height.saturating_add(line.height);
        lines.push(line);
    }

    Measurement {
        lines,
        size: constraints.resolve(needed, padding),
        laid_out,
    }
}

/// Assigns each measured child its rect, centring it vertically in its line.
///
/// Rects are relative to the container. Nothing is clamped to `frame`.
pub fn place(
    measurement: &Measurement,
    frame: Rect,
    padding: EdgeInsets,
    spacing: FlowSpacing,
) -> LayoutResult {
    let bounds = Rect::from_origin_size(IVec2::ZERO, frame.size());
    let mut placements = Vec::with_capacity(measurement.item_count());
    let mut cursor = IVec2::new(padding.left, padding.top);

    for line in &measurement.lines {
        for item in &line.items {
            let offset = (line.height - item.size.height).max(0) / 2;
            let rect = Rect::from_origin_size(cursor + IVec2::new(0, offset), item.size);
            if !bounds.contains(&rect) {
                trace!("Child {} at {} overflows container {}", item.index, rect, bounds);
            }

            placements.push(Placement { index: item.index, rect });
            cursor.x = rect.right.saturating_add(spacing.horizontal);
        }

        cursor.x = padding.left;
        cursor.y = cursor.y.saturating_add(line.height).saturating_add(spacing.vertical);
    }

    LayoutResult { placements }
}
