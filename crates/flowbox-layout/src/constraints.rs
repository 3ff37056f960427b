// crates/flowbox-layout/src/constraints.rs

use flowbox_core::{Axis, EdgeInsets, LayoutParams, MeasureMode, MeasureSpec, Size};

/// The pair of specs a container is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintBox {
    pub width: MeasureSpec,
    pub height: MeasureSpec,
}

impl ConstraintBox {
    pub fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    pub fn with_fixed_size(width: i32, height: i32) -> Self {
        Self::new(MeasureSpec::exactly(width), MeasureSpec::exactly(height))
    }

    pub fn with_max_size(width: i32, height: i32) -> Self {
        Self::new(MeasureSpec::at_most(width), MeasureSpec::at_most(height))
    }

    pub fn spec(&self, axis: Axis) -> MeasureSpec {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn is_width_constrained(&self) -> bool {
        self.width.mode != MeasureMode::Unspecified
    }

    /// Width that a line's content may fill before it wraps.
    ///
    /// The spec size is treated as the content area, so padding is not
    /// taken out of it.
    pub fn available_width(&self) -> i32 {
        if self.is_width_constrained() {
            self.width.size
        } else {
            i32::MAX
        }
    }

    pub fn child_specs(&self, padding: EdgeInsets, params: LayoutParams) -> (MeasureSpec, MeasureSpec) {
        (
            MeasureSpec::for_child(self.width, padding.horizontal(), params.width),
            MeasureSpec::for_child(self.height, padding.vertical(), params.height),
        )
    }

    /// Final container size: the exact spec size or the content size, plus padding.
    pub fn resolve(&self, needed: Size, padding: EdgeInsets) -> Size {
        Size::new(
            resolve_axis(self.spec(Axis::Horizontal), needed.width, padding.along(Axis::Horizontal)),
            resolve_axis(self.spec(Axis::Vertical), needed.height, padding.along(Axis::Vertical)),
        )
    }
}

fn resolve_axis(spec: MeasureSpec, needed: i32, padding: i32) -> i32 {
    let content = if spec.is_exact() { spec.size } else { needed };
    content.saturating_add(padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowbox_core::ChildDimension;

    #[test]
    fn test_available_width() {
        assert_eq!(ConstraintBox::with_fixed_size(300, 100).available_width(), 300);
        assert_eq!(ConstraintBox::with_max_size(300, 100).available_width(), 300);
        assert_eq!(ConstraintBox::default().available_width(), i32::MAX);
    }

    #[test]
    fn test_child_specs_subtract_padding() {
        let constraints = ConstraintBox::new(MeasureSpec::exactly(300), MeasureSpec::at_most(200));
        let params = LayoutParams::new(ChildDimension::MatchParent, ChildDimension::WrapContent);
        let (width, height) = constraints.child_specs(EdgeInsets::uniform(10), params);

        assert_eq!(width, MeasureSpec::exactly(280));
        assert_eq!(height, MeasureSpec::at_most(180));
    }

    #[test]
    fn test_resolve_adds_padding_in_every_mode() {
        let constraints = ConstraintBox::new(MeasureSpec::at_most(300), MeasureSpec::exactly(500));
        let size = constraints.resolve(Size::new(120, 40), EdgeInsets::uniform(5));
        assert_eq!(size, Size::new(130, 510));

        let exact = ConstraintBox::with_fixed_size(300, 500);
        assert_eq!(exact.resolve(Size::new(120, 40), EdgeInsets::uniform(10)), Size::new(320, 520));
        assert_eq!(exact.spec(Axis::Vertical), MeasureSpec::exactly(500));
    }

    #[test]
    fn test_resolve_saturates() {
        let constraints = ConstraintBox::default();
        let size = constraints.resolve(Size::new(i32::MAX - 1, 0), EdgeInsets::uniform(10));
        assert_eq!(size, Size::new(i32::MAX, 20));
    }
}
