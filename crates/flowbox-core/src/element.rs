// crates/flowbox-core/src/element.rs

use crate::geometry::{Rect, Size};
use crate::measure_spec::MeasureSpec;
use crate::params::{LayoutParams, Visibility};

/// What a container needs from each child: self-measurement and placement.
///
/// Implemented by whatever element type the host toolkit provides. Layout
/// engines stay generic over this trait and never see concrete elements.
pub trait FlowChild {
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams::default()
    }

    /// Reports the child's size for the given constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Commits the child's final bounds in the container's coordinates.
    fn place(&mut self, rect: Rect);
}

impl<T: FlowChild + ?Sized> FlowChild for &mut T {
    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn layout_params(&self) -> LayoutParams {
        (**self).layout_params()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect)
    }
}

impl<T: FlowChild + ?Sized> FlowChild for Box<T> {
    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn layout_params(&self) -> LayoutParams {
        (**self).layout_params()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        measured: u32,
        placed: Option<Rect>,
    }

    impl FlowChild for Probe {
        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            self.measured += 1;
            Size::new(width.resolve(10), height.resolve(10))
        }

        fn place(&mut self, rect: Rect) {
            self.placed = Some(rect);
        }
    }

    #[test]
    fn test_boxed_trait_object_forwards() {
        let mut child: Box<dyn FlowChild> = Box::new(Probe { measured: 0, placed: None });
        assert_eq!(child.visibility(), Visibility::Visible);
        assert_eq!(child.layout_params(), LayoutParams::wrap_content());

        let size = child.measure(MeasureSpec::exactly(40), MeasureSpec::unspecified());
        assert_eq!(size, Size::new(40, 10));
        child.place(Rect::new(0, 0, 40, 10));
    }

    fn drive<C: FlowChild>(mut child: C) {
        child.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        child.place(Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut probe = Probe { measured: 0, placed: None };
        drive(&mut probe);
        assert_eq!(probe.measured, 1);
        assert_eq!(probe.placed, Some(Rect::new(1, 2, 3, 4)));
    }
}
