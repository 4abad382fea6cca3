//! The capability a child must provide to take part in layout.

use crate::primitives::{Rect, Size};

/// A child element placed by the staggered layout.
///
/// Hosts own their items; the engine only asks them for a size and hands
/// back a rectangle. `measure` is called once per measure pass and the
/// result must be readable through `desired_size` until the next measure.
pub trait LayoutItem {
    /// Compute and remember the preferred size within `constraint`.
    fn measure(&mut self, constraint: Size) -> Size;

    /// Size recorded by the last `measure`.
    fn desired_size(&self) -> Size;

    /// Accept the final placement.
    fn arrange(&mut self, rect: Rect);
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn measure(&mut self, constraint: Size) -> Size {
        (**self).measure(constraint)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &mut T {
    fn measure(&mut self, constraint: Size) -> Size {
        (**self).measure(constraint)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect)
    }
}

/// A box with a fixed preferred size.
///
/// The preferred size is reported as-is regardless of the constraint, so a
/// tile wider than its column overflows it rather than shrinking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tile {
    preferred: Size,
    desired: Size,
    bounds: Option<Rect>,
}

impl Tile {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            desired: Size::ZERO,
            bounds: None,
        }
    }

    /// Placement from the last arrange pass, if any.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}

impl LayoutItem for Tile {
    fn measure(&mut self, _constraint: Size) -> Size {
        self.desired = self.preferred;
        self.desired
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.bounds = Some(rect);
    }
}
