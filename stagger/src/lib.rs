//! Stagger: staggered (masonry) column layout.
//!
//! Arranges a sequence of variable-height items into as many columns of a
//! desired width as fit the available space, always adding the next item to
//! the shortest column.
//!
//! # Usage
//!
//! ```
//! use stagger::{LayoutParameters, Size, StaggeredPanel, Tile};
//!
//! let params = LayoutParameters::new().column_spacing(10.0).row_spacing(10.0);
//! let mut panel = StaggeredPanel::new(params).unwrap();
//! let mut tiles = vec![Tile::new(250.0, 120.0), Tile::new(250.0, 80.0)];
//!
//! let desired = panel.measure(Size::new(800.0, 600.0), &mut tiles);
//! let arrangement = panel.arrange(desired, &mut tiles).unwrap();
//! assert_eq!(arrangement.placements.len(), 2);
//! ```

pub mod error;
pub mod layout;
pub mod primitives;

pub use error::{LayoutError, Result};
pub use layout::{
    Arrangement, ColumnLayout, HorizontalAlignment, LayoutCache, LayoutItem, LayoutParameters,
    Measurement, Padding, Placement, StaggeredLayoutEngine, StaggeredPanel, Tile,
};
pub use primitives::{Rect, Size};
