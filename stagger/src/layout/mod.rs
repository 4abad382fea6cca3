//! Staggered column layout.
//!
//! Items of varying height are dealt into fixed-width columns, each going to
//! whichever column is currently shortest.
//!
//! # Architecture
//!
//! ```text
//! LayoutParameters -> StaggeredLayoutEngine::measure() -> LayoutCache
//!                                          arrange(cache) -> Rect per item
//! ```
//!
//! `StaggeredPanel` wraps the engine for hosts that change parameters
//! between passes.

pub mod cache;
pub mod columns;
pub mod item;
pub mod length;
pub mod panel;
pub mod params;
pub mod staggered;

pub use cache::LayoutCache;
pub use columns::{ColumnLayout, ColumnState, ColumnTracker};
pub use item::{LayoutItem, Tile};
pub use length::{HorizontalAlignment, Padding};
pub use panel::StaggeredPanel;
pub use params::{DEFAULT_COLUMN_WIDTH, LayoutParameters};
pub use staggered::{Arrangement, Measurement, Placement, StaggeredLayoutEngine};
