//! Staggered column layout.
//!
//! Items are dealt in order into the currently shortest column, producing
//! columns with uneven bottoms. Layout runs in two passes:
//!
//! ```text
//! measure(available) -> desired size + LayoutCache
//! arrange(final, cache) -> one Rect per item
//! ```
//!
//! Both passes run the same shortest-column scan, so an item lands in the
//! same column in each as long as the column count agrees.

use super::cache::LayoutCache;
use super::columns::{ColumnLayout, ColumnTracker};
use super::item::LayoutItem;
use super::length::HorizontalAlignment;
use super::params::LayoutParameters;
use crate::error::{LayoutError, Result};
use crate::primitives::{Rect, Size};

/// Output of a measure pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Size the panel wants, padding excluded.
    pub size: Size,
    /// Hand-off to the arrange pass.
    pub cache: LayoutCache,
    /// Column chosen for each item, in item order.
    pub assignments: Vec<usize>,
    /// Final height of each column, row spacing included.
    pub column_heights: Vec<f32>,
}

/// Final position of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the item in the input slice.
    pub index: usize,
    pub column: usize,
    pub rect: Rect,
}

/// Output of an arrange pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    /// The final size the panel was given.
    pub size: Size,
    pub placements: Vec<Placement>,
    /// Summed item heights per column, without row spacing.
    pub column_heights: Vec<f32>,
}

/// The two-pass staggered layout over a validated set of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggeredLayoutEngine {
    params: LayoutParameters,
    revision: u64,
}

impl StaggeredLayoutEngine {
    /// Create an engine, rejecting out-of-range parameters.
    pub fn new(params: LayoutParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, revision: 0 })
    }

    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    /// Parameter revision. Caches from other revisions are rejected by
    /// `arrange`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the parameters and move to a new revision.
    pub(crate) fn reconfigure(&mut self, params: LayoutParameters) {
        self.params = params;
        self.revision += 1;
    }

    /// Fit columns into an effective (padding-free) width.
    pub fn column_layout(&self, effective_width: f32) -> ColumnLayout {
        ColumnLayout::compute(
            effective_width,
            self.params.desired_column_width,
            self.params.column_spacing,
        )
    }

    /// Measure pass: size columns, measure every item against its column and
    /// report the width used and the tallest column.
    pub fn measure<I: LayoutItem>(&self, available: Size, items: &mut [I]) -> Measurement {
        let params = &self.params;
        if available.width < params.padding.horizontal()
            || available.height < params.padding.vertical()
        {
            tracing::warn!(
                "padding {:?} exceeds available size {:?}, clamping to zero",
                params.padding,
                available
            );
        }
        let effective = params.padding.deflate(available);

        let layout = self.column_layout(effective.width);
        let columns = layout.columns;
        let column_width = layout.column_width;
        let mut width = layout.width;

        // Stretch reserves the gaps from the width budget; the column width
        // stays as computed so arrange recounts the same columns.
        if params.horizontal_alignment == HorizontalAlignment::Stretch {
            width = (width - (columns - 1) as f32 * params.column_spacing).max(0.0);
        }

        tracing::debug!(
            "measure: available={:?} columns={} column_width={} items={}",
            available,
            columns,
            column_width,
            items.len()
        );

        let cache = LayoutCache::new(column_width, columns, self.revision);

        if items.is_empty() {
            return Measurement {
                size: Size::ZERO,
                cache,
                assignments: Vec::new(),
                column_heights: Vec::new(),
            };
        }

        let constraint = Size::new(column_width, effective.height);
        let mut tracker = ColumnTracker::new(columns, params.row_spacing);
        let mut assignments = Vec::with_capacity(items.len());

        for item in items.iter_mut() {
            let column = tracker.shortest();
            let size = item.measure(constraint);
            tracker.push(column, size.height);
            assignments.push(column);
        }

        let size = Size::new(width, tracker.max_height());
        tracing::debug!("measure: desired={:?}", size);

        Measurement {
            size,
            cache,
            assignments,
            column_heights: tracker.columns().iter().map(|c| c.height).collect(),
        }
    }

    /// Arrange pass: place every item at its column offset using the sizes
    /// recorded during measure.
    ///
    /// The column count comes from `final_size.width` and the cached column
    /// width, not the desired column width.
    pub fn arrange<I: LayoutItem>(
        &self,
        final_size: Size,
        items: &mut [I],
        cache: &LayoutCache,
    ) -> Result<Arrangement> {
        if cache.revision() != self.revision {
            return Err(LayoutError::StaleCache {
                cache: cache.revision(),
                current: self.revision,
            });
        }

        let params = &self.params;
        let layout = ColumnLayout::fit(final_size.width, cache.column_width(), params.column_spacing);
        if layout.columns != cache.columns() {
            tracing::warn!(
                "arrange fits {} columns into {} but measure used {}",
                layout.columns,
                final_size.width,
                cache.columns()
            );
        }

        let mut left = params.padding.left;
        match params.horizontal_alignment {
            HorizontalAlignment::Right => left += final_size.width - layout.total_width,
            HorizontalAlignment::Center => left += (final_size.width - layout.total_width) / 2.0,
            HorizontalAlignment::Left | HorizontalAlignment::Stretch => {}
        }
        let top = params.padding.top;
        let stride = layout.column_width + params.column_spacing;

        tracing::debug!(
            "arrange: final={:?} columns={} total_width={} left={}",
            final_size,
            layout.columns,
            layout.total_width,
            left
        );

        let mut tracker = ColumnTracker::new(layout.columns, params.row_spacing);
        let mut placements = Vec::with_capacity(items.len());

        for (index, item) in items.iter_mut().enumerate() {
            let column = tracker.shortest();
            let desired = item.desired_size();
            let offset = tracker.push(column, desired.height);

            let rect = Rect::new(
                left + column as f32 * stride,
                top + offset,
                desired.width,
                desired.height,
            );
            tracing::trace!("item {} -> column {} at {:?}", index, column, rect);
            item.arrange(rect);
            placements.push(Placement { index, column, rect });
        }

        Ok(Arrangement {
            size: final_size,
            placements,
            column_heights: tracker.columns().iter().map(|c| c.content_height).collect(),
        })
    }
}

impl Default for StaggeredLayoutEngine {
    fn default() -> Self {
        Self {
            params: LayoutParameters::default(),
            revision: 0,
        }
    }
}
