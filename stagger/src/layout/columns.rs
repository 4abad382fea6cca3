//! Column sizing and the shortest-column assignment shared by both passes.

/// Result of fitting columns into a width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Width of each column.
    pub column_width: f32,
    /// Number of columns, always at least one.
    pub columns: usize,
    /// Width of the column block including spacing between columns.
    pub total_width: f32,
    /// Width the columns were fitted into. An unbounded input collapses to
    /// `total_width`.
    pub width: f32,
    /// Whether the column count was reduced because the block overflowed.
    pub overflowed: bool,
}

impl ColumnLayout {
    /// Size columns for the measure pass: the column width is the desired
    /// width, narrowed to the available width when that is smaller.
    pub fn compute(effective_width: f32, desired_column_width: f32, column_spacing: f32) -> Self {
        let effective_width = effective_width.max(0.0);
        let column_width = if effective_width.is_infinite() {
            desired_column_width
        } else {
            desired_column_width.min(effective_width)
        };
        Self::fit(effective_width, column_width, column_spacing)
    }

    /// Fit columns of a known width into `width`. The arrange pass calls this
    /// directly with the column width produced by measure.
    pub fn fit(width: f32, column_width: f32, column_spacing: f32) -> Self {
        let mut columns = if width.is_infinite() || column_width <= 0.0 {
            1
        } else {
            ((width / column_width).floor() as usize).max(1)
        };

        let mut total_width = block_width(column_width, columns, column_spacing);
        let mut resolved_width = width;
        let mut overflowed = false;

        if total_width > width {
            // One decrement only. A single column is kept even if it overflows.
            if columns > 1 {
                columns -= 1;
                total_width = block_width(column_width, columns, column_spacing);
                overflowed = true;
            }
            if total_width > width {
                tracing::warn!(
                    "column block ({}) still wider than available width ({})",
                    total_width,
                    width
                );
            }
        } else if width.is_infinite() {
            resolved_width = total_width;
        }

        Self {
            column_width,
            columns,
            total_width,
            width: resolved_width,
            overflowed,
        }
    }
}

#[inline]
fn block_width(column_width: f32, columns: usize, column_spacing: f32) -> f32 {
    column_width + columns.saturating_sub(1) as f32 * (column_width + column_spacing)
}

/// Running state of one column during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnState {
    /// Accumulated height including row spacing between stacked items.
    pub height: f32,
    /// Accumulated height of the items alone.
    pub content_height: f32,
    /// Items placed so far.
    pub items: usize,
}

/// Per-pass column accumulators.
#[derive(Debug, Clone)]
pub struct ColumnTracker {
    columns: Vec<ColumnState>,
    row_spacing: f32,
}

impl ColumnTracker {
    pub fn new(columns: usize, row_spacing: f32) -> Self {
        Self {
            columns: vec![ColumnState::default(); columns.max(1)],
            row_spacing,
        }
    }

    /// Index of the shortest column. Ties go to the lowest index.
    pub fn shortest(&self) -> usize {
        let mut index = 0;
        let mut height = self.columns[0].height;
        for (i, column) in self.columns.iter().enumerate().skip(1) {
            if column.height < height {
                index = i;
                height = column.height;
            }
        }
        index
    }

    /// Stack an item of `item_height` onto `column` and return its vertical
    /// offset from the top of the column.
    pub fn push(&mut self, column: usize, item_height: f32) -> f32 {
        let state = &mut self.columns[column];
        let offset = state.content_height + self.row_spacing * state.items as f32;
        let gap = if state.items > 0 { self.row_spacing } else { 0.0 };
        state.height += item_height + gap;
        state.content_height += item_height;
        state.items += 1;
        offset
    }

    /// Tallest column height, row spacing included.
    pub fn max_height(&self) -> f32 {
        self.columns.iter().map(|c| c.height).fold(0.0, f32::max)
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }
}
