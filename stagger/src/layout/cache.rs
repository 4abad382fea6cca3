//! State carried from the measure pass to the arrange pass.
//!
//! Arrange sizes its columns from the width measure settled on rather than
//! from the desired column width, so the two passes agree on the column
//! count. The cache makes that hand-off an explicit value.

/// Column width produced by a measure pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCache {
    column_width: f32,
    columns: usize,
    revision: u64,
}

impl LayoutCache {
    pub(crate) fn new(column_width: f32, columns: usize, revision: u64) -> Self {
        Self {
            column_width,
            columns,
            revision,
        }
    }

    /// Width of each column as measured.
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    /// Number of columns the measure pass used.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Parameter revision the measure pass ran against.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
