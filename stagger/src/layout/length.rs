//! Padding and alignment types.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

/// How the column block is positioned horizontally inside the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Columns start at the left padding edge.
    #[default]
    Left,
    /// Leftover width goes before the first column.
    Right,
    /// Leftover width is split evenly on both sides.
    Center,
    /// Like `Left`, but the gaps between columns are reserved from the
    /// reported width.
    Stretch,
}

/// Padding around the column block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Shrink a size by this padding. Each axis is clamped to zero; infinite
    /// axes stay infinite.
    pub fn deflate(&self, size: Size) -> Size {
        Size {
            width: (size.width - self.horizontal()).max(0.0),
            height: (size.height - self.vertical()).max(0.0),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidPadding { side, value });
            }
        }
        Ok(())
    }
}
