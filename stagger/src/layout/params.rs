//! Layout configuration.
//!
//! `LayoutParameters` is a plain value passed into both passes. It
//! deserializes with defaults for any missing field, so a host can store a
//! partial configuration such as `{"column_spacing": 8}`.

use serde::{Deserialize, Serialize};

use super::length::{HorizontalAlignment, Padding};
use crate::error::{LayoutError, Result};

/// Default desired column width in logical pixels.
pub const DEFAULT_COLUMN_WIDTH: f32 = 250.0;

/// Inputs to a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParameters {
    /// Preferred column width. Columns shrink below this only when the
    /// available width is narrower.
    pub desired_column_width: f32,
    /// Padding around the column block.
    pub padding: Padding,
    /// Horizontal gap between adjacent columns.
    pub column_spacing: f32,
    /// Vertical gap between items stacked in the same column.
    pub row_spacing: f32,
    /// Horizontal placement of the column block.
    pub horizontal_alignment: HorizontalAlignment,
}

impl LayoutParameters {
    /// Parameters with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the desired column width.
    pub fn desired_column_width(mut self, width: f32) -> Self {
        self.desired_column_width = width;
        self
    }

    /// Set uniform padding.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Padding::all(padding);
        self
    }

    /// Set custom padding.
    pub fn padding_custom(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the gap between columns.
    pub fn column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set the gap between items in a column.
    pub fn row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the horizontal alignment.
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        validate_column_width(self.desired_column_width)?;
        validate_spacing("column_spacing", self.column_spacing)?;
        validate_spacing("row_spacing", self.row_spacing)?;
        self.padding.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            desired_column_width: DEFAULT_COLUMN_WIDTH,
            padding: Padding::default(),
            column_spacing: 0.0,
            row_spacing: 0.0,
            horizontal_alignment: HorizontalAlignment::Left,
        }
    }
}

pub(crate) fn validate_column_width(width: f32) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidColumnWidth(width))
    }
}

pub(crate) fn validate_spacing(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSpacing { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LayoutParameters::default();
        assert_eq!(params.desired_column_width, 250.0);
        assert_eq!(params.padding, Padding::default());
        assert_eq!(params.column_spacing, 0.0);
        assert_eq!(params.row_spacing, 0.0);
        assert_eq!(params.horizontal_alignment, HorizontalAlignment::Left);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_column_width() {
        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let params = LayoutParameters::new().desired_column_width(width);
            assert!(
                matches!(params.validate(), Err(LayoutError::InvalidColumnWidth(_))),
                "width {} should be rejected",
                width
            );
        }
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let params = LayoutParameters::new().row_spacing(-2.0);
        match params.validate() {
            Err(LayoutError::InvalidSpacing { field, .. }) => assert_eq!(field, "row_spacing"),
            other => panic!("expected InvalidSpacing, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let params = LayoutParameters::from_json(
            r#"{"column_spacing": 8, "horizontal_alignment": "center", "padding": {"left": 4}}"#,
        )
        .unwrap();
        assert_eq!(params.desired_column_width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(params.column_spacing, 8.0);
        assert_eq!(params.horizontal_alignment, HorizontalAlignment::Center);
        assert_eq!(params.padding, Padding::new(4.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_json_validates() {
        let err = LayoutParameters::from_json(r#"{"desired_column_width": 0}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidColumnWidth(_)));

        let err = LayoutParameters::from_json("{not json").unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let params = LayoutParameters::new()
            .desired_column_width(180.0)
            .padding(12.0)
            .horizontal_alignment(HorizontalAlignment::Right);
        let json = params.to_json().unwrap();
        assert_eq!(LayoutParameters::from_json(&json).unwrap(), params);
    }
}
