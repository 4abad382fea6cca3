//! Host-facing panel that owns layout parameters and the measure cache.
//!
//! Every setter moves the parameters to a new revision and drops the cached
//! measure result, so an `arrange` that is not preceded by a fresh `measure`
//! fails instead of placing items with an outdated column width.

use super::cache::LayoutCache;
use super::item::LayoutItem;
use super::length::{HorizontalAlignment, Padding};
use super::params::{LayoutParameters, validate_column_width, validate_spacing};
use super::staggered::{Arrangement, StaggeredLayoutEngine};
use crate::error::{LayoutError, Result};
use crate::primitives::Size;

#[derive(Debug, Clone, Default)]
pub struct StaggeredPanel {
    engine: StaggeredLayoutEngine,
    cache: Option<LayoutCache>,
}

impl StaggeredPanel {
    pub fn new(params: LayoutParameters) -> Result<Self> {
        Ok(Self {
            engine: StaggeredLayoutEngine::new(params)?,
            cache: None,
        })
    }

    pub fn params(&self) -> &LayoutParameters {
        self.engine.params()
    }

    /// Cache from the last measure, if it is still valid.
    pub fn cache(&self) -> Option<&LayoutCache> {
        self.cache.as_ref()
    }

    /// Whether a measure has run since the last change.
    pub fn is_measure_valid(&self) -> bool {
        self.cache.is_some()
    }

    /// Drop the cached measure without changing parameters, e.g. after the
    /// host added or removed items.
    pub fn invalidate_measure(&mut self) {
        if self.cache.take().is_some() {
            tracing::debug!("staggered panel: measure invalidated");
        }
    }

    pub fn set_params(&mut self, params: LayoutParameters) -> Result<()> {
        params.validate()?;
        self.apply(params);
        Ok(())
    }

    pub fn set_desired_column_width(&mut self, width: f32) -> Result<()> {
        validate_column_width(width)?;
        let params = self.params().desired_column_width(width);
        self.apply(params);
        Ok(())
    }

    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        padding.validate()?;
        let params = self.params().padding_custom(padding);
        self.apply(params);
        Ok(())
    }

    pub fn set_column_spacing(&mut self, spacing: f32) -> Result<()> {
        validate_spacing("column_spacing", spacing)?;
        let params = self.params().column_spacing(spacing);
        self.apply(params);
        Ok(())
    }

    pub fn set_row_spacing(&mut self, spacing: f32) -> Result<()> {
        validate_spacing("row_spacing", spacing)?;
        let params = self.params().row_spacing(spacing);
        self.apply(params);
        Ok(())
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        let params = self.params().horizontal_alignment(alignment);
        self.apply(params);
    }

    fn apply(&mut self, params: LayoutParameters) {
        self.engine.reconfigure(params);
        self.cache = None;
        tracing::debug!(
            "staggered panel: parameters changed (revision {})",
            self.engine.revision()
        );
    }

    /// Measure pass. Stores the column width for the following arrange.
    pub fn measure<I: LayoutItem>(&mut self, available: Size, items: &mut [I]) -> Size {
        let measurement = self.engine.measure(available, items);
        self.cache = Some(measurement.cache);
        measurement.size
    }

    /// Arrange pass. Fails with `NotMeasured` if no measure has run since
    /// the last change.
    pub fn arrange<I: LayoutItem>(&self, final_size: Size, items: &mut [I]) -> Result<Arrangement> {
        let cache = self.cache.ok_or(LayoutError::NotMeasured)?;
        self.engine.arrange(final_size, items, &cache)
    }
}
