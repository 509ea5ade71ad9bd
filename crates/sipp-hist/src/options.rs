//! Histogram construction options

use crate::{HistError, HistResult};

/// Options controlling storage selection and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramOptions {
    /// Excursions at or below this always use dense storage, even when a
    /// sparse map would be smaller. Default: 1024.
    pub sparse_threshold: u32,
    /// Renderings larger than this on either side are box-filtered down by
    /// an integer factor. Default: 4096.
    pub max_render_extent: u32,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            sparse_threshold: 1024,
            max_render_extent: 4096,
        }
    }
}

impl HistogramOptions {
    /// Check the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidParameters`] if `max_render_extent` is 0.
    pub fn validate(&self) -> HistResult<()> {
        if self.max_render_extent == 0 {
            return Err(HistError::InvalidParameters(
                "max_render_extent must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
