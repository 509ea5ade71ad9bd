//! The full analysis pipeline
//!
//! [`analyze`] runs every stage on one source image: thumbnail, gradient,
//! joint histogram, delentropy and conventional entropy. Each requested
//! rendering is handed to an [`ImageSink`] under a fixed label as soon as it
//! is produced.

use std::sync::Arc;

use sipp_core::{GrayImage, ImageSink, PixelSource};
use sipp_entropy::{ConventionalEntropy, DelentropyCalculator};
use sipp_filter::{GradientField, GradientKernel};
use sipp_hist::{HistogramOptions, HistogramStorage, StorageKind};
use sipp_transform::thumbnail;

use crate::AnalysisResult;

/// Sink labels, in the order renderings are produced
pub mod labels {
    pub const THUMBNAIL: &str = "thumb";
    pub const GRADIENT_REAL: &str = "grad_real";
    pub const GRADIENT_IMAG: &str = "grad_imag";
    pub const HISTOGRAM: &str = "hist";
    pub const HISTOGRAM_SUPPRESSED: &str = "hist_sup";
    pub const HISTOGRAM_DELENTROPY: &str = "hist_delent";
    pub const DELENTROPY: &str = "delent";
    pub const ENTROPY: &str = "conv_ent";
}

/// Which renderings to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderings {
    /// 150x150 thumbnail of the source
    pub thumbnail: bool,
    /// Real and imaginary gradient planes
    pub gradient: bool,
    /// Joint histogram
    pub histogram: bool,
    /// Joint histogram weighted by distance from the center
    pub histogram_suppressed: bool,
    /// Entropy contribution of each histogram bin
    pub histogram_delentropy: bool,
    /// Entropy contribution of each gradient pixel
    pub delentropy: bool,
    /// Conventional entropy of each source pixel
    pub entropy: bool,
}

impl Renderings {
    /// Every rendering
    pub const fn all() -> Self {
        Self {
            thumbnail: true,
            gradient: true,
            histogram: true,
            histogram_suppressed: true,
            histogram_delentropy: true,
            delentropy: true,
            entropy: true,
        }
    }
}

/// Options for [`analyze`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisOptions {
    /// Gradient kernel, finite difference by default
    pub kernel: GradientKernel,
    /// Histogram storage and rendering options
    pub histogram: HistogramOptions,
    /// Cap histogram counts at 255 instead of rescaling
    pub clip_histogram: bool,
    /// Renderings to write to the sink
    pub renderings: Renderings,
}

/// Summary of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Half the aggregate delentropy, one half per gradient component
    pub delentropy: f64,
    /// Sum of all bin contributions
    pub aggregate_delentropy: f64,
    /// Largest single-bin contribution
    pub max_entropy_contribution: f64,
    /// First-order entropy of the source gray levels
    pub conventional_entropy: f64,
    /// Gradient field width and height
    pub gradient_size: (u32, u32),
    /// Histogram backing store
    pub storage: StorageKind,
    /// Histogram width and height in bins
    pub histogram_size: (u32, u32),
    /// Largest bin count
    pub max_bin_count: u32,
    /// Number of distinct nonzero bin counts
    pub distinct_values: usize,
}

/// Run the pipeline on `src`, writing requested renderings to `sink`.
///
/// Renderings without pixels, such as the gradient images of a source under
/// 2x2, are not passed to the sink.
///
/// # Errors
///
/// Returns an error if the options are invalid, if a rendering fails or if
/// the sink rejects an image.
pub fn analyze<S: PixelSource + ?Sized>(
    src: &S,
    options: &AnalysisOptions,
    sink: &mut dyn ImageSink,
) -> AnalysisResult<AnalysisReport> {
    let want = options.renderings;

    if want.thumbnail {
        emit(sink, labels::THUMBNAIL, &thumbnail(src)?)?;
    }

    let field = Arc::new(GradientField::build(src, &options.kernel));
    if want.gradient {
        let (re, im) = field.render_parts();
        emit(sink, labels::GRADIENT_REAL, &re)?;
        emit(sink, labels::GRADIENT_IMAG, &im)?;
    }

    let hist = HistogramStorage::build(Arc::clone(&field), &options.histogram)?;
    if want.histogram {
        emit(sink, labels::HISTOGRAM, &hist.render(options.clip_histogram)?)?;
    }
    if want.histogram_suppressed {
        emit(sink, labels::HISTOGRAM_SUPPRESSED, &hist.render_suppressed()?)?;
    }

    let dent = DelentropyCalculator::build(&hist);
    if want.histogram_delentropy {
        emit(sink, labels::HISTOGRAM_DELENTROPY, &dent.histogram_entropy_image()?)?;
    }
    if want.delentropy {
        emit(sink, labels::DELENTROPY, &dent.gradient_entropy_image()?)?;
    }

    let conventional = ConventionalEntropy::build(src)?;
    if want.entropy {
        emit(sink, labels::ENTROPY, conventional.image())?;
    }

    let aggregate = dent.aggregate_delentropy();
    let report = AnalysisReport {
        delentropy: aggregate / 2.0,
        aggregate_delentropy: aggregate,
        max_entropy_contribution: dent.max_entropy_contribution(),
        conventional_entropy: conventional.entropy(),
        gradient_size: (field.width(), field.height()),
        storage: hist.kind(),
        histogram_size: hist.size(),
        max_bin_count: hist.max_bin_count(),
        distinct_values: hist.distinct_values().len(),
    };
    tracing::debug!(?report, "analysis complete");
    Ok(report)
}

fn emit(sink: &mut dyn ImageSink, label: &str, image: &GrayImage) -> AnalysisResult<()> {
    if image.is_empty() {
        tracing::debug!(label, "skipping empty rendering");
        return Ok(());
    }
    sink.write_gray(label, image)?;
    Ok(())
}
