//! Conventional (first-order) entropy of gray levels

use sipp_core::{GrayImage, PixelSource};
use sipp_hist::{Quantize, gray_histogram};

use crate::EntropyResult;

/// Shannon entropy of a grayscale image's pixel values
///
/// Holds the 1-D histogram (256 bins for 8-bit, 65536 for 16-bit), the
/// entropy contribution of each gray level and an 8-bit image with each
/// pixel replaced by the scaled contribution of its gray level.
#[derive(Debug, Clone)]
pub struct ConventionalEntropy {
    histogram: Vec<u32>,
    bin_entropy: Vec<f64>,
    max_bin_entropy: f64,
    entropy: f64,
    image: GrayImage,
}

impl ConventionalEntropy {
    /// Compute the entropy and entropy image of `src`.
    ///
    /// A zero-sized source gives entropy 0 and an empty image.
    pub fn build<S: PixelSource + ?Sized>(src: &S) -> EntropyResult<Self> {
        let histogram = gray_histogram(src, 1)?;
        let (width, height) = (src.width(), src.height());
        let total = f64::from(width) * f64::from(height);

        let mut bin_entropy = vec![0.0; histogram.len()];
        let mut max_bin_entropy = 0.0f64;
        let mut entropy = 0.0;
        if total > 0.0 {
            for (e, &count) in bin_entropy.iter_mut().zip(&histogram) {
                if count == 0 {
                    continue;
                }
                let p = f64::from(count) / total;
                *e = -p * p.log2();
                entropy += *e;
                max_bin_entropy = max_bin_entropy.max(*e);
            }
        }

        let scale = if max_bin_entropy > 0.0 {
            255.0 / max_bin_entropy
        } else {
            0.0
        };
        let last = bin_entropy.len() - 1;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let v = (src.int_value(x, y).max(0) as usize).min(last);
                pixels.push(Quantize::Truncate.apply(bin_entropy[v] * scale));
            }
        }
        let image = GrayImage::from_bytes(width, height, pixels)?;
        tracing::debug!(width, height, entropy, "computed conventional entropy");

        Ok(Self {
            histogram,
            bin_entropy,
            max_bin_entropy,
            entropy,
            image,
        })
    }

    /// Entropy in bits per pixel
    #[inline]
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Gray-level histogram
    #[inline]
    pub fn histogram(&self) -> &[u32] {
        &self.histogram
    }

    /// Contribution of each gray level, 0 for levels that don't occur
    #[inline]
    pub fn bin_entropy(&self) -> &[f64] {
        &self.bin_entropy
    }

    #[inline]
    pub fn max_bin_entropy(&self) -> f64 {
        self.max_bin_entropy
    }

    /// Per-pixel entropy image, same size as the source
    #[inline]
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Entropy and entropy image
    pub fn into_parts(self) -> (f64, GrayImage) {
        (self.entropy, self.image)
    }
}

/// Entropy and per-pixel entropy image of `src`.
pub fn conventional_entropy<S: PixelSource + ?Sized>(src: &S) -> EntropyResult<(f64, GrayImage)> {
    Ok(ConventionalEntropy::build(src)?.into_parts())
}
