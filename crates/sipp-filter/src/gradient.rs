//! Finite-difference gradient fields
//!
//! A [`GradientField`] is one pixel narrower and shorter than its source.
//! Shrinking the output avoids wrapping or extending the source at the
//! border, either of which would bias the gradient statistics.
//!
//! The field is immutable. Its extrema and the largest modulus are computed
//! once, during construction.

use crate::FilterResult;
use crate::kernel::GradientKernel;
use sipp_core::{Complex, ComplexImage, Extrema, GrayImage, PixelSource};

/// Complex-valued gradient of a grayscale image
///
/// # Examples
///
/// ```
/// use sipp_core::{Complex, GrayImage};
/// use sipp_filter::GradientField;
///
/// let src = GrayImage::from_bytes(2, 2, vec![1, 2, 5, 6]).unwrap();
/// let field = GradientField::from_source(&src);
/// assert_eq!(field.samples(), &[Complex::new(5.0, -3.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    image: ComplexImage,
}

impl GradientField {
    /// Build the gradient of `src` with the given 2x2 kernel.
    ///
    /// The output is `(width - 1) x (height - 1)`. A source narrower or
    /// shorter than 2 pixels yields an empty field.
    pub fn build<S: PixelSource + ?Sized>(src: &S, kernel: &GradientKernel) -> Self {
        let src_w = src.width();
        let src_h = src.height();
        if src_w < 2 || src_h < 2 {
            tracing::debug!(src_w, src_h, "source too small, empty gradient field");
            return Self::empty();
        }

        let width = src_w - 1;
        let height = src_h - 1;
        let image = ComplexImage::from_fn(width, height, |x, y| {
            kernel.apply(
                src.value(x, y),
                src.value(x + 1, y),
                src.value(x, y + 1),
                src.value(x + 1, y + 1),
            )
        });
        let field = Self { image };
        tracing::debug!(
            width,
            height,
            max_modulus = field.max_modulus(),
            "built gradient field"
        );
        field
    }

    /// Build the gradient of `src` with the default finite-difference kernel.
    pub fn from_source<S: PixelSource + ?Sized>(src: &S) -> Self {
        Self::build(src, &GradientKernel::default())
    }

    /// Wrap an existing row-major sample array.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is not a whole number of rows of
    /// `width`.
    pub fn from_samples(width: u32, samples: Vec<Complex>) -> FilterResult<Self> {
        Ok(Self {
            image: ComplexImage::from_vec(width, samples)?,
        })
    }

    fn empty() -> Self {
        Self {
            image: ComplexImage::from_fn(0, 0, |_, _| Complex::ZERO),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of gradient samples
    #[inline]
    pub fn len(&self) -> usize {
        self.image.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    /// Samples in row-major order
    #[inline]
    pub fn samples(&self) -> &[Complex] {
        self.image.data()
    }

    /// Extrema of both parts; all 0 for an empty field.
    #[inline]
    pub fn extrema(&self) -> Extrema {
        self.image.extrema()
    }

    /// Largest modulus over all samples
    #[inline]
    pub fn max_modulus(&self) -> f64 {
        self.image.extrema().max_modulus
    }

    /// The underlying complex image
    pub fn as_complex_image(&self) -> &ComplexImage {
        &self.image
    }

    /// Render the real and imaginary parts as two 8-bit images.
    pub fn render_parts(&self) -> (GrayImage, GrayImage) {
        self.image.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipp_core::GrayDepth;

    #[test]
    fn test_too_small_source_gives_empty_field() {
        for (w, h) in [(0, 0), (1, 5), (5, 1), (1, 1)] {
            let src = GrayImage::new(w, h, GrayDepth::Bit8);
            let field = GradientField::from_source(&src);
            assert!(field.is_empty());
            assert_eq!(field.extrema(), Extrema::default());
        }
    }

    #[test]
    fn test_flat_source_has_zero_gradient() {
        let src = GrayImage::from_bytes(3, 3, vec![9; 9]).unwrap();
        let field = GradientField::from_source(&src);
        assert_eq!((field.width(), field.height()), (2, 2));
        assert!(field.samples().iter().all(|c| c.norm_sqr() == 0.0));
        assert_eq!(field.max_modulus(), 0.0);
    }

    #[test]
    fn test_extrema_follow_samples() {
        let src = GrayImage::from_bytes(3, 3, vec![0, 0, 0, 0, 9, 0, 0, 0, 0]).unwrap();
        let field = GradientField::from_source(&src);
        assert_eq!(
            field.samples(),
            &[
                Complex::new(9.0, 0.0),
                Complex::new(0.0, -9.0),
                Complex::new(0.0, 9.0),
                Complex::new(-9.0, 0.0),
            ]
        );
        let e = field.extrema();
        assert_eq!((e.min_re, e.max_re, e.min_im, e.max_im), (-9.0, 9.0, -9.0, 9.0));
        assert_eq!(e.max_modulus, 9.0);
        assert_eq!(e, Extrema::scan(field.samples()));
    }

    #[test]
    fn test_from_samples_rejects_ragged() {
        assert!(GradientField::from_samples(2, vec![Complex::ZERO; 3]).is_err());
        let field = GradientField::from_samples(2, vec![Complex::new(3.0, 4.0); 4]).unwrap();
        assert_eq!(field.height(), 2);
        assert_eq!(field.max_modulus(), 5.0);
    }
}
