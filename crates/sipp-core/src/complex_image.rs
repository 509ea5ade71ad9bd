//! ComplexImage - images whose pixels are complex numbers
//!
//! Gradient fields are stored as complex images: the real part carries one
//! finite difference and the imaginary part the other. The extrema of both
//! parts and the largest modulus are computed once, when the image is
//! created, and never change afterwards.

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::gray::{GrayImage, PixelSource};

/// Extreme values of a complex image
///
/// All fields are 0 for an empty image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extrema {
    /// Smallest real part
    pub min_re: f64,
    /// Largest real part
    pub max_re: f64,
    /// Smallest imaginary part
    pub min_im: f64,
    /// Largest imaginary part
    pub max_im: f64,
    /// Largest modulus
    pub max_modulus: f64,
}

impl Extrema {
    /// Compute extrema over a sequence of samples in one pass.
    pub fn scan<'a>(samples: impl IntoIterator<Item = &'a Complex>) -> Self {
        let mut tracker = ExtremaTracker::new();
        for &c in samples {
            tracker.update(c);
        }
        tracker.finish()
    }
}

/// Running extrema, updated one sample at a time.
///
/// The squared modulus is tracked and the square root is taken once, in
/// [`finish`](Self::finish).
#[derive(Debug, Clone, Copy)]
pub struct ExtremaTracker {
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
    max_mod_sqr: f64,
    seen: bool,
}

impl ExtremaTracker {
    pub fn new() -> Self {
        Self {
            min_re: f64::INFINITY,
            max_re: f64::NEG_INFINITY,
            min_im: f64::INFINITY,
            max_im: f64::NEG_INFINITY,
            max_mod_sqr: 0.0,
            seen: false,
        }
    }

    #[inline]
    pub fn update(&mut self, c: Complex) {
        self.seen = true;
        self.min_re = self.min_re.min(c.re);
        self.max_re = self.max_re.max(c.re);
        self.min_im = self.min_im.min(c.im);
        self.max_im = self.max_im.max(c.im);
        self.max_mod_sqr = self.max_mod_sqr.max(c.norm_sqr());
    }

    /// Extrema of every sample seen; all 0 if there were none.
    pub fn finish(self) -> Extrema {
        if !self.seen {
            return Extrema::default();
        }
        Extrema {
            min_re: self.min_re,
            max_re: self.max_re,
            min_im: self.min_im,
            max_im: self.max_im,
            max_modulus: self.max_mod_sqr.sqrt(),
        }
    }
}

impl Default for ExtremaTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Complex-valued image, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexImage {
    width: u32,
    height: u32,
    data: Vec<Complex>,
    extrema: Extrema,
}

impl ComplexImage {
    /// Wrap an array of complex samples.
    ///
    /// The height is `data.len() / width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data` is not a whole number of
    /// rows, or if `width` is 0 while `data` is not empty.
    pub fn from_vec(width: u32, data: Vec<Complex>) -> Result<Self> {
        let height = if width == 0 {
            if !data.is_empty() {
                return Err(Error::InvalidParameter(
                    "zero width with non-empty data".to_string(),
                ));
            }
            0
        } else {
            if data.len() % width as usize != 0 {
                return Err(Error::InvalidParameter(format!(
                    "data length {} is not a multiple of width {width}",
                    data.len()
                )));
            }
            (data.len() / width as usize) as u32
        };
        let extrema = Extrema::scan(&data);
        Ok(Self {
            width,
            height,
            data,
            extrema,
        })
    }

    /// Build a `width x height` image from a per-pixel generator, called in
    /// row-major order. Extrema are updated as each sample is produced.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Complex) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        let mut tracker = ExtremaTracker::new();
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                tracker.update(c);
                data.push(c);
            }
        }
        Self {
            width,
            height,
            data,
            extrema: tracker.finish(),
        }
    }

    /// Convert a grayscale source to a complex image, multiplying each pixel
    /// by `(-1)^(x+y)`.
    ///
    /// This centres the spectrum of a subsequent Fourier transform.
    pub fn to_shifted<S: PixelSource + ?Sized>(src: &S) -> Self {
        Self::from_fn(src.width(), src.height(), |x, y| {
            let sign = if (x + y) % 2 == 0 { 1.0 } else { -1.0 };
            Complex::new(src.value(x, y) * sign, 0.0)
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples in row-major order
    #[inline]
    pub fn data(&self) -> &[Complex] {
        &self.data
    }

    /// Extrema computed at construction
    #[inline]
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    /// Get the sample at (x, y), or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<Complex> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Render the real and imaginary parts as two 8-bit images.
    ///
    /// Each part is mapped with `(v - min) * 255 / (max - min)` and
    /// truncated. A range narrower than 1 is treated as 1, so a constant
    /// part renders as all zeros.
    pub fn render(&self) -> (GrayImage, GrayImage) {
        let e = &self.extrema;
        let re_scale = 255.0 / (e.max_re - e.min_re).max(1.0);
        let im_scale = 255.0 / (e.max_im - e.min_im).max(1.0);

        let re_pix: Vec<u8> = self
            .data
            .iter()
            .map(|c| ((c.re - e.min_re) * re_scale) as u8)
            .collect();
        let im_pix: Vec<u8> = self
            .data
            .iter()
            .map(|c| ((c.im - e.min_im) * im_scale) as u8)
            .collect();

        (
            GrayImage::from_raw_bytes(self.width, self.height, re_pix),
            GrayImage::from_raw_bytes(self.width, self.height, im_pix),
        )
    }
}
