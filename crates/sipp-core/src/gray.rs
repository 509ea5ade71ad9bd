//! Gray - 8-bit and 16-bit grayscale images
//!
//! `GrayImage` is the only raster type the analysis pipeline consumes or
//! produces. Source images arrive as 8- or 16-bit grayscale; every rendering
//! leaves as 8-bit grayscale.
//!
//! Two small capabilities decouple the analysis code from concrete storage:
//!
//! - [`PixelSource`] - anything that can report its size, depth and the
//!   intensity at a pixel
//! - [`ImageSink`] - anything that accepts labelled 8-bit renderings
//!
//! # Memory layout
//!
//! Samples are stored row-major with no padding. The pixel at (x, y) is at
//! index `y * width + x`. Unlike most image containers, zero-sized images are
//! allowed: a degenerate input must produce an empty result rather than an
//! error.

use crate::error::{Error, Result};

/// Grayscale sample depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum GrayDepth {
    /// 8-bit grayscale
    Bit8 = 8,
    /// 16-bit grayscale
    Bit16 = 16,
}

impl GrayDepth {
    /// Create `GrayDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 8 or 16.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(GrayDepth::Bit8),
            16 => Ok(GrayDepth::Bit16),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// 8 or 16.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Largest sample value at this depth (255 or 65535).
    pub fn max_value(self) -> u32 {
        (1u32 << self.bits()) - 1
    }

    /// Number of bins in a full intensity histogram at this depth.
    pub fn histogram_size(self) -> usize {
        1usize << self.bits()
    }
}

/// Read access to grayscale intensities.
///
/// Coordinates passed to [`int_value`](PixelSource::int_value) and
/// [`value`](PixelSource::value) must lie inside `width() x height()`;
/// implementations may panic otherwise.
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Sample depth
    fn depth(&self) -> GrayDepth;

    /// Intensity at (x, y) as an integer.
    fn int_value(&self, x: u32, y: u32) -> i32;

    /// Intensity at (x, y) as a float.
    fn value(&self, x: u32, y: u32) -> f64 {
        f64::from(self.int_value(x, y))
    }
}

/// Receiver for labelled 8-bit renderings.
///
/// The label is a short name such as `"hist"` or `"delent"`; how it maps to
/// a file name (or anything else) is up to the sink.
pub trait ImageSink {
    /// Accept one rendering.
    fn write_gray(&mut self, label: &str, image: &GrayImage) -> Result<()>;
}

/// Collects renderings in memory, in the order they were written.
impl ImageSink for Vec<(String, GrayImage)> {
    fn write_gray(&mut self, label: &str, image: &GrayImage) -> Result<()> {
        self.push((label.to_string(), image.clone()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Samples {
    Bit8(Vec<u8>),
    Bit16(Vec<u16>),
}

/// Grayscale image
///
/// # Examples
///
/// ```
/// use sipp_core::{GrayDepth, GrayImage};
///
/// let mut img = GrayImage::new(4, 3, GrayDepth::Bit8);
/// img.set_pixel(1, 2, 200).unwrap();
/// assert_eq!(img.get_pixel(1, 2), Some(200));
/// assert_eq!(img.as_bytes().unwrap().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major samples, `width * height` of them
    samples: Samples,
}

impl GrayImage {
    /// Create a new image with all pixels set to zero.
    pub fn new(width: u32, height: u32, depth: GrayDepth) -> Self {
        let size = (width as usize) * (height as usize);
        let samples = match depth {
            GrayDepth::Bit8 => Samples::Bit8(vec![0; size]),
            GrayDepth::Bit16 => Samples::Bit16(vec![0; size]),
        };
        GrayImage {
            width,
            height,
            samples,
        }
    }

    /// Create an 8-bit image from row-major bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the data length doesn't match
    /// `width * height`.
    pub fn from_bytes(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_len(width, height, data.len())?;
        Ok(GrayImage {
            width,
            height,
            samples: Samples::Bit8(data),
        })
    }

    /// One byte per pixel is guaranteed by the caller.
    pub(crate) fn from_raw_bytes(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        GrayImage {
            width,
            height,
            samples: Samples::Bit8(data),
        }
    }

    /// Create a 16-bit image from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the data length doesn't match
    /// `width * height`.
    pub fn from_u16(width: u32, height: u32, data: Vec<u16>) -> Result<Self> {
        check_len(width, height, data.len())?;
        Ok(GrayImage {
            width,
            height,
            samples: Samples::Bit16(data),
        })
    }

    /// Create a 16-bit image from big-endian byte pairs, the layout PNG uses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the data length doesn't match
    /// `2 * width * height`.
    pub fn from_be_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(Error::InvalidParameter(format!(
                "16-bit data length {} is odd",
                data.len()
            )));
        }
        let samples: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Self::from_u16(width, height, samples)
    }

    /// Columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the sample depth
    pub fn depth(&self) -> GrayDepth {
        match self.samples {
            Samples::Bit8(_) => GrayDepth::Bit8,
            Samples::Bit16(_) => GrayDepth::Bit16,
        }
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// True if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at (x, y) widened to `u32`.
    ///
    /// `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.sample(self.index(x, y)))
    }

    /// Overwrite the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinates are outside the
    /// image, and [`Error::InvalidParameter`] if `val` doesn't fit the depth.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let max = self.depth().max_value();
        if val > max {
            return Err(Error::InvalidParameter(format!(
                "pixel value {val} exceeds {max}"
            )));
        }
        let idx = self.index(x, y);
        match &mut self.samples {
            Samples::Bit8(data) => data[idx] = val as u8,
            Samples::Bit16(data) => data[idx] = val as u16,
        }
        Ok(())
    }

    /// Raw 8-bit samples, or `None` for a 16-bit image.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.samples {
            Samples::Bit8(data) => Some(data),
            Samples::Bit16(_) => None,
        }
    }

    /// Mutable raw 8-bit samples, or `None` for a 16-bit image.
    pub fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        match &mut self.samples {
            Samples::Bit8(data) => Some(data),
            Samples::Bit16(_) => None,
        }
    }

    /// Raw 16-bit samples, or `None` for an 8-bit image.
    pub fn as_u16(&self) -> Option<&[u16]> {
        match &self.samples {
            Samples::Bit8(_) => None,
            Samples::Bit16(data) => Some(data),
        }
    }

    /// Iterate over all samples in row-major order, widened to `u32`.
    pub fn samples(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match &self.samples {
            Samples::Bit8(data) => Box::new(data.iter().map(|&v| u32::from(v))),
            Samples::Bit16(data) => Box::new(data.iter().map(|&v| u32::from(v))),
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    fn sample(&self, idx: usize) -> u32 {
        match &self.samples {
            Samples::Bit8(data) => u32::from(data[idx]),
            Samples::Bit16(data) => u32::from(data[idx]),
        }
    }
}

impl PixelSource for GrayImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn depth(&self) -> GrayDepth {
        GrayImage::depth(self)
    }

    #[inline]
    fn int_value(&self, x: u32, y: u32) -> i32 {
        debug_assert!(x < self.width && y < self.height);
        self.sample(self.index(x, y)) as i32
    }
}

fn check_len(width: u32, height: u32, len: usize) -> Result<()> {
    let expected = (width as usize) * (height as usize);
    if len != expected {
        return Err(Error::InvalidParameter(format!(
            "data length {len} doesn't match {width}x{height} = {expected}"
        )));
    }
    Ok(())
}
