//! sipp-io - Grayscale image I/O
//!
//! Reads and writes 8-bit and 16-bit grayscale PNG files, and provides
//! [`PngSink`], an [`ImageSink`](sipp_core::ImageSink) that writes labelled
//! renderings next to a path prefix.

mod error;
pub mod png;
mod sink;

pub use error::{IoError, IoResult};
pub use self::png::{GRAYSCALE_ONLY, read_png, write_png};
pub use sink::PngSink;

use sipp_core::GrayImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// PNG file signature
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Check whether a byte buffer starts with the PNG signature.
pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(PNG_MAGIC)
}

/// Read a grayscale image from a file
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the file is not a PNG, or is a
/// PNG that is not 8-bit or 16-bit grayscale.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let header = std::io::BufRead::fill_buf(&mut reader)?;
    if !is_png(header) {
        return Err(IoError::UnsupportedFormat(format!(
            "{}: only PNG input is supported",
            path.display()
        )));
    }
    read_png(reader)
}

/// Read a grayscale image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<GrayImage> {
    if !is_png(data) {
        return Err(IoError::UnsupportedFormat(
            "only PNG input is supported".to_string(),
        ));
    }
    read_png(Cursor::new(data))
}

/// Write a grayscale image to a PNG file
pub fn write_image<P: AsRef<Path>>(image: &GrayImage, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode a grayscale image as PNG bytes
pub fn write_image_mem(image: &GrayImage) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(image, &mut buf)?;
    Ok(buf)
}
