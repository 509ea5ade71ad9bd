//! Grayscale PNG codec.
//!
//! Only single-channel grayscale at 8 or 16 bits per sample is accepted.
//! Sixteen-bit samples are big-endian on disk.

use std::io::{BufRead, Seek, Write};

use png::{BitDepth, ColorType, Decoder, Encoder};
use sipp_core::{GrayDepth, GrayImage};

use crate::{IoError, IoResult};

/// Message used whenever an input is not 8- or 16-bit grayscale.
pub const GRAYSCALE_ONLY: &str = "input image must be 8-bit or 16-bit grayscale";

fn decode_err(e: png::DecodingError) -> IoError {
    IoError::DecodeError(e.to_string())
}

fn encode_err(e: png::EncodingError) -> IoError {
    IoError::EncodeError(e.to_string())
}

/// Decode a grayscale PNG.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for any colour type other than grayscale,
/// and for grayscale below 8 bits.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayImage> {
    let mut frames = Decoder::new(reader).read_info().map_err(decode_err)?;

    let (w, h, color, bits) = {
        let info = frames.info();
        (info.width, info.height, info.color_type, info.bit_depth)
    };
    let depth = match (color, bits) {
        (ColorType::Grayscale, BitDepth::Eight) => GrayDepth::Bit8,
        (ColorType::Grayscale, BitDepth::Sixteen) => GrayDepth::Bit16,
        _ => {
            tracing::debug!(?color, ?bits, "rejecting PNG");
            return Err(IoError::UnsupportedFormat(GRAYSCALE_ONLY.to_string()));
        }
    };

    let len = frames
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("frame size overflows memory".to_string()))?;
    let mut raw = vec![0u8; len];
    let frame = frames.next_frame(&mut raw).map_err(decode_err)?;

    let stride = frame.line_size;
    let packed = w as usize * (depth.bits() as usize / 8);
    let rows = h as usize;
    if stride < packed || frame.buffer_size() < stride * rows {
        return Err(IoError::InvalidData(format!(
            "frame of {} bytes cannot hold {w}x{h} at {} bits",
            frame.buffer_size(),
            depth.bits()
        )));
    }
    let rows = raw[..stride * rows].chunks(stride).map(|r| &r[..packed]);

    let image = match depth {
        GrayDepth::Bit8 => GrayImage::from_bytes(w, h, rows.flatten().copied().collect())?,
        GrayDepth::Bit16 => {
            let words = rows
                .flat_map(|r| r.chunks_exact(2))
                .map(|b| u16::from_be_bytes([b[0], b[1]]))
                .collect();
            GrayImage::from_u16(w, h, words)?
        }
    };

    tracing::debug!(width = w, height = h, bits = depth.bits(), "decoded PNG");
    Ok(image)
}

/// Encode `image` as grayscale PNG at its own depth.
pub fn write_png<W: Write>(image: &GrayImage, writer: W) -> IoResult<()> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(IoError::InvalidData(format!("nothing to encode in a {w}x{h} image")));
    }

    let payload: Vec<u8> = if let Some(bytes) = image.as_bytes() {
        bytes.to_vec()
    } else if let Some(words) = image.as_u16() {
        words.iter().flat_map(|v| v.to_be_bytes()).collect()
    } else {
        return Err(IoError::InvalidData("image has no samples".to_string()));
    };

    let mut encoder = Encoder::new(writer, w, h);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(match image.depth() {
        GrayDepth::Bit8 => BitDepth::Eight,
        GrayDepth::Bit16 => BitDepth::Sixteen,
    });
    encoder
        .write_header()
        .and_then(|mut out| out.write_image_data(&payload))
        .map_err(encode_err)
}
