//! Thumbnail regression test
//!
//! Checks aspect-preserving placement, 16-bit reduction and that flat
//! regions stay flat under the box filter.

use sipp_core::{GrayDepth, GrayImage};
use sipp_test::{RegParams, fixtures};
use sipp_transform::{THUMB_SIDE, scale_down, thumbnail};

fn flat8(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_bytes(width, height, vec![value; (width * height) as usize]).unwrap()
}

#[test]
fn thumbnail_reg_square() {
    let mut rp = RegParams::new("thumbnail_square");

    let src = flat8(300, 300, 100);
    let thumb = thumbnail(&src).expect("thumbnail");
    rp.compare_values(THUMB_SIDE as f64, thumb.width() as f64, 0.0);
    rp.compare_values(THUMB_SIDE as f64, thumb.height() as f64, 0.0);
    let all_100 = thumb.samples().all(|v| v == 100);
    rp.compare_values(1.0, if all_100 { 1.0 } else { 0.0 }, 0.0);
    rp.display_gray(&thumb, "flat").unwrap();

    assert!(rp.cleanup(), "thumbnail_square regression test failed");
}

#[test]
fn thumbnail_reg_letterbox() {
    let mut rp = RegParams::new("thumbnail_letterbox");

    // 2:1 source, scaled by 2: 150x75 content centered vertically.
    let src = flat8(300, 150, 200);
    let thumb = thumbnail(&src).expect("thumbnail");
    let voff = (THUMB_SIDE - 75) / 2;
    rp.compare_values(0.0, thumb.get_pixel(75, voff - 1).unwrap() as f64, 0.0);
    rp.compare_values(200.0, thumb.get_pixel(75, voff).unwrap() as f64, 0.0);
    rp.compare_values(200.0, thumb.get_pixel(0, voff + 74).unwrap() as f64, 0.0);
    rp.compare_values(0.0, thumb.get_pixel(149, voff + 75).unwrap() as f64, 0.0);

    // 1:2 source: content centered horizontally.
    let src = flat8(150, 300, 50);
    let thumb = thumbnail(&src).expect("thumbnail");
    let hoff = (THUMB_SIDE - 75) / 2;
    rp.compare_values(0.0, thumb.get_pixel(hoff - 1, 10).unwrap() as f64, 0.0);
    rp.compare_values(50.0, thumb.get_pixel(hoff, 10).unwrap() as f64, 0.0);
    rp.display_gray(&thumb, "pillarbox").unwrap();

    assert!(rp.cleanup(), "thumbnail_letterbox regression test failed");
}

#[test]
fn thumbnail_reg_depth() {
    let mut rp = RegParams::new("thumbnail_depth");

    let src = GrayImage::from_u16(300, 300, vec![25600; 90000]).unwrap();
    let thumb = thumbnail(&src).expect("thumbnail");
    rp.compare_values(8.0, thumb.depth().bits() as f64, 0.0);
    rp.compare_values(100.0, thumb.get_pixel(10, 10).unwrap() as f64, 0.0);

    // The ramp is already smaller than the destination: copied unscaled.
    let small = scale_down(&fixtures::small_pic(), 8, 8).expect("scale");
    rp.compare_values(1.0, small.get_pixel(2, 2).unwrap() as f64, 0.0);
    rp.compare_values(16.0, small.get_pixel(5, 5).unwrap() as f64, 0.0);

    let empty = thumbnail(&GrayImage::new(0, 0, GrayDepth::Bit8)).expect("empty");
    rp.compare_values(0.0, empty.samples().map(f64::from).sum(), 0.0);

    assert!(rp.cleanup(), "thumbnail_depth regression test failed");
}

#[test]
fn thumbnail_reg_box_average() {
    let mut rp = RegParams::new("thumbnail_box");

    // Alternating columns of 0 and 200 average to 100 at scale 2.
    let width = 300u32;
    let data: Vec<u8> = (0..width * 300)
        .map(|i| if (i % width) % 2 == 0 { 0 } else { 200 })
        .collect();
    let src = GrayImage::from_bytes(width, 300, data).unwrap();
    let thumb = thumbnail(&src).expect("thumbnail");
    let all_100 = thumb.samples().all(|v| v == 100);
    rp.compare_values(1.0, if all_100 { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "thumbnail_box regression test failed");
}
