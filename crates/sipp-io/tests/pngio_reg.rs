//! Grayscale PNG I/O regression test
//!
//! Reads the reference images from `tests/data/images`, checks their
//! samples, and round-trips both depths through files and memory.

use sipp_core::{GrayDepth, GrayImage, ImageSink};
use sipp_io::{IoError, PngSink, read_image, read_image_mem, write_image, write_image_mem};
use sipp_test::{RegParams, fixtures, regout_dir, test_data_path};

#[test]
fn pngio_reg_read_reference() {
    let mut rp = RegParams::new("pngio_read");

    let cos = sipp_test::load_test_image("cosx_cosy_tiny.png").expect("load cosx_cosy_tiny");
    rp.compare_values(20.0, cos.width() as f64, 0.0);
    rp.compare_values(20.0, cos.height() as f64, 0.0);
    rp.compare_values(8.0, cos.depth().bits() as f64, 0.0);
    rp.compare_gray(&fixtures::cosx_cosy_tiny(), &cos);

    let ramp = sipp_test::load_test_image("ramp16.png").expect("load ramp16");
    rp.compare_values(16.0, ramp.depth().bits() as f64, 0.0);
    let expected: Vec<u16> = (1..=16).map(|v| v * 1000).collect();
    rp.compare_strings(
        &to_be(&expected),
        &to_be(ramp.as_u16().expect("16-bit samples")),
    );

    assert!(rp.cleanup(), "pngio_read regression test failed");
}

#[test]
fn pngio_reg_reject_color() {
    let mut rp = RegParams::new("pngio_reject");

    let result = read_image(test_data_path("rgb.png"));
    let rejected = matches!(
        &result,
        Err(IoError::UnsupportedFormat(msg)) if msg == sipp_io::GRAYSCALE_ONLY
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    let not_png = read_image_mem(b"GIF89a not a png");
    rp.compare_values(
        1.0,
        if matches!(not_png, Err(IoError::UnsupportedFormat(_))) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    assert!(rp.cleanup(), "pngio_reject regression test failed");
}

#[test]
fn pngio_reg_roundtrip() {
    let mut rp = RegParams::new("pngio_roundtrip");

    let small = fixtures::small_pic();
    let bytes = write_image_mem(&small).expect("encode 8-bit");
    let back = read_image_mem(&bytes).expect("decode 8-bit");
    rp.compare_gray(&small, &back);

    let small16 = fixtures::small_pic16();
    let bytes = write_image_mem(&small16).expect("encode 16-bit");
    let back = read_image_mem(&bytes).expect("decode 16-bit");
    rp.compare_values(16.0, back.depth().bits() as f64, 0.0);
    rp.compare_gray(&small16, &back);

    std::fs::create_dir_all(regout_dir()).expect("create regout");
    let path = regout_dir().join("pngio_roundtrip.cos.png");
    let cos = fixtures::cosx_cosy_tiny();
    write_image(&cos, &path).expect("write file");
    let back = read_image(&path).expect("read file");
    rp.compare_gray(&cos, &back);

    assert!(rp.cleanup(), "pngio_roundtrip regression test failed");
}

#[test]
fn pngio_reg_sink() {
    let mut rp = RegParams::new("pngio_sink");

    std::fs::create_dir_all(regout_dir()).expect("create regout");
    let mut sink = PngSink::new(regout_dir().join("pngio_sink"));
    let img = GrayImage::from_bytes(2, 1, vec![10, 250]).expect("2x1");
    sink.write_gray("first", &img).expect("write first");
    sink.write_gray("second", &GrayImage::new(1, 1, GrayDepth::Bit8))
        .expect("write second");

    rp.compare_values(2.0, sink.written().len() as f64, 0.0);
    let name = sink.written()[0]
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    rp.compare_strings(b"pngio_sink_first.png", name.as_bytes());
    let back = read_image(&sink.written()[0]).expect("read back");
    rp.compare_gray(&img, &back);

    assert!(rp.cleanup(), "pngio_sink regression test failed");
}

fn to_be(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|v| v.to_be_bytes()).collect()
}
