//! Entropy regression test
//!
//! Conventional entropy and delentropy of the 4x4 ramp and the cosine
//! reference image, with their entropy images.

use std::sync::Arc;

use sipp_core::GrayImage;
use sipp_entropy::{ConventionalEntropy, DelentropyCalculator, EntropyTable, conventional_entropy};
use sipp_filter::GradientField;
use sipp_hist::{BinPair, DistinctValueTable, HistogramOptions, HistogramStorage};
use sipp_test::{RegParams, fixtures};

fn histogram(src: &GrayImage, options: &HistogramOptions) -> HistogramStorage {
    let field = Arc::new(GradientField::from_source(src));
    HistogramStorage::build(field, options).unwrap()
}

#[test]
fn entropy_reg_conventional() {
    let mut rp = RegParams::new("entropy_conventional");

    for src in [fixtures::small_pic(), fixtures::small_pic16()] {
        let ent = ConventionalEntropy::build(&src).unwrap();
        rp.compare_values(fixtures::SMALL_PIC_ENTROPY, ent.entropy(), 1e-12);
        // Every level is equally likely, so every pixel is at the maximum.
        rp.compare_values(16.0, ent.image().samples().filter(|&v| v == 255).count() as f64, 0.0);
    }

    let src = fixtures::cosx_cosy_tiny();
    let (entropy, image) = conventional_entropy(&src).unwrap();
    rp.compare_values(fixtures::COSX_COSY_TINY_ENTROPY, entropy, 1e-12);
    let expected = fixtures::gray8(20, 20, &fixtures::COSX_COSY_TINY_ENTROPY_IMAGE);
    rp.compare_gray(&expected, &image);
    rp.display_gray(&image, "entropy").unwrap();

    let (flat, flat_image) = conventional_entropy(&fixtures::small_zero_pic()).unwrap();
    rp.compare_values(0.0, flat, 0.0);
    rp.compare_values(0.0, flat_image.samples().sum::<u32>() as f64, 0.0);

    assert!(rp.cleanup(), "entropy_conventional regression test failed");
}

#[test]
fn entropy_reg_delentropy() {
    let mut rp = RegParams::new("entropy_delentropy");

    let src = fixtures::cosx_cosy_tiny();
    let hist = histogram(&src, &HistogramOptions::default());
    let dent = DelentropyCalculator::build(&hist);
    rp.compare_values(fixtures::COSX_COSY_TINY_DELENTROPY, dent.aggregate_delentropy(), 1e-9);
    rp.compare_values(
        fixtures::COSX_COSY_TINY_MAX_DELENTROPY,
        dent.max_entropy_contribution(),
        1e-15,
    );

    let table = dent.entropy_table();
    for (slot, pair) in hist.distinct_values().pairs().iter().enumerate() {
        rp.compare_values(
            fixtures::COSX_COSY_TINY_CONTRIBUTIONS[pair.value as usize],
            table.contribution(slot).unwrap_or(f64::NAN),
            1e-15,
        );
    }

    let image = dent.gradient_entropy_image().unwrap();
    let expected = fixtures::gray8(19, 19, &fixtures::COSX_COSY_TINY_DELENTROPY_IMAGE);
    rp.compare_gray(&expected, &image);

    let grid = dent.histogram_entropy_image().unwrap();
    rp.compare_values(81.0, grid.width() as f64, 0.0);
    rp.compare_values(
        fixtures::COSX_COSY_TINY_NONZERO_BINS as f64,
        grid.samples().filter(|&v| v != 0).count() as f64,
        0.0,
    );
    // Only the single bin holding 8 samples has the largest contribution.
    rp.compare_values(1.0, grid.samples().filter(|&v| v == 255).count() as f64, 0.0);

    rp.display_gray(&image, "delentropy").unwrap();
    rp.display_gray(&grid, "hist_delentropy").unwrap();

    assert!(rp.cleanup(), "entropy_delentropy regression test failed");
}

#[test]
fn entropy_reg_storage_independent() {
    let mut rp = RegParams::new("entropy_storage");

    let src = fixtures::cosx_cosy_tiny();
    let dense = histogram(&src, &HistogramOptions::default());
    let sparse = histogram(
        &src,
        &HistogramOptions {
            sparse_threshold: 0,
            ..Default::default()
        },
    );
    let a = DelentropyCalculator::build(&dense);
    let b = DelentropyCalculator::build(&sparse);
    rp.compare_values(a.aggregate_delentropy(), b.aggregate_delentropy(), 0.0);
    rp.compare_gray(
        &a.gradient_entropy_image().unwrap(),
        &b.gradient_entropy_image().unwrap(),
    );
    rp.compare_gray(
        &a.histogram_entropy_image().unwrap(),
        &b.histogram_entropy_image().unwrap(),
    );

    // The same multiset of counts in any order gives the same aggregate.
    let pairs: Vec<BinPair> = fixtures::COSX_COSY_TINY_DISTINCT
        .iter()
        .rev()
        .map(|&(v, n)| BinPair::new(v, n))
        .collect();
    let shuffled = EntropyTable::from_distinct_values(&DistinctValueTable::from_pairs(pairs), 361);
    rp.compare_values(a.aggregate_delentropy(), shuffled.aggregate(), 0.0);

    assert!(rp.cleanup(), "entropy_storage regression test failed");
}

#[test]
fn entropy_reg_degenerate() {
    let mut rp = RegParams::new("entropy_degenerate");

    // Uniform gradient: one occupied bin, zero delentropy, black images.
    let hist = histogram(&fixtures::small_pic(), &HistogramOptions::default());
    let dent = DelentropyCalculator::build(&hist);
    rp.compare_values(0.0, dent.aggregate_delentropy(), 0.0);
    rp.compare_values(0.0, dent.max_entropy_contribution(), 0.0);
    let image = dent.gradient_entropy_image().unwrap();
    rp.compare_values(3.0, image.width() as f64, 0.0);
    rp.compare_values(0.0, image.samples().sum::<u32>() as f64, 0.0);

    let tiny = fixtures::gray8(1, 1, &[3]);
    let empty = histogram(&tiny, &HistogramOptions::default());
    let dent = DelentropyCalculator::build(&empty);
    rp.compare_values(0.0, dent.aggregate_delentropy(), 0.0);
    rp.compare_values(0.0, dent.gradient_entropy_image().unwrap().len() as f64, 0.0);

    assert!(rp.cleanup(), "entropy_degenerate regression test failed");
}
