//! Gradient field regression test
//!
//! Checks the finite-difference gradient of the 4x4 ramp (8 and 16 bit)
//! and of the cosine reference image, plus the rendering of the
//! checkerboard-shifted ramp.

use sipp_core::{Complex, ComplexImage, GrayImage};
use sipp_filter::{GradientField, GradientKernel};
use sipp_test::{RegParams, fixtures};

#[test]
fn gradient_reg_ramp() {
    let mut rp = RegParams::new("gradient_ramp");

    let (re, im) = fixtures::SMALL_PIC_GRAD;
    let expected = Complex::new(re, im);
    for src in [fixtures::small_pic(), fixtures::small_pic16()] {
        let field = GradientField::from_source(&src);
        rp.compare_values(3.0, field.width() as f64, 0.0);
        rp.compare_values(3.0, field.height() as f64, 0.0);
        let uniform = field.samples().len() == 9 && field.samples().iter().all(|&g| g == expected);
        rp.compare_values(1.0, if uniform { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(34.0f64.sqrt(), field.max_modulus(), 0.0);

        let e = field.extrema();
        rp.compare_values(5.0, e.min_re, 0.0);
        rp.compare_values(5.0, e.max_re, 0.0);
        rp.compare_values(-3.0, e.min_im, 0.0);
        rp.compare_values(-3.0, e.max_im, 0.0);
    }

    let zero = GradientField::from_source(&fixtures::small_zero_pic());
    rp.compare_values(0.0, zero.max_modulus(), 0.0);

    assert!(rp.cleanup(), "gradient_ramp regression test failed");
}

#[test]
fn gradient_reg_cosine() {
    let mut rp = RegParams::new("gradient_cosine");

    let src = fixtures::cosx_cosy_tiny();
    let field = GradientField::build(&src, &GradientKernel::finite_difference());
    rp.compare_values(19.0, field.width() as f64, 0.0);
    rp.compare_values(19.0, field.height() as f64, 0.0);

    let expected: Vec<Complex> = fixtures::COSX_COSY_TINY_GRAD
        .iter()
        .map(|&(re, im)| Complex::new(re as f64, im as f64))
        .collect();
    let mismatches = field
        .samples()
        .iter()
        .zip(&expected)
        .filter(|(a, b)| a != b)
        .count();
    rp.compare_values(0.0, mismatches as f64, 0.0);
    rp.compare_values(
        fixtures::COSX_COSY_TINY_GRAD_MAX_MOD,
        field.max_modulus(),
        1e-12,
    );

    let e = field.extrema();
    rp.compare_values(-40.0, e.min_re, 0.0);
    rp.compare_values(40.0, e.max_re, 0.0);
    rp.compare_values(-40.0, e.min_im, 0.0);
    rp.compare_values(39.0, e.max_im, 0.0);

    let (re, im) = field.render_parts();
    rp.compare_values(19.0, re.width() as f64, 0.0);
    rp.compare_values(255.0, re.samples().max().unwrap_or(0) as f64, 0.0);
    rp.compare_values(0.0, im.samples().min().unwrap_or(255) as f64, 0.0);
    rp.display_gray(&re, "real").unwrap();
    rp.display_gray(&im, "imag").unwrap();

    assert!(rp.cleanup(), "gradient_cosine regression test failed");
}

#[test]
fn gradient_reg_shifted() {
    let mut rp = RegParams::new("gradient_shifted");

    let shifted = ComplexImage::to_shifted(&fixtures::small_pic());
    let expected: Vec<Complex> = fixtures::SHIFTED_PIC
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    rp.compare_values(
        1.0,
        if shifted.data() == expected.as_slice() { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(-15.0, shifted.extrema().min_re, 0.0);
    rp.compare_values(16.0, shifted.extrema().max_re, 0.0);
    rp.compare_values(16.0, shifted.extrema().max_modulus, 0.0);

    let (re, im) = shifted.render();
    let scaled = fixtures::gray8(4, 4, &fixtures::SCALED_SHIFTED_PIC);
    rp.compare_gray(&scaled, &re);
    rp.compare_gray(&GrayImage::from_bytes(4, 4, vec![0; 16]).unwrap(), &im);

    assert!(rp.cleanup(), "gradient_shifted regression test failed");
}

#[test]
fn gradient_reg_custom_kernel() {
    let mut rp = RegParams::new("gradient_kernel");

    // Horizontal difference only: p(x+1, y) - p(x, y).
    let kernel = GradientKernel::new(
        Complex::new(-1.0, 0.0),
        Complex::ONE,
        Complex::ZERO,
        Complex::ZERO,
    );
    let field = GradientField::build(&fixtures::small_pic(), &kernel);
    let all_one = field.samples().iter().all(|&g| g == Complex::ONE);
    rp.compare_values(1.0, if all_one { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, field.max_modulus(), 0.0);

    assert!(rp.cleanup(), "gradient_kernel regression test failed");
}
