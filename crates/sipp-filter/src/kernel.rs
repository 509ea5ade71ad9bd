//! 2x2 complex gradient kernels
//!
//! A kernel weights the four pixels of a 2x2 neighbourhood:
//!
//! ```text
//! k00 * p(x, y)     + k01 * p(x+1, y)
//! k10 * p(x, y+1)   + k11 * p(x+1, y+1)
//! ```
//!
//! The default kernel `[[-1, i], [-i, 1]]` puts the main-diagonal difference
//! in the real part and the anti-diagonal difference in the imaginary part.

use crate::{FilterError, FilterResult};
use sipp_core::Complex;

/// A 2x2 complex convolution kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientKernel {
    /// Coefficients, `k[row][col]`
    k: [[Complex; 2]; 2],
}

impl GradientKernel {
    /// Create a kernel from its four coefficients.
    pub const fn new(k00: Complex, k01: Complex, k10: Complex, k11: Complex) -> Self {
        Self {
            k: [[k00, k01], [k10, k11]],
        }
    }

    /// The finite-difference kernel `[[-1, i], [-i, 1]]`.
    ///
    /// For each 2x2 neighbourhood this yields
    /// `re = p(x+1, y+1) - p(x, y)` and `im = p(x+1, y) - p(x, y+1)`.
    pub const fn finite_difference() -> Self {
        Self::new(
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(0.0, -1.0),
            Complex::new(1.0, 0.0),
        )
    }

    /// Create a kernel from four coefficients in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] unless exactly four finite
    /// coefficients are given.
    pub fn from_slice(data: &[Complex]) -> FilterResult<Self> {
        let [k00, k01, k10, k11] = data else {
            return Err(FilterError::InvalidKernel(format!(
                "expected 4 coefficients, got {}",
                data.len()
            )));
        };
        if data.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
            return Err(FilterError::InvalidKernel(
                "coefficients must be finite".to_string(),
            ));
        }
        Ok(Self::new(*k00, *k01, *k10, *k11))
    }

    /// Get the coefficient at (row, col), both 0 or 1.
    pub fn get(&self, row: usize, col: usize) -> Option<Complex> {
        self.k.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Apply the kernel to one neighbourhood.
    #[inline]
    pub fn apply(&self, p00: f64, p01: f64, p10: f64, p11: f64) -> Complex {
        self.k[0][0].scale(p00)
            + self.k[0][1].scale(p01)
            + self.k[1][0].scale(p10)
            + self.k[1][1].scale(p11)
    }
}

impl Default for GradientKernel {
    fn default() -> Self {
        Self::finite_difference()
    }
}
