//! Shared fixtures for regression tests
//!
//! Small synthetic images with hand-checked expectations, plus the 20x20
//! "cosx cosy tiny" reference image (a coarsely sampled product of cosines)
//! together with its gradient, histogram and entropy results.

use sipp_core::GrayImage;

/// 4x4 ramp, values 1 to 16 row by row.
pub const SMALL_PIC: [u8; 16] = [
    1, 2, 3, 4, //
    5, 6, 7, 8, //
    9, 10, 11, 12, //
    13, 14, 15, 16,
];

/// The 4x4 ramp stored as 16-bit big-endian samples.
pub const SMALL_PIC16_BE: [u8; 32] = [
    0, 1, 0, 2, 0, 3, 0, 4, //
    0, 5, 0, 6, 0, 7, 0, 8, //
    0, 9, 0, 10, 0, 11, 0, 12, //
    0, 13, 0, 14, 0, 15, 0, 16,
];

/// The ramp multiplied by `(-1)^(x+y)`.
pub const SHIFTED_PIC: [f64; 16] = [
    1.0, -2.0, 3.0, -4.0, //
    -5.0, 6.0, -7.0, 8.0, //
    9.0, -10.0, 11.0, -12.0, //
    -13.0, 14.0, -15.0, 16.0,
];

/// Real part of [`SHIFTED_PIC`] rendered to 8 bits.
pub const SCALED_SHIFTED_PIC: [u8; 16] = [
    131, 106, 148, 90, //
    82, 172, 65, 189, //
    197, 41, 213, 24, //
    16, 238, 0, 255,
];

/// Gradient of the ramp: every sample is `5 - 3i`.
pub const SMALL_PIC_GRAD: (f64, f64) = (5.0, -3.0);

/// Conventional entropy of the ramp: 16 equiprobable values.
pub const SMALL_PIC_ENTROPY: f64 = 4.0;

/// Width of the cosine reference image
pub const COSX_COSY_TINY_WIDTH: u32 = 20;

/// Height of the cosine reference image
pub const COSX_COSY_TINY_HEIGHT: u32 = 20;

/// 20x20 8-bit cosine reference image
pub const COSX_COSY_TINY: [u8; 400] = [
    252, 240, 217, 186, 149, 109, 72, 40, 17, 4, 4, 17, 40, 72, 109, 148, 185, 217, 240, 252,
    240, 229, 208, 180, 146, 111, 78, 49, 28, 17, 17, 28, 49, 77, 111, 146, 179, 208, 229, 240,
    217, 208, 192, 169, 143, 115, 88, 65, 49, 40, 40, 49, 65, 88, 114, 142, 169, 191, 208, 217,
    185, 179, 169, 154, 137, 119, 102, 88, 78, 72, 72, 78, 88, 102, 119, 137, 154, 169, 179, 185,
    148, 146, 142, 137, 131, 125, 119, 115, 111, 109, 109, 111, 115, 119, 125, 131, 137, 142, 146, 148,
    109, 111, 114, 119, 125, 131, 137, 143, 146, 149, 149, 146, 143, 137, 131, 125, 119, 114, 111, 109,
    72, 77, 87, 102, 119, 137, 154, 169, 180, 186, 186, 180, 169, 155, 137, 119, 102, 88, 77, 72,
    40, 48, 65, 87, 114, 142, 169, 192, 208, 217, 217, 209, 192, 169, 143, 115, 88, 65, 49, 40,
    17, 28, 48, 77, 111, 146, 179, 208, 229, 240, 240, 229, 209, 180, 146, 111, 77, 49, 28, 17,
    4, 17, 40, 72, 109, 148, 185, 217, 240, 252, 252, 240, 217, 186, 149, 109, 72, 40, 17, 4,
    4, 17, 40, 72, 109, 148, 185, 217, 240, 252, 252, 240, 217, 186, 149, 109, 72, 40, 17, 4,
    17, 28, 49, 77, 111, 146, 179, 208, 229, 240, 240, 229, 208, 180, 146, 111, 78, 49, 28, 17,
    40, 49, 65, 88, 114, 142, 169, 191, 208, 217, 217, 208, 192, 169, 143, 115, 88, 65, 49, 40,
    72, 78, 88, 102, 119, 137, 154, 169, 179, 185, 185, 179, 169, 154, 137, 119, 102, 88, 78, 72,
    109, 111, 115, 119, 125, 131, 137, 142, 146, 148, 148, 146, 142, 137, 131, 125, 119, 115, 111, 109,
    149, 146, 143, 137, 131, 125, 119, 114, 111, 109, 109, 111, 114, 119, 125, 131, 137, 143, 146, 149,
    186, 180, 169, 155, 137, 119, 102, 88, 77, 72, 72, 77, 87, 102, 119, 137, 154, 169, 180, 186,
    217, 209, 192, 169, 143, 115, 88, 65, 49, 40, 40, 48, 65, 87, 114, 142, 169, 192, 208, 217,
    240, 229, 209, 180, 146, 111, 77, 49, 28, 17, 17, 28, 48, 77, 111, 146, 179, 208, 229, 240,
    252, 240, 217, 186, 149, 109, 72, 40, 17, 4, 4, 17, 40, 72, 109, 148, 185, 217, 240, 252,
];

/// Gradient of [`COSX_COSY_TINY`] under the default kernel, as (re, im).
pub const COSX_COSY_TINY_GRAD: [(i32, i32); 361] = [
    (-23, 0), (-32, -12), (-37, -22), (-40, -31), (-38, -37), (-31, -39), (-23, -38), (-12, -32), (0, -24), (13, -13), (24, 0), (32, 12), (37, 23), (39, 32), (37, 37), (31, 39), (23, 38), (12, 32), (0, 23),
    (-32, 12), (-37, 0), (-39, -12), (-37, -23), (-31, -32), (-23, -37), (-13, -39), (0, -37), (12, -32), (23, -23), (32, -12), (37, 0), (39, 12), (37, 23), (31, 32), (23, 37), (12, 39), (0, 38), (-12, 32),
    (-38, 23), (-39, 13), (-38, 0), (-32, -11), (-24, -22), (-13, -31), (0, -37), (13, -39), (23, -38), (32, -32), (38, -23), (39, -13), (37, 0), (31, 12), (23, 23), (12, 32), (0, 37), (-12, 39), (-23, 38),
    (-39, 31), (-37, 23), (-32, 12), (-23, 0), (-12, -12), (0, -23), (13, -31), (23, -37), (31, -39), (37, -37), (39, -31), (37, -23), (31, -13), (23, 0), (12, 12), (0, 23), (-12, 32), (-23, 37), (-31, 39),
    (-37, 37), (-32, 31), (-23, 23), (-12, 12), (0, 0), (12, -12), (24, -22), (31, -32), (38, -37), (40, -40), (37, -38), (32, -31), (22, -24), (12, -12), (0, 0), (-12, 12), (-23, 23), (-31, 32), (-37, 37),
    (-32, 39), (-24, 37), (-12, 32), (0, 23), (12, 12), (23, 0), (32, -11), (37, -23), (40, -31), (37, -37), (31, -40), (23, -37), (12, -32), (0, -24), (-12, -12), (-23, 0), (-31, 12), (-37, 23), (-39, 32),
    (-24, 37), (-12, 39), (0, 37), (12, 32), (23, 23), (32, 12), (38, 0), (39, -12), (37, -22), (31, -31), (23, -37), (12, -40), (0, -37), (-12, -32), (-22, -24), (-31, -13), (-37, 0), (-39, 12), (-37, 23),
    (-12, 31), (0, 37), (12, 39), (24, 37), (32, 31), (37, 23), (39, 13), (37, 0), (32, -12), (23, -23), (12, -31), (0, -37), (-12, -40), (-23, -37), (-32, -31), (-38, -23), (-39, -12), (-37, 0), (-32, 12),
    (0, 24), (12, 31), (24, 37), (32, 39), (37, 37), (39, 31), (38, 23), (32, 12), (23, 0), (12, -12), (0, -23), (-12, -31), (-23, -37), (-31, -40), (-37, -38), (-39, -32), (-37, -23), (-32, -12), (-24, 0),
    (13, 13), (23, 23), (32, 32), (37, 37), (39, 39), (37, 37), (32, 32), (23, 23), (12, 12), (0, 0), (-12, -12), (-23, -23), (-31, -31), (-37, -37), (-40, -40), (-37, -37), (-32, -32), (-23, -23), (-13, -13),
    (24, 0), (32, 12), (37, 23), (39, 32), (37, 37), (31, 39), (23, 38), (12, 32), (0, 23), (-12, 12), (-23, 0), (-32, -12), (-37, -22), (-40, -31), (-38, -37), (-31, -39), (-23, -38), (-12, -32), (0, -24),
    (32, -12), (37, 0), (39, 12), (37, 23), (31, 32), (23, 37), (12, 39), (0, 38), (-12, 32), (-23, 23), (-32, 12), (-37, 0), (-39, -12), (-37, -23), (-31, -32), (-23, -37), (-13, -39), (0, -37), (12, -32),
    (38, -23), (39, -13), (37, 0), (31, 12), (23, 23), (12, 32), (0, 37), (-12, 39), (-23, 38), (-32, 32), (-38, 23), (-39, 13), (-38, 0), (-32, -11), (-24, -22), (-13, -31), (0, -37), (13, -39), (23, -38),
    (39, -31), (37, -23), (31, -13), (23, 0), (12, 12), (0, 23), (-12, 32), (-23, 37), (-31, 39), (-37, 37), (-39, 31), (-37, 23), (-32, 12), (-23, 0), (-12, -12), (0, -23), (13, -31), (23, -37), (31, -39),
    (37, -38), (32, -31), (22, -24), (12, -12), (0, 0), (-12, 12), (-23, 23), (-31, 32), (-37, 37), (-39, 39), (-37, 37), (-32, 31), (-23, 23), (-12, 12), (0, 0), (12, -12), (24, -22), (31, -32), (38, -37),
    (31, -40), (23, -37), (12, -32), (0, -24), (-12, -12), (-23, 0), (-31, 12), (-37, 23), (-39, 32), (-37, 37), (-32, 39), (-24, 37), (-12, 32), (0, 23), (12, 12), (23, 0), (32, -11), (37, -23), (40, -31),
    (23, -37), (12, -40), (0, -37), (-12, -32), (-22, -24), (-31, -13), (-37, 0), (-39, 12), (-37, 23), (-32, 32), (-24, 37), (-12, 39), (0, 37), (12, 32), (23, 23), (32, 12), (38, 0), (39, -12), (37, -22),
    (12, -31), (0, -37), (-12, -40), (-23, -37), (-32, -31), (-38, -23), (-39, -12), (-37, 0), (-32, 12), (-23, 23), (-12, 31), (0, 37), (12, 39), (24, 37), (32, 31), (37, 23), (39, 13), (37, 0), (32, -12),
    (0, -23), (-12, -31), (-23, -37), (-31, -40), (-37, -38), (-39, -32), (-37, -23), (-32, -12), (-24, 0), (-13, 13), (0, 24), (12, 31), (24, 37), (32, 39), (37, 37), (39, 31), (38, 23), (32, 12), (23, 0),
];

/// Largest gradient modulus, `sqrt(40² + 40²)`
pub const COSX_COSY_TINY_GRAD_MAX_MOD: f64 = 56.568542494923804;

/// Conventional entropy of [`COSX_COSY_TINY`]
pub const COSX_COSY_TINY_ENTROPY: f64 = 5.211838049805185;

/// Per-pixel conventional entropy image of [`COSX_COSY_TINY`]
pub const COSX_COSY_TINY_ENTROPY_IMAGE: [u8; 400] = [
    154, 255, 255, 154, 154, 255, 255, 255, 255, 154, 154, 255, 255, 255, 255, 154, 154, 255, 255, 154,
    255, 154, 208, 154, 255, 255, 124, 208, 154, 255, 255, 154, 208, 182, 255, 255, 154, 208, 154, 255,
    255, 208, 124, 255, 154, 154, 208, 154, 208, 255, 255, 208, 154, 208, 154, 154, 255, 52, 208, 255,
    154, 154, 255, 124, 255, 255, 154, 208, 124, 255, 255, 124, 208, 154, 255, 255, 124, 255, 154, 154,
    154, 255, 154, 255, 154, 154, 255, 154, 255, 255, 255, 255, 154, 255, 154, 154, 255, 154, 255, 154,
    255, 255, 154, 255, 154, 154, 255, 154, 255, 154, 154, 255, 154, 255, 154, 154, 255, 154, 255, 255,
    255, 182, 91, 154, 255, 255, 124, 255, 154, 154, 154, 154, 255, 52, 255, 255, 154, 208, 182, 255,
    255, 91, 154, 91, 154, 154, 255, 124, 208, 255, 255, 91, 124, 255, 154, 154, 208, 154, 208, 255,
    255, 154, 91, 182, 255, 255, 154, 208, 154, 255, 255, 154, 91, 154, 255, 255, 182, 208, 154, 255,
    154, 255, 255, 255, 255, 154, 154, 255, 255, 154, 154, 255, 255, 154, 154, 255, 255, 255, 255, 154,
    154, 255, 255, 255, 255, 154, 154, 255, 255, 154, 154, 255, 255, 154, 154, 255, 255, 255, 255, 154,
    255, 154, 208, 182, 255, 255, 154, 208, 154, 255, 255, 154, 208, 154, 255, 255, 124, 208, 154, 255,
    255, 208, 154, 208, 154, 154, 255, 52, 208, 255, 255, 208, 124, 255, 154, 154, 208, 154, 208, 255,
    255, 124, 208, 154, 255, 255, 124, 255, 154, 154, 154, 154, 255, 124, 255, 255, 154, 208, 124, 255,
    255, 255, 154, 255, 154, 154, 255, 154, 255, 154, 154, 255, 154, 255, 154, 154, 255, 154, 255, 255,
    154, 255, 154, 255, 154, 154, 255, 154, 255, 255, 255, 255, 154, 255, 154, 154, 255, 154, 255, 154,
    154, 154, 255, 52, 255, 255, 154, 208, 182, 255, 255, 182, 91, 154, 255, 255, 124, 255, 154, 154,
    255, 91, 124, 255, 154, 154, 208, 154, 208, 255, 255, 91, 154, 91, 154, 154, 255, 124, 208, 255,
    255, 154, 91, 154, 255, 255, 182, 208, 154, 255, 255, 154, 91, 182, 255, 255, 154, 208, 154, 255,
    154, 255, 255, 154, 154, 255, 255, 255, 255, 154, 154, 255, 255, 255, 255, 154, 154, 255, 255, 154,
];

/// Number of occupied joint-histogram bins
pub const COSX_COSY_TINY_NONZERO_BINS: usize = 127;

/// Largest joint-histogram bin count
pub const COSX_COSY_TINY_MAX_BIN: u32 = 8;

/// Bin count seen by each gradient sample, row-major
pub const COSX_COSY_TINY_BIN_VALUES: [u32; 361] = [
    6, 4, 2, 2, 2, 2, 2, 4, 4, 1, 2, 6, 6, 2, 6, 2, 2, 6, 6,
    6, 6, 4, 4, 2, 6, 2, 8, 4, 2, 4, 6, 2, 6, 2, 2, 4, 2, 6,
    2, 2, 2, 2, 2, 2, 8, 2, 2, 1, 2, 2, 6, 2, 6, 6, 6, 4, 2,
    2, 6, 6, 6, 5, 4, 2, 6, 2, 2, 2, 4, 2, 6, 5, 6, 6, 2, 2,
    6, 2, 6, 5, 5, 5, 2, 2, 2, 1, 2, 2, 2, 5, 5, 5, 6, 2, 6,
    2, 4, 6, 6, 5, 6, 2, 4, 2, 2, 2, 6, 4, 4, 5, 6, 2, 6, 2,
    4, 4, 6, 6, 6, 6, 2, 2, 2, 1, 6, 2, 8, 4, 2, 2, 6, 2, 6,
    2, 6, 4, 4, 2, 6, 2, 6, 4, 2, 2, 8, 2, 6, 2, 2, 4, 6, 6,
    2, 2, 4, 2, 6, 2, 2, 6, 6, 5, 4, 2, 6, 2, 2, 2, 4, 4, 2,
    1, 6, 2, 6, 1, 6, 2, 6, 5, 5, 5, 2, 1, 2, 1, 2, 1, 2, 1,
    2, 6, 6, 2, 6, 2, 2, 6, 6, 5, 6, 4, 2, 2, 2, 2, 2, 4, 4,
    4, 6, 2, 6, 2, 2, 4, 2, 6, 6, 6, 6, 4, 4, 2, 6, 2, 8, 4,
    2, 2, 6, 2, 6, 6, 6, 4, 2, 2, 2, 2, 2, 2, 2, 2, 8, 2, 2,
    2, 4, 2, 6, 5, 6, 6, 2, 2, 6, 2, 6, 6, 6, 5, 4, 2, 6, 2,
    2, 2, 2, 5, 5, 5, 6, 2, 6, 1, 6, 2, 6, 5, 5, 5, 2, 2, 2,
    2, 6, 4, 4, 5, 6, 2, 6, 2, 6, 2, 4, 6, 6, 5, 6, 2, 4, 2,
    6, 2, 8, 4, 2, 2, 6, 2, 6, 2, 4, 4, 6, 6, 6, 6, 2, 2, 2,
    2, 8, 2, 6, 2, 2, 4, 6, 6, 6, 2, 6, 4, 4, 2, 6, 2, 6, 4,
    4, 2, 6, 2, 2, 2, 4, 4, 2, 1, 2, 2, 4, 2, 6, 2, 2, 6, 6,
];

/// Distinct bin counts and how many bins hold each, ascending by count
pub const COSX_COSY_TINY_DISTINCT: [(u32, u32); 6] =
    [(1, 12), (2, 78), (4, 13), (5, 5), (6, 18), (8, 1)];

/// Aggregate delentropy, before halving
pub const COSX_COSY_TINY_DELENTROPY: f64 = 6.775012499324645;

/// Largest single-bin entropy contribution
pub const COSX_COSY_TINY_MAX_DELENTROPY: f64 = 0.12179180114985422;

/// Entropy contribution indexed by bin count (0 for counts that don't occur)
pub const COSX_COSY_TINY_CONTRIBUTIONS: [f64; 9] = [
    0.0,
    0.023534224451211,
    0.04152828269743585,
    0.0,
    0.0719762329848994,
    0.0855114533517979,
    0.09824198104431049,
    0.0,
    0.12179180114985422,
];

/// Per-gradient-sample delentropy image of [`COSX_COSY_TINY`]
pub const COSX_COSY_TINY_DELENTROPY_IMAGE: [u8; 361] = [
    205, 150, 86, 86, 86, 86, 86, 150, 150, 49, 86, 205, 205, 86, 205, 86, 86, 205, 205,
    205, 205, 150, 150, 86, 205, 86, 255, 150, 86, 150, 205, 86, 205, 86, 86, 150, 86, 205,
    86, 86, 86, 86, 86, 86, 255, 86, 86, 49, 86, 86, 205, 86, 205, 205, 205, 150, 86,
    86, 205, 205, 205, 179, 150, 86, 205, 86, 86, 86, 150, 86, 205, 179, 205, 205, 86, 86,
    205, 86, 205, 179, 179, 179, 86, 86, 86, 49, 86, 86, 86, 179, 179, 179, 205, 86, 205,
    86, 150, 205, 205, 179, 205, 86, 150, 86, 86, 86, 205, 150, 150, 179, 205, 86, 205, 86,
    150, 150, 205, 205, 205, 205, 86, 86, 86, 49, 205, 86, 255, 150, 86, 86, 205, 86, 205,
    86, 205, 150, 150, 86, 205, 86, 205, 150, 86, 86, 255, 86, 205, 86, 86, 150, 205, 205,
    86, 86, 150, 86, 205, 86, 86, 205, 205, 179, 150, 86, 205, 86, 86, 86, 150, 150, 86,
    49, 205, 86, 205, 49, 205, 86, 205, 179, 179, 179, 86, 49, 86, 49, 86, 49, 86, 49,
    86, 205, 205, 86, 205, 86, 86, 205, 205, 179, 205, 150, 86, 86, 86, 86, 86, 150, 150,
    150, 205, 86, 205, 86, 86, 150, 86, 205, 205, 205, 205, 150, 150, 86, 205, 86, 255, 150,
    86, 86, 205, 86, 205, 205, 205, 150, 86, 86, 86, 86, 86, 86, 86, 86, 255, 86, 86,
    86, 150, 86, 205, 179, 205, 205, 86, 86, 205, 86, 205, 205, 205, 179, 150, 86, 205, 86,
    86, 86, 86, 179, 179, 179, 205, 86, 205, 49, 205, 86, 205, 179, 179, 179, 86, 86, 86,
    86, 205, 150, 150, 179, 205, 86, 205, 86, 205, 86, 150, 205, 205, 179, 205, 86, 150, 86,
    205, 86, 255, 150, 86, 86, 205, 86, 205, 86, 150, 150, 205, 205, 205, 205, 86, 86, 86,
    86, 255, 86, 205, 86, 86, 150, 205, 205, 205, 86, 205, 150, 150, 86, 205, 86, 205, 150,
    150, 86, 205, 86, 86, 86, 150, 150, 86, 49, 86, 86, 150, 86, 205, 86, 86, 205, 205,
];

/// The 4x4 ramp as an 8-bit image.
pub fn small_pic() -> GrayImage {
    GrayImage::from_bytes(4, 4, SMALL_PIC.to_vec()).expect("4x4 fixture")
}

/// The 4x4 ramp as a 16-bit image.
pub fn small_pic16() -> GrayImage {
    GrayImage::from_be_bytes(4, 4, &SMALL_PIC16_BE).expect("4x4 fixture")
}

/// A 4x4 all-zero 8-bit image.
pub fn small_zero_pic() -> GrayImage {
    GrayImage::from_bytes(4, 4, vec![0; 16]).expect("4x4 fixture")
}

/// The cosine reference image.
pub fn cosx_cosy_tiny() -> GrayImage {
    GrayImage::from_bytes(
        COSX_COSY_TINY_WIDTH,
        COSX_COSY_TINY_HEIGHT,
        COSX_COSY_TINY.to_vec(),
    )
    .expect("20x20 fixture")
}

/// Wrap a fixture byte array as an 8-bit image.
pub fn gray8(width: u32, height: u32, data: &[u8]) -> GrayImage {
    GrayImage::from_bytes(width, height, data.to_vec()).expect("fixture dimensions")
}
