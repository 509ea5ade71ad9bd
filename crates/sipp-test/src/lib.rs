//! Shared harness for the `*_reg` integration tests of the sipp crates.
//!
//! A [`RegParams`] numbers every check, keeps going after a mismatch and
//! reports everything in [`RegParams::cleanup`]. With `REGTEST_MODE=display`
//! the images passed to [`RegParams::display_gray`] are also saved under
//! `tests/regout/` at the workspace root.
//!
//! ```ignore
//! let mut rp = sipp_test::RegParams::new("delentropy");
//! rp.compare_values(6.775, calc.aggregate_delentropy(), 1e-3);
//! assert!(rp.cleanup());
//! ```

use std::path::PathBuf;

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

fn workspace_root() -> PathBuf {
    // crates/sipp-test -> workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Path of a file in `tests/data/images`.
pub fn test_data_path(name: &str) -> PathBuf {
    workspace_root().join("tests/data/images").join(name)
}

/// Directory that display mode and file round trips write into.
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests/regout")
}

/// Decode a fixture from `tests/data/images`.
pub fn load_test_image(name: &str) -> TestResult<sipp_core::GrayImage> {
    let path = test_data_path(name);
    sipp_io::read_image(&path).map_err(|source| TestError::ImageLoad { path, source })
}
