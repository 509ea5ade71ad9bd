use std::fs;

use sipp_core::{GrayImage, ImageSink};

use crate::error::{TestError, TestResult};
use crate::regout_dir;

/// Whether a regression run also saves its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    #[default]
    Compare,
    Display,
}

impl RegTestMode {
    /// Reads `REGTEST_MODE`; anything other than `display` means compare.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Running state of one `*_reg` test.
///
/// Each `compare_*` and `display_*` call advances the check index, so a
/// failure message points at the exact check that tripped.
pub struct RegParams {
    pub test_name: String,
    index: usize,
    pub mode: RegTestMode,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let rp = Self::with_mode(test_name, RegTestMode::from_env());
        if rp.display() {
            let _ = fs::create_dir_all(regout_dir());
        }
        eprintln!("== {}_reg ({:?}) ==", test_name, rp.mode);
        rp
    }

    fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        Self {
            test_name: test_name.to_owned(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Passes when `|expected - actual| <= delta`. NaN never passes.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let index = self.next();
        if (expected - actual).abs() <= delta {
            return true;
        }
        self.record(TestError::ValueMismatch {
            index,
            expected,
            actual,
            delta,
        })
    }

    /// Passes when size, depth and every sample agree.
    pub fn compare_gray(&mut self, expected: &GrayImage, actual: &GrayImage) -> bool {
        let index = self.next();
        let detail = if expected.dimensions() != actual.dimensions()
            || expected.depth() != actual.depth()
        {
            let (ew, eh) = expected.dimensions();
            let (aw, ah) = actual.dimensions();
            Some(format!(
                "{ew}x{eh} {:?} against {aw}x{ah} {:?}",
                expected.depth(),
                actual.depth()
            ))
        } else {
            let width = expected.width() as usize;
            expected
                .samples()
                .zip(actual.samples())
                .position(|(e, a)| e != a)
                .map(|i| {
                    let (x, y) = (i % width, i / width);
                    let e = expected.samples().nth(i).unwrap_or_default();
                    let a = actual.samples().nth(i).unwrap_or_default();
                    format!("first difference at ({x}, {y}): {e} against {a}")
                })
        };
        match detail {
            None => true,
            Some(detail) => self.record(TestError::ImageMismatch { index, detail }),
        }
    }

    pub fn compare_strings(&mut self, left: &[u8], right: &[u8]) -> bool {
        let index = self.next();
        if left == right {
            return true;
        }
        self.record(TestError::BytesMismatch {
            index,
            left: left.len(),
            right: right.len(),
        })
    }

    /// Saves `image` as `<regout>/<test>.<index>.<label>.png` in display
    /// mode. Counts as a check either way.
    pub fn display_gray(&mut self, image: &GrayImage, label: &str) -> TestResult<()> {
        let index = self.next();
        if !self.display() {
            return Ok(());
        }
        let path = regout_dir().join(format!("{}.{:02}.{}.png", self.test_name, index, label));
        sipp_io::write_image(image, &path)
            .map_err(|source| TestError::ImageWrite { path: path.clone(), source })?;
        eprintln!("  saved {}", path.display());
        Ok(())
    }

    /// Prints the verdict and every recorded failure.
    pub fn cleanup(self) -> bool {
        let ok = self.is_success();
        if ok {
            eprintln!("{}_reg: ok after {} checks", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for line in &self.failures {
                eprintln!("  {line}");
            }
        }
        ok
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn next(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn record(&mut self, err: TestError) -> bool {
        let line = format!("{}_reg: {err}", self.test_name);
        eprintln!("{line}");
        self.failures.push(line);
        false
    }
}

/// Routes analysis renderings through [`RegParams::display_gray`].
impl ImageSink for RegParams {
    fn write_gray(&mut self, label: &str, image: &GrayImage) -> sipp_core::Result<()> {
        self.display_gray(image, label)
            .map_err(|e| sipp_core::Error::EncodeError(e.to_string()))
    }
}
