//! PngSink - writes labelled renderings as PNG files

use sipp_core::{GrayImage, ImageSink};
use std::path::{Path, PathBuf};

/// Writes each rendering to `<prefix>_<label>.png`.
///
/// The prefix may include a directory, e.g. `out/photo` produces
/// `out/photo_hist.png`, `out/photo_delent.png`, and so on.
#[derive(Debug, Clone)]
pub struct PngSink {
    prefix: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSink {
    /// Create a sink that writes next to `prefix`.
    pub fn new<P: AsRef<Path>>(prefix: P) -> Self {
        Self {
            prefix: prefix.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Path a rendering with this label is written to.
    pub fn path_for(&self, label: &str) -> PathBuf {
        let mut name = self
            .prefix
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!("_{label}.png"));
        self.prefix.with_file_name(name)
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ImageSink for PngSink {
    fn write_gray(&mut self, label: &str, image: &GrayImage) -> sipp_core::Result<()> {
        let path = self.path_for(label);
        crate::write_image(image, &path)?;
        tracing::debug!(path = %path.display(), "wrote rendering");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let sink = PngSink::new("out/photo");
        assert_eq!(sink.path_for("hist"), PathBuf::from("out/photo_hist.png"));
        let sink = PngSink::new("photo");
        assert_eq!(sink.path_for("delent"), PathBuf::from("photo_delent.png"));
    }
}
