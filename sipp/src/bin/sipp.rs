use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use sipp::hist::HistogramOptions;
use sipp::io::PngSink;
use sipp::{AnalysisOptions, Renderings, analyze};

#[derive(Parser)]
#[command(name = "sipp")]
#[command(version, about = "Delentropy and gradient joint-histogram analysis of grayscale images", long_about = None)]
struct Cli {
    /// Input image; must be an 8- or 16-bit grayscale PNG
    #[arg(long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Output image file prefix (default: input path without extension)
    #[arg(long, value_name = "PREFIX")]
    out: Option<PathBuf>,

    /// Write a thumbnail image
    #[arg(short = 't', long)]
    thumbnail: bool,

    /// Write the gradient real and imaginary images
    #[arg(short = 'g', long)]
    gradient: bool,

    /// Write a histogram image
    #[arg(long)]
    hist: bool,

    /// Write a histogram image with the center spike suppressed
    #[arg(long)]
    hist_suppressed: bool,

    /// Write a histogram delentropy image
    #[arg(long)]
    hist_delentropy: bool,

    /// Write a delentropy image
    #[arg(long)]
    delentropy: bool,

    /// Write a conventional entropy image
    #[arg(long)]
    entropy: bool,

    /// Write all the images
    #[arg(short = 'a', long)]
    all: bool,

    /// Clip histogram counts at 255 instead of rescaling
    #[arg(long)]
    clip: bool,

    /// Excursion above which a sparse histogram may be used
    #[arg(long, default_value_t = HistogramOptions::default().sparse_threshold)]
    sparse_threshold: u32,

    /// Largest side of a histogram rendering before it is downscaled
    #[arg(long, default_value_t = HistogramOptions::default().max_render_extent)]
    max_render_extent: u32,

    /// Print "<input>,<delentropy>" on a single line
    #[arg(long)]
    csv: bool,

    /// Report every stage
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn renderings(&self) -> Renderings {
        if self.all {
            return Renderings::all();
        }
        Renderings {
            thumbnail: self.thumbnail,
            gradient: self.gradient,
            histogram: self.hist,
            histogram_suppressed: self.hist_suppressed,
            histogram_delentropy: self.hist_delentropy,
            delentropy: self.delentropy,
            entropy: self.entropy,
        }
    }

    fn prefix(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| self.input.with_extension(""))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let options = AnalysisOptions {
        histogram: HistogramOptions {
            sparse_threshold: cli.sparse_threshold,
            max_render_extent: cli.max_render_extent,
        },
        clip_histogram: cli.clip,
        renderings: cli.renderings(),
        ..Default::default()
    };

    let prefix = cli.prefix();
    debug!(input = %cli.input.display(), prefix = %prefix.display(), "starting analysis");
    let src = read_source(&cli.input)?;

    let mut sink = PngSink::new(&prefix);
    let report = analyze(&src, &options, &mut sink)
        .with_context(|| format!("analysis of {} failed", cli.input.display()))?;

    if cli.csv {
        println!("{},{:.2}", cli.input.display(), report.delentropy);
    } else {
        println!("Delentropy: {}", report.delentropy);
    }

    for path in sink.written() {
        info!(path = %path.display(), "wrote image");
    }
    debug!(
        entropy = report.conventional_entropy,
        storage = ?report.storage,
        width = report.histogram_size.0,
        height = report.histogram_size.1,
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(())
}

fn read_source(path: &Path) -> anyhow::Result<sipp::GrayImage> {
    sipp::io::read_image(path).with_context(|| format!("error reading image {}", path.display()))
}
