use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use svg2gif::{
    CaptureObserver, ChromeLauncher, Collaborators, FfmpegGifEncoder, FrameIndex, RunConfig,
    Svg2GifResult, ThreadPacer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "svg2gif",
    version,
    about = "Convert animated SVGs to GIFs",
    disable_help_flag = true
)]
struct Cli {
    /// Input SVG followed by `--option value` pairs (run with `--help` for the list).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let parsed = svg2gif::parse_args(&cli.tokens);
    if parsed.wants_help() {
        println!("{}", svg2gif::USAGE);
        return ExitCode::SUCCESS;
    }

    let result = RunConfig::resolve(&parsed).and_then(|cfg| {
        init_tracing(cfg.verbose);
        convert(&cfg)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "svg2gif=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn convert(cfg: &RunConfig) -> Svg2GifResult<()> {
    let document = svg2gif::resolve_document(&cfg.input)?;
    let frame_count = cfg.frame_count()?;

    println!("Input:    {}", document.display());
    println!("Output:   {}", cfg.output.display());
    println!("Viewport: {}x{}", cfg.viewport.width, cfg.viewport.height);
    println!(
        "Capture:  {frame_count} frames at {}fps ({}s)",
        cfg.fps.0, cfg.duration_secs
    );
    println!("Palette:  {} colors", cfg.colors);
    println!();

    let launcher = ChromeLauncher::default();
    let mut encoder = FfmpegGifEncoder::default();
    let mut pacer = ThreadPacer;
    let mut progress = CaptureProgress::new(frame_count)?;

    let report = svg2gif::run(
        cfg,
        Collaborators {
            launcher: &launcher,
            encoder: &mut encoder,
            pacer: &mut pacer,
            observer: &mut progress,
        },
    )?;

    if let Some(dir) = &report.kept_frames {
        println!("Frames kept in {}", dir.display());
    }
    println!("Done: {} ({:.1}MB)", report.output.display(), report.size_mb());
    Ok(())
}

/// Single in-place progress line for the capture loop.
struct CaptureProgress {
    bar: ProgressBar,
}

impl CaptureProgress {
    fn new(total: u64) -> Svg2GifResult<Self> {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("Capturing: {percent}% ({pos}/{len})")
                .context("invalid progress template")?,
        );
        Ok(Self { bar })
    }
}

impl CaptureObserver for CaptureProgress {
    fn frame_captured(&mut self, idx: FrameIndex, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(idx.0 + 1);
    }

    fn capture_finished(&mut self, _total: u64) {
        self.bar.finish();
        println!("Stitching GIF...");
    }
}
