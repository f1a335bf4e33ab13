use std::path::PathBuf;

use anyhow::Context as _;

use crate::capture::capturer::{CaptureOpts, capture_frames, resolve_document};
use crate::capture::surface::{CaptureObserver, Pacer, SurfaceLauncher};
use crate::encode::sink::{GifEncodeOpts, SequenceEncoder};
use crate::foundation::error::Svg2GifResult;
use crate::options::config::RunConfig;
use crate::workspace::frames::Workspace;

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// The GIF that was written.
    pub output: PathBuf,
    /// Number of frames captured and encoded.
    pub frames: u64,
    /// Size of the output file in bytes.
    pub bytes: u64,
    /// Workspace left on disk because `keep_frames` was set.
    pub kept_frames: Option<PathBuf>,
}

impl RunReport {
    /// Output size in mebibytes.
    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / 1024.0 / 1024.0
    }
}

/// External collaborators of a run.
pub struct Collaborators<'a, L, E> {
    /// Starts the rendering surface.
    pub launcher: &'a L,
    /// Turns the frames into the final animation.
    pub encoder: &'a mut E,
    /// Waits between captures.
    pub pacer: &'a mut dyn Pacer,
    /// Receives capture progress.
    pub observer: &'a mut dyn CaptureObserver,
}

/// Convert `cfg.input` into `cfg.output`.
///
/// The input is checked before anything touches the disk, so a missing document leaves no
/// workspace behind. The workspace is removed when the run ends, whether it succeeded or not,
/// unless `cfg.keep_frames` is set.
#[tracing::instrument(skip_all, fields(input = %cfg.input.display(), output = %cfg.output.display()))]
pub fn run<L, E>(cfg: &RunConfig, io: Collaborators<'_, L, E>) -> Svg2GifResult<RunReport>
where
    L: SurfaceLauncher,
    E: SequenceEncoder,
{
    let document = resolve_document(&cfg.input)?;
    let capture_opts = CaptureOpts::from_config(cfg)?;
    let encode_opts = GifEncodeOpts::from_config(cfg);

    let mut workspace = Workspace::prepare(&cfg.frames_dir)?;
    workspace.keep_on_drop(cfg.keep_frames);

    let frames = capture_frames(
        io.launcher,
        &document,
        &capture_opts,
        &workspace,
        io.pacer,
        io.observer,
    )?;
    tracing::info!(frames = frames.len, "capture complete");

    io.encoder.encode(&frames, &encode_opts)?;

    let kept_frames = if cfg.keep_frames {
        Some(workspace.path().to_path_buf())
    } else {
        workspace.remove()?;
        None
    };

    let bytes = std::fs::metadata(&cfg.output)
        .with_context(|| format!("encoder produced no output at '{}'", cfg.output.display()))?
        .len();
    tracing::info!(bytes, "encode complete");

    Ok(RunReport {
        output: cfg.output.clone(),
        frames: frames.len,
        bytes,
        kept_frames,
    })
}
