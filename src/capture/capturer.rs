use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::capture::surface::{CaptureObserver, Pacer, RenderSurface, SurfaceLauncher};
use crate::foundation::core::{Fps, FrameIndex, Viewport};
use crate::foundation::error::{Svg2GifError, Svg2GifResult};
use crate::options::config::RunConfig;
use crate::workspace::frames::Workspace;

/// Settings for one capture pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureOpts {
    /// Size of the rendering surface.
    pub viewport: Viewport,
    /// Capture cadence.
    pub fps: Fps,
    /// Number of frames to take.
    pub frame_count: u64,
    /// Wait between page load and the first capture.
    pub delay: Duration,
}

impl CaptureOpts {
    /// Derive capture settings from a run configuration, checking the frame count.
    pub fn from_config(cfg: &RunConfig) -> Svg2GifResult<Self> {
        Ok(Self {
            viewport: cfg.viewport,
            fps: cfg.fps,
            frame_count: cfg.frame_count()?,
            delay: cfg.delay,
        })
    }
}

/// Ordered frames written by one capture pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSet {
    /// Encoder input pattern (`<workspace>/frame_%04d.png`).
    pub pattern: PathBuf,
    /// Number of frames, indices `0..len`.
    pub len: u64,
    /// Rate the frames were captured at.
    pub fps: Fps,
}

/// Turn the input path into an absolute path, failing when nothing exists there.
pub fn resolve_document(input: &Path) -> Svg2GifResult<PathBuf> {
    let abs = std::path::absolute(input).map_err(|e| {
        Svg2GifError::validation(format!("invalid input path '{}': {e}", input.display()))
    })?;
    if !abs.exists() {
        return Err(Svg2GifError::InputNotFound(abs));
    }
    Ok(abs)
}

/// Capture `opts.frame_count` stills of `document` into `workspace`.
///
/// Frames are taken strictly one after another: capture, write, notify `observer`, then pause
/// for one frame interval. Capture latency is not subtracted from the pause. The surface is
/// closed whether or not every frame succeeded.
#[tracing::instrument(skip_all, fields(document = %document.display(), frames = opts.frame_count))]
pub fn capture_frames<L: SurfaceLauncher>(
    launcher: &L,
    document: &Path,
    opts: &CaptureOpts,
    workspace: &Workspace,
    pacer: &mut dyn Pacer,
    observer: &mut dyn CaptureObserver,
) -> Svg2GifResult<FrameSet> {
    opts.fps.validate()?;
    if opts.frame_count == 0 {
        return Err(Svg2GifError::validation("frame count must be at least 1"));
    }
    let url = Url::from_file_path(document).map_err(|()| {
        Svg2GifError::validation(format!(
            "document path '{}' is not absolute",
            document.display()
        ))
    })?;

    let mut surface = launcher.launch(opts.viewport)?;
    let captured = run_capture_loop(&mut surface, &url, opts, workspace, pacer, observer);
    let closed = surface.close();
    let frames = captured?;
    closed?;
    observer.capture_finished(frames);

    Ok(FrameSet {
        pattern: workspace.input_pattern(),
        len: frames,
        fps: opts.fps,
    })
}

fn run_capture_loop<S: RenderSurface>(
    surface: &mut S,
    url: &Url,
    opts: &CaptureOpts,
    workspace: &Workspace,
    pacer: &mut dyn Pacer,
    observer: &mut dyn CaptureObserver,
) -> Svg2GifResult<u64> {
    surface.load(url)?;
    pacer.pause(opts.delay);

    let interval = opts.fps.frame_interval();
    let total = opts.frame_count;
    for i in 0..total {
        let idx = FrameIndex(i);
        let png = surface.capture_png()?;
        workspace.write_frame(idx, &png)?;
        observer.frame_captured(idx, total);
        tracing::trace!(frame = i, bytes = png.len(), "captured");
        if i + 1 < total {
            pacer.pause(interval);
        }
    }
    Ok(total)
}

#[cfg(test)]
#[path = "../../tests/unit/capture/capturer.rs"]
mod tests;
