use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::capture::capturer::FrameSet;
use crate::encode::sink::{GifEncodeOpts, SequenceEncoder};
use crate::foundation::error::{Svg2GifError, Svg2GifResult};

/// Encoder that shells out to the system `ffmpeg` binary.
///
/// Frames are read back through the image2 pattern, a palette shared by the whole sequence is
/// generated, and every frame is mapped onto it with Bayer dithering.
#[derive(Clone, Debug)]
pub struct FfmpegGifEncoder {
    /// Program to run; `ffmpeg` resolved through `PATH` by default.
    pub program: PathBuf,
}

impl Default for FfmpegGifEncoder {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegGifEncoder {
    /// Full argument list passed to `ffmpeg` for `frames`. An existing output is overwritten.
    pub fn args(&self, frames: &FrameSet, opts: &GifEncodeOpts) -> Vec<OsString> {
        let mut args: Vec<OsString> =
            ["-y", "-loglevel", "error", "-framerate"].map(OsString::from).into();
        args.push(frames.fps.to_arg().into());
        args.push("-i".into());
        args.push(frames.pattern.clone().into_os_string());
        args.push("-vf".into());
        args.push(palette_filter(opts.max_colors).into());
        args.push(opts.out_path.clone().into_os_string());
        args
    }
}

impl SequenceEncoder for FfmpegGifEncoder {
    #[tracing::instrument(skip_all, fields(out = %opts.out_path.display(), frames = frames.len))]
    fn encode(&mut self, frames: &FrameSet, opts: &GifEncodeOpts) -> Svg2GifResult<()> {
        ensure_parent_dir(&opts.out_path)?;

        let args = self.args(frames, opts);
        tracing::debug!(program = %self.program.display(), ?args, "running encoder");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Svg2GifError::encode(format!(
                    "failed to spawn {} (is it installed and on PATH?): {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Svg2GifError::Encode {
                code: output.status.code(),
                message: format!(
                    "{} exited with status {}: {}",
                    self.program.display(),
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(())
    }
}

/// Two-stage filter graph: palette generation capped at `max_colors`, then palette mapping
/// with ordered dithering.
pub fn palette_filter(max_colors: u32) -> String {
    format!(
        "split[s0][s1];[s0]palettegen=max_colors={max_colors}[p];[s1][p]paletteuse=dither=bayer"
    )
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> Svg2GifResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
