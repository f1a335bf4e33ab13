use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::foundation::core::{Fps, Viewport};
use crate::foundation::error::{Svg2GifError, Svg2GifResult};
use crate::options::args::{OptionValue, ParsedArgs};

/// Input document used when none is given.
pub const DEFAULT_INPUT: &str = "seismic_wave.svg";
/// Workspace directory used when `--frames-dir` is not given.
pub const DEFAULT_FRAMES_DIR: &str = ".svg2gif-frames";

/// Immutable settings for one conversion run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Animated document to capture, as given on the command line.
    pub input: PathBuf,
    /// GIF to write.
    pub output: PathBuf,
    /// Size of the rendering surface.
    pub viewport: Viewport,
    /// Capture and playback rate.
    pub fps: Fps,
    /// Seconds of animation to capture.
    pub duration_secs: f64,
    /// Wait between page load and the first capture.
    pub delay: Duration,
    /// Maximum palette size handed to the encoder.
    pub colors: u32,
    /// Scratch directory holding the captured frames.
    pub frames_dir: PathBuf,
    /// Leave the captured frames on disk after the run.
    pub keep_frames: bool,
    /// Enable debug logging.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::for_input(DEFAULT_INPUT)
    }
}

impl RunConfig {
    /// Default settings for `input`, with the output derived from its file stem.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: default_output_for(&input),
            input,
            viewport: Viewport {
                width: 3840,
                height: 2160,
            },
            fps: Fps(20.0),
            duration_secs: 6.0,
            delay: Duration::from_millis(1000),
            colors: 64,
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            keep_frames: false,
            verbose: false,
        }
    }

    /// Overlay parsed command line options onto the defaults.
    ///
    /// Values are taken as given: a zero or negative rate is not rejected here but by
    /// [`RunConfig::frame_count`]. Only values of the wrong kind (text where a number is
    /// needed, fractional pixel sizes) are reported.
    pub fn resolve(args: &ParsedArgs) -> Svg2GifResult<Self> {
        let input = match args.input() {
            Some(v) => path_value("input", v)?,
            None => PathBuf::from(DEFAULT_INPUT),
        };
        let mut cfg = Self::for_input(input);

        if let Some(v) = args.get("output") {
            cfg.output = path_value("output", v)?;
        }
        if let Some(v) = args.get("width") {
            cfg.viewport.width = u32_value("width", v)?;
        }
        if let Some(v) = args.get("height") {
            cfg.viewport.height = u32_value("height", v)?;
        }
        if let Some(v) = args.get("fps") {
            cfg.fps = Fps(number_value("fps", v)?);
        }
        if let Some(v) = args.get("duration") {
            cfg.duration_secs = number_value("duration", v)?;
        }
        if let Some(v) = args.get("delay") {
            let ms = number_value("delay", v)?;
            cfg.delay = Duration::try_from_secs_f64(ms / 1000.0).map_err(|_| {
                Svg2GifError::validation(format!(
                    "--delay expects a non-negative number of milliseconds, got {ms}"
                ))
            })?;
        }
        if let Some(v) = args.get("colors") {
            cfg.colors = u32_value("colors", v)?;
        }
        if let Some(v) = args.get("frames-dir") {
            cfg.frames_dir = path_value("frames-dir", v)?;
        }
        cfg.keep_frames = args.get("keep-frames").is_some_and(OptionValue::is_truthy);
        cfg.verbose = args.get("verbose").is_some_and(OptionValue::is_truthy);

        Ok(cfg)
    }

    /// Number of frames to capture: `fps * duration`, floored.
    ///
    /// Fails for non-positive rates or durations and when the floored product is zero.
    pub fn frame_count(&self) -> Svg2GifResult<u64> {
        self.fps.validate()?;
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(Svg2GifError::validation(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        let frames = self.fps.frames_for_secs_floor(self.duration_secs);
        if frames == 0 {
            return Err(Svg2GifError::validation(format!(
                "{} fps over {}s yields no frames",
                self.fps.0, self.duration_secs
            )));
        }
        Ok(frames)
    }
}

/// `<stem>.gif` in the working directory, whatever directory the input lives in.
pub fn default_output_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    PathBuf::from(format!("{stem}.gif"))
}

fn path_value(name: &str, v: &OptionValue) -> Svg2GifResult<PathBuf> {
    match v {
        OptionValue::Text(s) => Ok(PathBuf::from(s)),
        OptionValue::Number(n) => Ok(PathBuf::from(n.to_string())),
        OptionValue::Flag => Err(Svg2GifError::validation(format!(
            "--{name} expects a path"
        ))),
    }
}

fn number_value(name: &str, v: &OptionValue) -> Svg2GifResult<f64> {
    match v {
        OptionValue::Number(n) => Ok(*n),
        OptionValue::Text(s) => Err(Svg2GifError::validation(format!(
            "--{name} expects a number, got '{s}'"
        ))),
        OptionValue::Flag => Err(Svg2GifError::validation(format!(
            "--{name} expects a number"
        ))),
    }
}

fn u32_value(name: &str, v: &OptionValue) -> Svg2GifResult<u32> {
    let n = number_value(name, v)?;
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        return Err(Svg2GifError::validation(format!(
            "--{name} expects a whole number, got {n}"
        )));
    }
    Ok(n as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/options/config.rs"]
mod tests;
