use std::time::Duration;

use crate::foundation::error::{Svg2GifError, Svg2GifResult};

/// `ffmpeg` image2 pattern matching the names produced by [`FrameIndex::file_name`].
pub const FRAME_FILE_PATTERN: &str = "frame_%04d.png";

/// Zero-based position of a captured frame within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// File name of this frame inside the workspace (`frame_0042.png`).
    ///
    /// The index is zero-padded to four digits so lexicographic and numeric order agree for
    /// up to 10_000 frames.
    pub fn file_name(self) -> String {
        format!("frame_{:04}.png", self.0)
    }
}

/// Pixel size of the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

/// Capture cadence in frames per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fps(pub f64);

impl Fps {
    /// Reject zero, negative and non-finite rates.
    pub fn validate(self) -> Svg2GifResult<()> {
        if !self.0.is_finite() || self.0 <= 0.0 {
            return Err(Svg2GifError::validation(format!(
                "fps must be a positive number, got {}",
                self.0
            )));
        }
        Ok(())
    }

    /// Pause between two consecutive captures (`1000 / fps` milliseconds).
    ///
    /// Rates too small to express saturate at [`Duration::MAX`].
    pub fn frame_interval(self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.0).unwrap_or(Duration::MAX)
    }

    /// Number of whole frames covering `secs` seconds. Fractional products are floored.
    pub fn frames_for_secs_floor(self, secs: f64) -> u64 {
        (self.0 * secs).floor().max(0.0) as u64
    }

    /// Rate as passed on an `ffmpeg` command line (`20`, `12.5`).
    pub fn to_arg(self) -> String {
        format!("{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
