use std::path::PathBuf;

use crate::capture::capturer::FrameSet;
use crate::foundation::error::Svg2GifResult;
use crate::options::config::RunConfig;

/// Output settings for turning a [`FrameSet`] into a GIF.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifEncodeOpts {
    /// GIF file to write.
    pub out_path: PathBuf,
    /// Upper bound for the shared palette.
    pub max_colors: u32,
}

impl GifEncodeOpts {
    /// Encoder settings for a run: configured output and palette size.
    pub fn from_config(cfg: &RunConfig) -> Self {
        Self {
            out_path: cfg.output.clone(),
            max_colors: cfg.colors,
        }
    }
}

/// Consumes a complete frame sequence and writes one looping animation.
///
/// Encoding is synchronous: `encode` returns once the output is fully written or has failed.
pub trait SequenceEncoder {
    /// Encode every frame of `frames` into `opts.out_path`.
    fn encode(&mut self, frames: &FrameSet, opts: &GifEncodeOpts) -> Svg2GifResult<()>;
}
