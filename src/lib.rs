//! svg2gif captures an animated SVG in headless Chrome and stitches the frames into a looping GIF.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: command line tokens -> [`RunConfig`] (defaults overlaid with given options)
//! 2. **Prepare**: an empty [`Workspace`] directory for the frames
//! 3. **Capture**: one PNG screenshot per frame, taken sequentially at the configured rate
//! 4. **Encode**: the system `ffmpeg` builds a shared palette and writes the GIF
//! 5. **Clean up**: the workspace is removed
//!
//! The browser and the encoder sit behind [`SurfaceLauncher`] and [`SequenceEncoder`] so the
//! pipeline can be driven without either installed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod capture;
mod encode;
mod foundation;
mod options;
mod pipeline;
mod workspace;

pub use capture::capturer::{CaptureOpts, FrameSet, capture_frames, resolve_document};
pub use capture::chrome::{ChromeLauncher, ChromeSurface};
pub use capture::surface::{CaptureObserver, Pacer, RenderSurface, SurfaceLauncher, ThreadPacer};
pub use encode::ffmpeg::{FfmpegGifEncoder, ensure_parent_dir, is_ffmpeg_on_path, palette_filter};
pub use encode::sink::{GifEncodeOpts, SequenceEncoder};
pub use foundation::core::{FRAME_FILE_PATTERN, Fps, FrameIndex, Viewport};
pub use foundation::error::{Svg2GifError, Svg2GifResult};
pub use options::USAGE;
pub use options::args::{OPTION_MARKER, OptionValue, ParsedArgs, parse_args};
pub use options::config::{DEFAULT_FRAMES_DIR, DEFAULT_INPUT, RunConfig, default_output_for};
pub use pipeline::{Collaborators, RunReport, run};
pub use workspace::frames::Workspace;
