//! Command line option resolution.
//!
//! Tokens are first split into named options ([`args::parse_args`]) and then overlaid onto the
//! default settings ([`config::RunConfig::resolve`]).

pub(crate) mod args;
pub(crate) mod config;

/// Text printed for `--help`.
pub const USAGE: &str = "\
svg2gif - Convert animated SVGs to GIFs

Usage:
  svg2gif <input.svg> [options]

Options:
  --output <file>     Output filename (default: <input>.gif)
  --width <n>         Viewport width (default: 3840)
  --height <n>        Viewport height (default: 2160)
  --fps <n>           Frames per second (default: 20)
  --duration <n>      Capture duration in seconds (default: 6)
  --delay <n>         Wait before capturing in ms (default: 1000)
  --colors <n>        Max GIF palette colors (default: 64)
  --frames-dir <dir>  Scratch directory for frames (default: .svg2gif-frames)
  --keep-frames       Keep captured frames after the run
  --verbose           Log pipeline details to stderr
  --help              Show this help

--width, --height and --colors take non-negative whole numbers; --delay must not be negative.

Examples:
  svg2gif seismic_wave.svg
  svg2gif seismic_wave.svg --fps 30 --duration 8
  svg2gif my_anim.svg --output cool.gif --colors 128
  svg2gif seismic_crt.svg --width 1920 --height 1080
";
