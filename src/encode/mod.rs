//! Sequence encoders.
//!
//! Encoders run after capture has finished and read the frames back from the workspace.

/// `ffmpeg`-based GIF encoder.
pub(crate) mod ffmpeg;
/// Encoder trait and output settings.
pub(crate) mod sink;
