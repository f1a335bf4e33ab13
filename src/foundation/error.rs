/// Convenience result type used across svg2gif.
pub type Svg2GifResult<T> = Result<T, Svg2GifError>;

/// Top-level error taxonomy for a conversion run.
#[derive(thiserror::Error, Debug)]
pub enum Svg2GifError {
    /// The input document does not exist on disk.
    #[error("File not found: {}", .0.display())]
    InputNotFound(std::path::PathBuf),

    /// Invalid option values or run configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while launching, loading or screenshotting the rendering surface.
    #[error("capture error: {0}")]
    Capture(String),

    /// Failures while running the external encoder.
    #[error("encode error: {message}")]
    Encode {
        /// Exit code reported by the encoder process, if it exited normally.
        code: Option<i32>,
        /// Human readable failure description.
        message: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Svg2GifError {
    /// Build a [`Svg2GifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`Svg2GifError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`Svg2GifError::Encode`] value without an exit code.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode {
            code: None,
            message: msg.into(),
        }
    }

    /// Process exit status the command line tool reports for this error.
    ///
    /// Encoder failures propagate the encoder's own exit code; everything else maps to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Encode {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
