use thiserror::Error;
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

/// Custom error types for image entropy screening
#[derive(Error, Debug)]
pub enum EntropyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {path}: {source}")]
    ConfigLoad {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("No image decoders available in this build; rebuild with the image crate's format features enabled (e.g. png, jpeg)")]
    NoDecoders,

    #[error("Image contains no pixels")]
    EmptyImage,

    #[error("Decoder panicked: {0}")]
    DecoderPanic(String),

    #[error("Malformed report line: {0}")]
    MalformedReport(String),
}

/// Type alias for Result with our custom error type
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Render an error and its whole `source()` chain as one line.
///
/// Sources whose text is already the tail of the message (the usual shape of
/// `#[from]` wrappers) are not repeated.
pub fn flatten_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    single_line(&message)
}

/// Collapse line breaks so a message fits on one protocol line.
pub fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim_end)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
