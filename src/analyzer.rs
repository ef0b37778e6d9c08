// src/analyzer.rs - Single-image entropy analysis with a catch-all fault boundary

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use log::{debug, info, warn};

use crate::entropy::image_entropy;
use crate::errors::{flatten_error, single_line, EntropyError, Result};
use crate::image_io::{load_grayscale, path_exists};

/// Tag prefixed to every processing failure message
pub const FAILURE_TAG: &str = "Image analysis failed";

/// Result of analysing one image path
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing exists at the path; no decode was attempted
    NotFound,
    /// Entropy in bits, within [0, 8]
    Computed(f64),
    /// Decode or processing fault, flattened to one line
    Failed(String),
}

impl Outcome {
    /// Numeric view used by callers that expect sentinels:
    /// -1 for a missing file, 0 for a failure.
    pub fn score(&self) -> f64 {
        match self {
            Outcome::NotFound => -1.0,
            Outcome::Computed(entropy) => *entropy,
            Outcome::Failed(_) => 0.0,
        }
    }
}

/// Analyse the image at `path`
///
/// Never returns an error and never unwinds: decoder errors and decoder
/// panics both become `Outcome::Failed`. The decoded buffer is dropped
/// before this returns on every path.
pub fn analyze<P: AsRef<Path>>(path: P) -> Outcome {
    let path = path.as_ref();

    if !path_exists(path) {
        info!("No file at {}", path.display());
        return Outcome::NotFound;
    }

    let measured = panic::catch_unwind(AssertUnwindSafe(|| measure(path)))
        .unwrap_or_else(|payload| Err(EntropyError::DecoderPanic(panic_message(payload))));

    match measured {
        Ok(entropy) => {
            debug!("Entropy of {}: {:.6} bits", path.display(), entropy);
            Outcome::Computed(entropy)
        }
        Err(e) => {
            let detail = flatten_error(&e);
            warn!("Analysis of {} failed: {}", path.display(), detail);
            Outcome::Failed(format!("{}: {}", FAILURE_TAG, detail))
        }
    }
}

fn measure(path: &Path) -> Result<f64> {
    let gray = load_grayscale(path)?;
    image_entropy(&gray)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    let message = if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic payload".to_string()
    };
    single_line(&message)
}
