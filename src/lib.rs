// src/lib.rs - Library interface for image entropy screening

pub mod analyzer;
pub mod config;
pub mod entropy;
pub mod errors;
pub mod histogram;
pub mod image_io;
pub mod output;

// Re-export commonly used types and functions
pub use errors::{EntropyError, Result};
pub use config::Config;
pub use analyzer::{analyze, Outcome};
pub use histogram::Histogram;
pub use image_io::{load_grayscale, probe_decoders};

pub use entropy::{
    image_entropy,
    shannon_entropy,
    MAX_ENTROPY_BITS,
};

pub use output::{
    error_line,
    format_outcome,
    parse_report_line,
    verdict_line,
    write_outcome,
    Report,
    Verdict,
    SAFE_THRESHOLD,
};
