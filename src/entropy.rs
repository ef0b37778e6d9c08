// src/entropy.rs - Shannon entropy over grayscale intensity histograms

use image::GrayImage;

use crate::errors::{EntropyError, Result};
use crate::histogram::Histogram;

/// Largest possible entropy for 256 intensity levels, log2(256)
pub const MAX_ENTROPY_BITS: f64 = 8.0;

/// Calculate Shannon entropy (bits) of a histogram over `pixel_count` pixels
///
/// Empty bins contribute nothing: -Σ(p * log2(p)) for p > 0.
pub fn shannon_entropy(histogram: &Histogram, pixel_count: u64) -> Result<f64> {
    if pixel_count == 0 {
        return Err(EntropyError::EmptyImage);
    }

    let total = pixel_count as f64;
    let entropy = -histogram
        .bins()
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>();

    // a single occupied bin sums to -0.0
    Ok(if entropy > 0.0 { entropy } else { 0.0 })
}

/// Entropy of a grayscale image, normalising by width * height
pub fn image_entropy(image: &GrayImage) -> Result<f64> {
    let (width, height) = image.dimensions();
    let histogram = Histogram::from_gray(image);
    shannon_entropy(&histogram, width as u64 * height as u64)
}
