use image::GrayImage;

/// Number of intensity levels in an 8-bit grayscale image
pub const BINS: usize = 256;

/// Pixel counts per grayscale intensity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BINS],
}

impl Histogram {
    /// Count every pixel of a grayscale image; bins sum to width * height
    pub fn from_gray(image: &GrayImage) -> Self {
        let mut bins = [0u64; BINS];
        for pixel in image.pixels() {
            bins[pixel[0] as usize] += 1;
        }
        Self { bins }
    }

    pub fn from_bins(bins: [u64; BINS]) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[u64; BINS] {
        &self.bins
    }

    /// Total number of counted pixels
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Number of intensity levels with at least one pixel
    pub fn occupied(&self) -> usize {
        self.bins.iter().filter(|&&count| count > 0).count()
    }
}
