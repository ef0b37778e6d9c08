use std::path::Path;
use image::io::Reader as ImageReader;
use image::{GrayImage, ImageFormat};
use log::debug;

use crate::errors::{EntropyError, Result};

const KNOWN_FORMATS: [ImageFormat; 15] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Pnm,
    ImageFormat::Tiff,
    ImageFormat::Tga,
    ImageFormat::Dds,
    ImageFormat::Bmp,
    ImageFormat::Ico,
    ImageFormat::Hdr,
    ImageFormat::OpenExr,
    ImageFormat::Farbfeld,
    ImageFormat::Avif,
    ImageFormat::Qoi,
];

/// Formats the compiled `image` crate can decode.
///
/// Fails with `NoDecoders` when the build carries no reading support at all;
/// the binary runs this once before touching any input.
pub fn probe_decoders() -> Result<Vec<ImageFormat>> {
    let formats: Vec<ImageFormat> = KNOWN_FORMATS
        .into_iter()
        .filter(|format| format.reading_enabled())
        .collect();

    if formats.is_empty() {
        return Err(EntropyError::NoDecoders);
    }

    debug!("Decoders available: {:?}", formats);
    Ok(formats)
}

/// Whether `path` references anything on the file system
#[inline]
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Decode an image and convert it to 8-bit luma
///
/// The format is sniffed from file content rather than trusted from the
/// extension.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Decoding {} as {:?}", path.display(), reader.format());

    let decoded = reader.decode()?;
    let gray = decoded.to_luma8();
    debug!("Decoded {}x{} image", gray.width(), gray.height());

    Ok(gray)
}
