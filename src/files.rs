// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Enum capturing output image formats supported by `mdshot_rs`.

use std::path::Path;

/// Image formats the rendering engine can write.
/// The format of the output image is selected by the extension of the output path.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ImageFormat {
    Unknown,
    PNG,
    JPEG,
    TIFF,
    BMP,
}

impl ImageFormat {
    /// Identify image format from the name of the file (based on file extension).
    pub fn from_name(filename: impl AsRef<Path>) -> ImageFormat {
        let extension = match filename.as_ref().extension() {
            Some(x) => x,
            None => return ImageFormat::Unknown,
        };

        match extension.to_str() {
            Some("png") => ImageFormat::PNG,
            Some("jpg") | Some("jpeg") => ImageFormat::JPEG,
            Some("tif") | Some("tiff") => ImageFormat::TIFF,
            Some("bmp") => ImageFormat::BMP,
            Some(_) | None => ImageFormat::Unknown,
        }
    }
}
