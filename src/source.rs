//! Image sources: raw bytes or a fetchable URL.

use image::imageops::FilterType;
use image::RgbaImage;
use log::debug;

use crate::ascii::grid_height;
use crate::error::ConvertError;

/// Where the input image comes from.
///
/// Fetching and decoding are the only fallible I/O in a conversion; once a
/// pixel buffer exists the rest of the pipeline is pure computation.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Encoded image bytes (PNG, JPEG, GIF, WebP, ...).
    Bytes(Vec<u8>),
    /// An http(s) URL to fetch the encoded image from.
    Url(String),
}

impl ImageSource {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        ImageSource::Bytes(data.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        ImageSource::Bytes(data)
    }
}

/// Decode a source and resample it to the character grid.
///
/// The output is `width` columns by `grid_height(..)` rows (the 0.55
/// monospace cell-aspect correction). Resampling is a single bilinear
/// downscale; the exact filter is not part of the contract, the output
/// dimensions are.
///
/// Any fetch or decode failure aborts the conversion with no partial
/// output; fallback behavior belongs to the caller.
pub(crate) fn decode_and_scale(
    source: &ImageSource,
    width: u32,
) -> Result<RgbaImage, ConvertError> {
    let img = match source {
        ImageSource::Bytes(data) => image::load_from_memory(data)?,
        ImageSource::Url(url) => {
            debug!("fetching image from {}", url);
            let data = fetch(url)?;
            image::load_from_memory(&data)?
        }
    };

    let (img_w, img_h) = (img.width(), img.height());
    let height = grid_height(img_w, img_h, width);
    debug!(
        "decoded {}x{} image, resampling to {}x{} grid",
        img_w, img_h, width, height
    );

    Ok(img.resize_exact(width, height, FilterType::Triangle).to_rgba8())
}

fn fetch(url: &str) -> Result<Vec<u8>, ConvertError> {
    let wrap = |source: reqwest::Error| ConvertError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(wrap)?;
    let bytes = response.bytes().map_err(wrap)?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_and_scale_dimensions() {
        let source = ImageSource::bytes(png_bytes(200, 200));
        let rgba = decode_and_scale(&source, 40).unwrap();
        assert_eq!(rgba.width(), 40);
        assert_eq!(rgba.height(), 22); // round(40 * 1.0 * 0.55)
    }

    #[test]
    fn test_undecodable_bytes() {
        let source = ImageSource::bytes(vec![0u8, 1, 2, 3]);
        let err = decode_and_scale(&source, 40).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_fetch_bad_url() {
        let source = ImageSource::url("http://127.0.0.1:1/nothing.png");
        let err = decode_and_scale(&source, 40).unwrap_err();
        assert!(matches!(err, ConvertError::Fetch { .. }));
    }
}
