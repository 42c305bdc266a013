use image::DynamicImage;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur while taking in an uploaded file
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("empty upload")]
    EmptyUpload,

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an uploaded file into a color pixel buffer.
///
/// The format is sniffed from the bytes themselves; the filename and any
/// declared content type are never trusted. The result is normalized to
/// 3-channel RGB, dropping alpha.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, IntakeError> {
    if bytes.is_empty() {
        return Err(IntakeError::EmptyUpload);
    }

    let decoded = image::load_from_memory(bytes)?;
    Ok(DynamicImage::ImageRgb8(decoded.to_rgb8()))
}

/// Re-encode a decoded frame as JPEG for transport to the analysis service.
pub fn encode_jpeg(frame: &DynamicImage) -> Result<Vec<u8>, IntakeError> {
    let mut buf = Cursor::new(Vec::new());
    frame.write_to(&mut buf, image::ImageFormat::Jpeg)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([180, 90, 30])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_valid_png() {
        let bytes = png_bytes(4, 4);
        let frame = decode_image(&bytes).unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 4);
    }

    #[test]
    fn test_decode_normalizes_to_rgb() {
        // PNG with an alpha channel still comes out as a 3-channel buffer
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([10, 20, 30, 128]),
        ));
        let mut buf = Cursor::new(Vec::new());
        rgba.write_to(&mut buf, image::ImageFormat::Png).unwrap();

        let frame = decode_image(&buf.into_inner()).unwrap();
        assert!(matches!(frame, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, IntakeError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_empty_upload() {
        let err = decode_image(&[]).unwrap_err();
        assert!(matches!(err, IntakeError::EmptyUpload));
    }

    #[test]
    fn test_format_sniffed_from_content_not_name() {
        // A PNG payload decodes fine even when a caller claims it is a JPEG;
        // nothing in the intake path looks at names or content types.
        let bytes = png_bytes(2, 2);
        assert!(decode_image(&bytes).is_ok());
    }

    #[test]
    fn test_jpeg_round_trip() {
        let frame = decode_image(&png_bytes(8, 8)).unwrap();
        let jpeg = encode_jpeg(&frame).unwrap();
        // JPEG magic bytes
        assert!(jpeg.starts_with(&[0xFF, 0xD8]));
        assert!(decode_image(&jpeg).is_ok());
    }
}
