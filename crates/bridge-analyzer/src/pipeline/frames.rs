//! Frame loading with format detection and size limits.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use image::{GenericImageView, GrayImage, ImageFormat, ImageReader};
use tracing::{trace, warn};

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Decodes image files into single-channel frames.
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    limits: LimitsConfig,
}

impl FrameDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Read and decode the image at `path`.
    pub fn load(&self, path: &Path) -> PipelineResult<GrayImage> {
        if !path.exists() {
            warn!(path = %path.display(), "Frame not found");
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {e}"),
        })?;
        self.check_file_size(metadata.len(), path)?;

        let bytes = std::fs::read(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read file: {e}"),
        })?;
        self.decode(&bytes, path)
    }

    /// Decode an in-memory image. `path` names the source in errors and is
    /// used as a format hint when the content is not recognised.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> PipelineResult<GrayImage> {
        let start = Instant::now();
        self.check_file_size(bytes.len() as u64, path)?;

        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {e}"),
            })?;

        if reader.format().is_none() {
            let format = ImageFormat::from_path(path).map_err(|_| {
                warn!(path = %path.display(), "Unrecognised frame format");
                PipelineError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    format: path
                        .extension()
                        .and_then(|e| e.to_str())
                        .unwrap_or("unknown")
                        .to_string(),
                }
            })?;
            reader.set_format(format);
        }

        let image = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        let max_dim = self.limits.max_image_dimension;
        if width > max_dim || height > max_dim {
            warn!(path = %path.display(), width, height, max_dim, "Frame too large");
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width,
                height,
                max_dim,
            });
        }

        trace!(
            path = %path.display(),
            width,
            height,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Decoded frame"
        );
        Ok(image.to_luma8())
    }

    fn check_file_size(&self, len: u64, path: &Path) -> PipelineResult<()> {
        let max_mb = self.limits.max_file_size_mb;
        if len > max_mb.saturating_mul(BYTES_PER_MB) {
            warn!(path = %path.display(), len, max_mb, "Frame file too large");
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: len / BYTES_PER_MB,
                max_mb,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Luma, Rgb, RgbImage};

    fn png_bytes(image: impl Into<DynamicImage>) -> Vec<u8> {
        let image: DynamicImage = image.into();
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_gray_png() {
        let frame = GrayImage::from_fn(3, 2, |x, y| Luma([(x + 10 * y) as u8]));
        let decoded = FrameDecoder::default()
            .decode(&png_bytes(frame.clone()), Path::new("frame.png"))
            .unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_decode_converts_to_gray() {
        let frame = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let decoded = FrameDecoder::default()
            .decode(&png_bytes(frame.clone()), Path::new("frame.png"))
            .unwrap();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert!(decoded.pixels().all(|p| p.0 == [255]));
    }

    #[test]
    fn test_format_detected_by_content() {
        let frame = GrayImage::new(2, 2);
        let dir = tempfile::tempdir().unwrap();
        let misnamed = dir.path().join("frame.jpg");
        std::fs::write(&misnamed, png_bytes(frame.clone())).unwrap();

        let decoded = FrameDecoder::default().load(&misnamed).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FrameDecoder::default()
            .load(&dir.path().join("missing.png"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::FileNotFound(_)));
    }

    #[test]
    fn test_rejects_large_dimensions() {
        let decoder = FrameDecoder::new(LimitsConfig {
            max_image_dimension: 4,
            ..LimitsConfig::default()
        });
        let bytes = png_bytes(GrayImage::new(5, 2));
        let err = decoder.decode(&bytes, Path::new("wide.png")).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ImageTooLarge {
                width: 5,
                height: 2,
                max_dim: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_large_file() {
        let decoder = FrameDecoder::new(LimitsConfig {
            max_file_size_mb: 1,
            ..LimitsConfig::default()
        });
        let bytes = vec![0u8; (BYTES_PER_MB + 1) as usize];
        let err = decoder.decode(&bytes, Path::new("big.png")).unwrap_err();
        assert!(matches!(err, PipelineError::FileTooLarge { max_mb: 1, .. }));
    }

    #[test]
    fn test_unknown_format() {
        let err = FrameDecoder::default()
            .decode(b"not an image at all", Path::new("frame.xyz"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_corrupt_data() {
        let err = FrameDecoder::default()
            .decode(b"\x89PNG\r\n\x1a\n garbage", Path::new("frame.png"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }
}
