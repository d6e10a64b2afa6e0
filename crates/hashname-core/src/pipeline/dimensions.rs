//! Dimension-report stage: read width and height from image headers.

use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{DimensionSummary, ImageDimensions};

use super::discovery::list_dir;

/// Reads image dimensions without decoding pixel data.
#[derive(Debug, Default)]
pub struct DimensionReader;

impl DimensionReader {
    /// Create a new dimension reader.
    pub fn new() -> Self {
        Self
    }

    /// Run the stage over the direct children of `dir`.
    ///
    /// Fails only when `dir` cannot be listed.
    pub fn run(&self, dir: &Path) -> PipelineResult<DimensionSummary> {
        let entries = list_dir(dir)?;
        tracing::debug!("Dimension report: {} entries in {:?}", entries.len(), dir);

        let mut summary = DimensionSummary::default();
        for entry in entries.iter().filter(|e| !e.is_dir) {
            match Self::read_dimensions(&entry.path) {
                Ok((width, height, format)) => summary.reported.push(ImageDimensions {
                    file_name: entry.file_name.clone(),
                    width,
                    height,
                    format: format_to_string(format),
                }),
                Err(err) => {
                    tracing::warn!(file = %entry.file_name, "{}", err);
                    summary.failures.push(err);
                }
            }
        }

        Ok(summary)
    }

    /// Detect the format from content and parse only the header.
    ///
    /// The file handle is dropped before returning on every path.
    pub fn read_dimensions(path: &Path) -> PipelineResult<(u32, u32, ImageFormat)> {
        let file = File::open(path).map_err(|source| PipelineError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;

        let format = reader
            .format()
            .ok_or_else(|| PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let (width, height) = reader.into_dimensions().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok((width, height, format))
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::Ico => "ico".to_string(),
        ImageFormat::Pnm => "pnm".to_string(),
        ImageFormat::Avif => "avif".to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_format_to_string() {
        assert_eq!(format_to_string(ImageFormat::Jpeg), "jpeg");
        assert_eq!(format_to_string(ImageFormat::Png), "png");
        assert_eq!(format_to_string(ImageFormat::WebP), "webp");
    }

    #[test]
    fn test_read_dimensions_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        RgbImage::new(10, 20).save(&path).unwrap();

        let (width, height, format) = DimensionReader::read_dimensions(&path).unwrap();
        assert_eq!((width, height), (10, 20));
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_format_detected_by_content() {
        // PNG bytes behind a .jpg name are still read as PNG
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        RgbImage::new(3, 4).save(&png).unwrap();
        let misnamed = dir.path().join("misnamed.jpg");
        std::fs::rename(&png, &misnamed).unwrap();

        let (_, _, format) = DimensionReader::read_dimensions(&misnamed).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_read_dimensions_other_formats() {
        let dir = tempfile::tempdir().unwrap();
        let bmp = dir.path().join("a.bmp");
        let gif = dir.path().join("b.gif");
        RgbImage::new(7, 3).save(&bmp).unwrap();
        image::RgbaImage::new(5, 6).save(&gif).unwrap();

        assert_eq!(DimensionReader::read_dimensions(&bmp).unwrap().0, 7);
        assert_eq!(DimensionReader::read_dimensions(&gif).unwrap().1, 6);
    }

    #[test]
    fn test_non_image_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"just some text, not an image").unwrap();

        let err = DimensionReader::read_dimensions(&path).unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let err = DimensionReader::read_dimensions(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }

    #[test]
    fn test_run_continues_past_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"not an image").unwrap();
        RgbImage::new(10, 20).save(dir.path().join("b.png")).unwrap();
        std::fs::create_dir(dir.path().join("c.png")).unwrap();

        let summary = DimensionReader::new().run(dir.path()).unwrap();
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].to_string().contains("a.txt"));
        assert_eq!(
            summary.reported,
            vec![ImageDimensions {
                file_name: "b.png".into(),
                width: 10,
                height: 20,
                format: "png".into(),
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_skips_unopenable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("a.png");
        RgbImage::new(4, 4).save(&locked).unwrap();
        RgbImage::new(10, 20).save(dir.path().join("b.png")).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits
        if std::fs::File::open(&locked).is_ok() {
            return;
        }

        let err = DimensionReader::read_dimensions(&locked).unwrap_err();
        assert!(matches!(err, PipelineError::Open { .. }));

        let summary = DimensionReader::new().run(dir.path()).unwrap();
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].to_string().contains("a.png"));
        assert_eq!(summary.reported.len(), 1);
        assert_eq!(summary.reported[0].file_name, "b.png");

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
    }
}
