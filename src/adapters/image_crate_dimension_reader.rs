use std::io::Cursor;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::metadata::Orientation;
use image::ImageDecoder;

use crate::core::interfaces::adapters::ImageDimensionReader;
use crate::core::models::ImageDimensions;

/// Decodes the whole image and reports its displayed dimensions, i.e. with
/// the EXIF orientation applied.
pub struct ImageCrateDimensionReader;

impl ImageCrateDimensionReader {
    pub fn new() -> Self {
        Self
    }

    fn decode_dimensions(contents: &[u8]) -> Result<ImageDimensions> {
        let reader = image::ImageReader::new(Cursor::new(contents))
            .with_guessed_format()
            .context("Failed to inspect image header")?;

        let format = reader
            .format()
            .ok_or_else(|| anyhow::anyhow!("Unrecognised image format"))?;

        let mut decoder = reader
            .into_decoder()
            .context("Failed to read image header")?;
        let orientation = decoder.orientation().unwrap_or_else(|e| {
            log::debug!("[DIMENSIONS] No usable orientation tag: {}", e);
            Orientation::NoTransforms
        });
        let (stored_width, stored_height) = decoder.dimensions();

        image::DynamicImage::from_decoder(decoder).context("Failed to decode image data")?;

        let (width, height) = if Self::swaps_axes(orientation) {
            (stored_height, stored_width)
        } else {
            (stored_width, stored_height)
        };

        log::debug!(
            "[DIMENSIONS] {:?} image is {}x{} ({:?})",
            format,
            width,
            height,
            orientation
        );
        Ok(ImageDimensions::new(width, height))
    }

    fn swaps_axes(orientation: Orientation) -> bool {
        matches!(
            orientation,
            Orientation::Rotate90
                | Orientation::Rotate270
                | Orientation::Rotate90FlipH
                | Orientation::Rotate270FlipH
        )
    }
}

#[async_trait]
impl ImageDimensionReader for ImageCrateDimensionReader {
    async fn read_dimensions(&self, contents: Vec<u8>) -> Result<ImageDimensions> {
        tokio::task::spawn_blocking(move || Self::decode_dimensions(&contents))
            .await
            .context("Dimension decoding task did not complete")?
    }
}
