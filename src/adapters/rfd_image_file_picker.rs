use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageFilePicker;
use crate::core::models::SelectedImage;
use crate::global_constants;

pub struct RfdImageFilePicker;

impl RfdImageFilePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageFilePicker for RfdImageFilePicker {
    async fn pick_image(&self) -> Result<Option<SelectedImage>> {
        log::debug!("[FILE_PICKER] Opening image picker");

        let picked = rfd::AsyncFileDialog::new()
            .set_title(global_constants::FILE_DIALOG_TITLE)
            .add_filter(
                global_constants::FILE_DIALOG_FILTER_NAME,
                global_constants::PICKABLE_IMAGE_EXTENSIONS,
            )
            .pick_file()
            .await;

        let Some(file_handle) = picked else {
            log::info!("[FILE_PICKER] Picker dismissed without a file");
            return Ok(None);
        };

        let path = file_handle.path().to_path_buf();
        let contents = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;

        log::info!("[FILE_PICKER] Picked {:?} ({} bytes)", path, contents.len());
        Ok(Some(SelectedImage::build_from_file(
            file_handle.file_name(),
            contents,
        )))
    }
}
