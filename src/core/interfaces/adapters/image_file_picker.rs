use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::SelectedImage;

/// `Ok(None)` means the user dismissed the picker.
#[async_trait]
pub trait ImageFilePicker: Send + Sync {
    async fn pick_image(&self) -> Result<Option<SelectedImage>>;
}
