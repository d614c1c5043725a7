use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{SelectedImage, UploadOutcome};

/// `Err` covers transport failures and unrecognised response bodies; a
/// backend-reported error is `Ok(UploadOutcome::Failure)`.
#[async_trait]
pub trait TextExtractionService: Send + Sync {
    async fn submit_image(&self, image: &SelectedImage) -> Result<UploadOutcome>;
}
