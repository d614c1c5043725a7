use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::core::interfaces::adapters::TextExtractionService;
use crate::core::models::{SelectedImage, UploadOutcome};
use crate::global_constants;

pub struct HttpTextExtractionService {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpTextExtractionService {
    pub fn new(upload_url: String) -> Self {
        log::info!("[UPLOAD] Upload endpoint: {}", upload_url);
        Self {
            client: reqwest::Client::new(),
            upload_url,
        }
    }

    fn build_form(image: &SelectedImage) -> Result<Form> {
        let part = Part::bytes(image.contents.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .with_context(|| format!("Invalid MIME type {}", image.mime_type))?;

        Ok(Form::new().part(global_constants::UPLOAD_FIELD_NAME, part))
    }
}

#[async_trait]
impl TextExtractionService for HttpTextExtractionService {
    async fn submit_image(&self, image: &SelectedImage) -> Result<UploadOutcome> {
        log::info!(
            "[UPLOAD] Sending {} ({} bytes) to {}",
            image.file_name,
            image.contents.len(),
            self.upload_url
        );

        let form = Self::build_form(image)?;
        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .context("Upload request failed")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read upload response body")?;
        log::debug!("[UPLOAD] Response {}: {}", status, response_text);

        let outcome = UploadOutcome::from_response_body(&response_text)
            .with_context(|| format!("Unrecognised upload response (HTTP {})", status))?;

        match &outcome {
            UploadOutcome::Success { text } => {
                log::info!("[UPLOAD] Extracted {} characters of text", text.len())
            }
            UploadOutcome::Failure { message } => {
                log::warn!("[UPLOAD] Backend reported an error: {}", message)
            }
        }

        Ok(outcome)
    }
}
