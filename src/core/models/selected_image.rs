use std::path::Path;

use crate::global_constants;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub contents: Vec<u8>,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.contents.len())
            .finish()
    }
}

impl SelectedImage {
    pub fn build_from_file(file_name: String, contents: Vec<u8>) -> Self {
        let mime_type = Self::guess_mime_type(&file_name);

        log::debug!(
            "[SELECTED_IMAGE] building image {} ({}, {} bytes)",
            file_name,
            mime_type,
            contents.len()
        );

        Self {
            file_name,
            mime_type,
            contents,
        }
    }

    fn guess_mime_type(file_name: &str) -> String {
        image::ImageFormat::from_path(Path::new(file_name))
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| global_constants::FALLBACK_MIME_TYPE.to_string())
    }
}
