use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::global_constants;

const SAMPLE_IMAGE_BYTES: &[u8] = include_bytes!("../../assets/sample_licence.png");

/// The 4:3 sample licence shipped inside the binary.
pub struct BundledSampleImage;

impl BundledSampleImage {
    /// Writes the sample into `target_dir` unless an identical copy is
    /// already there, and returns its path.
    pub fn write_to_dir(target_dir: &Path) -> Result<PathBuf> {
        let sample_path = target_dir.join(global_constants::SAMPLE_IMAGE_FILE_NAME);

        if std::fs::read(&sample_path).is_ok_and(|existing| existing == SAMPLE_IMAGE_BYTES) {
            log::debug!("[SAMPLE] Reusing {:?}", sample_path);
            return Ok(sample_path);
        }

        std::fs::create_dir_all(target_dir)
            .with_context(|| format!("Failed to create {:?}", target_dir))?;
        std::fs::write(&sample_path, SAMPLE_IMAGE_BYTES)
            .with_context(|| format!("Failed to write {:?}", sample_path))?;

        log::info!("[SAMPLE] Wrote bundled sample image to {:?}", sample_path);
        Ok(sample_path)
    }
}
