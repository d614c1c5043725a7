use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ImageDimensions;

#[async_trait]
pub trait ImageDimensionReader: Send + Sync {
    async fn read_dimensions(&self, contents: Vec<u8>) -> Result<ImageDimensions>;
}
