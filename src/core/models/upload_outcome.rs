use anyhow::{Context, Result};
use serde_json::Value;

/// What the extraction endpoint answered. Anything that is neither shape is
/// an `Err` from [`UploadOutcome::from_response_body`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { text: String },
    Failure { message: String },
}

impl UploadOutcome {
    /// An `error` key wins over `text` when both are present.
    pub fn from_response_body(body: &str) -> Result<Self> {
        let parsed: Value =
            serde_json::from_str(body).context("Upload response body is not valid JSON")?;

        let fields = parsed
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Upload response is not a JSON object"))?;

        if let Some(error_value) = fields.get("error") {
            let message = match error_value {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Failure { message });
        }

        match fields.get("text") {
            Some(Value::String(text)) => Ok(Self::Success { text: text.clone() }),
            Some(other) => anyhow::bail!("Upload response `text` is not a string: {}", other),
            None => anyhow::bail!("Upload response has neither `text` nor `error`"),
        }
    }
}
