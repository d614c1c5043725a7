use super::{ThemeMode, UserSettings};
use crate::global_constants;

/// Configuration resolved once at startup and handed to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Opened instead of the bundled sample image when set.
    pub sample_image_override: Option<String>,
    pub theme_mode: ThemeMode,
}

impl AppConfig {
    pub fn from_environment(settings: &UserSettings) -> Self {
        let env_override = std::env::var(global_constants::API_URL_ENV_VAR).ok();
        Self::resolve(settings, env_override)
    }

    /// Base URL precedence: environment, settings file, built-in default.
    pub fn resolve(settings: &UserSettings, env_override: Option<String>) -> Self {
        let api_base_url = [env_override.as_deref(), settings.api_base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(global_constants::DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let sample_image_override = settings
            .sample_image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        log::info!("[CONFIG] Using API base URL {}", api_base_url);

        Self {
            api_base_url,
            sample_image_override,
            theme_mode: settings.theme_mode.clone(),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base_url, global_constants::UPLOAD_ENDPOINT_PATH)
    }
}
