use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub sample_image_url: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] API base URL: {:?}", settings.api_base_url);
        log::debug!("[SETTINGS] Theme: {}", settings.theme_mode);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_CONFIG_DIR);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("docx-desktop-test")
            .join(format!("{}-{}", name, std::process::id()));
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(format!("{}", ThemeMode::Dark), "Dark");
        assert_eq!(format!("{}", ThemeMode::Light), "Light");
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_fields() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_user_settings_deserialization() {
        let json = r#"{
            "api_base_url": "https://ocr.example.com",
            "theme_mode": "Dark"
        }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.api_base_url.as_deref(), Some("https://ocr.example.com"));
        assert_eq!(settings.sample_image_url, None);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_missing_settings_file_writes_defaults() {
        let dir = scratch_dir("missing");
        let settings_path = dir.join("settings.json");

        let settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let dir = scratch_dir("roundtrip");
        let settings_path = dir.join("settings.json");
        let original_settings = UserSettings {
            api_base_url: Some("http://10.0.0.2:3000".to_string()),
            sample_image_url: Some("http://10.0.0.2:5173/sample.jpg".to_string()),
            theme_mode: ThemeMode::Dark,
        };

        original_settings.save_to(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_settings_file_is_an_error() {
        let dir = scratch_dir("invalid");
        let settings_path = dir.join("settings.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&settings_path, "not json").unwrap();

        assert!(UserSettings::load_from(&settings_path).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
