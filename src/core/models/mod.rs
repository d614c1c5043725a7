mod app_config;
mod aspect_ratio;
mod display_handle;
mod form_state;
mod selected_image;
mod upload_outcome;
mod user_settings;

pub use app_config::AppConfig;
pub use aspect_ratio::{AspectRatioRule, ImageDimensions};
pub use display_handle::{AcceptedImage, DisplayHandleSlot};
pub use form_state::{IntakeDecision, ResultPane, UploadFormState};
pub use selected_image::SelectedImage;
pub use upload_outcome::UploadOutcome;
pub use user_settings::{ThemeMode, UserSettings};
