pub mod app_theme;
mod upload_form_view;

pub use upload_form_view::{UploadFormMessage, UploadFormView};
