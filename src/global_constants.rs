pub const APPLICATION_NAME: &str = "DocX";
pub const APPLICATION_TITLE: &str = "DocX";
pub const APPLICATION_CONFIG_DIR: &str = "docx-desktop";

pub const API_URL_ENV_VAR: &str = "DOCX_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const UPLOAD_ENDPOINT_PATH: &str = "/api/upload";
pub const SAMPLE_IMAGE_FILE_NAME: &str = "sample_licence.png";
pub const UPLOAD_FIELD_NAME: &str = "image";
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const TARGET_ASPECT_RATIO: f64 = 1.3333;
pub const ASPECT_RATIO_TOLERANCE: f64 = 0.01;

pub const PICKABLE_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "avif",
];

pub const MESSAGE_WRONG_ASPECT_RATIO: &str = "Please upload an image with a 4:3 ratio.";
pub const MESSAGE_UNREADABLE_IMAGE: &str = "Could not read the selected image.";
pub const MESSAGE_UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

pub const STATUS_PROCESSING: &str = "Processing...";
pub const STATUS_ERROR: &str = "Error";

pub const LABEL_UPLOAD_IMAGE: &str = "Click to upload image";
pub const LABEL_CHANGE_IMAGE: &str = "Click to change image";
pub const LABEL_RATIO_HINT: &str = "(Choose 4:3 images only)";
pub const LABEL_ANALYZE: &str = "Analyze";
pub const LABEL_SAMPLE_LINK: &str = "Sample Driving License";
pub const FILE_DIALOG_TITLE: &str = "Choose a 4:3 image";
pub const FILE_DIALOG_FILTER_NAME: &str = "Images";

pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 720.0;
pub const UPLOAD_BOX_WIDTH: f32 = 384.0;
pub const UPLOAD_BOX_HEIGHT: f32 = 288.0;
