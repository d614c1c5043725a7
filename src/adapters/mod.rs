mod bundled_sample_image;
mod http_text_extraction_service;
mod image_crate_dimension_reader;
mod rfd_image_file_picker;

pub use bundled_sample_image::BundledSampleImage;
pub use http_text_extraction_service::HttpTextExtractionService;
pub use image_crate_dimension_reader::ImageCrateDimensionReader;
pub use rfd_image_file_picker::RfdImageFilePicker;
