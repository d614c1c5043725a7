mod image_dimension_reader;
mod image_file_picker;
mod text_extraction_service;

pub use image_dimension_reader::ImageDimensionReader;
pub use image_file_picker::ImageFilePicker;
pub use text_extraction_service::TextExtractionService;
