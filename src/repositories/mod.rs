mod json_file_repository;
mod legacy_text_importer;
mod traits;

pub use json_file_repository::{JsonFileRepository, FORMAT_VERSION};
pub use legacy_text_importer::LegacyTextImporter;
pub use traits::BookRepository;
