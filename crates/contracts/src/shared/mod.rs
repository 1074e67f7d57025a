pub mod envelope;
pub mod upload;

pub use envelope::ApiData;
pub use upload::UploadedFile;
