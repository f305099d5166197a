pub mod appender;
pub mod errors;
pub mod format;
pub mod models;

pub use errors::TangonoteError;
pub use models::WordRecord;
