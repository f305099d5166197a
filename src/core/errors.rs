use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangonoteError {
    #[error("There is no active view")]
    NoActiveView,

    #[error("The current view is not associated with a file")]
    ViewNotFileBacked,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for TangonoteError {
    fn from(error: std::io::Error) -> Self {
        TangonoteError::Io(Box::new(error))
    }
}
