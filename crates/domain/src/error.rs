#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("snapshot not found: {0}")]
    NotFound(String),
    #[error("invalid snapshot: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PersonalizeError {
    #[error("no templates available")]
    NoTemplates,
    #[error("unknown template \"{0}\"")]
    UnknownTemplate(String),
}
