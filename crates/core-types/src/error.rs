use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset document is empty (null)")]
    MissingDataset,

    #[error("Failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}
