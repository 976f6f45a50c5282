use thiserror::Error;
use wayfinder_api::CatalogError;

#[derive(Error, Debug)]
pub enum WayfinderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, WayfinderError>;
