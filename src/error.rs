use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrueCostError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Failed to load dataset {path}: {source}")]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: Box<TrueCostError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No ingredients selected")]
    EmptySelection,
}

impl TrueCostError {
    /// Wrap an error with the dataset path it came from.
    pub fn dataset(path: impl Into<PathBuf>, source: TrueCostError) -> Self {
        TrueCostError::DatasetLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrueCostError>;
