use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Family member not found: {0}")]
    ConsumerNotFound(String),

    #[error("Invalid consumer id: {0}")]
    InvalidConsumerId(String),

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

    #[error("No snack recipes in the catalog")]
    NoSnackRecipes,
}

pub type Result<T> = std::result::Result<T, PlannerError>;
