use thiserror::Error;

use crate::holiday::holidayerror::HolidayError;

/// Errors surfaced while fetching or decoding a holiday catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Definition(#[from] HolidayError),
}
