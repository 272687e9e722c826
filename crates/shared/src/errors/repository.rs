use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    /// A lookup matched no row.
    #[error("Not found")]
    NotFound,

    /// A write affected zero rows.
    #[error("Record does not exist")]
    NotExists,
}
