mod error;
mod http;
mod repository;

pub use self::error::{ErrorResponse, StatusResponse};
pub use self::http::HttpError;
pub use self::repository::RepositoryError;
