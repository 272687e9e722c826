use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// JSON body extractor that decodes regardless of `Content-Type` and turns
/// every failure into a 400 carrying a fixed message.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("Failed to read request body: {}", rejection.body_text());
            HttpError::BadRequest(INVALID_REQUEST_BODY.to_string())
        })?;

        let value = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            warn!("Failed to decode request body: {e}");
            HttpError::BadRequest(INVALID_REQUEST_BODY.to_string())
        })?;

        Ok(Self(value))
    }
}
