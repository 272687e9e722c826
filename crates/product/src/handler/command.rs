use crate::{
    abstract_trait::product::repository::DynProductCommandRepository,
    domain::{requests::product::ProductRequest, response::product::ProductResponse},
    handler::{parse_product_id, store_failure},
    middleware::json_body::JsonBody,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use shared::errors::{ErrorResponse, HttpError, StatusResponse};
use tracing::info;

pub const PRODUCT_DELETED: &str = "Product deleted successfully";

#[utoipa::path(
    post,
    path = "/product/",
    tag = "Product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(repository): Extension<DynProductCommandRepository>,
    JsonBody(body): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!("Creating new Product");

    let product = repository
        .create_product(&body)
        .await
        .map_err(store_failure)?;

    info!("Product created successfully with ID: {}", product.id);
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product overwritten", body = ProductResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Invalid ID or internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(repository): Extension<DynProductCommandRepository>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id)?;

    info!("Updating Product ID={id}");

    let product = repository
        .update_product(id, &body)
        .await
        .map_err(store_failure)?;

    info!("Product updated successfully: ID={id}");
    Ok((StatusCode::OK, Json(ProductResponse::from(product))))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = StatusResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Invalid ID or internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(repository): Extension<DynProductCommandRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id)?;

    info!("Deleting Product ID={id}");

    repository.delete_product(id).await.map_err(store_failure)?;

    info!("Product deleted: ID={id}");
    Ok((StatusCode::OK, Json(StatusResponse::new(PRODUCT_DELETED))))
}
