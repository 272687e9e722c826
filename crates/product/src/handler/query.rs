use crate::{
    abstract_trait::product::repository::DynProductQueryRepository,
    domain::response::product::ProductResponse,
    handler::{parse_product_id, store_failure},
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use shared::errors::{ErrorResponse, HttpError};
use tracing::info;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "Every product, unordered", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(repository): Extension<DynProductQueryRepository>,
) -> Result<impl IntoResponse, HttpError> {
    let products = repository.find_all().await.map_err(store_failure)?;

    let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    info!("Successfully fetched {} Products", data.len());
    Ok((StatusCode::OK, Json(data)))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Invalid ID or internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(repository): Extension<DynProductQueryRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id)?;

    let product = repository.find_by_id(id).await.map_err(store_failure)?;

    info!("Successfully fetched Product with ID: {id}");
    Ok((StatusCode::OK, Json(ProductResponse::from(product))))
}
