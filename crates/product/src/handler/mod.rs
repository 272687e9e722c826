mod command;
mod query;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use shared::{
    errors::{HttpError, RepositoryError},
    utils::shutdown_signal,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::command::{PRODUCT_DELETED, create_product, delete_product, update_product};
pub use self::query::{get_product, get_products};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const INTERNAL_ERROR: &str = "Internal server error";

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        query::get_products,
        query::get_product,
        command::create_product,
        command::update_product,
        command::delete_product,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
    )
)]
struct ApiDoc;

/// A non-integer id segment is answered with a 500, matching how the
/// service has always treated it. Integers outside the `SERIAL` range can
/// never match a row and are answered as not found.
pub(crate) fn parse_product_id(raw: &str) -> Result<i32, HttpError> {
    let id = raw.parse::<i64>().map_err(|e| {
        warn!("Rejecting product ID {raw:?}: {e}");
        HttpError::Internal(INVALID_PRODUCT_ID.to_string())
    })?;

    i32::try_from(id).map_err(|_| {
        info!("Product ID {id} is outside the stored range");
        HttpError::NotFound(PRODUCT_NOT_FOUND.to_string())
    })
}

/// Missing rows on read, update and delete all become 404. Database
/// failures are logged here and reach the client only as a generic 500.
pub(crate) fn store_failure(err: RepositoryError) -> HttpError {
    match err {
        RepositoryError::NotFound | RepositoryError::NotExists => {
            HttpError::NotFound(PRODUCT_NOT_FOUND.to_string())
        }
        RepositoryError::Sqlx(e) => {
            error!("❌ Store failure: {e:?}");
            HttpError::Internal(INTERNAL_ERROR.to_string())
        }
    }
}

pub fn product_routes(app_state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products))
        .route("/product/", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let api_router =
            OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(product_routes(&app_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn parses_signed_integer_ids() {
        assert_eq!(parse_product_id("42").unwrap(), 42);
        assert_eq!(parse_product_id("+7").unwrap(), 7);
        assert_eq!(parse_product_id("-3").unwrap(), -3);
    }

    #[test]
    fn non_integer_id_is_an_internal_error() {
        let err = parse_product_id("abc").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = parse_product_id("1.5").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = parse_product_id("99999999999999999999").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn out_of_range_integer_id_is_not_found() {
        for raw in ["2147483648", "99999999999", "-2147483649"] {
            match parse_product_id(raw).unwrap_err() {
                HttpError::NotFound(msg) => assert_eq!(msg, PRODUCT_NOT_FOUND),
                other => panic!("expected not found for {raw}, got {other:?}"),
            }
        }

        assert_eq!(parse_product_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn missing_rows_map_to_not_found() {
        assert_eq!(
            store_failure(RepositoryError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            store_failure(RepositoryError::NotExists).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn database_errors_hide_details() {
        let err = store_failure(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));

        match err {
            HttpError::Internal(msg) => assert_eq!(msg, INTERNAL_ERROR),
            other => panic!("expected internal error, got {other:?}"),
        }
    }
}
