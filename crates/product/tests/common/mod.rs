#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use product::{
    abstract_trait::product::repository::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait,
    },
    di::DependenciesInject,
    domain::requests::product::ProductRequest,
    handler::AppRouter,
    model::product::Product,
    state::AppState,
};
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Table stand-in with auto-incrementing ids.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, name: &str, quantity: i32, price: f64) -> i32 {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.rows.lock().unwrap().push(Product {
            id: *next_id,
            name: name.to_string(),
            quantity,
            price,
        });
        *next_id
    }

    pub fn row(&self, id: i32) -> Option<Product> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        self.row(id).ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(&self, req: &ProductRequest) -> Result<Product, RepositoryError> {
        let id = self.seed(&req.name, req.quantity, req.price);
        self.find_by_id(id).await
    }

    async fn update_product(
        &self,
        id: i32,
        req: &ProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotExists)?;

        row.name = req.name.clone();
        row.quantity = req.quantity;
        row.price = req.price;
        Ok(row.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);

        if rows.len() == before {
            return Err(RepositoryError::NotExists);
        }
        Ok(())
    }
}

/// Every call fails the way a lost database connection does.
pub struct UnreachableRepository;

#[async_trait]
impl ProductQueryRepositoryTrait for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for UnreachableRepository {
    async fn create_product(&self, _req: &ProductRequest) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn update_product(
        &self,
        _id: i32,
        _req: &ProductRequest,
    ) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn delete_product(&self, _id: i32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub fn router_with<R>(repository: Arc<R>) -> Router
where
    R: ProductQueryRepositoryTrait + ProductCommandRepositoryTrait + Send + Sync + 'static,
{
    let di = DependenciesInject {
        product_query: repository.clone() as DynProductQueryRepository,
        product_command: repository as DynProductCommandRepository,
    };

    AppRouter::build(AppState::with_dependencies(di))
}

/// Sends one request through the router and returns the status and the
/// decoded JSON body.
pub async fn api(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));

    let response = match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };

    let status = response.status();
    let bytes = match to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to read response body: {err}"),
    };
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("response body is not JSON ({err}): {bytes:?}"));

    (status, json)
}
