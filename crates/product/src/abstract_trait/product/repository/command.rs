use crate::{domain::requests::product::ProductRequest, model::product::Product as ProductModel};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

/// Writes against the product table.
///
/// `update_product` and `delete_product` report a missing row as
/// [`RepositoryError::NotExists`], decided by the affected-row count alone.
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &ProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: i32,
        req: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}
