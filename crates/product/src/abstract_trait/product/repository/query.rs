use crate::model::product::Product as ProductModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Every row, in whatever order the store returns them.
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no row has `id`.
    async fn find_by_id(&self, id: i32) -> Result<ProductModel, RepositoryError>;
}
