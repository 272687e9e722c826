use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::ProductRequest, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{debug, error, info, warn};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, quantity, price)
    VALUES ($1, $2, $3)
    RETURNING id, name, quantity, price
"#;

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        debug!(
            query = INSERT_PRODUCT.trim(),
            name = %product.name,
            quantity = product.quantity,
            price = product.price,
            "Executing insert"
        );

        let result = sqlx::query_as::<_, ProductModel>(INSERT_PRODUCT)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i32,
        product: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                quantity = $3,
                price = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            warn!("⚠️ Update matched no product with ID {}", id);
            return Err(RepositoryError::NotExists);
        }

        info!("🔄 Updated product ID {}", id);
        Ok(ProductModel {
            id,
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
        })
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            warn!("⚠️ Delete matched no product with ID {}", id);
            return Err(RepositoryError::NotExists);
        }

        info!("✅ Product ID {} deleted", id);
        Ok(())
    }
}
