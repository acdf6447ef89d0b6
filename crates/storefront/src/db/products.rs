//! Product repository for catalog reads.
//!
//! The storefront never mutates the catalog; products are managed by the
//! admin service. Queries here use the runtime sqlx API so the crate
//! builds without a live database.

use sqlx::PgPool;
use uuid::Uuid;

use kotobcom_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

const PRODUCT_COLUMNS: &str = "id, title, title_ar, title_fr, \
     description, description_ar, description_fr, \
     price, image_url, category, author, author_ar, author_fr, \
     in_stock, featured, created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the whole catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC");
        let products = sqlx::query_as::<_, Product>(&query)
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id.as_uuid())
            .fetch_optional(self.pool)
            .await?;

        Ok(product)
    }

    /// Get several products by ID in one round trip.
    ///
    /// Missing IDs are silently absent from the result; callers decide
    /// whether that matters (checkout does, cart display does not).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_many_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(ProductId::as_uuid).collect();
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)");
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(&uuids)
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }
}
