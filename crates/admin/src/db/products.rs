//! Product repository for catalog management.

use sqlx::PgPool;

use kotobcom_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

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

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let query = format!(
            "INSERT INTO products \
             (title, title_ar, title_fr, description, description_ar, description_fr, \
              price, image_url, category, author, author_ar, author_fr, in_stock, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Product>(&query)
            .bind(&product.title)
            .bind(&product.title_ar)
            .bind(&product.title_fr)
            .bind(&product.description)
            .bind(&product.description_ar)
            .bind(&product.description_fr)
            .bind(product.price.as_decimal())
            .bind(&product.image_url)
            .bind(product.category)
            .bind(&product.author)
            .bind(&product.author_ar)
            .bind(&product.author_fr)
            .bind(product.in_stock)
            .bind(product.featured)
            .fetch_one(self.pool)
            .await?;

        Ok(created)
    }

    /// Replace every editable field of a product and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        product: &NewProduct,
    ) -> Result<Product, RepositoryError> {
        let query = format!(
            "UPDATE products SET \
             title = $1, title_ar = $2, title_fr = $3, \
             description = $4, description_ar = $5, description_fr = $6, \
             price = $7, image_url = $8, category = $9, \
             author = $10, author_ar = $11, author_fr = $12, \
             in_stock = $13, featured = $14, updated_at = now() \
             WHERE id = $15 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Product>(&query)
            .bind(&product.title)
            .bind(&product.title_ar)
            .bind(&product.title_fr)
            .bind(&product.description)
            .bind(&product.description_ar)
            .bind(&product.description_fr)
            .bind(product.price.as_decimal())
            .bind(&product.image_url)
            .bind(product.category)
            .bind(&product.author)
            .bind(&product.author_ar)
            .bind(&product.author_fr)
            .bind(product.in_stock)
            .bind(product.featured)
            .bind(id.as_uuid())
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if order items still reference
    /// the product; order history is never silently broken.
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_foreign_key_violation()
                {
                    return RepositoryError::Conflict(
                        "product is referenced by existing orders".to_owned(),
                    );
                }
                RepositoryError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
