//! Cached catalog reads.
//!
//! The storefront serves products out of an in-memory `moka` cache of the
//! whole catalog (60-second TTL). The shop carries at most a few hundred
//! titles, so filtering and sorting run over the cached list instead of
//! issuing per-request SQL. Admin edits become visible when the snapshot
//! expires.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::debug;

use kotobcom_core::{Language, ProductCategory, ProductId};

use crate::db::{ProductRepository, RepositoryError};
use crate::models::Product;

/// How long a catalog snapshot is served before re-reading the database.
const CACHE_TTL: Duration = Duration::from_secs(60);

/// The cache holds the whole catalog under a single key.
const CACHE_KEY: u8 = 0;

/// Sort orders accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    /// Newest first. The default.
    #[default]
    Newest,
    /// Alphabetical by the title variant for the request language.
    Name,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

/// Filter and ordering for a catalog listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Keep only this category.
    pub category: Option<ProductCategory>,
    /// Keep only products matching this featured flag.
    pub featured: Option<bool>,
    /// Case-insensitive substring match against all three title variants.
    pub search: Option<String>,
    /// Sort order.
    pub sort: ProductSort,
    /// Language whose title variant drives [`ProductSort::Name`].
    pub language: Language,
}

/// Read-side catalog service.
///
/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceInner>,
}

struct CatalogServiceInner {
    pool: PgPool,
    cache: Cache<u8, Arc<Vec<Product>>>,
}

impl CatalogService {
    /// Create a new catalog service with an empty cache.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogServiceInner { pool, cache }),
        }
    }

    /// The full catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the catalog cannot be loaded.
    pub async fn list(&self) -> Result<Arc<Vec<Product>>, RepositoryError> {
        if let Some(products) = self.inner.cache.get(&CACHE_KEY).await {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let products = Arc::new(ProductRepository::new(&self.inner.pool).list_all().await?);
        self.inner
            .cache
            .insert(CACHE_KEY, Arc::clone(&products))
            .await;

        Ok(products)
    }

    /// A filtered, sorted view of the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the catalog cannot be loaded.
    pub async fn query(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let catalog = self.list().await?;
        Ok(apply_filter(&catalog, filter))
    }

    /// Look up a single product, served from the cached snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the catalog cannot be loaded.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let catalog = self.list().await?;
        Ok(catalog.iter().find(|p| p.id == id).cloned())
    }
}

fn apply_filter(catalog: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let search = filter.search.as_deref().map(str::to_lowercase);

    let mut products: Vec<Product> = catalog
        .iter()
        .filter(|p| filter.category.is_none_or(|c| p.category == c))
        .filter(|p| filter.featured.is_none_or(|f| p.featured == f))
        .filter(|p| {
            search
                .as_deref()
                .is_none_or(|term| matches_search(p, term))
        })
        .cloned()
        .collect();

    match filter.sort {
        // list_all returns newest first already
        ProductSort::Newest => {}
        ProductSort::Name => products
            .sort_by(|a, b| a.title_in(filter.language).cmp(b.title_in(filter.language))),
        ProductSort::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSort::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    products
}

fn matches_search(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term)
        || product.title_ar.to_lowercase().contains(term)
        || product.title_fr.to_lowercase().contains(term)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use kotobcom_core::Price;

    use super::*;

    fn product(title: &str, title_ar: &str, price: &str, category: ProductCategory) -> Product {
        Product {
            id: ProductId::generate(),
            title: title.to_owned(),
            title_ar: title_ar.to_owned(),
            title_fr: title.to_owned(),
            description: None,
            description_ar: None,
            description_fr: None,
            price: Price::parse(price).unwrap(),
            image_url: None,
            category,
            author: None,
            author_ar: None,
            author_fr: None,
            in_stock: true,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = vec![
            product("Algebra", "الجبر", "10.00", ProductCategory::General),
            product("Tafsir", "تفسير", "20.00", ProductCategory::Religious),
        ];

        let filter = ProductFilter {
            category: Some(ProductCategory::Religious),
            ..ProductFilter::default()
        };
        let result = apply_filter(&catalog, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Tafsir");
    }

    #[test]
    fn test_filter_by_featured() {
        let mut featured = product("Algebra", "الجبر", "10.00", ProductCategory::General);
        featured.featured = true;
        let catalog = vec![
            featured,
            product("Tafsir", "تفسير", "20.00", ProductCategory::Religious),
        ];

        let filter = ProductFilter {
            featured: Some(true),
            ..ProductFilter::default()
        };
        let result = apply_filter(&catalog, &filter);

        assert_eq!(result.len(), 1);
        assert!(result[0].featured);
    }

    #[test]
    fn test_search_is_case_insensitive_across_variants() {
        let catalog = vec![
            product("Algebra Basics", "أساسيات الجبر", "10.00", ProductCategory::General),
            product("Tafsir", "تفسير", "20.00", ProductCategory::Religious),
        ];

        let filter = ProductFilter {
            search: Some("ALGEBRA".to_owned()),
            ..ProductFilter::default()
        };
        assert_eq!(apply_filter(&catalog, &filter).len(), 1);

        let filter = ProductFilter {
            search: Some("تفسير".to_owned()),
            ..ProductFilter::default()
        };
        assert_eq!(apply_filter(&catalog, &filter).len(), 1);

        let filter = ProductFilter {
            search: Some("nowhere".to_owned()),
            ..ProductFilter::default()
        };
        assert!(apply_filter(&catalog, &filter).is_empty());
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = vec![
            product("Mid", "وسط", "15.00", ProductCategory::General),
            product("Cheap", "رخيص", "5.00", ProductCategory::General),
            product("Dear", "غال", "25.00", ProductCategory::General),
        ];

        let filter = ProductFilter {
            sort: ProductSort::PriceLow,
            ..ProductFilter::default()
        };
        let result = apply_filter(&catalog, &filter);
        let titles: Vec<&str> = result.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Cheap", "Mid", "Dear"]);

        let filter = ProductFilter {
            sort: ProductSort::PriceHigh,
            ..ProductFilter::default()
        };
        let result = apply_filter(&catalog, &filter);
        assert_eq!(result[0].title, "Dear");
    }

    #[test]
    fn test_sort_by_name_uses_language_variant() {
        let catalog = vec![
            product("Zebra", "ألف", "10.00", ProductCategory::General),
            product("Apple", "ياء", "10.00", ProductCategory::General),
        ];

        let filter = ProductFilter {
            sort: ProductSort::Name,
            language: Language::En,
            ..ProductFilter::default()
        };
        let result = apply_filter(&catalog, &filter);
        assert_eq!(result[0].title, "Apple");

        let filter = ProductFilter {
            sort: ProductSort::Name,
            language: Language::Ar,
            ..ProductFilter::default()
        };
        let result = apply_filter(&catalog, &filter);
        // "ألف" sorts before "ياء" by code point
        assert_eq!(result[0].title, "Zebra");
    }

    #[test]
    fn test_default_order_is_preserved() {
        let catalog = vec![
            product("First", "أول", "10.00", ProductCategory::General),
            product("Second", "ثان", "5.00", ProductCategory::General),
        ];

        let result = apply_filter(&catalog, &ProductFilter::default());
        assert_eq!(result[0].title, "First");
        assert_eq!(result[1].title, "Second");
    }

    #[test]
    fn test_sort_wire_names() {
        assert_eq!(
            serde_json::from_str::<ProductSort>("\"price-low\"").unwrap(),
            ProductSort::PriceLow
        );
        assert_eq!(
            serde_json::from_str::<ProductSort>("\"name\"").unwrap(),
            ProductSort::Name
        );
        assert!(serde_json::from_str::<ProductSort>("\"fanciest\"").is_err());
    }
}
