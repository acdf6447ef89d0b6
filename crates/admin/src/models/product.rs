//! Product catalog types as managed from the back office.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kotobcom_core::{Price, ProductCategory, ProductId};

/// A book in the catalog.
///
/// Same table the storefront reads; the admin side owns the writes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// English title.
    pub title: String,
    /// Arabic title.
    pub title_ar: String,
    /// French title.
    pub title_fr: String,
    /// English description.
    pub description: Option<String>,
    /// Arabic description.
    pub description_ar: Option<String>,
    /// French description.
    pub description_fr: Option<String>,
    /// Price in Tunisian dinars.
    pub price: Price,
    /// Cover image URL, if one was uploaded.
    pub image_url: Option<String>,
    /// Catalog shelf.
    pub category: ProductCategory,
    /// English author name.
    pub author: Option<String>,
    /// Arabic author name.
    pub author_ar: Option<String>,
    /// French author name.
    pub author_fr: Option<String>,
    /// Whether the book can currently be ordered.
    pub in_stock: bool,
    /// Whether the book appears in the home page featured section.
    pub featured: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated, sanitized product fields ready to be written.
///
/// Produced from a [`ProductPayload`] by the product routes; repositories
/// only ever see this type.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// English title.
    pub title: String,
    /// Arabic title.
    pub title_ar: String,
    /// French title.
    pub title_fr: String,
    /// English description.
    pub description: Option<String>,
    /// Arabic description.
    pub description_ar: Option<String>,
    /// French description.
    pub description_fr: Option<String>,
    /// Price in Tunisian dinars.
    pub price: Price,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Catalog shelf.
    pub category: ProductCategory,
    /// English author name.
    pub author: Option<String>,
    /// Arabic author name.
    pub author_ar: Option<String>,
    /// French author name.
    pub author_fr: Option<String>,
    /// Whether the book can currently be ordered.
    pub in_stock: bool,
    /// Whether the book appears in the home page featured section.
    pub featured: bool,
}

/// Wire shape for creating or fully updating a product.
///
/// The price arrives as a string so the two-decimal-places rule can be
/// enforced exactly; floats would round it away.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    /// English title.
    pub title: String,
    /// Arabic title.
    pub title_ar: String,
    /// French title.
    pub title_fr: String,
    /// English description.
    #[serde(default)]
    pub description: Option<String>,
    /// Arabic description.
    #[serde(default)]
    pub description_ar: Option<String>,
    /// French description.
    #[serde(default)]
    pub description_fr: Option<String>,
    /// Price as a decimal string, e.g. `"25.50"`.
    pub price: String,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Catalog shelf, `"general"` or `"religious"`.
    pub category: String,
    /// English author name.
    #[serde(default)]
    pub author: Option<String>,
    /// Arabic author name.
    #[serde(default)]
    pub author_ar: Option<String>,
    /// French author name.
    #[serde(default)]
    pub author_fr: Option<String>,
    /// Whether the book can currently be ordered.
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Whether the book appears in the home page featured section.
    #[serde(default)]
    pub featured: bool,
}

const fn default_true() -> bool {
    true
}
