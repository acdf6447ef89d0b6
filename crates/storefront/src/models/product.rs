//! Product catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kotobcom_core::{Language, Price, ProductCategory, ProductId};

/// A book in the catalog.
///
/// Titles are stored in all three storefront languages; descriptions and
/// author names are optional per language. `in_stock` is display-only:
/// it gates the add-to-cart action but there is no quantity tracking.
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

impl Product {
    /// Title in the given display language.
    #[must_use]
    pub fn title_in(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.title_ar,
            Language::Fr => &self.title_fr,
            Language::En => &self.title,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::generate(),
            title: "The Alchemist".to_string(),
            title_ar: "الخيميائي".to_string(),
            title_fr: "L'Alchimiste".to_string(),
            description: Some("A novel".to_string()),
            description_ar: Some("رواية".to_string()),
            description_fr: None,
            price: Price::parse("25.50").unwrap(),
            image_url: None,
            category: ProductCategory::General,
            author: Some("Paulo Coelho".to_string()),
            author_ar: Some("باولو كويلو".to_string()),
            author_fr: Some("Paulo Coelho".to_string()),
            in_stock: true,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_title_in_each_language() {
        let product = sample_product();
        assert_eq!(product.title_in(Language::Ar), "الخيميائي");
        assert_eq!(product.title_in(Language::Fr), "L'Alchimiste");
        assert_eq!(product.title_in(Language::En), "The Alchemist");
    }

    #[test]
    fn test_serde_keeps_flat_field_names() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();

        // The web client reads these exact keys
        assert_eq!(json["title_ar"], "الخيميائي");
        assert_eq!(json["price"], "25.50");
        assert_eq!(json["category"], "general");
        assert_eq!(json["in_stock"], true);
    }
}
