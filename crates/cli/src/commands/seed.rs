//! Seed the catalog from a YAML product list.
//!
//! The file is a YAML sequence in the product payload shape:
//!
//! ```yaml
//! - title: "The Alchemist"
//!   title_ar: "الخيميائي"
//!   title_fr: "L'Alchimiste"
//!   price: "25.50"
//!   category: general
//!   author: "Paulo Coelho"
//! ```
//!
//! Entries are validated before anything touches the database, so a bad
//! file never leaves a half-seeded catalog behind.

use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use kotobcom_admin::db::{self, ProductRepository, RepositoryError};
use kotobcom_admin::models::{NewProduct, ProductPayload};
use kotobcom_core::Price;

/// Errors that can occur while seeding the catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The YAML file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The file could not be read.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML in the expected shape.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An entry failed validation. Entries are numbered from 1.
    #[error("Entry {entry}: {reason}")]
    InvalidEntry { entry: usize, reason: String },

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// Database query error.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
}

/// Seed products from a YAML file.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed, an entry fails
/// validation, or a database operation fails.
pub async fn products(file_path: &str) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SeedError::FileNotFound(file_path.to_owned()));
    }

    info!(path = %file_path, "Loading products from file");

    // Read and validate the whole file before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let entries: Vec<ProductPayload> = serde_yaml::from_str(&content)?;

    info!(products = entries.len(), "Parsed file");

    let mut validated_entries = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        validated_entries.push(validated(index + 1, entry)?);
    }

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let repo = ProductRepository::new(&pool);
    let mut inserted = 0_usize;
    for product in &validated_entries {
        let created = repo.create(product).await?;
        info!(title = %created.title, "Inserted product");
        inserted += 1;
    }

    info!("Seeding complete! Products inserted: {inserted}");

    Ok(())
}

/// Validate one YAML entry into an insertable product.
fn validated(entry: usize, payload: ProductPayload) -> Result<NewProduct, SeedError> {
    let invalid = |reason: String| SeedError::InvalidEntry { entry, reason };

    let title = payload.title.trim().to_owned();
    let title_ar = payload.title_ar.trim().to_owned();
    let title_fr = payload.title_fr.trim().to_owned();
    if title.is_empty() || title_ar.is_empty() || title_fr.is_empty() {
        return Err(invalid(
            "titles are required in all three languages".to_owned(),
        ));
    }

    let price = Price::parse(&payload.price).map_err(|e| invalid(e.to_string()))?;
    let category = payload
        .category
        .parse()
        .map_err(|e| invalid(format!("{e}")))?;

    Ok(NewProduct {
        title,
        title_ar,
        title_fr,
        description: trimmed(payload.description),
        description_ar: trimmed(payload.description_ar),
        description_fr: trimmed(payload.description_fr),
        price,
        image_url: trimmed(payload.image_url),
        category,
        author: trimmed(payload.author),
        author_ar: trimmed(payload.author_ar),
        author_fr: trimmed(payload.author_fr),
        in_stock: payload.in_stock,
        featured: payload.featured,
    })
}

/// Trim an optional field, mapping emptiness to `None`.
fn trimmed(value: Option<String>) -> Option<String> {
    let value = value?.trim().to_owned();
    if value.is_empty() { None } else { Some(value) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kotobcom_core::ProductCategory;

    use super::*;

    const SAMPLE: &str = r#"
- title: "The Alchemist"
  title_ar: "الخيميائي"
  title_fr: "L'Alchimiste"
  price: "25.50"
  category: general
  author: "Paulo Coelho"
- title: "Riyad as-Salihin"
  title_ar: "رياض الصالحين"
  title_fr: "Les Jardins des vertueux"
  price: "40.00"
  category: religious
  featured: true
"#;

    #[test]
    fn test_sample_file_parses_and_validates() {
        let entries: Vec<ProductPayload> = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);

        let products: Vec<NewProduct> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| validated(i + 1, e).unwrap())
            .collect();

        assert_eq!(products[0].title, "The Alchemist");
        assert_eq!(products[0].category, ProductCategory::General);
        assert!(products[0].in_stock);
        assert_eq!(products[1].category, ProductCategory::Religious);
        assert!(products[1].featured);
    }

    #[test]
    fn test_bad_price_names_the_entry() {
        let yaml = r#"
- title: "A"
  title_ar: "ب"
  title_fr: "C"
  price: "10.999"
  category: general
"#;
        let entries: Vec<ProductPayload> = serde_yaml::from_str(yaml).unwrap();
        let err = validated(1, entries.into_iter().next().unwrap()).unwrap_err();

        assert!(matches!(err, SeedError::InvalidEntry { entry: 1, .. }));
    }

    #[test]
    fn test_missing_title_rejected() {
        let yaml = r#"
- title: ""
  title_ar: "ب"
  title_fr: "C"
  price: "10.00"
  category: general
"#;
        let entries: Vec<ProductPayload> = serde_yaml::from_str(yaml).unwrap();
        let err = validated(1, entries.into_iter().next().unwrap()).unwrap_err();

        let SeedError::InvalidEntry { reason, .. } = err else {
            panic!("expected invalid entry");
        };
        assert!(reason.contains("three languages"));
    }
}
