//! Product management route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use tracing::instrument;

use kotobcom_core::{Price, ProductId, sanitize_input};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::{ClientInfo, RequireAdminAuth};
use crate::models::{NewProduct, Product, ProductPayload};
use crate::services::AuditService;
use crate::services::audit::{action, target};
use crate::state::AppState;

/// List the whole catalog, newest first.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Create a product.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    client: ClientInfo,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let new_product = validate_payload(payload)?;
    let product = ProductRepository::new(state.pool())
        .create(&new_product)
        .await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::CREATE,
            target::PRODUCT,
            Some(product.id.to_string()),
            json!({ "title": product.title }),
        )
        .await;

    Ok(Json(product))
}

/// Replace every editable field of a product.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    client: ClientInfo,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let new_product = validate_payload(payload)?;
    let product = ProductRepository::new(state.pool())
        .update(id, &new_product)
        .await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::UPDATE,
            target::PRODUCT,
            Some(product.id.to_string()),
            json!({ "title": product.title }),
        )
        .await;

    Ok(Json(product))
}

/// Delete a product not referenced by any order.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    client: ClientInfo,
    Path(id): Path<ProductId>,
) -> Result<Json<serde_json::Value>> {
    ProductRepository::new(state.pool()).delete(id).await?;

    AuditService::new(state.pool())
        .record(
            &admin,
            &client,
            action::DELETE,
            target::PRODUCT,
            Some(id.to_string()),
            json!({}),
        )
        .await;

    Ok(Json(json!({ "success": true })))
}

/// Validate and sanitize a product payload.
///
/// Collects every failed rule so the client can show them all at once.
fn validate_payload(payload: ProductPayload) -> Result<NewProduct> {
    let mut errors = Vec::new();

    let title = sanitize_input(&payload.title);
    if title.is_empty() {
        errors.push("English title is required".to_owned());
    }
    let title_ar = sanitize_input(&payload.title_ar);
    if title_ar.is_empty() {
        errors.push("Arabic title is required".to_owned());
    }
    let title_fr = sanitize_input(&payload.title_fr);
    if title_fr.is_empty() {
        errors.push("French title is required".to_owned());
    }

    let price = match Price::parse(&payload.price) {
        Ok(price) => Some(price),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    };

    let category = match payload.category.parse() {
        Ok(category) => Some(category),
        Err(e) => {
            errors.push(format!("{e}"));
            None
        }
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let (Some(price), Some(category)) = (price, category) else {
        return Err(AppError::Internal("validated fields missing".to_owned()));
    };

    Ok(NewProduct {
        title,
        title_ar,
        title_fr,
        description: optional_text(payload.description),
        description_ar: optional_text(payload.description_ar),
        description_fr: optional_text(payload.description_fr),
        price,
        image_url: optional_text(payload.image_url),
        category,
        author: optional_text(payload.author),
        author_ar: optional_text(payload.author_ar),
        author_fr: optional_text(payload.author_fr),
        in_stock: payload.in_stock,
        featured: payload.featured,
    })
}

/// Sanitize an optional field, mapping emptiness to `None`.
fn optional_text(value: Option<String>) -> Option<String> {
    let value = sanitize_input(&value?);
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

    fn payload() -> ProductPayload {
        ProductPayload {
            title: "The Alchemist".to_owned(),
            title_ar: "الخيميائي".to_owned(),
            title_fr: "L'Alchimiste".to_owned(),
            description: Some("  A fable about following your dream.  ".to_owned()),
            description_ar: None,
            description_fr: Some(String::new()),
            price: "25.50".to_owned(),
            image_url: None,
            category: "general".to_owned(),
            author: Some("Paulo Coelho".to_owned()),
            author_ar: None,
            author_fr: None,
            in_stock: true,
            featured: false,
        }
    }

    #[test]
    fn test_valid_payload() {
        let product = validate_payload(payload()).unwrap();

        assert_eq!(product.title, "The Alchemist");
        assert_eq!(product.price.to_string(), "25.50");
        assert_eq!(product.category, ProductCategory::General);
        assert_eq!(
            product.description.as_deref(),
            Some("A fable about following your dream.")
        );
        assert_eq!(product.description_fr, None);
    }

    #[test]
    fn test_missing_titles_are_each_reported() {
        let mut p = payload();
        p.title = "   ".to_owned();
        p.title_ar = String::new();

        let err = validate_payload(p).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("English title")));
        assert!(errors.iter().any(|e| e.contains("Arabic title")));
    }

    #[test]
    fn test_price_with_three_decimals_rejected() {
        let mut p = payload();
        p.price = "10.999".to_owned();

        assert!(matches!(
            validate_payload(p),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut p = payload();
        p.category = "fiction".to_owned();

        let err = validate_payload(p).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors[0].contains("fiction"));
    }

    #[test]
    fn test_markup_stripped_from_title() {
        let mut p = payload();
        p.title = "<b>Clean Title</b>".to_owned();

        let product = validate_payload(p).unwrap();
        assert_eq!(product.title, "bClean Title/b");
    }
}
