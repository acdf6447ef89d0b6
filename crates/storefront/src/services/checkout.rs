//! Checkout service.
//!
//! Turns a session cart into a persisted order and builds the merchant
//! WhatsApp handoff link. The shop takes payment on delivery, so placing
//! the order and notifying the merchant is the whole flow.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use kotobcom_core::{
    Language, OrderItemId, OrderNumber, PhoneNumber, Price, ProductId, sanitize_input,
};

use crate::db::{OrderRepository, ProductRepository, RepositoryError};
use crate::models::{Cart, NewOrder, NewOrderItem, Order, Product, TrackedOrderItem};

/// Errors from order placement.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// The session cart has no lines.
    #[error("cart is empty")]
    EmptyCart,
    /// One or more customer fields failed validation.
    #[error("invalid customer details")]
    InvalidCustomer(Vec<String>),
    /// Cart lines reference products that no longer exist.
    #[error("some products are no longer available")]
    ProductUnavailable(Vec<ProductId>),
    /// The order total exceeded the representable range.
    #[error("order total is out of range")]
    TotalOverflow,
    /// Database failure.
    #[error(transparent)]
    Database(#[from] RepositoryError),
}

/// Customer details submitted with checkout, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    /// Customer's name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery street address.
    pub address: String,
    /// Delivery city.
    pub city: String,
}

/// A successfully placed order, as returned to the client.
///
/// This payload is the order confirmation page's data; there is no
/// separate endpoint to fetch an order by ID.
#[derive(Debug, Serialize)]
pub struct PlacedOrder {
    /// The persisted order.
    pub order: Order,
    /// Order lines with product titles for display.
    pub items: Vec<TrackedOrderItem>,
    /// `wa.me` deep link carrying the merchant notification.
    pub whatsapp_url: String,
}

/// Validated customer fields.
struct ValidCustomer {
    name: String,
    phone: PhoneNumber,
    address: String,
    city: String,
}

/// Checkout service.
pub struct CheckoutService<'a> {
    products: ProductRepository<'a>,
    orders: OrderRepository<'a>,
    whatsapp_phone: &'a str,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    ///
    /// `whatsapp_phone` is the merchant number the notification link
    /// targets, digits only.
    #[must_use]
    pub const fn new(pool: &'a PgPool, whatsapp_phone: &'a str) -> Self {
        Self {
            products: ProductRepository::new(pool),
            orders: OrderRepository::new(pool),
            whatsapp_phone,
        }
    }

    /// Place an order from the session cart.
    ///
    /// Reads live product data (never the catalog cache), computes the
    /// total, persists the order with per-line price snapshots, and builds
    /// the WhatsApp notification in Arabic with item lines in the buyer's
    /// language.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidCustomer` when fields fail validation,
    /// `CheckoutError::EmptyCart` for an empty cart,
    /// `CheckoutError::ProductUnavailable` when a cart line's product has
    /// been deleted, and `CheckoutError::Database` for storage failures.
    pub async fn place_order(
        &self,
        cart: &Cart,
        customer: &CustomerDetails,
        language: Language,
    ) -> Result<PlacedOrder, CheckoutError> {
        let customer = validate_customer(customer)?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Live read, not the catalog cache: prices and availability must be
        // current at the moment of purchase.
        let ids: Vec<ProductId> = cart.items().iter().map(|item| item.product_id).collect();
        let products = self.products.get_many_by_ids(&ids).await?;

        let mut missing = Vec::new();
        let mut items = Vec::with_capacity(cart.items().len());
        let mut tracked = Vec::with_capacity(cart.items().len());
        let mut lines = Vec::with_capacity(cart.items().len());
        let mut total = Price::ZERO;

        for cart_item in cart.items() {
            let Some(product) = products.iter().find(|p| p.id == cart_item.product_id) else {
                missing.push(cart_item.product_id);
                continue;
            };

            let line_total = product
                .price
                .checked_mul_quantity(cart_item.quantity)
                .ok_or(CheckoutError::TotalOverflow)?;
            total = total
                .checked_add(line_total)
                .ok_or(CheckoutError::TotalOverflow)?;

            let item_id = OrderItemId::generate();
            items.push(NewOrderItem {
                id: item_id,
                product_id: product.id,
                quantity: cart_item.quantity,
                price: product.price,
            });
            tracked.push(tracked_item(item_id, product, cart_item.quantity));
            lines.push(format!(
                "{} x{} - {} د.ت",
                product.title_in(language),
                cart_item.quantity,
                line_total
            ));
        }

        if !missing.is_empty() {
            return Err(CheckoutError::ProductUnavailable(missing));
        }

        let new_order = NewOrder {
            order_number: OrderNumber::generate(),
            customer_name: customer.name,
            customer_phone: customer.phone,
            customer_address: customer.address,
            customer_city: customer.city,
            total_amount: total,
            items,
        };

        let order = self.orders.create(&new_order).await?;

        let message = notification_message(&order, &lines);
        let whatsapp_url = format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_phone,
            urlencoding::encode(&message)
        );

        info!(
            order_number = %order.order_number,
            total = %order.total_amount,
            item_count = new_order.items.len(),
            "order placed"
        );

        Ok(PlacedOrder {
            order,
            items: tracked,
            whatsapp_url,
        })
    }
}

fn tracked_item(id: OrderItemId, product: &Product, quantity: u32) -> TrackedOrderItem {
    TrackedOrderItem {
        id,
        product_id: product.id,
        title: product.title.clone(),
        title_ar: product.title_ar.clone(),
        title_fr: product.title_fr.clone(),
        image_url: product.image_url.clone(),
        quantity,
        price: product.price,
    }
}

/// Merchant notification, in Arabic, with one line per item.
fn notification_message(order: &Order, lines: &[String]) -> String {
    format!(
        "🛒 طلب جديد من كتوب كوم\n\n\
         رقم الطلب: {}\n\
         العميل: {}\n\
         الهاتف: {}\n\
         العنوان: {}, {}\n\n\
         تفاصيل الطلب:\n{}\n\n\
         المجموع: {} د.ت\n\
         طريقة الدفع: الدفع عند الاستلام",
        order.order_number,
        order.customer_name,
        order.customer_phone,
        order.customer_address,
        order.customer_city,
        lines.join("\n"),
        order.total_amount
    )
}

fn validate_customer(customer: &CustomerDetails) -> Result<ValidCustomer, CheckoutError> {
    let mut errors = Vec::new();

    let name = sanitize_input(&customer.name);
    if name.is_empty() {
        errors.push("name is required".to_owned());
    }

    let phone = match PhoneNumber::parse(customer.phone.trim()) {
        Ok(phone) => Some(phone),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    };

    let address = sanitize_input(&customer.address);
    if address.is_empty() {
        errors.push("address is required".to_owned());
    }

    let city = sanitize_input(&customer.city);
    if city.is_empty() {
        errors.push("city is required".to_owned());
    }

    match phone {
        Some(phone) if errors.is_empty() => Ok(ValidCustomer {
            name,
            phone,
            address,
            city,
        }),
        _ => Err(CheckoutError::InvalidCustomer(errors)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use kotobcom_core::{OrderId, OrderStatus, ProductCategory};

    use super::*;

    fn details(name: &str, phone: &str, address: &str, city: &str) -> CustomerDetails {
        CustomerDetails {
            name: name.to_owned(),
            phone: phone.to_owned(),
            address: address.to_owned(),
            city: city.to_owned(),
        }
    }

    #[test]
    fn test_validate_accepts_clean_input() {
        let result = validate_customer(&details(
            "Ahmed Ben Salah",
            "+216 29 381 882",
            "12 Rue de Marseille",
            "Tunis",
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let result = validate_customer(&details("", "123", "", ""));
        let Err(CheckoutError::InvalidCustomer(errors)) = result else {
            panic!("expected InvalidCustomer");
        };
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validate_strips_markup_before_emptiness_check() {
        // A name that is nothing but markup sanitizes to empty
        let result = validate_customer(&details(
            "<script>",
            "+216 29 381 882",
            "12 Rue de Marseille",
            "Tunis",
        ));
        let Err(CheckoutError::InvalidCustomer(errors)) = result else {
            panic!("expected InvalidCustomer");
        };
        assert_eq!(errors, ["name is required"]);
    }

    #[test]
    fn test_validate_sanitizes_kept_fields() {
        let customer = validate_customer(&details(
            "Ahmed <b>Ben Salah</b>",
            "29381882",
            "12 Rue de Marseille",
            "Tunis",
        ))
        .unwrap();
        assert_eq!(customer.name, "Ahmed bBen Salah/b");
    }

    fn sample_order(lines_total: &str) -> Order {
        Order {
            id: OrderId::generate(),
            order_number: OrderNumber::from_timestamp_millis(1_700_000_000_000),
            customer_name: "Ahmed".to_owned(),
            customer_phone: PhoneNumber::parse("+21629381882").unwrap(),
            customer_address: "12 Rue de Marseille".to_owned(),
            customer_city: "Tunis".to_owned(),
            total_amount: Price::parse(lines_total).unwrap(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_notification_message_layout() {
        let order = sample_order("45.00");
        let lines = vec![
            "الخيميائي x2 - 30.00 د.ت".to_owned(),
            "تفسير x1 - 15.00 د.ت".to_owned(),
        ];

        let message = notification_message(&order, &lines);

        assert!(message.starts_with("🛒 طلب جديد من كتوب كوم\n\n"));
        assert!(message.contains("رقم الطلب: KTC-1700000000000\n"));
        assert!(message.contains("العميل: Ahmed\n"));
        assert!(message.contains("الهاتف: +21629381882\n"));
        assert!(message.contains("العنوان: 12 Rue de Marseille, Tunis\n"));
        assert!(message.contains("تفاصيل الطلب:\nالخيميائي x2 - 30.00 د.ت\nتفسير x1 - 15.00 د.ت\n"));
        assert!(message.contains("المجموع: 45.00 د.ت\n"));
        assert!(message.ends_with("طريقة الدفع: الدفع عند الاستلام"));
    }

    #[test]
    fn test_tracked_item_copies_titles() {
        let product = Product {
            id: ProductId::generate(),
            title: "The Alchemist".to_owned(),
            title_ar: "الخيميائي".to_owned(),
            title_fr: "L'Alchimiste".to_owned(),
            description: None,
            description_ar: None,
            description_fr: None,
            price: Price::parse("15.00").unwrap(),
            image_url: None,
            category: ProductCategory::General,
            author: None,
            author_ar: None,
            author_fr: None,
            in_stock: true,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let id = OrderItemId::generate();
        let item = tracked_item(id, &product, 3);
        assert_eq!(item.id, id);
        assert_eq!(item.product_id, product.id);
        assert_eq!(item.title, "The Alchemist");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, product.price);
    }
}
