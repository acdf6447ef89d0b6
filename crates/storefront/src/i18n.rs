//! Static UI translations served to storefront clients.
//!
//! Messages are keyed by the camelCase identifiers the web client uses.
//! Tables are embedded in the binary; there is no runtime loading.

use kotobcom_core::Language;

/// Number of message keys per language. All tables carry the same keys.
const MESSAGE_COUNT: usize = 36;

const AR: [(&str, &str); MESSAGE_COUNT] = [
    ("home", "الرئيسية"),
    ("generalBooks", "الكتب العامة"),
    ("religiousBooks", "الكتب الدينية"),
    ("cart", "السلة"),
    ("contact", "اتصل بنا"),
    ("addToCart", "أضف إلى السلة"),
    ("buyNow", "اشتري الآن"),
    ("checkout", "الدفع"),
    ("placeOrder", "تأكيد الطلب"),
    ("trackOrder", "تتبع الطلب"),
    ("price", "السعر"),
    ("author", "المؤلف"),
    ("inStock", "متوفر"),
    ("outOfStock", "غير متوفر"),
    ("customerInfo", "معلومات العميل"),
    ("name", "الاسم"),
    ("phone", "رقم الهاتف"),
    ("address", "العنوان"),
    ("city", "المدينة"),
    ("paymentMethod", "طريقة الدفع"),
    ("cashOnDelivery", "الدفع عند الاستلام"),
    ("pending", "في الانتظار"),
    ("processing", "قيد المعالجة"),
    ("shipped", "تم الشحن"),
    ("delivered", "تم التسليم"),
    ("total", "المجموع"),
    ("quantity", "الكمية"),
    ("remove", "حذف"),
    ("continue", "متابعة"),
    ("back", "رجوع"),
    ("heroTitle", "مكتبة كتبكم"),
    ("heroSubtitle", "أفضل الكتب العامة والدينية في تونس"),
    ("shopNow", "تسوق الآن"),
    ("featuredBooks", "الكتب المميزة"),
    ("newArrivals", "وصل حديثاً"),
    ("bestSellers", "الأكثر مبيعاً"),
];

const FR: [(&str, &str); MESSAGE_COUNT] = [
    ("home", "Accueil"),
    ("generalBooks", "Livres Généraux"),
    ("religiousBooks", "Livres Religieux"),
    ("cart", "Panier"),
    ("contact", "Contact"),
    ("addToCart", "Ajouter au panier"),
    ("buyNow", "Acheter maintenant"),
    ("checkout", "Commander"),
    ("placeOrder", "Confirmer la commande"),
    ("trackOrder", "Suivre la commande"),
    ("price", "Prix"),
    ("author", "Auteur"),
    ("inStock", "En stock"),
    ("outOfStock", "Rupture de stock"),
    ("customerInfo", "Informations client"),
    ("name", "Nom"),
    ("phone", "Téléphone"),
    ("address", "Adresse"),
    ("city", "Ville"),
    ("paymentMethod", "Mode de paiement"),
    ("cashOnDelivery", "Paiement à la livraison"),
    ("pending", "En attente"),
    ("processing", "En traitement"),
    ("shipped", "Expédié"),
    ("delivered", "Livré"),
    ("total", "Total"),
    ("quantity", "Quantité"),
    ("remove", "Supprimer"),
    ("continue", "Continuer"),
    ("back", "Retour"),
    ("heroTitle", "Librairie Kotobcom"),
    ("heroSubtitle", "Les meilleurs livres généraux et religieux en Tunisie"),
    ("shopNow", "Acheter maintenant"),
    ("featuredBooks", "Livres en vedette"),
    ("newArrivals", "Nouveautés"),
    ("bestSellers", "Meilleures ventes"),
];

const EN: [(&str, &str); MESSAGE_COUNT] = [
    ("home", "Home"),
    ("generalBooks", "General Books"),
    ("religiousBooks", "Religious Books"),
    ("cart", "Cart"),
    ("contact", "Contact"),
    ("addToCart", "Add to Cart"),
    ("buyNow", "Buy Now"),
    ("checkout", "Checkout"),
    ("placeOrder", "Place Order"),
    ("trackOrder", "Track Order"),
    ("price", "Price"),
    ("author", "Author"),
    ("inStock", "In Stock"),
    ("outOfStock", "Out of Stock"),
    ("customerInfo", "Customer Information"),
    ("name", "Name"),
    ("phone", "Phone"),
    ("address", "Address"),
    ("city", "City"),
    ("paymentMethod", "Payment Method"),
    ("cashOnDelivery", "Cash on Delivery"),
    ("pending", "Pending"),
    ("processing", "Processing"),
    ("shipped", "Shipped"),
    ("delivered", "Delivered"),
    ("total", "Total"),
    ("quantity", "Quantity"),
    ("remove", "Remove"),
    ("continue", "Continue"),
    ("back", "Back"),
    ("heroTitle", "Kotobcom Bookstore"),
    ("heroSubtitle", "The best general and religious books in Tunisia"),
    ("shopNow", "Shop Now"),
    ("featuredBooks", "Featured Books"),
    ("newArrivals", "New Arrivals"),
    ("bestSellers", "Best Sellers"),
];

/// The full message table for a language.
#[must_use]
pub const fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Ar => &AR,
        Language::Fr => &FR,
        Language::En => &EN,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_key_set() {
        for language in [Language::Fr, Language::En] {
            for (i, (key, _)) in table(language).iter().enumerate() {
                assert_eq!(*key, AR[i].0, "key order diverged in {language:?}");
            }
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut keys: Vec<&str> = AR.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MESSAGE_COUNT);
    }

    #[test]
    fn test_known_key_lookup() {
        for (language, expected) in [
            (Language::Ar, "السلة"),
            (Language::Fr, "Panier"),
            (Language::En, "Cart"),
        ] {
            let found = table(language).iter().find(|(k, _)| *k == "cart");
            assert_eq!(found.map(|(_, v)| *v), Some(expected));
        }
    }

    #[test]
    fn test_status_keys_are_present() {
        // Order statuses are translated client-side via these keys
        for status in kotobcom_core::OrderStatus::ALL {
            for language in Language::ALL {
                assert!(
                    table(language).iter().any(|(k, _)| *k == status.as_str()),
                    "missing {status} in {language:?}"
                );
            }
        }
    }

    #[test]
    fn test_no_empty_messages() {
        for language in Language::ALL {
            for (key, message) in table(language) {
                assert!(!message.is_empty(), "empty message for {key}");
            }
        }
    }
}
