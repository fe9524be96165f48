// fixtures/mod.rs - Demo data for the admin pages and tests
//
// The storefront has no backend of its own, so the pages render a small
// catalog and order list embedded at compile time. The same data backs the
// integration tests.

use serde::Deserialize;

use crate::error::{Result, StorefrontError};
use crate::web_app::model::{Order, Product};

const CATALOG_JSON: &str = include_str!("data/catalog.json");
const ORDERS_JSON: &str = include_str!("data/orders.json");

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct OrdersFile {
    orders: Vec<Order>,
}

/// Demo catalog, in display order.
pub fn demo_catalog() -> Result<Vec<Product>> {
    let file: CatalogFile = serde_json::from_str(CATALOG_JSON).map_err(|source| {
        StorefrontError::Fixture {
            name: "catalog.json",
            source,
        }
    })?;
    Ok(file.products)
}

/// Demo orders, newest last.
pub fn demo_orders() -> Result<Vec<Order>> {
    let file: OrdersFile = serde_json::from_str(ORDERS_JSON).map_err(|source| {
        StorefrontError::Fixture {
            name: "orders.json",
            source,
        }
    })?;
    Ok(file.orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{OrderStatus, PaymentMethod, ProductStatus, UNNAMED_PRODUCT};
    use rust_decimal::Decimal;

    #[test]
    fn test_demo_catalog_decodes() {
        let catalog = demo_catalog().expect("catalog fixture should decode");
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog[0].id, "p-001");
        assert_eq!(catalog[0].status, ProductStatus::Active);
    }

    #[test]
    fn test_demo_catalog_covers_fallbacks() {
        let catalog = demo_catalog().unwrap();
        let by_id = |id: &str| catalog.iter().find(|p| p.id == id).unwrap();

        assert_eq!(by_id("p-006").display_name(), UNNAMED_PRODUCT);
        assert_eq!(by_id("p-014").display_name(), UNNAMED_PRODUCT);
        assert_eq!(by_id("p-008").status, ProductStatus::Inactive);
        assert_eq!(by_id("p-009").price(), Decimal::ZERO);
    }

    #[test]
    fn test_demo_orders_decode() {
        let orders = demo_orders().expect("orders fixture should decode");
        assert_eq!(orders.len(), 6);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].payment.installments, 3);
        assert_eq!(orders[1].payment.method, PaymentMethod::Pix);
        assert_eq!(orders[1].payment.installments, 1);
        assert!(orders[2].customer.email.is_none());
    }
}
