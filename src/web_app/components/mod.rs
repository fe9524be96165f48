// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Badges, table header/placeholder rows, page controls, page shell
// - orders.rs: OrdersTable, OrderTableRow, OrderDetail
// - products.rs: ProductsTable, ProductRow
// - checkout.rs: ShippingMethodForm

pub mod checkout;
pub mod common;
pub mod orders;
pub mod products;

pub use checkout::*;
pub use common::*;
pub use orders::*;
pub use products::*;
