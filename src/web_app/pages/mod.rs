// web_app/pages/mod.rs - Page components module
//
// - AdminOrdersPage: order list with status changes and deletion
// - AdminProductsPage: paginated catalog
// - CheckoutPage: shipping step of checkout

pub mod checkout;
pub mod orders;
pub mod products;

pub use checkout::CheckoutPage;
pub use orders::AdminOrdersPage;
pub use products::AdminProductsPage;
