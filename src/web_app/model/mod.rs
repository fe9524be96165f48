// web_app/model/mod.rs - Shared data models for client and server
//
// Plain Rust types with no Leptos dependency, so every rule the components
// apply (badge mapping, page clamping, shipping rates, quote sequencing)
// can be tested without a reactive runtime.

pub mod badge;
pub mod currency;
pub mod order;
pub mod pagination;
pub mod product;
pub mod shipping;
pub mod table;

pub use badge::BadgeTone;
pub use currency::format_brl;
pub use order::{Customer, Order, OrderStatus, PaymentDescriptor, PaymentMethod};
pub use pagination::{total_pages, PageControls, PageWindow, DEFAULT_PAGE_SIZE, FIRST_PAGE};
pub use product::{Product, ProductStatus, UNNAMED_PRODUCT};
pub use shipping::{
    shipping_cost, validate_shipping_step, FormErrors, QuotePhase, QuoteTicket, Region,
    ShippingMethod, ShippingSelection, ShippingZone, DEFAULT_REGION, SHIPPING_METHOD_FIELD,
    SHIPPING_QUOTE_DELAY,
};
pub use table::{
    ColumnSpec, TableBody, LOADING_PRODUCTS_MESSAGE, NO_ORDERS_MESSAGE, NO_PRODUCTS_MESSAGE,
    ORDER_COLUMNS, PRODUCT_COLUMNS,
};
