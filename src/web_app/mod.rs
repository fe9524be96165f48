// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Plain data types and rules (compiled everywhere, no Leptos)
// - region.rs: Injected region lookup for shipping quotes
// - components/: Admin tables and the checkout shipping form (SSR and hydrate)
// - pages/: Pages that own the state the components report into
// - app.rs: Root application component with routing

pub mod model;
pub mod region;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
