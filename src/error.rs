// error.rs - Error types for the storefront UI crate
//
// Nothing in the components can fail at render time; these errors come from
// parsing the shipping method a radio input reports, decoding the demo
// fixtures and reading configuration.

use thiserror::Error;

/// Errors raised while turning external input into model values.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A shipping method string that is not sedex, pac or transportadora.
    #[error("unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    /// A configuration variable that is present but unusable.
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    /// One of the embedded JSON fixtures failed to decode.
    #[error("failed to decode fixture {name}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, StorefrontError>;
