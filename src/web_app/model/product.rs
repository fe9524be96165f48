// web_app/model/product.rs - Catalog products as listed in the admin table

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::badge::BadgeTone;

/// Placeholder shown when a product has no name.
pub const UNNAMED_PRODUCT: &str = "Sem nome";

/// Availability status of a product.
///
/// Anything the backend sends besides `active` and `out_of_stock` is
/// treated as inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    OutOfStock,
    #[default]
    #[serde(other)]
    Inactive,
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Active => "Ativo",
            ProductStatus::OutOfStock => "Sem Est.",
            ProductStatus::Inactive => "Inativo",
        }
    }

    pub fn badge(self) -> BadgeTone {
        match self {
            ProductStatus::Active => BadgeTone::Positive,
            ProductStatus::OutOfStock => BadgeTone::Warning,
            ProductStatus::Inactive => BadgeTone::Negative,
        }
    }
}

/// Product row data, owned by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Product {
    /// Name, or the placeholder when missing or blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNNAMED_PRODUCT)
    }

    pub fn display_brand(&self) -> &str {
        self.brand.as_deref().unwrap_or_default()
    }

    /// Selling price, zero when unknown.
    pub fn price(&self) -> Decimal {
        self.selling_price.unwrap_or(Decimal::ZERO)
    }
}
