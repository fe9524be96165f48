// web_app/model/shipping.rs - Shipping methods, flat-rate table and quote state
//
// The "calculation" is a fixed table keyed by (zone, method). What makes this
// module interesting is `ShippingSelection`: every selection issues a
// `QuoteTicket`, and only the ticket from the latest selection may resolve.
// A slow timer from an earlier click can no longer overwrite a newer cost.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Simulated latency of the shipping quote.
pub const SHIPPING_QUOTE_DELAY: Duration = Duration::from_millis(500);

/// Region assumed when the client has not stored one.
pub const DEFAULT_REGION: &str = "SP";

/// Key of the shipping method entry in a checkout error map.
pub const SHIPPING_METHOD_FIELD: &str = "shippingMethod";

/// Validation messages keyed by form field, computed by the caller.
pub type FormErrors = HashMap<String, String>;

/// Carrier/service options offered at checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Sedex,
    Pac,
    Transportadora,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Sedex,
        ShippingMethod::Pac,
        ShippingMethod::Transportadora,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShippingMethod::Sedex => "sedex",
            ShippingMethod::Pac => "pac",
            ShippingMethod::Transportadora => "transportadora",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShippingMethod::Sedex => "Sedex",
            ShippingMethod::Pac => "PAC",
            ShippingMethod::Transportadora => "Transportadora",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ShippingMethod::Sedex => "🚚",
            ShippingMethod::Pac => "📦",
            ShippingMethod::Transportadora => "🚛",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShippingMethod {
    type Err = StorefrontError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| StorefrontError::UnknownShippingMethod(value.to_string()))
    }
}

/// Customer region as stored by the client, kept verbatim.
///
/// Only the exact codes `SP` and `RJ` get the primary rate; anything else,
/// including `"sp"` or `" SP"`, is priced as any other state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region(String);

impl Default for Region {
    fn default() -> Self {
        Region(DEFAULT_REGION.to_string())
    }
}

impl Region {
    pub fn new(code: impl Into<String>) -> Self {
        Region(code.into())
    }

    /// Resolve a stored hint. Missing or empty means the default region;
    /// any other value is used as-is, with a warning when it does not look
    /// like a state code.
    pub fn from_hint(hint: Option<&str>) -> Region {
        match hint {
            None | Some("") => Region::default(),
            Some(code) => {
                let region = Region::new(code);
                if !region.is_state_code() {
                    tracing::warn!(hint = code, "stored region is not a state code, using the extended rate");
                }
                region
            }
        }
    }

    /// Two upper-case ASCII letters.
    pub fn is_state_code(&self) -> bool {
        self.0.len() == 2 && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn zone(&self) -> ShippingZone {
        match self.code() {
            "SP" | "RJ" => ShippingZone::Primary,
            _ => ShippingZone::Extended,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rate tier a region falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShippingZone {
    /// SP and RJ.
    Primary,
    /// Every other state.
    Extended,
}

/// Flat shipping rate for a method in a zone.
pub fn zone_rate(zone: ShippingZone, method: ShippingMethod) -> Decimal {
    let reais = match (zone, method) {
        (ShippingZone::Primary, ShippingMethod::Sedex) => 20,
        (ShippingZone::Primary, ShippingMethod::Pac) => 15,
        (ShippingZone::Primary, ShippingMethod::Transportadora) => 40,
        (ShippingZone::Extended, ShippingMethod::Sedex) => 30,
        (ShippingZone::Extended, ShippingMethod::Pac) => 20,
        (ShippingZone::Extended, ShippingMethod::Transportadora) => 40,
    };
    Decimal::from(reais)
}

/// Shipping cost for a method delivered to `region`.
pub fn shipping_cost(region: &Region, method: ShippingMethod) -> Decimal {
    zone_rate(region.zone(), method)
}

/// Where the form's quote currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotePhase {
    Unselected,
    Calculating,
    Calculated,
}

/// Issued by a selection; resolving it sets the cost if still current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteTicket {
    generation: u64,
    method: ShippingMethod,
}

impl QuoteTicket {
    pub fn method(&self) -> ShippingMethod {
        self.method
    }
}

/// Form-local shipping state: chosen method, derived cost, pending flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShippingSelection {
    method: Option<ShippingMethod>,
    cost: Decimal,
    calculating: bool,
    generation: u64,
}

impl ShippingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> Option<ShippingMethod> {
        self.method
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn is_calculating(&self) -> bool {
        self.calculating
    }

    pub fn phase(&self) -> QuotePhase {
        match (self.method, self.calculating) {
            (None, _) => QuotePhase::Unselected,
            (Some(_), true) => QuotePhase::Calculating,
            (Some(_), false) => QuotePhase::Calculated,
        }
    }

    /// Record a new selection. Any ticket issued before this call goes stale.
    ///
    /// `None` resets the cost to zero and returns no ticket.
    pub fn select(&mut self, method: Option<ShippingMethod>) -> Option<QuoteTicket> {
        self.generation = self.generation.wrapping_add(1);
        self.method = method;
        match method {
            None => {
                self.cost = Decimal::ZERO;
                self.calculating = false;
                None
            }
            Some(method) => {
                self.calculating = true;
                Some(QuoteTicket {
                    generation: self.generation,
                    method,
                })
            }
        }
    }

    /// Apply a finished quote. Returns `false` for a superseded ticket.
    pub fn resolve(&mut self, ticket: QuoteTicket, region: &Region) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                method = ticket.method.as_str(),
                "discarding superseded shipping quote"
            );
            return false;
        }
        self.cost = shipping_cost(region, ticket.method);
        self.calculating = false;
        true
    }
}

/// Errors for the shipping step of checkout, in the form's error-map shape.
pub fn validate_shipping_step(method: Option<ShippingMethod>) -> FormErrors {
    let mut errors = FormErrors::new();
    if method.is_none() {
        errors.insert(
            SHIPPING_METHOD_FIELD.to_string(),
            "Selecione um método de envio.".to_string(),
        );
    }
    errors
}
