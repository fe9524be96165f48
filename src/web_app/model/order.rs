// web_app/model/order.rs - Orders as shown in the admin orders table

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::badge::BadgeTone;

/// Lifecycle status of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ];

    /// Wire value, as stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Label shown to admins.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Processing => "Processando",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Canceled => "Cancelado",
        }
    }

    pub fn badge(self) -> BadgeTone {
        match self {
            OrderStatus::Pending => BadgeTone::Warning,
            OrderStatus::Processing | OrderStatus::Shipped => BadgeTone::Info,
            OrderStatus::Delivered => BadgeTone::Positive,
            OrderStatus::Canceled => BadgeTone::Negative,
        }
    }

    /// Statuses offered in the row's "change status" menu: all but the current one.
    pub fn alternatives(self) -> impl Iterator<Item = OrderStatus> {
        Self::ALL.into_iter().filter(move |status| *status != self)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the customer paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Pix,
    Boleto,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Boleto => "Boleto",
        }
    }
}

fn single_installment() -> u8 {
    1
}

/// Payment metadata shown in the "Pagamento" column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDescriptor {
    pub method: PaymentMethod,
    #[serde(default = "single_installment")]
    pub installments: u8,
}

impl PaymentDescriptor {
    /// "Pix", or "Cartão de Crédito (3x)" for split card payments.
    pub fn describe(&self) -> String {
        if self.installments > 1 {
            format!("{} ({}x)", self.method.label(), self.installments)
        } else {
            self.method.label().to_string()
        }
    }
}

/// Customer reference attached to an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Order record, owned by the caller and rendered read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub placed_at: NaiveDateTime,
    pub customer: Customer,
    pub total: Decimal,
    pub payment: PaymentDescriptor,
    pub status: OrderStatus,
}

impl Order {
    /// Order number as shown in the "Pedido" column.
    pub fn display_id(&self) -> String {
        format!("#{}", self.id)
    }

    /// Placement date in dd/mm/yyyy.
    pub fn display_date(&self) -> String {
        self.placed_at.format("%d/%m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_order() -> Order {
        Order {
            id: "1042".to_string(),
            placed_at: NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            customer: Customer {
                name: "Ana Souza".to_string(),
                email: Some("ana@example.com".to_string()),
            },
            total: Decimal::new(25990, 2),
            payment: PaymentDescriptor {
                method: PaymentMethod::CreditCard,
                installments: 3,
            },
            status: OrderStatus::Processing,
        }
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<_> = OrderStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Pendente", "Processando", "Enviado", "Entregue", "Cancelado"]);
        assert_eq!(OrderStatus::Shipped.to_string(), "Enviado");
    }

    #[test]
    fn test_status_wire_values() {
        for status in OrderStatus::ALL {
            let json = format!("\"{}\"", status.as_str());
            assert_eq!(serde_json::from_str::<OrderStatus>(&json).unwrap(), status);
        }
        assert!(serde_json::from_str::<OrderStatus>("\"lost\"").is_err());
    }

    #[test]
    fn test_status_alternatives_exclude_current() {
        let options: Vec<_> = OrderStatus::Pending.alternatives().collect();
        assert_eq!(options.len(), 4);
        assert!(!options.contains(&OrderStatus::Pending));
        assert_eq!(options[0], OrderStatus::Processing);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(OrderStatus::Pending.badge(), BadgeTone::Warning);
        assert_eq!(OrderStatus::Delivered.badge(), BadgeTone::Positive);
        assert_eq!(OrderStatus::Canceled.badge(), BadgeTone::Negative);
    }

    #[test]
    fn test_payment_description() {
        let order = sample_order();
        assert_eq!(order.payment.describe(), "Cartão de Crédito (3x)");

        let pix = PaymentDescriptor {
            method: PaymentMethod::Pix,
            installments: 1,
        };
        assert_eq!(pix.describe(), "Pix");
    }

    #[test]
    fn test_display_helpers() {
        let order = sample_order();
        assert_eq!(order.display_id(), "#1042");
        assert_eq!(order.display_date(), "07/03/2024");
    }

    #[test]
    fn test_order_deserializes_from_camel_case() {
        let json = r#"{
            "id": "7",
            "placedAt": "2024-01-15T09:00:00",
            "customer": { "name": "Bruno" },
            "total": "89.90",
            "payment": { "method": "pix" },
            "status": "delivered"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer.email, None);
        assert_eq!(order.payment.installments, 1);
        assert_eq!(order.total, Decimal::new(8990, 2));
        assert_eq!(order.status, OrderStatus::Delivered);
    }
}
