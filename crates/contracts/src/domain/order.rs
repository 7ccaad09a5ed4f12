use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

/// Lifecycle of an order. Confirmation requires full payment; both
/// confirmation and cancellation happen through dedicated PATCH
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "REJECTED")]
    Rejected,
    // Older API builds spell this CANCELLED
    #[serde(rename = "CANCELED", alias = "CANCELLED")]
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Rejected,
        OrderStatus::Canceled,
    ];

    pub fn as_code(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Canceled => "CANCELED",
        }
    }

    pub fn label_fr(self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Confirmed => "Confirmée",
            OrderStatus::Rejected => "Rejetée",
            OrderStatus::Canceled => "Annulée",
        }
    }
}

/// One order line as returned by the API (denormalized with the product
/// name so the detail page needs no extra catalogue fetch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<u64>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Order aggregate. The price fields are the API's authoritative values;
/// the console only recomputes a breakdown client-side while *composing*
/// a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    #[serde(default)]
    pub client_id: Option<u64>,
    pub client_name: String,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub date_confirmation: Option<DateTime<Utc>>,
    pub sub_total: f64,
    #[serde(default)]
    pub discount_amount: f64,
    pub tva: f64,
    #[serde(rename = "totalTTC")]
    pub total_ttc: f64,
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Order {
    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    pub fn remaining_amount(&self) -> f64 {
        self.total_ttc - self.total_paid()
    }

    /// Paid up to a cent of tolerance, matching the API's own check.
    pub fn is_fully_paid(&self) -> bool {
        self.remaining_amount() <= 0.01
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub client_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    pub items: Vec<CreateOrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with_payments(total_ttc: f64, amounts: &[f64]) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "clientName": "Acme",
            "status": "PENDING",
            "orderDate": "2026-01-15T10:00:00Z",
            "subTotal": total_ttc / 1.2,
            "tva": total_ttc - total_ttc / 1.2,
            "totalTTC": total_ttc,
            "payments": amounts.iter().map(|a| serde_json::json!({
                "id": 1,
                "amount": a,
                "paymentMethod": "ESPECES",
                "status": "PENDING"
            })).collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    #[test]
    fn remaining_amount_sums_payments() {
        let order = order_with_payments(120.0, &[50.0, 30.0]);
        assert_eq!(order.total_paid(), 80.0);
        assert_eq!(order.remaining_amount(), 40.0);
        assert!(!order.is_fully_paid());
    }

    #[test]
    fn fully_paid_tolerates_one_cent() {
        let order = order_with_payments(120.0, &[119.995]);
        assert!(order.is_fully_paid());
    }

    #[test]
    fn legacy_cancelled_spelling_still_parses() {
        let status: OrderStatus = serde_json::from_str(r#""CANCELLED""#).unwrap();
        assert_eq!(status, OrderStatus::Canceled);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""CANCELED""#);
    }
}
