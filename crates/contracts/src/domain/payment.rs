use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "ESPECES")]
    Especes,
    #[serde(rename = "CHEQUE")]
    Cheque,
    #[serde(rename = "VIREMENT")]
    Virement,
    #[serde(rename = "CARTE")]
    Carte,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Especes,
        PaymentMethod::Cheque,
        PaymentMethod::Virement,
        PaymentMethod::Carte,
    ];

    pub fn as_code(self) -> &'static str {
        match self {
            PaymentMethod::Especes => "ESPECES",
            PaymentMethod::Cheque => "CHEQUE",
            PaymentMethod::Virement => "VIREMENT",
            PaymentMethod::Carte => "CARTE",
        }
    }

    pub fn label_fr(self) -> &'static str {
        match self {
            PaymentMethod::Especes => "Espèces",
            PaymentMethod::Cheque => "Chèque",
            PaymentMethod::Virement => "Virement",
            PaymentMethod::Carte => "Carte",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_code() == code)
    }

    /// Cheques and wires need a reference / bank name on the form.
    pub fn requires_reference(self) -> bool {
        matches!(self, PaymentMethod::Cheque | PaymentMethod::Virement)
    }
}

/// A recorded payment starts PENDING and is later marked cashed or
/// rejected by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ENCAISSE")]
    Encaisse,
    #[serde(rename = "REJETE")]
    Rejete,
}

impl PaymentStatus {
    pub fn as_code(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Encaisse => "ENCAISSE",
            PaymentStatus::Rejete => "REJETE",
        }
    }

    pub fn label_fr(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "En attente",
            PaymentStatus::Encaisse => "Encaissé",
            PaymentStatus::Rejete => "Rejeté",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: u64,
    #[serde(default)]
    pub order_id: Option<u64>,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub order_id: u64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_codes_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_code(method.as_code()), Some(method));
        }
        assert_eq!(PaymentMethod::from_code("TROC"), None);
    }

    #[test]
    fn reference_required_for_cheque_and_wire() {
        assert!(PaymentMethod::Cheque.requires_reference());
        assert!(PaymentMethod::Virement.requires_reference());
        assert!(!PaymentMethod::Especes.requires_reference());
        assert!(!PaymentMethod::Carte.requires_reference());
    }

    #[test]
    fn create_request_omits_absent_reference() {
        let request = CreatePaymentRequest {
            order_id: 4,
            amount: 100.0,
            payment_method: PaymentMethod::Especes,
            reference: None,
            bank_name: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("reference").is_none());
        assert_eq!(json["paymentMethod"], "ESPECES");
    }
}
