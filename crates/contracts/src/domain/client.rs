use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::LoyaltyTier;
use crate::shared::validation::{is_valid_email, is_valid_phone};

/// Client account as served by the remote API. Aggregated order figures
/// (`total_orders`, `total_spent`) are only present on the detail
/// endpoint, hence the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: u64,
    pub nom: String,
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    /// Loyalty tier code; absent or unknown codes mean no tier discount.
    #[serde(default, deserialize_with = "loyalty_tier_lenient")]
    pub tier: Option<LoyaltyTier>,
    #[serde(default)]
    pub total_orders: Option<u32>,
    #[serde(default)]
    pub total_spent: Option<f64>,
    #[serde(default)]
    pub first_order_date: Option<DateTime<Utc>>,
}

/// The API occasionally serves tier codes this console does not know
/// (e.g. "BASIC"); those must behave exactly like an absent tier instead
/// of failing the whole payload.
fn loyalty_tier_lenient<'de, D>(deserializer: D) -> Result<Option<LoyaltyTier>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code: Option<String> = Option::deserialize(deserializer)?;
    Ok(code.as_deref().and_then(LoyaltyTier::from_code))
}

impl Client {
    /// Tier label for the list badge; untiered clients show as BASIC.
    pub fn tier_label(&self) -> &'static str {
        match self.tier {
            Some(tier) => tier.as_code(),
            None => "BASIC",
        }
    }
}

/// Create/update payload. Credentials are only sent on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub nom: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<LoyaltyTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ClientDto {
    pub fn validate(&self) -> Result<(), Vec<(String, String)>> {
        let mut errors = Vec::new();

        if self.nom.trim().is_empty() {
            errors.push(("nom".to_string(), "Le nom est obligatoire".to_string()));
        }
        if !is_valid_email(self.email.trim()) {
            errors.push(("email".to_string(), "Adresse email invalide".to_string()));
        }
        if let Some(phone) = &self.telephone {
            if !is_valid_phone(phone.trim()) {
                errors.push((
                    "telephone".to_string(),
                    "Numéro de téléphone invalide".to_string(),
                ));
            }
        }
        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                errors.push((
                    "username".to_string(),
                    "Le nom d'utilisateur est obligatoire".to_string(),
                ));
            }
        }
        if let Some(password) = &self.password {
            if password.len() < 4 {
                errors.push((
                    "password".to_string(),
                    "Le mot de passe doit contenir au moins 4 caractères".to_string(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parses_from_wire_code() {
        let client: Client = serde_json::from_str(
            r#"{"id":7,"nom":"Acme","email":"contact@acme.com","tier":"GOLD"}"#,
        )
        .unwrap();
        assert_eq!(client.tier, Some(LoyaltyTier::Gold));
        assert_eq!(client.tier_label(), "GOLD");
    }

    #[test]
    fn missing_tier_shows_as_basic() {
        let client: Client =
            serde_json::from_str(r#"{"id":8,"nom":"Solo","email":"solo@exemple.com"}"#).unwrap();
        assert_eq!(client.tier, None);
        assert_eq!(client.tier_label(), "BASIC");
    }

    #[test]
    fn unknown_tier_code_reads_as_none() {
        let client: Client = serde_json::from_str(
            r#"{"id":9,"nom":"Neuf","email":"neuf@exemple.com","tier":"BASIC"}"#,
        )
        .unwrap();
        assert_eq!(client.tier, None);
    }

    #[test]
    fn dto_validation_flags_bad_email_and_empty_name() {
        let dto = ClientDto {
            nom: "  ".to_string(),
            email: "pas-un-email".to_string(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fields, vec!["nom", "email"]);
    }
}
