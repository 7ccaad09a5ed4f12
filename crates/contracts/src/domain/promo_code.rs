use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_valid_promo_code, normalize_promo_code, parse_positive_number};

/// Promotional code granting a percentage discount on the order subtotal.
/// Validation of a code against an order happens server-side; the console
/// only filters the selectable list down to active, unexpired codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: u64,
    pub code: String,
    pub discount_percentage: f64,
    pub active: bool,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
}

impl PromoCode {
    pub fn is_currently_active(&self, now: DateTime<Utc>) -> bool {
        self.active && self.end_date >= now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeDto {
    pub code: String,
    pub discount_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
}

impl PromoCodeDto {
    /// Build from raw form values. The code is normalized before the
    /// format check so `promo-ab12` is accepted as `PROMO-AB12`.
    pub fn from_form(
        code: &str,
        percentage: &str,
        end_date: Option<DateTime<Utc>>,
        usage_limit: &str,
    ) -> Result<Self, Vec<(String, String)>> {
        let mut errors = Vec::new();

        let code = normalize_promo_code(code);
        if !is_valid_promo_code(&code) {
            errors.push((
                "code".to_string(),
                "Le code doit respecter le format PROMO-XXXX".to_string(),
            ));
        }

        let discount_percentage = match parse_positive_number(percentage) {
            Some(p) if p <= 100.0 => p,
            _ => {
                errors.push((
                    "discountPercentage".to_string(),
                    "Le pourcentage doit être entre 0 et 100".to_string(),
                ));
                0.0
            }
        };

        let end_date = match end_date {
            Some(d) => d,
            None => {
                errors.push((
                    "endDate".to_string(),
                    "La date de fin est obligatoire".to_string(),
                ));
                Utc::now()
            }
        };

        let usage_limit = if usage_limit.trim().is_empty() {
            None
        } else {
            match usage_limit.trim().parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    errors.push((
                        "usageLimit".to_string(),
                        "La limite d'utilisation doit être un entier positif".to_string(),
                    ));
                    None
                }
            }
        };

        if errors.is_empty() {
            Ok(Self {
                code,
                discount_percentage,
                start_date: None,
                end_date,
                usage_limit,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn active_requires_flag_and_unexpired_date() {
        let promo = PromoCode {
            id: 1,
            code: "PROMO-ET24".to_string(),
            discount_percentage: 15.0,
            active: true,
            start_date: None,
            end_date: date(2026, 6, 30),
            usage_limit: None,
        };
        assert!(promo.is_currently_active(date(2026, 6, 1)));
        assert!(!promo.is_currently_active(date(2026, 7, 1)));

        let inactive = PromoCode {
            active: false,
            ..promo
        };
        assert!(!inactive.is_currently_active(date(2026, 6, 1)));
    }

    #[test]
    fn from_form_normalizes_code() {
        let dto = PromoCodeDto::from_form(" promo-ab12 ", "10", Some(date(2026, 12, 31)), "")
            .unwrap();
        assert_eq!(dto.code, "PROMO-AB12");
        assert_eq!(dto.discount_percentage, 10.0);
        assert_eq!(dto.usage_limit, None);
    }

    #[test]
    fn from_form_rejects_out_of_range_percentage() {
        let errors =
            PromoCodeDto::from_form("PROMO-AB12", "150", Some(date(2026, 12, 31)), "").unwrap_err();
        assert_eq!(errors[0].0, "discountPercentage");
    }
}
