use serde::{Deserialize, Serialize};

use crate::shared::validation::{parse_non_negative_number, parse_positive_number};

/// Catalogue product as served by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub nom: String,
    pub prix_unitaire: f64,
    pub stock: u32,
    #[serde(default = "default_true")]
    pub actif: bool,
}

fn default_true() -> bool {
    true
}

/// Create/update payload. Price and stock arrive from text inputs, so the
/// DTO is built through [`ProductDto::from_form`] which also validates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub nom: String,
    pub prix_unitaire: f64,
    pub stock: u32,
}

impl ProductDto {
    /// Build from raw form values, returning per-field error messages.
    pub fn from_form(nom: &str, prix: &str, stock: &str) -> Result<Self, Vec<(String, String)>> {
        let mut errors = Vec::new();

        let nom = nom.trim();
        if nom.is_empty() {
            errors.push(("nom".to_string(), "Le nom est obligatoire".to_string()));
        }

        let prix_unitaire = match parse_positive_number(prix) {
            Some(p) => p,
            None => {
                errors.push((
                    "prixUnitaire".to_string(),
                    "Le prix doit être un nombre positif".to_string(),
                ));
                0.0
            }
        };

        let stock = match parse_non_negative_number(stock) {
            Some(s) if s.fract() == 0.0 => s as u32,
            _ => {
                errors.push((
                    "stock".to_string(),
                    "Le stock doit être un entier positif ou nul".to_string(),
                ));
                0
            }
        };

        if errors.is_empty() {
            Ok(Self {
                nom: nom.to_string(),
                prix_unitaire,
                stock,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_form_accepts_valid_input() {
        let dto = ProductDto::from_form(" Clavier ", "49.90", "12").unwrap();
        assert_eq!(dto.nom, "Clavier");
        assert_eq!(dto.prix_unitaire, 49.9);
        assert_eq!(dto.stock, 12);
    }

    #[test]
    fn from_form_collects_all_field_errors() {
        let errors = ProductDto::from_form("", "-1", "2.5").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fields, vec!["nom", "prixUnitaire", "stock"]);
    }

    #[test]
    fn product_actif_defaults_to_true() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"nom":"Souris","prixUnitaire":19.9,"stock":5}"#)
                .unwrap();
        assert!(product.actif);
    }
}
