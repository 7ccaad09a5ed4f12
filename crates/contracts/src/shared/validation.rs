//! Field-level validation used by the forms before any API call.
//!
//! The remote API revalidates everything; these checks only exist to give
//! immediate feedback and to keep obviously malformed payloads off the
//! wire. The pricing calculator relies on this layer: it performs no
//! input validation of its own.

/// Cash payments are legally capped at 20 000 DH.
pub const CASH_PAYMENT_LIMIT: f64 = 20_000.0;

/// Promo codes follow the fixed `PROMO-XXXX` format (uppercase
/// alphanumeric suffix).
pub fn is_valid_promo_code(code: &str) -> bool {
    let Some(suffix) = code.strip_prefix("PROMO-") else {
        return false;
    };
    suffix.len() == 4
        && suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Trim and uppercase user input before validating or sending it.
pub fn normalize_promo_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let tld = domain_parts.next().unwrap_or("");
    let Some(host) = domain_parts.next() else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.contains('@')
        && !domain.contains(char::is_whitespace)
}

/// Phone is optional; when present it must be at least 10 characters of
/// digits, spaces, dashes, parentheses or a leading plus.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    phone.chars().count() >= 10
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

/// Parse a text input as a strictly positive number.
pub fn parse_positive_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| *n > 0.0)
}

/// Parse a text input as a non-negative number.
pub fn parse_non_negative_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| *n >= 0.0)
}

pub fn has_enough_stock(requested: u32, available: u32) -> bool {
    requested <= available
}

/// Payment amount rules for the record-payment dialog. Returns a
/// user-facing message, or `None` when the amount is acceptable.
pub fn validate_payment_amount(
    amount: &str,
    method_code: &str,
    remaining_amount: f64,
) -> Option<String> {
    let Some(amount) = parse_positive_number(amount) else {
        return Some("Le montant doit être supérieur à 0".to_string());
    };
    if amount > remaining_amount {
        return Some("Le montant dépasse le montant restant".to_string());
    }
    if method_code == "ESPECES" && amount > CASH_PAYMENT_LIMIT {
        return Some("Les paiements en espèces sont limités à 20 000 DH".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promo_code_format() {
        assert!(is_valid_promo_code("PROMO-AB12"));
        assert!(is_valid_promo_code("PROMO-2024"));
        assert!(!is_valid_promo_code("PROMO-ab12"));
        assert!(!is_valid_promo_code("PROMO-AB1"));
        assert!(!is_valid_promo_code("PROMO-AB123"));
        assert!(!is_valid_promo_code("CODE-AB12"));
        assert!(!is_valid_promo_code(""));
    }

    #[test]
    fn promo_code_normalization() {
        assert_eq!(normalize_promo_code("  promo-ab12 "), "PROMO-AB12");
        assert_eq!(normalize_promo_code(""), "");
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("client@exemple.com"));
        assert!(is_valid_email("a.b@sub.domain.fr"));
        assert!(!is_valid_email("client@exemple"));
        assert!(!is_valid_email("@exemple.com"));
        assert!(!is_valid_email("client exemple.com"));
        assert!(!is_valid_email("client@ exemple.com"));
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("0612345678"));
        assert!(is_valid_phone("+212 6 12 34 56 78"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("06-12-34-56-ab"));
    }

    #[test]
    fn numeric_parsing() {
        assert_eq!(parse_positive_number("12.5"), Some(12.5));
        assert_eq!(parse_positive_number("0"), None);
        assert_eq!(parse_positive_number("abc"), None);
        assert_eq!(parse_non_negative_number("0"), Some(0.0));
        assert_eq!(parse_non_negative_number("-1"), None);
    }

    #[test]
    fn stock_check() {
        assert!(has_enough_stock(3, 3));
        assert!(!has_enough_stock(4, 3));
    }

    #[test]
    fn payment_amount_rules() {
        assert_eq!(validate_payment_amount("100", "CHEQUE", 500.0), None);
        assert!(validate_payment_amount("0", "CHEQUE", 500.0).is_some());
        assert!(validate_payment_amount("600", "CHEQUE", 500.0).is_some());
        assert!(validate_payment_amount("20001", "ESPECES", 50_000.0).is_some());
        assert_eq!(validate_payment_amount("20000", "ESPECES", 50_000.0), None);
    }
}
