//! Display formatting for tables and detail pages.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contracts::shared::money::format_money;

/// Monetary amount with currency suffix, e.g. `"1234.50 DH"`.
pub fn format_money_dh(value: f64) -> String {
    format!("{} DH", format_money(value))
}

pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Parse an `<input type="date">` value. The resulting instant is the end
/// of that day so a promo code stays usable through its last day.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    let at_end_of_day = date.and_hms_opt(23, 59, 59)?;
    Some(Utc.from_utc_datetime(&at_end_of_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_with_currency() {
        assert_eq!(format_money_dh(1234.5), "1234.50 DH");
        assert_eq!(format_money_dh(0.0), "0.00 DH");
    }

    #[test]
    fn dates_render_french_style() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 7, 14, 30, 0).unwrap();
        assert_eq!(format_date(dt), "07/03/2026");
        assert_eq!(format_datetime(dt), "07/03/2026 14:30");
    }

    #[test]
    fn date_input_parses_to_end_of_day() {
        let dt = parse_date_input("2026-12-31").unwrap();
        assert_eq!(format_datetime(dt), "31/12/2026 23:59");
        assert_eq!(parse_date_input("31/12/2026"), None);
        assert_eq!(parse_date_input(""), None);
    }
}
