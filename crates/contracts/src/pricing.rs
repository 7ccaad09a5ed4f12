//! Order pricing calculator.
//!
//! Pure arithmetic over a list of line items, the client's loyalty tier
//! and an optional promo percentage. Every helper keeps full f64
//! precision; [`compute_order_totals`] is the only place that rounds, and
//! it rounds each field of the breakdown independently. The two discounts
//! are both computed from the pre-discount subtotal (not compounded), and
//! the discounted base is intentionally not floored at zero.
//!
//! No validation happens here. Malformed quantities, prices or
//! percentages are the forms' responsibility
//! (see [`crate::shared::validation`]); this module is total over its
//! numeric domain and never fails.

use serde::{Deserialize, Serialize};

use crate::shared::money::round2;

/// VAT rate, fixed at 20% across the whole system. Charged on the net
/// price after discounts, not on the gross subtotal.
pub const TVA_RATE: f64 = 0.20;

/// Client loyalty classification, each tier carrying a fixed discount
/// rate applied to the order subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub const ALL: [LoyaltyTier; 4] = [
        LoyaltyTier::Bronze,
        LoyaltyTier::Silver,
        LoyaltyTier::Gold,
        LoyaltyTier::Platinum,
    ];

    pub fn discount_rate(self) -> f64 {
        match self {
            LoyaltyTier::Bronze => 0.05,
            LoyaltyTier::Silver => 0.10,
            LoyaltyTier::Gold => 0.15,
            LoyaltyTier::Platinum => 0.20,
        }
    }

    /// Parse the API's uppercase code. Unknown codes map to `None`, which
    /// the calculator treats as a 0% tier.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BRONZE" => Some(LoyaltyTier::Bronze),
            "SILVER" => Some(LoyaltyTier::Silver),
            "GOLD" => Some(LoyaltyTier::Gold),
            "PLATINUM" => Some(LoyaltyTier::Platinum),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "BRONZE",
            LoyaltyTier::Silver => "SILVER",
            LoyaltyTier::Gold => "GOLD",
            LoyaltyTier::Platinum => "PLATINUM",
        }
    }
}

/// One priced order line. Ephemeral, built by the caller per pricing
/// request; carries no identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub unit_price: f64,
    pub quantity: u32,
}

/// Fully broken-down order price, every field rounded to two decimals.
///
/// Because each field is rounded independently after derivation, the
/// summary identities (`ht_after_discounts = subtotal - discounts`,
/// `total_ttc = ht_after_discounts + tva`) hold only to ±0.01.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal_ht: f64,
    pub loyalty_discount: f64,
    pub promo_discount: f64,
    pub ht_after_discounts: f64,
    pub tva: f64,
    pub total_ttc: f64,
}

impl PriceBreakdown {
    pub fn zero() -> Self {
        Self {
            subtotal_ht: 0.0,
            loyalty_discount: 0.0,
            promo_discount: 0.0,
            ht_after_discounts: 0.0,
            tva: 0.0,
            total_ttc: 0.0,
        }
    }
}

/// Sum of `unit_price * quantity` over all items. Empty list yields 0.
pub fn subtotal_ht(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(|item| item.unit_price * f64::from(item.quantity))
        .sum()
}

/// `subtotal * rate(tier)`; no tier means no discount.
pub fn loyalty_discount_amount(subtotal_ht: f64, tier: Option<LoyaltyTier>) -> f64 {
    subtotal_ht * tier.map(LoyaltyTier::discount_rate).unwrap_or(0.0)
}

/// `subtotal * promo_percent / 100`.
pub fn promo_discount_amount(subtotal_ht: f64, promo_percent: f64) -> f64 {
    subtotal_ht * (promo_percent / 100.0)
}

/// Plain subtraction, no floor at zero: if both discounts together exceed
/// the subtotal the result goes negative and is propagated as-is.
pub fn ht_after_discounts(subtotal_ht: f64, loyalty_discount: f64, promo_discount: f64) -> f64 {
    subtotal_ht - loyalty_discount - promo_discount
}

/// 20% VAT on the post-discount base.
pub fn tva(ht_amount: f64) -> f64 {
    ht_amount * TVA_RATE
}

pub fn total_ttc(ht_amount: f64, tva: f64) -> f64 {
    ht_amount + tva
}

/// Compose the full breakdown from raw inputs.
///
/// Derivation order is fixed: subtotal, loyalty discount, promo discount,
/// discounted base, VAT, total — all at full precision — then each field
/// is rounded on its way into the result. The discounted base is derived
/// from the *unrounded* discount amounts, which reproduces the reference
/// output cent for cent.
pub fn compute_order_totals(
    items: &[LineItem],
    tier: Option<LoyaltyTier>,
    promo_percent: f64,
) -> PriceBreakdown {
    let subtotal = subtotal_ht(items);
    let loyalty = loyalty_discount_amount(subtotal, tier);
    let promo = promo_discount_amount(subtotal, promo_percent);
    let after_discounts = ht_after_discounts(subtotal, loyalty, promo);
    let tax = tva(after_discounts);
    let total = total_ttc(after_discounts, tax);

    PriceBreakdown {
        subtotal_ht: round2(subtotal),
        loyalty_discount: round2(loyalty),
        promo_discount: round2(promo),
        ht_after_discounts: round2(after_discounts),
        tva: round2(tax),
        total_ttc: round2(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(unit_price: f64, quantity: u32) -> LineItem {
        LineItem {
            unit_price,
            quantity,
        }
    }

    #[test]
    fn subtotal_is_exact_sum_of_lines() {
        let items = [item(10.0, 3), item(2.5, 4), item(0.75, 1)];
        assert_eq!(subtotal_ht(&items), 10.0 * 3.0 + 2.5 * 4.0 + 0.75);
    }

    #[test]
    fn empty_order_is_all_zero() {
        let breakdown = compute_order_totals(&[], Some(LoyaltyTier::Bronze), 0.0);
        assert_eq!(breakdown, PriceBreakdown::zero());
    }

    #[test]
    fn gold_tier_without_promo() {
        let breakdown = compute_order_totals(&[item(100.0, 2)], Some(LoyaltyTier::Gold), 0.0);
        assert_eq!(breakdown.subtotal_ht, 200.0);
        assert_eq!(breakdown.loyalty_discount, 30.0);
        assert_eq!(breakdown.promo_discount, 0.0);
        assert_eq!(breakdown.ht_after_discounts, 170.0);
        assert_eq!(breakdown.tva, 34.0);
        assert_eq!(breakdown.total_ttc, 204.0);
    }

    #[test]
    fn bronze_tier_with_ten_percent_promo() {
        let breakdown = compute_order_totals(&[item(50.0, 1)], Some(LoyaltyTier::Bronze), 10.0);
        assert_eq!(breakdown.subtotal_ht, 50.0);
        assert_eq!(breakdown.loyalty_discount, 2.5);
        assert_eq!(breakdown.promo_discount, 5.0);
        assert_eq!(breakdown.ht_after_discounts, 42.5);
        assert_eq!(breakdown.tva, 8.5);
        assert_eq!(breakdown.total_ttc, 51.0);
    }

    #[test]
    fn subtotal_rounding_absorbs_float_error() {
        // 33.333 * 3 accumulates to 99.99900000000001 before rounding
        let breakdown = compute_order_totals(&[item(33.333, 3)], None, 0.0);
        assert_eq!(breakdown.subtotal_ht, 100.0);
    }

    #[test]
    fn unknown_tier_code_behaves_as_no_tier() {
        let tier = LoyaltyTier::from_code("UNKNOWN");
        assert_eq!(tier, None);
        let with_unknown = compute_order_totals(&[item(80.0, 1)], tier, 0.0);
        let with_none = compute_order_totals(&[item(80.0, 1)], None, 0.0);
        assert_eq!(with_unknown, with_none);
        assert_eq!(with_unknown.loyalty_discount, 0.0);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let items = [item(19.99, 3), item(5.5, 2)];
        let first = compute_order_totals(&items, Some(LoyaltyTier::Silver), 15.0);
        let second = compute_order_totals(&items, Some(LoyaltyTier::Silver), 15.0);
        assert_eq!(first, second);
    }

    #[test]
    fn discounts_over_subtotal_go_negative_unclamped() {
        // PLATINUM (20%) + 90% promo = 110% of the subtotal
        let breakdown = compute_order_totals(&[item(100.0, 1)], Some(LoyaltyTier::Platinum), 90.0);
        assert_eq!(breakdown.ht_after_discounts, -10.0);
        assert_eq!(breakdown.total_ttc, -12.0);
    }

    #[test]
    fn tier_codes_round_trip() {
        for tier in LoyaltyTier::ALL {
            assert_eq!(LoyaltyTier::from_code(tier.as_code()), Some(tier));
        }
    }
}
