use contracts::domain::promo_code::{PromoCode, PromoCodeDto};

use crate::shared::api_utils;

pub async fn fetch_promo_codes() -> Result<Vec<PromoCode>, String> {
    api_utils::get_json("/promo-codes").await
}

pub async fn fetch_promo_code_by_code(code: &str) -> Result<PromoCode, String> {
    api_utils::get_json(&format!("/promo-codes/{}", code)).await
}

pub async fn create_promo_code(dto: &PromoCodeDto) -> Result<PromoCode, String> {
    api_utils::post_json("/promo-codes", dto).await
}

pub async fn deactivate_promo_code(id: u64) -> Result<PromoCode, String> {
    api_utils::patch_json(&format!("/promo-codes/{}/deactivate", id)).await
}
