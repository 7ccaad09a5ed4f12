use contracts::domain::payment::{CreatePaymentRequest, Payment, PaymentStatus};
use serde_json::json;

use crate::shared::api_utils;

pub async fn fetch_payments_by_order(order_id: u64) -> Result<Vec<Payment>, String> {
    api_utils::get_json(&format!("/payments/order/{}", order_id)).await
}

pub async fn create_payment(request: &CreatePaymentRequest) -> Result<Payment, String> {
    api_utils::post_json("/payments", request).await
}

/// Marks a payment cashed or rejected.
pub async fn update_payment_status(id: u64, status: PaymentStatus) -> Result<Payment, String> {
    api_utils::patch_json_with(
        &format!("/payments/{}/status", id),
        &json!({ "status": status.as_code() }),
    )
    .await
}
