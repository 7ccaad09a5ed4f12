use contracts::domain::order::{CreateOrderRequest, Order, OrderStatus};

use crate::shared::api_utils;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    api_utils::get_json("/orders").await
}

pub async fn fetch_order(id: u64) -> Result<Order, String> {
    api_utils::get_json(&format!("/orders/{}", id)).await
}

pub async fn fetch_orders_by_client(client_id: u64) -> Result<Vec<Order>, String> {
    api_utils::get_json(&format!("/orders/client/{}", client_id)).await
}

pub async fn fetch_orders_by_status(status: OrderStatus) -> Result<Vec<Order>, String> {
    api_utils::get_json(&format!("/orders/status/{}", status.as_code())).await
}

pub async fn create_order(request: &CreateOrderRequest) -> Result<Order, String> {
    api_utils::post_json("/orders", request).await
}

/// Confirmation is refused by the server while the order is not fully
/// paid.
pub async fn confirm_order(id: u64) -> Result<Order, String> {
    api_utils::patch_json(&format!("/orders/{}/confirm", id)).await
}

pub async fn cancel_order(id: u64) -> Result<Order, String> {
    api_utils::patch_json(&format!("/orders/{}/cancel", id)).await
}
