use contracts::domain::product::{Product, ProductDto};

use crate::shared::api_utils;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    api_utils::get_json("/products").await
}

pub async fn fetch_product(id: u64) -> Result<Product, String> {
    api_utils::get_json(&format!("/products/{}", id)).await
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, String> {
    api_utils::post_json("/products", dto).await
}

pub async fn update_product(id: u64, dto: &ProductDto) -> Result<Product, String> {
    api_utils::put_json(&format!("/products/{}", id), dto).await
}

pub async fn delete_product(id: u64) -> Result<(), String> {
    api_utils::delete_json(&format!("/products/{}", id)).await
}
