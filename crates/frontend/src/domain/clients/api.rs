use contracts::domain::client::{Client, ClientDto};

use crate::shared::api_utils;

pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    api_utils::get_json("/clients").await
}

pub async fn fetch_client(id: u64) -> Result<Client, String> {
    api_utils::get_json(&format!("/clients/{}", id)).await
}

pub async fn create_client(dto: &ClientDto) -> Result<Client, String> {
    api_utils::post_json("/clients", dto).await
}

pub async fn update_client(id: u64, dto: &ClientDto) -> Result<Client, String> {
    api_utils::put_json(&format!("/clients/{}", id), dto).await
}

pub async fn delete_client(id: u64) -> Result<(), String> {
    api_utils::delete_json(&format!("/clients/{}", id)).await
}
