use contracts::system::auth::{LoginRequest, UserInfo};

use crate::shared::api_utils;

/// Authenticates against the session endpoint. The server sets the
/// session cookie on success.
pub async fn login(username: &str, password: &str) -> Result<UserInfo, String> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    api_utils::post_json("/auth/login", &body).await
}

/// Invalidates the server session. Errors are swallowed: the local
/// session is dropped regardless.
pub async fn logout() {
    if let Err(e) = api_utils::post_empty("/auth/logout").await {
        log::warn!("Logout request failed: {}", e);
    }
}

/// Resolves the user behind the current session cookie, if any.
pub async fn current_user() -> Option<UserInfo> {
    api_utils::get_json::<UserInfo>("/auth/me").await.ok()
}
