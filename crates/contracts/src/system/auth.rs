use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authenticated session user. Auth itself is session-cookie based; this
/// is only the profile the `/auth/me` endpoint reflects back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
    /// Set for CLIENT accounts, scoping the orders list to their own.
    #[serde(default)]
    pub client_id: Option<u64>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_username() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":1,"username":"admin","role":"ADMIN"}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "admin");
    }
}
