use contracts::system::auth::UserInfo;

const USER_KEY: &str = "smartshop_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persists the logged-in user so a reload can restore the UI before
/// the session check round-trip completes. The cookie stays the source
/// of truth; this is only a hint.
pub fn save_user(user: &UserInfo) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn load_user() -> Option<UserInfo> {
    let storage = local_storage()?;
    let json = storage.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_user() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
