//! Global application state, provided once at the root.
//!
//! Holds the authenticated user, the active route and the notification
//! queue as explicit signals. Every consumer pulls this context and reads
//! or writes through it; there is no other shared mutable state in the
//! application.

use contracts::system::auth::UserInfo;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use crate::routes::routes::Route;

const NOTIFICATION_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub user: RwSignal<Option<UserInfo>>,
    pub session_loading: RwSignal<bool>,
    pub route: RwSignal<Route>,
    pub notifications: RwSignal<Vec<Notification>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            session_loading: RwSignal::new(true),
            route: RwSignal::new(Route::Dashboard),
            notifications: RwSignal::new(vec![]),
        }
    }

    /// Restore the route from the current URL, then keep the URL in sync
    /// with the active route. Runs once when the shell mounts.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.route
            .set(Route::from_query(search.trim_start_matches('?')));

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", this.route.get().to_query());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, route: Route) {
        self.route.set(route);
    }

    /// Queue a notification; it removes itself after a fixed delay.
    pub fn push_notification(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = Uuid::new_v4();
        let notification = Notification {
            id,
            kind,
            message: message.into(),
        };
        self.notifications.update(|list| list.push(notification));

        let notifications = self.notifications;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_DURATION_MS).await;
            notifications.update(|list| list.retain(|n| n.id != id));
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.push_notification(NotificationKind::Success, message);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.push_notification(NotificationKind::Error, message);
    }

    pub fn clear_notifications(&self) {
        self.notifications.set(vec![]);
    }
}
