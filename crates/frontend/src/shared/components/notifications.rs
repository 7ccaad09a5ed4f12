use leptos::prelude::*;

use crate::layout::app_context::AppContext;

/// Fixed stack in the top-right corner rendering the notification queue.
/// Entries expire on their own (see `AppContext::push_notification`).
#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    view! {
        <div class="notification-stack">
            {move || ctx.notifications.get().into_iter().map(|n| view! {
                <div class=format!("notification notification--{}", n.kind.css_class())>
                    {n.message}
                </div>
            }).collect_view()}
        </div>
    }
}
