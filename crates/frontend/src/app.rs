use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::app_context::AppContext;
use crate::routes::routes::AppRoutes;
use crate::shared::components::notifications::NotificationStack;
use crate::system::auth::{api, storage};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Optimistic restore from the local marker, then verify the session
    // cookie with the server. The server answer wins.
    ctx.user.set(storage::load_user());
    spawn_local(async move {
        match api::current_user().await {
            Some(info) => {
                storage::save_user(&info);
                ctx.user.set(Some(info));
            }
            None => {
                storage::clear_user();
                ctx.user.set(None);
            }
        }
        ctx.session_loading.set(false);
    });

    view! {
        <Show
            when=move || !ctx.session_loading.get()
            fallback=|| view! { <div class="app-loading">"Chargement..."</div> }
        >
            <AppRoutes />
        </Show>
        <NotificationStack />
    }
}
