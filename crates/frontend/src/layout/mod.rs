pub mod app_context;
pub mod sidebar;

use leptos::prelude::*;

use crate::layout::app_context::AppContext;
use crate::layout::sidebar::Sidebar;
use crate::routes::routes::RouteOutlet;

/// Authenticated shell: sidebar on the left, active screen on the right.
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    // Runs once when the shell is created.
    ctx.init_router_integration();

    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">
                <RouteOutlet />
            </main>
        </div>
    }
}
