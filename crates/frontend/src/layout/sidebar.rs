use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::system::auth::{api, storage};

/// Section key of a route, for highlighting the matching nav entry.
fn section(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "dashboard",
        Route::Products | Route::ProductNew | Route::ProductEdit(_) => "products",
        Route::Clients | Route::ClientNew | Route::ClientDetails(_) | Route::ClientEdit(_) => {
            "clients"
        }
        Route::Orders | Route::OrderNew | Route::OrderDetails(_) => "orders",
        Route::PromoCodes | Route::PromoCodeNew => "promo-codes",
    }
}

#[component]
fn NavItem(
    label: &'static str,
    key: &'static str,
    target: Route,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    view! {
        <li class="sidebar__entry">
            <button
                class="sidebar__link"
                class:sidebar__link--active=move || section(ctx.route.get()) == key
                on:click=move |_| ctx.navigate(target)
            >
                {label}
            </button>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    // CLIENT accounts only get the dashboard and their own orders.
    let is_admin = move || ctx.user.get().map(|u| u.is_admin()).unwrap_or(false);

    let handle_logout = move |_| {
        spawn_local(async move {
            api::logout().await;
            storage::clear_user();
            ctx.clear_notifications();
            ctx.user.set(None);
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"SmartShop"</h1>
                {move || ctx.user.get().map(|u| view! {
                    <p class="sidebar__user">{format!("{} ({})", u.username, u.role)}</p>
                })}
            </div>

            <nav class="sidebar__nav">
                <ul>
                    <NavItem label="Tableau de bord" key="dashboard" target=Route::Dashboard />
                    <Show when=is_admin>
                        <NavItem label="Produits" key="products" target=Route::Products />
                        <NavItem label="Clients" key="clients" target=Route::Clients />
                    </Show>
                    <NavItem label="Commandes" key="orders" target=Route::Orders />
                    <Show when=is_admin>
                        <NavItem label="Codes Promo" key="promo-codes" target=Route::PromoCodes />
                    </Show>
                </ul>
            </nav>

            <button class="sidebar__logout" on:click=handle_logout>
                "Déconnexion"
            </button>
        </aside>
    }
}
