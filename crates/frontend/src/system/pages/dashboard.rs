use contracts::domain::order::OrderStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{clients, orders, products};
use crate::layout::app_context::AppContext;
use crate::shared::components::stat_card::StatCard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (product_count, set_product_count) = signal(Option::<usize>::None);
    let (client_count, set_client_count) = signal(Option::<usize>::None);
    let (order_count, set_order_count) = signal(Option::<usize>::None);
    let (pending_count, set_pending_count) = signal(Option::<usize>::None);

    let is_admin = move || ctx.user.get().map(|u| u.is_admin()).unwrap_or(false);

    spawn_local(async move {
        match orders::api::fetch_orders().await {
            Ok(list) => {
                set_pending_count.set(Some(
                    list.iter().filter(|o| o.status == OrderStatus::Pending).count(),
                ));
                set_order_count.set(Some(list.len()));
            }
            Err(e) => log::error!("Failed to load orders: {}", e),
        }
    });
    spawn_local(async move {
        match products::api::fetch_products().await {
            Ok(list) => set_product_count.set(Some(list.len())),
            Err(e) => log::error!("Failed to load products: {}", e),
        }
    });
    spawn_local(async move {
        match clients::api::fetch_clients().await {
            Ok(list) => set_client_count.set(Some(list.len())),
            Err(e) => log::error!("Failed to load clients: {}", e),
        }
    });

    let welcome = move || {
        ctx.user
            .get()
            .map(|u| format!("Bienvenue, {}", u.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h1 class="page-title">"Tableau de bord"</h1>
            </div>
            <div class="card welcome-card">
                <p>{welcome}</p>
            </div>
            <div class="stat-grid">
                <Show when=is_admin>
                    <StatCard label="Produits" value=product_count accent="primary" />
                    <StatCard label="Clients" value=client_count accent="info" />
                </Show>
                <StatCard label="Commandes" value=order_count accent="success" />
                <StatCard label="Commandes en attente" value=pending_count accent="warning" />
            </div>
        </div>
    }
}
