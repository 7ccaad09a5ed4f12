use contracts::domain::client::Client;
use contracts::domain::order::Order;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{clients, orders};
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{format_date, format_money_dh};

#[component]
pub fn ClientDetails(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (client, set_client) = signal(Option::<Client>::None);
    let (client_orders, set_client_orders) = signal(Vec::<Order>::new());

    spawn_local(async move {
        match clients::api::fetch_client(id).await {
            Ok(c) => set_client.set(Some(c)),
            Err(e) => {
                ctx.notify_error(&e);
                ctx.navigate(Route::Clients);
            }
        }
    });
    spawn_local(async move {
        match orders::api::fetch_orders_by_client(id).await {
            Ok(mut list) => {
                list.sort_by(|a, b| b.id.cmp(&a.id));
                set_client_orders.set(list);
            }
            Err(e) => log::error!("Failed to load client orders: {}", e),
        }
    });

    view! {
        <div class="page client-details-page">
            <div class="page-header">
                <h1 class="page-title">"Fiche client"</h1>
                <button class="btn btn-secondary" on:click=move |_| ctx.navigate(Route::Clients)>
                    "Retour"
                </button>
            </div>
            {move || client.get().map(|c| {
                let tier = c.tier_label();
                view! {
                    <div class="card client-card">
                        <h2 class="card-title">{c.nom.clone()}</h2>
                        <dl class="detail-list">
                            <dt>"Email"</dt>
                            <dd>{c.email.clone()}</dd>
                            <dt>"Téléphone"</dt>
                            <dd>{c.telephone.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Fidélité"</dt>
                            <dd><StatusBadge code=tier label=tier /></dd>
                            <dt>"Commandes"</dt>
                            <dd>{c.total_orders.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Total dépensé"</dt>
                            <dd>{c.total_spent.map(format_money_dh).unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Première commande"</dt>
                            <dd>{c.first_order_date.map(format_date).unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                    </div>
                }
            })}
            <div class="card">
                <h2 class="card-title">"Historique des commandes"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Date"</th>
                            <th>"Statut"</th>
                            <th>"Total TTC"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || client_orders.get().into_iter().map(|o| {
                            let order_id = o.id;
                            view! {
                                <tr>
                                    <td>{o.id}</td>
                                    <td>{format_date(o.order_date)}</td>
                                    <td>
                                        <StatusBadge
                                            code=o.status.as_code()
                                            label=o.status.label_fr()
                                        />
                                    </td>
                                    <td>{format_money_dh(o.total_ttc)}</td>
                                    <td>
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| {
                                                ctx.navigate(Route::OrderDetails(order_id))
                                            }
                                        >
                                            "Voir"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || client_orders.get().is_empty()>
                    <p class="empty-state">"Aucune commande"</p>
                </Show>
            </div>
        </div>
    }
}
