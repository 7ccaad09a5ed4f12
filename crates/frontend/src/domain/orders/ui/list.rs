use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{format_date, format_money_dh};

const PAGE_SIZE: usize = 10;

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (status_filter, set_status_filter) = signal(String::new());
    let (page, set_page) = signal(1usize);

    let is_admin = move || ctx.user.get().map(|u| u.is_admin()).unwrap_or(false);

    // Status filtering goes through the dedicated endpoint, matching what
    // the API indexes on.
    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let filter = status_filter.get_untracked();
            let client_id = ctx.user.get_untracked().and_then(|u| {
                if u.is_admin() { None } else { u.client_id }
            });
            let result = match (client_id, OrderStatus::ALL.iter().find(|s| s.as_code() == filter)) {
                (Some(client_id), _) => api::fetch_orders_by_client(client_id).await,
                (None, Some(status)) => api::fetch_orders_by_status(*status).await,
                (None, None) => api::fetch_orders().await,
            };
            match result {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.id.cmp(&a.id));
                    set_orders.set(list);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_loading.set(false);
        });
    };
    load();

    let total_count = Memo::new(move |_| orders.get().len());
    let total_pages = Memo::new(move |_| total_count.get().div_ceil(PAGE_SIZE));
    let page_items = Memo::new(move |_| {
        let items = orders.get();
        let start = (page.get().saturating_sub(1)) * PAGE_SIZE;
        items.into_iter().skip(start).take(PAGE_SIZE).collect::<Vec<_>>()
    });

    view! {
        <div class="page orders-page">
            <div class="page-header">
                <h1 class="page-title">"Commandes"</h1>
                <Show when=is_admin>
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::OrderNew)>
                        "+ Nouvelle commande"
                    </button>
                </Show>
            </div>
            <Show when=is_admin>
                <div class="toolbar">
                    <select
                        class="form-input status-filter"
                        on:change=move |ev| {
                            set_status_filter.set(event_target_value(&ev));
                            set_page.set(1);
                            load();
                        }
                    >
                        <option value="">"Tous les statuts"</option>
                        {OrderStatus::ALL.iter().map(|s| view! {
                            <option value=s.as_code()>{s.label_fr()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Chargement..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Client"</th>
                            <th>"Date"</th>
                            <th>"Statut"</th>
                            <th>"Total TTC"</th>
                            <th>"Payé"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_items.get().into_iter().map(|o| {
                            let order_id = o.id;
                            let paid = if o.is_fully_paid() {
                                view! { <span class="badge badge-success">"Payée"</span> }.into_any()
                            } else {
                                view! {
                                    <span class="badge badge-warning">
                                        {format!("Reste {}", format_money_dh(o.remaining_amount()))}
                                    </span>
                                }.into_any()
                            };
                            view! {
                                <tr>
                                    <td>{o.id}</td>
                                    <td>{o.client_name.clone()}</td>
                                    <td>{format_date(o.order_date)}</td>
                                    <td>
                                        <StatusBadge
                                            code=o.status.as_code()
                                            label=o.status.label_fr()
                                        />
                                    </td>
                                    <td>{format_money_dh(o.total_ttc)}</td>
                                    <td>{paid}</td>
                                    <td>
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| {
                                                ctx.navigate(Route::OrderDetails(order_id))
                                            }
                                        >
                                            "Détails"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || total_count.get() == 0>
                    <p class="empty-state">"Aucune commande trouvée"</p>
                </Show>
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    on_page_change=Callback::new(move |p| set_page.set(p))
                />
            </Show>
        </div>
    }
}
