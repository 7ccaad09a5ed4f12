use contracts::domain::promo_code::PromoCode;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::promo_codes::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared;
use crate::shared::format::format_date;

#[component]
pub fn PromoCodeList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (codes, set_codes) = signal(Vec::<PromoCode>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_promo_codes().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.id.cmp(&a.id));
                    set_codes.set(list);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_loading.set(false);
        });
    };
    load();

    let deactivate = move |id: u64, code: String| {
        if !shared::confirm(&format!("Désactiver le code \"{}\" ?", code)) {
            return;
        }
        spawn_local(async move {
            match api::deactivate_promo_code(id).await {
                Ok(_) => {
                    ctx.notify_success("Code promo désactivé");
                    load();
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <div class="page promo-codes-page">
            <div class="page-header">
                <h1 class="page-title">"Codes promo"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::PromoCodeNew)
                >
                    "+ Nouveau code"
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Chargement..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Remise"</th>
                            <th>"Fin de validité"</th>
                            <th>"Limite"</th>
                            <th>"Statut"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let now = chrono::Utc::now();
                            codes.get().into_iter().map(|c| {
                                let id = c.id;
                                let code = c.code.clone();
                                let active = c.is_currently_active(now);
                                let status = if active {
                                    view! { <span class="badge badge-success">"Actif"</span> }
                                        .into_any()
                                } else if c.active {
                                    view! { <span class="badge badge-warning">"Expiré"</span> }
                                        .into_any()
                                } else {
                                    view! { <span class="badge badge-danger">"Désactivé"</span> }
                                        .into_any()
                                };
                                view! {
                                    <tr>
                                        <td class="promo-code">{c.code.clone()}</td>
                                        <td>{format!("{}%", c.discount_percentage)}</td>
                                        <td>{format_date(c.end_date)}</td>
                                        <td>
                                            {c.usage_limit
                                                .map(|n| n.to_string())
                                                .unwrap_or_else(|| "Illimité".to_string())}
                                        </td>
                                        <td>{status}</td>
                                        <td>
                                            <Show when=move || active>
                                                <button
                                                    class="btn btn-sm btn-danger"
                                                    on:click={
                                                        let code = code.clone();
                                                        move |_| deactivate(id, code.clone())
                                                    }
                                                >
                                                    "Désactiver"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || codes.get().is_empty()>
                    <p class="empty-state">"Aucun code promo"</p>
                </Show>
            </Show>
        </div>
    }
}
