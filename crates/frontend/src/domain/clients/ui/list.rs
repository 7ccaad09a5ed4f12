use contracts::domain::client::Client;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::clients::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;

const PAGE_SIZE: usize = 10;

#[component]
pub fn ClientList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (clients, set_clients) = signal(Vec::<Client>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.id.cmp(&a.id));
                    set_clients.set(list);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_loading.set(false);
        });
    };
    load();

    let filtered = Memo::new(move |_| {
        let needle = search.get().to_lowercase();
        clients
            .get()
            .into_iter()
            .filter(|c| {
                needle.is_empty()
                    || c.nom.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    });

    let total_count = Memo::new(move |_| filtered.get().len());
    let total_pages = Memo::new(move |_| total_count.get().div_ceil(PAGE_SIZE));
    let page_items = Memo::new(move |_| {
        let items = filtered.get();
        let start = (page.get().saturating_sub(1)) * PAGE_SIZE;
        items.into_iter().skip(start).take(PAGE_SIZE).collect::<Vec<_>>()
    });

    let delete = move |id: u64, nom: String| {
        if !shared::confirm(&format!("Supprimer le client \"{}\" ?", nom)) {
            return;
        }
        spawn_local(async move {
            match api::delete_client(id).await {
                Ok(()) => {
                    ctx.notify_success("Client supprimé");
                    load();
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <div class="page clients-page">
            <div class="page-header">
                <h1 class="page-title">"Clients"</h1>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::ClientNew)>
                    "+ Nouveau client"
                </button>
            </div>
            <div class="toolbar">
                <input
                    type="text"
                    class="form-input search-input"
                    placeholder="Rechercher par nom ou email..."
                    prop:value=search
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Chargement..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Nom"</th>
                            <th>"Email"</th>
                            <th>"Téléphone"</th>
                            <th>"Fidélité"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_items.get().into_iter().map(|c| {
                            let id = c.id;
                            let nom = c.nom.clone();
                            let tier = c.tier_label();
                            view! {
                                <tr>
                                    <td>{c.id}</td>
                                    <td>{c.nom.clone()}</td>
                                    <td>{c.email.clone()}</td>
                                    <td>{c.telephone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td><StatusBadge code=tier label=tier /></td>
                                    <td class="actions">
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| ctx.navigate(Route::ClientDetails(id))
                                        >
                                            "Détails"
                                        </button>
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| ctx.navigate(Route::ClientEdit(id))
                                        >
                                            "Modifier"
                                        </button>
                                        <button
                                            class="btn btn-sm btn-danger"
                                            on:click=move |_| delete(id, nom.clone())
                                        >
                                            "Supprimer"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || total_count.get() == 0>
                    <p class="empty-state">"Aucun client trouvé"</p>
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
