use contracts::domain::product::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::products::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::format_money_dh;

const PAGE_SIZE: usize = 10;

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| b.id.cmp(&a.id));
                    set_products.set(list);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_loading.set(false);
        });
    };
    load();

    let filtered = Memo::new(move |_| {
        let needle = search.get().to_lowercase();
        products
            .get()
            .into_iter()
            .filter(|p| needle.is_empty() || p.nom.to_lowercase().contains(&needle))
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
        if !shared::confirm(&format!("Supprimer le produit \"{}\" ?", nom)) {
            return;
        }
        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    ctx.notify_success("Produit supprimé");
                    load();
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <div class="page products-page">
            <div class="page-header">
                <h1 class="page-title">"Produits"</h1>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::ProductNew)>
                    "+ Nouveau produit"
                </button>
            </div>
            <div class="toolbar">
                <input
                    type="text"
                    class="form-input search-input"
                    placeholder="Rechercher un produit..."
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
                            <th>"Prix unitaire"</th>
                            <th>"Stock"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_items.get().into_iter().map(|p| {
                            let id = p.id;
                            let nom = p.nom.clone();
                            let stock_class = if p.stock == 0 {
                                "stock stock--empty"
                            } else if p.stock < 10 {
                                "stock stock--low"
                            } else {
                                "stock"
                            };
                            view! {
                                <tr>
                                    <td>{p.id}</td>
                                    <td>{p.nom.clone()}</td>
                                    <td>{format_money_dh(p.prix_unitaire)}</td>
                                    <td><span class=stock_class>{p.stock}</span></td>
                                    <td class="actions">
                                        <button
                                            class="btn btn-sm btn-secondary"
                                            on:click=move |_| ctx.navigate(Route::ProductEdit(id))
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
                    <p class="empty-state">"Aucun produit trouvé"</p>
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
