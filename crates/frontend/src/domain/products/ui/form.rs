use contracts::domain::product::ProductDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::products::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared::components::form_field::FormField;

/// Create and edit share this screen; `id` decides which.
#[component]
pub fn ProductForm(id: Option<u64>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (nom, set_nom) = signal(String::new());
    let (prix, set_prix) = signal(String::new());
    let (stock, set_stock) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<(String, String)>::new());
    let (submitting, set_submitting) = signal(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_product(id).await {
                Ok(p) => {
                    set_nom.set(p.nom);
                    set_prix.set(format!("{}", p.prix_unitaire));
                    set_stock.set(p.stock.to_string());
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    ctx.navigate(Route::Products);
                }
            }
        });
    }

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            errors
                .get()
                .into_iter()
                .find(|(f, _)| f == field)
                .map(|(_, msg)| msg)
        })
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = match ProductDto::from_form(&nom.get(), &prix.get(), &stock.get()) {
            Ok(dto) => dto,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_product(id, &dto).await,
                None => api::create_product(&dto).await,
            };
            match result {
                Ok(_) => {
                    ctx.notify_success(if id.is_some() {
                        "Produit mis à jour"
                    } else {
                        "Produit créé"
                    });
                    ctx.navigate(Route::Products);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if id.is_some() { "Modifier le produit" } else { "Nouveau produit" };

    view! {
        <div class="page product-form-page">
            <div class="page-header">
                <h1 class="page-title">{title}</h1>
            </div>
            <form class="card form-card" on:submit=submit>
                <FormField
                    label="Nom"
                    value=nom
                    on_input=Callback::new(move |v| set_nom.set(v))
                    error=field_error("nom")
                    required=true
                />
                <FormField
                    label="Prix unitaire (DH)"
                    value=prix
                    on_input=Callback::new(move |v| set_prix.set(v))
                    error=field_error("prixUnitaire")
                    input_type="number"
                    required=true
                />
                <FormField
                    label="Stock"
                    value=stock
                    on_input=Callback::new(move |v| set_stock.set(v))
                    error=field_error("stock")
                    input_type="number"
                    required=true
                />
                <div class="form-actions">
                    <button
                        class="btn btn-secondary"
                        type="button"
                        on:click=move |_| ctx.navigate(Route::Products)
                    >
                        "Annuler"
                    </button>
                    <button class="btn btn-primary" type="submit" disabled=submitting>
                        "Enregistrer"
                    </button>
                </div>
            </form>
        </div>
    }
}
