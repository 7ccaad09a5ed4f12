use contracts::domain::client::ClientDto;
use contracts::pricing::LoyaltyTier;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::clients::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared::components::form_field::FormField;

/// Create and edit share this screen; `id` decides which. Login
/// credentials are only collected on creation.
#[component]
pub fn ClientForm(id: Option<u64>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (nom, set_nom) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (telephone, set_telephone) = signal(String::new());
    let (tier, set_tier) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<(String, String)>::new());
    let (submitting, set_submitting) = signal(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::fetch_client(id).await {
                Ok(c) => {
                    set_nom.set(c.nom);
                    set_email.set(c.email);
                    set_telephone.set(c.telephone.unwrap_or_default());
                    set_tier.set(c.tier.map(|t| t.as_code().to_string()).unwrap_or_default());
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    ctx.navigate(Route::Clients);
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
        let telephone_value = telephone.get();
        let telephone_value = telephone_value.trim();
        let dto = ClientDto {
            nom: nom.get().trim().to_string(),
            email: email.get().trim().to_string(),
            telephone: (!telephone_value.is_empty()).then(|| telephone_value.to_string()),
            tier: LoyaltyTier::from_code(&tier.get()),
            username: id.is_none().then(|| username.get().trim().to_string()),
            password: id.is_none().then(|| password.get()),
        };
        if let Err(errs) = dto.validate() {
            set_errors.set(errs);
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_client(id, &dto).await,
                None => api::create_client(&dto).await,
            };
            match result {
                Ok(_) => {
                    ctx.notify_success(if id.is_some() {
                        "Client mis à jour"
                    } else {
                        "Client créé"
                    });
                    ctx.navigate(Route::Clients);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if id.is_some() { "Modifier le client" } else { "Nouveau client" };

    view! {
        <div class="page client-form-page">
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
                    label="Email"
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                    error=field_error("email")
                    input_type="email"
                    required=true
                />
                <FormField
                    label="Téléphone"
                    value=telephone
                    on_input=Callback::new(move |v| set_telephone.set(v))
                    error=field_error("telephone")
                    input_type="tel"
                />
                <div class="form-group">
                    <label class="form-label">"Niveau de fidélité"</label>
                    <select
                        class="form-input"
                        prop:value=tier
                        on:change=move |ev| set_tier.set(event_target_value(&ev))
                    >
                        <option value="">"BASIC (aucune remise)"</option>
                        {LoyaltyTier::ALL.iter().map(|t| view! {
                            <option value=t.as_code()>
                                {format!("{} (-{}%)", t.as_code(), t.discount_rate() * 100.0)}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <Show when=move || id.is_none()>
                    <FormField
                        label="Nom d'utilisateur"
                        value=username
                        on_input=Callback::new(move |v| set_username.set(v))
                        error=field_error("username")
                        required=true
                    />
                    <FormField
                        label="Mot de passe"
                        value=password
                        on_input=Callback::new(move |v| set_password.set(v))
                        error=field_error("password")
                        input_type="password"
                        required=true
                    />
                </Show>
                <div class="form-actions">
                    <button
                        class="btn btn-secondary"
                        type="button"
                        on:click=move |_| ctx.navigate(Route::Clients)
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
