use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::app_context::AppContext;
use crate::system::auth::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Veuillez saisir vos identifiants".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(user.trim(), &pass).await {
                Ok(info) => {
                    storage::save_user(&info);
                    ctx.user.set(Some(info));
                    ctx.notify_success("Connexion réussie!");
                }
                Err(_) => {
                    set_error.set(Some("Nom d'utilisateur ou mot de passe incorrect".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"SmartShop"</h1>
                <p class="login-card__subtitle">"Console d'administration"</p>
                <form on:submit=submit>
                    <div class="form-group">
                        <label class="form-label">"Nom d'utilisateur"</label>
                        <input
                            type="text"
                            class="form-input"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            autofocus
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Mot de passe"</label>
                        <input
                            type="password"
                            class="form-input"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <button class="btn btn-primary btn-block" type="submit" disabled=submitting>
                        {move || if submitting.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
