use contracts::domain::promo_code::PromoCode;
use contracts::shared::validation::normalize_promo_code;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::promo_codes::api;

/// Promo code picker used on the order form.
///
/// Loads the currently active codes once, lets the user pick one and
/// verifies it against the server before reporting it upward. `on_apply`
/// receives `None` when the code is removed.
#[component]
pub fn PromoCodeInput(on_apply: Callback<Option<PromoCode>>) -> impl IntoView {
    let (codes, set_codes) = signal(Vec::<PromoCode>::new());
    let (selected, set_selected) = signal(String::new());
    let (applied, set_applied) = signal(Option::<PromoCode>::None);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_promo_codes().await {
            Ok(list) => {
                let now = chrono::Utc::now();
                set_codes.set(
                    list.into_iter()
                        .filter(|c| c.is_currently_active(now))
                        .collect(),
                );
            }
            Err(e) => log::error!("Failed to load promo codes: {}", e),
        }
    });

    let apply = move |_| {
        let code = normalize_promo_code(&selected.get());
        if code.is_empty() {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_promo_code_by_code(&code).await {
                Ok(promo) => {
                    if promo.is_currently_active(chrono::Utc::now()) {
                        set_applied.set(Some(promo.clone()));
                        on_apply.run(Some(promo));
                    } else {
                        set_error.set(Some("Ce code promo n'est plus actif".to_string()));
                    }
                }
                Err(_) => {
                    set_error.set(Some("Code promo invalide".to_string()));
                }
            }
        });
    };

    let remove = move |_| {
        set_applied.set(None);
        set_selected.set(String::new());
        set_error.set(None);
        on_apply.run(None);
    };

    view! {
        <div class="promo-code-input">
            <label class="form-label">"Code promo"</label>
            {move || {
                if let Some(promo) = applied.get() {
                    view! {
                        <div class="promo-code-input__applied">
                            <span class="badge badge-success">
                                {format!("{} (-{}%)", promo.code, promo.discount_percentage)}
                            </span>
                            <button class="btn btn-sm btn-secondary" on:click=remove>
                                "Retirer"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="promo-code-input__picker">
                            <select
                                class="form-input"
                                on:change=move |ev| set_selected.set(event_target_value(&ev))
                            >
                                <option value="">"-- Aucun --"</option>
                                {codes.get().into_iter().map(|c| view! {
                                    <option value=c.code.clone()>
                                        {format!("{} (-{}%)", c.code, c.discount_percentage)}
                                    </option>
                                }).collect_view()}
                            </select>
                            <button class="btn btn-sm btn-primary" on:click=apply>
                                "Appliquer"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}
