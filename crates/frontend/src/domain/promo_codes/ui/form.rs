use contracts::domain::promo_code::PromoCodeDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::promo_codes::api;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared::components::form_field::FormField;
use crate::shared::format::parse_date_input;

#[component]
pub fn PromoCodeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (code, set_code) = signal(String::new());
    let (percentage, set_percentage) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (usage_limit, set_usage_limit) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<(String, String)>::new());
    let (submitting, set_submitting) = signal(false);

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
        let dto = match PromoCodeDto::from_form(
            &code.get(),
            &percentage.get(),
            parse_date_input(&end_date.get()),
            &usage_limit.get(),
        ) {
            Ok(dto) => dto,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_promo_code(&dto).await {
                Ok(_) => {
                    ctx.notify_success("Code promo créé");
                    ctx.navigate(Route::PromoCodes);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page promo-code-form-page">
            <div class="page-header">
                <h1 class="page-title">"Nouveau code promo"</h1>
            </div>
            <form class="card form-card" on:submit=submit>
                <FormField
                    label="Code"
                    value=code
                    on_input=Callback::new(move |v| set_code.set(v))
                    error=field_error("code")
                    placeholder="PROMO-XXXX"
                    required=true
                />
                <FormField
                    label="Pourcentage de remise"
                    value=percentage
                    on_input=Callback::new(move |v| set_percentage.set(v))
                    error=field_error("discountPercentage")
                    input_type="number"
                    required=true
                />
                <FormField
                    label="Fin de validité"
                    value=end_date
                    on_input=Callback::new(move |v| set_end_date.set(v))
                    error=field_error("endDate")
                    input_type="date"
                    required=true
                />
                <FormField
                    label="Limite d'utilisation"
                    value=usage_limit
                    on_input=Callback::new(move |v| set_usage_limit.set(v))
                    error=field_error("usageLimit")
                    input_type="number"
                    placeholder="Illimité si vide"
                />
                <div class="form-actions">
                    <button
                        class="btn btn-secondary"
                        type="button"
                        on:click=move |_| ctx.navigate(Route::PromoCodes)
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
