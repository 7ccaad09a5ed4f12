use leptos::prelude::*;

/// Labeled form input with inline error display. The caller owns the
/// value signal and receives raw input through `on_input`.
#[component]
pub fn FormField(
    #[prop(into)] label: String,

    #[prop(into)] value: Signal<String>,

    on_input: Callback<String>,

    /// Per-field error message, shown under the input
    #[prop(into)] error: Signal<Option<String>>,

    /// Input type attribute; empty means "text"
    #[prop(optional, into)]
    input_type: String,

    #[prop(optional, into)] placeholder: String,

    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div class="form-group">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </label>
            <input
                class="form-input"
                class:form-input--error=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
