use leptos::prelude::*;

/// Colored pill for status and tier codes. The code picks the CSS
/// modifier, the label is what the user reads.
#[component]
pub fn StatusBadge(#[prop(into)] code: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("badge badge-{}", code.to_lowercase())>{label}</span>
    }
}
