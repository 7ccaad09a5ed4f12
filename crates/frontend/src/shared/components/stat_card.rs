use leptos::prelude::*;

/// Dashboard KPI card. Shows a dash while the value is loading.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,

    #[prop(into)] value: Signal<Option<usize>>,

    /// CSS accent suffix (e.g. "primary", "success")
    #[prop(optional, into)]
    accent: String,
) -> impl IntoView {
    let accent = if accent.is_empty() {
        "primary".to_string()
    } else {
        accent
    };

    view! {
        <div class="stat-card">
            <h3 class="stat-card__label">{label}</h3>
            <p class=format!("stat-card__value stat-card__value--{}", accent)>
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
            </p>
        </div>
    }
}
