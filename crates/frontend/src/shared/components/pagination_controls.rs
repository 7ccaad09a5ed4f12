use leptos::prelude::*;

/// Pagination controls for the client-side paged lists.
///
/// Pages are 1-indexed. Hidden entirely when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Page précédente"
                >
                    "‹"
                </button>
                <span class="pagination-info">
                    {move || {
                        format!(
                            "{} / {} ({})",
                            current_page.get(),
                            total_pages.get().max(1),
                            total_count.get(),
                        )
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Page suivante"
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
