use leptos::prelude::*;

/// Overlay modal. Clicking the backdrop closes it; clicks inside the
/// surface are swallowed.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if open.get() {
                view! {
                    <div class="modal-overlay" on:click=move |_| on_close.run(())>
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            {children()}
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
