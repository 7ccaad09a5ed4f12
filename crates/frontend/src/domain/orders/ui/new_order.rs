use contracts::domain::client::Client;
use contracts::domain::order::{CreateOrderItem, CreateOrderRequest};
use contracts::domain::product::Product;
use contracts::domain::promo_code::PromoCode;
use contracts::pricing::{compute_order_totals, LineItem, PriceBreakdown};
use contracts::shared::validation::has_enough_stock;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::domain::{clients, products};
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared::components::promo_code_input::PromoCodeInput;
use crate::shared::format::format_money_dh;

#[derive(Debug, Clone)]
struct CartLine {
    product: Product,
    quantity: u32,
}

/// Order composition screen. The totals shown here are a client-side
/// preview; the server recomputes them on creation.
#[component]
pub fn NewOrder() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (all_clients, set_all_clients) = signal(Vec::<Client>::new());
    let (all_products, set_all_products) = signal(Vec::<Product>::new());
    let (client_id, set_client_id) = signal(Option::<u64>::None);
    let (cart, set_cart) = signal(Vec::<CartLine>::new());
    let (selected_product, set_selected_product) = signal(String::new());
    let (quantity, set_quantity) = signal("1".to_string());
    let (promo, set_promo) = signal(Option::<PromoCode>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    spawn_local(async move {
        match clients::api::fetch_clients().await {
            Ok(list) => set_all_clients.set(list),
            Err(e) => ctx.notify_error(&e),
        }
    });
    spawn_local(async move {
        match products::api::fetch_products().await {
            Ok(list) => set_all_products.set(list.into_iter().filter(|p| p.actif).collect()),
            Err(e) => ctx.notify_error(&e),
        }
    });

    let selected_client = Memo::new(move |_| {
        client_id
            .get()
            .and_then(|id| all_clients.get().into_iter().find(|c| c.id == id))
    });

    let breakdown = Memo::new(move |_| {
        let lines: Vec<LineItem> = cart
            .get()
            .iter()
            .map(|l| LineItem {
                unit_price: l.product.prix_unitaire,
                quantity: l.quantity,
            })
            .collect();
        if lines.is_empty() {
            return PriceBreakdown::zero();
        }
        let tier = selected_client.get().and_then(|c| c.tier);
        let promo_percent = promo.get().map(|p| p.discount_percentage).unwrap_or(0.0);
        compute_order_totals(&lines, tier, promo_percent)
    });

    let add_line = move |_| {
        set_error.set(None);
        let Some(product) = all_products
            .get()
            .into_iter()
            .find(|p| p.id.to_string() == selected_product.get())
        else {
            set_error.set(Some("Veuillez choisir un produit".to_string()));
            return;
        };
        let qty: u32 = match quantity.get().trim().parse() {
            Ok(q) if q > 0 => q,
            _ => {
                set_error.set(Some("Quantité invalide".to_string()));
                return;
            }
        };
        let already_in_cart: u32 = cart
            .get()
            .iter()
            .filter(|l| l.product.id == product.id)
            .map(|l| l.quantity)
            .sum();
        if !has_enough_stock(already_in_cart + qty, product.stock) {
            set_error.set(Some(format!(
                "Stock insuffisant pour \"{}\" ({} disponibles)",
                product.nom, product.stock
            )));
            return;
        }
        set_cart.update(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
                line.quantity += qty;
            } else {
                lines.push(CartLine { product, quantity: qty });
            }
        });
        set_quantity.set("1".to_string());
    };

    let remove_line = move |product_id: u64| {
        set_cart.update(|lines| lines.retain(|l| l.product.id != product_id));
    };

    let submit = move |_| {
        set_error.set(None);
        let Some(client_id) = client_id.get() else {
            set_error.set(Some("Veuillez choisir un client".to_string()));
            return;
        };
        let items: Vec<CreateOrderItem> = cart
            .get()
            .iter()
            .map(|l| CreateOrderItem {
                product_id: l.product.id,
                quantity: l.quantity,
            })
            .collect();
        if items.is_empty() {
            set_error.set(Some("La commande doit contenir au moins un produit".to_string()));
            return;
        }
        let request = CreateOrderRequest {
            client_id,
            promo_code: promo.get().map(|p| p.code),
            items,
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_order(&request).await {
                Ok(order) => {
                    ctx.notify_success("Commande créée");
                    ctx.navigate(Route::OrderDetails(order.id));
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page new-order-page">
            <div class="page-header">
                <h1 class="page-title">"Nouvelle commande"</h1>
                <button class="btn btn-secondary" on:click=move |_| ctx.navigate(Route::Orders)>
                    "Retour"
                </button>
            </div>

            <div class="card">
                <div class="form-group">
                    <label class="form-label">"Client"</label>
                    <select
                        class="form-input"
                        on:change=move |ev| {
                            set_client_id.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"-- Choisir un client --"</option>
                        {move || all_clients.get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>
                                {format!("{} ({})", c.nom, c.tier_label())}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="order-line-picker">
                    <select
                        class="form-input"
                        on:change=move |ev| set_selected_product.set(event_target_value(&ev))
                    >
                        <option value="">"-- Choisir un produit --"</option>
                        {move || all_products.get().into_iter().map(|p| view! {
                            <option value=p.id.to_string()>
                                {format!(
                                    "{} ({}, stock: {})",
                                    p.nom,
                                    format_money_dh(p.prix_unitaire),
                                    p.stock,
                                )}
                            </option>
                        }).collect_view()}
                    </select>
                    <input
                        type="number"
                        class="form-input quantity-input"
                        min="1"
                        prop:value=quantity
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" on:click=add_line>"Ajouter"</button>
                </div>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>

            <div class="card">
                <h2 class="card-title">"Panier"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Produit"</th>
                            <th>"Prix unitaire"</th>
                            <th>"Quantité"</th>
                            <th>"Total"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || cart.get().into_iter().map(|l| {
                            let product_id = l.product.id;
                            view! {
                                <tr>
                                    <td>{l.product.nom.clone()}</td>
                                    <td>{format_money_dh(l.product.prix_unitaire)}</td>
                                    <td>{l.quantity}</td>
                                    <td>
                                        {format_money_dh(
                                            l.product.prix_unitaire * l.quantity as f64,
                                        )}
                                    </td>
                                    <td>
                                        <button
                                            class="btn btn-sm btn-danger"
                                            on:click=move |_| remove_line(product_id)
                                        >
                                            "Retirer"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || cart.get().is_empty()>
                    <p class="empty-state">"Le panier est vide"</p>
                </Show>
            </div>

            <div class="card order-summary">
                <PromoCodeInput on_apply=Callback::new(move |p| set_promo.set(p)) />
                <dl class="totals-list">
                    <dt>"Sous-total HT"</dt>
                    <dd>{move || format_money_dh(breakdown.get().subtotal_ht)}</dd>
                    <dt>
                        {move || {
                            let tier = selected_client
                                .get()
                                .map(|c| c.tier_label())
                                .unwrap_or("BASIC");
                            format!("Remise fidélité ({})", tier)
                        }}
                    </dt>
                    <dd>{move || format!("-{}", format_money_dh(breakdown.get().loyalty_discount))}</dd>
                    <dt>"Remise code promo"</dt>
                    <dd>{move || format!("-{}", format_money_dh(breakdown.get().promo_discount))}</dd>
                    <dt>"HT après remises"</dt>
                    <dd>{move || format_money_dh(breakdown.get().ht_after_discounts)}</dd>
                    <dt>"TVA (20%)"</dt>
                    <dd>{move || format_money_dh(breakdown.get().tva)}</dd>
                    <dt class="totals-list__grand">"Total TTC"</dt>
                    <dd class="totals-list__grand">
                        {move || format_money_dh(breakdown.get().total_ttc)}
                    </dd>
                </dl>
                <button
                    class="btn btn-primary btn-block"
                    on:click=submit
                    disabled=move || submitting.get() || cart.get().is_empty()
                >
                    "Créer la commande"
                </button>
            </div>
        </div>
    }
}
