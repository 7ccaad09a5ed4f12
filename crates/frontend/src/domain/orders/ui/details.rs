use contracts::domain::order::{Order, OrderStatus};
use contracts::domain::payment::{CreatePaymentRequest, PaymentMethod, PaymentStatus};
use contracts::shared::validation::validate_payment_amount;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::domain::payments;
use crate::layout::app_context::AppContext;
use crate::routes::routes::Route;
use crate::shared;
use crate::shared::components::modal::Modal;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{format_datetime, format_money_dh};

#[component]
pub fn OrderDetails(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (order, set_order) = signal(Option::<Order>::None);
    let (payment_modal, set_payment_modal) = signal(false);

    let is_admin = move || ctx.user.get().map(|u| u.is_admin()).unwrap_or(false);

    // The payments list has its own endpoint and can change between
    // order fetches, so it is always re-read alongside the order.
    let load = move || {
        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(mut o) => {
                    match payments::api::fetch_payments_by_order(id).await {
                        Ok(list) => o.payments = list,
                        Err(e) => log::error!("Failed to load payments: {}", e),
                    }
                    set_order.set(Some(o));
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    ctx.navigate(Route::Orders);
                }
            }
        });
    };
    load();

    let confirm_order = move |_| {
        if !shared::confirm("Confirmer cette commande ?") {
            return;
        }
        spawn_local(async move {
            match api::confirm_order(id).await {
                Ok(_) => {
                    ctx.notify_success("Commande confirmée");
                    load();
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    let cancel_order = move |_| {
        if !shared::confirm("Annuler cette commande ?") {
            return;
        }
        spawn_local(async move {
            match api::cancel_order(id).await {
                Ok(_) => {
                    ctx.notify_success("Commande annulée");
                    load();
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    let set_payment_status = move |payment_id: u64, status: PaymentStatus| {
        spawn_local(async move {
            match payments::api::update_payment_status(payment_id, status).await {
                Ok(_) => {
                    ctx.notify_success("Paiement mis à jour");
                    load();
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <div class="page order-details-page">
            <div class="page-header">
                <h1 class="page-title">{format!("Commande #{}", id)}</h1>
                <button class="btn btn-secondary" on:click=move |_| ctx.navigate(Route::Orders)>
                    "Retour"
                </button>
            </div>

            {move || order.get().map(|o| {
                let pending = o.status == OrderStatus::Pending;
                let fully_paid = o.is_fully_paid();
                let remaining = o.remaining_amount();
                view! {
                    <div class="card order-card">
                        <div class="order-card__header">
                            <h2 class="card-title">{o.client_name.clone()}</h2>
                            <StatusBadge code=o.status.as_code() label=o.status.label_fr() />
                        </div>
                        <p class="order-card__date">{format_datetime(o.order_date)}</p>
                        {o.promo_code.clone().map(|code| view! {
                            <p class="order-card__promo">
                                "Code promo: " <span class="badge badge-info">{code}</span>
                            </p>
                        })}

                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Produit"</th>
                                    <th>"Prix unitaire"</th>
                                    <th>"Quantité"</th>
                                    <th>"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {o.order_items.iter().map(|item| view! {
                                    <tr>
                                        <td>{item.product_name.clone()}</td>
                                        <td>{format_money_dh(item.unit_price)}</td>
                                        <td>{item.quantity}</td>
                                        <td>{format_money_dh(item.total_price)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>

                        <dl class="totals-list">
                            <dt>"Sous-total HT"</dt>
                            <dd>{format_money_dh(o.sub_total)}</dd>
                            <dt>"Remises"</dt>
                            <dd>{format!("-{}", format_money_dh(o.discount_amount))}</dd>
                            <dt>"TVA"</dt>
                            <dd>{format_money_dh(o.tva)}</dd>
                            <dt class="totals-list__grand">"Total TTC"</dt>
                            <dd class="totals-list__grand">{format_money_dh(o.total_ttc)}</dd>
                            <dt>"Payé"</dt>
                            <dd>{format_money_dh(o.total_paid())}</dd>
                            <dt>"Reste à payer"</dt>
                            <dd>{format_money_dh(remaining.max(0.0))}</dd>
                        </dl>

                        <Show when=move || is_admin() && pending>
                            <div class="order-card__actions">
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| set_payment_modal.set(true)
                                    disabled=fully_paid
                                >
                                    "+ Ajouter un paiement"
                                </button>
                                <button
                                    class="btn btn-success"
                                    on:click=confirm_order
                                    disabled=!fully_paid
                                    title=if fully_paid {
                                        ""
                                    } else {
                                        "La commande doit être entièrement payée"
                                    }
                                >
                                    "Confirmer"
                                </button>
                                <button class="btn btn-danger" on:click=cancel_order>
                                    "Annuler la commande"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <div class="card">
                        <h2 class="card-title">"Paiements"</h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Montant"</th>
                                    <th>"Mode"</th>
                                    <th>"Référence"</th>
                                    <th>"Date"</th>
                                    <th>"Statut"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {o.payments.iter().map(|p| {
                                    let payment_id = p.id;
                                    let actionable = p.status == PaymentStatus::Pending;
                                    view! {
                                        <tr>
                                            <td>{format_money_dh(p.amount)}</td>
                                            <td>{p.payment_method.label_fr()}</td>
                                            <td>
                                                {p.reference.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td>
                                                {p.payment_date
                                                    .map(format_datetime)
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td>
                                                <StatusBadge
                                                    code=p.status.as_code()
                                                    label=p.status.label_fr()
                                                />
                                            </td>
                                            <td class="actions">
                                                <Show when=move || is_admin() && actionable>
                                                    <button
                                                        class="btn btn-sm btn-success"
                                                        on:click=move |_| set_payment_status(
                                                            payment_id,
                                                            PaymentStatus::Encaisse,
                                                        )
                                                    >
                                                        "Encaisser"
                                                    </button>
                                                    <button
                                                        class="btn btn-sm btn-danger"
                                                        on:click=move |_| set_payment_status(
                                                            payment_id,
                                                            PaymentStatus::Rejete,
                                                        )
                                                    >
                                                        "Rejeter"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                        <Show when=move || order.get().map(|o| o.payments.is_empty()).unwrap_or(true)>
                            <p class="empty-state">"Aucun paiement enregistré"</p>
                        </Show>
                    </div>

                    <PaymentForm
                        order_id=id
                        remaining=remaining
                        open=payment_modal
                        on_close=Callback::new(move |()| set_payment_modal.set(false))
                        on_saved=Callback::new(move |()| {
                            set_payment_modal.set(false);
                            load();
                        })
                    />
                }
            })}
        </div>
    }
}

/// Add-payment modal. Validation (cash ceiling, not exceeding the balance,
/// reference for cheque/wire) runs client-side before the POST.
#[component]
fn PaymentForm(
    order_id: u64,
    remaining: f64,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let (amount, set_amount) = signal(String::new());
    let (method, set_method) = signal(PaymentMethod::Especes);
    let (reference, set_reference) = signal(String::new());
    let (bank_name, set_bank_name) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |_| {
        let method_value = method.get();
        if let Some(message) =
            validate_payment_amount(&amount.get(), method_value.as_code(), remaining)
        {
            set_error.set(Some(message));
            return;
        }
        let reference_value = reference.get().trim().to_string();
        if method_value.requires_reference() && reference_value.is_empty() {
            set_error.set(Some("La référence est obligatoire pour ce mode".to_string()));
            return;
        }
        let amount_value: f64 = match amount.get().trim().parse() {
            Ok(a) => a,
            Err(_) => {
                set_error.set(Some("Montant invalide".to_string()));
                return;
            }
        };
        let bank = bank_name.get().trim().to_string();
        let request = CreatePaymentRequest {
            order_id,
            amount: amount_value,
            payment_method: method_value,
            reference: (!reference_value.is_empty()).then_some(reference_value),
            bank_name: (!bank.is_empty()).then_some(bank),
        };
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match payments::api::create_payment(&request).await {
                Ok(_) => {
                    ctx.notify_success("Paiement enregistré");
                    set_amount.set(String::new());
                    set_reference.set(String::new());
                    set_bank_name.set(String::new());
                    on_saved.run(());
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal open=open on_close=on_close>
            <h2 class="modal-title">"Nouveau paiement"</h2>
            <p class="modal-subtitle">
                {format!("Reste à payer: {}", format_money_dh(remaining.max(0.0)))}
            </p>
            <div class="form-group">
                <label class="form-label">"Montant (DH)"</label>
                <input
                    type="number"
                    class="form-input"
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label class="form-label">"Mode de paiement"</label>
                <select
                    class="form-input"
                    on:change=move |ev| {
                        if let Some(m) = PaymentMethod::from_code(&event_target_value(&ev)) {
                            set_method.set(m);
                        }
                    }
                >
                    {PaymentMethod::ALL.iter().map(|m| view! {
                        <option value=m.as_code()>{m.label_fr()}</option>
                    }).collect_view()}
                </select>
            </div>
            <Show when=move || method.get().requires_reference()>
                <div class="form-group">
                    <label class="form-label">"Référence"</label>
                    <input
                        type="text"
                        class="form-input"
                        prop:value=reference
                        on:input=move |ev| set_reference.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Banque"</label>
                    <input
                        type="text"
                        class="form-input"
                        prop:value=bank_name
                        on:input=move |ev| set_bank_name.set(event_target_value(&ev))
                    />
                </div>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <div class="form-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    "Annuler"
                </button>
                <button class="btn btn-primary" on:click=submit disabled=submitting>
                    "Enregistrer"
                </button>
            </div>
        </Modal>
    }
}
