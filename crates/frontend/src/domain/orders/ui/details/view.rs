use contracts::domain::orders::OrderStatus;
use leptos::prelude::*;
use std::rc::Rc;

use super::view_model::OrderDetailsViewModel;
use crate::domain::orders::api::OrdersApi;
use crate::domain::orders::ui::status_label;
use crate::shared::date_utils::today_iso;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

#[component]
pub fn OrderDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(OrdersApi::new(use_session()), use_toasts());
    vm.load_if_needed(id);

    // Rows are keyed off the item count so typing inside a row does not
    // rebuild it (and steal focus); cell values bind to the draft directly.
    let items_count = {
        let form = vm.form;
        Memo::new(move |_| form.with(|f| f.items.len()))
    };

    let vm_clone = vm.clone();

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode() { "Editar Pedido" } else { "Novo Pedido" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="number">{"Número do Pedido"}</label>
                        <input
                            type="text"
                            id="number"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().number
                            }
                            readonly={
                                let vm = vm_clone.clone();
                                move || vm.is_edit_mode()
                            }
                            class:input--readonly={
                                let vm = vm_clone.clone();
                                move || vm.is_edit_mode()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.number = event_target_value(&ev));
                                }
                            }
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.error_for("number").map(|m| view! { <span class="field-error">{m}</span> })
                        }
                    </div>

                    <div class="form-group">
                        <label for="status">{"Status"}</label>
                        <select
                            id="status"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                                        vm.form.update(|f| f.status = status);
                                    }
                                }
                            }
                        >
                            {
                                let vm = vm_clone.clone();
                                OrderStatus::ALL
                                    .into_iter()
                                    .map(|status| {
                                        let vm = vm.clone();
                                        view! {
                                            <option
                                                value=status.as_str()
                                                selected=move || vm.form.get().status == status
                                            >
                                                {status_label(status)}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="client_name">{"Nome do Cliente"}</label>
                        <input
                            type="text"
                            id="client_name"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().client_name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.client_name = event_target_value(&ev));
                                }
                            }
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.error_for("clientName").map(|m| view! { <span class="field-error">{m}</span> })
                        }
                    </div>

                    <div class="form-group">
                        <label for="client_document">{"CPF/CNPJ"}</label>
                        <input
                            type="text"
                            id="client_document"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().client_document
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.client_document = event_target_value(&ev));
                                }
                            }
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.error_for("clientDocument").map(|m| view! { <span class="field-error">{m}</span> })
                        }
                    </div>
                </div>

                <div class="form-group">
                    <label for="delivery_address">{"Endereço de Entrega"}</label>
                    <textarea
                        id="delivery_address"
                        rows="2"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().delivery_address
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.delivery_address = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.error_for("deliveryAddress").map(|m| view! { <span class="field-error">{m}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="expected_delivery_date">{"Data Prevista de Entrega"}</label>
                    <input
                        type="date"
                        id="expected_delivery_date"
                        min=today_iso()
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().expected_delivery_date
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.expected_delivery_date = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.error_for("expectedDeliveryDate").map(|m| view! { <span class="field-error">{m}</span> })
                    }
                </div>

                <div class="items-section">
                    <div class="items-section__header">
                        <div>
                            <label>{"Itens do Pedido"}</label>
                            <p class="items-section__total">
                                {
                                    let vm = vm_clone.clone();
                                    move || format!("Total: {}", format_money(vm.total()))
                                }
                            </p>
                        </div>
                        <button
                            type="button"
                            class="btn btn-secondary btn-sm"
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.add_item()
                            }
                        >
                            {icon("plus")}
                            {"Adicionar Item"}
                        </button>
                    </div>

                    {
                        let vm = vm_clone.clone();
                        move || {
                            (0..items_count.get())
                                .map(|index| {
                                    let vm_desc = vm.clone();
                                    let vm_desc_val = vm.clone();
                                    let vm_desc_err = vm.clone();
                                    let vm_price = vm.clone();
                                    let vm_price_val = vm.clone();
                                    let vm_price_err = vm.clone();
                                    let vm_remove = vm.clone();
                                    view! {
                                        <div class="item-row">
                                            <div class="item-row__description">
                                                <label class="label-sm">{"Descrição"}</label>
                                                <input
                                                    type="text"
                                                    placeholder="Nome do produto"
                                                    prop:value=move || {
                                                        vm_desc_val.form.with(|f| {
                                                            f.items
                                                                .get(index)
                                                                .map(|it| it.description.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        vm_desc.form.update(|f| {
                                                            if let Some(it) = f.items.get_mut(index) {
                                                                it.description = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                />
                                                {move || {
                                                    vm_desc_err
                                                        .error_for(&format!("items[{index}].description"))
                                                        .map(|m| view! { <span class="field-error">{m}</span> })
                                                }}
                                            </div>

                                            <div class="item-row__price">
                                                <label class="label-sm">{"Preço Unitário"}</label>
                                                <input
                                                    type="number"
                                                    step="0.01"
                                                    min="0.01"
                                                    prop:value=move || {
                                                        vm_price_val.form.with(|f| {
                                                            f.items
                                                                .get(index)
                                                                .map(|it| it.price.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let price = event_target_value(&ev)
                                                            .parse::<f64>()
                                                            .unwrap_or(0.0);
                                                        vm_price.form.update(|f| {
                                                            if let Some(it) = f.items.get_mut(index) {
                                                                it.price = price;
                                                            }
                                                        });
                                                    }
                                                />
                                                {move || {
                                                    vm_price_err
                                                        .error_for(&format!("items[{index}].price"))
                                                        .map(|m| view! { <span class="field-error">{m}</span> })
                                                }}
                                            </div>

                                            <button
                                                type="button"
                                                class="btn btn-danger btn-sm"
                                                disabled=move || items_count.get() <= 1
                                                on:click=move |_| vm_remove.remove_item(index)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }

                    {
                        let vm = vm_clone.clone();
                        move || vm.error_for("items").map(|m| view! { <span class="field-error">{m}</span> })
                    }

                    <p class="items-section__hint">
                        {"Cada item tem quantidade 1. Para múltiplas unidades, adicione o mesmo item várias vezes."}
                    </p>
                </div>
            </div>

            <div class="details-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.submitting.get()
                    }
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.submitting.get() {
                                "Salvando..."
                            } else if vm.is_edit_mode() {
                                "Atualizar"
                            } else {
                                "Criar"
                            }
                        }
                    }
                </button>
            </div>
        </div>
    }
}
