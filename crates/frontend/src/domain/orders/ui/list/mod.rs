//! Orders page: filter panel, table, row actions and the details modal.

use std::rc::Rc;

use contracts::domain::orders::{Order, OrderStatus, OrdersDateField};
use leptos::prelude::*;

use crate::domain::orders::api::OrdersApi;
use crate::domain::orders::filter::{apply_filters, OrderFilters};
use crate::domain::orders::ui::details::OrderDetails;
use crate::domain::orders::ui::{status_badge_class, status_label};
use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = OrdersApi::new(use_session());
    let toasts = use_toasts();

    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(true);

    // Filter criteria, applied live.
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<OrderStatus>>(None);
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (date_field, set_date_field) = signal(OrdersDateField::default());

    // Details modal state.
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);

    // Bumped after every mutation to force a reload.
    let (refresh, set_refresh) = signal(0u32);
    // Generation token: completions of superseded fetches are discarded, so
    // the table always reflects the most recently issued fetch.
    let fetch_seq = StoredValue::new(0u64);

    let current_filters = move || OrderFilters {
        search: search.get(),
        status: status_filter.get(),
        start_date: date_from.get(),
        end_date: date_to.get(),
        date_field: date_field.get(),
    };

    // Reload whenever any criterion changes (or a mutation bumps `refresh`):
    // ranged query when a date bound is set, otherwise the plain listing.
    Effect::new(move |_| {
        refresh.get();
        let filters = current_filters();

        let seq = {
            let mut current = 0;
            fetch_seq.update_value(|s| {
                *s += 1;
                current = *s;
            });
            current
        };

        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            let result = if filters.has_range() {
                api.list_ranged(&filters.to_query()).await
            } else {
                api.list().await
            };

            if fetch_seq.get_value() != seq {
                return;
            }

            match result {
                Ok(items) => set_orders.set(items),
                Err(e) => {
                    log::warn!("orders fetch failed: {e}");
                    toasts.error("Erro", "Não foi possível carregar os pedidos");
                }
            }
            set_loading.set(false);
        });
    });

    let reload = move || set_refresh.update(|n| *n += 1);

    let visible = move || apply_filters(&orders.get(), &current_filters());
    let any_orders_exist = move || orders.get().iter().any(|o| !o.deleted);

    let handle_new = move || {
        set_editing_id.set(None);
        set_show_form.set(true);
    };

    let handle_edit = move |id: String| {
        set_editing_id.set(Some(id));
        set_show_form.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Tem certeza que deseja excluir este pedido?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api.delete(&id).await {
                Ok(()) => {
                    toasts.success("Sucesso", "Pedido excluído com sucesso");
                    reload();
                }
                Err(e) => {
                    log::warn!("order delete failed: {e}");
                    toasts.error("Erro", "Não foi possível excluir o pedido");
                }
            }
        });
    };

    // Server-side total; displayed only, never written back into the table.
    let handle_calculate = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match api.calculate(&id).await {
                Ok(total) => toasts.success(
                    "Cálculo realizado",
                    format!("Total do pedido: {}", format_money(total)),
                ),
                Err(e) => {
                    log::warn!("order calculate failed: {e}");
                    toasts.error("Erro", "Não foi possível calcular o pedido");
                }
            }
        });
    };

    let handle_clear_filters = move |_| {
        set_search.set(String::new());
        set_status_filter.set(None);
        set_date_from.set(String::new());
        set_date_to.set(String::new());
        set_date_field.set(OrdersDateField::default());
        toasts.info("Filtros limpos", "Todos os filtros foram removidos");
    };

    view! {
        <div class="page orders-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("package")} {"Pedidos"}</h1>
                    <p class="header__subtitle">{"Gerencie todos os pedidos do sistema"}</p>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_new()>
                        {icon("plus")}
                        {"Novo Pedido"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| reload()>
                        {icon("refresh")}
                        {"Atualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel__title">
                    {icon("filter")}
                    <span>{"Filtros Avançados"}</span>
                    {move || {
                        let count = current_filters().active_count();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>

                <div class="filter-panel__row">
                    <div class="filter-panel__field filter-panel__field--grow">
                        <label class="label-sm">{"Buscar pedido"}</label>
                        <input
                            type="text"
                            placeholder="Número, cliente ou documento..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="filter-panel__field">
                        <label class="label-sm">{"Status"}</label>
                        <select on:change=move |ev| {
                            set_status_filter.set(OrderStatus::parse(&event_target_value(&ev)));
                        }>
                            <option value="" selected=move || status_filter.get().is_none()>
                                {"Todos os status"}
                            </option>
                            {OrderStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            selected=move || status_filter.get() == Some(status)
                                        >
                                            {status_label(status)}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="filter-panel__field">
                        <label class="label-sm">{"Filtrar por data de"}</label>
                        <select on:change=move |ev| {
                            let field = match event_target_value(&ev).as_str() {
                                "createdAt" => OrdersDateField::CreatedAt,
                                _ => OrdersDateField::ExpectedDeliveryDate,
                            };
                            set_date_field.set(field);
                        }>
                            <option
                                value="expectedDeliveryDate"
                                selected=move || date_field.get() == OrdersDateField::ExpectedDeliveryDate
                            >
                                {"Entrega Esperada"}
                            </option>
                            <option
                                value="createdAt"
                                selected=move || date_field.get() == OrdersDateField::CreatedAt
                            >
                                {"Criação"}
                            </option>
                        </select>
                    </div>
                </div>

                <div class="filter-panel__row">
                    <div class="filter-panel__field">
                        <label class="label-sm">{icon("calendar")} {"Data inicial"}</label>
                        <DateInput
                            value=Signal::derive(move || date_from.get())
                            on_change=move |val| set_date_from.set(val)
                        />
                    </div>
                    <div class="filter-panel__field">
                        <label class="label-sm">{"Data final"}</label>
                        <DateInput
                            value=Signal::derive(move || date_to.get())
                            on_change=move |val| set_date_to.set(val)
                            min=Signal::derive(move || date_from.get())
                        />
                    </div>
                    <div class="filter-panel__field filter-panel__field--actions">
                        <button class="button button--secondary" on:click=handle_clear_filters>
                            {"Limpar Filtros"}
                        </button>
                    </div>
                </div>

                <p class="filter-panel__hint">
                    {move || match date_field.get() {
                        OrdersDateField::ExpectedDeliveryDate => {
                            "Filtrando pela data prevista de entrega"
                        }
                        OrdersDateField::CreatedAt => "Filtrando pela data de criação do pedido",
                    }}
                </p>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">{"Carregando..."}</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Número"}</th>
                            <th class="table__header-cell">{"Cliente"}</th>
                            <th class="table__header-cell">{"Data Entrega"}</th>
                            <th class="table__header-cell">{"Itens"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Ações"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|order| {
                                    let edit_id = order.id.clone();
                                    let calc_id = order.id.clone();
                                    let delete_id = order.id.clone();
                                    let items_count = order.items.len();
                                    let items_sum = order.items_total();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{order.number.clone()}</td>
                                            <td class="table__cell">{order.client_name.clone()}</td>
                                            <td class="table__cell">
                                                {format_date(&order.expected_delivery_date)}
                                            </td>
                                            <td class="table__cell">
                                                {format!(
                                                    "{} {}",
                                                    items_count,
                                                    if items_count == 1 { "item" } else { "itens" },
                                                )}
                                                <span class="table__cell-note">
                                                    {format!("(Total: {})", format_money(items_sum))}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                <span class=status_badge_class(order.status)>
                                                    {status_label(order.status)}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                <div class="table__actions">
                                                    <button
                                                        class="btn btn-outline btn-sm"
                                                        title="Editar"
                                                        on:click=move |_| handle_edit(edit_id.clone())
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="btn btn-outline btn-sm"
                                                        title="Calcular total"
                                                        on:click=move |_| handle_calculate(calc_id.clone())
                                                    >
                                                        {icon("calculator")}
                                                    </button>
                                                    <button
                                                        class="btn btn-danger btn-sm"
                                                        title="Excluir"
                                                        on:click=move |_| handle_delete(delete_id.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                (!loading.get() && visible().is_empty()).then(|| {
                    if any_orders_exist() {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">{"Nenhum pedido encontrado"}</p>
                                <p class="empty-state__hint">
                                    {"Nenhum resultado para os filtros atuais"}
                                </p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">{"Nenhum pedido encontrado"}</p>
                                <p class="empty-state__hint">{"Comece criando seu primeiro pedido"}</p>
                                <button class="button button--primary" on:click=move |_| handle_new()>
                                    {"Criar primeiro pedido"}
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}

            {move || {
                if show_form.get() {
                    let close = move || {
                        set_show_form.set(false);
                        set_editing_id.set(None);
                    };
                    let on_saved = Rc::new(move |_| {
                        close();
                        reload();
                    });
                    let on_cancel = Rc::new(move |_| close());
                    view! {
                        <div class="modal-overlay">
                            <div class="modal-content modal-content--wide">
                                <OrderDetails
                                    id=editing_id.get_untracked()
                                    on_saved=on_saved
                                    on_cancel=on_cancel
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
