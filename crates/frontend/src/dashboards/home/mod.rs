//! Home dashboard: aggregate stat cards and the latest orders.

pub mod stats;

use chrono::Utc;
use contracts::domain::orders::Order;
use leptos::prelude::*;

use crate::domain::orders::api::OrdersApi;
use crate::domain::orders::ui::{status_badge_class, status_label};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use stats::{compute_stats, most_recent, DashboardStats};

const RECENT_LIMIT: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = OrdersApi::new(use_session());
    let toasts = use_toasts();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (recent, set_recent) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api.list().await {
                Ok(orders) => {
                    set_stats.set(Some(compute_stats(&orders, Utc::now())));
                    set_recent.set(most_recent(&orders, RECENT_LIMIT));
                }
                Err(e) => {
                    log::warn!("dashboard fetch failed: {e}");
                    toasts.error("Erro", "Não foi possível carregar o dashboard");
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <div class="page home-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Dashboard"}</h1>
                    <p class="header__subtitle">
                        {"Bem-vindo ao sistema de gestão de pedidos Na Porta"}
                    </p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| ctx.open(Page::Orders)
                    >
                        {icon("package")}
                        {"Ver pedidos"}
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total de Pedidos".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_orders))
                />
                <StatCard
                    label="Últimos 7 dias".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.recent_orders))
                />
                <StatCard
                    label="Pendentes".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.pending_orders))
                    subtitle="novos e aceitos".to_string()
                />
            </div>

            <div class="recent-orders">
                <h2 class="recent-orders__title">{"Pedidos recentes"}</h2>

                <Show when=move || loading.get()>
                    <div class="loading">{"Carregando dashboard..."}</div>
                </Show>

                {move || {
                    (!loading.get() && recent.get().is_empty())
                        .then(|| view! { <p class="empty-state__hint">{"Nenhum pedido ainda"}</p> })
                }}

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Número"}</th>
                                <th class="table__header-cell">{"Cliente"}</th>
                                <th class="table__header-cell">{"Status"}</th>
                                <th class="table__header-cell">{"Criado em"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                recent
                                    .get()
                                    .into_iter()
                                    .map(|order| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{order.number.clone()}</td>
                                                <td class="table__cell">{order.client_name.clone()}</td>
                                                <td class="table__cell">
                                                    <span class=status_badge_class(order.status)>
                                                        {status_label(order.status)}
                                                    </span>
                                                </td>
                                                <td class="table__cell">
                                                    {format_datetime(&order.created_at)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
