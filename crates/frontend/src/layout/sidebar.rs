//! Fixed navigation sidebar: brand header, page links, logout.

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

const NAV_ITEMS: [(Page, &str, &str); 2] = [
    (Page::Home, "Home", "home"),
    (Page::Orders, "Pedidos", "package"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let session = use_session();

    view! {
        <div class="sidebar">
            <div class="sidebar__brand">
                <h1 class="sidebar__title">"Na Porta"</h1>
                <p class="sidebar__subtitle">"Sistema de Pedidos"</p>
            </div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(page, label, icon_name)| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || ctx.active_page.get() == page
                                on:click=move |_| ctx.open(page)
                            >
                                {icon(icon_name)}
                                <span>{label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <button class="sidebar__item" on:click=move |_| session.clear()>
                    {icon("logout")}
                    <span>"Sair"</span>
                </button>
            </div>
        </div>
    }
}
