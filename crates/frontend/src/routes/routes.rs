use leptos::prelude::*;

use crate::dashboards::home::HomePage;
use crate::domain::orders::ui::list::OrdersPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthScreen {
    Login,
    Register,
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || match ctx.active_page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Orders => view! { <OrdersPage /> }.into_any(),
            }
        />
    }
}

/// Session-gated routing. No router: an authenticated session shows the main
/// layout, anything else shows the auth screens. Clearing the session (logout
/// or a 401) therefore lands on the login view with no redirect to loop.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let screen = RwSignal::new(AuthScreen::Login);

    view! {
        <Show
            when=move || session.authenticated()
            fallback=move || view! {
                <Show
                    when=move || screen.get() == AuthScreen::Login
                    fallback=move || view! {
                        <RegisterPage on_switch=Callback::new(move |_| screen.set(AuthScreen::Login)) />
                    }
                >
                    <LoginPage on_switch=Callback::new(move |_| screen.set(AuthScreen::Register)) />
                </Show>
            }
        >
            <MainLayout />
        </Show>
    }
}
