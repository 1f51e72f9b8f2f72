use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::context::Session;

#[component]
pub fn App() -> impl IntoView {
    // Session is restored from localStorage once, here, and injected into
    // everything that talks to the backend.
    provide_context(Session::restore());
    provide_context(ToastService::new());
    provide_context(AppGlobalContext::new());

    view! {
        <Toaster />
        <AppRoutes />
    }
}
