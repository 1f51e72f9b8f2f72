pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell: fixed sidebar on the left, active page in the center.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <aside class="app-layout__sidebar">{left()}</aside>
            <main class="app-layout__content">{move || center()}</main>
        </div>
    }
}
