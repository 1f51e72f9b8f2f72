//! Toast notifications: stacked top-right, auto-dismissed after a few
//! seconds. The service lives in context so any component can notify.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
            ToastKind::Warning => "toast toast--warning",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), description.into());
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Info, title.into(), description.into());
    }

    pub fn warning(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Warning, title.into(), description.into());
    }

    fn push(&self, kind: ToastKind, title: String, description: String) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title,
            description: (!description.is_empty()).then_some(description),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in component tree")
}

/// Renders the current toast stack. Mounted once, near the app root.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toaster">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class() on:click=move |_| service.dismiss(id)>
                                <div class="toast__title">{toast.title}</div>
                                {toast
                                    .description
                                    .map(|d| view! { <div class="toast__description">{d}</div> })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
