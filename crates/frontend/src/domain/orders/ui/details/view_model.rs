use std::rc::Rc;

use contracts::domain::orders::{
    validate_draft, CreateOrderPayload, FieldError, OrderDraft, UpdateOrderPayload,
};
use leptos::prelude::*;

use crate::domain::orders::api::OrdersApi;
use crate::domain::orders::number::generate_order_number;
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{default_delivery_date, today};
use crate::shared::toast::ToastService;

/// ViewModel for the order details form.
///
/// Owns one draft from first render until a successful submission or cancel.
/// The draft survives every failure: validation errors and backend rejections
/// only annotate it, they never reset it.
#[derive(Clone)]
pub struct OrderDetailsViewModel {
    api: OrdersApi,
    toasts: ToastService,
    pub form: RwSignal<OrderDraft>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub load_error: RwSignal<Option<String>>,
    /// True while a create/update request is in flight. The submit button is
    /// disabled off this, which is what keeps submissions at most one at a
    /// time.
    pub submitting: RwSignal<bool>,
    editing_id: RwSignal<Option<String>>,
}

impl OrderDetailsViewModel {
    /// Create-mode defaults: suggested number, delivery in a week, one blank
    /// item.
    pub fn new(api: OrdersApi, toasts: ToastService) -> Self {
        Self {
            api,
            toasts,
            form: RwSignal::new(OrderDraft::new(
                generate_order_number(),
                default_delivery_date(today()),
            )),
            field_errors: RwSignal::new(Vec::new()),
            load_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            editing_id: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.get().is_some()
    }

    /// Load the draft from the server when editing an existing order.
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        self.editing_id.set(Some(existing_id.clone()));

        let api = self.api;
        let form = self.form;
        let load_error = self.load_error;
        wasm_bindgen_futures::spawn_local(async move {
            match api.get(&existing_id).await {
                Ok(order) => form.set(OrderDraft::from_order(&order)),
                Err(e) => load_error.set(Some(format!("Erro ao carregar o pedido: {e}"))),
            }
        });
    }

    /// First message attached to a field path, if any.
    pub fn error_for(&self, path: &str) -> Option<String> {
        self.field_errors
            .get()
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.clone())
    }

    /// Live derived total of the current item list.
    pub fn total(&self) -> f64 {
        self.form.get().total()
    }

    pub fn add_item(&self) {
        self.form.update(|f| f.push_blank_item());
    }

    /// Refused for the last remaining item; the list stays non-empty.
    pub fn remove_item(&self, index: usize) {
        self.form.update(|f| {
            f.remove_item(index);
        });
    }

    /// Validate locally, then create or update. No request leaves when the
    /// draft is rejected locally.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.submitting.get_untracked() {
            return;
        }

        let draft = self.form.get_untracked();
        match validate_draft(&draft) {
            Err(errors) => {
                self.field_errors.set(errors);
                return;
            }
            Ok(()) => self.field_errors.set(Vec::new()),
        }

        self.submitting.set(true);

        let api = self.api;
        let toasts = self.toasts;
        let submitting = self.submitting;
        let editing_id = self.editing_id.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api.update(id, &UpdateOrderPayload::from(&draft)).await,
                None => api.create(&CreateOrderPayload::from(&draft)).await,
            };
            submitting.set(false);

            match result {
                Ok(_) => {
                    let message = if editing_id.is_some() {
                        "Pedido atualizado com sucesso"
                    } else {
                        "Pedido criado com sucesso"
                    };
                    toasts.success("Sucesso", message);
                    (on_saved)(());
                }
                Err(e) => surface_submit_error(&toasts, e),
            }
        });
    }
}

/// Backend failures become toasts; the form stays editable with the draft
/// intact.
fn surface_submit_error(toasts: &ToastService, error: ApiError) {
    match error {
        ApiError::Validation(violations) => {
            for violation in violations {
                let description = match violation.property {
                    Some(property) => format!("{}: {}", property, violation.message),
                    None => violation.message,
                };
                toasts.error("Erro de validação", description);
            }
        }
        ApiError::Conflict(message) | ApiError::Message(message) => {
            toasts.error("Erro", message);
        }
        ApiError::Unauthorized => {
            toasts.error("Sessão expirada", "Faça login novamente");
        }
        ApiError::Network(_) | ApiError::Decode(_) => {
            log::warn!("order submit failed: {error}");
            toasts.error("Erro", "Não foi possível salvar o pedido");
        }
    }
}
