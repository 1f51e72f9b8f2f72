use serde::{Deserialize, Serialize};

// ============================================================================
// Lifecycle status
// ============================================================================

/// Order lifecycle states, in business order.
///
/// Wire values are the lowercase concatenated forms the backend stores
/// (`novopedido`, `aceito`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    NovoPedido,
    Aceito,
    EmProducao,
    Pronto,
    Entregue,
    Cancelado,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::NovoPedido,
        OrderStatus::Aceito,
        OrderStatus::EmProducao,
        OrderStatus::Pronto,
        OrderStatus::Entregue,
        OrderStatus::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::NovoPedido => "novopedido",
            OrderStatus::Aceito => "aceito",
            OrderStatus::EmProducao => "emproducao",
            OrderStatus::Pronto => "pronto",
            OrderStatus::Entregue => "entregue",
            OrderStatus::Cancelado => "cancelado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|st| st.as_str() == s)
    }
}

// ============================================================================
// Persisted aggregate
// ============================================================================

/// A single order line. Quantity is always one; multiple units of the same
/// product are repeated entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub price: f64,
}

/// Order as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend-assigned opaque identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-facing order number (`P-####`), immutable after creation.
    pub number: String,
    pub client_name: String,
    pub client_document: String,
    pub delivery_address: String,
    /// ISO date (`yyyy-mm-dd` or full timestamp); kept as a string on the wire.
    pub expected_delivery_date: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: String,
    /// Soft-delete flag; flagged orders never reach a listing.
    #[serde(default)]
    pub deleted: bool,
    /// Server-computed total. Display-only; the client derives its own sum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl Order {
    /// Locally derived display total: the sum of the item prices.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }
}

// ============================================================================
// Draft (form state)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub description: String,
    pub price: f64,
}

/// In-memory representation of an order being created or edited.
///
/// The item list is never empty: construction seeds one blank item and
/// [`OrderDraft::remove_item`] refuses to remove the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub number: String,
    pub client_name: String,
    pub client_document: String,
    pub delivery_address: String,
    pub expected_delivery_date: String,
    pub status: OrderStatus,
    pub items: Vec<ItemDraft>,
}

impl OrderDraft {
    /// Blank draft for create mode. `number` and the default delivery date are
    /// supplied by the caller (they need entropy and a clock).
    pub fn new(number: String, expected_delivery_date: String) -> Self {
        Self {
            number,
            client_name: String::new(),
            client_document: String::new(),
            delivery_address: String::new(),
            expected_delivery_date,
            status: OrderStatus::default(),
            items: vec![ItemDraft::default()],
        }
    }

    /// Draft pre-populated from an existing order (edit mode).
    pub fn from_order(order: &Order) -> Self {
        Self {
            number: order.number.clone(),
            client_name: order.client_name.clone(),
            client_document: order.client_document.clone(),
            delivery_address: order.delivery_address.clone(),
            // Date inputs want a bare yyyy-mm-dd even when the backend sends a
            // full timestamp.
            expected_delivery_date: order
                .expected_delivery_date
                .split('T')
                .next()
                .unwrap_or(&order.expected_delivery_date)
                .to_string(),
            status: order.status,
            items: order
                .items
                .iter()
                .map(|i| ItemDraft {
                    description: i.description.clone(),
                    price: i.price,
                })
                .collect(),
        }
    }

    /// Derived total, recomputed from the current item list.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }

    pub fn push_blank_item(&mut self) {
        self.items.push(ItemDraft::default());
    }

    /// Removes the item at `index`. Refused (returns `false`) when it is the
    /// last remaining one or the index is out of bounds.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }
}

// ============================================================================
// Request payloads
// ============================================================================

/// Item as sent to the backend: never carries an `_id`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemPayload {
    pub description: String,
    pub price: f64,
}

impl From<&ItemDraft> for OrderItemPayload {
    fn from(item: &ItemDraft) -> Self {
        Self {
            description: item.description.clone(),
            price: item.price,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub number: String,
    pub client_name: String,
    pub client_document: String,
    pub delivery_address: String,
    pub expected_delivery_date: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItemPayload>,
}

impl From<&OrderDraft> for CreateOrderPayload {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            number: draft.number.clone(),
            client_name: draft.client_name.clone(),
            client_document: draft.client_document.clone(),
            delivery_address: draft.delivery_address.clone(),
            expected_delivery_date: draft.expected_delivery_date.clone(),
            status: draft.status,
            items: draft.items.iter().map(Into::into).collect(),
        }
    }
}

/// Body of `PATCH /orders/{id}`. `number` is immutable after creation, so the
/// type has no such field at all.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub client_name: String,
    pub client_document: String,
    pub delivery_address: String,
    pub expected_delivery_date: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItemPayload>,
}

impl From<&OrderDraft> for UpdateOrderPayload {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            client_name: draft.client_name.clone(),
            client_document: draft.client_document.clone(),
            delivery_address: draft.delivery_address.clone(),
            expected_delivery_date: draft.expected_delivery_date.clone(),
            status: draft.status,
            items: draft.items.iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Queries and responses
// ============================================================================

/// Which date the backend's range filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrdersDateField {
    #[default]
    #[serde(rename = "expectedDeliveryDate")]
    ExpectedDeliveryDate,
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl OrdersDateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrdersDateField::ExpectedDeliveryDate => "expectedDeliveryDate",
            OrdersDateField::CreatedAt => "createdAt",
        }
    }
}

/// Query parameters of `GET /orders`. Dates as `yyyy-mm-dd`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub date_field: OrdersDateField,
}

impl OrdersQuery {
    pub fn has_range(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListOrdersResponse {
    pub items: Vec<Order>,
}

/// Answer of `POST /orders/calculate-order/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateOrderResponse {
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_items(prices: &[f64]) -> OrderDraft {
        let mut draft = OrderDraft::new("P-1234".to_string(), "2025-01-10".to_string());
        draft.items = prices
            .iter()
            .map(|p| ItemDraft {
                description: "Bolo".to_string(),
                price: *p,
            })
            .collect();
        draft
    }

    #[test]
    fn status_wire_values() {
        assert_eq!(
            serde_json::to_value(OrderStatus::NovoPedido).unwrap(),
            serde_json::json!("novopedido")
        );
        assert_eq!(
            serde_json::to_value(OrderStatus::EmProducao).unwrap(),
            serde_json::json!("emproducao")
        );
        assert_eq!(OrderStatus::parse("entregue"), Some(OrderStatus::Entregue));
        assert_eq!(OrderStatus::parse("unknown"), None);
    }

    #[test]
    fn new_draft_has_one_blank_item() {
        let draft = OrderDraft::new("P-1000".to_string(), "2025-01-10".to_string());
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.status, OrderStatus::NovoPedido);
        assert_eq!(draft.total(), 0.0);
    }

    #[test]
    fn total_is_sum_of_item_prices() {
        let mut draft = draft_with_items(&[50.0, 50.0, 12.5]);
        assert_eq!(draft.total(), 112.5);

        assert!(draft.remove_item(2));
        assert_eq!(draft.total(), 100.0);
    }

    #[test]
    fn remove_item_refuses_last_one() {
        let mut draft = draft_with_items(&[10.0]);
        assert!(!draft.remove_item(0));
        assert_eq!(draft.items.len(), 1);

        draft.push_blank_item();
        assert!(draft.remove_item(1));
        assert!(!draft.remove_item(0));
    }

    #[test]
    fn update_payload_omits_number() {
        let draft = draft_with_items(&[50.0]);
        let value = serde_json::to_value(UpdateOrderPayload::from(&draft)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("number"));
        assert_eq!(object["clientName"], serde_json::json!(""));
        assert_eq!(object["status"], serde_json::json!("novopedido"));
    }

    #[test]
    fn create_payload_keeps_number_and_camel_case() {
        let mut draft = draft_with_items(&[50.0]);
        draft.client_name = "Ana Silva".to_string();
        let value = serde_json::to_value(CreateOrderPayload::from(&draft)).unwrap();
        assert_eq!(value["number"], serde_json::json!("P-1234"));
        assert_eq!(value["clientName"], serde_json::json!("Ana Silva"));
        assert_eq!(value["expectedDeliveryDate"], serde_json::json!("2025-01-10"));
        // Item `_id` never goes out in payloads.
        assert!(value["items"][0].get("_id").is_none());
    }

    #[test]
    fn order_deserializes_backend_shape() {
        let json = serde_json::json!({
            "_id": "65a1",
            "number": "P-1234",
            "clientName": "Ana Silva",
            "clientDocument": "12345678901",
            "deliveryAddress": "Rua X, 100, Bairro Y",
            "expectedDeliveryDate": "2025-01-10",
            "status": "novopedido",
            "items": [
                {"_id": "65a2", "description": "Bolo", "price": 50.0},
                {"description": "Bolo", "price": 50.0}
            ],
            "createdAt": "2025-01-03T12:00:00.000Z",
            "deleted": false
        });
        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.id, "65a1");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items_total(), 100.0);
        assert_eq!(order.total, None);
    }

    #[test]
    fn draft_from_order_strips_timestamp_from_delivery_date() {
        let order = Order {
            id: "65a1".to_string(),
            number: "P-1234".to_string(),
            client_name: "Ana".to_string(),
            client_document: "12345678901".to_string(),
            delivery_address: "Rua X, 100, Bairro Y".to_string(),
            expected_delivery_date: "2025-01-10T00:00:00.000Z".to_string(),
            status: OrderStatus::Aceito,
            items: vec![OrderItem {
                id: None,
                description: "Bolo".to_string(),
                price: 50.0,
            }],
            created_at: String::new(),
            deleted: false,
            total: None,
        };
        let draft = OrderDraft::from_order(&order);
        assert_eq!(draft.expected_delivery_date, "2025-01-10");
        assert_eq!(draft.items.len(), 1);
    }
}
