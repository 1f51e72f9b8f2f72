//! Order domain contracts shared between the frontend and the backend API.

pub mod aggregate;
pub mod validation;

pub use aggregate::{
    CalculateOrderResponse, CreateOrderPayload, ItemDraft, ListOrdersResponse, Order, OrderDraft,
    OrderItem, OrderItemPayload, OrderStatus, OrdersDateField, OrdersQuery, UpdateOrderPayload,
};
pub use validation::{validate_draft, FieldError};
