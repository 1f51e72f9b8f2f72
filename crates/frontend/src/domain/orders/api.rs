//! Order endpoints. Every order-related request goes through here.

use contracts::domain::orders::{
    CalculateOrderResponse, CreateOrderPayload, ListOrdersResponse, Order, OrdersQuery,
    UpdateOrderPayload,
};

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::system::auth::context::Session;

#[derive(Clone, Copy)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(session: Session) -> Self {
        Self {
            client: ApiClient::new(session),
        }
    }

    /// Unranged listing.
    pub async fn list(self) -> Result<Vec<Order>, ApiError> {
        let response: ListOrdersResponse = self.client.get_json("/orders").await?;
        Ok(response.items)
    }

    /// Listing constrained by the backend's date-range filter.
    pub async fn list_ranged(self, query: &OrdersQuery) -> Result<Vec<Order>, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response: ListOrdersResponse = self.client.get_json(&format!("/orders?{qs}")).await?;
        Ok(response.items)
    }

    pub async fn get(self, id: &str) -> Result<Order, ApiError> {
        self.client.get_json(&format!("/orders/{id}")).await
    }

    pub async fn create(self, payload: &CreateOrderPayload) -> Result<Order, ApiError> {
        self.client.post_json("/orders", payload).await
    }

    pub async fn update(self, id: &str, payload: &UpdateOrderPayload) -> Result<Order, ApiError> {
        self.client.patch_json(&format!("/orders/{id}"), payload).await
    }

    /// Soft delete; the order stops appearing in listings.
    pub async fn delete(self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/orders/{id}")).await
    }

    /// Asks the backend for its authoritative total. Does not mutate anything.
    pub async fn calculate(self, id: &str) -> Result<f64, ApiError> {
        let response: CalculateOrderResponse = self
            .client
            .post_empty(&format!("/orders/calculate-order/{id}"))
            .await?;
        Ok(response.total)
    }
}

#[cfg(test)]
mod tests {
    use contracts::domain::orders::{OrdersDateField, OrdersQuery};

    #[test]
    fn ranged_query_string_shape() {
        let query = OrdersQuery {
            start_date: Some("2025-01-01".to_string()),
            end_date: Some("2025-01-31".to_string()),
            date_field: OrdersDateField::ExpectedDeliveryDate,
        };
        assert_eq!(
            serde_qs::to_string(&query).unwrap(),
            "startDate=2025-01-01&endDate=2025-01-31&dateField=expectedDeliveryDate"
        );
    }

    #[test]
    fn open_ended_range_skips_missing_bound() {
        let query = OrdersQuery {
            start_date: Some("2025-01-01".to_string()),
            end_date: None,
            date_field: OrdersDateField::CreatedAt,
        };
        assert_eq!(
            serde_qs::to_string(&query).unwrap(),
            "startDate=2025-01-01&dateField=createdAt"
        );
    }
}
