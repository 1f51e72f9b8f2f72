//! Client-side narrowing of an already-fetched order collection.
//!
//! Pure and stable: the relative order of the input survives, nothing is
//! re-sorted. The date range is not re-checked here — when one is set, the
//! backend already constrained the dataset on the selected date field.

use contracts::domain::orders::{Order, OrderStatus, OrdersDateField, OrdersQuery};

/// Everything the filter panel can express.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderFilters {
    /// Free-text term matched against number, client name and document.
    pub search: String,
    /// `None` means the "all statuses" sentinel.
    pub status: Option<OrderStatus>,
    /// yyyy-mm-dd, empty = unbounded.
    pub start_date: String,
    pub end_date: String,
    pub date_field: OrdersDateField,
}

impl OrderFilters {
    pub fn has_range(&self) -> bool {
        !self.start_date.is_empty() || !self.end_date.is_empty()
    }

    /// Whether any user-controlled narrowing is active (drives the
    /// "no match" vs "no orders" empty state).
    pub fn is_narrowing(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.has_range()
    }

    /// How many criteria are set (filter-panel badge).
    pub fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.has_range())
    }

    /// Range part, for the backend query.
    pub fn to_query(&self) -> OrdersQuery {
        OrdersQuery {
            start_date: (!self.start_date.is_empty()).then(|| self.start_date.clone()),
            end_date: (!self.end_date.is_empty()).then(|| self.end_date.clone()),
            date_field: self.date_field,
        }
    }
}

/// Applies the criteria in narrowing order: soft-deleted always drop out,
/// then free text, then status.
pub fn apply_filters(orders: &[Order], filters: &OrderFilters) -> Vec<Order> {
    let mut result: Vec<Order> = orders.iter().filter(|o| !o.deleted).cloned().collect();

    if !filters.search.is_empty() {
        let term = filters.search.to_lowercase();
        result.retain(|o| {
            o.number.to_lowercase().contains(&term)
                || o.client_name.to_lowercase().contains(&term)
                || o.client_document.to_lowercase().contains(&term)
        });
    }

    if let Some(status) = filters.status {
        result.retain(|o| o.status == status);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::orders::OrderItem;

    fn order(number: &str, name: &str, status: OrderStatus, deleted: bool) -> Order {
        Order {
            id: format!("id-{number}"),
            number: number.to_string(),
            client_name: name.to_string(),
            client_document: "12345678901".to_string(),
            delivery_address: "Rua X, 100, Bairro Y".to_string(),
            expected_delivery_date: "2025-01-10".to_string(),
            status,
            items: vec![OrderItem {
                id: None,
                description: "Bolo".to_string(),
                price: 50.0,
            }],
            created_at: "2025-01-03T12:00:00.000Z".to_string(),
            deleted,
            total: None,
        }
    }

    #[test]
    fn deleted_orders_always_drop_out() {
        let orders = vec![
            order("P-1", "Ana", OrderStatus::Aceito, false),
            order("P-2", "Bia", OrderStatus::Aceito, true),
        ];
        let visible = apply_filters(&orders, &OrderFilters::default());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].number, "P-1");
    }

    #[test]
    fn search_is_case_insensitive_over_three_fields() {
        let orders = vec![
            order("P-1", "Ana", OrderStatus::Aceito, false),
            order("P-2", "Bia", OrderStatus::Aceito, false),
        ];

        let mut filters = OrderFilters {
            search: "p-1".to_string(),
            ..Default::default()
        };
        let by_number = apply_filters(&orders, &filters);
        assert_eq!(by_number.len(), 1);
        assert_eq!(by_number[0].number, "P-1");

        filters.search = "BIA".to_string();
        let by_name = apply_filters(&orders, &filters);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].number, "P-2");

        filters.search = "4567".to_string();
        assert_eq!(apply_filters(&orders, &filters).len(), 2);
    }

    #[test]
    fn status_narrowing_after_search() {
        let orders = vec![
            order("P-1", "Ana", OrderStatus::Aceito, false),
            order("P-2", "Bia", OrderStatus::Aceito, false),
        ];
        let filters = OrderFilters {
            status: Some(OrderStatus::Entregue),
            ..Default::default()
        };
        assert!(apply_filters(&orders, &filters).is_empty());
    }

    #[test]
    fn filter_is_stable() {
        let orders = vec![
            order("P-3", "Ana", OrderStatus::Aceito, false),
            order("P-1", "Ana", OrderStatus::Aceito, false),
            order("P-2", "Ana", OrderStatus::Aceito, false),
        ];
        let numbers: Vec<String> = apply_filters(&orders, &OrderFilters::default())
            .into_iter()
            .map(|o| o.number)
            .collect();
        assert_eq!(numbers, vec!["P-3", "P-1", "P-2"]);
    }

    #[test]
    fn query_reflects_only_set_bounds() {
        let filters = OrderFilters {
            start_date: "2025-01-01".to_string(),
            date_field: OrdersDateField::CreatedAt,
            ..Default::default()
        };
        let query = filters.to_query();
        assert_eq!(query.start_date.as_deref(), Some("2025-01-01"));
        assert_eq!(query.end_date, None);
        assert!(query.has_range());
        assert!(!OrderFilters::default().to_query().has_range());
    }

    #[test]
    fn active_count_tracks_criteria() {
        let mut filters = OrderFilters::default();
        assert_eq!(filters.active_count(), 0);
        assert!(!filters.is_narrowing());

        filters.search = "ana".to_string();
        filters.status = Some(OrderStatus::Pronto);
        filters.end_date = "2025-02-01".to_string();
        assert_eq!(filters.active_count(), 3);
        assert!(filters.is_narrowing());
    }
}
