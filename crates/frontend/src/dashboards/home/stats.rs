//! Aggregate numbers for the home dashboard, derived from the full listing.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::orders::{Order, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Created within the last 7 days.
    pub recent_orders: usize,
    /// Still waiting on the kitchen: new or accepted.
    pub pending_orders: usize,
}

fn parse_created_at(order: &Order) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&order.created_at)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Soft-deleted orders are invisible to every statistic. An unparseable
/// `createdAt` simply never counts as recent.
pub fn compute_stats(orders: &[Order], now: DateTime<Utc>) -> DashboardStats {
    let week_ago = now - Duration::days(7);
    let visible: Vec<&Order> = orders.iter().filter(|o| !o.deleted).collect();

    DashboardStats {
        total_orders: visible.len(),
        recent_orders: visible
            .iter()
            .filter(|o| parse_created_at(o).map(|dt| dt > week_ago).unwrap_or(false))
            .count(),
        pending_orders: visible
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::NovoPedido | OrderStatus::Aceito))
            .count(),
    }
}

/// The latest `limit` visible orders, newest first.
pub fn most_recent(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut visible: Vec<Order> = orders.iter().filter(|o| !o.deleted).cloned().collect();
    // ISO timestamps sort lexicographically in chronological order.
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible.truncate(limit);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::orders::OrderItem;

    fn order(number: &str, status: OrderStatus, created_at: &str, deleted: bool) -> Order {
        Order {
            id: format!("id-{number}"),
            number: number.to_string(),
            client_name: "Ana".to_string(),
            client_document: "12345678901".to_string(),
            delivery_address: "Rua X, 100, Bairro Y".to_string(),
            expected_delivery_date: "2025-01-10".to_string(),
            status,
            items: vec![OrderItem {
                id: None,
                description: "Bolo".to_string(),
                price: 50.0,
            }],
            created_at: created_at.to_string(),
            deleted,
            total: None,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn counts_split_by_recency_and_status() {
        let orders = vec![
            order("P-1", OrderStatus::NovoPedido, "2025-01-09T10:00:00Z", false),
            order("P-2", OrderStatus::Aceito, "2024-12-20T10:00:00Z", false),
            order("P-3", OrderStatus::Entregue, "2025-01-08T10:00:00Z", false),
        ];
        let stats = compute_stats(&orders, now());
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.recent_orders, 2);
        assert_eq!(stats.pending_orders, 2);
    }

    #[test]
    fn deleted_orders_never_count() {
        let orders = vec![
            order("P-1", OrderStatus::NovoPedido, "2025-01-09T10:00:00Z", true),
            order("P-2", OrderStatus::Pronto, "2025-01-09T10:00:00Z", false),
        ];
        let stats = compute_stats(&orders, now());
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.recent_orders, 1);
        assert_eq!(stats.pending_orders, 0);
    }

    #[test]
    fn unparseable_created_at_is_not_recent() {
        let orders = vec![order("P-1", OrderStatus::NovoPedido, "", false)];
        let stats = compute_stats(&orders, now());
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.recent_orders, 0);
    }

    #[test]
    fn most_recent_orders_newest_first_capped() {
        let orders = vec![
            order("P-1", OrderStatus::NovoPedido, "2025-01-05T10:00:00Z", false),
            order("P-2", OrderStatus::NovoPedido, "2025-01-09T10:00:00Z", false),
            order("P-3", OrderStatus::NovoPedido, "2025-01-07T10:00:00Z", true),
            order("P-4", OrderStatus::NovoPedido, "2025-01-08T10:00:00Z", false),
        ];
        let recent = most_recent(&orders, 2);
        let numbers: Vec<String> = recent.into_iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec!["P-2", "P-4"]);
    }
}
