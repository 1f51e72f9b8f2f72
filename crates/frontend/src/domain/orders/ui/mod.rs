pub mod details;
pub mod list;

use contracts::domain::orders::OrderStatus;

/// Human-facing status label.
pub fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::NovoPedido => "Novo Pedido",
        OrderStatus::Aceito => "Aceito",
        OrderStatus::EmProducao => "Em Produção",
        OrderStatus::Pronto => "Pronto",
        OrderStatus::Entregue => "Entregue",
        OrderStatus::Cancelado => "Cancelado",
    }
}

/// Badge modifier class per lifecycle state.
pub fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::NovoPedido => "status-badge status-badge--new",
        OrderStatus::Aceito => "status-badge status-badge--accepted",
        OrderStatus::EmProducao => "status-badge status-badge--production",
        OrderStatus::Pronto => "status-badge status-badge--ready",
        OrderStatus::Entregue => "status-badge status-badge--delivered",
        OrderStatus::Cancelado => "status-badge status-badge--cancelled",
    }
}
