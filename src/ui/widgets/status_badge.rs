//! Order status badge - color-coded status text

use crate::types::OrderStatus;
use crate::ui::colors::order_status_color;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Color-coded badge for an order status
pub struct StatusBadge {
    status: OrderStatus,
}

impl StatusBadge {
    /// Create a badge for the given status
    pub fn new(status: OrderStatus) -> Self {
        Self { status }
    }

    /// Render as a styled span
    pub fn render(&self) -> Span<'static> {
        Span::styled(
            format!(" {} ", self.status.label()),
            Style::default()
                .fg(order_status_color(self.status))
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_carries_label() {
        let badge = StatusBadge::new(OrderStatus::Shipped);
        assert_eq!(badge.render().content.trim(), "Shipped");
    }
}
