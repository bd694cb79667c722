//! Consistent color palette for the dashboard
//!
//! All panels use these constants so the page reads as one surface.

use crate::types::OrderStatus;
use ratatui::style::Color;

/// Color palette for dashboard elements
pub struct Palette;

impl Palette {
    // === Status colors ===

    /// Success notices, positive trends (Green)
    pub const SUCCESS: Color = Color::Green;

    /// Error notices (Red)
    pub const ERROR: Color = Color::Red;

    /// Discount badges, favorite marker (Red)
    pub const ACCENT: Color = Color::Red;

    // === UI elements ===

    /// Panel borders (Cyan)
    pub const BORDER: Color = Color::Cyan;

    /// Headers and labels (Yellow)
    pub const HEADER: Color = Color::Yellow;

    /// Secondary text: timestamps, struck-through list prices (DarkGray)
    pub const SECONDARY: Color = Color::DarkGray;

    /// Primary text (White)
    pub const TEXT: Color = Color::White;

    /// Selected row highlight (Cyan)
    pub const HIGHLIGHT: Color = Color::Cyan;
}

/// Badge color for an order status
pub fn order_status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Processing => Color::Blue,
        OrderStatus::Shipped => Color::Magenta,
        OrderStatus::Pending => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_colors_distinct() {
        let colors = [
            order_status_color(OrderStatus::Delivered),
            order_status_color(OrderStatus::Processing),
            order_status_color(OrderStatus::Shipped),
            order_status_color(OrderStatus::Pending),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
