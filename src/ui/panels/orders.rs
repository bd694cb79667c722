//! Recent orders panel - table of the latest orders

use crate::types::Order;
use crate::ui::colors::Palette;
use crate::ui::widgets::StatusBadge;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Recent orders table
pub struct OrdersPanel;

impl OrdersPanel {
    /// Render the orders table with a status badge per row
    pub fn render(&self, frame: &mut Frame, area: Rect, orders: &[Order]) {
        let header = Row::new(["Order ID", "Customer", "Product", "Date", "Status", "Amount"])
            .style(Style::default().fg(Palette::SECONDARY));

        let rows: Vec<Row> = orders
            .iter()
            .map(|order| {
                Row::new(vec![
                    Cell::from(order.id.clone())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(order.customer.clone()),
                    Cell::from(order.product.clone()),
                    Cell::from(order.date.clone()),
                    Cell::from(Line::from(StatusBadge::new(order.status).render())),
                    Cell::from(order.amount.clone())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(9),
            Constraint::Length(13),
            Constraint::Min(18),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Length(9),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(format!("Recent Orders ({})", orders.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::BORDER)),
        );

        frame.render_widget(table, area);
    }
}
