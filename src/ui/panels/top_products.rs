//! Top products panel - best sellers with sales, revenue, and trend

use crate::types::TopProduct;
use crate::ui::colors::Palette;
use crate::ui::widgets::TrendSpan;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Best-sellers list
pub struct TopProductsPanel;

impl TopProductsPanel {
    /// Render one line per product
    pub fn render(&self, frame: &mut Frame, area: Rect, products: &[TopProduct]) {
        let items: Vec<ListItem> = products
            .iter()
            .map(|product| {
                let spans = vec![
                    Span::styled(
                        format!("{:<22}", product.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>4} sales  {:>8}  ", product.sales, product.revenue),
                        Style::default().fg(Palette::SECONDARY),
                    ),
                    TrendSpan::new(product.trend.clone()).render(),
                ];
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Top Products")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::BORDER)),
        );

        frame.render_widget(list, area);
    }
}
