//! Sidebar panel - navigation chrome

use crate::ui::colors::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Navigation entries shown in the sidebar
const NAV_ITEMS: [&str; 5] = ["Dashboard", "Products", "Orders", "Customers", "Settings"];

/// Sidebar with the static navigation list
pub struct SidebarPanel;

impl SidebarPanel {
    /// Render the sidebar
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                // The dashboard is the only page; mark it active
                let style = if i == 0 {
                    Style::default()
                        .fg(Palette::HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Palette::SECONDARY)
                };
                ListItem::new(Line::from(Span::styled(format!("  {}", label), style)))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Seller Hub")
                .title_style(Style::default().fg(Palette::HEADER).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::BORDER)),
        );

        frame.render_widget(list, area);
    }
}
