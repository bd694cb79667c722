//! Stats panel - overview tiles (Revenue, Orders, Customers, Rating)

use crate::types::StatCard;
use crate::ui::colors::Palette;
use crate::ui::widgets::TrendSpan;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Row of statistics tiles
pub struct StatsPanel;

impl StatsPanel {
    /// Render one bordered tile per stat card, split evenly
    pub fn render(&self, frame: &mut Frame, area: Rect, stats: &[StatCard]) {
        if stats.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = stats
            .iter()
            .map(|_| Constraint::Ratio(1, stats.len() as u32))
            .collect();
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (stat, tile) in stats.iter().zip(tiles.iter()) {
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        stat.value.clone(),
                        Style::default()
                            .fg(Palette::TEXT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    TrendSpan::new(stat.trend.clone()).render(),
                ]),
            ];

            let paragraph = Paragraph::new(lines).block(
                Block::default()
                    .title(stat.label.clone())
                    .title_style(Style::default().fg(Palette::HEADER))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Palette::BORDER)),
            );
            frame.render_widget(paragraph, *tile);
        }
    }
}
