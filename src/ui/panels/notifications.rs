//! Notification popup - bell dropdown with dismiss/clear actions

use crate::notifications::NotificationCenter;
use crate::ui::colors::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Popup width in columns
const POPUP_WIDTH: u16 = 44;

/// Bell popup listing notification entries
pub struct NotificationsPanel;

impl NotificationsPanel {
    /// Render the popup anchored to the top-right of `area`
    ///
    /// `selected` indexes into the entry list for the dismiss action.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        center: &NotificationCenter,
        selected: usize,
    ) {
        if area.height < 5 || area.width < 10 {
            return;
        }
        let width = POPUP_WIDTH.min(area.width);
        let height = (center.len() as u16 * 2 + 3).clamp(4, area.height - 1);
        let x = area.x + area.width.saturating_sub(width + 1);
        let popup = Rect::new(x, area.y + 1, width, height);

        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = if center.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No new notifications",
                Style::default()
                    .fg(Palette::SECONDARY)
                    .add_modifier(Modifier::ITALIC),
            )))]
        } else {
            center
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let message_style = if i == selected {
                        Style::default()
                            .fg(Palette::HIGHLIGHT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Palette::TEXT)
                    };
                    ListItem::new(vec![
                        Line::from(Span::styled(entry.message.clone(), message_style)),
                        Line::from(Span::styled(
                            format!("  {}", entry.timestamp),
                            Style::default().fg(Palette::SECONDARY),
                        )),
                    ])
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .title(format!("Notifications ({})", center.len()))
                .title_bottom(Line::from("d dismiss · C clear all").right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::BORDER)),
        );

        frame.render_widget(list, popup);
    }
}
