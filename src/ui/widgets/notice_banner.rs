//! Notice banner - transient toast in the bottom-right corner

use crate::notice::{Notice, NoticeKind};
use crate::ui::colors::Palette;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Banner color for a notice kind
fn kind_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Palette::SUCCESS,
        NoticeKind::Error => Palette::ERROR,
    }
}

/// Icon for a notice kind
fn kind_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✗",
    }
}

/// Toast rendering for the single pending notice
pub struct NoticeBanner<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeBanner<'a> {
    /// Create a banner for the given notice
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    /// Render in the bottom-right corner of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 40u16.min(area.width);
        let height = 3u16;
        if area.height < height || width < 4 {
            return;
        }

        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 1);
        let banner_area = Rect::new(x, y, width, height);

        // Clear the background so the toast stays readable over panels
        frame.render_widget(Clear, banner_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(kind_color(self.notice.kind)));

        let text = format!("{} {}", kind_icon(self.notice.kind), self.notice.message);
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Palette::TEXT));

        frame.render_widget(paragraph, banner_area);
    }
}
