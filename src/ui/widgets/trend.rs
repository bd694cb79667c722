//! Trend span - formatted growth indicator

use crate::ui::colors::Palette;
use ratatui::{style::Style, text::Span};

/// Upward trend indicator ("▲ +12%")
pub struct TrendSpan {
    trend: String,
}

impl TrendSpan {
    /// Create a trend span from a formatted trend string
    pub fn new(trend: impl Into<String>) -> Self {
        Self {
            trend: trend.into(),
        }
    }

    /// Render as a styled span
    pub fn render(&self) -> Span<'static> {
        Span::styled(
            format!("▲ {}", self.trend),
            Style::default().fg(Palette::SUCCESS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_prefixed_with_arrow() {
        let span = TrendSpan::new("+12%").render();
        assert_eq!(span.content, "▲ +12%");
    }
}
