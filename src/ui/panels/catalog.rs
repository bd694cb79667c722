//! Catalog panel - searchable, sortable product grid with cart actions

use crate::catalog::CatalogViewModel;
use crate::ui::colors::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Product catalog with the search/sort bar
pub struct CatalogPanel;

impl CatalogPanel {
    /// Render the search bar and the derived product list
    ///
    /// `selected` indexes into the filtered list; `searching` shows the
    /// input cursor in the search bar.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        catalog: &CatalogViewModel,
        selected: Option<usize>,
        searching: bool,
    ) {
        // Derive the display list exactly once per frame
        let filtered = catalog.filtered_products();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        self.render_search_bar(frame, chunks[0], catalog, searching);

        let header = Row::new(["", "Name", "List", "Price", "Discount"])
            .style(Style::default().fg(Palette::SECONDARY));

        let rows: Vec<Row> = if filtered.is_empty() {
            vec![Row::new(vec![
                Cell::from(""),
                Cell::from(Span::styled(
                    "No products match",
                    Style::default()
                        .fg(Palette::SECONDARY)
                        .add_modifier(Modifier::ITALIC),
                )),
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
            ])]
        } else {
            filtered
                .iter()
                .enumerate()
                .map(|(i, product)| {
                    let favorite = if product.is_favorite {
                        Span::styled("♥", Style::default().fg(Palette::ACCENT))
                    } else {
                        Span::styled("♡", Style::default().fg(Palette::SECONDARY))
                    };

                    let list_price = if product.discount > 0 {
                        Span::styled(
                            format!("${:.2}", product.price),
                            Style::default()
                                .fg(Palette::SECONDARY)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        Span::raw("")
                    };

                    let discount = if product.discount > 0 {
                        Span::styled(
                            format!("{}% OFF", product.discount),
                            Style::default()
                                .fg(Palette::ACCENT)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::raw("")
                    };

                    let row = Row::new(vec![
                        Cell::from(Line::from(favorite)),
                        Cell::from(product.name.clone()),
                        Cell::from(Line::from(list_price)),
                        Cell::from(Span::styled(
                            format!("${}", CatalogViewModel::discounted_price(product)),
                            Style::default()
                                .fg(Palette::TEXT)
                                .add_modifier(Modifier::BOLD),
                        )),
                        Cell::from(Line::from(discount)),
                    ]);

                    if selected == Some(i) {
                        row.style(
                            Style::default()
                                .bg(Palette::HIGHLIGHT)
                                .fg(ratatui::style::Color::Black),
                        )
                    } else {
                        row
                    }
                })
                .collect()
        };

        let widths = [
            Constraint::Length(2),
            Constraint::Min(14),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
        ];

        let title = format!(
            "Products ({} shown · cart {})",
            filtered.len(),
            catalog.cart_len()
        );
        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::BORDER)),
        );

        frame.render_widget(table, chunks[1]);
    }

    fn render_search_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        catalog: &CatalogViewModel,
        searching: bool,
    ) {
        let cursor = if searching { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Palette::SECONDARY)),
            Span::styled(
                format!("{}{}", catalog.search_query(), cursor),
                Style::default().fg(Palette::TEXT),
            ),
            Span::styled("   Sort: ", Style::default().fg(Palette::SECONDARY)),
            Span::styled(
                catalog.sort_key().label(),
                Style::default().fg(Palette::HEADER),
            ),
        ]);

        let border_color = if searching {
            Palette::HIGHLIGHT
        } else {
            Palette::BORDER
        };
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .title("Featured Products")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(paragraph, area);
    }
}
