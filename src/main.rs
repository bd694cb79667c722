//! Sellerhub - Seller Dashboard Terminal UI
//!
//! Renders the seller dashboard and drives it from the keyboard:
//! - Stats, recent orders, and top products panels
//! - Product catalog with search, sort, cart, and favorites
//! - Notification bell with popup
//!
//! Usage:
//!   sellerhub [OPTIONS]
//!
//! Examples:
//!   sellerhub                          # Seeded mock data, default config
//!   sellerhub --config sellerhub.toml
//!   sellerhub --products catalog.json  # Load the catalog from a file
//!   sellerhub --tick 100               # Faster refresh (ms)

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use sellerhub::{
    seed,
    ui::{
        colors::Palette,
        layout_constraints,
        panels::{
            CatalogPanel, NotificationsPanel, OrdersPanel, SidebarPanel, StatsPanel,
            TopProductsPanel,
        },
        widgets::NoticeBanner,
        PanelId, PanelVisibility,
    },
    Config, DashboardState,
};
use std::{
    io,
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Dashboard CLI arguments
#[derive(Parser)]
#[command(name = "sellerhub")]
#[command(about = "Seller-facing terminal dashboard")]
#[command(version)]
struct Args {
    /// Config file path (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Product seed file (JSON array of products)
    #[arg(long)]
    products: Option<PathBuf>,

    /// Event poll interval in milliseconds (overrides config)
    #[arg(long)]
    tick: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    /// Shortcuts act on the page
    Normal,
    /// Keystrokes edit the search query
    Search,
}

/// Application state: view-models plus UI-only concerns (panel visibility,
/// selection, input mode)
struct App {
    dashboard: DashboardState,
    visibility: PanelVisibility,
    input_mode: InputMode,
    catalog_selected: usize,
    popup_selected: usize,
}

impl App {
    fn new(dashboard: DashboardState) -> Self {
        Self {
            dashboard,
            visibility: PanelVisibility::default(),
            input_mode: InputMode::Normal,
            catalog_selected: 0,
            popup_selected: 0,
        }
    }

    /// Selected row clamped to the current filtered list
    fn selection(&self) -> Option<usize> {
        let len = self.dashboard.catalog.filtered_products().len();
        if len == 0 {
            None
        } else {
            Some(self.catalog_selected.min(len - 1))
        }
    }

    /// Id of the product under the cursor
    fn selected_product_id(&self) -> Option<u32> {
        let filtered = self.dashboard.catalog.filtered_products();
        self.selection().map(|i| filtered[i].id)
    }

    /// Handle keyboard input; returns true to quit
    fn handle_key(&mut self, key: KeyCode, now: Instant) -> bool {
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => return self.handle_normal_key(key, now),
        }
        false
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                let mut query = self.dashboard.catalog.search_query().to_string();
                query.pop();
                self.dashboard.catalog.set_search_query(query);
            }
            KeyCode::Char(c) => {
                let mut query = self.dashboard.catalog.search_query().to_string();
                query.push(c);
                self.dashboard.catalog.set_search_query(query);
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode, now: Instant) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true, // Quit
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('m') => self.dashboard.toggle_sidebar(),
            KeyCode::Char('n') => {
                self.popup_selected = 0;
                self.dashboard.notifications.toggle_visibility();
            }
            KeyCode::Char('s') => {
                let next = self.dashboard.catalog.sort_key().next();
                self.dashboard.catalog.set_sort_key(next);
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('a') | KeyCode::Enter => {
                if let Some(id) = self.selected_product_id() {
                    self.dashboard.catalog.add_to_cart(id, now);
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.selected_product_id() {
                    self.dashboard.catalog.toggle_favorite(id);
                }
            }
            KeyCode::Char('d') => {
                if self.dashboard.notifications.is_visible() {
                    if let Some(entry) = self
                        .dashboard
                        .notifications
                        .entries()
                        .get(self.popup_selected)
                    {
                        let id = entry.id;
                        self.dashboard.notifications.remove(id);
                        self.popup_selected = self
                            .popup_selected
                            .min(self.dashboard.notifications.len().saturating_sub(1));
                    }
                }
            }
            KeyCode::Char('C') => {
                if self.dashboard.notifications.is_visible() {
                    self.dashboard.notifications.clear_all();
                    self.popup_selected = 0;
                }
            }
            KeyCode::Char('1') => self.visibility.toggle(PanelId::Stats),
            KeyCode::Char('2') => self.visibility.toggle(PanelId::Orders),
            KeyCode::Char('3') => self.visibility.toggle(PanelId::TopProducts),
            KeyCode::Char('4') => self.visibility.toggle(PanelId::Catalog),
            _ => {}
        }
        false
    }

    fn move_selection(&mut self, delta: i64) {
        if self.dashboard.notifications.is_visible() {
            let len = self.dashboard.notifications.len();
            if len > 0 {
                let next = self.popup_selected as i64 + delta;
                self.popup_selected = next.clamp(0, len as i64 - 1) as usize;
            }
            return;
        }

        let len = self.dashboard.catalog.filtered_products().len();
        if len > 0 {
            let current = self.selection().unwrap_or(0) as i64;
            self.catalog_selected = (current + delta).clamp(0, len as i64 - 1) as usize;
        }
    }

    /// Draw one frame
    fn render(&self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, main_chunks[0]);

        // Body: optional sidebar column plus the main panel column
        let body = main_chunks[1];
        let main_area = if self.dashboard.sidebar_open() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(22), Constraint::Min(1)])
                .split(body);
            SidebarPanel.render(frame, columns[0]);
            columns[1]
        } else {
            body
        };

        let constraints = layout_constraints(&self.visibility, main_area.height);
        let panel_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(main_area);

        let mut chunk_index = 0;
        if self.visibility.is_visible(PanelId::Stats) {
            StatsPanel.render(frame, panel_chunks[chunk_index], self.dashboard.stats());
            chunk_index += 1;
        }
        if self.visibility.is_visible(PanelId::Orders) {
            OrdersPanel.render(
                frame,
                panel_chunks[chunk_index],
                self.dashboard.recent_orders(),
            );
            chunk_index += 1;
        }
        if self.visibility.is_visible(PanelId::TopProducts) {
            TopProductsPanel.render(
                frame,
                panel_chunks[chunk_index],
                self.dashboard.top_products(),
            );
            chunk_index += 1;
        }
        if self.visibility.is_visible(PanelId::Catalog) {
            CatalogPanel.render(
                frame,
                panel_chunks[chunk_index],
                &self.dashboard.catalog,
                self.selection(),
                self.input_mode == InputMode::Search,
            );
        }

        if self.dashboard.notifications.is_visible() {
            NotificationsPanel.render(
                frame,
                main_area,
                &self.dashboard.notifications,
                self.popup_selected,
            );
        }

        if let Some(notice) = self.dashboard.catalog.notice() {
            let full = frame.area();
            NoticeBanner::new(notice).render(frame, full);
        }

        self.render_footer(frame, main_chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let bell = if self.dashboard.notifications.has_unread() {
            Span::styled(
                format!("Bell ● {}", self.dashboard.notifications.len()),
                Style::default()
                    .fg(Palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("Bell", Style::default().fg(Palette::SECONDARY))
        };

        let title = Line::from(vec![
            Span::styled(
                "Seller Hub Dashboard",
                Style::default()
                    .fg(Palette::HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  ·  "),
            bell,
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::BORDER)),
        );
        frame.render_widget(header, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let text = match self.input_mode {
            InputMode::Search => "typing edits the search query | Esc/Enter done".to_string(),
            InputMode::Normal => format!(
                "/ search | s sort | j/k select | a add to cart | f favorite | n bell | m sidebar | 1-4 panels | q quit | {} panels visible",
                self.visibility.visible_count()
            ),
        };
        let footer = Paragraph::new(text).style(Style::default().fg(Palette::SECONDARY));
        frame.render_widget(footer, area);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let tick = args.tick.map(Duration::from_millis).unwrap_or(config.tick());

    // Log to a file: the terminal itself belongs to the TUI
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sellerhub={}", args.log_level)));
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.ui.log_file)
        .with_context(|| format!("opening log file {}", config.ui.log_file))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .init();

    debug!("Dashboard v{} starting...", env!("CARGO_PKG_VERSION"));

    let products = match &args.products {
        Some(path) => seed::products_from_file(path)?,
        None => seed::products(),
    };
    let mut app = App::new(DashboardState::new(products, config.notice_ttl()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("Error: {:?}", err);
        return Err(err);
    }

    debug!("Dashboard exiting cleanly");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key.code, Instant::now()) {
                    return Ok(());
                }
            }
        }

        // Expire the pending notice between events
        app.dashboard.tick(Instant::now());
    }
}
