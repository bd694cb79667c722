//! Panel layout management
//!
//! Controls which main-column panels are shown and computes their vertical
//! constraints, compressing toward minimum heights on short terminals.

use ratatui::layout::Constraint;

/// Main-column panel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Stats,
    Orders,
    TopProducts,
    Catalog,
}

impl PanelId {
    /// All panel IDs in display order
    pub fn all() -> Vec<PanelId> {
        vec![
            PanelId::Stats,
            PanelId::Orders,
            PanelId::TopProducts,
            PanelId::Catalog,
        ]
    }

    /// Keyboard shortcut number (1-4)
    pub fn shortcut_key(&self) -> char {
        match self {
            PanelId::Stats => '1',
            PanelId::Orders => '2',
            PanelId::TopProducts => '3',
            PanelId::Catalog => '4',
        }
    }

    /// Panel name
    pub fn name(&self) -> &'static str {
        match self {
            PanelId::Stats => "Stats",
            PanelId::Orders => "Recent Orders",
            PanelId::TopProducts => "Top Products",
            PanelId::Catalog => "Products",
        }
    }

    /// Default height constraint for this panel
    pub fn default_height(&self) -> Constraint {
        match self {
            PanelId::Stats => Constraint::Length(4),
            PanelId::Orders => Constraint::Length(8),
            PanelId::TopProducts => Constraint::Length(6),
            PanelId::Catalog => Constraint::Min(10), // Catalog gets remaining space
        }
    }

    /// Minimum height for this panel
    pub fn min_height(&self) -> u16 {
        match self {
            PanelId::Stats => 3,
            PanelId::Orders => 5,
            PanelId::TopProducts => 4,
            PanelId::Catalog => 7,
        }
    }
}

/// Panel visibility flags
#[derive(Debug, Clone)]
pub struct PanelVisibility {
    pub stats: bool,
    pub orders: bool,
    pub top_products: bool,
    pub catalog: bool,
}

impl PanelVisibility {
    /// Create with all panels visible
    pub fn all_visible() -> Self {
        Self {
            stats: true,
            orders: true,
            top_products: true,
            catalog: true,
        }
    }

    /// Create with no panels visible
    pub fn none_visible() -> Self {
        Self {
            stats: false,
            orders: false,
            top_products: false,
            catalog: false,
        }
    }

    /// Get visibility for a specific panel
    pub fn is_visible(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Stats => self.stats,
            PanelId::Orders => self.orders,
            PanelId::TopProducts => self.top_products,
            PanelId::Catalog => self.catalog,
        }
    }

    /// Set visibility for a specific panel
    pub fn set_visible(&mut self, panel: PanelId, visible: bool) {
        match panel {
            PanelId::Stats => self.stats = visible,
            PanelId::Orders => self.orders = visible,
            PanelId::TopProducts => self.top_products = visible,
            PanelId::Catalog => self.catalog = visible,
        }
    }

    /// Toggle visibility for a specific panel
    pub fn toggle(&mut self, panel: PanelId) {
        let current = self.is_visible(panel);
        self.set_visible(panel, !current);
    }

    /// Count visible panels
    pub fn visible_count(&self) -> usize {
        PanelId::all()
            .iter()
            .filter(|p| self.is_visible(**p))
            .count()
    }

    /// List of visible panels in display order
    pub fn visible_panels(&self) -> Vec<PanelId> {
        PanelId::all()
            .into_iter()
            .filter(|p| self.is_visible(*p))
            .collect()
    }
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self::all_visible()
    }
}

/// Vertical constraints for the visible panels
///
/// Uses default heights while they fit, otherwise compresses toward minimum
/// heights and hands leftover space to the last panel.
pub fn layout_constraints(visibility: &PanelVisibility, available_height: u16) -> Vec<Constraint> {
    let visible = visibility.visible_panels();

    if visible.is_empty() {
        return vec![Constraint::Min(0)];
    }

    let total_default_height: u16 = visible
        .iter()
        .map(|p| match p.default_height() {
            Constraint::Length(h) => h,
            Constraint::Min(h) => h,
            _ => 10,
        })
        .sum();

    if total_default_height <= available_height {
        visible.iter().map(|p| p.default_height()).collect()
    } else {
        let min_heights: Vec<u16> = visible.iter().map(|p| p.min_height()).collect();
        let total_min: u16 = min_heights.iter().sum();

        if total_min >= available_height {
            min_heights.into_iter().map(Constraint::Length).collect()
        } else {
            let remaining = available_height - total_min;
            let extra_per_panel = remaining / (visible.len() as u16);

            min_heights
                .into_iter()
                .enumerate()
                .map(|(i, min_h)| {
                    if i == visible.len() - 1 {
                        // Last panel gets remaining space
                        Constraint::Min(min_h)
                    } else {
                        Constraint::Length(min_h + extra_per_panel)
                    }
                })
                .collect()
        }
    }
}
