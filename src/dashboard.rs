//! Dashboard shell
//!
//! Composes the catalog view-model, the notification center, and the static
//! overview lists (stat tiles, recent orders, top products) into one page
//! state. Owns the sidebar flag; everything else delegates to the owning
//! component.

use crate::catalog::CatalogViewModel;
use crate::notifications::NotificationCenter;
use crate::seed;
use crate::types::{Order, Product, StatCard, TopProduct};
use std::time::{Duration, Instant};

/// Complete page state behind the terminal UI
#[derive(Debug)]
pub struct DashboardState {
    /// Product catalog with search, sort, cart, and favorites
    pub catalog: CatalogViewModel,

    /// Bell popup state
    pub notifications: NotificationCenter,

    stats: Vec<StatCard>,
    recent_orders: Vec<Order>,
    top_products: Vec<TopProduct>,
    sidebar_open: bool,
}

impl DashboardState {
    /// Create a dashboard over the given products; everything else comes
    /// from the seeded fixtures
    pub fn new(products: Vec<Product>, notice_ttl: Duration) -> Self {
        Self {
            catalog: CatalogViewModel::with_notice_ttl(products, notice_ttl),
            notifications: NotificationCenter::new(seed::notifications()),
            stats: seed::stat_cards(),
            recent_orders: seed::recent_orders(),
            top_products: seed::top_products(),
            sidebar_open: true,
        }
    }

    /// Overview stat tiles
    pub fn stats(&self) -> &[StatCard] {
        &self.stats
    }

    /// Recent orders table rows
    pub fn recent_orders(&self) -> &[Order] {
        &self.recent_orders
    }

    /// Top products list rows
    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }

    /// Whether the sidebar is shown
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Flip the sidebar open/closed
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Advance time-dependent state (notice expiry)
    pub fn tick(&mut self, now: Instant) {
        self.catalog.tick(now);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(seed::products(), crate::notice::NoticeHost::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_composition() {
        let dashboard = DashboardState::default();
        assert_eq!(dashboard.catalog.products().len(), 4);
        assert_eq!(dashboard.notifications.len(), 3);
        assert_eq!(dashboard.stats().len(), 4);
        assert_eq!(dashboard.recent_orders().len(), 4);
        assert_eq!(dashboard.top_products().len(), 4);
    }

    #[test]
    fn test_sidebar_toggle_roundtrip() {
        let mut dashboard = DashboardState::default();
        assert!(dashboard.sidebar_open());

        dashboard.toggle_sidebar();
        assert!(!dashboard.sidebar_open());

        dashboard.toggle_sidebar();
        assert!(dashboard.sidebar_open());
    }

    #[test]
    fn test_tick_forwards_to_catalog() {
        let mut dashboard = DashboardState::default();
        let now = Instant::now();

        dashboard.catalog.add_to_cart(2, now);
        assert!(dashboard.catalog.notice().is_some());

        dashboard.tick(now + Duration::from_millis(3000));
        assert!(dashboard.catalog.notice().is_none());
    }
}
