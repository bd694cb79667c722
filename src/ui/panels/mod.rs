//! Dashboard panels
//!
//! Each panel renders one section of the page from state borrowed at draw
//! time; no panel owns view-model data.
//!
//! Current panels:
//! - Sidebar: navigation chrome
//! - Stats: overview tiles
//! - Orders: recent orders table
//! - Top Products: best sellers
//! - Catalog: searchable product grid
//! - Notifications: bell popup

pub mod catalog;
pub mod notifications;
pub mod orders;
pub mod sidebar;
pub mod stats;
pub mod top_products;

pub use catalog::CatalogPanel;
pub use notifications::NotificationsPanel;
pub use orders::OrdersPanel;
pub use sidebar::SidebarPanel;
pub use stats::StatsPanel;
pub use top_products::TopProductsPanel;
