//! Sellerhub - Seller-Facing Terminal Dashboard
//!
//! A single-page seller dashboard for the terminal: revenue statistics,
//! recent orders, top products, a notification popup, and a product catalog
//! with search, sort, cart, and favorites. All data is mock/in-memory.
//!
//! # Architecture
//!
//! The system is organized into two layers:
//! - **View-models**: render-independent state plus pure derivations and
//!   mutation commands ([`catalog`], [`notifications`], [`notice`],
//!   composed by [`dashboard`])
//! - **UI**: ratatui panels and widgets that borrow view-model state at
//!   draw time ([`ui`])
//!
//! # Example
//!
//! ```
//! use sellerhub::catalog::SortKey;
//! use sellerhub::dashboard::DashboardState;
//! use std::time::Instant;
//!
//! let mut dashboard = DashboardState::default();
//! dashboard.catalog.set_search_query("pi");
//! dashboard.catalog.set_sort_key(SortKey::Discount);
//!
//! let visible = dashboard.catalog.filtered_products();
//! assert_eq!(visible[0].name, "Pizza");
//!
//! let id = visible[0].id;
//! dashboard.catalog.add_to_cart(id, Instant::now());
//! assert_eq!(dashboard.catalog.cart_len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod notice;
pub mod notifications;
pub mod seed;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use catalog::{CatalogViewModel, SortKey};
pub use config::Config;
pub use dashboard::DashboardState;
pub use error::{Result, SellerhubError};
pub use notice::{Notice, NoticeHost, NoticeKind};
pub use notifications::NotificationCenter;
pub use types::{Notification, Order, OrderStatus, Product, StatCard, TopProduct};
