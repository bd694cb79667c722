//! Reusable dashboard widgets
//!
//! Common UI components shared across panels:
//! - Status badges (color-coded order status)
//! - Trend spans (growth indicators)
//! - The transient notice banner

pub mod notice_banner;
pub mod status_badge;
pub mod trend;

pub use notice_banner::NoticeBanner;
pub use status_badge::StatusBadge;
pub use trend::TrendSpan;
