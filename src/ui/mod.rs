//! Terminal UI for the dashboard
//!
//! Pure presentation: panels and widgets render from the view-models in the
//! crate root; nothing here mutates state.

pub mod colors;
pub mod layout;
pub mod panels;
pub mod widgets;

pub use layout::{layout_constraints, PanelId, PanelVisibility};
