//! Core data types for the Sellerhub dashboard
//!
//! This module defines the data structures shared between the view-model
//! layer and the terminal UI: catalog products, notification entries, and
//! the static order/statistics records shown on the overview page.

use serde::{Deserialize, Serialize};

/// A product in the seller's catalog
///
/// Seeded at startup; only `is_favorite` changes at runtime. The `image_url`
/// is an opaque asset reference carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id (unique within the seeded list)
    pub id: u32,

    /// Display name, also the search target
    pub name: String,

    /// List price before any discount
    pub price: f64,

    /// Discount percent in [0, 100]
    pub discount: u8,

    /// Opaque asset reference
    pub image_url: String,

    /// Toggled in place by user action
    #[serde(default)]
    pub is_favorite: bool,
}

impl Product {
    /// Create a product with the favorite flag cleared
    pub fn new(id: u32, name: impl Into<String>, price: f64, discount: u8, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            discount,
            image_url: image_url.into(),
            is_favorite: false,
        }
    }
}

/// A notification entry shown in the bell popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique entry id
    pub id: u32,

    /// Message text
    pub message: String,

    /// Display label ("2 mins ago"); opaque to the dashboard
    pub timestamp: String,
}

impl Notification {
    /// Create a notification entry
    pub fn new(id: u32, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Fulfillment status of a recent order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    Processing,
    Shipped,
    Pending,
}

impl OrderStatus {
    /// Status label as shown in the orders table
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A row in the recent-orders table (static mock data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order reference ("#12345")
    pub id: String,

    /// Customer name
    pub customer: String,

    /// Ordered product name
    pub product: String,

    /// Order date as displayed ("2024-10-28")
    pub date: String,

    /// Fulfillment status
    pub status: OrderStatus,

    /// Formatted amount ("$299.99")
    pub amount: String,
}

/// A row in the top-products list (static mock data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,

    /// Units sold
    pub sales: u32,

    /// Formatted revenue ("$37,192")
    pub revenue: String,

    /// Formatted trend ("+12%")
    pub trend: String,
}

/// A statistics tile on the overview row (static mock data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,

    /// Formatted headline value ("$12,875")
    pub value: String,

    /// Formatted trend ("+12%")
    pub trend: String,
}
