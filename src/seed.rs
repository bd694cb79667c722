//! Compiled-in mock fixtures for the dashboard
//!
//! Products, notifications, orders, top products, and stat tiles are
//! configuration-like constants, not computed data. The product list can be
//! replaced at startup by a JSON file via `--products`.

use crate::error::{Result, SellerhubError};
use crate::types::{Notification, Order, OrderStatus, Product, StatCard, TopProduct};
use std::path::Path;

/// Seeded product catalog
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Burger", 29.99, 10, "/burger.jpeg"),
        Product::new(2, "Pizza", 49.99, 15, "/pizza.jpeg"),
        Product::new(3, "fries", 19.99, 5, "/fries.jpeg"),
        Product::new(4, "sandwich", 99.99, 20, "/sandwich.jpeg"),
    ]
}

/// Seeded notification entries
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, "New order received!", "2 mins ago"),
        Notification::new(2, "Product review pending approval.", "1 hour ago"),
        Notification::new(3, "Low stock alert: Update inventory.", "3 hours ago"),
    ]
}

/// Recent orders table rows
pub fn recent_orders() -> Vec<Order> {
    vec![
        Order {
            id: "#12345".to_string(),
            customer: "John Doe".to_string(),
            product: "Premium Headphones".to_string(),
            date: "2024-10-28".to_string(),
            status: OrderStatus::Delivered,
            amount: "$299.99".to_string(),
        },
        Order {
            id: "#12346".to_string(),
            customer: "Alice Smith".to_string(),
            product: "Wireless Mouse".to_string(),
            date: "2024-10-28".to_string(),
            status: OrderStatus::Processing,
            amount: "$49.99".to_string(),
        },
        Order {
            id: "#12347".to_string(),
            customer: "Bob Johnson".to_string(),
            product: "Mechanical Keyboard".to_string(),
            date: "2024-10-27".to_string(),
            status: OrderStatus::Shipped,
            amount: "$159.99".to_string(),
        },
        Order {
            id: "#12348".to_string(),
            customer: "Emma Davis".to_string(),
            product: "USB-C Hub".to_string(),
            date: "2024-10-27".to_string(),
            status: OrderStatus::Pending,
            amount: "$79.99".to_string(),
        },
    ]
}

/// Top products list rows
pub fn top_products() -> Vec<TopProduct> {
    vec![
        TopProduct {
            name: "Premium Headphones".to_string(),
            sales: 124,
            revenue: "$37,192".to_string(),
            trend: "+12%".to_string(),
        },
        TopProduct {
            name: "Wireless Mouse".to_string(),
            sales: 98,
            revenue: "$4,899".to_string(),
            trend: "+8%".to_string(),
        },
        TopProduct {
            name: "Mechanical Keyboard".to_string(),
            sales: 87,
            revenue: "$13,919".to_string(),
            trend: "+15%".to_string(),
        },
        TopProduct {
            name: "USB-C Hub".to_string(),
            sales: 76,
            revenue: "$6,079".to_string(),
            trend: "+5%".to_string(),
        },
    ]
}

/// Overview stat tiles
pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Revenue".to_string(),
            value: "$12,875".to_string(),
            trend: "+12%".to_string(),
        },
        StatCard {
            label: "Orders".to_string(),
            value: "384".to_string(),
            trend: "+8%".to_string(),
        },
        StatCard {
            label: "Customers".to_string(),
            value: "1,482".to_string(),
            trend: "+24%".to_string(),
        },
        StatCard {
            label: "Rating".to_string(),
            value: "4.9".to_string(),
            trend: "+0.2".to_string(),
        },
    ]
}

/// Load a product list from a JSON file (the `--products` override)
pub fn products_from_file(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path).map_err(|source| SellerhubError::SeedRead {
        path: path.display().to_string(),
        source,
    })?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_product_ids_unique_and_discounts_in_range() {
        let products = products();
        let ids: HashSet<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
        assert!(products.iter().all(|p| p.discount <= 100));
        assert!(products.iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn test_notification_ids_unique() {
        let entries = notifications();
        let ids: HashSet<u32> = entries.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(recent_orders().len(), 4);
        assert_eq!(top_products().len(), 4);
        assert_eq!(stat_cards().len(), 4);
    }

    #[test]
    fn test_products_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"name":"Tea","price":4.5,"discount":0,"image_url":"/tea.jpeg"}}]"#
        )
        .unwrap();

        let products = products_from_file(file.path()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Tea");
        assert!(!products[0].is_favorite);
    }

    #[test]
    fn test_products_from_file_missing_path() {
        let err = products_from_file(Path::new("/nonexistent/products.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/products.json"));
    }

    #[test]
    fn test_products_from_file_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(products_from_file(file.path()).is_err());
    }
}
