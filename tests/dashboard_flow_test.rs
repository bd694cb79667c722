//! End-to-end scenarios through the dashboard shell
//!
//! Exercises the seeded page the way the UI does: search, sort, cart,
//! favorites, the notice lifecycle, and the notification popup.

use sellerhub::catalog::{CatalogViewModel, SortKey};
use sellerhub::dashboard::DashboardState;
use sellerhub::notice::NoticeKind;
use sellerhub::types::Product;
use std::time::{Duration, Instant};

#[test]
fn test_seeded_discount_scenario() {
    let dashboard = DashboardState::default();

    let burger = &dashboard.catalog.products()[0];
    assert_eq!(burger.name, "Burger");
    assert_eq!(CatalogViewModel::discounted_price(burger), "26.99");

    let mut dashboard = dashboard;
    dashboard.catalog.set_sort_key(SortKey::Discount);
    let names: Vec<String> = dashboard
        .catalog
        .filtered_products()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, vec!["sandwich", "Pizza", "Burger", "fries"]);
}

#[test]
fn test_add_to_cart_notice_lifecycle() {
    let mut dashboard = DashboardState::default();
    let now = Instant::now();

    dashboard.catalog.add_to_cart(1, now);

    let notice = dashboard.catalog.notice().expect("notice visible");
    assert_eq!(notice.message, "Burger added to cart");
    assert_eq!(notice.kind, NoticeKind::Success);

    // Still visible just before the window closes
    dashboard.tick(now + Duration::from_millis(2999));
    assert!(dashboard.catalog.notice().is_some());

    dashboard.tick(now + Duration::from_millis(3000));
    assert!(dashboard.catalog.notice().is_none());
}

#[test]
fn test_notice_replacement_cancels_earlier_expiry() {
    let mut dashboard = DashboardState::default();
    let now = Instant::now();

    dashboard.catalog.add_to_cart(1, now);
    dashboard.catalog.add_to_cart(2, now + Duration::from_secs(2));

    // The first notice's deadline passes; the second must survive it
    dashboard.tick(now + Duration::from_millis(3500));
    let notice = dashboard.catalog.notice().expect("second notice visible");
    assert_eq!(notice.message, "Pizza added to cart");

    dashboard.tick(now + Duration::from_millis(5000));
    assert!(dashboard.catalog.notice().is_none());
}

#[test]
fn test_search_then_sort_then_cart_flow() {
    let mut dashboard = DashboardState::default();
    let now = Instant::now();

    dashboard.catalog.set_search_query("S");
    dashboard.catalog.set_sort_key(SortKey::PriceLow);

    let visible: Vec<String> = dashboard
        .catalog
        .filtered_products()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(visible, vec!["fries", "sandwich"]);

    let id = dashboard.catalog.filtered_products()[0].id;
    dashboard.catalog.add_to_cart(id, now);
    dashboard.catalog.add_to_cart(id, now);

    assert_eq!(dashboard.catalog.cart_len(), 2);
    assert!(dashboard.catalog.cart().iter().all(|p| p.name == "fries"));
}

#[test]
fn test_favorite_survives_filtering() {
    let mut dashboard = DashboardState::default();

    dashboard.catalog.toggle_favorite(4);
    dashboard.catalog.set_search_query("sand");

    let filtered = dashboard.catalog.filtered_products();
    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].is_favorite);

    dashboard.catalog.set_search_query("");
    assert_eq!(
        dashboard
            .catalog
            .products()
            .iter()
            .filter(|p| p.is_favorite)
            .count(),
        1
    );
}

#[test]
fn test_notification_panel_scenario() {
    let mut dashboard = DashboardState::default();
    assert_eq!(dashboard.notifications.len(), 3);
    assert!(dashboard.notifications.has_unread());

    dashboard.notifications.remove(2);
    let ids: Vec<u32> = dashboard
        .notifications
        .entries()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    dashboard.notifications.clear_all();
    assert_eq!(dashboard.notifications.len(), 0);
    assert!(!dashboard.notifications.has_unread());
}

#[test]
fn test_custom_notice_window() {
    let products = vec![Product::new(1, "Mug", 12.0, 0, "/mug.jpeg")];
    let mut dashboard = DashboardState::new(products, Duration::from_millis(1000));
    let now = Instant::now();

    dashboard.catalog.add_to_cart(1, now);
    dashboard.tick(now + Duration::from_millis(999));
    assert!(dashboard.catalog.notice().is_some());

    dashboard.tick(now + Duration::from_millis(1000));
    assert!(dashboard.catalog.notice().is_none());
}

#[test]
fn test_rapid_interaction_keeps_state_consistent() {
    let mut dashboard = DashboardState::default();
    let now = Instant::now();

    for _ in 0..50 {
        dashboard.catalog.toggle_favorite(1);
        dashboard.catalog.add_to_cart(3, now);
        dashboard.notifications.toggle_visibility();
    }

    assert_eq!(dashboard.catalog.cart_len(), 50);
    assert!(!dashboard.catalog.products()[0].is_favorite);
    assert!(!dashboard.notifications.is_visible());

    let order: Vec<u32> = dashboard.catalog.products().iter().map(|p| p.id).collect();
    assert_eq!(order, vec![1, 2, 3, 4]);
}
