//! Product catalog view-model
//!
//! Owns the product list, the cart, the search query, and the sort key;
//! derives the filtered/sorted display list as a pure function and exposes
//! the add-to-cart and toggle-favorite commands. Confirmation messages are
//! emitted through the embedded [`NoticeHost`].
//!
//! All operations are total: ids originate from rendered rows, so a missing
//! id is a defensive no-op rather than an error.

use crate::notice::{Notice, NoticeHost};
use crate::types::Product;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Sort key for the catalog display list
///
/// The wire form is the kebab-case key used by the original sort selector;
/// unknown keys fall back to [`SortKey::Featured`] (insertion order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Original insertion order, no reordering
    #[default]
    Featured,
    /// Ascending by list price (pre-discount)
    PriceLow,
    /// Descending by list price (pre-discount)
    PriceHigh,
    /// Descending by discount percent
    Discount,
}

impl SortKey {
    /// All keys in selector order
    pub fn all() -> [SortKey; 4] {
        [
            SortKey::Featured,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Discount,
        ]
    }

    /// Parse a selector key; unknown strings fall back to `Featured`
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "discount" => SortKey::Discount,
            _ => SortKey::Featured,
        }
    }

    /// The kebab-case selector key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Discount => "discount",
        }
    }

    /// Human-readable label for the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Discount => "Biggest Discount",
        }
    }

    /// Next key in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            SortKey::Featured => SortKey::PriceLow,
            SortKey::PriceLow => SortKey::PriceHigh,
            SortKey::PriceHigh => SortKey::Discount,
            SortKey::Discount => SortKey::Featured,
        }
    }
}

/// Catalog state plus the commands and derivations operating on it
#[derive(Debug)]
pub struct CatalogViewModel {
    products: Vec<Product>,
    cart: Vec<Product>,
    search_query: String,
    sort_key: SortKey,
    notice: NoticeHost,
}

impl CatalogViewModel {
    /// Create a view-model over the given products with the default
    /// 3-second notice window
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_notice_ttl(products, NoticeHost::DEFAULT_TTL)
    }

    /// Create a view-model with a custom notice window
    pub fn with_notice_ttl(products: Vec<Product>, notice_ttl: Duration) -> Self {
        Self {
            products,
            cart: Vec::new(),
            search_query: String::new(),
            sort_key: SortKey::default(),
            notice: NoticeHost::new(notice_ttl),
        }
    }

    /// All products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Cart contents in append order (snapshots, duplicates allowed)
    pub fn cart(&self) -> &[Product] {
        &self.cart
    }

    /// Number of cart entries
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    /// The active search query
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replace the search query; empty matches all products
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// The active sort key
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Replace the sort key
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Append a snapshot of the matching product to the cart and show a
    /// confirmation notice; missing id is a no-op
    pub fn add_to_cart(&mut self, id: u32, now: Instant) {
        let Some(product) = self.products.iter().find(|p| p.id == id) else {
            debug!(id, "add_to_cart ignored: unknown product id");
            return;
        };
        let snapshot = product.clone();
        let message = format!("{} added to cart", snapshot.name);
        self.cart.push(snapshot);
        self.notice.show(Notice::success(message), now);
    }

    /// Flip the favorite flag on the matching product; missing id is a
    /// no-op, the cart is untouched
    pub fn toggle_favorite(&mut self, id: u32) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.is_favorite = !product.is_favorite;
        }
    }

    /// Filter by case-insensitive name substring, then stable-sort by the
    /// active key
    ///
    /// Pure derivation over current state, recomputed on every call.
    pub fn filtered_products(&self) -> Vec<&Product> {
        let query = self.search_query.to_lowercase();
        let mut items: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect();

        match self.sort_key {
            SortKey::Featured => {}
            SortKey::PriceLow => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceHigh => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Discount => items.sort_by(|a, b| b.discount.cmp(&a.discount)),
        }

        items
    }

    /// List price reduced by the discount percent, formatted with exactly
    /// two fraction digits
    pub fn discounted_price(product: &Product) -> String {
        if product.discount > 0 {
            let discounted = product.price * f64::from(100 - u32::from(product.discount)) / 100.0;
            format!("{:.2}", discounted)
        } else {
            format!("{:.2}", product.price)
        }
    }

    /// The currently visible notice, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.current()
    }

    /// Expire the pending notice once its window has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.notice.tick(now);
    }
}
