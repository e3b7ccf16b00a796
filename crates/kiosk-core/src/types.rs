//! # Domain Types
//!
//! Core domain types for the kiosk ordering flow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  MainCategory   │   │   SubCategory   │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  main_category  │◄──│  sub_category   │       │
//! │  │  name           │fk │  id, name       │fk │  id, name       │       │
//! │  └─────────────────┘   │  image          │   │  price (Money)  │       │
//! │                        └─────────────────┘   │  stock, brand.. │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Receipt      │   │     Scope       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  items, total   │   │  fetch filter   │                             │
//! │  │  (outbound only)│   │  key per screen │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two category levels are a foreign-key relation, not ownership: a
//! `SubCategory` names its parent by id, and the catalog store resolves
//! the reference at render time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::paging::DisplayName;

// =============================================================================
// Categories
// =============================================================================

/// A top-level product grouping, fetched once at session start.
///
/// Immutable after fetch; discarded when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MainCategory {
    pub id: i64,
    pub name: String,
}

/// A second-level grouping belonging to exactly one [`MainCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubCategory {
    pub id: i64,
    pub name: String,

    /// Server-relative image path, if the backend has one.
    pub image: Option<String>,

    /// Parent category id. Must reference a fetched MainCategory when
    /// rendered; the store falls back to "Unknown" for dangling ids.
    pub main_category_id: i64,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: i64,

    /// Display name shown on the grid and the receipt.
    pub name: String,

    /// Unit price. Parsed from the backend's decimal string into exact
    /// centavos at the wire boundary.
    pub price: Money,

    pub kind: String,
    pub size: String,
    pub color: String,
    pub brand: String,
    pub description: String,

    /// Stock snapshot at fetch time. This is NOT a reservation: another
    /// register or a backend decrement can invalidate it at any moment.
    pub quantity_in_stock: i64,

    /// Server-relative image path, if the backend has one.
    pub image: Option<String>,

    /// Parent sub-category id.
    pub sub_category_id: i64,
}

impl Product {
    /// Whether the product can currently be added to the cart.
    ///
    /// Availability is derived from the stock snapshot, never stored as
    /// its own flag.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.quantity_in_stock > 0
    }
}

impl DisplayName for MainCategory {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for SubCategory {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for Product {
    fn display_name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One printed line on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

/// The outbound payload submitted to the print service.
///
/// Derived from the cart at checkout time and never stored; a retry
/// after a failed print rebuilds it from the still-intact cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    pub items: Vec<ReceiptItem>,
    pub total: Money,
}

// =============================================================================
// Scope
// =============================================================================

/// The filter key under which a catalog fetch is performed.
///
/// Every fetch is tagged with its scope so that a response arriving
/// after the user navigated away can be recognized as stale and
/// discarded instead of overwriting a newer screen's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Scope {
    /// All main categories (no filter).
    MainCategories,
    /// Sub-categories of one main category.
    SubCategories(i64),
    /// Products of one sub-category.
    Products(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64) -> Product {
        Product {
            id: 1,
            name: "Bolt 10mm".to_string(),
            price: Money::from_cents(500),
            kind: "Hex".to_string(),
            size: "10mm".to_string(),
            color: "Silver".to_string(),
            brand: "Generic".to_string(),
            description: String::new(),
            quantity_in_stock: stock,
            image: None,
            sub_category_id: 7,
        }
    }

    #[test]
    fn test_availability_derived_from_stock() {
        assert!(product(3).is_available());
        assert!(!product(0).is_available());
        assert!(!product(-1).is_available());
    }

    #[test]
    fn test_scope_equality() {
        assert_eq!(Scope::SubCategories(4), Scope::SubCategories(4));
        assert_ne!(Scope::SubCategories(4), Scope::Products(4));
        assert_ne!(Scope::SubCategories(4), Scope::SubCategories(5));
    }
}
