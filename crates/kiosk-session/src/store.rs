//! # Catalog Store
//!
//! Holds the fetched catalog collections, one per scope, and exposes
//! lookup by id.
//!
//! ## Replacement Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load(scope) succeeds ──► replace(batch) swaps THAT collection only    │
//! │  load(scope) fails    ──► nothing changes; the previous collection     │
//! │                           (if any) stays intact                        │
//! │  navigate back        ──► the abandoned scope's collection is cleared  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entities live here for the rest of the session (or until the next
//! fetch of the same scope replaces them); there is no other teardown.

use kiosk_core::{MainCategory, Product, Scope, SubCategory};

/// One successful fetch, tagged with the scope it was requested under.
///
/// The tag is what lets the session discard a stale response: by the
/// time a fetch resolves, the user may have navigated elsewhere, and an
/// unguarded write would overwrite the newer screen's catalog.
#[derive(Debug, Clone)]
pub enum CatalogBatch {
    MainCategories(Vec<MainCategory>),
    SubCategories {
        main_category_id: i64,
        items: Vec<SubCategory>,
    },
    Products {
        sub_category_id: i64,
        items: Vec<Product>,
    },
}

impl CatalogBatch {
    /// The scope this batch was fetched under.
    pub fn scope(&self) -> Scope {
        match self {
            CatalogBatch::MainCategories(_) => Scope::MainCategories,
            CatalogBatch::SubCategories {
                main_category_id, ..
            } => Scope::SubCategories(*main_category_id),
            CatalogBatch::Products {
                sub_category_id, ..
            } => Scope::Products(*sub_category_id),
        }
    }
}

/// In-memory catalog for the current session.
#[derive(Debug, Default)]
pub struct CatalogStore {
    main_categories: Vec<MainCategory>,
    sub_categories: Vec<SubCategory>,
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a fetched batch, replacing only that scope's collection.
    pub fn replace(&mut self, batch: CatalogBatch) {
        match batch {
            CatalogBatch::MainCategories(items) => self.main_categories = items,
            CatalogBatch::SubCategories { items, .. } => self.sub_categories = items,
            CatalogBatch::Products { items, .. } => self.products = items,
        }
    }

    /// Drops the sub-category collection (leaving their parent screen).
    pub fn clear_sub_categories(&mut self) {
        self.sub_categories.clear();
    }

    /// Drops the product collection (leaving the product screen).
    pub fn clear_products(&mut self) {
        self.products.clear();
    }

    pub fn main_categories(&self) -> &[MainCategory] {
        &self.main_categories
    }

    pub fn sub_categories(&self) -> &[SubCategory] {
        &self.sub_categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn main_category(&self, id: i64) -> Option<&MainCategory> {
        self.main_categories.iter().find(|c| c.id == id)
    }

    pub fn sub_category(&self, id: i64) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Name for a screen heading. A sub-category whose parent id does
    /// not resolve renders as "Unknown" rather than failing the screen.
    pub fn main_category_name(&self, id: i64) -> &str {
        self.main_category(id).map_or("Unknown", |c| c.name.as_str())
    }
}
