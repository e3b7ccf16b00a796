//! # Browse State
//!
//! The navigation state machine and the per-screen list controls.
//!
//! ## Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   RootCategories ──selectCategory──► SubCategories(main)               │
//! │         ▲                                │         ▲                    │
//! │         │ back                           │         │ back               │
//! │         │              selectSubCategory │         │                    │
//! │         │                                ▼         │                    │
//! │         │                        Products(main, sub)                    │
//! │         │                                                               │
//! │   Feedback ◄──────── checkout success (from any cart overlay)          │
//! │         │                                                               │
//! │         └──────────────► RootCategories (tap to start over)            │
//! │                                                                         │
//! │   Cart overlay: orthogonal open/close flag on SubCategories and        │
//! │   Products; closing returns to the same screen, opening never          │
//! │   triggers a fetch.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The selection context travels inside the variant: `Products` carries
//! the main-category id forward so that `back` can return to the right
//! sub-category screen without re-deriving it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use kiosk_core::Scope;

// =============================================================================
// Screen
// =============================================================================

/// Which screen the customer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "screen")]
pub enum Screen {
    /// The landing grid of main categories.
    RootCategories,

    /// Sub-categories of one chosen main category.
    SubCategories { main_category_id: i64 },

    /// Product grid of one chosen sub-category. Keeps the main-category
    /// id so `back` can restore the previous screen's context.
    Products {
        main_category_id: i64,
        sub_category_id: i64,
    },

    /// Post-purchase feedback screen shown after a successful print.
    Feedback,
}

impl Screen {
    /// The catalog scope this screen shows, if it shows one.
    pub fn scope(&self) -> Option<Scope> {
        match self {
            Screen::RootCategories => Some(Scope::MainCategories),
            Screen::SubCategories { main_category_id } => {
                Some(Scope::SubCategories(*main_category_id))
            }
            Screen::Products {
                sub_category_id, ..
            } => Some(Scope::Products(*sub_category_id)),
            Screen::Feedback => None,
        }
    }

    /// Whether the cart affordance exists on this screen. The landing
    /// and feedback screens have none.
    pub fn has_cart(&self) -> bool {
        matches!(
            self,
            Screen::SubCategories { .. } | Screen::Products { .. }
        )
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::RootCategories
    }
}

// =============================================================================
// List Controls
// =============================================================================

/// Search query and current page for the screen's list.
///
/// Created fresh on every screen entry, so no query or page position
/// leaks from one screen to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListControls {
    query: String,
    page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        ListControls::new()
    }
}

impl ListControls {
    pub fn new() -> Self {
        ListControls {
            query: String::new(),
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changes the query. Always resets to page 1: what the customer
    /// sees after typing must be the first page of the new result set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Advances one page, clamped to `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Goes back one page, clamped to 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_scopes() {
        assert_eq!(
            Screen::RootCategories.scope(),
            Some(Scope::MainCategories)
        );
        assert_eq!(
            Screen::SubCategories { main_category_id: 3 }.scope(),
            Some(Scope::SubCategories(3))
        );
        assert_eq!(
            Screen::Products {
                main_category_id: 3,
                sub_category_id: 8
            }
            .scope(),
            Some(Scope::Products(8))
        );
        assert_eq!(Screen::Feedback.scope(), None);
    }

    #[test]
    fn test_cart_affordance_per_screen() {
        assert!(!Screen::RootCategories.has_cart());
        assert!(Screen::SubCategories { main_category_id: 1 }.has_cart());
        assert!(Screen::Products {
            main_category_id: 1,
            sub_category_id: 2
        }
        .has_cart());
        assert!(!Screen::Feedback.has_cart());
    }

    #[test]
    fn test_set_query_resets_page() {
        let mut controls = ListControls::new();
        controls.next_page(5);
        controls.next_page(5);
        assert_eq!(controls.page(), 3);

        controls.set_query("bolt");
        assert_eq!(controls.page(), 1);
        assert_eq!(controls.query(), "bolt");

        // Even re-entering the same query snaps back to page 1.
        controls.next_page(5);
        controls.set_query("bolt");
        assert_eq!(controls.page(), 1);
    }

    #[test]
    fn test_paging_clamps() {
        let mut controls = ListControls::new();
        controls.prev_page();
        assert_eq!(controls.page(), 1);

        controls.next_page(2);
        controls.next_page(2);
        controls.next_page(2);
        assert_eq!(controls.page(), 2);

        // No pages at all: stuck at 1.
        let mut empty = ListControls::new();
        empty.next_page(0);
        assert_eq!(empty.page(), 1);
    }
}
