//! # kiosk-core: Pure Business Logic for the Kiosk Ordering Core
//!
//! This crate is the **heart** of the kiosk. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kiosk Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (kiosk front-end)                 │   │
//! │  │   Category grid ──► Product grid ──► Cart modal ──► Feedback   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents / state snapshots              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  kiosk-session (orchestration)                  │   │
//! │  │   KioskSession, CatalogStore, Screen, checkout                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  paging   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ paginate  │  │   │
//! │  │   │ Categories│  │  centavos │  │ CartLine  │  │  search   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are centavos (i64), never floats
//! 4. **Explicit Errors**: typed enums, never strings or panics

pub mod cart;
pub mod error;
pub mod money;
pub mod paging;
pub mod types;

// Re-exports so users can do `use kiosk_core::Cart` instead of
// `use kiosk_core::cart::Cart`
pub use cart::{Cart, CartLine};
pub use error::CartError;
pub use money::Money;
pub use paging::{paginate, DisplayName, Page};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sub-categories shown per page on the browse screen.
pub const SUB_CATEGORY_PAGE_SIZE: usize = 10;

/// Products shown per page on the product grid.
pub const PRODUCT_PAGE_SIZE: usize = 8;
