//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  └── CartError        - Cart rule violations                           │
//! │                                                                         │
//! │  kiosk-client errors (separate crate)                                  │
//! │  └── ServiceError     - Transport / status / decode failures           │
//! │                                                                         │
//! │  kiosk-session errors (separate crate)                                 │
//! │  └── KioskError       - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: CartError ─┐                                                     │
//! │                   ├──► KioskError ──► user-visible notice              │
//! │    ServiceError ──┘                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable: the user retries by repeating the
//! triggering action, and no operation leaves state partially mutated.

use thiserror::Error;

/// Cart rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Add was refused because the stock snapshot says zero units.
    ///
    /// The UI disables the add button for unavailable products, but the
    /// cart re-validates anyway: it must hold its invariants no matter
    /// what the presentation layer forwarded.
    #[error("{name} is out of stock")]
    OutOfStock { product_id: i64, name: String },
}
