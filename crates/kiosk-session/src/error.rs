//! Session-level errors: the taxonomy the presentation layer sees.
//!
//! Every variant maps to a user-visible notice and a retry path; none of
//! them terminates the session or leaves state half-mutated.

use thiserror::Error;

use kiosk_client::ServiceError;
use kiosk_core::CartError;

/// What can go wrong while the customer is ordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KioskError {
    /// A catalog load failed. The previous collection stays on screen;
    /// retry is a fresh user-triggered navigation, never automatic.
    #[error("catalog load failed: {0}")]
    Fetch(#[source] ServiceError),

    /// A cart rule refused the operation (out of stock).
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Checkout was requested with zero lines; no network call was made.
    #[error("cart is empty")]
    EmptyCart,

    /// The print submission failed after a valid checkout attempt. The
    /// cart and navigation are untouched; pressing PRINT again retries.
    #[error("receipt printing failed: {0}")]
    Print(#[source] ServiceError),

    /// An intent arrived on a screen with no matching selection context
    /// (e.g. picking a sub-category while not on the sub-category
    /// screen). The session redirects to the root screen instead of
    /// crashing.
    #[error("no {0} selected")]
    NoSelection(&'static str),

    /// The referenced product is not in the currently loaded catalog.
    #[error("product {0} is not on this screen")]
    UnknownProduct(i64),
}
