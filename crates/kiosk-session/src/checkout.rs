//! # Checkout Orchestrator
//!
//! Validates the cart, builds the receipt snapshot, and submits it to
//! the print service.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRINT pressed                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart empty? ──yes──► EmptyCart (no network call)                      │
//! │       │no                                                               │
//! │       ▼                                                                 │
//! │  Receipt snapshot from cart                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit_receipt ──err──► Print(..): cart + overlay + screen untouched  │
//! │       │ok                                                               │
//! │       ▼                                                                 │
//! │  session clears cart, closes overlay, navigates to Feedback            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every submission that reaches the server prints one real receipt;
//! there is no deduplication. Re-entry while a submission is in flight
//! is prevented structurally: the session method takes `&mut self`, so a
//! second checkout cannot start until the first has resolved.

use tracing::{info, warn};

use kiosk_client::PrintService;
use kiosk_core::{Cart, Receipt};

use crate::error::KioskError;

/// Runs the validation + submission half of checkout.
///
/// On success returns the receipt that was printed; the caller applies
/// the state transitions (clear cart, close overlay, go to feedback).
/// On any error the cart has not been touched.
pub(crate) async fn submit<P: PrintService>(
    cart: &Cart,
    printer: &P,
) -> Result<Receipt, KioskError> {
    if cart.is_empty() {
        warn!("checkout refused: cart is empty");
        return Err(KioskError::EmptyCart);
    }

    let receipt = cart.to_receipt();

    match printer.submit_receipt(&receipt).await {
        Ok(()) => {
            info!(items = receipt.items.len(), total = %receipt.total, "receipt printed");
            Ok(receipt)
        }
        Err(err) => {
            warn!(error = %err, "receipt submission failed; cart left intact");
            Err(KioskError::Print(err))
        }
    }
}
