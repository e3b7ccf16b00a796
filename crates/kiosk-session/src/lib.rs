//! # kiosk-session: The Ordering Session
//!
//! Wires [`kiosk_core`] (pure cart/search logic) and [`kiosk_client`]
//! (catalog + print services) into the customer-facing flow:
//!
//! - [`CatalogStore`] holds the fetched collections per scope
//! - [`Screen`] / [`ListControls`] form the navigation state machine
//! - [`KioskSession`] owns everything and handles every user intent,
//!   including the print-and-reset checkout
//!
//! The session is generic over the service traits; the test module in
//! `session.rs` drives complete ordering flows against in-memory fakes.

pub mod browse;
mod checkout;
pub mod error;
pub mod session;
pub mod store;

pub use browse::{ListControls, Screen};
pub use error::KioskError;
pub use session::KioskSession;
pub use store::{CatalogBatch, CatalogStore};
