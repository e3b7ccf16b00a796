//! # kiosk-client: Backend Service Contracts + HTTP Clients
//!
//! The kiosk core treats the backend as two narrow collaborators:
//!
//! - [`CatalogService`]: the three scoped catalog listings
//! - [`PrintService`]: the single print-receipt round trip
//!
//! Both are async traits so the session layer can be driven by the real
//! HTTP clients in production and by in-memory fakes in tests. The wire
//! formats (snake_case field names, decimal-string prices, the
//! `Authorization: Token <bearer>` scheme) are private to this crate.
//!
//! Credential acquisition is out of scope: the login collaborator hands
//! the bearer string to the client constructors and owns its refresh.

pub mod catalog;
pub mod config;
pub mod error;
pub mod print;

pub use catalog::{CatalogService, HttpCatalogClient};
pub use config::ClientConfig;
pub use error::{ServiceError, ServiceResult};
pub use print::{HttpPrintClient, PrintService};
