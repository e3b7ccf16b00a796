//! # Print Service
//!
//! Contract and HTTP implementation for receipt printing.
//!
//! This is the only call in the system with an external side effect:
//! every submission that reaches the server prints one physical receipt.
//! There is no deduplication: a retry after a reported failure is a new
//! print request, which is exactly what the cashier workflow expects.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kiosk_core::{Money, Receipt};

use crate::config::ClientConfig;
use crate::error::{ServiceError, ServiceResult};

/// Submits a receipt to the external printer.
#[async_trait]
pub trait PrintService: Send + Sync {
    /// One blocking round trip, no retries. `Ok(())` means the server
    /// confirmed the print; any error means the caller's cart must stay
    /// untouched.
    async fn submit_receipt(&self, receipt: &Receipt) -> ServiceResult<()>;
}

// =============================================================================
// Wire DTOs
// =============================================================================

/// Money on the print wire is a two-decimal string (`"18.00"`), matching
/// what the backend's receipt template expects. Formatting happens only
/// here, at the boundary; arithmetic stays in centavos.
fn wire_amount(m: Money) -> String {
    format!("{}.{:02}", m.major(), m.minor())
}

#[derive(Debug, Serialize)]
struct PrintItemDto {
    name: String,
    quantity: i64,
    price: String,
}

#[derive(Debug, Serialize)]
struct PrintRequestDto {
    items: Vec<PrintItemDto>,
    total: String,
}

impl From<&Receipt> for PrintRequestDto {
    fn from(receipt: &Receipt) -> Self {
        PrintRequestDto {
            items: receipt
                .items
                .iter()
                .map(|item| PrintItemDto {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    price: wire_amount(item.price),
                })
                .collect(),
            total: wire_amount(receipt.total),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PrintResponseDto {
    success: bool,
    message: Option<String>,
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Print client against the backend REST API.
pub struct HttpPrintClient {
    http: reqwest::Client,
    base_url: String,
    bearer: String,
}

impl HttpPrintClient {
    pub fn new(config: &ClientConfig, bearer: impl Into<String>) -> ServiceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::transport(&config.base_url, e))?;
        Ok(HttpPrintClient {
            http,
            base_url: config.base_url.clone(),
            bearer: bearer.into(),
        })
    }
}

#[async_trait]
impl PrintService for HttpPrintClient {
    async fn submit_receipt(&self, receipt: &Receipt) -> ServiceResult<()> {
        let endpoint = "/api/print-receipt/";
        let url = format!("{}{endpoint}", self.base_url);
        debug!(items = receipt.items.len(), total = %receipt.total, "submitting receipt");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Token {}", self.bearer))
            .json(&PrintRequestDto::from(receipt))
            .send()
            .await
            .map_err(|e| ServiceError::transport(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body: PrintResponseDto = response
            .json()
            .await
            .map_err(|e| ServiceError::decode(endpoint, e.to_string()))?;

        if body.success {
            Ok(())
        } else {
            Err(ServiceError::Rejected(
                body.message.unwrap_or_else(|| "printing failed".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::ReceiptItem;

    #[test]
    fn test_wire_amount_formatting() {
        assert_eq!(wire_amount(Money::from_cents(1800)), "18.00");
        assert_eq!(wire_amount(Money::from_cents(150)), "1.50");
        assert_eq!(wire_amount(Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_print_request_wire_shape() {
        let receipt = Receipt {
            items: vec![
                ReceiptItem {
                    name: "Bolt 10mm".to_string(),
                    quantity: 3,
                    price: Money::from_cents(500),
                },
                ReceiptItem {
                    name: "Washer".to_string(),
                    quantity: 2,
                    price: Money::from_cents(150),
                },
            ],
            total: Money::from_cents(1800),
        };

        let dto = PrintRequestDto::from(&receipt);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [
                    { "name": "Bolt 10mm", "quantity": 3, "price": "5.00" },
                    { "name": "Washer", "quantity": 2, "price": "1.50" }
                ],
                "total": "18.00"
            })
        );
    }

    #[test]
    fn test_response_dto_decodes_with_and_without_message() {
        let ok: PrintResponseDto = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert!(ok.message.is_none());

        let failed: PrintResponseDto =
            serde_json::from_str(r#"{"success": false, "message": "printer offline"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("printer offline"));
    }
}
