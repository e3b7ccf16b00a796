//! # Catalog Service
//!
//! Contract and HTTP implementation for the three catalog listings.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Fetch Flow                                │
//! │                                                                         │
//! │  Screen entry                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_sub_categories(main_id)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /api/sub-categories/?main_category={id}                            │
//! │  Authorization: Token <bearer>                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [wire DTOs] ──► domain types (decimal prices become centavos)          │
//! │                                                                         │
//! │  One attempt per navigation event. A failure surfaces to the user;     │
//! │  retry is the user navigating again.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::debug;

use kiosk_core::{MainCategory, Money, Product, SubCategory};

use crate::config::ClientConfig;
use crate::error::{ServiceError, ServiceResult};

/// Read-only access to the two-level category hierarchy and its products.
///
/// Every listing is scoped: sub-categories by their main category,
/// products by their sub-category. The caller supplies no paging; the
/// kiosk filters and pages client-side.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_main_categories(&self) -> ServiceResult<Vec<MainCategory>>;
    async fn list_sub_categories(&self, main_category_id: i64) -> ServiceResult<Vec<SubCategory>>;
    async fn list_products(&self, sub_category_id: i64) -> ServiceResult<Vec<Product>>;
}

// =============================================================================
// Wire DTOs
// =============================================================================
// Field names mirror the backend's serializers exactly. Nothing outside
// this crate ever sees them.

#[derive(Debug, Deserialize)]
struct MainCategoryDto {
    main_category_id: i64,
    main_category_name: String,
}

#[derive(Debug, Deserialize)]
struct SubCategoryDto {
    sub_category_id: i64,
    sub_category_name: String,
    sub_category_image: Option<String>,
    main_category: i64,
}

#[derive(Debug, Deserialize)]
struct ProductDto {
    product_id: i64,
    product_name: String,
    /// Decimal string, e.g. `"5.00"`. Parsed into exact centavos.
    product_price: String,
    #[serde(default)]
    product_type: String,
    #[serde(default)]
    product_size: String,
    #[serde(default)]
    product_color: String,
    #[serde(default)]
    product_brand: String,
    #[serde(default)]
    product_description: String,
    product_quantity: i64,
    product_image: Option<String>,
    sub_category: i64,
}

impl From<MainCategoryDto> for MainCategory {
    fn from(dto: MainCategoryDto) -> Self {
        MainCategory {
            id: dto.main_category_id,
            name: dto.main_category_name,
        }
    }
}

impl From<SubCategoryDto> for SubCategory {
    fn from(dto: SubCategoryDto) -> Self {
        SubCategory {
            id: dto.sub_category_id,
            name: dto.sub_category_name,
            image: dto.sub_category_image,
            main_category_id: dto.main_category,
        }
    }
}

impl ProductDto {
    fn into_domain(self, endpoint: &str) -> ServiceResult<Product> {
        let price: Money = self.product_price.parse().map_err(|_| {
            ServiceError::decode(
                endpoint,
                format!(
                    "product {} has unparseable price {:?}",
                    self.product_id, self.product_price
                ),
            )
        })?;
        Ok(Product {
            id: self.product_id,
            name: self.product_name,
            price,
            kind: self.product_type,
            size: self.product_size,
            color: self.product_color,
            brand: self.product_brand,
            description: self.product_description,
            quantity_in_stock: self.product_quantity,
            image: self.product_image,
            sub_category_id: self.sub_category,
        })
    }
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Catalog client against the backend REST API.
///
/// The bearer credential is handed in by the session/auth collaborator
/// that performed the login; this client never acquires or refreshes it.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
    bearer: String,
}

impl HttpCatalogClient {
    pub fn new(config: &ClientConfig, bearer: impl Into<String>) -> ServiceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::transport(&config.base_url, e))?;
        Ok(HttpCatalogClient {
            http,
            base_url: config.base_url.clone(),
            bearer: bearer.into(),
        })
    }

    /// Performs one authorized GET and decodes the JSON list body.
    async fn get_list<D: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        url: String,
    ) -> ServiceResult<Vec<D>> {
        debug!(endpoint, "catalog fetch");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Token {}", self.bearer))
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

        response
            .json::<Vec<D>>()
            .await
            .map_err(|e| ServiceError::decode(endpoint, e.to_string()))
    }
}

#[async_trait]
impl CatalogService for HttpCatalogClient {
    async fn list_main_categories(&self) -> ServiceResult<Vec<MainCategory>> {
        let endpoint = "/api/main-categories/";
        let url = format!("{}{endpoint}", self.base_url);
        let dtos: Vec<MainCategoryDto> = self.get_list(endpoint, url).await?;
        Ok(dtos.into_iter().map(MainCategory::from).collect())
    }

    async fn list_sub_categories(&self, main_category_id: i64) -> ServiceResult<Vec<SubCategory>> {
        let endpoint = "/api/sub-categories/";
        let url = format!("{}{endpoint}?main_category={main_category_id}", self.base_url);
        let dtos: Vec<SubCategoryDto> = self.get_list(endpoint, url).await?;
        // The backend already filters by the query parameter; the client
        // filters again so a sloppy server cannot leak another
        // category's rows onto this screen.
        Ok(dtos
            .into_iter()
            .map(SubCategory::from)
            .filter(|sc| sc.main_category_id == main_category_id)
            .collect())
    }

    async fn list_products(&self, sub_category_id: i64) -> ServiceResult<Vec<Product>> {
        let endpoint = "/api/products/";
        let url = format!("{}{endpoint}?sub_category={sub_category_id}", self.base_url);
        let dtos: Vec<ProductDto> = self.get_list(endpoint, url).await?;
        dtos.into_iter().map(|d| d.into_domain(endpoint)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_dto_to_domain() {
        let json = r#"{
            "product_id": 42,
            "product_name": "Bolt 10mm",
            "product_price": "5.00",
            "product_type": "Hex",
            "product_size": "10mm",
            "product_color": "Silver",
            "product_brand": "Generic",
            "product_description": "A bolt.",
            "product_quantity": 12,
            "product_image": "/media/products/bolt.png",
            "sub_category": 7
        }"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        let product = dto.into_domain("/api/products/").unwrap();

        assert_eq!(product.id, 42);
        assert_eq!(product.price, Money::from_cents(500));
        assert_eq!(product.quantity_in_stock, 12);
        assert_eq!(product.sub_category_id, 7);
        assert!(product.is_available());
    }

    #[test]
    fn test_product_dto_optional_detail_fields_default() {
        let json = r#"{
            "product_id": 1,
            "product_name": "Washer",
            "product_price": "1.50",
            "product_quantity": 0,
            "product_image": null,
            "sub_category": 7
        }"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        let product = dto.into_domain("/api/products/").unwrap();

        assert_eq!(product.brand, "");
        assert_eq!(product.image, None);
        assert!(!product.is_available());
    }

    #[test]
    fn test_bad_price_is_a_decode_error() {
        let json = r#"{
            "product_id": 1,
            "product_name": "Washer",
            "product_price": "one fifty",
            "product_quantity": 3,
            "product_image": null,
            "sub_category": 7
        }"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        let err = dto.into_domain("/api/products/").unwrap_err();
        assert!(matches!(err, ServiceError::Decode { .. }));
    }

    #[test]
    fn test_sub_category_dto_mapping() {
        let json = r#"{
            "sub_category_id": 7,
            "sub_category_name": "Hex Bolts",
            "sub_category_image": null,
            "main_category": 2
        }"#;
        let dto: SubCategoryDto = serde_json::from_str(json).unwrap();
        let sc = SubCategory::from(dto);
        assert_eq!(sc.id, 7);
        assert_eq!(sc.main_category_id, 2);
    }
}
