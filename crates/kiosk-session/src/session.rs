//! # Kiosk Session
//!
//! One customer's ordering session: the catalog store, the cart, the
//! navigation state, and the two external services, driven by user
//! intents from the presentation layer.
//!
//! ## Intent Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front-end intent            Session method          State touched      │
//! │  ────────────────            ──────────────          ─────────────      │
//! │  tap main category  ───────► select_category()       screen + fetch     │
//! │  tap sub-category   ───────► select_sub_category()   screen + fetch     │
//! │  tap back arrow     ───────► back()                  screen (+ fetch)   │
//! │  type in search box ───────► set_query()             controls           │
//! │  prev/next buttons  ───────► prev_page()/next_page() controls           │
//! │  tap product card   ───────► select_product()        selection          │
//! │  tap "Add To Cart"  ───────► add_selected_to_cart()  cart               │
//! │  quantity +/- field ───────► set_quantity()          cart               │
//! │  tap REMOVE         ───────► remove_from_cart()      cart               │
//! │  cart icon / CLOSE  ───────► open_cart()/close_cart() overlay           │
//! │  tap PRINT          ───────► checkout()              cart + screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single logical thread of control: every method takes `&mut self`, so
//! no two mutations can interleave within one logical operation, and a
//! second checkout cannot begin while one is awaiting the printer.

use tracing::{debug, info, warn};

use kiosk_client::{CatalogService, PrintService};
use kiosk_core::{
    paginate, Cart, Page, Product, Scope, SubCategory, PRODUCT_PAGE_SIZE, SUB_CATEGORY_PAGE_SIZE,
};

use crate::browse::{ListControls, Screen};
use crate::checkout;
use crate::error::KioskError;
use crate::store::{CatalogBatch, CatalogStore};

/// The ordering session.
///
/// Generic over the service contracts: production wires in the HTTP
/// clients, tests wire in in-memory fakes. All per-customer state
/// (cart, screen, list controls, selection) lives in this one object
/// with `&mut` access semantics.
pub struct KioskSession<C, P> {
    catalog: C,
    printer: P,
    store: CatalogStore,
    cart: Cart,
    screen: Screen,
    controls: ListControls,
    selected_product: Option<i64>,
    cart_open: bool,
}

impl<C: CatalogService, P: PrintService> KioskSession<C, P> {
    pub fn new(catalog: C, printer: P) -> Self {
        KioskSession {
            catalog,
            printer,
            store: CatalogStore::new(),
            cart: Cart::new(),
            screen: Screen::RootCategories,
            controls: ListControls::new(),
            selected_product: None,
            cart_open: false,
        }
    }

    // =========================================================================
    // Read access for the presentation layer
    // =========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn controls(&self) -> &ListControls {
        &self.controls
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.and_then(|id| self.store.product(id))
    }

    /// The sub-category grid for the current query and page.
    pub fn sub_category_page(&self) -> Page<'_, SubCategory> {
        paginate(
            self.store.sub_categories(),
            self.controls.query(),
            self.controls.page(),
            SUB_CATEGORY_PAGE_SIZE,
        )
    }

    /// The product grid for the current query and page.
    pub fn product_page(&self) -> Page<'_, Product> {
        paginate(
            self.store.products(),
            self.controls.query(),
            self.controls.page(),
            PRODUCT_PAGE_SIZE,
        )
    }

    // =========================================================================
    // Session start
    // =========================================================================

    /// Loads the main categories. Called once after login, before the
    /// landing screen renders; returning to the landing screen later
    /// does not refetch.
    pub async fn start(&mut self) -> Result<(), KioskError> {
        debug!("session start");
        self.load(Scope::MainCategories).await
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Root grid: the customer picked a main category.
    pub async fn select_category(&mut self, main_category_id: i64) -> Result<(), KioskError> {
        debug!(main_category_id, "select_category");
        if self.screen != Screen::RootCategories {
            return self.invalid_selection("category");
        }

        self.enter(Screen::SubCategories { main_category_id });
        self.load(Scope::SubCategories(main_category_id)).await
    }

    /// Sub-category grid: the customer picked a sub-category.
    pub async fn select_sub_category(&mut self, sub_category_id: i64) -> Result<(), KioskError> {
        debug!(sub_category_id, "select_sub_category");
        let Screen::SubCategories { main_category_id } = self.screen else {
            return self.invalid_selection("category");
        };

        self.enter(Screen::Products {
            main_category_id,
            sub_category_id,
        });
        self.load(Scope::Products(sub_category_id)).await
    }

    /// Back arrow. From Products the main-category id carried in the
    /// screen context recovers the sub-category screen; its list is
    /// refetched because the products screen may have been shown long
    /// enough for the catalog to change.
    pub async fn back(&mut self) -> Result<(), KioskError> {
        debug!(screen = ?self.screen, "back");
        match self.screen {
            Screen::Products {
                main_category_id, ..
            } => {
                self.store.clear_products();
                self.enter(Screen::SubCategories { main_category_id });
                self.load(Scope::SubCategories(main_category_id)).await
            }
            Screen::SubCategories { .. } => {
                self.store.clear_sub_categories();
                self.enter(Screen::RootCategories);
                Ok(())
            }
            Screen::Feedback => {
                self.enter(Screen::RootCategories);
                Ok(())
            }
            Screen::RootCategories => Ok(()),
        }
    }

    /// Common screen-entry bookkeeping: fresh list controls, no product
    /// selection, overlay closed only when the new screen lacks a cart.
    fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        self.controls = ListControls::new();
        self.selected_product = None;
        if !screen.has_cart() {
            self.cart_open = false;
        }
    }

    /// Invalid-state selection: redirect to the root screen rather than
    /// crash or show a half-initialized screen.
    fn invalid_selection(&mut self, what: &'static str) -> Result<(), KioskError> {
        warn!(screen = ?self.screen, what, "selection without context; redirecting to root");
        self.store.clear_products();
        self.store.clear_sub_categories();
        self.enter(Screen::RootCategories);
        Err(KioskError::NoSelection(what))
    }

    // =========================================================================
    // Catalog loading
    // =========================================================================

    /// Fetches one scope and applies the result if still current.
    async fn load(&mut self, scope: Scope) -> Result<(), KioskError> {
        let batch = match scope {
            Scope::MainCategories => CatalogBatch::MainCategories(
                self.catalog
                    .list_main_categories()
                    .await
                    .map_err(KioskError::Fetch)?,
            ),
            Scope::SubCategories(main_category_id) => CatalogBatch::SubCategories {
                main_category_id,
                items: self
                    .catalog
                    .list_sub_categories(main_category_id)
                    .await
                    .map_err(KioskError::Fetch)?,
            },
            Scope::Products(sub_category_id) => CatalogBatch::Products {
                sub_category_id,
                items: self
                    .catalog
                    .list_products(sub_category_id)
                    .await
                    .map_err(KioskError::Fetch)?,
            },
        };
        self.apply_fetch(batch);
        Ok(())
    }

    /// Applies a fetched batch, but only if its scope still matches the
    /// screen the customer is on. A response that raced with navigation
    /// is discarded; stale data must never overwrite a newer screen's
    /// catalog.
    pub fn apply_fetch(&mut self, batch: CatalogBatch) {
        let scope = batch.scope();
        if self.screen.scope() != Some(scope) {
            warn!(?scope, screen = ?self.screen, "discarding stale catalog response");
            return;
        }
        info!(?scope, "catalog loaded");
        self.store.replace(batch);
    }

    // =========================================================================
    // Search & paging
    // =========================================================================

    /// Search box input. Changing the query always resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.controls.set_query(query);
    }

    pub fn next_page(&mut self) {
        let total = self.current_total_pages();
        self.controls.next_page(total);
    }

    pub fn prev_page(&mut self) {
        self.controls.prev_page();
    }

    fn current_total_pages(&self) -> usize {
        match self.screen {
            Screen::SubCategories { .. } => self.sub_category_page().total_pages,
            Screen::Products { .. } => self.product_page().total_pages,
            _ => 0,
        }
    }

    // =========================================================================
    // Product selection & cart
    // =========================================================================

    /// Product card tap: selects for the detail pane, or deselects when
    /// tapping the already-selected product.
    pub fn select_product(&mut self, product_id: i64) -> Result<(), KioskError> {
        if self.store.product(product_id).is_none() {
            return Err(KioskError::UnknownProduct(product_id));
        }
        self.selected_product = if self.selected_product == Some(product_id) {
            None
        } else {
            Some(product_id)
        };
        Ok(())
    }

    /// "Add To Cart" on the detail pane.
    pub fn add_selected_to_cart(&mut self) -> Result<(), KioskError> {
        let Some(product_id) = self.selected_product else {
            return Err(KioskError::NoSelection("product"));
        };
        self.add_to_cart(product_id)
    }

    /// Adds one unit of a loaded product to the cart.
    pub fn add_to_cart(&mut self, product_id: i64) -> Result<(), KioskError> {
        let product = self
            .store
            .product(product_id)
            .ok_or(KioskError::UnknownProduct(product_id))?
            .clone();
        self.cart.add(&product)?;
        info!(product_id, name = %product.name, "added to cart");
        Ok(())
    }

    /// Quantity field on the cart modal; values <= 0 clamp to 1.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        debug!(product_id, quantity, "set_quantity");
        self.cart.set_quantity(product_id, quantity);
    }

    /// REMOVE button on the cart modal.
    pub fn remove_from_cart(&mut self, product_id: i64) {
        debug!(product_id, "remove_from_cart");
        self.cart.remove(product_id);
    }

    // =========================================================================
    // Cart overlay
    // =========================================================================

    /// Cart icon tap. The overlay exists only on screens that show one;
    /// opening never triggers a catalog fetch.
    pub fn open_cart(&mut self) {
        if self.screen.has_cart() {
            self.cart_open = true;
        } else {
            warn!(screen = ?self.screen, "ignoring open_cart on screen without cart");
        }
    }

    /// CLOSE button: returns to the same screen underneath.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// PRINT button: submits the cart as a receipt.
    ///
    /// On success the cart is cleared, the overlay closed, and the
    /// session navigates to the feedback screen. On any failure the
    /// cart, overlay, and screen are exactly as before, and the customer
    /// retries by pressing PRINT again.
    pub async fn checkout(&mut self) -> Result<(), KioskError> {
        debug!(lines = self.cart.line_count(), "checkout");
        checkout::submit(&self.cart, &self.printer).await?;

        self.cart.clear();
        self.cart_open = false;
        self.store.clear_products();
        self.store.clear_sub_categories();
        self.enter(Screen::Feedback);
        Ok(())
    }
}

// =============================================================================
// Flow Tests
// =============================================================================
// These drive complete ordering flows against in-memory service fakes;
// nothing here touches the network.
