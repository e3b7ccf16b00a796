//! # Cart
//!
//! The shopping cart: one aggregated line per distinct product.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Kiosk Action             Operation               Cart Change           │
//! │  ────────────             ─────────               ───────────           │
//! │                                                                         │
//! │  Tap "Add To Cart" ─────► add(product) ─────────► qty += 1 or new line │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity(id, n) ──► qty = max(1, n)      │
//! │                                                                         │
//! │  Tap "Remove" ──────────► remove(id) ───────────► line deleted         │
//! │                                                                         │
//! │  Receipt printed ───────► clear() ──────────────► all lines deleted    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Exactly one line per distinct product id; adding an existing product
//!   increments its quantity instead of pushing a second line.
//! - Quantities are integers >= 1. A quantity of zero is never observable:
//!   updates clamp to 1, and removal is always explicit.
//! - The product on a line is a snapshot taken at add time; catalog
//!   changes after that never retroactively alter the line's price or
//!   name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CartError;
use crate::money::Money;
use crate::types::{Product, Receipt, ReceiptItem};

// =============================================================================
// Cart Line
// =============================================================================

/// One aggregated entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product snapshot frozen at add time. Locking the price in here is
    /// what keeps a receipt consistent even if the catalog is refetched
    /// mid-session.
    pub product: Product,

    /// Integer quantity, always >= 1.
    pub quantity: i64,

    /// When the line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Line total: unit price × quantity, exact in centavos.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The kiosk shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// If a line with the same product id exists, its quantity goes up by
    /// one; otherwise a new line with quantity 1 is appended. Existing
    /// lines are never removed by this operation.
    ///
    /// Out-of-stock products are refused here even though the UI disables
    /// the add affordance: the cart re-validates regardless of what the
    /// presentation layer allowed through.
    pub fn add(&mut self, product: &Product) -> Result<(), CartError> {
        if !product.is_available() {
            return Err(CartError::OutOfStock {
                product_id: product.id,
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// Values <= 0 are clamped to 1: the decrement button on the cart
    /// modal can never delete a line implicitly; removal is its own
    /// button. A missing product id is a silent no-op.
    ///
    /// TODO: there is no upper-bound check against `quantity_in_stock`,
    /// so the kiosk will accept a typed quantity beyond available stock.
    /// See DESIGN.md before adding one; fulfillment validates stock.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Removes a line by product id; no-op when absent.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empties the cart. Used by a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Exact total over all lines: `sum(quantity * price)`.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total unit count across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Builds the outbound receipt snapshot for the print service.
    pub fn to_receipt(&self) -> Receipt {
        Receipt {
            items: self
                .lines
                .iter()
                .map(|l| ReceiptItem {
                    name: l.product.name.clone(),
                    quantity: l.quantity,
                    price: l.product.price,
                })
                .collect(),
            total: self.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, cents: i64, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: Money::from_cents(cents),
            kind: "Hardware".to_string(),
            size: String::new(),
            color: String::new(),
            brand: String::new(),
            description: String::new(),
            quantity_in_stock: stock,
            image: None,
            sub_category_id: 1,
        }
    }

    #[test]
    fn test_add_twice_aggregates_into_one_line() {
        let mut cart = Cart::new();
        let bolt = product(1, "Bolt 10mm", 500, 20);

        cart.add(&bolt).unwrap();
        cart.add(&bolt).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_out_of_stock_is_refused() {
        let mut cart = Cart::new();
        let gone = product(1, "Washer", 150, 0);

        let err = cart.add(&gone).unwrap_err();
        assert!(matches!(err, CartError::OutOfStock { product_id: 1, .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_price_is_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut bolt = product(1, "Bolt 10mm", 500, 20);
        cart.add(&bolt).unwrap();

        // Catalog refetch changes the price; the line must not follow it.
        bolt.price = Money::from_cents(999);
        assert_eq!(cart.line(1).unwrap().product.price.cents(), 500);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Nut", 100, 5)).unwrap();

        for q in [0, -1, -999] {
            cart.set_quantity(1, q);
            assert_eq!(cart.line(1).unwrap().quantity, 1);
        }

        cart.set_quantity(1, 7);
        assert_eq!(cart.line(1).unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Nut", 100, 5)).unwrap();

        cart.set_quantity(42, 9);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_and_missing_remove() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Nut", 100, 5)).unwrap();
        cart.add(&product(2, "Bolt", 500, 5)).unwrap();

        cart.remove(1);
        assert_eq!(cart.line_count(), 1);
        assert!(cart.line(1).is_none());

        // Removing an absent id is a no-op.
        cart.remove(1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_total_sums_line_totals() {
        let mut cart = Cart::new();
        let bolt = product(1, "Bolt 10mm", 500, 50);
        let washer = product(2, "Washer", 150, 50);

        for _ in 0..3 {
            cart.add(&bolt).unwrap();
        }
        for _ in 0..2 {
            cart.add(&washer).unwrap();
        }

        // 3 × ₱5.00 + 2 × ₱1.50 = ₱18.00
        assert_eq!(cart.total(), Money::from_cents(1800));
        assert_eq!(cart.total().to_string(), "₱18.00");
    }

    #[test]
    fn test_receipt_snapshot() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Bolt 10mm", 500, 50)).unwrap();
        cart.set_quantity(1, 3);

        let receipt = cart.to_receipt();
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].name, "Bolt 10mm");
        assert_eq!(receipt.items[0].quantity, 3);
        assert_eq!(receipt.items[0].price, Money::from_cents(500));
        assert_eq!(receipt.total, Money::from_cents(1500));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Nut", 100, 5)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    /// No drift after 10,000 random operations: the cart total must equal
    /// an independently tracked integer sum at every step.
    #[test]
    fn test_total_exact_under_random_operations() {
        // Small deterministic LCG so the test needs no RNG dependency.
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            seed >> 33
        };

        let catalog: Vec<Product> = (0..10)
            .map(|i| product(i, &format!("Item {i}"), 1 + (i * 37) % 997, 100))
            .collect();

        let mut cart = Cart::new();
        let mut expected: std::collections::HashMap<i64, (i64, i64)> =
            std::collections::HashMap::new(); // id -> (qty, price_cents)

        for _ in 0..10_000 {
            let p = &catalog[(next() % 10) as usize];
            match next() % 4 {
                0 | 1 => {
                    cart.add(p).unwrap();
                    let entry = expected.entry(p.id).or_insert((0, p.price.cents()));
                    entry.0 += 1;
                }
                2 => {
                    let q = (next() % 12) as i64 - 2; // occasionally <= 0
                    cart.set_quantity(p.id, q);
                    if let Some(entry) = expected.get_mut(&p.id) {
                        entry.0 = q.max(1);
                    }
                }
                _ => {
                    cart.remove(p.id);
                    expected.remove(&p.id);
                }
            }

            let want: i64 = expected.values().map(|(q, c)| q * c).sum();
            assert_eq!(cart.total().cents(), want);
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        }
    }
}
