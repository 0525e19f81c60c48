use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// A member of the sales team. Immutable input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub position: String,
}

impl Seller {
    /// The display name used in reports: first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalogue entry, keyed by `sku`.
///
/// Only `purchase_price` takes part in the analysis; the remaining fields are
/// descriptive and carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Cost basis of a single unit.
    pub purchase_price: Decimal,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
}

/// One product-and-quantity entry within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub sale_price: Decimal,
    pub quantity: u64,
    /// Discount in percent, 0 to 100.
    #[serde(default)]
    pub discount: Decimal,
}

/// A single receipt, attributed to exactly one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub receipt_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub total_discount: Option<Decimal>,
}

/// The complete batch handed to the analyzer.
///
/// `sellers` and `purchase_records` are optional so that a document missing
/// either section still deserializes and can be rejected by validation with a
/// precise reason instead of a parser error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub sellers: Option<Vec<Seller>>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Option<Vec<PurchaseRecord>>,
}

impl Dataset {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers: Some(sellers),
            products,
            purchase_records: Some(purchase_records),
        }
    }

    /// Parses a dataset from a JSON document.
    ///
    /// A literal `null` document is reported as [`CoreError::MissingDataset`].
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let parsed: Option<Dataset> = serde_json::from_str(input)?;
        Self::present(parsed)
    }

    /// Same as [`Dataset::from_json_str`], reading from any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let parsed: Option<Dataset> = serde_json::from_reader(reader)?;
        Self::present(parsed)
    }

    fn present(parsed: Option<Dataset>) -> Result<Self, CoreError> {
        let dataset = parsed.ok_or(CoreError::MissingDataset)?;
        tracing::debug!(
            sellers = dataset.sellers.as_ref().map_or(0, Vec::len),
            products = dataset.products.len(),
            purchase_records = dataset.purchase_records.as_ref().map_or(0, Vec::len),
            "Dataset parsed"
        );
        Ok(dataset)
    }
}

/// A `{sku, quantity}` pair as it appears in a seller's top products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Cumulative quantities sold per sku, remembering the order in which each
/// sku was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTally {
    entries: Vec<TopProduct>,
    positions: HashMap<String, usize>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `sku`, starting from zero for an unseen sku.
    ///
    /// Returns the new cumulative quantity, or `None` (leaving the tally
    /// untouched) if it would exceed `u64::MAX`.
    pub fn add(&mut self, sku: &str, quantity: u64) -> Option<u64> {
        match self.positions.get(sku) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.quantity = entry.quantity.checked_add(quantity)?;
                Some(entry.quantity)
            }
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push(TopProduct {
                    sku: sku.to_string(),
                    quantity,
                });
                Some(quantity)
            }
        }
    }

    /// Entries in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = &TopProduct> {
        self.entries.iter()
    }
}

/// Per-seller accumulator built during one analysis run.
///
/// Counters start at zero, are mutated only while purchase records are being
/// folded in, and are read-only afterwards apart from `bonus` and
/// `top_products`, which are filled in once the ranking is known.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub start_date: String,
    pub position: String,

    pub sales_count: usize,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub products_sold: ProductTally,

    pub bonus: Decimal,
    pub top_products: Vec<TopProduct>,
}

impl SellerStats {
    /// Creates a zeroed accumulator carrying the seller's identity fields.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            first_name: seller.first_name.clone(),
            last_name: seller.last_name.clone(),
            start_date: seller.start_date.clone(),
            position: seller.position.clone(),
            sales_count: 0,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            products_sold: ProductTally::new(),
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
