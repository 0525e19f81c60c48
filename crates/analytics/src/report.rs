use core_types::TopProduct;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the final sales report.
///
/// Reports are emitted in rank order (descending profit). Monetary fields are
/// already rounded to the configured number of decimal places and serialize
/// as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    /// First and last name joined by a single space.
    pub name: String,
    /// Number of purchase records attributed to the seller.
    pub sales_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
    /// Best-selling products by quantity, highest first.
    pub top_products: Vec<TopProduct>,
}
