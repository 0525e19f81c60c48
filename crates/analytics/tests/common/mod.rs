#![allow(dead_code)]

use analytics::AnalysisOptions;
use core_types::{LineItem, Product, PurchaseRecord, Seller};
use rust_decimal::Decimal;
use strategies::{ProfitTierBonus, SimpleRevenue};

pub fn seller(id: &str, first_name: &str, last_name: &str) -> Seller {
    Seller {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        start_date: "2024-01-01".to_string(),
        position: "Seller".to_string(),
    }
}

pub fn product(sku: &str, purchase_price: Decimal) -> Product {
    Product {
        sku: sku.to_string(),
        purchase_price,
        name: format!("Product {sku}"),
        category: "General".to_string(),
        sale_price: None,
    }
}

pub fn item(sku: &str, sale_price: Decimal, quantity: u64, discount: Decimal) -> LineItem {
    LineItem {
        sku: sku.to_string(),
        sale_price,
        quantity,
        discount,
    }
}

pub fn record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
    PurchaseRecord {
        seller_id: seller_id.to_string(),
        items,
        receipt_id: None,
        date: None,
        customer_id: None,
        total_amount: None,
        total_discount: None,
    }
}

/// Simple revenue and the 15/10/5/0 bonus tiers.
pub fn reference_options() -> AnalysisOptions {
    AnalysisOptions::new()
        .with_revenue(SimpleRevenue::new())
        .with_bonus(ProfitTierBonus::default())
}
