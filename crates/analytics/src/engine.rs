use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use crate::report::SellerReport;
use configuration::AnalysisSettings;
use core_types::{Dataset, Product, PurchaseRecord, Seller, SellerStats, TopProduct};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use strategies::{BonusStrategy, RevenueStrategy};

/// A stateless calculator that turns a batch of purchase records into a
/// ranked per-seller report.
#[derive(Debug, Clone)]
pub struct SalesAnalyzer {
    top_products_limit: usize,
    decimal_places: u32,
}

impl Default for SalesAnalyzer {
    fn default() -> Self {
        Self::with_settings(&AnalysisSettings::default())
    }
}

impl SalesAnalyzer {
    /// Ten top products per seller, money rounded to two decimal places.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &AnalysisSettings) -> Self {
        Self {
            top_products_limit: settings.top_products_limit,
            decimal_places: settings.decimal_places,
        }
    }

    /// The main entry point for the analysis.
    ///
    /// # Arguments
    ///
    /// * `data` - Sellers, products and purchase records of one batch.
    /// * `options` - The revenue and bonus strategies to apply.
    ///
    /// # Returns
    ///
    /// One `SellerReport` per input seller, ordered by descending profit, or
    /// the first `AnalyticsError` encountered. Nothing is returned partially.
    #[tracing::instrument(name = "sales_analyze", skip_all)]
    pub fn analyze(
        &self,
        data: &Dataset,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        let (sellers, records) = validate_dataset(data)?;
        let (revenue, bonus) = validate_options(options)?;

        let mut stats = self.accumulate(sellers, &data.products, records, revenue)?;
        self.rank(&mut stats, bonus);

        tracing::info!(
            sellers = stats.len(),
            purchase_records = records.len(),
            "Sales analysis complete"
        );

        Ok(stats.iter().map(|seller| self.format(seller)).collect())
    }

    /// Folds every purchase record into its seller's accumulator.
    ///
    /// The returned vector keeps the input order of `sellers`.
    fn accumulate(
        &self,
        sellers: &[Seller],
        products: &[Product],
        records: &[PurchaseRecord],
        revenue_strategy: &dyn RevenueStrategy,
    ) -> Result<Vec<SellerStats>, AnalyticsError> {
        let mut stats: Vec<SellerStats> = sellers.iter().map(SellerStats::new).collect();

        // Later duplicates shadow earlier ones.
        let seller_index: HashMap<&str, usize> = sellers
            .iter()
            .enumerate()
            .map(|(pos, seller)| (seller.id.as_str(), pos))
            .collect();
        let product_index: HashMap<&str, &Product> = products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        for (record_no, record) in records.iter().enumerate() {
            let pos = *seller_index.get(record.seller_id.as_str()).ok_or_else(|| {
                AnalyticsError::ReferentialIntegrity(format!(
                    "purchase record #{record_no} references unknown seller_id '{}'",
                    record.seller_id
                ))
            })?;
            let seller = &mut stats[pos];
            seller.sales_count += 1;

            for item in &record.items {
                let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                    AnalyticsError::ReferentialIntegrity(format!(
                        "purchase record #{record_no} references unknown sku '{}'",
                        item.sku
                    ))
                })?;

                if item.discount < Decimal::ZERO || item.discount > dec!(100) {
                    tracing::warn!(
                        sku = %item.sku,
                        discount = %item.discount,
                        "Line item discount outside 0-100 percent"
                    );
                }

                let overflow = |what: &str| {
                    AnalyticsError::ArithmeticOverflow(format!(
                        "purchase record #{record_no} sku '{}': {what} out of range",
                        item.sku
                    ))
                };

                // Strategies saturate instead of panicking; a saturated value is unusable.
                let revenue = revenue_strategy.revenue(item, product);
                if revenue.abs() == Decimal::MAX {
                    return Err(overflow("revenue"));
                }
                let cost = product
                    .purchase_price
                    .checked_mul(Decimal::from(item.quantity))
                    .ok_or_else(|| overflow("cost"))?;
                let profit = revenue.checked_sub(cost).ok_or_else(|| overflow("profit"))?;

                seller.revenue = seller
                    .revenue
                    .checked_add(revenue)
                    .ok_or_else(|| overflow("seller revenue"))?;
                seller.profit = seller
                    .profit
                    .checked_add(profit)
                    .ok_or_else(|| overflow("seller profit"))?;
                seller
                    .products_sold
                    .add(&item.sku, item.quantity)
                    .ok_or_else(|| overflow("quantity sold"))?;
            }

            tracing::debug!(
                seller_id = %seller.id,
                items = record.items.len(),
                revenue = %seller.revenue,
                profit = %seller.profit,
                "Purchase record accumulated"
            );
        }

        for seller in stats.iter().filter(|s| s.sales_count == 0) {
            tracing::debug!(seller_id = %seller.id, "Seller has no purchase records");
        }

        Ok(stats)
    }

    /// Sorts by descending profit, then assigns bonuses and top products.
    fn rank(&self, stats: &mut [SellerStats], bonus_strategy: &dyn BonusStrategy) {
        // `sort_by` is stable: equal profits keep their input order.
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        for (rank, seller) in stats.iter_mut().enumerate() {
            seller.bonus = bonus_strategy.bonus(rank, total, seller);
            seller.top_products = self.top_products(seller);
        }
    }

    /// Products by descending quantity, ties in first-sold order, capped at the limit.
    fn top_products(&self, seller: &SellerStats) -> Vec<TopProduct> {
        let mut products: Vec<TopProduct> = seller.products_sold.iter().cloned().collect();
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        products.truncate(self.top_products_limit);
        products
    }

    fn format(&self, seller: &SellerStats) -> SellerReport {
        SellerReport {
            seller_id: seller.id.clone(),
            name: seller.full_name(),
            sales_count: seller.sales_count,
            revenue: round_money(seller.revenue, self.decimal_places),
            profit: round_money(seller.profit, self.decimal_places),
            bonus: round_money(seller.bonus, self.decimal_places),
            top_products: seller.top_products.clone(),
        }
    }
}

/// Rounds to exactly `dp` places with ties going away from zero
/// (2.345 -> 2.35, -2.345 -> -2.35, 200 -> 200.00).
pub fn round_money(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

fn validate_dataset(data: &Dataset) -> Result<(&[Seller], &[PurchaseRecord]), AnalyticsError> {
    let sellers = match data.sellers.as_deref() {
        Some(sellers) if !sellers.is_empty() => sellers,
        Some(_) => {
            return Err(AnalyticsError::MalformedDataset(
                "sellers must not be empty".to_string(),
            ));
        }
        None => {
            return Err(AnalyticsError::MalformedDataset(
                "sellers are missing".to_string(),
            ));
        }
    };

    let records = data.purchase_records.as_deref().ok_or_else(|| {
        AnalyticsError::MalformedDataset("purchase_records are missing".to_string())
    })?;

    Ok((sellers, records))
}

fn validate_options(
    options: &AnalysisOptions,
) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy), AnalyticsError> {
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| AnalyticsError::MissingStrategy("calculate_revenue".to_string()))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| AnalyticsError::MissingStrategy("calculate_bonus".to_string()))?;
    Ok((revenue, bonus))
}
