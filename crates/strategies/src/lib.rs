//! # Salesboard Strategy Library
//!
//! Pricing and reward policy for the sales analysis. The analyzer never
//! hard-codes how a line item turns into revenue or how a rank turns into a
//! bonus; it is handed one `RevenueStrategy` and one `BonusStrategy`.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on
//!   `core-types` and `configuration`.
//! - **Policy Agnostic Engine:** Any type implementing the traits can be plugged
//!   into the analyzer, including plain closures.
//! - **Extensibility:** Adding a policy means a new module, a trait impl, and a
//!   new variant in `RevenueModelId` / `BonusPolicyId` handled by the `factory`.
//!
//! ## Public API
//!
//! - `RevenueStrategy` and `BonusStrategy`: the two single-method traits.
//! - `SimpleRevenue` and `ProfitTierBonus`: the reference policies.
//! - `create_revenue_strategy` / `create_bonus_strategy`: factory functions.

pub mod error;
pub mod factory;
pub mod profit_tiers;
pub mod simple_revenue;

pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use profit_tiers::ProfitTierBonus;
pub use simple_revenue::SimpleRevenue;

pub use core_types::{BonusPolicyId, RevenueModelId};

use core_types::{LineItem, Product, SellerStats};
use rust_decimal::Decimal;

/// Computes the net revenue of one sold line item.
///
/// Implementations must be pure: the same item and product always yield the
/// same amount.
pub trait RevenueStrategy: Send + Sync {
    fn revenue(&self, item: &LineItem, product: &Product) -> Decimal;
}

/// Computes the bonus of a seller from its 0-based profit rank.
///
/// `total` is the number of ranked sellers, so the last place is `total - 1`.
pub trait BonusStrategy: Send + Sync {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> Decimal;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Decimal + Send + Sync,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Decimal {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> Decimal + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> Decimal {
        self(rank, total, seller)
    }
}
