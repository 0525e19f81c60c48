use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which revenue model computes the net revenue of a line item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueModelId {
    /// `sale_price * quantity * (1 - discount / 100)`
    #[default]
    Simple,
}

/// Identifies which bonus policy rewards sellers by rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusPolicyId {
    /// Percent-of-profit tiers by rank: first, podium, middle, last.
    #[default]
    ProfitTiers,
}

impl fmt::Display for RevenueModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueModelId::Simple => write!(f, "simple"),
        }
    }
}

impl fmt::Display for BonusPolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusPolicyId::ProfitTiers => write!(f, "profit_tiers"),
        }
    }
}
