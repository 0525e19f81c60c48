use crate::error::StrategyError;
use crate::profit_tiers::ProfitTierBonus;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::{BonusSettings, RevenueSettings};
use core_types::{BonusPolicyId, RevenueModelId};

/// Creates the revenue strategy selected in the configuration.
pub fn create_revenue_strategy(
    settings: &RevenueSettings,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    // The compiler will error if a new RevenueModelId is added but not handled here.
    match settings.model {
        RevenueModelId::Simple => Ok(Box::new(SimpleRevenue::new())),
    }
}

/// Creates the bonus strategy selected in the configuration.
pub fn create_bonus_strategy(
    settings: &BonusSettings,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    match settings.policy {
        BonusPolicyId::ProfitTiers => Ok(Box::new(ProfitTierBonus::new(settings.clone())?)),
    }
}
