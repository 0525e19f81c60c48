use crate::error::ConfigError;
use core_types::{BonusPolicyId, RevenueModelId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional; an absent section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub revenue: RevenueSettings,
    pub bonus: BonusSettings,
}

/// Shape of the produced report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How many products to keep per seller in `top_products`.
    pub top_products_limit: usize,
    /// Decimal places for revenue, profit and bonus in the report.
    pub decimal_places: u32,
}

/// Selects the revenue model applied to every line item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevenueSettings {
    pub model: RevenueModelId,
}

/// Parameters for the rank-based bonus policy.
///
/// Percentages are fractions of profit: 0.15 means 15%.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BonusSettings {
    pub policy: BonusPolicyId,
    /// Rank 0.
    pub top_pct: Decimal,
    /// Ranks 1 and 2.
    pub podium_pct: Decimal,
    /// Everyone between the podium and last place.
    pub default_pct: Decimal,
    /// The last-ranked seller.
    pub last_pct: Decimal,
}

// --- Default Implementations ---

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            decimal_places: 2,
        }
    }
}

impl Default for BonusSettings {
    fn default() -> Self {
        Self {
            policy: BonusPolicyId::ProfitTiers,
            top_pct: dec!(0.15),
            podium_pct: dec!(0.10),
            default_pct: dec!(0.05),
            last_pct: Decimal::ZERO,
        }
    }
}

impl Config {
    /// Checks that the loaded values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.top_products_limit == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.top_products_limit must be at least 1".to_string(),
            ));
        }
        if self.analysis.decimal_places > 8 {
            return Err(ConfigError::ValidationError(format!(
                "analysis.decimal_places must be at most 8, got {}",
                self.analysis.decimal_places
            )));
        }

        let tiers = [
            ("bonus.top_pct", self.bonus.top_pct),
            ("bonus.podium_pct", self.bonus.podium_pct),
            ("bonus.default_pct", self.bonus.default_pct),
            ("bonus.last_pct", self.bonus.last_pct),
        ];
        for (name, pct) in tiers {
            if pct < Decimal::ZERO || pct > Decimal::ONE {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be between 0 and 1, got {pct}"
                )));
            }
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(limit) = overrides.top_products_limit {
            self.analysis.top_products_limit = limit;
        }
        if let Some(places) = overrides.decimal_places {
            self.analysis.decimal_places = places;
        }
    }
}

/// Settings that can be overridden per invocation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ConfigOverrides {
    /// Maximum number of top products listed per seller.
    #[cfg_attr(feature = "clap", arg(long = "limit"))]
    pub top_products_limit: Option<usize>,

    /// Decimal places for monetary values in the report.
    #[cfg_attr(feature = "clap", arg(long))]
    pub decimal_places: Option<u32>,
}
