use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::BonusSettings;
use core_types::SellerStats;
use rust_decimal::Decimal;

/// Rank-based bonus as a share of the seller's profit.
///
/// Branches are checked in order and the first match wins:
///
/// 1. rank 0 earns `top_pct`
/// 2. ranks 1 and 2 earn `podium_pct`
/// 3. the last rank earns `last_pct`
/// 4. everyone else earns `default_pct`
///
/// A lone seller is therefore rank 0 and gets the top tier, not the last-place one.
#[derive(Debug, Clone)]
pub struct ProfitTierBonus {
    params: BonusSettings,
}

impl ProfitTierBonus {
    /// Creates a new `ProfitTierBonus` with the given configuration parameters.
    pub fn new(params: BonusSettings) -> Result<Self, StrategyError> {
        let tiers = [
            ("top_pct", params.top_pct),
            ("podium_pct", params.podium_pct),
            ("default_pct", params.default_pct),
            ("last_pct", params.last_pct),
        ];
        for (name, pct) in tiers {
            if pct < Decimal::ZERO || pct > Decimal::ONE {
                return Err(StrategyError::InvalidParameters(format!(
                    "{name} must be between 0 and 1, got {pct}"
                )));
            }
        }
        Ok(Self { params })
    }

    fn rate(&self, rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            self.params.top_pct
        } else if rank == 1 || rank == 2 {
            self.params.podium_pct
        } else if rank + 1 == total {
            self.params.last_pct
        } else {
            self.params.default_pct
        }
    }
}

impl Default for ProfitTierBonus {
    /// 15% / 10% / 5% with nothing for last place.
    fn default() -> Self {
        Self {
            params: BonusSettings::default(),
        }
    }
}

impl BonusStrategy for ProfitTierBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> Decimal {
        let rate = self.rate(rank, total);
        tracing::trace!(seller_id = %seller.id, rank, total, %rate, "Bonus tier selected");
        rate * seller.profit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Seller;
    use rust_decimal_macros::dec;

    fn stats_with_profit(profit: Decimal) -> SellerStats {
        let mut stats = SellerStats::new(&Seller {
            id: "seller_1".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Ivanov".to_string(),
            start_date: String::new(),
            position: String::new(),
        });
        stats.profit = profit;
        stats
    }

    #[test]
    fn test_reference_tiers() {
        let policy = ProfitTierBonus::default();
        let seller = stats_with_profit(dec!(1000));

        assert_eq!(policy.bonus(0, 6, &seller), dec!(150));
        assert_eq!(policy.bonus(1, 6, &seller), dec!(100));
        assert_eq!(policy.bonus(2, 6, &seller), dec!(100));
        assert_eq!(policy.bonus(3, 6, &seller), dec!(50));
        assert_eq!(policy.bonus(4, 6, &seller), dec!(50));
        assert_eq!(policy.bonus(5, 6, &seller), dec!(0));
    }

    #[test]
    fn test_single_seller_gets_top_tier() {
        let policy = ProfitTierBonus::default();
        assert_eq!(policy.bonus(0, 1, &stats_with_profit(dec!(100))), dec!(15));
    }

    #[test]
    fn test_podium_wins_over_last_place() {
        let policy = ProfitTierBonus::default();
        let seller = stats_with_profit(dec!(200));
        // With two or three sellers the last rank is also a podium rank.
        assert_eq!(policy.bonus(1, 2, &seller), dec!(20));
        assert_eq!(policy.bonus(2, 3, &seller), dec!(20));
        assert_eq!(policy.bonus(3, 4, &seller), dec!(0));
    }

    #[test]
    fn test_negative_profit_scales_the_same_way() {
        let policy = ProfitTierBonus::default();
        assert_eq!(policy.bonus(0, 3, &stats_with_profit(dec!(-40))), dec!(-6));
    }

    #[test]
    fn test_custom_tiers() {
        let params = BonusSettings {
            top_pct: dec!(0.2),
            podium_pct: dec!(0.12),
            default_pct: dec!(0.03),
            last_pct: dec!(0.01),
            ..BonusSettings::default()
        };
        let policy = ProfitTierBonus::new(params).unwrap();
        let seller = stats_with_profit(dec!(100));
        assert_eq!(policy.bonus(0, 5, &seller), dec!(20));
        assert_eq!(policy.bonus(2, 5, &seller), dec!(12));
        assert_eq!(policy.bonus(3, 5, &seller), dec!(3));
        assert_eq!(policy.bonus(4, 5, &seller), dec!(1));
    }

    #[test]
    fn test_rejects_percentages_outside_unit_range() {
        let params = BonusSettings {
            top_pct: dec!(15),
            ..BonusSettings::default()
        };
        assert!(matches!(
            ProfitTierBonus::new(params),
            Err(StrategyError::InvalidParameters(_))
        ));
    }
}
