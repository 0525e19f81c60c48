use crate::error::AnalyticsError;
use configuration::Config;
use std::fmt;
use strategies::{BonusStrategy, RevenueStrategy, create_bonus_strategy, create_revenue_strategy};

/// The two policies an analysis run needs.
///
/// Both slots are required; an empty slot is rejected by the analyzer before
/// any record is read.
#[derive(Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Options with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revenue<R: RevenueStrategy + 'static>(mut self, strategy: R) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    pub fn with_bonus<B: BonusStrategy + 'static>(mut self, strategy: B) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }

    /// Builds both strategies from the `[revenue]` and `[bonus]` sections.
    ///
    /// Rejected strategy parameters surface as [`AnalyticsError::Strategy`].
    pub fn from_config(config: &Config) -> Result<Self, AnalyticsError> {
        Ok(Self {
            calculate_revenue: Some(create_revenue_strategy(&config.revenue)?),
            calculate_bonus: Some(create_bonus_strategy(&config.bonus)?),
        })
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
