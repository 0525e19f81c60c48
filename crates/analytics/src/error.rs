use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Missing strategy: {0} must be provided")]
    MissingStrategy(String),

    #[error("Referential integrity violated: {0}")]
    ReferentialIntegrity(String),

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("Failed to build strategy: {0}")]
    Strategy(#[from] strategies::StrategyError),
}

impl AnalyticsError {
    /// True for the errors raised before any record is processed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalyticsError::MalformedDataset(_) | AnalyticsError::MissingStrategy(_)
        )
    }
}
