//! # Salesboard Analytics Engine
//!
//! This crate turns a batch of purchase records into a ranked per-seller
//! performance report: sales count, revenue, profit, bonus and best-selling
//! products.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   terminals or the environment. It depends on `core-types` for its inputs and
//!   on `strategies` for the pluggable revenue and bonus policies.
//! - **Stateless Calculation:** The `SalesAnalyzer` holds only report-shape
//!   settings. Every accumulator lives inside a single `analyze` call, so the
//!   same inputs always produce the same report.
//!
//! ## Pipeline
//!
//! validation → single pass over purchase records → stable sort by profit →
//! bonus and top products per seller → rounded `SellerReport`s.
//!
//! ## Public API
//!
//! - `SalesAnalyzer`: The main struct that contains the calculation logic.
//! - `AnalysisOptions`: The revenue and bonus strategies for a run.
//! - `SellerReport`: One row of the output.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{SalesAnalyzer, round_money};
pub use error::AnalyticsError;
pub use options::AnalysisOptions;
pub use report::SellerReport;

use core_types::Dataset;

/// Runs the analysis with default report settings.
pub fn analyze(
    data: &Dataset,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, AnalyticsError> {
    SalesAnalyzer::new().analyze(data, options)
}
