//! Batch rating runner
//!
//! Pre-builds the rating tables once, then rates many quotes without
//! re-reading CSV files.

use crate::factors::RatingFactors;
use crate::quote::Quote;
use crate::rating::{BasePremiumDetail, OptimizedPremium, PremiumOptimizer, PremiumRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the rater produces for one quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRating {
    pub quote_id: u32,
    pub base: BasePremiumDetail,
    pub optimized: OptimizedPremium,
    pub range: PremiumRange,
}

/// Pre-loaded runner for rating quote blocks
///
/// # Example
/// ```ignore
/// let runner = RatingRunner::from_csv()?;
/// for quote in &quotes {
///     let rating = runner.rate(quote, as_of);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RatingRunner {
    optimizer: PremiumOptimizer,
}

impl RatingRunner {
    /// Create a runner with the default in-memory rating plan
    pub fn new() -> Self {
        Self::with_factors(RatingFactors::default_pricing())
    }

    /// Create a runner by loading tables from CSV files
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::with_factors(RatingFactors::from_csv()?))
    }

    /// Create a runner from a specific tables directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::with_factors(RatingFactors::from_csv_path(path)?))
    }

    /// Create a runner with pre-built tables
    pub fn with_factors(factors: RatingFactors) -> Self {
        Self {
            optimizer: PremiumOptimizer::new(factors),
        }
    }

    /// The tables this runner rates with
    pub fn factors(&self) -> &RatingFactors {
        self.optimizer.engine().factors()
    }

    /// Rate a single quote at an evaluation date
    pub fn rate(&self, quote: &Quote, as_of: NaiveDate) -> QuoteRating {
        let base = self
            .optimizer
            .engine()
            .base_premium_detail(quote, as_of);
        let optimized = self.optimizer.optimized_premium(quote, as_of);
        let range = self.optimizer.premium_range(quote, as_of);

        QuoteRating {
            quote_id: quote.quote_id,
            base,
            optimized,
            range,
        }
    }

    /// Rate a block of quotes at the same evaluation date
    pub fn rate_batch(&self, quotes: &[Quote], as_of: NaiveDate) -> Vec<QuoteRating> {
        quotes.iter().map(|q| self.rate(q, as_of)).collect()
    }
}

impl Default for RatingRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{
        Address, ConstructionType, CustomerDetails, PolicyDetails, PropertyDetails, PropertyType,
    };

    fn quote(quote_id: u32, state: &str) -> Quote {
        Quote {
            quote_id,
            policy: PolicyDetails {
                policy_type: "Home Insurance".to_string(),
                coverage_amount: 250_000.0,
                deductible: 500.0,
                start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2027, 7, 1).unwrap(),
                additional_coverages: vec![],
            },
            property: PropertyDetails {
                property_type: PropertyType::SingleFamilyHome,
                construction_type: ConstructionType::Brick,
                year_built: 2026,
                square_footage: 2000,
                security_features: vec![],
                address: Address {
                    street: "123 Main St".to_string(),
                    city: "New York".to_string(),
                    state: state.to_string(),
                    zip_code: "10001".to_string(),
                },
            },
            customer: CustomerDetails {
                credit_score: 720,
                previous_claims: 0,
            },
        }
    }

    #[test]
    fn test_rate_ties_results_together() {
        let runner = RatingRunner::new();
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

        let rating = runner.rate(&quote(42, "NY"), as_of);

        assert_eq!(rating.quote_id, 42);
        // Optimizer starts from the base engine's premium
        assert_eq!(rating.optimized.base_rate, rating.base.premium);
        // Range recommends the optimized premium
        assert_eq!(rating.range.recommended_premium, rating.optimized.premium);
    }

    #[test]
    fn test_rate_batch_preserves_order() {
        let runner = RatingRunner::new();
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

        let quotes = vec![quote(1, "NY"), quote(2, "CA"), quote(3, "WA")];
        let ratings = runner.rate_batch(&quotes, as_of);

        assert_eq!(ratings.len(), 3);
        let ids: Vec<u32> = ratings.iter().map(|r| r.quote_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Batch results match individual rating
        let single = runner.rate(&quotes[1], as_of);
        assert_eq!(ratings[1].optimized.premium, single.optimized.premium);
    }
}
