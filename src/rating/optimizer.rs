//! Premium optimizer
//!
//! Second-pass refinement of the base premium using signals from the
//! historical claims analysis: a seasonal calendar effect, a finer
//! property-age curve, and state-by-property-type regional trends.
//! Also derives the min/max range shown next to the recommended
//! premium.

use super::engine::{round_cents, RatingEngine};
use crate::factors::RatingFactors;
use crate::quote::Quote;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lower bound of the displayed premium range: recommended x 0.85
const RANGE_MINIMUM_FACTOR: f64 = 0.85;

/// Upper bound of the displayed premium range: recommended x 1.15
const RANGE_MAXIMUM_FACTOR: f64 = 1.15;

/// Adjustment factor values applied on top of the base premium
///
/// The serialized field names (`seasonal`, `propertyAge`,
/// `regionalRisk`) are a display contract with the quoting UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentFactors {
    pub seasonal: f64,
    pub property_age: f64,
    pub regional_risk: f64,
}

/// An optimized premium with its audit breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedPremium {
    /// Final optimized premium, rounded to the cent
    pub premium: f64,

    /// The base rating engine's premium this result started from
    pub base_rate: f64,

    /// The three refinement factors that were applied
    pub adjustments: AdjustmentFactors,
}

/// Min/max/recommended premium band for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumRange {
    pub minimum_premium: f64,
    pub maximum_premium: f64,
    pub recommended_premium: f64,
}

/// Refined property-age impact
///
/// A finer curve than the base engine's staircase: piecewise linear
/// within tiers, continuous across the 10/20/40/60 boundaries, with
/// the tail contribution capped so the factor never exceeds 1.60.
pub fn advanced_age_impact(age: i32) -> f64 {
    let age = age as f64;
    if age <= 5.0 {
        0.88
    } else if age <= 10.0 {
        0.92 + (age - 5.0) * 0.016
    } else if age <= 20.0 {
        1.00 + (age - 10.0) * 0.008
    } else if age <= 40.0 {
        1.08 + (age - 20.0) * 0.006
    } else if age <= 60.0 {
        1.20 + (age - 40.0) * 0.005
    } else {
        1.30 + ((age - 60.0) * 0.002).min(0.30)
    }
}

/// The premium optimizer, wrapping a base rating engine
#[derive(Debug, Clone)]
pub struct PremiumOptimizer {
    engine: RatingEngine,
}

impl PremiumOptimizer {
    /// Create an optimizer over a set of rating tables
    pub fn new(factors: RatingFactors) -> Self {
        Self {
            engine: RatingEngine::new(factors),
        }
    }

    /// Create an optimizer with the default filed rating plan
    pub fn default_pricing() -> Self {
        Self::new(RatingFactors::default_pricing())
    }

    /// Wrap an existing engine
    pub fn from_engine(engine: RatingEngine) -> Self {
        Self { engine }
    }

    /// The wrapped base rating engine
    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    /// Compute the optimized premium for a quote at an evaluation date
    ///
    /// Starts from the base engine's (already rounded) premium and
    /// applies the three refinement factors; the base premium is never
    /// re-derived here.
    pub fn optimized_premium(&self, quote: &Quote, as_of: NaiveDate) -> OptimizedPremium {
        let base_premium = self.engine.base_premium(quote, as_of);

        let factors = self.engine.factors();
        let seasonal = factors.seasonal.factor(as_of.month0() as usize);
        let property_age = advanced_age_impact(quote.property.age_at(as_of));
        let regional_risk = factors
            .regional_trends
            .factor(&quote.property.address.state, quote.property.property_type);

        let premium = round_cents(base_premium * seasonal * property_age * regional_risk);

        OptimizedPremium {
            premium,
            base_rate: base_premium,
            adjustments: AdjustmentFactors {
                seasonal,
                property_age,
                regional_risk,
            },
        }
    }

    /// Derive the displayed premium band around the optimized premium
    ///
    /// The bounds are ±15% of the recommended premium, each rounded to
    /// the cent independently; the optimizer runs exactly once.
    pub fn premium_range(&self, quote: &Quote, as_of: NaiveDate) -> PremiumRange {
        let optimized = self.optimized_premium(quote, as_of);
        let recommended = optimized.premium;

        PremiumRange {
            minimum_premium: round_cents(recommended * RANGE_MINIMUM_FACTOR),
            maximum_premium: round_cents(recommended * RANGE_MAXIMUM_FACTOR),
            recommended_premium: recommended,
        }
    }

    /// Optimized premium evaluated at today's date (live form
    /// estimates); prefer `optimized_premium` with an explicit date
    /// for reproducibility
    pub fn optimized_premium_today(&self, quote: &Quote) -> OptimizedPremium {
        self.optimized_premium(quote, chrono::Local::now().date_naive())
    }
}
