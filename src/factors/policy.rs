//! Policy-side rating factors: coverage and deductible staircases and
//! coverage add-on surcharges

use super::tiers::TierCurve;
use crate::quote::AdditionalCoverage;
use std::collections::HashMap;

/// Coverage-amount multiplier staircase
///
/// Bounds inclusive; coverage above $500k takes the 1.3 fallback.
pub fn default_coverage_curve() -> TierCurve {
    TierCurve::by_ceiling(
        &[
            (100_000.0, 0.8),
            (200_000.0, 0.9),
            (300_000.0, 1.0),
            (400_000.0, 1.1),
            (500_000.0, 1.2),
        ],
        1.3,
    )
}

/// Deductible multiplier staircase; higher deductible earns a lower
/// multiplier, deductibles under $500 take the 1.1 fallback
pub fn default_deductible_curve() -> TierCurve {
    TierCurve::by_floor(
        &[
            (2000.0, 0.8),
            (1500.0, 0.85),
            (1000.0, 0.9),
            (750.0, 0.95),
            (500.0, 1.0),
        ],
        1.1,
    )
}

/// Additive surcharges for optional coverage add-ons
///
/// Unlike the security credits, the surcharge sum is deliberately
/// uncapped: add-ons scale the premium with the exposure they add.
#[derive(Debug, Clone)]
pub struct CoverageSurcharges {
    surcharges: HashMap<AdditionalCoverage, f64>,
}

impl CoverageSurcharges {
    /// Create from loaded CSV data
    pub fn from_loaded(surcharges: &HashMap<AdditionalCoverage, f64>) -> Self {
        Self {
            surcharges: surcharges.clone(),
        }
    }

    /// Default surcharges matching the filed rating plan
    pub fn default_pricing() -> Self {
        let mut surcharges = HashMap::new();
        surcharges.insert(AdditionalCoverage::FloodProtection, 0.15);
        surcharges.insert(AdditionalCoverage::EarthquakeCoverage, 0.20);
        surcharges.insert(AdditionalCoverage::TheftProtection, 0.10);
        surcharges.insert(AdditionalCoverage::FireProtection, 0.05);
        surcharges.insert(AdditionalCoverage::WaterDamage, 0.10);
        surcharges.insert(AdditionalCoverage::JewelryCoverage, 0.10);
        Self { surcharges }
    }

    /// Combined multiplier for the selected add-ons
    ///
    /// Starts at 1.0 and adds each distinct add-on's surcharge once.
    pub fn multiplier(&self, coverages: &[AdditionalCoverage]) -> f64 {
        let raw: f64 = AdditionalCoverage::ALL
            .iter()
            .filter(|c| coverages.contains(c))
            .map(|c| self.surcharges.get(c).copied().unwrap_or(0.0))
            .sum();
        1.0 + raw
    }

    /// Iterate the per-add-on surcharges (for catalog output)
    pub fn entries(&self) -> impl Iterator<Item = (AdditionalCoverage, f64)> + '_ {
        AdditionalCoverage::ALL
            .iter()
            .map(|&c| (c, self.surcharges.get(&c).copied().unwrap_or(0.0)))
    }
}
