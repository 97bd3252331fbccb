//! Rating factor tables: categorical multiplier tables, tier curves,
//! and calendar/regional adjustments

mod customer;
mod policy;
mod property;
mod regional;
mod tiers;
pub mod loader;

pub use customer::{default_claims_curve, default_credit_score_curve};
pub use policy::{default_coverage_curve, default_deductible_curve, CoverageSurcharges};
pub use property::{default_age_curve, BaseRateTable, ConstructionFactors, SecurityCredits};
pub use regional::{RegionalTrends, SeasonalFactors, StateMultipliers};
pub use tiers::TierCurve;
pub use loader::LoadedFactors;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Container for every table the rating engine consults
#[derive(Debug, Clone)]
pub struct RatingFactors {
    pub base_rates: BaseRateTable,
    pub construction: ConstructionFactors,
    pub property_age: TierCurve,
    pub coverage_amount: TierCurve,
    pub deductible: TierCurve,
    pub credit_score: TierCurve,
    pub claims: TierCurve,
    pub coverage_surcharges: CoverageSurcharges,
    pub security: SecurityCredits,
    pub states: StateMultipliers,
    pub seasonal: SeasonalFactors,
    pub regional_trends: RegionalTrends,
}

impl RatingFactors {
    /// Create factors with the default values from the filed rating plan
    pub fn default_pricing() -> Self {
        Self {
            base_rates: BaseRateTable::default_pricing(),
            construction: ConstructionFactors::default_pricing(),
            property_age: default_age_curve(),
            coverage_amount: default_coverage_curve(),
            deductible: default_deductible_curve(),
            credit_score: default_credit_score_curve(),
            claims: default_claims_curve(),
            coverage_surcharges: CoverageSurcharges::default_pricing(),
            security: SecurityCredits::default_pricing(),
            states: StateMultipliers::default_pricing(),
            seasonal: SeasonalFactors::default_pricing(),
            regional_trends: RegionalTrends::default_pricing(),
        }
    }

    /// Load the categorical tables from CSV files in the default
    /// location (data/tables/); tier curves stay at their calibrated
    /// in-code values
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load the categorical tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedFactors::load_from(path)?;

        Ok(Self {
            base_rates: BaseRateTable::from_loaded(&loaded.base_rates),
            construction: ConstructionFactors::from_loaded(&loaded.construction_multipliers),
            property_age: default_age_curve(),
            coverage_amount: default_coverage_curve(),
            deductible: default_deductible_curve(),
            credit_score: default_credit_score_curve(),
            claims: default_claims_curve(),
            coverage_surcharges: CoverageSurcharges::from_loaded(&loaded.coverage_surcharges),
            security: SecurityCredits::from_loaded(&loaded.security_credits),
            states: StateMultipliers::from_loaded(&loaded.state_multipliers),
            seasonal: SeasonalFactors::from_loaded(loaded.seasonal_factors),
            regional_trends: RegionalTrends::from_loaded(
                &loaded.regional_trends.by_state,
                &loaded.regional_trends.default_trends,
            ),
        })
    }

    /// Snapshot of every table for display in the quoting UI
    pub fn catalog(&self) -> FactorCatalog {
        let regional_trends = self
            .regional_trends
            .explicit_states()
            .into_iter()
            .chain(std::iter::once("default".to_string()))
            .map(|state| {
                let sub_table = if state == "default" {
                    self.regional_trends.default_trends()
                } else {
                    self.regional_trends.sub_table(&state)
                };
                let factors = sub_table
                    .iter()
                    .map(|(t, f)| (t.as_str().to_string(), *f))
                    .collect();
                (state, factors)
            })
            .collect();

        FactorCatalog {
            base_rates: self
                .base_rates
                .entries()
                .map(|(t, r)| (t.as_str().to_string(), r))
                .collect(),
            construction_multipliers: self
                .construction
                .entries()
                .map(|(t, m)| (t.as_str().to_string(), m))
                .collect(),
            coverage_surcharges: self
                .coverage_surcharges
                .entries()
                .map(|(c, s)| (c.as_str().to_string(), s))
                .collect(),
            security_credits: self
                .security
                .entries()
                .map(|(f, c)| (f.as_str().to_string(), c))
                .collect(),
            max_security_discount: self.security.max_discount(),
            state_multipliers: self.states.entries().into_iter().collect(),
            seasonal_factors: self.seasonal.by_month().to_vec(),
            regional_trends,
        }
    }
}

/// Serializable snapshot of the rating tables
///
/// Consumed by the quoting UI to render "how your premium is built"
/// panels; every map is ordered for stable output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorCatalog {
    pub base_rates: BTreeMap<String, f64>,
    pub construction_multipliers: BTreeMap<String, f64>,
    pub coverage_surcharges: BTreeMap<String, f64>,
    pub security_credits: BTreeMap<String, f64>,
    pub max_security_discount: f64,
    pub state_multipliers: BTreeMap<String, f64>,
    /// Factors indexed by zero-based calendar month
    pub seasonal_factors: Vec<f64>,
    pub regional_trends: BTreeMap<String, BTreeMap<String, f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::PropertyType;

    #[test]
    fn test_default_pricing_matches_plan() {
        let factors = RatingFactors::default_pricing();

        assert_eq!(factors.base_rates.rate(PropertyType::Condominium), 400.0);
        assert_eq!(factors.property_age.value(15.0), 1.1);
        assert_eq!(factors.coverage_amount.value(250_000.0), 1.0);
        assert_eq!(factors.deductible.value(500.0), 1.0);
        assert_eq!(factors.credit_score.value(720.0), 0.9);
        assert_eq!(factors.claims.value(0.0), 0.9);
        assert_eq!(factors.states.multiplier("CA"), 1.20);
        assert_eq!(factors.seasonal.factor(1), 1.03);
    }

    #[test]
    fn test_csv_tables_match_defaults() {
        let from_csv = RatingFactors::from_csv().expect("Failed to load tables");
        let defaults = RatingFactors::default_pricing();

        for t in PropertyType::ALL {
            assert_eq!(from_csv.base_rates.rate(t), defaults.base_rates.rate(t));
            assert_eq!(
                from_csv.regional_trends.factor("FL", t),
                defaults.regional_trends.factor("FL", t)
            );
        }
        for month0 in 0..12 {
            assert_eq!(from_csv.seasonal.factor(month0), defaults.seasonal.factor(month0));
        }
        assert_eq!(from_csv.states.multiplier("TX"), 1.10);
    }

    #[test]
    fn test_catalog_snapshot() {
        let catalog = RatingFactors::default_pricing().catalog();

        assert_eq!(catalog.base_rates.len(), 5);
        assert_eq!(catalog.base_rates.get("Mobile Home").copied(), Some(600.0));
        assert_eq!(catalog.security_credits.len(), 7);
        assert_eq!(catalog.max_security_discount, 0.20);
        assert_eq!(catalog.seasonal_factors.len(), 12);
        assert_eq!(catalog.regional_trends.len(), 3); // CA, FL, default

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"baseRates\""));
        assert!(json.contains("\"regionalTrends\""));
    }
}
