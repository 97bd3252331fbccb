//! Property-side rating factors: base rates, construction multipliers,
//! property-age staircase, and security-feature credits

use super::tiers::TierCurve;
use crate::quote::{ConstructionType, PropertyType, SecurityFeature};
use std::collections::HashMap;

/// Annual base rate table by property type
#[derive(Debug, Clone)]
pub struct BaseRateTable {
    rates: HashMap<PropertyType, f64>,
    /// Rate applied when a property type is missing from a loaded table
    default_rate: f64,
}

impl BaseRateTable {
    /// Create from loaded CSV data
    pub fn from_loaded(rates: &HashMap<PropertyType, f64>) -> Self {
        Self {
            rates: rates.clone(),
            default_rate: 500.0,
        }
    }

    /// Default base rates matching the filed rating plan
    pub fn default_pricing() -> Self {
        let mut rates = HashMap::new();
        rates.insert(PropertyType::SingleFamilyHome, 500.0);
        rates.insert(PropertyType::Apartment, 350.0);
        rates.insert(PropertyType::Condominium, 400.0);
        rates.insert(PropertyType::Townhouse, 450.0);
        rates.insert(PropertyType::MobileHome, 600.0);
        Self {
            rates,
            default_rate: 500.0,
        }
    }

    /// Get the base rate for a property type
    pub fn rate(&self, property_type: PropertyType) -> f64 {
        self.rates
            .get(&property_type)
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Iterate the table entries (for catalog output)
    pub fn entries(&self) -> impl Iterator<Item = (PropertyType, f64)> + '_ {
        PropertyType::ALL.iter().map(|&t| (t, self.rate(t)))
    }
}

/// Construction type multiplier table
#[derive(Debug, Clone)]
pub struct ConstructionFactors {
    multipliers: HashMap<ConstructionType, f64>,
}

impl ConstructionFactors {
    /// Create from loaded CSV data
    pub fn from_loaded(multipliers: &HashMap<ConstructionType, f64>) -> Self {
        Self {
            multipliers: multipliers.clone(),
        }
    }

    /// Default construction multipliers matching the filed rating plan
    pub fn default_pricing() -> Self {
        let mut multipliers = HashMap::new();
        multipliers.insert(ConstructionType::Brick, 0.90);
        multipliers.insert(ConstructionType::Concrete, 0.85);
        multipliers.insert(ConstructionType::SteelFrame, 0.95);
        multipliers.insert(ConstructionType::WoodFrame, 1.20);
        multipliers.insert(ConstructionType::Stone, 0.95);
        Self { multipliers }
    }

    /// Get the multiplier for a construction type (neutral 1.0 when the
    /// loaded table has no entry)
    pub fn multiplier(&self, construction_type: ConstructionType) -> f64 {
        self.multipliers
            .get(&construction_type)
            .copied()
            .unwrap_or(1.0)
    }

    /// Iterate the table entries (for catalog output)
    pub fn entries(&self) -> impl Iterator<Item = (ConstructionType, f64)> + '_ {
        ConstructionType::ALL.iter().map(|&t| (t, self.multiplier(t)))
    }
}

/// Security feature premium credits with a capped total discount
#[derive(Debug, Clone)]
pub struct SecurityCredits {
    credits: HashMap<SecurityFeature, f64>,
    /// Total discount never exceeds this fraction of premium
    max_discount: f64,
}

impl SecurityCredits {
    /// Create from loaded CSV data
    pub fn from_loaded(credits: &HashMap<SecurityFeature, f64>) -> Self {
        Self {
            credits: credits.clone(),
            max_discount: 0.20,
        }
    }

    /// Default security credits matching the filed rating plan
    pub fn default_pricing() -> Self {
        let mut credits = HashMap::new();
        credits.insert(SecurityFeature::AlarmSystem, 0.05);
        credits.insert(SecurityFeature::SmokeDetectors, 0.03);
        credits.insert(SecurityFeature::FireAlarm, 0.03);
        credits.insert(SecurityFeature::SecurityGuard, 0.07);
        credits.insert(SecurityFeature::Cctv, 0.04);
        credits.insert(SecurityFeature::Doorman, 0.05);
        credits.insert(SecurityFeature::KeyCardAccess, 0.03);
        Self {
            credits,
            max_discount: 0.20,
        }
    }

    /// Total discount fraction for the installed features
    ///
    /// Each distinct feature contributes once; the sum is capped at
    /// `max_discount`.
    pub fn discount(&self, features: &[SecurityFeature]) -> f64 {
        let raw: f64 = SecurityFeature::ALL
            .iter()
            .filter(|f| features.contains(f))
            .map(|f| self.credits.get(f).copied().unwrap_or(0.0))
            .sum();
        raw.min(self.max_discount)
    }

    /// The discount cap
    pub fn max_discount(&self) -> f64 {
        self.max_discount
    }

    /// Iterate the per-feature credits (for catalog output)
    pub fn entries(&self) -> impl Iterator<Item = (SecurityFeature, f64)> + '_ {
        SecurityFeature::ALL
            .iter()
            .map(|&f| (f, self.credits.get(&f).copied().unwrap_or(0.0)))
    }
}

/// Property-age multiplier staircase
///
/// Tier bounds are inclusive of the upper bound; age beyond 50 years
/// takes the 1.5 fallback.
pub fn default_age_curve() -> TierCurve {
    TierCurve::by_ceiling(
        &[(5.0, 0.9), (10.0, 1.0), (20.0, 1.1), (30.0, 1.2), (50.0, 1.3)],
        1.5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rates() {
        let rates = BaseRateTable::default_pricing();

        assert_eq!(rates.rate(PropertyType::SingleFamilyHome), 500.0);
        assert_eq!(rates.rate(PropertyType::Apartment), 350.0);
        assert_eq!(rates.rate(PropertyType::MobileHome), 600.0);
    }

    #[test]
    fn test_base_rate_default_when_table_sparse() {
        let rates = BaseRateTable::from_loaded(&HashMap::new());
        assert_eq!(rates.rate(PropertyType::Townhouse), 500.0);
    }

    #[test]
    fn test_construction_multipliers() {
        let factors = ConstructionFactors::default_pricing();

        assert_eq!(factors.multiplier(ConstructionType::Concrete), 0.85);
        assert_eq!(factors.multiplier(ConstructionType::WoodFrame), 1.20);

        let sparse = ConstructionFactors::from_loaded(&HashMap::new());
        assert_eq!(sparse.multiplier(ConstructionType::Brick), 1.0);
    }

    #[test]
    fn test_security_discount_cap() {
        let credits = SecurityCredits::default_pricing();

        // All seven features sum to 0.30 raw but cap at 0.20
        let all: Vec<_> = SecurityFeature::ALL.to_vec();
        assert_eq!(credits.discount(&all), 0.20);

        // Under the cap, credits add up exactly
        let some = vec![SecurityFeature::AlarmSystem, SecurityFeature::Cctv];
        assert!((credits.discount(&some) - 0.09).abs() < 1e-12);

        assert_eq!(credits.discount(&[]), 0.0);
    }

    #[test]
    fn test_security_discount_ignores_duplicates() {
        let credits = SecurityCredits::default_pricing();
        let twice = vec![SecurityFeature::Doorman, SecurityFeature::Doorman];
        assert!((credits.discount(&twice) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_age_curve_boundaries() {
        let curve = default_age_curve();

        assert_eq!(curve.value(0.0), 0.9);
        assert_eq!(curve.value(5.0), 0.9);
        assert_eq!(curve.value(10.0), 1.0);
        assert_eq!(curve.value(21.0), 1.2);
        assert_eq!(curve.value(50.0), 1.3);
        assert_eq!(curve.value(75.0), 1.5);
    }
}
