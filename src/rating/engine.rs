//! Base rating engine
//!
//! Computes the deterministic base annual premium for a quote as a
//! strict multiplicative composition of table lookups. The engine is
//! pure and has no error paths; it never reads the clock, so the
//! evaluation date arrives as an argument.

use crate::factors::RatingFactors;
use crate::quote::Quote;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Square footage per unit of size loading: the size factor is
/// `1 + square_footage / 10_000`
const SIZE_FACTOR_DIVISOR: f64 = 10_000.0;

/// Round a dollar amount half-up to the cent
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Factor-by-factor breakdown of a base premium, for audit and display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePremiumDetail {
    /// Annual base rate from the property type table
    pub base_rate: f64,
    pub construction_multiplier: f64,
    pub age_multiplier: f64,
    pub coverage_multiplier: f64,
    pub deductible_multiplier: f64,
    pub credit_multiplier: f64,
    pub claims_multiplier: f64,
    /// 1.0 plus the uncapped add-on surcharge sum
    pub coverage_surcharge_multiplier: f64,
    /// Capped security discount fraction, applied as `1 - discount`
    pub security_discount: f64,
    pub state_multiplier: f64,
    pub size_factor: f64,
    /// Final base premium, rounded to the cent
    pub premium: f64,
}

/// The base rating engine
#[derive(Debug, Clone)]
pub struct RatingEngine {
    factors: RatingFactors,
}

impl RatingEngine {
    /// Create an engine over a set of rating tables
    pub fn new(factors: RatingFactors) -> Self {
        Self { factors }
    }

    /// Create an engine with the default filed rating plan
    pub fn default_pricing() -> Self {
        Self::new(RatingFactors::default_pricing())
    }

    /// The tables this engine rates with
    pub fn factors(&self) -> &RatingFactors {
        &self.factors
    }

    /// Compute the base annual premium for a quote at an evaluation date
    pub fn base_premium(&self, quote: &Quote, as_of: NaiveDate) -> f64 {
        self.base_premium_detail(quote, as_of).premium
    }

    /// Compute the base premium with its full factor breakdown
    ///
    /// Multiplication order does not affect the result; every factor is
    /// always applied.
    pub fn base_premium_detail(&self, quote: &Quote, as_of: NaiveDate) -> BasePremiumDetail {
        let f = &self.factors;
        let property = &quote.property;
        let policy = &quote.policy;
        let customer = &quote.customer;

        let base_rate = f.base_rates.rate(property.property_type);
        let construction_multiplier = f.construction.multiplier(property.construction_type);
        let age_multiplier = f.property_age.value(property.age_at(as_of) as f64);
        let coverage_multiplier = f.coverage_amount.value(policy.coverage_amount);
        let deductible_multiplier = f.deductible.value(policy.deductible);
        let credit_multiplier = f.credit_score.value(customer.credit_score as f64);
        let claims_multiplier = f.claims.value(customer.previous_claims as f64);
        let coverage_surcharge_multiplier =
            f.coverage_surcharges.multiplier(&policy.additional_coverages);
        let security_discount = f.security.discount(&property.security_features);
        let state_multiplier = f.states.multiplier(&property.address.state);
        let size_factor = 1.0 + property.square_footage as f64 / SIZE_FACTOR_DIVISOR;

        let premium = round_cents(
            base_rate
                * construction_multiplier
                * age_multiplier
                * coverage_multiplier
                * deductible_multiplier
                * credit_multiplier
                * claims_multiplier
                * coverage_surcharge_multiplier
                * (1.0 - security_discount)
                * state_multiplier
                * size_factor,
        );

        BasePremiumDetail {
            base_rate,
            construction_multiplier,
            age_multiplier,
            coverage_multiplier,
            deductible_multiplier,
            credit_multiplier,
            claims_multiplier,
            coverage_surcharge_multiplier,
            security_discount,
            state_multiplier,
            size_factor,
            premium,
        }
    }

    /// Base premium evaluated at today's date (live form estimates);
    /// prefer `base_premium` with an explicit date for reproducibility
    pub fn base_premium_today(&self, quote: &Quote) -> f64 {
        self.base_premium(quote, chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{
        Address, ConstructionType, CustomerDetails, PolicyDetails, PropertyDetails, PropertyType,
        SecurityFeature,
    };
    use approx::assert_abs_diff_eq;

    fn demo_quote() -> Quote {
        // The canonical broker demo submission: SFH in NY, brick,
        // built in the evaluation year
        Quote {
            quote_id: 1,
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
                    state: "NY".to_string(),
                    zip_code: "10001".to_string(),
                },
            },
            customer: CustomerDetails {
                credit_score: 720,
                previous_claims: 0,
            },
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_demo_quote_premium() {
        let engine = RatingEngine::default_pricing();
        let detail = engine.base_premium_detail(&demo_quote(), as_of());

        assert_eq!(detail.base_rate, 500.0);
        assert_eq!(detail.construction_multiplier, 0.9);
        assert_eq!(detail.age_multiplier, 0.9); // Age 0
        assert_eq!(detail.coverage_multiplier, 1.0); // 250k is in the <=300k tier
        assert_eq!(detail.deductible_multiplier, 1.0);
        assert_eq!(detail.credit_multiplier, 0.9); // 720 is in the >=700 tier
        assert_eq!(detail.claims_multiplier, 0.9);
        assert_eq!(detail.coverage_surcharge_multiplier, 1.0);
        assert_eq!(detail.security_discount, 0.0);
        assert_eq!(detail.state_multiplier, 1.15);
        assert_abs_diff_eq!(detail.size_factor, 1.2, epsilon = 1e-12);

        // 500 * 0.9 * 0.9 * 0.9 * 0.9 * 1.15 * 1.2 = 452.709
        assert_eq!(detail.premium, 452.71);
    }

    #[test]
    fn test_all_security_features_cap_at_twenty_percent() {
        let engine = RatingEngine::default_pricing();
        let mut quote = demo_quote();
        quote.property.security_features = SecurityFeature::ALL.to_vec();

        let detail = engine.base_premium_detail(&quote, as_of());
        assert_eq!(detail.security_discount, 0.20);

        // Premium is the demo value times 0.80, not 0.70
        assert_eq!(detail.premium, 362.17);
    }

    #[test]
    fn test_claims_monotonicity() {
        let engine = RatingEngine::default_pricing();
        let mut quote = demo_quote();

        let mut last = 0.0;
        for claims in 0..=4 {
            quote.customer.previous_claims = claims;
            let premium = engine.base_premium(&quote, as_of());
            assert!(
                premium > last,
                "Premium should strictly increase with claims: {} vs {}",
                premium,
                last
            );
            last = premium;
        }
    }

    #[test]
    fn test_deductible_monotonicity() {
        let engine = RatingEngine::default_pricing();
        let mut quote = demo_quote();

        let mut last = f64::MAX;
        for deductible in [500.0, 1000.0, 2000.0] {
            quote.policy.deductible = deductible;
            let premium = engine.base_premium(&quote, as_of());
            assert!(
                premium < last,
                "Premium should strictly decrease with deductible: {} vs {}",
                premium,
                last
            );
            last = premium;
        }
    }

    #[test]
    fn test_determinism() {
        let engine = RatingEngine::default_pricing();
        let quote = demo_quote();

        let first = engine.base_premium(&quote, as_of());
        for _ in 0..10 {
            assert_eq!(engine.base_premium(&quote, as_of()), first);
        }
    }

    #[test]
    fn test_apartment_quote_premium() {
        let engine = RatingEngine::default_pricing();
        let quote = Quote {
            quote_id: 2,
            policy: PolicyDetails {
                policy_type: "Home Insurance".to_string(),
                coverage_amount: 180_000.0,
                deductible: 1000.0,
                start_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2027, 7, 15).unwrap(),
                additional_coverages: vec![crate::quote::AdditionalCoverage::FireProtection],
            },
            property: PropertyDetails {
                property_type: PropertyType::Apartment,
                construction_type: ConstructionType::Concrete,
                year_built: 2015,
                square_footage: 1200,
                security_features: vec![
                    SecurityFeature::SecurityGuard,
                    SecurityFeature::Cctv,
                ],
                address: Address {
                    street: "456 Park Ave".to_string(),
                    city: "Chicago".to_string(),
                    state: "IL".to_string(),
                    zip_code: "60601".to_string(),
                },
            },
            customer: CustomerDetails {
                credit_score: 680,
                previous_claims: 1,
            },
        };

        // 350 * 0.85 * 1.1 (age 11) * 0.9 * 0.9 * 1.0 * 1.0
        //     * 1.05 * 0.89 * 1.05 * 1.12 = 291.3073
        assert_eq!(engine.base_premium(&quote, as_of()), 291.31);
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(round_cents(452.709), 452.71);
        assert_eq!(round_cents(452.704), 452.70);
        // 0.125 is exact in binary, so the half-cent is a true half
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_unknown_state_rates_neutral() {
        let engine = RatingEngine::default_pricing();
        let mut quote = demo_quote();
        quote.property.address.state = "OH".to_string();

        let detail = engine.base_premium_detail(&quote, as_of());
        assert_eq!(detail.state_multiplier, 1.0);
    }
}
