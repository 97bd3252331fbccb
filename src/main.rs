//! Rating Engine CLI
//!
//! Command-line demo that rates one representative quote and prints
//! the full factor breakdown

use chrono::NaiveDate;
use rating_engine::quote::{
    Address, ConstructionType, CustomerDetails, PolicyDetails, PropertyDetails, PropertyType,
    Quote, SecurityFeature,
};
use rating_engine::RatingRunner;

fn main() {
    env_logger::init();

    println!("Rating Engine v0.1.0");
    println!("====================\n");

    // Representative broker submission: brick single-family home in NY
    let quote = Quote {
        quote_id: 1,
        policy: PolicyDetails {
            policy_type: "Home Insurance".to_string(),
            coverage_amount: 250_000.0,
            deductible: 500.0,
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2027, 7, 1).expect("valid date"),
            additional_coverages: vec![],
        },
        property: PropertyDetails {
            property_type: PropertyType::SingleFamilyHome,
            construction_type: ConstructionType::Brick,
            year_built: 2010,
            square_footage: 2000,
            security_features: vec![
                SecurityFeature::AlarmSystem,
                SecurityFeature::SmokeDetectors,
            ],
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
    };

    let as_of = chrono::Local::now().date_naive();
    let runner = RatingRunner::new();
    let rating = runner.rate(&quote, as_of);

    println!("Quote: {}", quote.quote_id);
    println!("  Property: {}, {}", quote.property.property_type.as_str(), quote.property.address.state);
    println!("  Construction: {}", quote.property.construction_type.as_str());
    println!("  Year Built: {}", quote.property.year_built);
    println!("  Coverage: ${:.2}", quote.policy.coverage_amount);
    println!("  Deductible: ${:.2}", quote.policy.deductible);
    println!("  Evaluation Date: {}", as_of);
    println!();

    let base = &rating.base;
    println!("Base Premium Factors:");
    println!("  {:<24} {:>10.2}", "Base rate", base.base_rate);
    println!("  {:<24} {:>10.4}", "Construction", base.construction_multiplier);
    println!("  {:<24} {:>10.4}", "Property age", base.age_multiplier);
    println!("  {:<24} {:>10.4}", "Coverage amount", base.coverage_multiplier);
    println!("  {:<24} {:>10.4}", "Deductible", base.deductible_multiplier);
    println!("  {:<24} {:>10.4}", "Credit score", base.credit_multiplier);
    println!("  {:<24} {:>10.4}", "Claims history", base.claims_multiplier);
    println!("  {:<24} {:>10.4}", "Coverage add-ons", base.coverage_surcharge_multiplier);
    println!("  {:<24} {:>10.4}", "Security discount", base.security_discount);
    println!("  {:<24} {:>10.4}", "State", base.state_multiplier);
    println!("  {:<24} {:>10.4}", "Size factor", base.size_factor);
    println!("  {:<24} {:>10.2}", "Base premium", base.premium);
    println!();

    let optimized = &rating.optimized;
    println!("Optimizer Adjustments:");
    println!("  {:<24} {:>10.4}", "Seasonal", optimized.adjustments.seasonal);
    println!("  {:<24} {:>10.4}", "Property age (refined)", optimized.adjustments.property_age);
    println!("  {:<24} {:>10.4}", "Regional risk", optimized.adjustments.regional_risk);
    println!("  {:<24} {:>10.2}", "Optimized premium", optimized.premium);
    println!();

    let range = &rating.range;
    println!("Premium Range:");
    println!("  Minimum:     ${:.2}", range.minimum_premium);
    println!("  Recommended: ${:.2}", range.recommended_premium);
    println!("  Maximum:     ${:.2}", range.maximum_premium);
}
