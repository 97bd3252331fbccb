//! CSV-based rating table loader
//!
//! Loads the categorical factor tables from CSV files in data/tables/.
//! Rows with labels the rating plan does not know are skipped with a
//! warning; a quote referencing them would rate at the neutral default
//! anyway.

use crate::quote::{AdditionalCoverage, ConstructionType, PropertyType, SecurityFeature};
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the rating tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

/// Load base rates from CSV
/// Returns HashMap<property type, annual base rate>
pub fn load_base_rates(path: &Path) -> Result<HashMap<PropertyType, f64>, Box<dyn Error>> {
    let file = File::open(path.join("base_rates.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rates = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let rate: f64 = record[1].parse()?;
        match PropertyType::from_label(&record[0]) {
            Some(property_type) => {
                rates.insert(property_type, rate);
            }
            None => log::warn!("base_rates.csv: skipping unknown property type {:?}", &record[0]),
        }
    }

    Ok(rates)
}

/// Load construction multipliers from CSV
/// Returns HashMap<construction type, multiplier>
pub fn load_construction_multipliers(
    path: &Path,
) -> Result<HashMap<ConstructionType, f64>, Box<dyn Error>> {
    let file = File::open(path.join("construction_multipliers.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut multipliers = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let multiplier: f64 = record[1].parse()?;
        match ConstructionType::from_label(&record[0]) {
            Some(construction_type) => {
                multipliers.insert(construction_type, multiplier);
            }
            None => log::warn!(
                "construction_multipliers.csv: skipping unknown construction type {:?}",
                &record[0]
            ),
        }
    }

    Ok(multipliers)
}

/// Load coverage add-on surcharges from CSV
/// Returns HashMap<add-on, additive surcharge>
pub fn load_coverage_surcharges(
    path: &Path,
) -> Result<HashMap<AdditionalCoverage, f64>, Box<dyn Error>> {
    let file = File::open(path.join("coverage_surcharges.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut surcharges = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let surcharge: f64 = record[1].parse()?;
        match AdditionalCoverage::from_label(&record[0]) {
            Some(coverage) => {
                surcharges.insert(coverage, surcharge);
            }
            None => log::warn!(
                "coverage_surcharges.csv: skipping unknown coverage {:?}",
                &record[0]
            ),
        }
    }

    Ok(surcharges)
}

/// Load security feature credits from CSV
/// Returns HashMap<feature, additive credit>
pub fn load_security_credits(
    path: &Path,
) -> Result<HashMap<SecurityFeature, f64>, Box<dyn Error>> {
    let file = File::open(path.join("security_credits.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut credits = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let credit: f64 = record[1].parse()?;
        match SecurityFeature::from_label(&record[0]) {
            Some(feature) => {
                credits.insert(feature, credit);
            }
            None => log::warn!(
                "security_credits.csv: skipping unknown security feature {:?}",
                &record[0]
            ),
        }
    }

    Ok(credits)
}

/// Load state multipliers from CSV
/// Returns HashMap<two-letter code, multiplier>
pub fn load_state_multipliers(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let file = File::open(path.join("state_multipliers.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut multipliers = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let state = record[0].to_string();
        let multiplier: f64 = record[1].parse()?;
        multipliers.insert(state, multiplier);
    }

    Ok(multipliers)
}

/// Load seasonal factors from CSV
/// Returns factors indexed by zero-based calendar month
pub fn load_seasonal_factors(path: &Path) -> Result<[f64; 12], Box<dyn Error>> {
    let file = File::open(path.join("seasonal_factors.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    // Months missing from the file stay neutral
    let mut factors = [1.0; 12];

    for result in reader.records() {
        let record = result?;
        let month0: usize = record[0].parse()?;
        let factor: f64 = record[1].parse()?;

        if month0 < factors.len() {
            factors[month0] = factor;
        } else {
            log::warn!("seasonal_factors.csv: skipping out-of-range month {}", month0);
        }
    }

    Ok(factors)
}

/// Loaded regional trend tables: explicit states plus the default sub-table
pub struct LoadedRegionalTrends {
    pub by_state: HashMap<String, HashMap<PropertyType, f64>>,
    pub default_trends: HashMap<PropertyType, f64>,
}

/// Load regional trend factors from CSV
///
/// Rows are (State, PropertyType, Factor); the pseudo-state "default"
/// populates the fallback sub-table.
pub fn load_regional_trends(path: &Path) -> Result<LoadedRegionalTrends, Box<dyn Error>> {
    let file = File::open(path.join("regional_trends.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut by_state: HashMap<String, HashMap<PropertyType, f64>> = HashMap::new();
    let mut default_trends = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let state = record[0].to_string();
        let factor: f64 = record[2].parse()?;

        let property_type = match PropertyType::from_label(&record[1]) {
            Some(t) => t,
            None => {
                log::warn!(
                    "regional_trends.csv: skipping unknown property type {:?}",
                    &record[1]
                );
                continue;
            }
        };

        if state == "default" {
            default_trends.insert(property_type, factor);
        } else {
            by_state
                .entry(state)
                .or_default()
                .insert(property_type, factor);
        }
    }

    Ok(LoadedRegionalTrends {
        by_state,
        default_trends,
    })
}

/// All rating tables loaded from a directory
pub struct LoadedFactors {
    pub base_rates: HashMap<PropertyType, f64>,
    pub construction_multipliers: HashMap<ConstructionType, f64>,
    pub coverage_surcharges: HashMap<AdditionalCoverage, f64>,
    pub security_credits: HashMap<SecurityFeature, f64>,
    pub state_multipliers: HashMap<String, f64>,
    pub seasonal_factors: [f64; 12],
    pub regional_trends: LoadedRegionalTrends,
}

impl LoadedFactors {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            base_rates: load_base_rates(path)?,
            construction_multipliers: load_construction_multipliers(path)?,
            coverage_surcharges: load_coverage_surcharges(path)?,
            security_credits: load_security_credits(path)?,
            state_multipliers: load_state_multipliers(path)?,
            seasonal_factors: load_seasonal_factors(path)?,
            regional_trends: load_regional_trends(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_tables() {
        let result = LoadedFactors::load_default();
        assert!(result.is_ok(), "Failed to load tables: {:?}", result.err());

        let loaded = result.unwrap();

        assert_eq!(loaded.base_rates.len(), 5);
        assert_eq!(
            loaded.base_rates.get(&PropertyType::MobileHome).copied(),
            Some(600.0)
        );

        assert_eq!(loaded.construction_multipliers.len(), 5);
        assert_eq!(loaded.coverage_surcharges.len(), 6);
        assert_eq!(loaded.security_credits.len(), 7);
        assert!(loaded.state_multipliers.len() >= 7);

        // Seasonal table covers the full calendar
        assert_eq!(loaded.seasonal_factors[0], 1.05);
        assert_eq!(loaded.seasonal_factors[5], 0.95);

        // CA and FL carry explicit trend sub-tables
        assert_eq!(loaded.regional_trends.by_state.len(), 2);
        assert_eq!(loaded.regional_trends.default_trends.len(), 5);
    }
}
