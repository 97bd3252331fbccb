//! Regional and calendar rating factors: state multipliers, seasonal
//! adjustments, and state-by-property-type trend factors

use crate::quote::PropertyType;
use std::collections::HashMap;

/// State multiplier table keyed by two-letter region code
///
/// The table is deliberately partial; codes without an entry rate at
/// the neutral 1.0.
#[derive(Debug, Clone)]
pub struct StateMultipliers {
    multipliers: HashMap<String, f64>,
}

impl StateMultipliers {
    /// Create from loaded CSV data
    pub fn from_loaded(multipliers: &HashMap<String, f64>) -> Self {
        Self {
            multipliers: multipliers.clone(),
        }
    }

    /// Default state multipliers matching the filed rating plan
    pub fn default_pricing() -> Self {
        let mut multipliers = HashMap::new();
        multipliers.insert("CA".to_string(), 1.20); // Wildfire exposure
        multipliers.insert("FL".to_string(), 1.30); // Hurricane exposure
        multipliers.insert("NY".to_string(), 1.15); // Property values
        multipliers.insert("TX".to_string(), 1.10);
        multipliers.insert("IL".to_string(), 1.05);
        multipliers.insert("WA".to_string(), 1.00);
        multipliers.insert("MI".to_string(), 1.00);
        Self { multipliers }
    }

    /// Get the multiplier for a state code (neutral 1.0 when absent)
    pub fn multiplier(&self, state: &str) -> f64 {
        self.multipliers.get(state).copied().unwrap_or(1.0)
    }

    /// Iterate the table entries, sorted by state code (for catalog output)
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<_> = self
            .multipliers
            .iter()
            .map(|(s, m)| (s.clone(), *m))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Seasonal premium adjustments indexed by calendar month (0 = January)
#[derive(Debug, Clone)]
pub struct SeasonalFactors {
    by_month: [f64; 12],
}

impl SeasonalFactors {
    /// Create from loaded CSV data
    pub fn from_loaded(by_month: [f64; 12]) -> Self {
        Self { by_month }
    }

    /// Default seasonal factors from the historical claims analysis:
    /// winter months rate up, early summer rates down
    pub fn default_pricing() -> Self {
        Self {
            by_month: [
                1.05, // January
                1.03, // February
                1.00, // March
                0.98, // April
                0.97, // May
                0.95, // June
                0.96, // July
                0.98, // August
                0.99, // September
                1.00, // October
                1.02, // November
                1.04, // December
            ],
        }
    }

    /// Get the factor for a zero-based calendar month
    pub fn factor(&self, month0: usize) -> f64 {
        self.by_month.get(month0).copied().unwrap_or(1.0)
    }

    /// The full 12-month table (for catalog output)
    pub fn by_month(&self) -> &[f64; 12] {
        &self.by_month
    }
}

/// Regional trend factors keyed by (state, property type)
///
/// CA and FL carry explicit per-property-type trends; every other state
/// resolves through the default sub-table. A property type missing from
/// the resolved sub-table rates at the neutral 1.0.
#[derive(Debug, Clone)]
pub struct RegionalTrends {
    by_state: HashMap<String, HashMap<PropertyType, f64>>,
    default_trends: HashMap<PropertyType, f64>,
}

impl RegionalTrends {
    /// Create from loaded CSV data
    pub fn from_loaded(
        by_state: &HashMap<String, HashMap<PropertyType, f64>>,
        default_trends: &HashMap<PropertyType, f64>,
    ) -> Self {
        Self {
            by_state: by_state.clone(),
            default_trends: default_trends.clone(),
        }
    }

    /// Default regional trends from the historical claims analysis
    pub fn default_pricing() -> Self {
        let mut by_state = HashMap::new();

        let mut ca = HashMap::new();
        ca.insert(PropertyType::SingleFamilyHome, 1.08);
        ca.insert(PropertyType::Apartment, 1.05);
        ca.insert(PropertyType::Condominium, 1.06);
        ca.insert(PropertyType::Townhouse, 1.07);
        ca.insert(PropertyType::MobileHome, 1.12);
        by_state.insert("CA".to_string(), ca);

        let mut fl = HashMap::new();
        fl.insert(PropertyType::SingleFamilyHome, 1.15);
        fl.insert(PropertyType::Apartment, 1.10);
        fl.insert(PropertyType::Condominium, 1.12);
        fl.insert(PropertyType::Townhouse, 1.13);
        fl.insert(PropertyType::MobileHome, 1.25);
        by_state.insert("FL".to_string(), fl);

        let mut default_trends = HashMap::new();
        default_trends.insert(PropertyType::SingleFamilyHome, 1.00);
        default_trends.insert(PropertyType::Apartment, 0.98);
        default_trends.insert(PropertyType::Condominium, 0.99);
        default_trends.insert(PropertyType::Townhouse, 1.01);
        default_trends.insert(PropertyType::MobileHome, 1.05);

        Self {
            by_state,
            default_trends,
        }
    }

    /// Get the trend factor for a (state, property type) pair
    pub fn factor(&self, state: &str, property_type: PropertyType) -> f64 {
        let sub_table = self.by_state.get(state).unwrap_or(&self.default_trends);
        sub_table.get(&property_type).copied().unwrap_or(1.0)
    }

    /// States with explicit sub-tables, sorted (for catalog output)
    pub fn explicit_states(&self) -> Vec<String> {
        let mut states: Vec<_> = self.by_state.keys().cloned().collect();
        states.sort();
        states
    }

    /// Sub-table for a state ("default" trends when absent)
    pub fn sub_table(&self, state: &str) -> &HashMap<PropertyType, f64> {
        self.by_state.get(state).unwrap_or(&self.default_trends)
    }

    /// The default sub-table
    pub fn default_trends(&self) -> &HashMap<PropertyType, f64> {
        &self.default_trends
    }
}
