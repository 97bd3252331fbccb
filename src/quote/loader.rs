//! Load quote blocks from CSV

use super::{
    AdditionalCoverage, Address, ConstructionType, CustomerDetails, PolicyDetails,
    PropertyDetails, PropertyType, Quote, SecurityFeature,
};
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Default location of the sample quote block
pub const DEFAULT_QUOTES_PATH: &str = "data/sample_quotes.csv";

/// Error converting a CSV row into a quote
#[derive(Debug, thiserror::Error)]
pub enum QuoteParseError {
    #[error("Unknown PropertyType: {0}")]
    UnknownPropertyType(String),

    #[error("Unknown ConstructionType: {0}")]
    UnknownConstructionType(String),

    #[error("Unknown AdditionalCoverage: {0}")]
    UnknownCoverage(String),

    #[error("Unknown SecurityFeature: {0}")]
    UnknownSecurityFeature(String),
}

/// Raw CSV row matching sample_quotes.csv columns
///
/// Multi-valued columns (AdditionalCoverages, SecurityFeatures) hold
/// pipe-separated labels and may be empty.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "QuoteID")]
    quote_id: u32,
    #[serde(rename = "PolicyType")]
    policy_type: String,
    #[serde(rename = "CoverageAmount")]
    coverage_amount: f64,
    #[serde(rename = "Deductible")]
    deductible: f64,
    #[serde(rename = "StartDate")]
    start_date: NaiveDate,
    #[serde(rename = "EndDate")]
    end_date: NaiveDate,
    #[serde(rename = "AdditionalCoverages")]
    additional_coverages: String,
    #[serde(rename = "PropertyType")]
    property_type: String,
    #[serde(rename = "ConstructionType")]
    construction_type: String,
    #[serde(rename = "YearBuilt")]
    year_built: i32,
    #[serde(rename = "SquareFootage")]
    square_footage: u32,
    #[serde(rename = "SecurityFeatures")]
    security_features: String,
    #[serde(rename = "Street")]
    street: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "ZipCode")]
    zip_code: String,
    #[serde(rename = "CreditScore")]
    credit_score: u16,
    #[serde(rename = "PreviousClaims")]
    previous_claims: u32,
}

impl CsvRow {
    fn to_quote(self) -> Result<Quote, QuoteParseError> {
        let property_type = PropertyType::from_label(&self.property_type)
            .ok_or_else(|| QuoteParseError::UnknownPropertyType(self.property_type.clone()))?;

        let construction_type = ConstructionType::from_label(&self.construction_type)
            .ok_or_else(|| {
                QuoteParseError::UnknownConstructionType(self.construction_type.clone())
            })?;

        let additional_coverages = split_labels(&self.additional_coverages)
            .map(|label| {
                AdditionalCoverage::from_label(label)
                    .ok_or_else(|| QuoteParseError::UnknownCoverage(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let security_features = split_labels(&self.security_features)
            .map(|label| {
                SecurityFeature::from_label(label)
                    .ok_or_else(|| QuoteParseError::UnknownSecurityFeature(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Quote {
            quote_id: self.quote_id,
            policy: PolicyDetails {
                policy_type: self.policy_type,
                coverage_amount: self.coverage_amount,
                deductible: self.deductible,
                start_date: self.start_date,
                end_date: self.end_date,
                additional_coverages,
            },
            property: PropertyDetails {
                property_type,
                construction_type,
                year_built: self.year_built,
                square_footage: self.square_footage,
                security_features,
                address: Address {
                    street: self.street,
                    city: self.city,
                    state: self.state,
                    zip_code: self.zip_code,
                },
            },
            customer: CustomerDetails {
                credit_score: self.credit_score,
                previous_claims: self.previous_claims,
            },
        })
    }
}

fn split_labels(field: &str) -> impl Iterator<Item = &str> {
    field.split('|').map(str::trim).filter(|s| !s.is_empty())
}

/// Load all quotes from a CSV file
pub fn load_quotes<P: AsRef<Path>>(path: P) -> Result<Vec<Quote>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut quotes = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let quote = row.to_quote()?;
        quotes.push(quote);
    }

    log::info!("Loaded {} quotes", quotes.len());
    Ok(quotes)
}

/// Load quotes from any reader (e.g., string buffer, request body)
pub fn load_quotes_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Quote>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut quotes = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let quote = row.to_quote()?;
        quotes.push(quote);
    }

    Ok(quotes)
}

/// Load quotes from the default sample_quotes.csv location
pub fn load_sample_quotes() -> Result<Vec<Quote>, Box<dyn Error>> {
    load_quotes(DEFAULT_QUOTES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "QuoteID,PolicyType,CoverageAmount,Deductible,StartDate,EndDate,AdditionalCoverages,PropertyType,ConstructionType,YearBuilt,SquareFootage,SecurityFeatures,Street,City,State,ZipCode,CreditScore,PreviousClaims";

    #[test]
    fn test_load_sample_quotes() {
        let quotes = load_sample_quotes().expect("Failed to load sample quotes");
        assert!(quotes.len() >= 6);

        // Quote 1 mirrors the canonical broker demo submission
        let q1 = &quotes[0];
        assert_eq!(q1.quote_id, 1);
        assert_eq!(q1.property.property_type, PropertyType::SingleFamilyHome);
        assert_eq!(q1.property.address.state, "NY");
        assert_eq!(q1.customer.credit_score, 720);
    }

    #[test]
    fn test_parse_multi_valued_columns() {
        let csv = format!(
            "{}\n7,Home Insurance,250000,500,2026-07-01,2027-07-01,Flood Protection|Jewelry Coverage,Single Family Home,Brick,2010,2000,Alarm System|Smoke Detectors,123 Main St,New York,NY,10001,720,0\n",
            HEADER
        );
        let quotes = load_quotes_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(
            quotes[0].policy.additional_coverages,
            vec![
                AdditionalCoverage::FloodProtection,
                AdditionalCoverage::JewelryCoverage
            ]
        );
        assert_eq!(quotes[0].property.security_features.len(), 2);
    }

    #[test]
    fn test_empty_multi_valued_columns() {
        let csv = format!(
            "{}\n8,Home Insurance,100000,1000,2026-01-01,2027-01-01,,Apartment,Concrete,2020,900,,456 Park Ave,Chicago,IL,60601,640,1\n",
            HEADER
        );
        let quotes = load_quotes_from_reader(csv.as_bytes()).unwrap();
        assert!(quotes[0].policy.additional_coverages.is_empty());
        assert!(quotes[0].property.security_features.is_empty());
    }

    #[test]
    fn test_unknown_label_rejected() {
        let csv = format!(
            "{}\n9,Home Insurance,100000,1000,2026-01-01,2027-01-01,,Houseboat,Concrete,2020,900,,1 Pier Rd,Seattle,WA,98101,700,0\n",
            HEADER
        );
        let result = load_quotes_from_reader(csv.as_bytes());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Houseboat"));
    }
}
