//! Quote data structures matching the broker intake format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Property type of the insured dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Single Family Home")]
    SingleFamilyHome,
    Apartment,
    Condominium,
    Townhouse,
    #[serde(rename = "Mobile Home")]
    MobileHome,
}

impl PropertyType {
    /// All property types, in base-rate table order
    pub const ALL: [PropertyType; 5] = [
        PropertyType::SingleFamilyHome,
        PropertyType::Apartment,
        PropertyType::Condominium,
        PropertyType::Townhouse,
        PropertyType::MobileHome,
    ];

    /// Get the label used by the intake forms and rating tables
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamilyHome => "Single Family Home",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condominium => "Condominium",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::MobileHome => "Mobile Home",
        }
    }

    /// Parse a form label into a property type
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == label)
    }
}

/// Construction type of the insured dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionType {
    Brick,
    Concrete,
    #[serde(rename = "Steel Frame")]
    SteelFrame,
    #[serde(rename = "Wood Frame")]
    WoodFrame,
    Stone,
}

impl ConstructionType {
    /// All construction types, in multiplier table order
    pub const ALL: [ConstructionType; 5] = [
        ConstructionType::Brick,
        ConstructionType::Concrete,
        ConstructionType::SteelFrame,
        ConstructionType::WoodFrame,
        ConstructionType::Stone,
    ];

    /// Get the label used by the intake forms and rating tables
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructionType::Brick => "Brick",
            ConstructionType::Concrete => "Concrete",
            ConstructionType::SteelFrame => "Steel Frame",
            ConstructionType::WoodFrame => "Wood Frame",
            ConstructionType::Stone => "Stone",
        }
    }

    /// Parse a form label into a construction type
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == label)
    }
}

/// Optional coverage add-ons that surcharge the premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdditionalCoverage {
    #[serde(rename = "Flood Protection")]
    FloodProtection,
    #[serde(rename = "Earthquake Coverage")]
    EarthquakeCoverage,
    #[serde(rename = "Theft Protection")]
    TheftProtection,
    #[serde(rename = "Fire Protection")]
    FireProtection,
    #[serde(rename = "Water Damage")]
    WaterDamage,
    #[serde(rename = "Jewelry Coverage")]
    JewelryCoverage,
}

impl AdditionalCoverage {
    /// All coverage add-ons, in surcharge table order
    pub const ALL: [AdditionalCoverage; 6] = [
        AdditionalCoverage::FloodProtection,
        AdditionalCoverage::EarthquakeCoverage,
        AdditionalCoverage::TheftProtection,
        AdditionalCoverage::FireProtection,
        AdditionalCoverage::WaterDamage,
        AdditionalCoverage::JewelryCoverage,
    ];

    /// Get the label used by the intake forms and rating tables
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalCoverage::FloodProtection => "Flood Protection",
            AdditionalCoverage::EarthquakeCoverage => "Earthquake Coverage",
            AdditionalCoverage::TheftProtection => "Theft Protection",
            AdditionalCoverage::FireProtection => "Fire Protection",
            AdditionalCoverage::WaterDamage => "Water Damage",
            AdditionalCoverage::JewelryCoverage => "Jewelry Coverage",
        }
    }

    /// Parse a form label into a coverage add-on
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == label)
    }
}

/// Security features that earn a premium credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityFeature {
    #[serde(rename = "Alarm System")]
    AlarmSystem,
    #[serde(rename = "Smoke Detectors")]
    SmokeDetectors,
    #[serde(rename = "Fire Alarm")]
    FireAlarm,
    #[serde(rename = "Security Guard")]
    SecurityGuard,
    #[serde(rename = "CCTV")]
    Cctv,
    Doorman,
    #[serde(rename = "Key Card Access")]
    KeyCardAccess,
}

impl SecurityFeature {
    /// All security features, in credit table order
    pub const ALL: [SecurityFeature; 7] = [
        SecurityFeature::AlarmSystem,
        SecurityFeature::SmokeDetectors,
        SecurityFeature::FireAlarm,
        SecurityFeature::SecurityGuard,
        SecurityFeature::Cctv,
        SecurityFeature::Doorman,
        SecurityFeature::KeyCardAccess,
    ];

    /// Get the label used by the intake forms and rating tables
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityFeature::AlarmSystem => "Alarm System",
            SecurityFeature::SmokeDetectors => "Smoke Detectors",
            SecurityFeature::FireAlarm => "Fire Alarm",
            SecurityFeature::SecurityGuard => "Security Guard",
            SecurityFeature::Cctv => "CCTV",
            SecurityFeature::Doorman => "Doorman",
            SecurityFeature::KeyCardAccess => "Key Card Access",
        }
    }

    /// Parse a form label into a security feature
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == label)
    }
}

/// Mailing address of the insured property
///
/// The two-letter `state` code drives the state multiplier and the
/// regional trend lookup; the remaining fields are carried for the
/// quote record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Two-letter state/region code (e.g. "NY")
    pub state: String,
    pub zip_code: String,
}

/// Policy terms selected on the quote form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDetails {
    /// Product label (e.g. "Home Insurance"); not a rating input
    pub policy_type: String,

    /// Coverage amount in dollars
    pub coverage_amount: f64,

    /// Deductible in dollars, one of the form's discrete tiers
    pub deductible: f64,

    /// Policy effective date
    pub start_date: NaiveDate,

    /// Policy expiry date
    pub end_date: NaiveDate,

    /// Selected coverage add-ons; duplicates have no additional effect
    pub additional_coverages: Vec<AdditionalCoverage>,
}

/// Property characteristics from the quote form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub property_type: PropertyType,

    pub construction_type: ConstructionType,

    /// Year the dwelling was built (validated upstream to 1900..=current)
    pub year_built: i32,

    /// Living area in square feet
    pub square_footage: u32,

    /// Installed security features; duplicates have no additional effect
    pub security_features: Vec<SecurityFeature>,

    pub address: Address,
}

impl PropertyDetails {
    /// Property age in whole years at the evaluation date
    ///
    /// Age increments at the calendar year boundary, matching the
    /// quote form's year-built granularity.
    pub fn age_at(&self, as_of: NaiveDate) -> i32 {
        use chrono::Datelike;
        as_of.year() - self.year_built
    }
}

/// Customer attributes that enter the rating model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Credit score, nominally 300-850
    pub credit_score: u16,

    /// Count of previous claims
    pub previous_claims: u32,
}

/// A complete quote submission, assembled by the broker-facing form layer
///
/// The rating engine only reads these fields; it never mutates or owns
/// a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Unique quote identifier
    pub quote_id: u32,

    pub policy: PolicyDetails,

    pub property: PropertyDetails,

    pub customer: CustomerDetails,
}

impl Quote {
    /// Create a quote from its three sections
    pub fn new(
        quote_id: u32,
        policy: PolicyDetails,
        property: PropertyDetails,
        customer: CustomerDetails,
    ) -> Self {
        Self {
            quote_id,
            policy,
            property,
            customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for t in PropertyType::ALL {
            assert_eq!(PropertyType::from_label(t.as_str()), Some(t));
        }
        for t in ConstructionType::ALL {
            assert_eq!(ConstructionType::from_label(t.as_str()), Some(t));
        }
        for c in AdditionalCoverage::ALL {
            assert_eq!(AdditionalCoverage::from_label(c.as_str()), Some(c));
        }
        for f in SecurityFeature::ALL {
            assert_eq!(SecurityFeature::from_label(f.as_str()), Some(f));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(PropertyType::from_label("Houseboat"), None);
        assert_eq!(ConstructionType::from_label("Straw"), None);
    }

    #[test]
    fn test_property_age() {
        let property = PropertyDetails {
            property_type: PropertyType::SingleFamilyHome,
            construction_type: ConstructionType::Brick,
            year_built: 2010,
            square_footage: 2000,
            security_features: vec![],
            address: Address {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
            },
        };

        let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(property.age_at(as_of), 16);

        // Same calendar year counts as age 0 regardless of month
        let as_of = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(property.age_at(as_of), 0);
    }
}
