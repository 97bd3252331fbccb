//! Quote input structures and loaders

mod data;
pub mod loader;

pub use data::{
    AdditionalCoverage, Address, ConstructionType, CustomerDetails, PolicyDetails,
    PropertyDetails, PropertyType, Quote, SecurityFeature,
};
pub use loader::{load_quotes, load_sample_quotes, QuoteParseError};
