//! Rating Engine - Deterministic premium rating for broker property insurance quotes
//!
//! This library provides:
//! - A base rating engine: eleven multiplicative factors over the quote's
//!   policy, property, and customer attributes
//! - A premium optimizer layering seasonal, refined property-age, and
//!   regional trend adjustments with an audit breakdown
//! - Min/max premium range derivation for display
//! - Rating tables loadable from CSV, with a factor catalog for the UI
//! - Batch rating over quote blocks

pub mod factors;
pub mod quote;
pub mod rating;
pub mod runner;

// Re-export commonly used types
pub use factors::{FactorCatalog, RatingFactors};
pub use quote::Quote;
pub use rating::{
    AdjustmentFactors, BasePremiumDetail, OptimizedPremium, PremiumOptimizer, PremiumRange,
    RatingEngine,
};
pub use runner::{QuoteRating, RatingRunner};
