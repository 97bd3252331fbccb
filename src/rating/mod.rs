//! Rating engines: base premium model and optimizer refinement

mod engine;
mod optimizer;

pub use engine::{round_cents, BasePremiumDetail, RatingEngine};
pub use optimizer::{
    advanced_age_impact, AdjustmentFactors, OptimizedPremium, PremiumOptimizer, PremiumRange,
};
