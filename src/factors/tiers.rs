//! Piecewise-constant tier curves
//!
//! The rating model expresses several factors as staircases over a
//! numeric input (property age, coverage amount, deductible, credit
//! score, claim count). A curve is an ordered breakpoint list paired
//! with multiplier values plus a fallback for inputs beyond the last
//! breakpoint, so the branching logic lives in one place.

/// Direction a curve's breakpoints are matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TierMatch {
    /// First breakpoint with `x <= bound`, breakpoints ascending
    Ceiling,
    /// First breakpoint with `x >= bound`, breakpoints descending
    Floor,
}

/// Ordered breakpoint/value staircase with a fallback value
#[derive(Debug, Clone)]
pub struct TierCurve {
    tiers: Vec<(f64, f64)>,
    fallback: f64,
    matching: TierMatch,
}

impl TierCurve {
    /// Curve matched as "value for the first bound the input does not
    /// exceed"; `tiers` must be ascending by bound. Inputs above the
    /// last bound take `fallback`.
    pub fn by_ceiling(tiers: &[(f64, f64)], fallback: f64) -> Self {
        debug_assert!(tiers.windows(2).all(|w| w[0].0 < w[1].0));
        Self {
            tiers: tiers.to_vec(),
            fallback,
            matching: TierMatch::Ceiling,
        }
    }

    /// Curve matched as "value for the first bound the input meets or
    /// exceeds"; `tiers` must be descending by bound. Inputs below the
    /// last bound take `fallback`.
    pub fn by_floor(tiers: &[(f64, f64)], fallback: f64) -> Self {
        debug_assert!(tiers.windows(2).all(|w| w[0].0 > w[1].0));
        Self {
            tiers: tiers.to_vec(),
            fallback,
            matching: TierMatch::Floor,
        }
    }

    /// Look up the tier value for an input
    pub fn value(&self, x: f64) -> f64 {
        let matched = match self.matching {
            TierMatch::Ceiling => self.tiers.iter().find(|(bound, _)| x <= *bound),
            TierMatch::Floor => self.tiers.iter().find(|(bound, _)| x >= *bound),
        };
        matched.map(|(_, v)| *v).unwrap_or(self.fallback)
    }

    /// The breakpoint/value pairs, in match order
    pub fn tiers(&self) -> &[(f64, f64)] {
        &self.tiers
    }

    /// The fallback value beyond the last breakpoint
    pub fn fallback(&self) -> f64 {
        self.fallback
    }
}
