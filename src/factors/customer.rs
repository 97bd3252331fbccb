//! Customer-side rating factors: credit score and claims history

use super::tiers::TierCurve;

/// Credit-score multiplier staircase; stronger credit earns a lower
/// multiplier, scores under 550 take the 1.3 fallback
pub fn default_credit_score_curve() -> TierCurve {
    TierCurve::by_floor(
        &[
            (750.0, 0.85),
            (700.0, 0.9),
            (650.0, 1.0),
            (600.0, 1.1),
            (550.0, 1.2),
        ],
        1.3,
    )
}

/// Previous-claims multiplier staircase; four or more claims take the
/// 1.5 fallback
pub fn default_claims_curve() -> TierCurve {
    TierCurve::by_ceiling(&[(0.0, 0.9), (1.0, 1.0), (2.0, 1.15), (3.0, 1.3)], 1.5)
}
