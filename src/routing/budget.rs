//! Budget cascade - walks a wanted tier down to an affordable one
//!
//! Pure function of the wanted tier and the two counters; never reads
//! request content or operational flags. This is the only place the
//! retry-on-failure hint is populated.

use crate::config::LadderConfig;
use crate::routing::context::TierBudget;
use crate::routing::decision::Tier;

const DOWNGRADED_TO_MID: &str = ", budget exhausted, downgraded to mid";
const DOWNGRADED_TO_FLOOR: &str = ", budget exhausted, downgraded to floor";
const ALL_EXHAUSTED: &str = ", all budgets exhausted, downgraded to floor";

/// Outcome of resolving a wanted tier against the budget snapshot.
#[derive(Debug, Clone)]
pub(crate) struct TierResolution {
    pub tier: Tier,
    pub model: String,
    /// Appended to the calling branch's reason prefix when a downgrade occurred
    pub suffix: Option<&'static str>,
    pub retry_on_failure: Option<String>,
}

/// Resolve `wanted` to the highest affordable tier.
///
/// A premium request degrades premium -> mid -> floor. A mid request degrades
/// mid -> floor, and carries a premium retry hint only when mid itself was
/// affordable and premium budget remains: a tier we just failed to afford is
/// never offered as a retry target.
pub(crate) fn resolve(wanted: Tier, budget: &TierBudget, ladder: &LadderConfig) -> TierResolution {
    match wanted {
        Tier::Premium => {
            if budget.premium_remaining > 0 {
                return TierResolution {
                    tier: Tier::Premium,
                    model: ladder.premium.clone(),
                    suffix: None,
                    retry_on_failure: None,
                };
            }
            if budget.mid_remaining > 0 {
                return TierResolution {
                    tier: Tier::Mid,
                    model: ladder.mid.clone(),
                    suffix: Some(DOWNGRADED_TO_MID),
                    retry_on_failure: None,
                };
            }
            TierResolution {
                tier: Tier::Floor,
                model: ladder.floor.clone(),
                suffix: Some(ALL_EXHAUSTED),
                retry_on_failure: None,
            }
        }
        Tier::Mid => {
            if budget.mid_remaining > 0 {
                let retry = (budget.premium_remaining > 0).then(|| ladder.premium.clone());
                return TierResolution {
                    tier: Tier::Mid,
                    model: ladder.mid.clone(),
                    suffix: None,
                    retry_on_failure: retry,
                };
            }
            TierResolution {
                tier: Tier::Floor,
                model: ladder.floor.clone(),
                suffix: Some(DOWNGRADED_TO_FLOOR),
                retry_on_failure: None,
            }
        }
        // Floor is never budget-gated
        Tier::Floor => TierResolution {
            tier: Tier::Floor,
            model: ladder.floor.clone(),
            suffix: None,
            retry_on_failure: None,
        },
    }
}
