//! Per-plan tier call limits
//!
//! Budget accounting (incrementing and resetting usage) lives outside this
//! crate; the limit table only supplies the per-period caps that remaining
//! budget is computed from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-period call caps for the two budgeted tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanLimits {
    /// Mid-tier calls per period
    pub mid: u32,

    /// Premium-tier calls per period
    pub premium: u32,
}

impl Default for PlanLimits {
    fn default() -> Self {
        STARTER_LIMITS
    }
}

const STARTER_LIMITS: PlanLimits = PlanLimits {
    mid: 30,
    premium: 5,
};

const PRO_LIMITS: PlanLimits = PlanLimits {
    mid: 100,
    premium: 20,
};

/// Limit table keyed by plan name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Plan used when a caller's plan is unknown
    pub default_plan: String,

    /// Caps per plan
    pub plans: HashMap<String, PlanLimits>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let mut plans = HashMap::new();
        plans.insert("starter".to_string(), STARTER_LIMITS);
        plans.insert("pro".to_string(), PRO_LIMITS);
        Self {
            default_plan: "starter".to_string(),
            plans,
        }
    }
}

impl LimitsConfig {
    /// Caps for a plan, falling back to the default plan for unknown names
    pub fn for_plan(&self, plan: &str) -> PlanLimits {
        self.plans
            .get(plan)
            .or_else(|| self.plans.get(&self.default_plan))
            .copied()
            .unwrap_or_default()
    }

    /// Validate configuration at startup
    pub fn validate(&self) -> Result<(), String> {
        if self.plans.is_empty() {
            return Err("at least one plan must be configured".to_string());
        }
        if !self.plans.contains_key(&self.default_plan) {
            return Err(format!(
                "default_plan '{}' has no entry in plans",
                self.default_plan
            ));
        }
        Ok(())
    }
}
