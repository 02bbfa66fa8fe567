//! Final routing decision and the capability tier ladder

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Capability tier a request can be routed to.
///
/// Ordering follows capability and cost: `Floor < Mid < Premium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Always available, no budget counter
    Floor,

    /// Budgeted mid tier
    Mid,

    /// Budgeted premium tier
    Premium,
}

impl Tier {
    /// Numeric rank: floor = 1, mid = 2, premium = 3
    pub fn rank(self) -> u8 {
        match self {
            Tier::Floor => 1,
            Tier::Mid => 2,
            Tier::Premium => 3,
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floor" | "1" => Ok(Tier::Floor),
            "mid" | "2" => Ok(Tier::Mid),
            "premium" | "3" => Ok(Tier::Premium),
            _ => Err(format!("Unknown tier: {}", s)),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Floor => write!(f, "floor"),
            Tier::Mid => write!(f, "mid"),
            Tier::Premium => write!(f, "premium"),
        }
    }
}

/// Final routing decision for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    /// Model identifier to dispatch to
    pub model: String,

    /// Selected capability tier
    pub tier: Tier,

    /// Which cascade branch fired, plus any downgrade suffix (for observability)
    pub reason: String,

    /// Higher-tier model the dispatch layer may retry once on transient failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_on_failure: Option<String>,
}

impl RoutingDecision {
    /// Create a decision with no retry hint
    pub fn new(model: impl Into<String>, tier: Tier, reason: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            tier,
            reason: reason.into(),
            retry_on_failure: None,
        }
    }
}
