//! Per-request routing context
//!
//! A `RoutingContext` is built fresh for each request from live state and
//! discarded after the decision. The router never mutates it.

use crate::config::PlanLimits;
use serde::{Deserialize, Serialize};

/// Caller-set feature toggles, orthogonal to request content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggles {
    /// Deep analysis mode (routes to mid tier)
    pub deep_analysis: bool,

    /// Web search mode (no tier effect on its own)
    pub web_search: bool,
}

/// Remaining-call counters for the two budgeted tiers.
///
/// The floor tier has no counter. Counters are a read-only snapshot taken
/// just before the call; the router never decrements them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBudget {
    /// Remaining mid-tier calls in the current period
    pub mid_remaining: u32,

    /// Remaining premium-tier calls in the current period
    pub premium_remaining: u32,
}

impl TierBudget {
    /// Compute remaining budget from plan limits and current usage.
    pub fn from_usage(limits: &PlanLimits, mid_used: u32, premium_used: u32) -> Self {
        Self {
            mid_remaining: limits.mid.saturating_sub(mid_used),
            premium_remaining: limits.premium.saturating_sub(premium_used),
        }
    }

    /// Budget snapshot with both counters exhausted
    pub fn exhausted() -> Self {
        Self::default()
    }
}

/// Everything the router needs to decide a tier for one request.
#[derive(Debug, Clone, Default)]
pub struct RoutingContext {
    /// Raw text of the request
    pub content: String,

    /// Periodic liveness invocation, never user-initiated
    pub is_heartbeat: bool,

    /// Pre-registered recurring automation, not an interactive request
    pub is_recurring_task: bool,

    /// One-shot agentic task rather than a conversational turn
    pub is_task_execution: bool,

    /// Caller-set feature toggles
    pub toggles: Toggles,

    /// Budget snapshot as of call time
    pub budget: TierBudget,

    /// Out-of-band model directive from caller config, independent of content
    pub model_override: Option<String>,
}

impl RoutingContext {
    /// Context for a plain user message with the given budget
    pub fn for_message(content: impl Into<String>, budget: TierBudget) -> Self {
        Self {
            content: content.into(),
            budget,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_from_usage_subtracts() {
        let limits = PlanLimits { mid: 30, premium: 5 };
        let budget = TierBudget::from_usage(&limits, 10, 2);
        assert_eq!(budget.mid_remaining, 20);
        assert_eq!(budget.premium_remaining, 3);
    }

    #[test]
    fn budget_from_usage_saturates_at_zero() {
        let limits = PlanLimits { mid: 30, premium: 5 };
        let budget = TierBudget::from_usage(&limits, 100, 100);
        assert_eq!(budget.mid_remaining, 0);
        assert_eq!(budget.premium_remaining, 0);
    }

    #[test]
    fn default_context_is_plain_message() {
        let ctx = RoutingContext::default();
        assert!(!ctx.is_heartbeat);
        assert!(!ctx.is_recurring_task);
        assert!(!ctx.is_task_execution);
        assert!(ctx.model_override.is_none());
        assert_eq!(ctx.budget, TierBudget::exhausted());
    }

    #[test]
    fn toggles_deserialize_with_defaults() {
        let toggles: Toggles = serde_json::from_str("{}").unwrap();
        assert!(!toggles.deep_analysis);
        assert!(!toggles.web_search);

        let toggles: Toggles = serde_json::from_str(r#"{"deep_analysis":true}"#).unwrap();
        assert!(toggles.deep_analysis);
    }
}
