//! Deterministic tier routing
//!
//! This module implements the decision logic that selects a capability tier
//! (and its backing model) for each request from operational flags, caller
//! toggles, content signals, and the live budget snapshot.
//!
//! The cascade is evaluated strictly top to bottom; the first matching
//! branch decides and everything below it is skipped. That ordering is the
//! central correctness contract of the crate.

mod budget;
pub mod context;
pub mod decision;
pub mod message;

pub use context::{RoutingContext, TierBudget, Toggles};
pub use decision::{RoutingDecision, Tier};
pub use message::{last_user_text, ChatMessage, ContentBlock, MessageContent};

use crate::config::LadderConfig;
use crate::signals::{self, SignalSet};

/// Router selects a tier and model for each request.
///
/// Holds only the immutable model ladder, so it is cheap to share and safe
/// to call from any number of threads. Each call is a pure function of its
/// [`RoutingContext`]; no state survives between calls.
pub struct Router {
    ladder: LadderConfig,
}

impl Router {
    /// Create a router over the given model ladder
    pub fn new(ladder: LadderConfig) -> Self {
        Self { ladder }
    }

    /// The model ladder this router dispatches onto
    pub fn ladder(&self) -> &LadderConfig {
        &self.ladder
    }

    /// Decide the tier and model for one request.
    ///
    /// Total: every well-formed context resolves to a decision, including
    /// zero budget on both tiers and unrecognized override strings.
    pub fn decide(&self, ctx: &RoutingContext) -> RoutingDecision {
        let signals = signals::extract(&ctx.content);
        let decision = self.evaluate(ctx, &signals);

        tracing::debug!(
            model = %decision.model,
            tier = decision.tier.rank(),
            reason = %decision.reason,
            retry = decision.retry_on_failure.is_some(),
            "routing decision"
        );

        decision
    }

    /// The ordered rule cascade. First match wins.
    fn evaluate(&self, ctx: &RoutingContext, signals: &SignalSet) -> RoutingDecision {
        // Operational overrides: absolute priority, budget-independent.
        if ctx.is_heartbeat {
            return RoutingDecision::new(&self.ladder.heartbeat, Tier::Floor, "heartbeat");
        }

        if ctx.is_recurring_task {
            return RoutingDecision::new(&self.ladder.floor, Tier::Floor, "recurring task");
        }

        // Explicit tier phrases in the request text.
        if signals.explicit_premium {
            return self.cascade(Tier::Premium, "explicit premium request", &ctx.budget);
        }

        if signals.explicit_mid {
            return self.cascade(Tier::Mid, "explicit mid request", &ctx.budget);
        }

        if signals.explicit_floor {
            return RoutingDecision::new(&self.ladder.floor, Tier::Floor, "explicit floor request");
        }

        // Caller-level override, independent of content.
        if let Some(requested) = &ctx.model_override {
            return self.respect_override(requested, &ctx.budget);
        }

        if ctx.toggles.deep_analysis {
            return self.cascade(Tier::Mid, "deep analysis toggle", &ctx.budget);
        }

        if ctx.is_task_execution {
            return self.cascade(Tier::Mid, "task execution", &ctx.budget);
        }

        // Content classification, premium signals first.
        if signals.premium_signal {
            return self.cascade(Tier::Premium, "premium content signal", &ctx.budget);
        }

        if signals.multi_agent {
            return self.cascade(Tier::Premium, "multi-agent signal", &ctx.budget);
        }

        if signals.contract_deploy {
            return self.cascade(Tier::Premium, "smart contract + deploy", &ctx.budget);
        }

        if signals.multi_action {
            return self.cascade(Tier::Premium, "multi-action complexity (3+ verbs)", &ctx.budget);
        }

        if signals.complex_build {
            return self.cascade(Tier::Premium, "complex build (3+ components)", &ctx.budget);
        }

        if signals.mid_signal || signals.multi_step || signals.code_block {
            return self.cascade(Tier::Mid, "mid content signal", &ctx.budget);
        }

        if signals.long_content {
            return self.cascade(Tier::Mid, "long content", &ctx.budget);
        }

        RoutingDecision::new(&self.ladder.floor, Tier::Floor, "default")
    }

    /// Resolve a wanted tier through the budget cascade and compose the reason
    fn cascade(&self, wanted: Tier, prefix: &str, budget: &TierBudget) -> RoutingDecision {
        let resolved = budget::resolve(wanted, budget, &self.ladder);
        let reason = match resolved.suffix {
            Some(suffix) => format!("{}{}", prefix, suffix),
            None => prefix.to_string(),
        };
        RoutingDecision {
            model: resolved.model,
            tier: resolved.tier,
            reason,
            retry_on_failure: resolved.retry_on_failure,
        }
    }

    /// Enforce budget constraints on a caller-configured model override.
    ///
    /// The override string implies a tier; an honored override echoes the
    /// string itself as the model, a downgraded one falls back onto the
    /// ladder. Unrecognized strings route to the floor.
    fn respect_override(&self, requested: &str, budget: &TierBudget) -> RoutingDecision {
        let lowered = requested.to_lowercase();

        if lowered.contains("opus") {
            let mut decision =
                self.cascade(Tier::Premium, "explicit config model (premium)", budget);
            if decision.tier == Tier::Premium {
                decision.model = requested.to_string();
            }
            return decision;
        }

        if lowered.contains("sonnet") {
            let mut decision = self.cascade(Tier::Mid, "explicit config model (mid)", budget);
            if decision.tier == Tier::Mid {
                decision.model = requested.to_string();
            }
            return decision;
        }

        RoutingDecision::new(&self.ladder.floor, Tier::Floor, "explicit config model (floor)")
    }
}
