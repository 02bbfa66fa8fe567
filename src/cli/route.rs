//! Route command handler

use crate::cli::output::{format_decision_json, format_decision_table};
use crate::cli::RouteArgs;
use crate::config::TriageConfig;
use crate::routing::{last_user_text, ChatMessage, Router, RoutingContext, TierBudget, Toggles};
use std::fs;

/// Handle `triage route` command
pub fn handle_route(args: &RouteArgs, config: &TriageConfig) -> Result<String, Box<dyn std::error::Error>> {
    let content = match (&args.content, &args.messages) {
        (Some(content), _) => content.clone(),
        (None, Some(path)) => {
            let raw = fs::read_to_string(path)?;
            let messages: Vec<ChatMessage> = serde_json::from_str(&raw)?;
            last_user_text(&messages)
        }
        (None, None) => return Err("either CONTENT or --messages is required".into()),
    };

    if config.logging.enable_content_logging {
        tracing::debug!(content = %content, "routing request content");
    }

    let budget = resolve_budget(args, config);
    let ctx = RoutingContext {
        content,
        is_heartbeat: args.heartbeat,
        is_recurring_task: args.recurring,
        is_task_execution: args.task,
        toggles: Toggles {
            deep_analysis: args.deep_analysis,
            web_search: args.web_search,
        },
        budget,
        model_override: args.model_override.clone(),
    };

    let router = Router::new(config.ladder.clone());
    let decision = router.decide(&ctx);

    if args.json {
        Ok(format_decision_json(&decision))
    } else {
        Ok(format_decision_table(&decision))
    }
}

/// Budget snapshot from explicit counters, or plan limits minus usage
fn resolve_budget(args: &RouteArgs, config: &TriageConfig) -> TierBudget {
    let plan = args.plan.as_deref().unwrap_or(&config.limits.default_plan);
    let limits = config.limits.for_plan(plan);
    let from_usage = TierBudget::from_usage(&limits, args.mid_used, args.premium_used);

    TierBudget {
        mid_remaining: args.mid_remaining.unwrap_or(from_usage.mid_remaining),
        premium_remaining: args
            .premium_remaining
            .unwrap_or(from_usage.premium_remaining),
    }
}
