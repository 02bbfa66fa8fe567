//! Output formatting helpers for CLI commands

use crate::routing::{RoutingDecision, Tier};
use crate::signals::SignalSet;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for decision display
#[derive(Debug, Clone, serde::Serialize)]
pub struct DecisionView {
    pub model: String,
    pub tier: u8,
    pub tier_name: String,
    pub reason: String,
    pub retry_on_failure: Option<String>,
}

impl From<&RoutingDecision> for DecisionView {
    fn from(decision: &RoutingDecision) -> Self {
        Self {
            model: decision.model.clone(),
            tier: decision.tier.rank(),
            tier_name: decision.tier.to_string(),
            reason: decision.reason.clone(),
            retry_on_failure: decision.retry_on_failure.clone(),
        }
    }
}

fn tier_cell(tier: Tier) -> String {
    let label = format!("{} ({})", tier, tier.rank());
    match tier {
        Tier::Floor => label.green().to_string(),
        Tier::Mid => label.yellow().to_string(),
        Tier::Premium => label.magenta().to_string(),
    }
}

/// Format a decision as a table
pub fn format_decision_table(decision: &RoutingDecision) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Model", "Tier", "Reason", "Retry On Failure"]);

    table.add_row(vec![
        Cell::new(&decision.model),
        Cell::new(tier_cell(decision.tier)),
        Cell::new(&decision.reason),
        Cell::new(decision.retry_on_failure.as_deref().unwrap_or("-")),
    ]);

    table.to_string()
}

/// Format a decision as JSON
pub fn format_decision_json(decision: &RoutingDecision) -> String {
    serde_json::to_string_pretty(&json!({
        "decision": DecisionView::from(decision)
    }))
    .unwrap()
}

/// Format a signal set as a table
pub fn format_signals_table(signals: &SignalSet) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Signal", "Matched"]);

    let rows: [(&str, bool); 12] = [
        ("explicit_premium", signals.explicit_premium),
        ("explicit_mid", signals.explicit_mid),
        ("explicit_floor", signals.explicit_floor),
        ("premium_signal", signals.premium_signal),
        ("multi_agent", signals.multi_agent),
        ("contract_deploy", signals.contract_deploy),
        ("multi_action", signals.multi_action),
        ("complex_build", signals.complex_build),
        ("mid_signal", signals.mid_signal),
        ("multi_step", signals.multi_step),
        ("code_block", signals.code_block),
        ("long_content", signals.long_content),
    ];

    for (name, matched) in rows {
        let value = if matched {
            "yes".green().to_string()
        } else {
            "no".dimmed().to_string()
        };
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }

    table.to_string()
}

/// Format a signal set as JSON
pub fn format_signals_json(signals: &SignalSet) -> String {
    serde_json::to_string_pretty(&json!({
        "signals": signals
    }))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RoutingDecision;

    #[test]
    fn decision_view_carries_rank_and_name() {
        let decision = RoutingDecision::new("claude-sonnet-4-5-20250929", Tier::Mid, "task execution");
        let view = DecisionView::from(&decision);
        assert_eq!(view.tier, 2);
        assert_eq!(view.tier_name, "mid");
        assert!(view.retry_on_failure.is_none());
    }

    #[test]
    fn decision_json_is_parseable() {
        let decision = RoutingDecision::new("claude-haiku-4-5-20251001", Tier::Floor, "default");
        let parsed: serde_json::Value =
            serde_json::from_str(&format_decision_json(&decision)).unwrap();
        assert_eq!(parsed["decision"]["tier"], 1);
        assert_eq!(parsed["decision"]["reason"], "default");
    }

    #[test]
    fn decision_table_includes_model_and_reason() {
        let decision = RoutingDecision::new("claude-opus-4-6", Tier::Premium, "premium content signal");
        let table = format_decision_table(&decision);
        assert!(table.contains("claude-opus-4-6"));
        assert!(table.contains("premium content signal"));
    }

    #[test]
    fn signals_table_lists_every_flag() {
        let table = format_signals_table(&SignalSet::default());
        for name in ["explicit_premium", "mid_signal", "long_content"] {
            assert!(table.contains(name));
        }
    }
}
