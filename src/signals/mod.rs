//! Content signal extraction - no LLM calls, no network.
//!
//! Classifies request text against a fixed set of compiled patterns and
//! reports every matching flag independently. Precedence between
//! overlapping signals is entirely the rule cascade's business.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Content length above which a request is treated as mid-tier work.
const LONG_CONTENT_THRESHOLD: usize = 500;

/// Distinct action verbs at or above this count indicate premium-tier work.
const MULTI_ACTION_THRESHOLD: usize = 3;

// ── Compiled patterns ───────────────────────────────────────────

// Explicit tier phrases. Tiers are named either by rank (premium/mid/floor)
// or by the default model family (opus/sonnet/haiku).
static RE_EXPLICIT_PREMIUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buse (?:opus|premium)\b").unwrap());

static RE_EXPLICIT_MID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buse (?:sonnet|mid)\b").unwrap());

static RE_EXPLICIT_FLOOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buse (?:haiku|floor)\b").unwrap());

// Premium keyword signals: importance/depth vocabulary
static RE_PREMIUM_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(important|critical|be thorough|think deeply|synthesize|cross-reference|from scratch|full[- ]?stack|end[- ]?to[- ]?end|redesign|architect|architecture)\b",
    )
    .unwrap()
});

// Premium: multi-agent / subagent references
static RE_MULTI_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(subagent|sub[- ]?agent|multi[- ]?agent)\b|\bcoordinate with .+agents?\b|\bother agents?\b")
        .unwrap()
});

// Premium: smart contract + deploy combination, either order
static RE_CONTRACT_DEPLOY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bsmart contract\b.*\bdeploy\b|\bdeploy\b.*\bsmart contract\b").unwrap()
});

// Action verbs for the multi-action heuristic
static RE_ACTION_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(build|create|write|implement|deploy|test|design|integrate|configure|migrate|optimize|develop|monitor|analyze|audit|refactor|rewrite|generate|establish|install|connect|debug|coordinate|research|set up)\b",
    )
    .unwrap()
});

// Building/creating verbs for the complex-build heuristic
static RE_BUILD_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(build|create|develop|implement|set up|configure|deploy|architect|design)\b")
        .unwrap()
});

// Mid keyword signals: executable/analytical work
static RE_MID_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(write code|write (?:a|me a) \w+|implement|debug|refactor|build (?:a|me a|me) \w+|create a \w+|analyze|evaluate|financial|competitive|audit|draft an email|compare|contrast|step[- ]?by[- ]?step|research|design|plan|rewrite|optimize|migrate|generate|develop|set up|configure)\b",
    )
    .unwrap()
});

// Sequencing markers
static RE_MULTI_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(first\b.*\bthen\b|step \d|1\.|1\))").unwrap());

// Fenced block with at least 10 enclosed characters
static RE_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.{10,}").unwrap());

/// Boolean signal flags extracted from one request's content.
///
/// Flags are independent; several can be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalSet {
    /// "use premium" / "use opus" phrase
    pub explicit_premium: bool,
    /// "use mid" / "use sonnet" phrase
    pub explicit_mid: bool,
    /// "use floor" / "use haiku" phrase
    pub explicit_floor: bool,
    /// Importance/depth vocabulary
    pub premium_signal: bool,
    /// Subagent / multi-agent references
    pub multi_agent: bool,
    /// Smart contract and deploy co-occurring
    pub contract_deploy: bool,
    /// Three or more distinct action verbs
    pub multi_action: bool,
    /// Building verb plus three or more listed components
    pub complex_build: bool,
    /// Executable/analytical vocabulary
    pub mid_signal: bool,
    /// Sequencing markers ("first ... then", "step 1", ...)
    pub multi_step: bool,
    /// Fenced code block
    pub code_block: bool,
    /// Content longer than the mid-tier threshold
    pub long_content: bool,
}

/// Extract all signal flags from request content.
pub fn extract(content: &str) -> SignalSet {
    SignalSet {
        explicit_premium: RE_EXPLICIT_PREMIUM.is_match(content),
        explicit_mid: RE_EXPLICIT_MID.is_match(content),
        explicit_floor: RE_EXPLICIT_FLOOR.is_match(content),
        premium_signal: RE_PREMIUM_SIGNAL.is_match(content),
        multi_agent: RE_MULTI_AGENT.is_match(content),
        contract_deploy: RE_CONTRACT_DEPLOY.is_match(content),
        multi_action: distinct_action_verbs(content) >= MULTI_ACTION_THRESHOLD,
        complex_build: has_complex_build(content),
        mid_signal: RE_MID_SIGNAL.is_match(content),
        multi_step: RE_MULTI_STEP.is_match(content),
        code_block: RE_CODE_BLOCK.is_match(content),
        long_content: content.len() > LONG_CONTENT_THRESHOLD,
    }
}

/// Count distinct action verbs in the content.
fn distinct_action_verbs(content: &str) -> usize {
    RE_ACTION_VERB
        .find_iter(content)
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

/// Detect complex build requests: a building verb plus 3+ listed components.
///
/// "Build me a dashboard with auth, DB, and notifications" counts; the comma
/// count stands in for the component list.
fn has_complex_build(content: &str) -> bool {
    if !RE_BUILD_VERB.is_match(content) {
        return false;
    }
    let commas = content.matches(',').count();
    commas >= 2 && content.len() > 80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_phrases_match_embedded_and_case_insensitive() {
        assert!(extract("Please USE OPUS for this one").explicit_premium);
        assert!(extract("could you use premium here").explicit_premium);
        assert!(extract("use sonnet to help").explicit_mid);
        assert!(extract("use mid please").explicit_mid);
        assert!(extract("just use haiku for this").explicit_floor);
        assert!(extract("use floor").explicit_floor);
    }

    #[test]
    fn explicit_phrases_respect_word_boundaries() {
        let signals = extract("the museum uses opulent decor");
        assert!(!signals.explicit_premium);
        assert!(!signals.explicit_mid);
        assert!(!signals.explicit_floor);
    }

    #[test]
    fn premium_vocabulary_matches() {
        for msg in [
            "This is critical, be thorough",
            "synthesize all sources",
            "cross-reference the reports",
            "Rebuild the auth system from scratch",
            "Build a full-stack application",
            "Full stack deployment needed",
            "I need an end-to-end solution",
            "Redesign the entire notification system",
            "Architect a new microservices platform",
            "Propose a new architecture for the backend",
        ] {
            assert!(extract(msg).premium_signal, "expected premium: {}", msg);
        }
    }

    #[test]
    fn multi_agent_references_match() {
        assert!(extract("Create a subagent to monitor prices").multi_agent);
        assert!(extract("Build a multi-agent workflow").multi_agent);
        assert!(extract("Coordinate with 3 other agents to finish this").multi_agent);
        assert!(extract("Tell the other agents to start").multi_agent);
        assert!(!extract("book me a travel agent").multi_agent);
    }

    #[test]
    fn contract_deploy_matches_either_order() {
        assert!(extract("Write a smart contract and deploy it to mainnet").contract_deploy);
        assert!(extract("Deploy the smart contract we wrote yesterday").contract_deploy);
        assert!(!extract("Deploy the new landing page").contract_deploy);
        assert!(!extract("Explain how a smart contract works").contract_deploy);
    }

    #[test]
    fn multi_action_needs_three_distinct_verbs() {
        assert!(extract("Write the API, test it thoroughly, and deploy to production").multi_action);
        // Two verbs, one repeated
        assert!(!extract("Build the frontend and build the backend").multi_action);
        assert!(!extract("Build the frontend and integrate the API").multi_action);
    }

    #[test]
    fn complex_build_needs_verb_commas_and_length() {
        assert!(
            extract(
                "Build me a full Next.js dashboard with authentication, database integration, and real-time notifications"
            )
            .complex_build
        );
        // Commas but no building verb
        assert!(!extract(
            "I like apples, oranges, and pears, though mostly I eat whatever is in the fruit bowl"
        )
        .complex_build);
        // Building verb but too short
        assert!(!extract("build a, b, c").complex_build);
    }

    #[test]
    fn mid_vocabulary_matches() {
        for msg in [
            "write code for a REST API",
            "can you implement this feature?",
            "debug this function",
            "refactor the auth module",
            "analyze this quarterly report",
            "evaluate the options",
            "draft an email to the team",
            "Research the latest trends in AI",
            "Write me a Python script for data analysis",
            "Build me a landing page",
            "Create a dashboard for user analytics",
            "Plan the sprint for next week",
            "Set up the CI/CD pipeline",
            "Configure the Nginx reverse proxy",
        ] {
            assert!(extract(msg).mid_signal, "expected mid: {}", msg);
        }
    }

    #[test]
    fn search_does_not_match_research() {
        let signals = extract("Search the web for news about AI");
        assert!(!signals.mid_signal);
        assert!(!signals.premium_signal);
    }

    #[test]
    fn multi_step_markers_match() {
        assert!(extract("first search Google then summarize results").multi_step);
        assert!(extract("step 1: do this. step 2: do that").multi_step);
        assert!(extract("1. prepare 2. execute").multi_step);
        assert!(extract("1) prepare 2) execute").multi_step);
        assert!(!extract("then we went home").multi_step);
    }

    #[test]
    fn code_block_needs_minimum_content() {
        assert!(extract("fix this:\n```javascript\nfunction hello() {}\n```").code_block);
        assert!(!extract("empty fence ``` ```").code_block);
    }

    #[test]
    fn long_content_threshold_is_strict() {
        assert!(!extract(&"a".repeat(500)).long_content);
        assert!(extract(&"a".repeat(501)).long_content);
    }

    #[test]
    fn plain_greeting_sets_nothing() {
        assert_eq!(extract("hello"), SignalSet::default());
        assert_eq!(extract("what time is it?"), SignalSet::default());
        assert_eq!(extract("thanks!"), SignalSet::default());
    }

    #[test]
    fn flags_are_reported_independently() {
        let signals = extract("use opus: first analyze the data, then write code");
        assert!(signals.explicit_premium);
        assert!(signals.mid_signal);
        assert!(signals.multi_step);
    }
}
