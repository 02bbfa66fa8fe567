//! Triage - deterministic model-tier router
//!
//! This library decides which capability tier (floor, mid, or premium) and
//! which backing model should service an agent request, from a fixed rule
//! cascade over content signals, operational flags, caller toggles, and a
//! per-period budget snapshot. The decision function is pure and
//! synchronous: no I/O, no shared state, no failure modes.
//!
//! # Example
//!
//! ```rust
//! use triage::config::LadderConfig;
//! use triage::routing::{Router, RoutingContext, Tier, TierBudget};
//!
//! let router = Router::new(LadderConfig::default());
//! let ctx = RoutingContext::for_message(
//!     "write code for a REST API",
//!     TierBudget { mid_remaining: 30, premium_remaining: 5 },
//! );
//!
//! let decision = router.decide(&ctx);
//! assert_eq!(decision.tier, Tier::Mid);
//! assert_eq!(decision.reason, "mid content signal");
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod routing;
pub mod signals;
