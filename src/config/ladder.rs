//! Model ladder configuration
//!
//! Three fixed ladder models back the floor/mid/premium tiers; a dedicated
//! lightweight model serves heartbeat traffic outside the ladder. Loaded
//! once at process start, never per call.

use crate::routing::decision::Tier;
use serde::{Deserialize, Serialize};

/// Model identifiers backing each capability tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Tier 1 model (always available, unlimited)
    pub floor: String,

    /// Tier 2 model (budgeted)
    pub mid: String,

    /// Tier 3 model (budgeted)
    pub premium: String,

    /// Dedicated heartbeat model, outside the ladder but reported as tier 1
    pub heartbeat: String,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            floor: "claude-haiku-4-5-20251001".to_string(),
            mid: "claude-sonnet-4-5-20250929".to_string(),
            premium: "claude-opus-4-6".to_string(),
            heartbeat: "minimax-m2.5".to_string(),
        }
    }
}

impl LadderConfig {
    /// The ladder model backing a tier
    pub fn model_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Floor => &self.floor,
            Tier::Mid => &self.mid,
            Tier::Premium => &self.premium,
        }
    }

    /// Validate configuration at startup
    pub fn validate(&self) -> Result<(), String> {
        for (name, model) in [
            ("floor", &self.floor),
            ("mid", &self.mid),
            ("premium", &self.premium),
            ("heartbeat", &self.heartbeat),
        ] {
            if model.is_empty() {
                return Err(format!("{} model must not be empty", name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_defaults() {
        let ladder = LadderConfig::default();
        assert_eq!(ladder.floor, "claude-haiku-4-5-20251001");
        assert_eq!(ladder.mid, "claude-sonnet-4-5-20250929");
        assert_eq!(ladder.premium, "claude-opus-4-6");
        assert_eq!(ladder.heartbeat, "minimax-m2.5");
    }

    #[test]
    fn test_model_for_each_tier() {
        let ladder = LadderConfig::default();
        assert_eq!(ladder.model_for(Tier::Floor), ladder.floor);
        assert_eq!(ladder.model_for(Tier::Mid), ladder.mid);
        assert_eq!(ladder.model_for(Tier::Premium), ladder.premium);
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let ladder = LadderConfig {
            mid: String::new(),
            ..Default::default()
        };
        assert!(ladder.validate().is_err());
        assert!(LadderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ladder_toml_round_trip() {
        let ladder = LadderConfig::default();
        let toml = toml::to_string(&ladder).unwrap();
        let parsed: LadderConfig = toml::from_str(&toml).unwrap();
        assert_eq!(ladder, parsed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: LadderConfig = toml::from_str("premium = \"claude-opus-4-5-20250820\"").unwrap();
        assert_eq!(parsed.premium, "claude-opus-4-5-20250820");
        assert_eq!(parsed.floor, LadderConfig::default().floor);
    }
}
