use serde::{Deserialize, Serialize};

use crate::domain::errors::{DepthError, DepthResult};
use crate::domain::market_depth::{PRICE_DECIMALS, Side};

/// Presentation settings for the depth ladder. Every field has a default,
/// so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepthConfig {
    pub price_decimals: usize,
    pub bar_width_px: u32,
    pub bar_height_px: u32,
    pub bid_color: String,
    pub ask_color: String,
    pub loading_text: String,
    pub replay_interval_ms: u32,
    /// When off, the ladder shows the static fixture instead of replaying it.
    pub replay_enabled: bool,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            price_decimals: PRICE_DECIMALS,
            bar_width_px: 160,
            bar_height_px: 32,
            bid_color: "#0066FF".to_string(),
            ask_color: "#FF0000".to_string(),
            loading_text: "Loading market depth data...".to_string(),
            replay_interval_ms: 1000,
            replay_enabled: true,
        }
    }
}

impl DepthConfig {
    pub fn from_json(json: &str) -> DepthResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| DepthError::Config(e.to_string()))?;
        if !value.is_object() {
            return Err(DepthError::Config("config must be a JSON object".to_string()));
        }
        let config: Self = serde_json::from_value(value).map_err(|e| DepthError::Config(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> DepthResult<Self> {
        if self.price_decimals > 8 {
            return Err(DepthError::Config(format!("priceDecimals {} is above 8", self.price_decimals)));
        }
        if self.bar_width_px == 0 || self.bar_height_px == 0 {
            return Err(DepthError::Config("bar dimensions must be positive".to_string()));
        }
        if self.replay_interval_ms == 0 {
            return Err(DepthError::Config("replayIntervalMs must be positive".to_string()));
        }
        Ok(self)
    }

    pub fn side_color(&self, side: Side) -> &str {
        match side {
            Side::Bid => &self.bid_color,
            Side::Ask => &self.ask_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DepthConfig::from_json(r##"{"bidColor":"#00AA00","replayIntervalMs":250}"##).unwrap();
        assert_eq!(config.side_color(Side::Bid), "#00AA00");
        assert_eq!(config.side_color(Side::Ask), "#FF0000");
        assert_eq!(config.replay_interval_ms, 250);
        assert_eq!(config.price_decimals, 2);
        assert!(config.replay_enabled);
    }

    #[test]
    fn sequence_is_not_a_config() {
        for json in ["[1, 2]", "[]", "42", "\"text\""] {
            assert!(matches!(DepthConfig::from_json(json), Err(DepthError::Config(_))), "{json}");
        }
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(matches!(
            DepthConfig::from_json(r#"{"replayIntervalMs":0}"#),
            Err(DepthError::Config(_))
        ));
    }
}
