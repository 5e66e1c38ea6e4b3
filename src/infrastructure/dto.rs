use serde::{Deserialize, Serialize};

use crate::domain::errors::{DepthError, DepthResult};
use crate::domain::market_depth::{DepthLevel, DepthSnapshot, Price, Quantity, RowId};

/// Wire row as pushed by the depth feed. Field names follow the feed
/// (`symbolLevel`, `bid`, `offer`); the canonical names are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthRowDto {
    #[serde(rename = "symbolLevel", alias = "id")]
    pub symbol_level: String,
    pub level: u32,
    #[serde(alias = "bidPrice")]
    pub bid: f64,
    #[serde(rename = "bidQuantity")]
    pub bid_quantity: f64,
    #[serde(alias = "askPrice")]
    pub offer: f64,
    #[serde(rename = "offerQuantity", alias = "askQuantity")]
    pub offer_quantity: f64,
}

impl DepthRowDto {
    /// Converts the DTO into a domain row, rejecting negative or non-finite
    /// quantities before they reach the ladder.
    pub fn to_domain(&self) -> DepthResult<DepthLevel> {
        for (name, value) in [("bidQuantity", self.bid_quantity), ("offerQuantity", self.offer_quantity)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DepthError::Decode(format!(
                    "row {}: {} must be a non-negative number, got {}",
                    self.symbol_level, name, value
                )));
            }
        }

        Ok(DepthLevel {
            id: RowId::from(self.symbol_level.as_str()),
            level: self.level,
            bid_price: Price::from(self.bid),
            bid_quantity: Quantity::from(self.bid_quantity),
            ask_price: Price::from(self.offer),
            ask_quantity: Quantity::from(self.offer_quantity),
        })
    }
}

impl From<&DepthLevel> for DepthRowDto {
    fn from(level: &DepthLevel) -> Self {
        Self {
            symbol_level: level.id.value().to_string(),
            level: level.level,
            bid: level.bid_price.value(),
            bid_quantity: level.bid_quantity.value(),
            offer: level.ask_price.value(),
            offer_quantity: level.ask_quantity.value(),
        }
    }
}

/// Decodes one feed frame (a JSON array of rows) into a snapshot. Row order
/// is kept as delivered.
pub fn decode_snapshot(frame: &str) -> DepthResult<DepthSnapshot> {
    let rows: Vec<DepthRowDto> = serde_json::from_str(frame)?;
    rows.iter().map(DepthRowDto::to_domain).collect::<DepthResult<Vec<_>>>().map(DepthSnapshot::new)
}

pub fn encode_snapshot(snapshot: &DepthSnapshot) -> DepthResult<String> {
    let rows: Vec<DepthRowDto> = snapshot.iter().map(DepthRowDto::from).collect();
    Ok(serde_json::to_string(&rows)?)
}
