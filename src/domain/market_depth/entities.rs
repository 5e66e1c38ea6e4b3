use super::value_objects::{Price, Quantity, RowId};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Domain entity - one price-ladder row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthLevel {
    pub id: RowId,
    pub level: u32,
    pub bid_price: Price,
    pub bid_quantity: Quantity,
    pub ask_price: Price,
    pub ask_quantity: Quantity,
}

impl DepthLevel {
    pub fn new(
        id: impl Into<RowId>,
        level: u32,
        bid_price: f64,
        bid_quantity: f64,
        ask_price: f64,
        ask_quantity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            level,
            bid_price: Price::from(bid_price),
            bid_quantity: Quantity::from(bid_quantity),
            ask_price: Price::from(ask_price),
            ask_quantity: Quantity::from(ask_quantity),
        }
    }

    /// Larger of the two resting quantities.
    pub fn max_quantity(&self) -> f64 {
        self.bid_quantity.value().max(self.ask_quantity.value())
    }
}

/// Domain entity - a complete, immutable ladder as delivered upstream.
///
/// Cloning shares the rows; a new update is a new snapshot, never a patch.
/// Row order is the collaborator's order (level ascending) and is kept as is.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSnapshot {
    levels: Rc<[DepthLevel]>,
}

impl DepthSnapshot {
    pub fn new(levels: Vec<DepthLevel>) -> Self {
        Self { levels: levels.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn levels(&self) -> &[DepthLevel] {
        &self.levels
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepthLevel> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// True when both handles point at the same delivered rows.
    pub fn same_as(&self, other: &DepthSnapshot) -> bool {
        Rc::ptr_eq(&self.levels, &other.levels)
    }
}

impl From<Vec<DepthLevel>> for DepthSnapshot {
    fn from(levels: Vec<DepthLevel>) -> Self {
        Self::new(levels)
    }
}

impl FromIterator<DepthLevel> for DepthSnapshot {
    fn from_iter<I: IntoIterator<Item = DepthLevel>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
