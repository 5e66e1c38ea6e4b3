use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

/// Value Object - price of one side of a ladder row
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fixed-point text, `format(2)` gives `1000.00`.
    pub fn format(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.0)
    }
}

/// Value Object - resting quantity at a level, never negative upstream
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(f64);

impl Quantity {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Label with thousands separators, e.g. `1,200` or `1,234.5`.
    pub fn grouped_label(&self) -> String {
        format_grouped(self.0)
    }
}

/// Value Object - stable row identity across snapshots
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Book side a quantity bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Edge the bar grows from. Bid and ask mirror around the centre line.
    pub fn anchor(&self) -> &'static str {
        match self {
            Side::Bid => "right",
            Side::Ask => "left",
        }
    }
}

/// Which price cell of a row a memory slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PriceColumn {
    Bid,
    Ask,
}

/// Movement of a price cell relative to its last rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, AsRefStr)]
pub enum TickDirection {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "up")]
    Up,
    #[strum(serialize = "down")]
    Down,
}

impl TickDirection {
    pub fn css_class(&self) -> &'static str {
        match self {
            TickDirection::None => "tick-none",
            TickDirection::Up => "tick-up",
            TickDirection::Down => "tick-down",
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            TickDirection::None => ' ',
            TickDirection::Up => '▲',
            TickDirection::Down => '▼',
        }
    }
}

/// en-US style grouping: comma thousands, up to three fraction digits,
/// trailing fraction zeros dropped.
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
