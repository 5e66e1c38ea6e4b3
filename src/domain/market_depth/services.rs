//! Ladder rendering core: snapshot-wide bar normalization and per-row price
//! tick memory, expressed as one explicit diff step per snapshot.

use std::collections::{HashMap, HashSet};

use super::entities::{DepthLevel, DepthSnapshot};
use super::value_objects::{Price, PriceColumn, Quantity, RowId, Side, TickDirection};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Column titles, left to right.
pub const DEPTH_COLUMNS: [&str; 5] = ["Level", "Bid Quantity", "Bid Price", "Ask Price", "Ask Quantity"];

/// Decimals used for price text unless the view overrides it.
pub const PRICE_DECIMALS: usize = 2;

/// Largest bid or ask quantity of one snapshot. Derived on every snapshot
/// and never carried over to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizationScale(f64);

impl NormalizationScale {
    pub fn from_snapshot(snapshot: &DepthSnapshot) -> Self {
        let max = snapshot
            .iter()
            .map(DepthLevel::max_quantity)
            .fold(0.0_f64, f64::max);
        Self(max)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Bar width in percent; 0 when every quantity is zero.
    pub fn width_percent(&self, quantity: Quantity) -> f64 {
        if self.0 > 0.0 {
            quantity.value() / self.0 * 100.0
        } else {
            0.0
        }
    }
}

/// One proportional bar. Pure function of quantity, scale and side.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityBar {
    pub quantity: Quantity,
    pub side: Side,
    pub width_percent: f64,
}

impl QuantityBar {
    pub fn new(quantity: Quantity, scale: NormalizationScale, side: Side) -> Self {
        Self { quantity, side, width_percent: scale.width_percent(quantity) }
    }

    /// Unscaled quantity text.
    pub fn label(&self) -> String {
        self.quantity.grouped_label()
    }
}

/// Last rendered price of one cell and the direction of its last move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMemory {
    pub last_value: Price,
    pub direction: TickDirection,
}

impl CellMemory {
    pub fn first(price: Price) -> Self {
        Self { last_value: price, direction: TickDirection::None }
    }

    /// Records `price`. An equal price keeps whatever direction was set before.
    pub fn observe(&mut self, price: Price) -> TickDirection {
        if price != self.last_value {
            self.direction = if price > self.last_value { TickDirection::Up } else { TickDirection::Down };
            self.last_value = price;
        }
        self.direction
    }
}

/// One price cell as it should appear after a snapshot was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCell {
    pub row_id: RowId,
    pub column: PriceColumn,
    pub price: Price,
    pub direction: TickDirection,
}

impl PriceCell {
    pub fn text(&self, decimals: usize) -> String {
        self.price.format(decimals)
    }

    pub fn css_class(&self) -> &'static str {
        self.direction.css_class()
    }
}

/// Cell memories of every row currently on screen, keyed by row identity
/// and column. Rows are remembered in the order they were last rendered.
#[derive(Debug, Clone, Default)]
pub struct CellMemoryBook {
    cells: HashMap<(RowId, PriceColumn), CellMemory>,
    rendered: Vec<RowId>,
}

impl CellMemoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the slot on first sight, otherwise advances it.
    pub fn observe(&mut self, row_id: &RowId, column: PriceColumn, price: Price) -> TickDirection {
        match self.cells.get_mut(&(row_id.clone(), column)) {
            Some(memory) => memory.observe(price),
            None => {
                let memory = CellMemory::first(price);
                self.cells.insert((row_id.clone(), column), memory);
                memory.direction
            }
        }
    }

    pub fn get(&self, row_id: &RowId, column: PriceColumn) -> Option<&CellMemory> {
        self.cells.get(&(row_id.clone(), column))
    }

    pub fn rendered_rows(&self) -> &[RowId] {
        &self.rendered
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drops every row not in `live`, returning the dropped ids in their
    /// previous render order.
    fn unmount_missing(&mut self, live: &HashSet<&RowId>) -> Vec<RowId> {
        let removed: Vec<RowId> = self.rendered.iter().filter(|id| !live.contains(id)).cloned().collect();
        self.cells.retain(|(id, _), _| live.contains(id));
        removed
    }
}

/// A fully resolved ladder row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: RowId,
    pub level: u32,
    pub bid_bar: QuantityBar,
    pub bid_cell: PriceCell,
    pub ask_cell: PriceCell,
    pub ask_bar: QuantityBar,
}

/// Instruction for the rendering surface produced by one diff step.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceUpdate {
    ShowPlaceholder,
    RenderHeader { scale: NormalizationScale },
    RenderRow(RenderedRow),
    RemoveRow(RowId),
}

/// Applies one snapshot to the cell memories of the previous render.
///
/// Absent and empty snapshots unmount every row and show the placeholder.
/// Otherwise rows are emitted in snapshot order after any removals and the
/// header.
pub fn diff_snapshot(
    mut book: CellMemoryBook,
    snapshot: Option<&DepthSnapshot>,
) -> (CellMemoryBook, Vec<SurfaceUpdate>) {
    let Some(snapshot) = snapshot.filter(|s| !s.is_empty()) else {
        let mut updates: Vec<SurfaceUpdate> = book.rendered.drain(..).map(SurfaceUpdate::RemoveRow).collect();
        book.cells.clear();
        updates.push(SurfaceUpdate::ShowPlaceholder);
        return (book, updates);
    };

    let scale = NormalizationScale::from_snapshot(snapshot);
    let live: HashSet<&RowId> = snapshot.iter().map(|level| &level.id).collect();
    let removed = book.unmount_missing(&live);

    let mut updates = Vec::with_capacity(removed.len() + snapshot.len() + 1);
    updates.extend(removed.into_iter().map(SurfaceUpdate::RemoveRow));
    updates.push(SurfaceUpdate::RenderHeader { scale });

    let mut rendered = Vec::with_capacity(snapshot.len());
    for level in snapshot.iter() {
        let bid_direction = book.observe(&level.id, PriceColumn::Bid, level.bid_price);
        let ask_direction = book.observe(&level.id, PriceColumn::Ask, level.ask_price);

        rendered.push(level.id.clone());
        updates.push(SurfaceUpdate::RenderRow(RenderedRow {
            id: level.id.clone(),
            level: level.level,
            bid_bar: QuantityBar::new(level.bid_quantity, scale, Side::Bid),
            bid_cell: PriceCell {
                row_id: level.id.clone(),
                column: PriceColumn::Bid,
                price: level.bid_price,
                direction: bid_direction,
            },
            ask_cell: PriceCell {
                row_id: level.id.clone(),
                column: PriceColumn::Ask,
                price: level.ask_price,
                direction: ask_direction,
            },
            ask_bar: QuantityBar::new(level.ask_quantity, scale, Side::Ask),
        }));
    }
    book.rendered = rendered;

    log_debug!(
        LogComponent::Domain("DepthTable"),
        "applied {} rows, scale {}, {} coloured cells",
        snapshot.len(),
        scale.value(),
        updates
            .iter()
            .filter_map(|update| match update {
                SurfaceUpdate::RenderRow(row) => Some(row),
                _ => None,
            })
            .flat_map(|row| [row.bid_cell.direction, row.ask_cell.direction])
            .filter(|direction| *direction != TickDirection::None)
            .count()
    );

    (book, updates)
}

/// What the table currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DepthFrame {
    #[default]
    Loading,
    Table { scale: NormalizationScale, rows: Vec<RenderedRow> },
}

impl DepthFrame {
    /// Collapses a diff's updates into the resulting screen state.
    pub fn from_updates(updates: &[SurfaceUpdate]) -> Self {
        let mut frame = DepthFrame::Loading;
        for update in updates {
            match update {
                SurfaceUpdate::ShowPlaceholder => frame = DepthFrame::Loading,
                SurfaceUpdate::RenderHeader { scale } => {
                    frame = DepthFrame::Table { scale: *scale, rows: Vec::new() };
                }
                SurfaceUpdate::RenderRow(row) => {
                    if let DepthFrame::Table { rows, .. } = &mut frame {
                        rows.push(row.clone());
                    }
                }
                SurfaceUpdate::RemoveRow(_) => {}
            }
        }
        frame
    }

    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            DepthFrame::Loading => &[],
            DepthFrame::Table { rows, .. } => rows,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DepthFrame::Loading)
    }
}

/// Row slots of a mounted ladder: owns the cell memories and the last frame,
/// applies one snapshot at a time through [`diff_snapshot`].
#[derive(Debug, Default)]
pub struct DepthLadder {
    book: CellMemoryBook,
    frame: DepthFrame,
}

impl DepthLadder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, snapshot: Option<&DepthSnapshot>) -> Vec<SurfaceUpdate> {
        let (book, updates) = diff_snapshot(std::mem::take(&mut self.book), snapshot);
        self.book = book;
        self.frame = DepthFrame::from_updates(&updates);
        updates
    }

    pub fn frame(&self) -> &DepthFrame {
        &self.frame
    }

    pub fn memory(&self) -> &CellMemoryBook {
        &self.book
    }
}
