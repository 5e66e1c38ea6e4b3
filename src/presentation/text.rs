use crate::domain::market_depth::{
    DEPTH_COLUMNS, PRICE_DECIMALS, PriceCell, QuantityBar, SurfaceUpdate, format_grouped,
};

/// Plain-text form of one diff step, one line per update. Used for logs and
/// for checking frames without a DOM.
pub fn render_text(updates: &[SurfaceUpdate]) -> String {
    updates.iter().map(render_line).collect::<Vec<_>>().join("\n")
}

fn render_line(update: &SurfaceUpdate) -> String {
    match update {
        SurfaceUpdate::ShowPlaceholder => "Loading market depth data...".to_string(),
        SurfaceUpdate::RenderHeader { scale } => {
            format!("{} @ {}", DEPTH_COLUMNS.join(" | "), format_grouped(scale.value()))
        }
        SurfaceUpdate::RenderRow(row) => format!(
            "{} | {} | {} | {} | {}",
            row.level,
            bar_text(&row.bid_bar),
            cell_text(&row.bid_cell),
            cell_text(&row.ask_cell),
            bar_text(&row.ask_bar)
        ),
        SurfaceUpdate::RemoveRow(id) => format!("removed {}", id),
    }
}

fn bar_text(bar: &QuantityBar) -> String {
    format!("{} ({:.2}%)", bar.label(), bar.width_percent)
}

// Price followed by ▲/▼ once the cell has moved.
fn cell_text(cell: &PriceCell) -> String {
    let text = cell.text(PRICE_DECIMALS);
    match cell.direction.arrow() {
        ' ' => text,
        arrow => format!("{}{}", text, arrow),
    }
}
