use crate::domain::market_depth::{DepthFrame, DepthSnapshot};
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub depth_frame: RwSignal<DepthFrame>,
    pub snapshot_count: RwSignal<usize>,
    pub is_streaming: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        depth_frame: create_rw_signal(DepthFrame::Loading),
        snapshot_count: create_rw_signal(0),
        is_streaming: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub depth_frame => depth_frame: DepthFrame,
    pub snapshot_count => snapshot_count: usize,
    pub is_streaming => is_streaming: bool,
}

/// Counts one delivered snapshot. Absent snapshots are not counted.
pub fn record_snapshot(snapshot: Option<&DepthSnapshot>) {
    if snapshot.is_some() {
        snapshot_count().update(|count| *count += 1);
    }
}
