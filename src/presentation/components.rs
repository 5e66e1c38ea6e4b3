use leptos::*;
use std::rc::Rc;
use std::time::Duration;

use crate::application::{DepthFeature, bind_ladder};
use crate::config::DepthConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_depth::{DEPTH_COLUMNS, DepthFrame, DepthSnapshot, PriceCell, QuantityBar, RowId};
use crate::global_state::{depth_frame, is_streaming, record_snapshot, snapshot_count};
use crate::infrastructure::sources::{FixtureDepthSource, ReplayDepthSource};
use crate::{log_error, log_warn};

const DEPTH_STYLE: &str = r#"
.market-depth {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    padding: 20px;
}

.depth-status {
    color: #4a5d73;
    font-size: 12px;
    margin-bottom: 8px;
}

.depth-table {
    width: 100%;
    border-collapse: collapse;
}

.depth-table thead tr {
    background: #f3f4f6;
}

.depth-table th,
.depth-table td {
    padding: 8px;
    text-align: center;
}

.depth-row {
    border-top: 1px solid #e5e7eb;
}

.price-cell {
    min-width: 100px;
}

.tick-up {
    color: #22c55e;
}

.tick-down {
    color: #ef4444;
}

.quantity-track {
    position: relative;
    display: flex;
    align-items: center;
    margin: 0 auto;
    background: #f0f0f0;
}

.quantity-fill {
    position: absolute;
    top: 0;
    height: 100%;
    transition: width 0.3s ease-in-out;
}

.quantity-label {
    position: absolute;
    width: 100%;
    padding: 0 8px;
    z-index: 2;
    color: #000000;
    font-weight: 500;
}
"#;

/// 🦀 Root component: config, styles and the depth feature.
#[component]
pub fn App(#[prop(optional)] config: Option<DepthConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <style>{DEPTH_STYLE}</style>
        <DepthFeatureView />
    }
}

/// Wires a snapshot source to the table and shows feed status above it.
#[component]
pub fn DepthFeatureView() -> impl IntoView {
    let config = use_context::<DepthConfig>().unwrap_or_default();
    let snapshot = create_rw_signal::<Option<DepthSnapshot>>(None);
    let frame = depth_frame();

    bind_ladder(snapshot.into(), frame);
    create_effect(move |_| snapshot.with(|current| record_snapshot(current.as_ref())));

    if !config.replay_enabled || !start_replay(&config, snapshot) {
        let mut feature = DepthFeature::new(FixtureDepthSource::default(), snapshot);
        if let Err(e) = feature.connect() {
            log_error!(LogComponent::Presentation("DepthFeature"), "fixture connect failed: {}", e);
        }
    }

    view! {
        <section class="market-depth">
            <div class="depth-status">
                {move || if is_streaming().get() { "🟢 LIVE" } else { "🔴 OFF" }}
                " • "
                {move || format!("{} snapshots", snapshot_count().get())}
            </div>
            <DepthTableView frame=frame />
        </section>
    }
}

/// Connects a timed replay of the fixture and plays it until the view is
/// cleaned up. Returns `false` when the replay could not be started.
fn start_replay(config: &DepthConfig, snapshot: RwSignal<Option<DepthSnapshot>>) -> bool {
    let interval = Duration::from_millis(u64::from(config.replay_interval_ms));
    let replay = match ReplayDepthSource::from_fixture(interval) {
        Ok(replay) => Rc::new(replay),
        Err(e) => {
            log_warn!(LogComponent::Presentation("DepthFeature"), "{}, showing the static ladder", e);
            return false;
        }
    };

    let mut feature = DepthFeature::new(replay.clone(), snapshot);
    if let Err(e) = feature.connect() {
        log_error!(LogComponent::Presentation("DepthFeature"), "replay connect failed: {}", e);
        return false;
    }

    is_streaming().set(true);
    spawn_local(async move {
        replay.play().await;
        is_streaming().set(false);
    });
    on_cleanup(move || {
        if let Err(e) = feature.disconnect() {
            log_warn!(LogComponent::Presentation("DepthFeature"), "disconnect failed: {}", e);
        }
    });
    true
}

/// Header plus one row per level, or the loading line when there is nothing
/// to show. Holds no state of its own.
///
/// Rows are keyed by id: a row that stays in the ladder keeps its `<tr>` and
/// only its cells are redrawn.
#[component]
pub fn DepthTableView(#[prop(into)] frame: Signal<DepthFrame>) -> impl IntoView {
    let config = use_context::<DepthConfig>().unwrap_or_default();
    let loading_text = config.loading_text.clone();
    let decimals = config.price_decimals;

    let is_loading = create_memo(move |_| frame.with(DepthFrame::is_loading));
    let row_ids = create_memo(move |_| {
        frame.with(|f| f.rows().iter().map(|row| row.id.clone()).collect::<Vec<RowId>>())
    });

    move || {
        if is_loading.get() {
            return view! { <p class="depth-loading">{loading_text.clone()}</p> }.into_view();
        }
        view! {
            <table class="depth-table">
                <thead>
                    <tr>
                        {DEPTH_COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || row_ids.get()
                        key=|id| id.clone()
                        children=move |id| view! { <DepthRowView id=id frame=frame decimals=decimals /> }
                    />
                </tbody>
            </table>
        }
        .into_view()
    }
}

#[component]
fn DepthRowView(id: RowId, frame: Signal<DepthFrame>, decimals: usize) -> impl IntoView {
    let row_id = id.to_string();
    let row = create_memo(move |_| frame.with(|f| f.rows().iter().find(|row| row.id == id).cloned()));

    view! {
        <tr class="depth-row" data-row-id=row_id>
            {move || {
                row.get().map(|row| {
                    view! {
                        <td class="level-cell">{row.level}</td>
                        <QuantityBarView bar=row.bid_bar />
                        <PriceCellView cell=row.bid_cell decimals=decimals />
                        <PriceCellView cell=row.ask_cell decimals=decimals />
                        <QuantityBarView bar=row.ask_bar />
                    }
                })
            }}
        </tr>
    }
}

/// Price with its tick colour. The direction comes from the row's cell
/// memory, the cell only displays it.
#[component]
pub fn PriceCellView(cell: PriceCell, decimals: usize) -> impl IntoView {
    view! {
        <td class=format!("price-cell {}", cell.css_class()) data-direction=cell.direction.to_string()>
            {cell.text(decimals)}
        </td>
    }
}

/// Proportional bar anchored on the outer edge of its side.
#[component]
pub fn QuantityBarView(bar: QuantityBar) -> impl IntoView {
    let config = use_context::<DepthConfig>().unwrap_or_default();
    let anchor = bar.side.anchor();
    let track_style = format!("width: {}px; height: {}px;", config.bar_width_px, config.bar_height_px);
    let fill_style = format!(
        "{}: 0; width: {:.2}%; background-color: {};",
        anchor,
        bar.width_percent,
        config.side_color(bar.side)
    );
    let label_style = format!("{}: 8px; text-align: {};", anchor, anchor);

    view! {
        <td class=format!("quantity-cell {}", bar.side)>
            <div class="quantity-track" style=track_style>
                <div class="quantity-fill" style=fill_style></div>
                <span class="quantity-label" style=label_style>{bar.label()}</span>
            </div>
        </td>
    }
}
