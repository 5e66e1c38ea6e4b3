use leptos::*;
use market_depth_wasm::application::{DepthFeature, bind_ladder};
use market_depth_wasm::domain::market_depth::repositories::DepthSnapshotSource;
use market_depth_wasm::domain::market_depth::{DepthFrame, DepthSnapshot, TickDirection};
use market_depth_wasm::infrastructure::sources::{
    FixtureDepthSource, ReplayDepthSource, fixture_snapshot, replay_frames,
};
use std::rc::Rc;
use std::time::Duration;

#[test]
fn feature_forwards_snapshot_unchanged() {
    let runtime = create_runtime();
    let fixture = fixture_snapshot();
    let snapshot = create_rw_signal::<Option<DepthSnapshot>>(None);

    let mut feature = DepthFeature::new(FixtureDepthSource::new(fixture.clone()), snapshot);
    feature.connect().unwrap();
    assert!(feature.is_connected());

    let delivered = snapshot.get_untracked().unwrap();
    assert!(delivered.same_as(&fixture));

    feature.disconnect().unwrap();
    assert!(!feature.is_connected());
    runtime.dispose();
}

#[test]
fn fixture_connect_delivers_once() {
    let runtime = create_runtime();
    let snapshot = create_rw_signal::<Option<DepthSnapshot>>(None);
    let arrivals = create_rw_signal(0usize);
    create_effect(move |_| {
        if snapshot.with(|s| s.is_some()) {
            arrivals.update_untracked(|n| *n += 1);
        }
    });

    let mut feature = DepthFeature::new(FixtureDepthSource::default(), snapshot);
    feature.connect().unwrap();
    assert_eq!(arrivals.get_untracked(), 1);

    feature.connect().unwrap();
    assert_eq!(arrivals.get_untracked(), 1);
    runtime.dispose();
}

#[test]
fn ladder_binding_applies_each_arrival() {
    let runtime = create_runtime();
    let snapshot = create_rw_signal::<Option<DepthSnapshot>>(None);
    let frame = create_rw_signal(DepthFrame::Loading);
    bind_ladder(snapshot.into(), frame);
    assert!(frame.with_untracked(|f| f.is_loading()));

    let replay = Rc::new(ReplayDepthSource::new(replay_frames(&fixture_snapshot(), 3), Duration::from_millis(1)).unwrap());
    let mut feature = DepthFeature::new(replay.clone(), snapshot);
    feature.connect().unwrap();
    assert!(feature.source().latest().is_none());

    assert!(replay.advance());
    frame.with_untracked(|f| {
        assert_eq!(f.rows().len(), 10);
        assert!(f.rows().iter().all(|r| r.bid_cell.direction == TickDirection::None));
    });

    assert!(replay.advance());
    frame.with_untracked(|f| {
        let rows = f.rows();
        assert_eq!(rows[0].bid_cell.direction, TickDirection::Up);
        assert_eq!(rows[0].ask_cell.direction, TickDirection::Down);
        assert_eq!(rows[1].bid_cell.direction, TickDirection::Down);
        assert_eq!(rows[1].ask_cell.direction, TickDirection::Up);
    });

    feature.disconnect().unwrap();
    assert!(!replay.advance());
    runtime.dispose();
}

#[test]
fn second_subscriber_is_rejected() {
    let runtime = create_runtime();
    let replay = Rc::new(ReplayDepthSource::from_fixture(Duration::from_millis(1)).unwrap());
    let mut first = DepthFeature::new(replay.clone(), create_rw_signal(None));
    let mut second = DepthFeature::new(replay.clone(), create_rw_signal(None));

    first.connect().unwrap();
    assert!(second.connect().is_err());
    assert!(!second.is_connected());
    runtime.dispose();
}
