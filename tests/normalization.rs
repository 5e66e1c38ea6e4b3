use market_depth_wasm::domain::market_depth::{
    DepthLevel, DepthSnapshot, NormalizationScale, Quantity, QuantityBar, Side,
};
use quickcheck_macros::quickcheck;

fn snapshot(quantities: &[(f64, f64)]) -> DepthSnapshot {
    quantities
        .iter()
        .enumerate()
        .map(|(i, (bid, ask))| DepthLevel::new(format!("row-{i}"), i as u32, 100.0 - i as f64, *bid, 101.0 + i as f64, *ask))
        .collect()
}

#[test]
fn scale_is_max_over_both_sides() {
    let scale = NormalizationScale::from_snapshot(&snapshot(&[(500.0, 700.0), (1200.0, 800.0)]));
    assert_eq!(scale.value(), 1200.0);

    let scale = NormalizationScale::from_snapshot(&snapshot(&[(500.0, 700.0), (300.0, 2000.0)]));
    assert_eq!(scale.value(), 2000.0);
}

#[test]
fn width_is_share_of_scale() {
    let bar = QuantityBar::new(Quantity::from(500.0), NormalizationScale::from_snapshot(&snapshot(&[(500.0, 700.0)])), Side::Bid);
    assert!((bar.width_percent - 71.4285714).abs() < 1e-4);
    assert_eq!(format!("{:.2}", bar.width_percent), "71.43");
    assert_eq!(bar.label(), "500");
}

#[test]
fn all_zero_quantities_give_zero_width() {
    let scale = NormalizationScale::from_snapshot(&snapshot(&[(0.0, 0.0), (0.0, 0.0)]));
    assert_eq!(scale.value(), 0.0);
    for side in [Side::Bid, Side::Ask] {
        let bar = QuantityBar::new(Quantity::from(0.0), scale, side);
        assert_eq!(bar.width_percent, 0.0);
        assert!(bar.width_percent.is_finite());
    }
}

#[test]
fn label_is_grouped_and_unscaled() {
    let scale = NormalizationScale::from_snapshot(&snapshot(&[(12500.0, 300.0)]));
    let bar = QuantityBar::new(Quantity::from(12500.0), scale, Side::Bid);
    assert_eq!(bar.label(), "12,500");
    assert_eq!(bar.width_percent, 100.0);
}

#[quickcheck]
fn widths_stay_within_bounds(quantities: Vec<(u32, u32)>) -> bool {
    let pairs: Vec<(f64, f64)> = quantities.iter().map(|(b, a)| (f64::from(*b), f64::from(*a))).collect();
    let snap = snapshot(&pairs);
    let scale = NormalizationScale::from_snapshot(&snap);

    let widths: Vec<f64> = snap
        .iter()
        .flat_map(|l| [scale.width_percent(l.bid_quantity), scale.width_percent(l.ask_quantity)])
        .collect();

    let in_range = widths.iter().all(|w| (0.0..=100.0).contains(w));
    let full_bar = scale.value() == 0.0 || widths.iter().any(|w| *w == 100.0);
    in_range && full_bar
}
