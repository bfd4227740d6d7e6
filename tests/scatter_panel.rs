mod common;

use std::time::Duration;

use float_cmp::approx_eq;
use healthscatter::config::{FeatureFlags, PointConfig};
use healthscatter::panels::scatter_ui::{format_tick, nearest_point};
use healthscatter::panels::ScatterPanel;
use healthscatter::{AxisBindingEngine, Dimension};

#[test]
fn nearest_point_respects_max_distance() {
    let points = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]];
    assert_eq!(nearest_point(&points, [9.0, 1.0], 3.0), Some(1));
    assert_eq!(nearest_point(&points, [5.0, 5.0], 3.0), None);
    assert_eq!(nearest_point(&[], [0.0, 0.0], 3.0), None);
}

#[test]
fn nearest_point_prefers_the_closest() {
    let points = [[0.0, 0.0], [2.0, 0.0]];
    assert_eq!(nearest_point(&points, [1.5, 0.0], 5.0), Some(1));
}

#[test]
fn ticks_drop_a_trailing_zero() {
    assert_eq!(format_tick(10.0), "10");
    assert_eq!(format_tick(12.34), "12.3");
    assert_eq!(format_tick(17.6), "17.6");
}

#[test]
fn only_the_rebound_dimension_moves() {
    let mut engine = AxisBindingEngine::with_defaults(common::two_states()).unwrap();
    let mut panel = ScatterPanel::new(
        &engine,
        Duration::from_secs(2),
        PointConfig::default(),
        &FeatureFlags::default(),
    );
    let before = panel.positions_at(0.0);
    assert!(!panel.is_animating(0.0));

    engine.rebind(Dimension::X, "age").unwrap();
    panel.on_rebound(&engine, Dimension::X, 1.0);
    assert!(panel.is_animating(1.5));

    let mid = panel.positions_at(2.0);
    let end = panel.positions_at(3.0);
    for i in 0..before.len() {
        assert_eq!(mid[i][1], before[i][1]);
        assert_eq!(end[i][1], before[i][1]);
    }
    // ages 30 and 40 over (24, 44)
    assert!(approx_eq!(f64, end[0][0], 0.3, epsilon = 1e-9));
    assert!(approx_eq!(f64, end[1][0], 0.8, epsilon = 1e-9));
    assert!(approx_eq!(f64, mid[0][0], (before[0][0] + 0.3) / 2.0, epsilon = 1e-9));

    assert_eq!(panel.settle(2.0), Vec::<Dimension>::new());
    assert_eq!(panel.settle(3.0), vec![Dimension::X]);
    assert!(panel.settle(4.0).is_empty());
    assert!(!panel.is_animating(4.0));
    assert_eq!(panel.animator(Dimension::X).field(), healthscatter::Field::Age);
}
