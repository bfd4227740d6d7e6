use float_cmp::approx_eq;
use healthscatter::data::scale::{LinearScale, LinearScaleConfig};
use healthscatter::ScaleDomain;

#[test]
fn unit_scale_maps_domain_onto_zero_one() {
    let s = LinearScale::unit(ScaleDomain::new(8.0, 33.0));
    assert!(approx_eq!(f64, s.scale(8.0), 0.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, s.scale(33.0), 1.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, s.scale(20.5), 0.5, epsilon = 1e-12));
    assert!(approx_eq!(f64, s.invert(0.5), 20.5, epsilon = 1e-12));
}

#[test]
fn range_may_be_reversed() {
    let s = LinearScale::new(&LinearScaleConfig {
        domain: (0.0, 10.0),
        range: (500.0, 0.0),
        clamp: false,
    });
    assert!(approx_eq!(f64, s.scale(0.0), 500.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, s.scale(2.0), 400.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, s.invert(100.0), 8.0, epsilon = 1e-9));
}

#[test]
fn clamp_limits_output() {
    let s = LinearScale::new(&LinearScaleConfig::default())
        .with_domain((0.0, 10.0))
        .with_clamp(true);
    assert_eq!(s.scale(20.0), 1.0);
    assert_eq!(s.scale(-5.0), 0.0);
    assert_eq!(s.invert(2.0), 10.0);
    let unclamped = s.clone().with_clamp(false);
    assert!(approx_eq!(f64, unclamped.scale(20.0), 2.0, epsilon = 1e-12));
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let s = LinearScale::unit(ScaleDomain::new(5.0, 5.0)).with_range((10.0, 20.0));
    assert_eq!(s.scale(5.0), 10.0);
    assert_eq!(s.invert(15.0), 5.0);
    assert_eq!(s.normalize(5.0), 0.0);
}

#[test]
fn normalize_ignores_range() {
    let s = LinearScale::unit(ScaleDomain::new(10.0, 44.0)).with_range((300.0, 0.0));
    assert!(approx_eq!(f64, s.normalize(27.0), 0.5, epsilon = 1e-12));
    assert_eq!(s.domain(), (10.0, 44.0));
    assert_eq!(s.range(), (300.0, 0.0));
}
