//! Degenerate inputs must produce the documented substituted values,
//! never errors or raw NaN where a policy exists.

use approx::assert_relative_eq;

use momenta::{Float, Lorentz, Planar, Spatial};

#[test]
fn eta_saturates_to_signed_infinity_on_the_beam_axis() {
    assert_eq!(Spatial::xyz(0.0, 0.0, 5.0).eta().unwrap(), Float::INFINITY);
    assert_eq!(
        Spatial::xyz(0.0, 0.0, -5.0).eta().unwrap(),
        Float::NEG_INFINITY
    );
    // The exact origin maps to zero, not NaN
    assert_eq!(Spatial::xyz(0.0, 0.0, 0.0).eta().unwrap(), 0.0);
}

#[test]
fn costheta_of_the_zero_vector_is_one() {
    assert_eq!(Spatial::xyz(0.0, 0.0, 0.0).costheta().unwrap(), 1.0);
}

#[test]
fn cottheta_on_the_beam_axis_is_infinite() {
    assert_eq!(
        Spatial::xyz(0.0, 0.0, 5.0).cottheta().unwrap(),
        Float::INFINITY
    );
}

#[test]
fn beta_of_the_zero_vector_is_zero() {
    assert_eq!(Lorentz::xyzt(0.0, 0.0, 0.0, 0.0).beta().unwrap(), 0.0);
}

#[test]
fn gamma_of_a_lightlike_vector_is_infinite() {
    assert_eq!(
        Lorentz::xyzt(0.0, 0.0, 1.0, 1.0).gamma().unwrap(),
        Float::INFINITY
    );
}

#[test]
fn unit_of_the_zero_vector_is_zero_not_nan() {
    let unit = Planar::xy(0.0, 0.0).unit().unwrap();
    assert_eq!(unit.x().unwrap(), 0.0);
    assert_eq!(unit.y().unwrap(), 0.0);

    let unit = Spatial::xyz(0.0, 0.0, 0.0).unit().unwrap();
    assert_eq!(unit.mag().unwrap(), 0.0);
}

#[test]
fn scaling_by_zero_keeps_polar_magnitudes_finite() {
    let scaled = Planar::rhophi(5.0, 0.5).scale(0.0).unwrap();
    assert_eq!(scaled.rho().unwrap(), 0.0);
}

#[test]
fn phi_wraps_into_the_half_open_interval() {
    let v = Planar::rhophi(1.0, 3.0);
    let rotated = v.rotate_z(1.0).unwrap();
    let phi = rotated.phi().unwrap();
    assert!(phi > -std::f64::consts::PI && phi <= std::f64::consts::PI);
    // 3.0 + 1.0 wraps to 4.0 - 2*pi
    assert_relative_eq!(
        phi,
        4.0 - 2.0 * std::f64::consts::PI,
        max_relative = 1e-12
    );
}

#[test]
fn spacelike_boost_p4_propagates_nan_instead_of_raising() {
    let v = Lorentz::xyzt(1.0, 2.0, 3.0, 10.0);
    let spacelike = Lorentz::xyzt(5.0, 0.0, 0.0, 1.0);
    let boosted = v.boost_p4(&spacelike).unwrap();
    assert!(boosted.x().unwrap().is_nan());
    assert!(boosted.t().unwrap().is_nan());
}
