//! Numerical reference values, checked across every coordinate-kind
//! combination so that generated kernels are held to the same answers as
//! the natives they were composed from.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use momenta::{Lorentz, Planar, Spatial, LORENTZ_KINDS, SPATIAL_KINDS};

#[test]
fn reference_kinematics_hold_in_every_kind() {
    let base = Lorentz::xyzt(3.0, 4.0, 10.0, 20.0);
    for kind in LORENTZ_KINDS {
        let v = base.to_kind(kind).unwrap();
        assert_relative_eq!(v.et().unwrap(), 80.0_f64.sqrt(), max_relative = 1e-6);
        assert_relative_eq!(v.gamma().unwrap(), 1.2060453783110545, max_relative = 1e-6);
        assert_relative_eq!(v.rapidity().unwrap(), 0.5493061443340549, max_relative = 1e-6);
        assert_relative_eq!(v.t().unwrap(), 20.0, max_relative = 1e-6);
        assert_relative_eq!(v.tau().unwrap(), 275.0_f64.sqrt(), max_relative = 1e-6);
        assert_relative_eq!(v.mag().unwrap(), 125.0_f64.sqrt(), max_relative = 1e-6);
        assert_relative_eq!(v.rho().unwrap(), 5.0, max_relative = 1e-6);
        assert_relative_eq!(v.beta().unwrap(), 125.0_f64.sqrt() / 20.0, max_relative = 1e-6);
        assert_relative_eq!(v.mt2().unwrap(), 300.0, max_relative = 1e-6);
        assert!(v.is_timelike(0.0).unwrap());
        assert!(!v.is_spacelike(0.0).unwrap());
    }
}

#[test]
fn minkowski_dot_is_invariant_across_all_144_pairs() {
    let v1 = Lorentz::xyzt(0.1, 0.2, 0.3, 0.4);
    let v2 = Lorentz::xyzt(0.5, 0.6, 0.7, 0.8);
    for k1 in LORENTZ_KINDS {
        let a = v1.to_kind(k1).unwrap();
        for k2 in LORENTZ_KINDS {
            let b = v2.to_kind(k2).unwrap();
            assert_relative_eq!(a.dot(&b).unwrap(), -0.06, max_relative = 1e-6);
        }
    }
}

#[test]
fn spatial_dot_cross_and_separations() {
    let v1 = Spatial::xyz(1.0, 2.0, 3.0);
    let v2 = Spatial::xyz(4.0, 5.0, 6.0);
    for k1 in SPATIAL_KINDS {
        let a = v1.to_kind(k1).unwrap();
        for k2 in SPATIAL_KINDS {
            let b = v2.to_kind(k2).unwrap();
            assert_relative_eq!(a.dot(&b).unwrap(), 32.0, max_relative = 1e-9);
            let cross = a.cross(&b).unwrap();
            assert_relative_eq!(cross.x().unwrap(), -3.0, max_relative = 1e-9, epsilon = 1e-12);
            assert_relative_eq!(cross.y().unwrap(), 6.0, max_relative = 1e-9, epsilon = 1e-12);
            assert_relative_eq!(cross.z().unwrap(), -3.0, max_relative = 1e-9, epsilon = 1e-12);
            let expected_angle =
                (32.0_f64 / (14.0_f64.sqrt() * 77.0_f64.sqrt())).acos();
            assert_relative_eq!(a.deltaangle(&b).unwrap(), expected_angle, max_relative = 1e-9);
        }
    }
}

#[test]
fn delta_r_matches_its_definition() {
    let v1 = Spatial::xyz(3.0, 4.0, 10.0);
    let v2 = Spatial::xyz(-4.0, 3.0, 2.0);
    let dphi = v1.deltaphi(&v2).unwrap();
    let deta = v1.eta().unwrap() - v2.eta().unwrap();
    let expected = (dphi.powi(2) + deta.powi(2)).sqrt();
    for k1 in SPATIAL_KINDS {
        let a = v1.to_kind(k1).unwrap();
        for k2 in SPATIAL_KINDS {
            let b = v2.to_kind(k2).unwrap();
            assert_relative_eq!(a.delta_r(&b).unwrap(), expected, max_relative = 1e-9);
            assert_relative_eq!(
                a.delta_r2(&b).unwrap(),
                expected.powi(2),
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn delta_rapidity_phi_matches_its_definition() {
    let v1 = Lorentz::xyzt(3.0, 4.0, 10.0, 20.0);
    let v2 = Lorentz::xyzt(-4.0, 3.0, 2.0, 15.0);
    let expected = ((v1.rapidity().unwrap() - v2.rapidity().unwrap()).powi(2)
        + v1.deltaphi(&v2).unwrap().powi(2))
    .sqrt();
    for k1 in LORENTZ_KINDS {
        let a = v1.to_kind(k1).unwrap();
        for k2 in LORENTZ_KINDS {
            let b = v2.to_kind(k2).unwrap();
            assert_relative_eq!(
                a.delta_rapidity_phi(&b).unwrap(),
                expected,
                max_relative = 1e-6
            );
        }
    }
}

#[test]
fn invariant_mass_is_sign_preserving() {
    // Spacelike: mass squared is negative and tau keeps that information
    let spacelike = Lorentz::xyzt(10.0, 0.0, 0.0, 1.0);
    assert_relative_eq!(spacelike.tau2().unwrap(), -99.0, max_relative = 1e-12);
    assert_relative_eq!(spacelike.tau().unwrap(), -(99.0_f64.sqrt()), max_relative = 1e-12);
    assert!(spacelike.is_spacelike(0.0).unwrap());
    assert!(!spacelike.is_timelike(0.0).unwrap());

    // A negative tau survives the round trip through tau2
    let negative_mass = Lorentz::xyz_tau(3.0, 4.0, 0.0, -5.0);
    assert_relative_eq!(negative_mass.tau2().unwrap(), -25.0, max_relative = 1e-12);
    assert_relative_eq!(negative_mass.tau().unwrap(), -5.0, max_relative = 1e-12);
}

#[test]
fn derived_time_quantities_clamp_at_zero() {
    // tau2 + rho2 is negative here, so mt2 clamps instead of going
    // negative, and t2 clamps likewise
    let v = Lorentz::xyz_tau(3.0, 4.0, 0.0, -6.0);
    assert_abs_diff_eq!(v.mt2().unwrap(), 0.0);
    assert_abs_diff_eq!(v.t2().unwrap(), 0.0);
}

#[test]
fn lightlike_vectors_classify_as_such() {
    let photon = Lorentz::xyzt(1.0, 0.0, 0.0, 1.0);
    assert!(photon.is_lightlike(1e-9).unwrap());
    assert_relative_eq!(photon.beta().unwrap(), 1.0, max_relative = 1e-12);
    assert_eq!(photon.gamma().unwrap(), f64::INFINITY);
}

#[test]
fn planar_addition_agrees_between_polar_and_cartesian() {
    let v1 = Planar::xy(3.0, 4.0);
    let v2 = Planar::xy(-1.0, 2.5);
    let cartesian = v1.add(&v2).unwrap();
    let polar = v1
        .to_kind(momenta::AzimuthalKind::RhoPhi)
        .unwrap()
        .add(&v2.to_kind(momenta::AzimuthalKind::RhoPhi).unwrap())
        .unwrap();
    // The polar sum stays polar, the Cartesian sum stays Cartesian
    assert_eq!(polar.kind(), momenta::AzimuthalKind::RhoPhi);
    assert_eq!(cartesian.kind(), momenta::AzimuthalKind::Xy);
    assert_relative_eq!(polar.x().unwrap(), cartesian.x().unwrap(), max_relative = 1e-9);
    assert_relative_eq!(polar.y().unwrap(), cartesian.y().unwrap(), max_relative = 1e-9);
}

#[test]
fn lorentz_sum_of_taus_restores_tau() {
    let v1 = Lorentz::xyz_tau(1.0, 0.0, 2.0, 3.0);
    let v2 = Lorentz::xyz_tau(0.5, -1.0, 1.0, 2.0);
    let sum = v1.add(&v2).unwrap();
    // Both operands carry tau, so the sum does too
    assert_eq!(sum.kind().2, momenta::TemporalKind::Tau);
    let t_sum = v1.t().unwrap() + v2.t().unwrap();
    assert_relative_eq!(sum.t().unwrap(), t_sum, max_relative = 1e-9);
}

#[test]
fn et_definitions_agree() {
    let v = Lorentz::xyzt(3.0, 4.0, 10.0, 20.0);
    assert_relative_eq!(
        v.et2().unwrap(),
        v.et().unwrap().powi(2),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        v.mt2().unwrap(),
        v.t2().unwrap() - v.z().unwrap().powi(2),
        max_relative = 1e-12
    );
}
