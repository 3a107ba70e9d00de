//! Conversion round trips, operation inverses and native/generated
//! agreement, exercised over randomized inputs with a fixed seed.

use approx::assert_relative_eq;

use momenta::{AzimuthalKind, Lorentz, Planar, Spatial, LORENTZ_KINDS, SPATIAL_KINDS};

use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn rng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(0x3ad5_2f1e)
}

/// A random timelike 4-vector, so every temporal parameterization is
/// well defined
fn random_lorentz(rng: &mut Xoshiro256PlusPlus) -> Lorentz {
    let x = rng.gen_range(-10.0..10.0);
    let y = rng.gen_range(-10.0..10.0);
    let z = rng.gen_range(-10.0..10.0);
    let mag2: f64 = x * x + y * y + z * z;
    let t = mag2.sqrt() + rng.gen_range(0.5..10.0);
    Lorentz::xyzt(x, y, z, t)
}

fn assert_same_lorentz(a: &Lorentz, b: &Lorentz, tolerance: f64) {
    assert_relative_eq!(
        a.x().unwrap(),
        b.x().unwrap(),
        max_relative = tolerance,
        epsilon = tolerance
    );
    assert_relative_eq!(
        a.y().unwrap(),
        b.y().unwrap(),
        max_relative = tolerance,
        epsilon = tolerance
    );
    assert_relative_eq!(
        a.z().unwrap(),
        b.z().unwrap(),
        max_relative = tolerance,
        epsilon = tolerance
    );
    assert_relative_eq!(
        a.t().unwrap(),
        b.t().unwrap(),
        max_relative = tolerance,
        epsilon = tolerance
    );
}

#[test]
fn lorentz_conversions_round_trip_through_every_kind() {
    let mut rng = rng();
    for _ in 0..20 {
        let base = random_lorentz(&mut rng);
        for kind in LORENTZ_KINDS {
            let there = base.to_kind(kind).unwrap();
            let back = there.to_kind(base.kind()).unwrap();
            assert_same_lorentz(&base, &back, 1e-9);
        }
    }
}

#[test]
fn spatial_conversions_round_trip_through_every_kind() {
    let mut rng = rng();
    for _ in 0..20 {
        let base = Spatial::xyz(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        for kind in SPATIAL_KINDS {
            let back = base.to_kind(kind).unwrap().to_kind(base.kind()).unwrap();
            assert_relative_eq!(base.x().unwrap(), back.x().unwrap(), max_relative = 1e-9);
            assert_relative_eq!(base.y().unwrap(), back.y().unwrap(), max_relative = 1e-9);
            assert_relative_eq!(
                base.z().unwrap(),
                back.z().unwrap(),
                max_relative = 1e-9,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn planar_conversions_round_trip() {
    let base = Planar::xy(-2.5, 1.25);
    let back = base
        .to_kind(AzimuthalKind::RhoPhi)
        .unwrap()
        .to_kind(AzimuthalKind::Xy)
        .unwrap();
    assert_relative_eq!(base.x().unwrap(), back.x().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(base.y().unwrap(), back.y().unwrap(), max_relative = 1e-12);
}

#[test]
fn native_and_generated_kernels_agree() {
    // The same physical vector expressed natively and via conversion
    // must give identical answers within floating tolerance
    let native = Planar::xy(5.0, 0.0);
    let polar = Planar::rhophi(5.0, 0.0);
    let probe = Planar::xy(1.0, 2.0);
    assert_relative_eq!(
        native.dot(&probe).unwrap(),
        polar.dot(&probe).unwrap(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        native.rho().unwrap(),
        polar.rho().unwrap(),
        max_relative = 1e-12
    );

    let mut rng = rng();
    for _ in 0..10 {
        let v = random_lorentz(&mut rng);
        let probe = random_lorentz(&mut rng);
        let native_dot = v.dot(&probe).unwrap();
        for k1 in LORENTZ_KINDS {
            for k2 in LORENTZ_KINDS {
                let generated = v
                    .to_kind(k1)
                    .unwrap()
                    .dot(&probe.to_kind(k2).unwrap())
                    .unwrap();
                assert_relative_eq!(native_dot, generated, max_relative = 1e-6, epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn unit_is_idempotent_in_every_kind() {
    let mut rng = rng();
    for _ in 0..10 {
        let base = Spatial::xyz(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        for kind in SPATIAL_KINDS {
            let unit = base.to_kind(kind).unwrap().unit().unwrap().unit().unwrap();
            assert_relative_eq!(unit.mag().unwrap(), 1.0, max_relative = 1e-9);
        }
    }
    for _ in 0..10 {
        let base = random_lorentz(&mut rng);
        for kind in LORENTZ_KINDS {
            let unit = base.to_kind(kind).unwrap().unit().unwrap().unit().unwrap();
            assert_relative_eq!(unit.tau().unwrap(), 1.0, max_relative = 1e-9);
        }
    }
}

#[test]
fn boosting_there_and_back_is_the_identity() {
    let mut rng = rng();
    for _ in 0..10 {
        let base = random_lorentz(&mut rng);
        let beta = rng.gen_range(-0.9..0.9);
        for kind in LORENTZ_KINDS {
            let v = base.to_kind(kind).unwrap();
            let back = v
                .boost_z_beta(beta)
                .unwrap()
                .boost_z_beta(-beta)
                .unwrap();
            assert_same_lorentz(&v, &back, 1e-8);
            let back = v
                .boost_x_beta(beta)
                .unwrap()
                .boost_x_beta(-beta)
                .unwrap();
            assert_same_lorentz(&v, &back, 1e-8);
            let back = v
                .boost_y_beta(beta)
                .unwrap()
                .boost_y_beta(-beta)
                .unwrap();
            assert_same_lorentz(&v, &back, 1e-8);
        }
    }
}

#[test]
fn boost_beta3_inverts_with_the_opposite_velocity() {
    let mut rng = rng();
    for _ in 0..10 {
        let base = random_lorentz(&mut rng);
        let beta3 = Spatial::xyz(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        );
        let opposite = beta3.scale(-1.0).unwrap();
        for kind in LORENTZ_KINDS {
            let v = base.to_kind(kind).unwrap();
            let back = v
                .boost_beta3(&beta3)
                .unwrap()
                .boost_beta3(&opposite)
                .unwrap();
            assert_same_lorentz(&v, &back, 1e-8);
        }
    }
}

#[test]
fn boosting_a_momentum_into_its_own_rest_frame_stops_it() {
    let p = Lorentz::xyzt(3.0, 4.0, 10.0, 20.0);
    // Boosting by the opposite velocity brings p to rest
    let minus_beta3 = p.to_beta3().unwrap().scale(-1.0).unwrap();
    let rest = p.boost_beta3(&minus_beta3).unwrap();
    assert_relative_eq!(rest.mag().unwrap(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(rest.t().unwrap(), p.tau().unwrap(), max_relative = 1e-9);
}

#[test]
fn rotations_invert_and_preserve_magnitude() {
    let mut rng = rng();
    for _ in 0..10 {
        let base = Spatial::xyz(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let angle = rng.gen_range(-3.0..3.0);
        for kind in SPATIAL_KINDS {
            let v = base.to_kind(kind).unwrap();
            let back = v.rotate_x(angle).unwrap().rotate_x(-angle).unwrap();
            assert_relative_eq!(
                back.x().unwrap(),
                v.x().unwrap(),
                max_relative = 1e-9,
                epsilon = 1e-9
            );
            assert_relative_eq!(
                back.z().unwrap(),
                v.z().unwrap(),
                max_relative = 1e-9,
                epsilon = 1e-9
            );
            let rotated = v.rotate_y(angle).unwrap();
            assert_relative_eq!(
                rotated.mag().unwrap(),
                v.mag().unwrap(),
                max_relative = 1e-9
            );
            let back = v.rotate_z(angle).unwrap().rotate_z(-angle).unwrap();
            assert_relative_eq!(
                back.y().unwrap(),
                v.y().unwrap(),
                max_relative = 1e-9,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn axis_rotation_agrees_with_single_axis_rotations() {
    let v = Spatial::xyz(1.0, 2.0, 3.0);
    let z_axis = Spatial::xyz(0.0, 0.0, 1.0);
    let angle = 0.7;
    let via_axis = v.rotate_axis(&z_axis, angle).unwrap();
    let via_z = v.rotate_z(angle).unwrap();
    assert_relative_eq!(via_axis.x().unwrap(), via_z.x().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(via_axis.y().unwrap(), via_z.y().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(
        via_axis.z().unwrap(),
        via_z.z().unwrap(),
        max_relative = 1e-12,
        epsilon = 1e-12
    );
}

#[test]
fn quaternion_rotation_agrees_with_rotate_z() {
    let v = Spatial::xyz(1.0, 2.0, 3.0);
    let angle: f64 = 0.7;
    let rotated = v
        .rotate_quaternion((angle / 2.0).cos(), 0.0, 0.0, (angle / 2.0).sin())
        .unwrap();
    let expected = v.rotate_z(angle).unwrap();
    assert_relative_eq!(rotated.x().unwrap(), expected.x().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(rotated.y().unwrap(), expected.y().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(rotated.z().unwrap(), expected.z().unwrap(), max_relative = 1e-12);
}

#[test]
fn euler_rotation_with_flat_middle_angle_reduces_to_rotate_z() {
    let v = Spatial::xyz(1.0, 2.0, 3.0);
    let (a, b) = (0.4, 0.9);
    let euler = v
        .rotate_euler(a, 0.0, b, momenta::EulerOrder::Zxz)
        .unwrap();
    // The angle direction convention is opposite to rotate_z's
    let expected = v.rotate_z(-(a + b)).unwrap();
    assert_relative_eq!(euler.x().unwrap(), expected.x().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(euler.y().unwrap(), expected.y().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(euler.z().unwrap(), expected.z().unwrap(), max_relative = 1e-12);
}

#[test]
fn scaling_by_a_negative_factor_flips_polar_coordinates_consistently() {
    let v = Spatial::rhophi_theta(5.0, 0.5, 1.0);
    let flipped = v.scale(-2.0).unwrap();
    // rho stays positive, the direction flips
    assert_relative_eq!(flipped.rho().unwrap(), 10.0, max_relative = 1e-12);
    assert_relative_eq!(flipped.x().unwrap(), -2.0 * v.x().unwrap(), max_relative = 1e-9);
    assert_relative_eq!(flipped.y().unwrap(), -2.0 * v.y().unwrap(), max_relative = 1e-9);
    assert_relative_eq!(flipped.z().unwrap(), -2.0 * v.z().unwrap(), max_relative = 1e-9);
}
