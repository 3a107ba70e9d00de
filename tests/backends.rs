//! Backend identity rules: binary operations refuse to mix numeric
//! backends, and a custom backend is pluggable through the `MathLib`
//! contract alone.

use momenta::{
    Azimuthal, Float, Longitudinal, Lorentz, MathLib, Planar, Spatial, Temporal, VectorError,
};

/// A second backend, identical in behavior but distinct in identity
#[derive(Debug)]
struct MirrorLib;

static MIRROR: MirrorLib = MirrorLib;

impl MathLib for MirrorLib {
    fn name(&self) -> &'static str {
        "mirror"
    }

    fn sqrt(&self, x: Float) -> Float {
        x.sqrt()
    }

    fn exp(&self, x: Float) -> Float {
        x.exp()
    }

    fn ln(&self, x: Float) -> Float {
        x.ln()
    }

    fn sin(&self, x: Float) -> Float {
        x.sin()
    }

    fn cos(&self, x: Float) -> Float {
        x.cos()
    }

    fn tan(&self, x: Float) -> Float {
        x.tan()
    }

    fn sinh(&self, x: Float) -> Float {
        x.sinh()
    }

    fn cosh(&self, x: Float) -> Float {
        x.cosh()
    }

    fn tanh(&self, x: Float) -> Float {
        x.tanh()
    }

    fn arcsin(&self, x: Float) -> Float {
        x.asin()
    }

    fn arccos(&self, x: Float) -> Float {
        x.acos()
    }

    fn arctan(&self, x: Float) -> Float {
        x.atan()
    }

    fn arctan2(&self, y: Float, x: Float) -> Float {
        y.atan2(x)
    }

    fn arcsinh(&self, x: Float) -> Float {
        x.asinh()
    }

    fn arccosh(&self, x: Float) -> Float {
        x.acosh()
    }

    fn arctanh(&self, x: Float) -> Float {
        x.atanh()
    }

    fn absolute(&self, x: Float) -> Float {
        x.abs()
    }

    fn sign(&self, x: Float) -> Float {
        if x > 0.0 {
            1.0
        } else if x < 0.0 {
            -1.0
        } else {
            x
        }
    }

    fn copysign(&self, magnitude: Float, sign: Float) -> Float {
        magnitude.copysign(sign)
    }

    fn maximum(&self, a: Float, b: Float) -> Float {
        if a.is_nan() || b.is_nan() {
            Float::NAN
        } else {
            a.max(b)
        }
    }

    fn minimum(&self, a: Float, b: Float) -> Float {
        if a.is_nan() || b.is_nan() {
            Float::NAN
        } else {
            a.min(b)
        }
    }

    fn isclose(&self, a: Float, b: Float, rtol: Float, atol: Float, equal_nan: bool) -> bool {
        if a.is_nan() || b.is_nan() {
            equal_nan && a.is_nan() && b.is_nan()
        } else {
            (a - b).abs() <= atol + rtol * b.abs()
        }
    }

    fn nan_to_num(&self, x: Float, nan: Float, posinf: Float, neginf: Float) -> Float {
        if x.is_nan() {
            nan
        } else if x == Float::INFINITY {
            posinf
        } else if x == Float::NEG_INFINITY {
            neginf
        } else {
            x
        }
    }

    fn pi(&self) -> Float {
        std::f64::consts::PI as Float
    }

    fn inf(&self) -> Float {
        Float::INFINITY
    }
}

fn mirror_lorentz(x: Float, y: Float, z: Float, t: Float) -> Lorentz {
    Lorentz::with_lib(
        Azimuthal::Xy { x, y },
        Longitudinal::Z(z),
        Temporal::T(t),
        &MIRROR,
    )
}

#[test]
fn mixed_backends_are_rejected() {
    let std_side = Lorentz::xyzt(1.0, 2.0, 3.0, 10.0);
    let mirror_side = mirror_lorentz(4.0, 5.0, 6.0, 12.0);
    let err = std_side.dot(&mirror_side).unwrap_err();
    match err {
        VectorError::BackendMismatch {
            operation,
            lhs,
            rhs,
        } => {
            assert_eq!(operation, "lorentz.dot");
            assert_eq!(lhs, "std");
            assert_eq!(rhs, "mirror");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(std_side.add(&mirror_side).is_err());
    assert!(std_side.boost_p4(&mirror_side).is_err());

    let std_beta3 = Spatial::xyz(0.1, 0.2, 0.3);
    assert!(mirror_side.boost_beta3(&std_beta3).is_err());

    let std_planar = Planar::xy(1.0, 2.0);
    let mirror_planar = Planar::with_lib(Azimuthal::Xy { x: 1.0, y: 2.0 }, &MIRROR);
    assert!(std_planar.deltaphi(&mirror_planar).is_err());
}

#[test]
fn same_backend_never_trips_the_identity_check() {
    let a = mirror_lorentz(1.0, 2.0, 3.0, 10.0);
    let b = mirror_lorentz(4.0, 5.0, 6.0, 12.0);
    a.dot(&b).unwrap();
    a.add(&b).unwrap();
    a.boost_p4(&b).unwrap();
}

#[test]
fn a_custom_backend_computes_like_the_standard_one() {
    let std_v = Lorentz::xyzt(3.0, 4.0, 10.0, 20.0);
    let mirror_v = mirror_lorentz(3.0, 4.0, 10.0, 20.0);
    assert_eq!(std_v.tau().unwrap(), mirror_v.tau().unwrap());
    assert_eq!(std_v.rapidity().unwrap(), mirror_v.rapidity().unwrap());
    assert_eq!(std_v.et().unwrap(), mirror_v.et().unwrap());
    let boosted_std = std_v.boost_z_beta(0.5).unwrap();
    let boosted_mirror = mirror_v.boost_z_beta(0.5).unwrap();
    assert_eq!(boosted_std.z().unwrap(), boosted_mirror.z().unwrap());
}

#[test]
fn errors_render_operation_and_backends() {
    let err = Lorentz::xyzt(1.0, 2.0, 3.0, 10.0)
        .subtract(&mirror_lorentz(0.0, 0.0, 0.0, 1.0))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("lorentz.subtract"));
    assert!(message.contains("std"));
    assert!(message.contains("mirror"));
}
