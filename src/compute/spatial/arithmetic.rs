//! Spatial arithmetic: `add`, `subtract`, `dot`, `cross`, `scale`,
//! `unit`
//!
//! Same-kind operand pairs of `add`/`subtract` keep their coordinate
//! kind (the azimuthal part goes through the planar same-kind kernel and
//! the summed Cartesian `z` is re-expressed in the shared longitudinal
//! parameterization); every mixed pair is generated by Cartesian
//! conversion composition and yields Cartesian results.

use crate::{
    backend::MathLib,
    compute::{
        convert::{from_z, spatial_to_cartesian, to_z},
        planar, rectify, SpPairScalarKernel, SpPairVectorKernel, SpParamVectorKernel,
        SpVectorKernel,
    },
    coords::{AzimuthalKind, LongitudinalKind, SpatialKind, SPATIAL_KINDS},
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

use super::coords::{mag_rhophi_eta, mag_rhophi_theta, mag_rhophi_z, mag_xy_eta, mag_xy_theta, mag_xy_z};

// specialized
pub(crate) fn add_xy_z_xy_z(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    z1: Float,
    x2: Float,
    y2: Float,
    z2: Float,
) -> (Float, Float, Float) {
    (x1 + x2, y1 + y2, z1 + z2)
}

// specialized
pub(crate) fn subtract_xy_z_xy_z(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    z1: Float,
    x2: Float,
    y2: Float,
    z2: Float,
) -> (Float, Float, Float) {
    (x1 - x2, y1 - y2, z1 - z2)
}

pub(crate) fn dot_xy_z_xy_z(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    z1: Float,
    x2: Float,
    y2: Float,
    z2: Float,
) -> Float {
    x1 * x2 + y1 * y2 + z1 * z2
}

// specialized; stays in cylindrical coordinates
pub(crate) fn dot_rhophi_z_rhophi_z(
    lib: &dyn MathLib,
    rho1: Float,
    phi1: Float,
    z1: Float,
    rho2: Float,
    phi2: Float,
    z2: Float,
) -> Float {
    rho1 * rho2 * lib.cos(phi1 - phi2) + z1 * z2
}

// Cross-product is only computed in Cartesian coordinates; the rest are
// conversions.
pub(crate) fn cross_xy_z_xy_z(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    z1: Float,
    x2: Float,
    y2: Float,
    z2: Float,
) -> (Float, Float, Float) {
    (y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2)
}

pub(crate) fn scale_xy_z(
    _lib: &dyn MathLib,
    factor: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    (x * factor, y * factor, z * factor)
}

pub(crate) fn scale_xy_theta(
    lib: &dyn MathLib,
    factor: Float,
    x: Float,
    y: Float,
    theta: Float,
) -> (Float, Float, Float) {
    let sign = lib.sign(factor);
    let flip_if_negative = lib.absolute(theta + 0.5 * (sign - 1.0) * lib.pi());
    (x * factor, y * factor, flip_if_negative)
}

pub(crate) fn scale_xy_eta(
    lib: &dyn MathLib,
    factor: Float,
    x: Float,
    y: Float,
    eta: Float,
) -> (Float, Float, Float) {
    (x * factor, y * factor, eta * lib.sign(factor))
}

pub(crate) fn scale_rhophi_z(
    lib: &dyn MathLib,
    factor: Float,
    rho: Float,
    phi: Float,
    z: Float,
) -> (Float, Float, Float) {
    let absfactor = lib.absolute(factor);
    let sign = lib.sign(factor);
    let turn_if_negative = -0.5 * (sign - 1.0) * lib.pi();
    (rho * absfactor, rectify(lib, phi + turn_if_negative), z * factor)
}

pub(crate) fn scale_rhophi_theta(
    lib: &dyn MathLib,
    factor: Float,
    rho: Float,
    phi: Float,
    theta: Float,
) -> (Float, Float, Float) {
    let absfactor = lib.absolute(factor);
    let sign = lib.sign(factor);
    let turn_if_negative = -0.5 * (sign - 1.0) * lib.pi();
    let flip_if_negative = lib.absolute(theta + 0.5 * (sign - 1.0) * lib.pi());
    (
        rho * absfactor,
        rectify(lib, phi + turn_if_negative),
        flip_if_negative,
    )
}

pub(crate) fn scale_rhophi_eta(
    lib: &dyn MathLib,
    factor: Float,
    rho: Float,
    phi: Float,
    eta: Float,
) -> (Float, Float, Float) {
    let absfactor = lib.absolute(factor);
    let sign = lib.sign(factor);
    let turn_if_negative = -0.5 * (sign - 1.0) * lib.pi();
    (rho * absfactor, rectify(lib, phi + turn_if_negative), eta * sign)
}

pub(crate) fn unit_xy_z(lib: &dyn MathLib, x: Float, y: Float, z: Float) -> (Float, Float, Float) {
    let norm = mag_xy_z(lib, x, y, z);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        lib.nan_to_num(z / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_xy_theta(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
) -> (Float, Float, Float) {
    let norm = mag_xy_theta(lib, x, y, theta);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        theta,
    )
}

pub(crate) fn unit_xy_eta(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
) -> (Float, Float, Float) {
    let norm = mag_xy_eta(lib, x, y, eta);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        eta,
    )
}

pub(crate) fn unit_rhophi_z(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
) -> (Float, Float, Float) {
    let norm = mag_rhophi_z(lib, rho, phi, z);
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        lib.nan_to_num(z / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_rhophi_theta(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
) -> (Float, Float, Float) {
    let norm = mag_rhophi_theta(lib, rho, phi, theta);
    let inf = lib.inf();
    (lib.nan_to_num(rho / norm, 0.0, inf, -inf), phi, theta)
}

pub(crate) fn unit_rhophi_eta(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
) -> (Float, Float, Float) {
    let norm = mag_rhophi_eta(lib, rho, phi, eta);
    let inf = lib.inf();
    (lib.nan_to_num(rho / norm, 0.0, inf, -inf), phi, eta)
}

/// Native `scale` kernel for one signature (kind-preserving)
pub(crate) fn scale_native(
    kind: SpatialKind,
) -> fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float, Float) {
    match kind {
        (AzimuthalKind::Xy, LongitudinalKind::Z) => scale_xy_z,
        (AzimuthalKind::Xy, LongitudinalKind::Theta) => scale_xy_theta,
        (AzimuthalKind::Xy, LongitudinalKind::Eta) => scale_xy_eta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Z) => scale_rhophi_z,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Theta) => scale_rhophi_theta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Eta) => scale_rhophi_eta,
    }
}

/// Kernel and result kind for `add`/`subtract` under one signature
///
/// `planar_kernel` and `cartesian` select between the two operations;
/// everything else is shared composition.
fn additive_kernel(
    k1: SpatialKind,
    k2: SpatialKind,
    planar_kernel: fn(AzimuthalKind, AzimuthalKind) -> (crate::compute::AzPairVectorKernel, AzimuthalKind),
    cartesian: fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> (Float, Float, Float),
) -> (SpPairVectorKernel, SpatialKind) {
    if k1 == k2 {
        let (planar_same, az_kind) = planar_kernel(k1.0, k2.0);
        let z_of = to_z(k1);
        let lon_back = from_z((az_kind, k1.1));
        // The Cartesian kernel supplies the sign of the z combination
        let kernel: SpPairVectorKernel = Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
            let (c1, c2) = planar_same(lib, a1, a2, b1, b2);
            let (_, _, z) = cartesian(
                lib,
                0.0,
                0.0,
                z_of(lib, a1, a2, a3),
                0.0,
                0.0,
                z_of(lib, b1, b2, b3),
            );
            (c1, c2, lon_back(lib, c1, c2, z))
        });
        (kernel, (az_kind, k1.1))
    } else {
        let (x1, y1, z1) = spatial_to_cartesian(k1);
        let (x2, y2, z2) = spatial_to_cartesian(k2);
        let kernel: SpPairVectorKernel = Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
            cartesian(
                lib,
                x1(lib, a1, a2),
                y1(lib, a1, a2),
                z1(lib, a1, a2, a3),
                x2(lib, b1, b2),
                y2(lib, b1, b2),
                z2(lib, b1, b2, b3),
            )
        });
        (kernel, (AzimuthalKind::Xy, LongitudinalKind::Z))
    }
}

/// Kernel and result kind for `add` under one signature
pub(crate) fn add_kernel(k1: SpatialKind, k2: SpatialKind) -> (SpPairVectorKernel, SpatialKind) {
    match (k1, k2) {
        ((AzimuthalKind::Xy, LongitudinalKind::Z), (AzimuthalKind::Xy, LongitudinalKind::Z)) => {
            (Box::new(add_xy_z_xy_z), (AzimuthalKind::Xy, LongitudinalKind::Z))
        }
        _ => additive_kernel(k1, k2, planar::arithmetic::add_kernel, add_xy_z_xy_z),
    }
}

/// Kernel and result kind for `subtract` under one signature
pub(crate) fn subtract_kernel(
    k1: SpatialKind,
    k2: SpatialKind,
) -> (SpPairVectorKernel, SpatialKind) {
    match (k1, k2) {
        ((AzimuthalKind::Xy, LongitudinalKind::Z), (AzimuthalKind::Xy, LongitudinalKind::Z)) => {
            (Box::new(subtract_xy_z_xy_z), (AzimuthalKind::Xy, LongitudinalKind::Z))
        }
        _ => additive_kernel(k1, k2, planar::arithmetic::subtract_kernel, subtract_xy_z_xy_z),
    }
}

/// Kernel for `dot` under one signature
pub(crate) fn dot_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairScalarKernel {
    match (k1, k2) {
        ((AzimuthalKind::Xy, LongitudinalKind::Z), (AzimuthalKind::Xy, LongitudinalKind::Z)) => {
            Box::new(dot_xy_z_xy_z)
        }
        ((AzimuthalKind::RhoPhi, LongitudinalKind::Z), (AzimuthalKind::RhoPhi, LongitudinalKind::Z)) => {
            Box::new(dot_rhophi_z_rhophi_z)
        }
        _ => {
            let planar_dot = planar::arithmetic::dot_kernel(k1.0, k2.0);
            let z1 = to_z(k1);
            let z2 = to_z(k2);
            Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
                planar_dot(lib, a1, a2, b1, b2) + z1(lib, a1, a2, a3) * z2(lib, b1, b2, b3)
            })
        }
    }
}

/// Kernel for `cross` under one signature (always Cartesian results)
pub(crate) fn cross_kernel(k1: SpatialKind, k2: SpatialKind) -> (SpPairVectorKernel, SpatialKind) {
    let result = (AzimuthalKind::Xy, LongitudinalKind::Z);
    match (k1, k2) {
        ((AzimuthalKind::Xy, LongitudinalKind::Z), (AzimuthalKind::Xy, LongitudinalKind::Z)) => {
            (Box::new(cross_xy_z_xy_z), result)
        }
        _ => {
            let (x1, y1, z1) = spatial_to_cartesian(k1);
            let (x2, y2, z2) = spatial_to_cartesian(k2);
            let kernel: SpPairVectorKernel =
                Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
                    cross_xy_z_xy_z(
                        lib,
                        x1(lib, a1, a2),
                        y1(lib, a1, a2),
                        z1(lib, a1, a2, a3),
                        x2(lib, b1, b2),
                        y2(lib, b1, b2),
                        z2(lib, b1, b2, b3),
                    )
                });
            (kernel, result)
        }
    }
}

type PairVectorTable = DispatchTable<(SpatialKind, SpatialKind), SpPairVectorKernel, SpatialKind>;

fn pair_vector_table(
    operation: &'static str,
    kernel: fn(SpatialKind, SpatialKind) -> (SpPairVectorKernel, SpatialKind),
) -> PairVectorTable {
    let mut table = DispatchTable::new(operation);
    for k1 in SPATIAL_KINDS {
        for k2 in SPATIAL_KINDS {
            let (f, returns) = kernel(k1, k2);
            table.register((k1, k2), f, returns);
        }
    }
    table.built()
}

pub(crate) static ADD: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("spatial.add", add_kernel));

pub(crate) static SUBTRACT: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("spatial.subtract", subtract_kernel));

pub(crate) static CROSS: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("spatial.cross", cross_kernel));

pub(crate) static DOT: Lazy<DispatchTable<(SpatialKind, SpatialKind), SpPairScalarKernel, ()>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("spatial.dot");
        for k1 in SPATIAL_KINDS {
            for k2 in SPATIAL_KINDS {
                table.register((k1, k2), dot_kernel(k1, k2), ());
            }
        }
        table.built()
    });

pub(crate) static SCALE: Lazy<DispatchTable<SpatialKind, SpParamVectorKernel, SpatialKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("spatial.scale");
        for kind in SPATIAL_KINDS {
            let kernel: SpParamVectorKernel = match kind {
                (AzimuthalKind::Xy, LongitudinalKind::Z) => Box::new(scale_xy_z),
                (AzimuthalKind::Xy, LongitudinalKind::Theta) => Box::new(scale_xy_theta),
                (AzimuthalKind::Xy, LongitudinalKind::Eta) => Box::new(scale_xy_eta),
                (AzimuthalKind::RhoPhi, LongitudinalKind::Z) => Box::new(scale_rhophi_z),
                (AzimuthalKind::RhoPhi, LongitudinalKind::Theta) => Box::new(scale_rhophi_theta),
                (AzimuthalKind::RhoPhi, LongitudinalKind::Eta) => Box::new(scale_rhophi_eta),
            };
            table.register(kind, kernel, kind);
        }
        table.built()
    });

pub(crate) static UNIT: Lazy<DispatchTable<SpatialKind, SpVectorKernel, SpatialKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("spatial.unit");
        for kind in SPATIAL_KINDS {
            let kernel: SpVectorKernel = match kind {
                (AzimuthalKind::Xy, LongitudinalKind::Z) => Box::new(unit_xy_z),
                (AzimuthalKind::Xy, LongitudinalKind::Theta) => Box::new(unit_xy_theta),
                (AzimuthalKind::Xy, LongitudinalKind::Eta) => Box::new(unit_xy_eta),
                (AzimuthalKind::RhoPhi, LongitudinalKind::Z) => Box::new(unit_rhophi_z),
                (AzimuthalKind::RhoPhi, LongitudinalKind::Theta) => Box::new(unit_rhophi_theta),
                (AzimuthalKind::RhoPhi, LongitudinalKind::Eta) => Box::new(unit_rhophi_eta),
            };
            table.register(kind, kernel, kind);
        }
        table.built()
    });
