//! Spatial rotations and linear transforms: `rotate_x`, `rotate_y`,
//! `rotate_axis`, `rotate_euler`, `rotate_quaternion`, `transform3d`
//!
//! Rotation is only computed in Cartesian coordinates; the rest are
//! conversions, and every result is Cartesian.
//!
//! The Euler matrices follow ROOT's angle names (phi, theta, psi) and
//! direction conventions, which negate the sines relative to the usual
//! textbook matrices; `zxz` is the customary default order. The
//! quaternion matrix likewise follows ROOT's conventions.

use crate::{
    backend::MathLib,
    compute::{
        convert::spatial_to_cartesian, SpAxisVectorKernel, SpEulerVectorKernel,
        SpMatrixVectorKernel, SpParamVectorKernel, SpQuaternionVectorKernel,
    },
    coords::{AzimuthalKind, EulerOrder, LongitudinalKind, SpatialKind, SPATIAL_KINDS},
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

pub(crate) fn rotate_x_xy_z(
    lib: &dyn MathLib,
    angle: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let s = lib.sin(angle);
    let c = lib.cos(angle);
    (x, c * y - s * z, s * y + c * z)
}

pub(crate) fn rotate_y_xy_z(
    lib: &dyn MathLib,
    angle: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let s = lib.sin(angle);
    let c = lib.cos(angle);
    (c * x + s * z, y, -s * x + c * z)
}

/// Rotation of `(x2, y2, z2)` around the axis `(x1, y1, z1)`
pub(crate) fn rotate_axis_xy_z_xy_z(
    lib: &dyn MathLib,
    angle: Float,
    x1: Float,
    y1: Float,
    z1: Float,
    x2: Float,
    y2: Float,
    z2: Float,
) -> (Float, Float, Float) {
    let norm = lib.sqrt(x1.powi(2) + y1.powi(2) + z1.powi(2));
    let ux = x1 / norm;
    let uy = y1 / norm;
    let uz = z1 / norm;
    let c = lib.cos(angle);
    let s = lib.sin(angle);
    let c1 = 1.0 - c;
    let xp = (c + ux.powi(2) * c1) * x2
        + (ux * uy * c1 - uz * s) * y2
        + (ux * uz * c1 + uy * s) * z2;
    let yp = (ux * uy * c1 + uz * s) * x2
        + (c + uy.powi(2) * c1) * y2
        + (uy * uz * c1 - ux * s) * z2;
    let zp = (ux * uz * c1 - uy * s) * x2
        + (uy * uz * c1 + ux * s) * y2
        + (c + uz.powi(2) * c1) * z2;
    (xp, yp, zp)
}

pub(crate) fn rotate_quaternion_xy_z(
    _lib: &dyn MathLib,
    u: Float,
    i: Float,
    j: Float,
    k: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let q00 = u * u;
    let q01 = u * i;
    let q02 = u * j;
    let q03 = u * k;
    let q11 = i * i;
    let q12 = i * j;
    let q13 = i * k;
    let q22 = j * j;
    let q23 = j * k;
    let q33 = k * k;
    let xp = (q00 + q11 - q22 - q33) * x + (2.0 * (q12 - q03)) * y + (2.0 * (q02 + q13)) * z;
    let yp = (2.0 * (q12 + q03)) * x + (q00 - q11 + q22 - q33) * y + (2.0 * (q23 - q01)) * z;
    let zp = (2.0 * (q13 - q02)) * x + (2.0 * (q23 + q01)) * y + (q00 - q11 - q22 + q33) * z;
    (xp, yp, zp)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn transform3d_xy_z(
    _lib: &dyn MathLib,
    xx: Float,
    xy: Float,
    xz: Float,
    yx: Float,
    yy: Float,
    yz: Float,
    zx: Float,
    zy: Float,
    zz: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    (
        xx * x + xy * y + xz * z,
        yx * x + yy * y + yz * z,
        zx * x + zy * y + zz * z,
    )
}

/// One Euler rotation in Cartesian coordinates
type EulerNative = fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> (Float, Float, Float);

pub(crate) fn rotate_euler_xzx_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c2) * x + (-c3 * s2) * y + (s2 * s3) * z;
    let yp = (c1 * s2) * x + (c1 * c2 * c3 - s1 * s3) * y + (-c3 * s1 - c1 * c2 * s3) * z;
    let zp = (s1 * s2) * x + (c1 * s3 + c2 * c3 * s1) * y + (c1 * c3 - c2 * s1 * s3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_xyx_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c2) * x + (s2 * s3) * y + (c3 * s2) * z;
    let yp = (s1 * s2) * x + (c1 * c3 - c2 * s1 * s3) * y + (-c1 * s3 - c2 * c3 * s1) * z;
    let zp = (-c1 * s2) * x + (c3 * s1 + c1 * c2 * s3) * y + (c1 * c2 * c3 - s1 * s3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_yxy_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c3 - c2 * s1 * s3) * x + (s1 * s2) * y + (c1 * s3 + c2 * c3 * s1) * z;
    let yp = (s2 * s3) * x + (c2) * y + (-c3 * s2) * z;
    let zp = (-c3 * s1 - c1 * c2 * s3) * x + (c1 * s2) * y + (c1 * c2 * c3 - s1 * s3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_yzy_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c2 * c3 - s1 * s3) * x + (-c1 * s2) * y + (c3 * s1 + c1 * c2 * s3) * z;
    let yp = (c3 * s2) * x + (c2) * y + (s2 * s3) * z;
    let zp = (-c1 * s3 - c2 * c3 * s1) * x + (s1 * s2) * y + (c1 * c3 - c2 * s1 * s3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_zyz_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c2 * c3 - s1 * s3) * x + (-c3 * s1 - c1 * c2 * s3) * y + (c1 * s2) * z;
    let yp = (c1 * s3 + c2 * c3 * s1) * x + (c1 * c3 - c2 * s1 * s3) * y + (s1 * s2) * z;
    let zp = (-c3 * s2) * x + (s2 * s3) * y + (c2) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_zxz_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c3 - c2 * s1 * s3) * x + (-c1 * s3 - c2 * c3 * s1) * y + (s1 * s2) * z;
    let yp = (c3 * s1 + c1 * c2 * s3) * x + (c1 * c2 * c3 - s1 * s3) * y + (-c1 * s2) * z;
    let zp = (s2 * s3) * x + (c3 * s2) * y + (c2) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_xzy_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c2 * c3) * x + (-s2) * y + (c2 * s3) * z;
    let yp = (s1 * s3 + c1 * c3 * s2) * x + (c1 * c2) * y + (c1 * s2 * s3 - c3 * s1) * z;
    let zp = (c3 * s1 * s2 - c1 * s3) * x + (c2 * s1) * y + (c1 * c3 + s1 * s2 * s3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_xyz_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c2 * c3) * x + (-c2 * s3) * y + (s2) * z;
    let yp = (c1 * s3 + c3 * s1 * s2) * x + (c1 * c3 - s1 * s2 * s3) * y + (-c2 * s1) * z;
    let zp = (s1 * s3 - c1 * c3 * s2) * x + (c3 * s1 + c1 * s2 * s3) * y + (c1 * c2) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_yxz_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c3 + s1 * s2 * s3) * x + (c3 * s1 * s2 - c1 * s3) * y + (c2 * s1) * z;
    let yp = (c2 * s3) * x + (c2 * c3) * y + (-s2) * z;
    let zp = (c1 * s2 * s3 - c3 * s1) * x + (c1 * c3 * s2 + s1 * s3) * y + (c1 * c2) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_yzx_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c2) * x + (s1 * s3 - c1 * c3 * s2) * y + (c3 * s1 + c1 * s2 * s3) * z;
    let yp = (s2) * x + (c2 * c3) * y + (-c2 * s3) * z;
    let zp = (-c2 * s1) * x + (c1 * s3 + c3 * s1 * s2) * y + (c1 * c3 - s1 * s2 * s3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_zyx_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c2) * x + (c1 * s2 * s3 - c3 * s1) * y + (s1 * s3 + c1 * c3 * s2) * z;
    let yp = (c2 * s1) * x + (c1 * c3 + s1 * s2 * s3) * y + (c3 * s1 * s2 - c1 * s3) * z;
    let zp = (-s2) * x + (c2 * s3) * y + (c2 * c3) * z;
    (xp, yp, zp)
}

pub(crate) fn rotate_euler_zxy_xy_z(
    lib: &dyn MathLib,
    phi: Float,
    theta: Float,
    psi: Float,
    x: Float,
    y: Float,
    z: Float,
) -> (Float, Float, Float) {
    let c1 = lib.cos(psi);
    let s1 = -lib.sin(psi);
    let c2 = lib.cos(theta);
    let s2 = -lib.sin(theta);
    let c3 = lib.cos(phi);
    let s3 = -lib.sin(phi);
    let xp = (c1 * c3 - s1 * s2 * s3) * x + (-c2 * s1) * y + (c1 * s3 + c3 * s1 * s2) * z;
    let yp = (c3 * s1 + c1 * s2 * s3) * x + (c1 * c2) * y + (s1 * s3 - c1 * c3 * s2) * z;
    let zp = (-c2 * s3) * x + (s2) * y + (c2 * c3) * z;
    (xp, yp, zp)
}

fn euler_native(order: EulerOrder) -> EulerNative {
    match order {
        EulerOrder::Xzx => rotate_euler_xzx_xy_z,
        EulerOrder::Xyx => rotate_euler_xyx_xy_z,
        EulerOrder::Yxy => rotate_euler_yxy_xy_z,
        EulerOrder::Yzy => rotate_euler_yzy_xy_z,
        EulerOrder::Zyz => rotate_euler_zyz_xy_z,
        EulerOrder::Zxz => rotate_euler_zxz_xy_z,
        EulerOrder::Xzy => rotate_euler_xzy_xy_z,
        EulerOrder::Xyz => rotate_euler_xyz_xy_z,
        EulerOrder::Yxz => rotate_euler_yxz_xy_z,
        EulerOrder::Yzx => rotate_euler_yzx_xy_z,
        EulerOrder::Zyx => rotate_euler_zyx_xy_z,
        EulerOrder::Zxy => rotate_euler_zxy_xy_z,
    }
}

const CARTESIAN: SpatialKind = (AzimuthalKind::Xy, LongitudinalKind::Z);

/// Kernel for a single-axis rotation under one signature
fn single_axis_kernel(
    kind: SpatialKind,
    cartesian: fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float, Float),
) -> SpParamVectorKernel {
    if kind == CARTESIAN {
        Box::new(cartesian)
    } else {
        let (x, y, z) = spatial_to_cartesian(kind);
        Box::new(move |lib: &dyn MathLib, angle, a1, a2, a3| {
            cartesian(lib, angle, x(lib, a1, a2), y(lib, a1, a2), z(lib, a1, a2, a3))
        })
    }
}

/// Kernel for `rotate_axis` under one signature (axis first)
pub(crate) fn rotate_axis_kernel(k1: SpatialKind, k2: SpatialKind) -> SpAxisVectorKernel {
    if (k1, k2) == (CARTESIAN, CARTESIAN) {
        Box::new(rotate_axis_xy_z_xy_z)
    } else {
        let (x1, y1, z1) = spatial_to_cartesian(k1);
        let (x2, y2, z2) = spatial_to_cartesian(k2);
        Box::new(move |lib: &dyn MathLib, angle, a1, a2, a3, b1, b2, b3| {
            rotate_axis_xy_z_xy_z(
                lib,
                angle,
                x1(lib, a1, a2),
                y1(lib, a1, a2),
                z1(lib, a1, a2, a3),
                x2(lib, b1, b2),
                y2(lib, b1, b2),
                z2(lib, b1, b2, b3),
            )
        })
    }
}

type ParamVectorTable = DispatchTable<SpatialKind, SpParamVectorKernel, SpatialKind>;

fn single_axis_table(
    operation: &'static str,
    cartesian: fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float, Float),
) -> ParamVectorTable {
    let mut table = DispatchTable::new(operation);
    for kind in SPATIAL_KINDS {
        table.register(kind, single_axis_kernel(kind, cartesian), CARTESIAN);
    }
    table.built()
}

pub(crate) static ROTATE_X: Lazy<ParamVectorTable> =
    Lazy::new(|| single_axis_table("spatial.rotate_x", rotate_x_xy_z));

pub(crate) static ROTATE_Y: Lazy<ParamVectorTable> =
    Lazy::new(|| single_axis_table("spatial.rotate_y", rotate_y_xy_z));

pub(crate) static ROTATE_AXIS: Lazy<
    DispatchTable<(SpatialKind, SpatialKind), SpAxisVectorKernel, SpatialKind>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("spatial.rotate_axis");
    for k1 in SPATIAL_KINDS {
        for k2 in SPATIAL_KINDS {
            table.register((k1, k2), rotate_axis_kernel(k1, k2), CARTESIAN);
        }
    }
    table.built()
});

pub(crate) static ROTATE_EULER: Lazy<
    DispatchTable<(EulerOrder, SpatialKind), SpEulerVectorKernel, SpatialKind>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("spatial.rotate_euler");
    for order in EulerOrder::ALL {
        let native = euler_native(order);
        for kind in SPATIAL_KINDS {
            let kernel: SpEulerVectorKernel = if kind == CARTESIAN {
                Box::new(native)
            } else {
                let (x, y, z) = spatial_to_cartesian(kind);
                Box::new(move |lib: &dyn MathLib, phi, theta, psi, a1, a2, a3| {
                    native(
                        lib,
                        phi,
                        theta,
                        psi,
                        x(lib, a1, a2),
                        y(lib, a1, a2),
                        z(lib, a1, a2, a3),
                    )
                })
            };
            table.register((order, kind), kernel, CARTESIAN);
        }
    }
    table.built()
});

pub(crate) static ROTATE_QUATERNION: Lazy<
    DispatchTable<SpatialKind, SpQuaternionVectorKernel, SpatialKind>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("spatial.rotate_quaternion");
    for kind in SPATIAL_KINDS {
        let kernel: SpQuaternionVectorKernel = if kind == CARTESIAN {
            Box::new(rotate_quaternion_xy_z)
        } else {
            let (x, y, z) = spatial_to_cartesian(kind);
            Box::new(move |lib: &dyn MathLib, u, i, j, k, a1, a2, a3| {
                rotate_quaternion_xy_z(
                    lib,
                    u,
                    i,
                    j,
                    k,
                    x(lib, a1, a2),
                    y(lib, a1, a2),
                    z(lib, a1, a2, a3),
                )
            })
        };
        table.register(kind, kernel, CARTESIAN);
    }
    table.built()
});

pub(crate) static TRANSFORM3D: Lazy<DispatchTable<SpatialKind, SpMatrixVectorKernel, SpatialKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("spatial.transform3d");
        for kind in SPATIAL_KINDS {
            let kernel: SpMatrixVectorKernel = if kind == CARTESIAN {
                Box::new(transform3d_xy_z)
            } else {
                let (x, y, z) = spatial_to_cartesian(kind);
                Box::new(
                    move |lib: &dyn MathLib, xx, xy, xz, yx, yy, yz, zx, zy, zz, a1, a2, a3| {
                        transform3d_xy_z(
                            lib,
                            xx,
                            xy,
                            xz,
                            yx,
                            yy,
                            yz,
                            zx,
                            zy,
                            zz,
                            x(lib, a1, a2),
                            y(lib, a1, a2),
                            z(lib, a1, a2, a3),
                        )
                    },
                )
            };
            table.register(kind, kernel, CARTESIAN);
        }
        table.built()
    });
