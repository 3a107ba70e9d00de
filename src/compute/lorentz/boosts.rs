//! Lorentz boosts and 4D linear transforms: `boost_x`, `boost_y`,
//! `boost_z` (each in `beta` and `gamma` parameterizations),
//! `boost_beta3`, `boost_p4`, `transform4d`
//!
//! Boost matrices are only applied in Cartesian spatial coordinates.
//! The temporal kind of the boosted operand is preserved: a `t`-carrying
//! vector gets its boosted time, a `tau`-carrying vector keeps its
//! proper time unchanged (tau is boost-invariant). Per-axis `boost_z`
//! additionally leaves the azimuthal components untouched, whatever
//! their kind, since a longitudinal boost cannot change them.
//!
//! `boost_p4` computes the boost's energy and mass from the second
//! operand; a spacelike second operand yields NaN, which propagates
//! through every output component rather than raising.

use crate::{
    backend::MathLib,
    compute::{
        convert::{lorentz_to_cartesian, spatial_to_cartesian, to_t, to_z},
        LoBoostLorentzKernel, LoBoostSpatialKernel, LoMatrixVectorKernel, LoParamVectorKernel,
        LoProjection,
    },
    coords::{
        AzimuthalKind::Xy,
        LongitudinalKind::Z,
        LorentzKind, SpatialKind,
        TemporalKind::{Tau, T},
        LORENTZ_KINDS, SPATIAL_KINDS,
    },
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

use super::coords::tau2_native;

/// Boost factors `(gamma, beta * gamma)` from a velocity parameter
pub(crate) fn factors_from_beta(lib: &dyn MathLib, beta: Float) -> (Float, Float) {
    let gam = 1.0 / lib.sqrt(1.0 - beta.powi(2));
    (gam, beta * gam)
}

/// Boost factors `(|gamma|, beta * |gamma|)` from a signed gamma
/// parameter, whose sign selects the boost direction
pub(crate) fn factors_from_gamma(lib: &dyn MathLib, gamma: Float) -> (Float, Float) {
    let gam = lib.absolute(gamma);
    (gam, lib.copysign(lib.sqrt(gam.powi(2) - 1.0), gamma))
}

// ### transform4d cores (row-major matrix application) ###

#[allow(clippy::too_many_arguments)]
pub(crate) fn transform4d_xy_z_t(
    _lib: &dyn MathLib,
    xx: Float,
    xy: Float,
    xz: Float,
    xt: Float,
    yx: Float,
    yy: Float,
    yz: Float,
    yt: Float,
    zx: Float,
    zy: Float,
    zz: Float,
    zt: Float,
    tx: Float,
    ty: Float,
    tz: Float,
    tt: Float,
    x: Float,
    y: Float,
    z: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let xp = xx * x + xy * y + xz * z + xt * t;
    let yp = yx * x + yy * y + yz * z + yt * t;
    let zp = zx * x + zy * y + zz * z + zt * t;
    let tp = tx * x + ty * y + tz * z + tt * t;
    (xp, yp, zp, tp)
}

// ### boost matrix cores ###

/// Apply the pure boost of velocity `(betax, betay, betaz)`
#[allow(clippy::too_many_arguments)]
pub(crate) fn boost_beta3_xy_z_t_xy_z(
    lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    z1: Float,
    t1: Float,
    betax: Float,
    betay: Float,
    betaz: Float,
) -> (Float, Float, Float, Float) {
    let bp2 = betax.powi(2) + betay.powi(2) + betaz.powi(2);
    let gamma = 1.0 / lib.sqrt(1.0 - bp2);
    let bgam = gamma.powi(2) / (1.0 + gamma);
    let xx = 1.0 + bgam * betax * betax;
    let yy = 1.0 + bgam * betay * betay;
    let zz = 1.0 + bgam * betaz * betaz;
    let xy = bgam * betax * betay;
    let xz = bgam * betax * betaz;
    let yz = bgam * betay * betaz;
    let xt = gamma * betax;
    let yt = gamma * betay;
    let zt = gamma * betaz;
    transform4d_xy_z_t(
        lib, xx, xy, xz, xt, xy, yy, yz, yt, xz, yz, zz, zt, xt, yt, zt, gamma, x1, y1, z1, t1,
    )
}

/// Boost into the frame of a 4-momentum with the given energy and mass
#[allow(clippy::too_many_arguments)]
fn boost_p4_matrix(
    lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    z1: Float,
    t1: Float,
    energy: Float,
    mass: Float,
    mass2: Float,
    x2: Float,
    y2: Float,
    z2: Float,
) -> (Float, Float, Float, Float) {
    let gamma = energy / mass;
    let mass2_gamma_1 = mass2 * (gamma + 1.0);
    let gbetax = x2 / mass;
    let gbetay = y2 / mass;
    let gbetaz = z2 / mass;
    let xx = 1.0 + (x2 * x2) / mass2_gamma_1;
    let yy = 1.0 + (y2 * y2) / mass2_gamma_1;
    let zz = 1.0 + (z2 * z2) / mass2_gamma_1;
    let xy = (x2 * y2) / mass2_gamma_1;
    let xz = (x2 * z2) / mass2_gamma_1;
    let yz = (y2 * z2) / mass2_gamma_1;
    transform4d_xy_z_t(
        lib, xx, xy, xz, gbetax, xy, yy, yz, gbetay, xz, yz, zz, gbetaz, gbetax, gbetay, gbetaz,
        gamma, x1, y1, z1, t1,
    )
}

/// Kernel and result kind for a per-axis boost under one signature
///
/// `apply` is the Cartesian core: given the boost factors and
/// `(x, y, z, t)`, it returns the boosted components with the boosted
/// time in the last slot.
fn per_axis_kernel(
    kind: LorentzKind,
    factors: fn(&dyn MathLib, Float) -> (Float, Float),
    apply: fn(Float, Float, Float, Float, Float, Float) -> (Float, Float, Float, Float),
    longitudinal_only: bool,
) -> (LoParamVectorKernel, LorentzKind) {
    let t_of = to_t(kind);
    if longitudinal_only {
        // Azimuthal components pass through untouched
        let z_of = to_z((kind.0, kind.1));
        let result = (kind.0, Z, kind.2);
        let kernel: LoParamVectorKernel = match kind.2 {
            T => Box::new(move |lib: &dyn MathLib, param, c1, c2, c3, c4| {
                let (gam, bgam) = factors(lib, param);
                let (_, _, zp, tp) = apply(gam, bgam, c1, c2, z_of(lib, c1, c2, c3), c4);
                (c1, c2, zp, tp)
            }),
            Tau => Box::new(move |lib: &dyn MathLib, param, c1, c2, c3, c4| {
                let (gam, bgam) = factors(lib, param);
                let tee = t_of(lib, c1, c2, c3, c4);
                let (_, _, zp, _) = apply(gam, bgam, c1, c2, z_of(lib, c1, c2, c3), tee);
                (c1, c2, zp, c4)
            }),
        };
        (kernel, result)
    } else {
        let (x_of, y_of, z_of, _) = lorentz_to_cartesian(kind);
        let result = (Xy, Z, kind.2);
        let kernel: LoParamVectorKernel = match kind.2 {
            T => Box::new(move |lib: &dyn MathLib, param, c1, c2, c3, c4| {
                let (gam, bgam) = factors(lib, param);
                apply(
                    gam,
                    bgam,
                    x_of(lib, c1, c2),
                    y_of(lib, c1, c2),
                    z_of(lib, c1, c2, c3),
                    c4,
                )
            }),
            Tau => Box::new(move |lib: &dyn MathLib, param, c1, c2, c3, c4| {
                let (gam, bgam) = factors(lib, param);
                let tee = t_of(lib, c1, c2, c3, c4);
                let (xp, yp, zp, _) = apply(
                    gam,
                    bgam,
                    x_of(lib, c1, c2),
                    y_of(lib, c1, c2),
                    z_of(lib, c1, c2, c3),
                    tee,
                );
                (xp, yp, zp, c4)
            }),
        };
        (kernel, result)
    }
}

fn apply_x(gam: Float, bgam: Float, x: Float, y: Float, z: Float, t: Float) -> (Float, Float, Float, Float) {
    (gam * x + bgam * t, y, z, bgam * x + gam * t)
}

fn apply_y(gam: Float, bgam: Float, x: Float, y: Float, z: Float, t: Float) -> (Float, Float, Float, Float) {
    (x, gam * y + bgam * t, z, bgam * y + gam * t)
}

fn apply_z(gam: Float, bgam: Float, x: Float, y: Float, z: Float, t: Float) -> (Float, Float, Float, Float) {
    (x, y, gam * z + bgam * t, bgam * z + gam * t)
}

/// Kernel and result kind for `boost_beta3` under one signature
pub(crate) fn boost_beta3_kernel(
    k1: LorentzKind,
    k2: SpatialKind,
) -> (LoBoostSpatialKernel, LorentzKind) {
    let (x1, y1, z1, t1) = lorentz_to_cartesian(k1);
    let (bx, by, bz) = spatial_to_cartesian(k2);
    let result = (Xy, Z, k1.2);
    let kernel: LoBoostSpatialKernel = match k1.2 {
        T => Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3| {
            boost_beta3_xy_z_t_xy_z(
                lib,
                x1(lib, a1, a2),
                y1(lib, a1, a2),
                z1(lib, a1, a2, a3),
                a4,
                bx(lib, b1, b2),
                by(lib, b1, b2),
                bz(lib, b1, b2, b3),
            )
        }),
        Tau => Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3| {
            let (xp, yp, zp, _) = boost_beta3_xy_z_t_xy_z(
                lib,
                x1(lib, a1, a2),
                y1(lib, a1, a2),
                z1(lib, a1, a2, a3),
                t1(lib, a1, a2, a3, a4),
                bx(lib, b1, b2),
                by(lib, b1, b2),
                bz(lib, b1, b2, b3),
            );
            (xp, yp, zp, a4)
        }),
    };
    (kernel, result)
}

/// Kernel and result kind for `boost_p4` under one signature
pub(crate) fn boost_p4_kernel(
    k1: LorentzKind,
    k2: LorentzKind,
) -> (LoBoostLorentzKernel, LorentzKind) {
    let (x1, y1, z1, t1) = lorentz_to_cartesian(k1);
    let (x2, y2, z2, energy_of) = lorentz_to_cartesian(k2);
    // For a t-carrying boost vector the mass comes out of the
    // sign-preserving mass-squared, so a spacelike boost is NaN; a
    // tau-carrying boost vector uses its proper time as the mass.
    let mass2_of: LoProjection = tau2_native(k2);
    let tau_second = k2.2 == Tau;
    let result = (Xy, Z, k1.2);
    let boosted = move |lib: &dyn MathLib,
                        a1: Float,
                        a2: Float,
                        a3: Float,
                        t1v: Float,
                        b1: Float,
                        b2: Float,
                        b3: Float,
                        b4: Float| {
        let energy = energy_of(lib, b1, b2, b3, b4);
        let mass2 = mass2_of(lib, b1, b2, b3, b4);
        let mass = if tau_second { b4 } else { lib.sqrt(mass2) };
        boost_p4_matrix(
            lib,
            x1(lib, a1, a2),
            y1(lib, a1, a2),
            z1(lib, a1, a2, a3),
            t1v,
            energy,
            mass,
            mass2,
            x2(lib, b1, b2),
            y2(lib, b1, b2),
            z2(lib, b1, b2, b3),
        )
    };
    let kernel: LoBoostLorentzKernel = match k1.2 {
        T => Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
            boosted(lib, a1, a2, a3, a4, b1, b2, b3, b4)
        }),
        Tau => Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
            let (xp, yp, zp, _) = boosted(lib, a1, a2, a3, t1(lib, a1, a2, a3, a4), b1, b2, b3, b4);
            (xp, yp, zp, a4)
        }),
    };
    (kernel, result)
}

type PerAxisTable = DispatchTable<LorentzKind, LoParamVectorKernel, LorentzKind>;

fn per_axis_table(
    operation: &'static str,
    factors: fn(&dyn MathLib, Float) -> (Float, Float),
    apply: fn(Float, Float, Float, Float, Float, Float) -> (Float, Float, Float, Float),
    longitudinal_only: bool,
) -> PerAxisTable {
    let mut table = DispatchTable::new(operation);
    for kind in LORENTZ_KINDS {
        let (kernel, returns) = per_axis_kernel(kind, factors, apply, longitudinal_only);
        table.register(kind, kernel, returns);
    }
    table.built()
}

pub(crate) static BOOST_X_BETA: Lazy<PerAxisTable> =
    Lazy::new(|| per_axis_table("lorentz.boost_x_beta", factors_from_beta, apply_x, false));

pub(crate) static BOOST_X_GAMMA: Lazy<PerAxisTable> =
    Lazy::new(|| per_axis_table("lorentz.boost_x_gamma", factors_from_gamma, apply_x, false));

pub(crate) static BOOST_Y_BETA: Lazy<PerAxisTable> =
    Lazy::new(|| per_axis_table("lorentz.boost_y_beta", factors_from_beta, apply_y, false));

pub(crate) static BOOST_Y_GAMMA: Lazy<PerAxisTable> =
    Lazy::new(|| per_axis_table("lorentz.boost_y_gamma", factors_from_gamma, apply_y, false));

pub(crate) static BOOST_Z_BETA: Lazy<PerAxisTable> =
    Lazy::new(|| per_axis_table("lorentz.boost_z_beta", factors_from_beta, apply_z, true));

pub(crate) static BOOST_Z_GAMMA: Lazy<PerAxisTable> =
    Lazy::new(|| per_axis_table("lorentz.boost_z_gamma", factors_from_gamma, apply_z, true));

pub(crate) static BOOST_BETA3: Lazy<
    DispatchTable<(LorentzKind, SpatialKind), LoBoostSpatialKernel, LorentzKind>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("lorentz.boost_beta3");
    for k1 in LORENTZ_KINDS {
        for k2 in SPATIAL_KINDS {
            let (kernel, returns) = boost_beta3_kernel(k1, k2);
            table.register((k1, k2), kernel, returns);
        }
    }
    table.built()
});

pub(crate) static BOOST_P4: Lazy<
    DispatchTable<(LorentzKind, LorentzKind), LoBoostLorentzKernel, LorentzKind>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("lorentz.boost_p4");
    for k1 in LORENTZ_KINDS {
        for k2 in LORENTZ_KINDS {
            let (kernel, returns) = boost_p4_kernel(k1, k2);
            table.register((k1, k2), kernel, returns);
        }
    }
    table.built()
});

pub(crate) static TRANSFORM4D: Lazy<DispatchTable<LorentzKind, LoMatrixVectorKernel, LorentzKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("lorentz.transform4d");
        for kind in LORENTZ_KINDS {
            let kernel: LoMatrixVectorKernel = if kind == (Xy, Z, T) {
                Box::new(transform4d_xy_z_t)
            } else {
                let (x, y, z, t) = lorentz_to_cartesian(kind);
                Box::new(
                    move |lib: &dyn MathLib,
                          xx,
                          xy,
                          xz,
                          xt,
                          yx,
                          yy,
                          yz,
                          yt,
                          zx,
                          zy,
                          zz,
                          zt,
                          tx,
                          ty,
                          tz,
                          tt,
                          c1,
                          c2,
                          c3,
                          c4| {
                        transform4d_xy_z_t(
                            lib,
                            xx,
                            xy,
                            xz,
                            xt,
                            yx,
                            yy,
                            yz,
                            yt,
                            zx,
                            zy,
                            zz,
                            zt,
                            tx,
                            ty,
                            tz,
                            tt,
                            x(lib, c1, c2),
                            y(lib, c1, c2),
                            z(lib, c1, c2, c3),
                            t(lib, c1, c2, c3, c4),
                        )
                    },
                )
            };
            table.register(kind, kernel, (Xy, Z, T));
        }
        table.built()
    });
