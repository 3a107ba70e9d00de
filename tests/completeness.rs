//! Every operation must resolve for every coordinate-kind combination of
//! its declared cross product. These tests drive the public API over the
//! full enumeration, so a missing table entry shows up as a hard failure
//! naming the operation and signature.

use momenta::{EulerOrder, Lorentz, Planar, Spatial, LORENTZ_KINDS, SPATIAL_KINDS};

use nalgebra::{Matrix2, Matrix3, Matrix4};

fn planar_fixtures() -> Vec<Planar> {
    let base = Planar::xy(3.0, 4.0);
    vec![base, base.to_kind(momenta::AzimuthalKind::RhoPhi).unwrap()]
}

fn spatial_fixtures() -> Vec<Spatial> {
    let base = Spatial::xyz(3.0, 4.0, 10.0);
    SPATIAL_KINDS
        .iter()
        .map(|&kind| base.to_kind(kind).unwrap())
        .collect()
}

fn lorentz_fixtures() -> Vec<Lorentz> {
    let base = Lorentz::xyzt(3.0, 4.0, 10.0, 20.0);
    LORENTZ_KINDS
        .iter()
        .map(|&kind| base.to_kind(kind).unwrap())
        .collect()
}

#[test]
fn planar_operations_cover_all_signatures() {
    let vectors = planar_fixtures();
    for v in &vectors {
        v.x().unwrap();
        v.y().unwrap();
        v.rho().unwrap();
        v.rho2().unwrap();
        v.phi().unwrap();
        v.rotate_z(0.3).unwrap();
        v.scale(2.0).unwrap();
        v.unit().unwrap();
        v.transform2d(&Matrix2::identity()).unwrap();
        for w in &vectors {
            v.add(w).unwrap();
            v.subtract(w).unwrap();
            v.dot(w).unwrap();
            v.deltaphi(w).unwrap();
            v.cosdeltaphi(w).unwrap();
            v.equal(w).unwrap();
            v.not_equal(w).unwrap();
            v.isclose(w, 1e-9, 0.0, false).unwrap();
            v.is_parallel(w, 1e-5).unwrap();
            v.is_antiparallel(w, 1e-5).unwrap();
            v.is_perpendicular(w, 1e-5).unwrap();
        }
    }
}

#[test]
fn spatial_operations_cover_all_signatures() {
    let vectors = spatial_fixtures();
    assert_eq!(vectors.len(), 6);
    for v in &vectors {
        v.x().unwrap();
        v.y().unwrap();
        v.rho().unwrap();
        v.rho2().unwrap();
        v.phi().unwrap();
        v.z().unwrap();
        v.theta().unwrap();
        v.eta().unwrap();
        v.costheta().unwrap();
        v.cottheta().unwrap();
        v.mag().unwrap();
        v.mag2().unwrap();
        v.rotate_x(0.2).unwrap();
        v.rotate_y(0.2).unwrap();
        v.rotate_z(0.2).unwrap();
        v.rotate_quaternion(1.0, 0.0, 0.0, 0.0).unwrap();
        v.rotate_nautical(0.1, 0.2, 0.3).unwrap();
        v.scale(-1.5).unwrap();
        v.unit().unwrap();
        v.transform3d(&Matrix3::identity()).unwrap();
        for order in EulerOrder::ALL {
            v.rotate_euler(0.1, 0.2, 0.3, order).unwrap();
        }
        for w in &vectors {
            v.add(w).unwrap();
            v.subtract(w).unwrap();
            v.dot(w).unwrap();
            v.cross(w).unwrap();
            v.deltaangle(w).unwrap();
            v.deltaeta(w).unwrap();
            v.deltaphi(w).unwrap();
            v.delta_r(w).unwrap();
            v.delta_r2(w).unwrap();
            v.equal(w).unwrap();
            v.not_equal(w).unwrap();
            v.isclose(w, 1e-9, 0.0, false).unwrap();
            v.is_parallel(w, 1e-5).unwrap();
            v.is_antiparallel(w, 1e-5).unwrap();
            v.is_perpendicular(w, 1e-5).unwrap();
            v.rotate_axis(w, 0.4).unwrap();
        }
    }
}

#[test]
fn lorentz_operations_cover_all_signatures() {
    let vectors = lorentz_fixtures();
    assert_eq!(vectors.len(), 12);
    for v in &vectors {
        v.x().unwrap();
        v.y().unwrap();
        v.rho().unwrap();
        v.rho2().unwrap();
        v.phi().unwrap();
        v.z().unwrap();
        v.theta().unwrap();
        v.eta().unwrap();
        v.costheta().unwrap();
        v.cottheta().unwrap();
        v.mag().unwrap();
        v.mag2().unwrap();
        v.t().unwrap();
        v.t2().unwrap();
        v.tau().unwrap();
        v.tau2().unwrap();
        v.beta().unwrap();
        v.gamma().unwrap();
        v.rapidity().unwrap();
        v.et().unwrap();
        v.et2().unwrap();
        v.mt().unwrap();
        v.mt2().unwrap();
        v.is_timelike(0.0).unwrap();
        v.is_spacelike(0.0).unwrap();
        v.is_lightlike(1e-5).unwrap();
        v.boost_x_beta(0.3).unwrap();
        v.boost_x_gamma(1.5).unwrap();
        v.boost_y_beta(0.3).unwrap();
        v.boost_y_gamma(1.5).unwrap();
        v.boost_z_beta(0.3).unwrap();
        v.boost_z_gamma(1.5).unwrap();
        v.to_beta3().unwrap();
        v.rotate_x(0.2).unwrap();
        v.rotate_y(0.2).unwrap();
        v.rotate_z(0.2).unwrap();
        v.scale(0.5).unwrap();
        v.unit().unwrap();
        v.transform4d(&Matrix4::identity()).unwrap();
        for w in &vectors {
            v.add(w).unwrap();
            v.subtract(w).unwrap();
            v.dot(w).unwrap();
            v.deltaphi(w).unwrap();
            v.delta_rapidity_phi(w).unwrap();
            v.delta_rapidity_phi2(w).unwrap();
            v.equal(w).unwrap();
            v.not_equal(w).unwrap();
            v.isclose(w, 1e-9, 0.0, false).unwrap();
            v.boost_p4(w).unwrap();
        }
    }
}

#[test]
fn lorentz_boost_beta3_covers_all_signature_pairs() {
    let vectors = lorentz_fixtures();
    let betas: Vec<Spatial> = SPATIAL_KINDS
        .iter()
        .map(|&kind| Spatial::xyz(0.1, 0.2, 0.3).to_kind(kind).unwrap())
        .collect();
    for v in &vectors {
        for beta in &betas {
            v.boost_beta3(beta).unwrap();
        }
    }
}

#[test]
fn conversions_cover_all_target_kinds() {
    for v in lorentz_fixtures() {
        for target in LORENTZ_KINDS {
            let converted = v.to_kind(target).unwrap();
            assert_eq!(converted.kind(), target);
        }
    }
    for v in spatial_fixtures() {
        for target in SPATIAL_KINDS {
            assert_eq!(v.to_kind(target).unwrap().kind(), target);
        }
    }
}
