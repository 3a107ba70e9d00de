//! Vector value types and the caller-facing operation surface
//!
//! A vector is its coordinate storage plus a handle to the numeric
//! backend its components live on. Every operation method follows the
//! same shape: read the operands' coordinate kinds, resolve the
//! operation's dispatch table, pass the raw elements to the kernel
//! positionally (azimuthal, then longitudinal, then temporal; operand 1
//! before operand 2), and re-wrap vector results using the result kinds
//! declared by the table entry.
//!
//! Binary operations verify that both operands share a backend before
//! dispatching; mixing backends is an error, never a coercion.

use crate::{
    backend::{check_same_backend, MathLib, STD},
    compute::{lorentz, planar, spatial},
    coords::{
        Azimuthal, AzimuthalKind, EulerOrder, Longitudinal, LongitudinalKind, LorentzKind,
        SpatialKind, Temporal, TemporalKind,
    },
    numeric::Float,
    Result,
};

use nalgebra::{Matrix2, Matrix3, Matrix4};

use std::fmt;

/// 2D vector: azimuthal components only
#[derive(Clone, Copy)]
pub struct Planar {
    /// Azimuthal coordinates
    azimuthal: Azimuthal,

    /// Numeric backend the components live on
    lib: &'static dyn MathLib,
}
//
impl Planar {
    /// Build a vector on the standard backend
    pub fn new(azimuthal: Azimuthal) -> Self {
        Self::with_lib(azimuthal, &STD)
    }

    /// Build a vector on an explicit backend
    pub fn with_lib(azimuthal: Azimuthal, lib: &'static dyn MathLib) -> Self {
        Self { azimuthal, lib }
    }

    /// Cartesian constructor
    pub fn xy(x: Float, y: Float) -> Self {
        Self::new(Azimuthal::Xy { x, y })
    }

    /// Polar constructor
    pub fn rhophi(rho: Float, phi: Float) -> Self {
        Self::new(Azimuthal::RhoPhi { rho, phi })
    }

    /// Azimuthal coordinate storage
    pub fn azimuthal(&self) -> Azimuthal {
        self.azimuthal
    }

    /// Coordinate kind, the dispatch key of this vector
    pub fn kind(&self) -> AzimuthalKind {
        self.azimuthal.kind()
    }

    /// Backend handle
    pub fn lib(&self) -> &'static dyn MathLib {
        self.lib
    }

    fn wrap(&self, kind: AzimuthalKind, components: (Float, Float)) -> Self {
        Self {
            azimuthal: Azimuthal::from_elements(kind, [components.0, components.1]),
            lib: self.lib,
        }
    }

    /// Cartesian x component
    pub fn x(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::X.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Cartesian y component
    pub fn y(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::Y.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Transverse magnitude
    pub fn rho(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::RHO.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Squared transverse magnitude
    pub fn rho2(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::RHO2.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Azimuthal angle
    pub fn phi(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::PHI.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Componentwise sum
    pub fn add(&self, other: &Planar) -> Result<Planar> {
        check_same_backend("planar.add", self.lib, other.lib)?;
        let (kernel, returns) = planar::arithmetic::ADD.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, b1, b2)))
    }

    /// Componentwise difference
    pub fn subtract(&self, other: &Planar) -> Result<Planar> {
        check_same_backend("planar.subtract", self.lib, other.lib)?;
        let (kernel, returns) = planar::arithmetic::SUBTRACT.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, b1, b2)))
    }

    /// Euclidean dot product
    pub fn dot(&self, other: &Planar) -> Result<Float> {
        check_same_backend("planar.dot", self.lib, other.lib)?;
        let (kernel, ()) = planar::arithmetic::DOT.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Signed azimuthal separation, wrapped into (-pi, pi]
    pub fn deltaphi(&self, other: &Planar) -> Result<Float> {
        check_same_backend("planar.deltaphi", self.lib, other.lib)?;
        let (kernel, ()) = planar::angles::DELTAPHI.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Cosine of the azimuthal separation
    pub fn cosdeltaphi(&self, other: &Planar) -> Result<Float> {
        check_same_backend("planar.cosdeltaphi", self.lib, other.lib)?;
        let (kernel, ()) = planar::angles::COSDELTAPHI.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Exact componentwise equality (after conversion for mixed kinds)
    pub fn equal(&self, other: &Planar) -> Result<bool> {
        check_same_backend("planar.equal", self.lib, other.lib)?;
        let (kernel, ()) = planar::predicates::EQUAL.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Negation of [`Planar::equal`]
    pub fn not_equal(&self, other: &Planar) -> Result<bool> {
        check_same_backend("planar.not_equal", self.lib, other.lib)?;
        let (kernel, ()) = planar::predicates::NOT_EQUAL.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Componentwise approximate equality
    pub fn isclose(&self, other: &Planar, rtol: Float, atol: Float, equal_nan: bool) -> Result<bool> {
        check_same_backend("planar.isclose", self.lib, other.lib)?;
        let (kernel, ()) = planar::predicates::ISCLOSE.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, rtol, atol, equal_nan, a1, a2, b1, b2))
    }

    /// Whether the two directions agree within `tolerance`
    pub fn is_parallel(&self, other: &Planar, tolerance: Float) -> Result<bool> {
        check_same_backend("planar.is_parallel", self.lib, other.lib)?;
        let (kernel, ()) = planar::predicates::IS_PARALLEL.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, tolerance, a1, a2, b1, b2))
    }

    /// Whether the two directions oppose within `tolerance`
    pub fn is_antiparallel(&self, other: &Planar, tolerance: Float) -> Result<bool> {
        check_same_backend("planar.is_antiparallel", self.lib, other.lib)?;
        let (kernel, ()) =
            planar::predicates::IS_ANTIPARALLEL.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, tolerance, a1, a2, b1, b2))
    }

    /// Whether the two directions are orthogonal within `tolerance`
    pub fn is_perpendicular(&self, other: &Planar, tolerance: Float) -> Result<bool> {
        check_same_backend("planar.is_perpendicular", self.lib, other.lib)?;
        let (kernel, ()) =
            planar::predicates::IS_PERPENDICULAR.resolve((self.kind(), other.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, tolerance, a1, a2, b1, b2))
    }

    /// Rotation around the z axis (counterclockwise in the plane)
    pub fn rotate_z(&self, angle: Float) -> Result<Planar> {
        let (kernel, returns) = planar::angles::ROTATE_Z.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(self.wrap(returns, kernel(self.lib, angle, e1, e2)))
    }

    /// Multiplication by a scalar factor
    pub fn scale(&self, factor: Float) -> Result<Planar> {
        let (kernel, returns) = planar::arithmetic::SCALE.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(self.wrap(returns, kernel(self.lib, factor, e1, e2)))
    }

    /// The unit vector of the same direction
    pub fn unit(&self) -> Result<Planar> {
        let (kernel, returns) = planar::arithmetic::UNIT.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(self.wrap(returns, kernel(self.lib, e1, e2)))
    }

    /// Arbitrary linear transform of the plane
    pub fn transform2d(&self, matrix: &Matrix2<Float>) -> Result<Planar> {
        let (kernel, returns) = planar::angles::TRANSFORM2D.resolve(self.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(self.wrap(
            returns,
            kernel(
                self.lib,
                matrix[(0, 0)],
                matrix[(0, 1)],
                matrix[(1, 0)],
                matrix[(1, 1)],
                e1,
                e2,
            ),
        ))
    }

    /// Re-express this vector in another coordinate kind
    pub fn to_kind(&self, kind: AzimuthalKind) -> Result<Planar> {
        let elements = match kind {
            AzimuthalKind::Xy => [self.x()?, self.y()?],
            AzimuthalKind::RhoPhi => [self.rho()?, self.phi()?],
        };
        Ok(Self {
            azimuthal: Azimuthal::from_elements(kind, elements),
            lib: self.lib,
        })
    }
}

impl fmt::Debug for Planar {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Planar")
            .field("azimuthal", &self.azimuthal)
            .field("lib", &self.lib.name())
            .finish()
    }
}

impl PartialEq for Planar {
    fn eq(&self, other: &Self) -> bool {
        self.azimuthal == other.azimuthal && self.lib.name() == other.lib.name()
    }
}

/// 3D vector: azimuthal + longitudinal components
#[derive(Clone, Copy)]
pub struct Spatial {
    /// Azimuthal coordinates
    azimuthal: Azimuthal,

    /// Longitudinal coordinate
    longitudinal: Longitudinal,

    /// Numeric backend the components live on
    lib: &'static dyn MathLib,
}
//
impl Spatial {
    /// Build a vector on the standard backend
    pub fn new(azimuthal: Azimuthal, longitudinal: Longitudinal) -> Self {
        Self::with_lib(azimuthal, longitudinal, &STD)
    }

    /// Build a vector on an explicit backend
    pub fn with_lib(
        azimuthal: Azimuthal,
        longitudinal: Longitudinal,
        lib: &'static dyn MathLib,
    ) -> Self {
        Self {
            azimuthal,
            longitudinal,
            lib,
        }
    }

    /// Cartesian constructor
    pub fn xyz(x: Float, y: Float, z: Float) -> Self {
        Self::new(Azimuthal::Xy { x, y }, Longitudinal::Z(z))
    }

    /// Cartesian transverse, polar-angle longitudinal constructor
    pub fn xy_theta(x: Float, y: Float, theta: Float) -> Self {
        Self::new(Azimuthal::Xy { x, y }, Longitudinal::Theta(theta))
    }

    /// Cartesian transverse, pseudorapidity longitudinal constructor
    pub fn xy_eta(x: Float, y: Float, eta: Float) -> Self {
        Self::new(Azimuthal::Xy { x, y }, Longitudinal::Eta(eta))
    }

    /// Cylindrical constructor
    pub fn rhophi_z(rho: Float, phi: Float, z: Float) -> Self {
        Self::new(Azimuthal::RhoPhi { rho, phi }, Longitudinal::Z(z))
    }

    /// Spherical constructor
    pub fn rhophi_theta(rho: Float, phi: Float, theta: Float) -> Self {
        Self::new(Azimuthal::RhoPhi { rho, phi }, Longitudinal::Theta(theta))
    }

    /// Polar transverse, pseudorapidity longitudinal constructor
    pub fn rhophi_eta(rho: Float, phi: Float, eta: Float) -> Self {
        Self::new(Azimuthal::RhoPhi { rho, phi }, Longitudinal::Eta(eta))
    }

    /// Azimuthal coordinate storage
    pub fn azimuthal(&self) -> Azimuthal {
        self.azimuthal
    }

    /// Longitudinal coordinate storage
    pub fn longitudinal(&self) -> Longitudinal {
        self.longitudinal
    }

    /// Coordinate kinds, the dispatch key of this vector
    pub fn kind(&self) -> SpatialKind {
        (self.azimuthal.kind(), self.longitudinal.kind())
    }

    /// Backend handle
    pub fn lib(&self) -> &'static dyn MathLib {
        self.lib
    }

    fn elements(&self) -> [Float; 3] {
        let [e1, e2] = self.azimuthal.elements();
        [e1, e2, self.longitudinal.element()]
    }

    fn wrap(&self, kind: SpatialKind, components: (Float, Float, Float)) -> Self {
        Self {
            azimuthal: Azimuthal::from_elements(kind.0, [components.0, components.1]),
            longitudinal: Longitudinal::from_element(kind.1, components.2),
            lib: self.lib,
        }
    }

    /// Cartesian x component
    pub fn x(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::X.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Cartesian y component
    pub fn y(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::Y.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Transverse magnitude
    pub fn rho(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::RHO.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Squared transverse magnitude
    pub fn rho2(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::RHO2.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Azimuthal angle
    pub fn phi(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::PHI.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Cartesian z component
    pub fn z(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::Z.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Polar angle from the +z axis
    pub fn theta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::THETA.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Pseudorapidity
    pub fn eta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::ETA.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Cosine of the polar angle
    pub fn costheta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::COSTHETA.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Cotangent of the polar angle
    pub fn cottheta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::COTTHETA.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Euclidean magnitude
    pub fn mag(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::MAG.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Squared Euclidean magnitude
    pub fn mag2(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::MAG2.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Componentwise sum
    pub fn add(&self, other: &Spatial) -> Result<Spatial> {
        check_same_backend("spatial.add", self.lib, other.lib)?;
        let (kernel, returns) = spatial::arithmetic::ADD.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, b1, b2, b3)))
    }

    /// Componentwise difference
    pub fn subtract(&self, other: &Spatial) -> Result<Spatial> {
        check_same_backend("spatial.subtract", self.lib, other.lib)?;
        let (kernel, returns) =
            spatial::arithmetic::SUBTRACT.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, b1, b2, b3)))
    }

    /// Euclidean dot product
    pub fn dot(&self, other: &Spatial) -> Result<Float> {
        check_same_backend("spatial.dot", self.lib, other.lib)?;
        let (kernel, ()) = spatial::arithmetic::DOT.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Cross product (always a Cartesian result)
    pub fn cross(&self, other: &Spatial) -> Result<Spatial> {
        check_same_backend("spatial.cross", self.lib, other.lib)?;
        let (kernel, returns) = spatial::arithmetic::CROSS.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, b1, b2, b3)))
    }

    /// Opening angle between the two directions
    pub fn deltaangle(&self, other: &Spatial) -> Result<Float> {
        check_same_backend("spatial.deltaangle", self.lib, other.lib)?;
        let (kernel, ()) = spatial::angles::DELTAANGLE.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Pseudorapidity difference
    pub fn deltaeta(&self, other: &Spatial) -> Result<Float> {
        check_same_backend("spatial.deltaeta", self.lib, other.lib)?;
        let (kernel, ()) = spatial::angles::DELTAETA.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Signed azimuthal separation, wrapped into (-pi, pi]
    pub fn deltaphi(&self, other: &Spatial) -> Result<Float> {
        check_same_backend("planar.deltaphi", self.lib, other.lib)?;
        let (kernel, ()) = planar::angles::DELTAPHI
            .resolve((self.azimuthal.kind(), other.azimuthal.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Angular distance in the (eta, phi) plane
    pub fn delta_r(&self, other: &Spatial) -> Result<Float> {
        check_same_backend("spatial.delta_r", self.lib, other.lib)?;
        let (kernel, ()) = spatial::angles::DELTA_R.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Squared angular distance in the (eta, phi) plane
    pub fn delta_r2(&self, other: &Spatial) -> Result<Float> {
        check_same_backend("spatial.delta_r2", self.lib, other.lib)?;
        let (kernel, ()) = spatial::angles::DELTA_R2.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Exact componentwise equality (after conversion for mixed kinds)
    pub fn equal(&self, other: &Spatial) -> Result<bool> {
        check_same_backend("spatial.equal", self.lib, other.lib)?;
        let (kernel, ()) = spatial::predicates::EQUAL.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Negation of [`Spatial::equal`]
    pub fn not_equal(&self, other: &Spatial) -> Result<bool> {
        check_same_backend("spatial.not_equal", self.lib, other.lib)?;
        let (kernel, ()) = spatial::predicates::NOT_EQUAL.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, b1, b2, b3))
    }

    /// Componentwise approximate equality
    pub fn isclose(
        &self,
        other: &Spatial,
        rtol: Float,
        atol: Float,
        equal_nan: bool,
    ) -> Result<bool> {
        check_same_backend("spatial.isclose", self.lib, other.lib)?;
        let (kernel, ()) = spatial::predicates::ISCLOSE.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, rtol, atol, equal_nan, a1, a2, a3, b1, b2, b3))
    }

    /// Whether the two directions agree within `tolerance`
    pub fn is_parallel(&self, other: &Spatial, tolerance: Float) -> Result<bool> {
        check_same_backend("spatial.is_parallel", self.lib, other.lib)?;
        let (kernel, ()) = spatial::predicates::IS_PARALLEL.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, tolerance, a1, a2, a3, b1, b2, b3))
    }

    /// Whether the two directions oppose within `tolerance`
    pub fn is_antiparallel(&self, other: &Spatial, tolerance: Float) -> Result<bool> {
        check_same_backend("spatial.is_antiparallel", self.lib, other.lib)?;
        let (kernel, ()) =
            spatial::predicates::IS_ANTIPARALLEL.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, tolerance, a1, a2, a3, b1, b2, b3))
    }

    /// Whether the two directions are orthogonal within `tolerance`
    pub fn is_perpendicular(&self, other: &Spatial, tolerance: Float) -> Result<bool> {
        check_same_backend("spatial.is_perpendicular", self.lib, other.lib)?;
        let (kernel, ()) =
            spatial::predicates::IS_PERPENDICULAR.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3] = self.elements();
        let [b1, b2, b3] = other.elements();
        Ok(kernel(self.lib, tolerance, a1, a2, a3, b1, b2, b3))
    }

    /// Rotation around the x axis
    pub fn rotate_x(&self, angle: Float) -> Result<Spatial> {
        let (kernel, returns) = spatial::rotations::ROTATE_X.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, angle, e1, e2, e3)))
    }

    /// Rotation around the y axis
    pub fn rotate_y(&self, angle: Float) -> Result<Spatial> {
        let (kernel, returns) = spatial::rotations::ROTATE_Y.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, angle, e1, e2, e3)))
    }

    /// Rotation around the z axis; the longitudinal axis is untouched
    pub fn rotate_z(&self, angle: Float) -> Result<Spatial> {
        let (kernel, returns) = planar::angles::ROTATE_Z.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        let (c1, c2) = kernel(self.lib, angle, e1, e2);
        Ok(Self {
            azimuthal: Azimuthal::from_elements(returns, [c1, c2]),
            longitudinal: self.longitudinal,
            lib: self.lib,
        })
    }

    /// Rotation around an arbitrary axis (need not be normalized)
    pub fn rotate_axis(&self, axis: &Spatial, angle: Float) -> Result<Spatial> {
        check_same_backend("spatial.rotate_axis", self.lib, axis.lib)?;
        let (kernel, returns) =
            spatial::rotations::ROTATE_AXIS.resolve((axis.kind(), self.kind()))?;
        let [a1, a2, a3] = axis.elements();
        let [b1, b2, b3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, angle, a1, a2, a3, b1, b2, b3)))
    }

    /// Euler rotation by (phi, theta, psi) in the given axis convention
    pub fn rotate_euler(
        &self,
        phi: Float,
        theta: Float,
        psi: Float,
        order: EulerOrder,
    ) -> Result<Spatial> {
        let (kernel, returns) = spatial::rotations::ROTATE_EULER.resolve((order, self.kind()))?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, phi, theta, psi, e1, e2, e3)))
    }

    /// Tait-Bryan rotation by yaw, pitch and roll
    pub fn rotate_nautical(&self, yaw: Float, pitch: Float, roll: Float) -> Result<Spatial> {
        // Argument order reversed: rotate_euler follows the
        // (phi, theta, psi) convention.
        self.rotate_euler(roll, pitch, yaw, EulerOrder::Zyx)
    }

    /// Rotation by a quaternion's components (ROOT's conventions)
    pub fn rotate_quaternion(&self, u: Float, i: Float, j: Float, k: Float) -> Result<Spatial> {
        let (kernel, returns) = spatial::rotations::ROTATE_QUATERNION.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, u, i, j, k, e1, e2, e3)))
    }

    /// Multiplication by a scalar factor
    pub fn scale(&self, factor: Float) -> Result<Spatial> {
        let (kernel, returns) = spatial::arithmetic::SCALE.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, factor, e1, e2, e3)))
    }

    /// The unit vector of the same direction
    pub fn unit(&self) -> Result<Spatial> {
        let (kernel, returns) = spatial::arithmetic::UNIT.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, e1, e2, e3)))
    }

    /// Arbitrary linear transform of space
    pub fn transform3d(&self, matrix: &Matrix3<Float>) -> Result<Spatial> {
        let (kernel, returns) = spatial::rotations::TRANSFORM3D.resolve(self.kind())?;
        let [e1, e2, e3] = self.elements();
        Ok(self.wrap(
            returns,
            kernel(
                self.lib,
                matrix[(0, 0)],
                matrix[(0, 1)],
                matrix[(0, 2)],
                matrix[(1, 0)],
                matrix[(1, 1)],
                matrix[(1, 2)],
                matrix[(2, 0)],
                matrix[(2, 1)],
                matrix[(2, 2)],
                e1,
                e2,
                e3,
            ),
        ))
    }

    /// Re-express this vector in another coordinate kind combination
    pub fn to_kind(&self, kind: SpatialKind) -> Result<Spatial> {
        let azimuthal = match kind.0 {
            AzimuthalKind::Xy => Azimuthal::Xy {
                x: self.x()?,
                y: self.y()?,
            },
            AzimuthalKind::RhoPhi => Azimuthal::RhoPhi {
                rho: self.rho()?,
                phi: self.phi()?,
            },
        };
        let longitudinal = match kind.1 {
            LongitudinalKind::Z => Longitudinal::Z(self.z()?),
            LongitudinalKind::Theta => Longitudinal::Theta(self.theta()?),
            LongitudinalKind::Eta => Longitudinal::Eta(self.eta()?),
        };
        Ok(Self {
            azimuthal,
            longitudinal,
            lib: self.lib,
        })
    }
}

impl fmt::Debug for Spatial {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Spatial")
            .field("azimuthal", &self.azimuthal)
            .field("longitudinal", &self.longitudinal)
            .field("lib", &self.lib.name())
            .finish()
    }
}

impl PartialEq for Spatial {
    fn eq(&self, other: &Self) -> bool {
        self.azimuthal == other.azimuthal
            && self.longitudinal == other.longitudinal
            && self.lib.name() == other.lib.name()
    }
}

/// 4D Lorentz vector: azimuthal + longitudinal + temporal components
#[derive(Clone, Copy)]
pub struct Lorentz {
    /// Azimuthal coordinates
    azimuthal: Azimuthal,

    /// Longitudinal coordinate
    longitudinal: Longitudinal,

    /// Temporal coordinate
    temporal: Temporal,

    /// Numeric backend the components live on
    lib: &'static dyn MathLib,
}
//
impl Lorentz {
    /// Build a vector on the standard backend
    pub fn new(azimuthal: Azimuthal, longitudinal: Longitudinal, temporal: Temporal) -> Self {
        Self::with_lib(azimuthal, longitudinal, temporal, &STD)
    }

    /// Build a vector on an explicit backend
    pub fn with_lib(
        azimuthal: Azimuthal,
        longitudinal: Longitudinal,
        temporal: Temporal,
        lib: &'static dyn MathLib,
    ) -> Self {
        Self {
            azimuthal,
            longitudinal,
            temporal,
            lib,
        }
    }

    /// Cartesian constructor with coordinate time
    pub fn xyzt(x: Float, y: Float, z: Float, t: Float) -> Self {
        Self::new(Azimuthal::Xy { x, y }, Longitudinal::Z(z), Temporal::T(t))
    }

    /// Cartesian constructor with proper time
    pub fn xyz_tau(x: Float, y: Float, z: Float, tau: Float) -> Self {
        Self::new(Azimuthal::Xy { x, y }, Longitudinal::Z(z), Temporal::Tau(tau))
    }

    /// Collider-style constructor with coordinate time
    pub fn rhophi_eta_t(rho: Float, phi: Float, eta: Float, t: Float) -> Self {
        Self::new(
            Azimuthal::RhoPhi { rho, phi },
            Longitudinal::Eta(eta),
            Temporal::T(t),
        )
    }

    /// Collider-style constructor with proper time
    pub fn rhophi_eta_tau(rho: Float, phi: Float, eta: Float, tau: Float) -> Self {
        Self::new(
            Azimuthal::RhoPhi { rho, phi },
            Longitudinal::Eta(eta),
            Temporal::Tau(tau),
        )
    }

    /// Azimuthal coordinate storage
    pub fn azimuthal(&self) -> Azimuthal {
        self.azimuthal
    }

    /// Longitudinal coordinate storage
    pub fn longitudinal(&self) -> Longitudinal {
        self.longitudinal
    }

    /// Temporal coordinate storage
    pub fn temporal(&self) -> Temporal {
        self.temporal
    }

    /// Coordinate kinds, the dispatch key of this vector
    pub fn kind(&self) -> LorentzKind {
        (
            self.azimuthal.kind(),
            self.longitudinal.kind(),
            self.temporal.kind(),
        )
    }

    /// The spatial part of the dispatch key
    pub fn spatial_kind(&self) -> SpatialKind {
        (self.azimuthal.kind(), self.longitudinal.kind())
    }

    /// Backend handle
    pub fn lib(&self) -> &'static dyn MathLib {
        self.lib
    }

    fn elements(&self) -> [Float; 4] {
        let [e1, e2] = self.azimuthal.elements();
        [e1, e2, self.longitudinal.element(), self.temporal.element()]
    }

    fn wrap(&self, kind: LorentzKind, components: (Float, Float, Float, Float)) -> Self {
        Self {
            azimuthal: Azimuthal::from_elements(kind.0, [components.0, components.1]),
            longitudinal: Longitudinal::from_element(kind.1, components.2),
            temporal: Temporal::from_element(kind.2, components.3),
            lib: self.lib,
        }
    }

    fn wrap_spatial(&self, kind: SpatialKind, components: (Float, Float, Float)) -> Spatial {
        Spatial {
            azimuthal: Azimuthal::from_elements(kind.0, [components.0, components.1]),
            longitudinal: Longitudinal::from_element(kind.1, components.2),
            lib: self.lib,
        }
    }

    /// Cartesian x component
    pub fn x(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::X.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Cartesian y component
    pub fn y(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::Y.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Transverse momentum
    pub fn rho(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::RHO.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Squared transverse momentum
    pub fn rho2(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::RHO2.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Azimuthal angle
    pub fn phi(&self) -> Result<Float> {
        let (kernel, ()) = planar::coords::PHI.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        Ok(kernel(self.lib, e1, e2))
    }

    /// Cartesian z component
    pub fn z(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::Z.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Polar angle from the +z axis
    pub fn theta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::THETA.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Pseudorapidity
    pub fn eta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::ETA.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Cosine of the polar angle
    pub fn costheta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::COSTHETA.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Cotangent of the polar angle
    pub fn cottheta(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::COTTHETA.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Magnitude of the momentum 3-vector
    pub fn mag(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::MAG.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Squared magnitude of the momentum 3-vector
    pub fn mag2(&self) -> Result<Float> {
        let (kernel, ()) = spatial::coords::MAG2.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3))
    }

    /// Coordinate time / energy
    pub fn t(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::T_TABLE.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Squared coordinate time (clamped at zero for tau-carrying input)
    pub fn t2(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::T2.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Proper time / invariant mass, sign-preserving for spacelike input
    pub fn tau(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::TAU_TABLE.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Squared proper time, sign-preserving for spacelike input
    pub fn tau2(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::TAU2.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Velocity magnitude `|p| / t` (0 for the zero vector)
    pub fn beta(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::BETA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Lorentz factor `t / tau` (+inf for lightlike vectors)
    pub fn gamma(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::GAMMA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Longitudinal rapidity
    pub fn rapidity(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::RAPIDITY.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Transverse energy
    pub fn et(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::ET.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Squared transverse energy
    pub fn et2(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::ET2.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Transverse mass
    pub fn mt(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::MT.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Squared transverse mass (clamped at zero for tau-carrying input)
    pub fn mt2(&self) -> Result<Float> {
        let (kernel, ()) = lorentz::coords::MT2.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, e1, e2, e3, e4))
    }

    /// Componentwise sum
    pub fn add(&self, other: &Lorentz) -> Result<Lorentz> {
        check_same_backend("lorentz.add", self.lib, other.lib)?;
        let (kernel, returns) = lorentz::arithmetic::ADD.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4)))
    }

    /// Componentwise difference
    pub fn subtract(&self, other: &Lorentz) -> Result<Lorentz> {
        check_same_backend("lorentz.subtract", self.lib, other.lib)?;
        let (kernel, returns) =
            lorentz::arithmetic::SUBTRACT.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4)))
    }

    /// Minkowski dot product, metric `(+, -, -, -)`
    pub fn dot(&self, other: &Lorentz) -> Result<Float> {
        check_same_backend("lorentz.dot", self.lib, other.lib)?;
        let (kernel, ()) = lorentz::arithmetic::DOT.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4))
    }

    /// Signed azimuthal separation, wrapped into (-pi, pi]
    pub fn deltaphi(&self, other: &Lorentz) -> Result<Float> {
        check_same_backend("planar.deltaphi", self.lib, other.lib)?;
        let (kernel, ()) = planar::angles::DELTAPHI
            .resolve((self.azimuthal.kind(), other.azimuthal.kind()))?;
        let [a1, a2] = self.azimuthal.elements();
        let [b1, b2] = other.azimuthal.elements();
        Ok(kernel(self.lib, a1, a2, b1, b2))
    }

    /// Angular distance in the (rapidity, phi) plane
    pub fn delta_rapidity_phi(&self, other: &Lorentz) -> Result<Float> {
        check_same_backend("lorentz.delta_rapidity_phi", self.lib, other.lib)?;
        let (kernel, ()) =
            lorentz::angles::DELTA_RAPIDITY_PHI.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4))
    }

    /// Squared angular distance in the (rapidity, phi) plane
    pub fn delta_rapidity_phi2(&self, other: &Lorentz) -> Result<Float> {
        check_same_backend("lorentz.delta_rapidity_phi2", self.lib, other.lib)?;
        let (kernel, ()) =
            lorentz::angles::DELTA_RAPIDITY_PHI2.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4))
    }

    /// Exact componentwise equality (after conversion for mixed kinds)
    pub fn equal(&self, other: &Lorentz) -> Result<bool> {
        check_same_backend("lorentz.equal", self.lib, other.lib)?;
        let (kernel, ()) = lorentz::predicates::EQUAL.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4))
    }

    /// Negation of [`Lorentz::equal`]
    pub fn not_equal(&self, other: &Lorentz) -> Result<bool> {
        check_same_backend("lorentz.not_equal", self.lib, other.lib)?;
        let (kernel, ()) = lorentz::predicates::NOT_EQUAL.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4))
    }

    /// Componentwise approximate equality
    pub fn isclose(
        &self,
        other: &Lorentz,
        rtol: Float,
        atol: Float,
        equal_nan: bool,
    ) -> Result<bool> {
        check_same_backend("lorentz.isclose", self.lib, other.lib)?;
        let (kernel, ()) = lorentz::predicates::ISCLOSE.resolve((self.kind(), other.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = other.elements();
        Ok(kernel(self.lib, rtol, atol, equal_nan, a1, a2, a3, a4, b1, b2, b3, b4))
    }

    /// Whether the Minkowski self-product exceeds `tolerance`
    pub fn is_timelike(&self, tolerance: Float) -> Result<bool> {
        let (kernel, ()) = lorentz::predicates::IS_TIMELIKE.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, tolerance, e1, e2, e3, e4))
    }

    /// Whether the Minkowski self-product is below `tolerance`
    pub fn is_spacelike(&self, tolerance: Float) -> Result<bool> {
        let (kernel, ()) = lorentz::predicates::IS_SPACELIKE.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, tolerance, e1, e2, e3, e4))
    }

    /// Whether the Minkowski self-product vanishes within `tolerance`
    pub fn is_lightlike(&self, tolerance: Float) -> Result<bool> {
        let (kernel, ()) = lorentz::predicates::IS_LIGHTLIKE.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(kernel(self.lib, tolerance, e1, e2, e3, e4))
    }

    /// Boost along the x axis by velocity `beta`
    pub fn boost_x_beta(&self, beta: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::BOOST_X_BETA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, beta, e1, e2, e3, e4)))
    }

    /// Boost along the x axis by a signed Lorentz factor
    pub fn boost_x_gamma(&self, gamma: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::BOOST_X_GAMMA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, gamma, e1, e2, e3, e4)))
    }

    /// Boost along the y axis by velocity `beta`
    pub fn boost_y_beta(&self, beta: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::BOOST_Y_BETA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, beta, e1, e2, e3, e4)))
    }

    /// Boost along the y axis by a signed Lorentz factor
    pub fn boost_y_gamma(&self, gamma: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::BOOST_Y_GAMMA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, gamma, e1, e2, e3, e4)))
    }

    /// Boost along the z axis by velocity `beta`
    pub fn boost_z_beta(&self, beta: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::BOOST_Z_BETA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, beta, e1, e2, e3, e4)))
    }

    /// Boost along the z axis by a signed Lorentz factor
    pub fn boost_z_gamma(&self, gamma: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::BOOST_Z_GAMMA.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, gamma, e1, e2, e3, e4)))
    }

    /// Boost by a velocity 3-vector
    pub fn boost_beta3(&self, beta3: &Spatial) -> Result<Lorentz> {
        check_same_backend("lorentz.boost_beta3", self.lib, beta3.lib)?;
        let (kernel, returns) =
            lorentz::boosts::BOOST_BETA3.resolve((self.kind(), beta3.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3] = beta3.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, a4, b1, b2, b3)))
    }

    /// Boost into the frame co-moving with the 4-momentum `p4`
    pub fn boost_p4(&self, p4: &Lorentz) -> Result<Lorentz> {
        check_same_backend("lorentz.boost_p4", self.lib, p4.lib)?;
        let (kernel, returns) = lorentz::boosts::BOOST_P4.resolve((self.kind(), p4.kind()))?;
        let [a1, a2, a3, a4] = self.elements();
        let [b1, b2, b3, b4] = p4.elements();
        Ok(self.wrap(returns, kernel(self.lib, a1, a2, a3, a4, b1, b2, b3, b4)))
    }

    /// The velocity 3-vector `p / t`
    pub fn to_beta3(&self) -> Result<Spatial> {
        let (kernel, returns) = lorentz::arithmetic::TO_BETA3.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap_spatial(returns, kernel(self.lib, e1, e2, e3, e4)))
    }

    /// Rotation around the x axis; the temporal axis is untouched
    pub fn rotate_x(&self, angle: Float) -> Result<Lorentz> {
        let (kernel, returns) = spatial::rotations::ROTATE_X.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        let rotated = self.wrap_spatial(returns, kernel(self.lib, angle, e1, e2, e3));
        Ok(Self {
            azimuthal: rotated.azimuthal,
            longitudinal: rotated.longitudinal,
            temporal: self.temporal,
            lib: self.lib,
        })
    }

    /// Rotation around the y axis; the temporal axis is untouched
    pub fn rotate_y(&self, angle: Float) -> Result<Lorentz> {
        let (kernel, returns) = spatial::rotations::ROTATE_Y.resolve(self.spatial_kind())?;
        let [e1, e2, e3, _] = self.elements();
        let rotated = self.wrap_spatial(returns, kernel(self.lib, angle, e1, e2, e3));
        Ok(Self {
            azimuthal: rotated.azimuthal,
            longitudinal: rotated.longitudinal,
            temporal: self.temporal,
            lib: self.lib,
        })
    }

    /// Rotation around the z axis; longitudinal and temporal axes are
    /// untouched
    pub fn rotate_z(&self, angle: Float) -> Result<Lorentz> {
        let (kernel, returns) = planar::angles::ROTATE_Z.resolve(self.azimuthal.kind())?;
        let [e1, e2] = self.azimuthal.elements();
        let (c1, c2) = kernel(self.lib, angle, e1, e2);
        Ok(Self {
            azimuthal: Azimuthal::from_elements(returns, [c1, c2]),
            longitudinal: self.longitudinal,
            temporal: self.temporal,
            lib: self.lib,
        })
    }

    /// Rotation around an arbitrary axis; the temporal axis is untouched
    pub fn rotate_axis(&self, axis: &Spatial, angle: Float) -> Result<Lorentz> {
        check_same_backend("spatial.rotate_axis", self.lib, axis.lib)?;
        let (kernel, returns) =
            spatial::rotations::ROTATE_AXIS.resolve((axis.kind(), self.spatial_kind()))?;
        let [a1, a2, a3] = axis.elements();
        let [b1, b2, b3, _] = self.elements();
        let rotated = self.wrap_spatial(returns, kernel(self.lib, angle, a1, a2, a3, b1, b2, b3));
        Ok(Self {
            azimuthal: rotated.azimuthal,
            longitudinal: rotated.longitudinal,
            temporal: self.temporal,
            lib: self.lib,
        })
    }

    /// Multiplication by a scalar factor (all four components)
    pub fn scale(&self, factor: Float) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::arithmetic::SCALE.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, factor, e1, e2, e3, e4)))
    }

    /// The vector normalized to unit proper time
    pub fn unit(&self) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::arithmetic::UNIT.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(returns, kernel(self.lib, e1, e2, e3, e4)))
    }

    /// Arbitrary linear transform of spacetime
    pub fn transform4d(&self, matrix: &Matrix4<Float>) -> Result<Lorentz> {
        let (kernel, returns) = lorentz::boosts::TRANSFORM4D.resolve(self.kind())?;
        let [e1, e2, e3, e4] = self.elements();
        Ok(self.wrap(
            returns,
            kernel(
                self.lib,
                matrix[(0, 0)],
                matrix[(0, 1)],
                matrix[(0, 2)],
                matrix[(0, 3)],
                matrix[(1, 0)],
                matrix[(1, 1)],
                matrix[(1, 2)],
                matrix[(1, 3)],
                matrix[(2, 0)],
                matrix[(2, 1)],
                matrix[(2, 2)],
                matrix[(2, 3)],
                matrix[(3, 0)],
                matrix[(3, 1)],
                matrix[(3, 2)],
                matrix[(3, 3)],
                e1,
                e2,
                e3,
                e4,
            ),
        ))
    }

    /// Re-express this vector in another coordinate kind combination
    pub fn to_kind(&self, kind: LorentzKind) -> Result<Lorentz> {
        let azimuthal = match kind.0 {
            AzimuthalKind::Xy => Azimuthal::Xy {
                x: self.x()?,
                y: self.y()?,
            },
            AzimuthalKind::RhoPhi => Azimuthal::RhoPhi {
                rho: self.rho()?,
                phi: self.phi()?,
            },
        };
        let longitudinal = match kind.1 {
            LongitudinalKind::Z => Longitudinal::Z(self.z()?),
            LongitudinalKind::Theta => Longitudinal::Theta(self.theta()?),
            LongitudinalKind::Eta => Longitudinal::Eta(self.eta()?),
        };
        let temporal = match kind.2 {
            TemporalKind::T => Temporal::T(self.t()?),
            TemporalKind::Tau => Temporal::Tau(self.tau()?),
        };
        Ok(Self {
            azimuthal,
            longitudinal,
            temporal,
            lib: self.lib,
        })
    }
}

impl fmt::Debug for Lorentz {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Lorentz")
            .field("azimuthal", &self.azimuthal)
            .field("longitudinal", &self.longitudinal)
            .field("temporal", &self.temporal)
            .field("lib", &self.lib.name())
            .finish()
    }
}

impl PartialEq for Lorentz {
    fn eq(&self, other: &Self) -> bool {
        self.azimuthal == other.azimuthal
            && self.longitudinal == other.longitudinal
            && self.temporal == other.temporal
            && self.lib.name() == other.lib.name()
    }
}
