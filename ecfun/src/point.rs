use crate::{Coordinate, Error, FieldElement, op, secp256k1};
use core::fmt;
use num_bigint::{BigInt, BigUint};

/// A point on the short Weierstrass curve `y² = x³ + a·x + b`.
///
/// A point is either the _point at infinity_ (the identity of the group) or an
/// affine pair `(x, y)` that satisfies the curve equation. The curve parameters
/// `a` and `b` travel with the point and two points only compare equal, or can
/// be added together, when they are on the same curve.
///
/// The curve equation is checked once, by [`new`] and [`from_coordinates`].
/// Points produced by the group law are on the curve by construction and are
/// not checked again.
///
/// `C` is the type of the coordinates (see [`Coordinate`]). It defaults to
/// [`FieldElement`]; `Point<num_bigint::BigInt>` gives the curves over the
/// integers.
///
/// ```
/// use ecfun::{FieldElement, Point};
/// let fe = |n| FieldElement::from_u64(n, 223);
/// let P = Point::from_coordinates(fe(192)?, fe(105)?, fe(0)?, fe(7)?)?;
/// let Q = Point::from_coordinates(fe(17)?, fe(56)?, fe(0)?, fe(7)?)?;
/// assert_eq!(P.add(&Q)?, Point::from_coordinates(fe(170)?, fe(142)?, fe(0)?, fe(7)?)?);
/// assert!(Point::from_coordinates(fe(200)?, fe(119)?, fe(0)?, fe(7)?).is_err());
/// # Ok::<(), ecfun::Error>(())
/// ```
///
/// [`new`]: Point::new
/// [`from_coordinates`]: Point::from_coordinates
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Point<C = FieldElement> {
    coords: Option<(C, C)>,
    a: C,
    b: C,
}

impl<C: Coordinate> Point<C> {
    /// Creates a point from optional coordinates.
    ///
    /// Both `None` gives the identity. Exactly one `None` is
    /// [`Error::MalformedPoint`] and coordinates that do not satisfy the curve
    /// equation are [`Error::PointNotOnCurve`].
    pub fn new(x: Option<C>, y: Option<C>, a: C, b: C) -> Result<Self, Error> {
        match (x, y) {
            (None, None) => Ok(Self::identity(a, b)),
            (Some(x), Some(y)) => Self::from_coordinates(x, y, a, b),
            _ => Err(Error::MalformedPoint),
        }
    }

    /// Creates an affine point, checking that `y² = x³ + a·x + b`.
    pub fn from_coordinates(x: C, y: C, a: C, b: C) -> Result<Self, Error> {
        let lhs = y.mul(&y)?;
        let rhs = x.mul(&x)?.mul(&x)?.add(&a.mul(&x)?)?.add(&b)?;
        if lhs != rhs {
            return Err(Error::PointNotOnCurve);
        }
        Ok(Self::from_affine_unchecked(x, y, a, b))
    }

    /// The point at infinity on the curve with parameters `a` and `b`.
    pub fn identity(a: C, b: C) -> Self {
        Self { coords: None, a, b }
    }

    pub(crate) fn from_affine_unchecked(x: C, y: C, a: C, b: C) -> Self {
        Self {
            coords: Some((x, y)),
            a,
            b,
        }
    }

    pub(crate) fn to_identity(&self) -> Self {
        Self::identity(self.a.clone(), self.b.clone())
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// The affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&C, &C)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// The `x` coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&C> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The `y` coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&C> {
        self.coordinates().map(|(_, y)| y)
    }

    /// The curve parameter `a`.
    pub fn a(&self) -> &C {
        &self.a
    }

    /// The curve parameter `b`.
    pub fn b(&self) -> &C {
        &self.b
    }

    /// Whether `other` is on the same curve as `self`.
    pub fn same_curve(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    /// `self + rhs` (see [`op::point_add`]).
    pub fn add(&self, rhs: &Self) -> Result<Self, Error> {
        op::point_add(self, rhs)
    }

    /// `self - rhs`
    pub fn sub(&self, rhs: &Self) -> Result<Self, Error> {
        op::point_sub(self, rhs)
    }

    /// `-self`
    pub fn neg(&self) -> Result<Self, Error> {
        op::point_negate(self)
    }

    /// `k · self` (see [`op::scalar_mul_point`]).
    pub fn scalar_mul(&self, k: &BigUint) -> Result<Self, Error> {
        op::scalar_mul_point(k, self)
    }
}

/// Points over a prime field name the field after the curve. secp256k1 points
/// print their coordinates as 64 hex characters instead.
impl fmt::Display for Point<FieldElement> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if secp256k1::is_on_curve(self) {
            return match &self.coords {
                None => write!(f, "S256Point(infinity)"),
                Some((x, y)) => write!(f, "S256Point({:064x}, {:064x})", x, y),
            };
        }
        match &self.coords {
            None => write!(f, "Point(infinity)"),
            Some((x, y)) => write!(
                f,
                "Point({},{})_{}_{} FieldElement({})",
                x,
                y,
                self.a,
                self.b,
                self.a.prime()
            ),
        }
    }
}

impl fmt::Display for Point<BigInt> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.coords {
            None => write!(f, "Point(infinity)"),
            Some((x, y)) => write!(f, "Point({},{})_{}_{}", x, y, self.a, self.b),
        }
    }
}

impl fmt::Debug for Point<FieldElement> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Point<BigInt> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
