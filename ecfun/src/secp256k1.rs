//! The secp256k1 curve: `y² = x³ + 7` over the field of integers modulo
//! `p = 2²⁵⁶ - 2³² - 977`.
//!
//! The generic [`FieldElement`] and [`Point`] types know nothing about
//! secp256k1. This module closes over the curve constants to give
//! constructors that only build secp256k1 values, plus scalar multiplication
//! that reduces by the group order `n` first.
//!
//! ```
//! use ecfun::{secp256k1, Scalar};
//! let G = secp256k1::generator();
//! let n = secp256k1::n();
//! assert!(secp256k1::mul_point(&n, &G)?.is_identity());
//! assert_eq!(secp256k1::generator_mul(&Scalar::one()), G);
//! # Ok::<(), ecfun::Error>(())
//! ```
use crate::{Error, FieldElement, Point, Scalar, op};
use num_bigint::BigUint;

/// The curve parameter `a`.
pub const A: u32 = 0;

/// The curve parameter `b`.
pub const B: u32 = 7;

/// The field prime `p` as big-endian bytes.
pub const P_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

/// The order `n` of the group generated by [`generator`] as big-endian bytes.
pub const N_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// The `x` coordinate of the generator as big-endian bytes.
pub const GX_BYTES: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

/// The `y` coordinate of the generator as big-endian bytes.
pub const GY_BYTES: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// The field prime `p`.
pub fn p() -> BigUint {
    BigUint::from_bytes_be(&P_BYTES)
}

/// The group order `n`.
pub fn n() -> BigUint {
    BigUint::from_bytes_be(&N_BYTES)
}

fn constant(num: BigUint) -> FieldElement {
    FieldElement::new(num, p()).expect("curve constants are smaller than p")
}

/// Creates an element of the secp256k1 base field.
///
/// Fails with [`Error::OutOfRange`] unless `num < p`.
pub fn field_element(num: BigUint) -> Result<FieldElement, Error> {
    FieldElement::new(num, p())
}

/// Creates a point on secp256k1 from its affine coordinates.
///
/// ```
/// use ecfun::{Error, secp256k1};
/// use num_bigint::BigUint;
/// let G = secp256k1::generator();
/// let (x, y) = G.coordinates().unwrap();
/// assert_eq!(secp256k1::point(x.num().clone(), y.num().clone())?, G);
/// assert_eq!(
///     secp256k1::point(x.num().clone(), BigUint::from(1u32)),
///     Err(Error::PointNotOnCurve)
/// );
/// # Ok::<(), ecfun::Error>(())
/// ```
pub fn point(x: BigUint, y: BigUint) -> Result<Point, Error> {
    Point::from_coordinates(
        field_element(x)?,
        field_element(y)?,
        constant(A.into()),
        constant(B.into()),
    )
}

/// The point at infinity on secp256k1.
pub fn identity() -> Point {
    Point::identity(constant(A.into()), constant(B.into()))
}

/// The generator `G`.
pub fn generator() -> Point {
    Point::from_affine_unchecked(
        constant(BigUint::from_bytes_be(&GX_BYTES)),
        constant(BigUint::from_bytes_be(&GY_BYTES)),
        constant(A.into()),
        constant(B.into()),
    )
}

/// Whether `P` is a point on secp256k1 (including the point at infinity).
pub fn is_on_curve(P: &Point) -> bool {
    P.same_curve(&identity())
}

/// Multiplies a secp256k1 point by `k`, reducing `k` modulo `n` first.
///
/// Fails with [`Error::CurveMismatch`] if `P` is on some other curve.
pub fn mul_point(k: &BigUint, P: &Point) -> Result<Point, Error> {
    if !is_on_curve(P) {
        return Err(Error::CurveMismatch);
    }
    op::scalar_mul_point(&(k % n()), P)
}

/// Computes `x * G`.
pub fn generator_mul(x: &Scalar) -> Point {
    op::scalar_mul_point(x.as_biguint(), &generator())
        .expect("G is on secp256k1 so its multiples are too")
}

/// Computes `x * G + y * P`.
pub fn double_mul(x: &Scalar, y: &Scalar, P: &Point) -> Result<Point, Error> {
    let yP = mul_point(y.as_biguint(), P)?;
    generator_mul(x).add(&yP)
}
