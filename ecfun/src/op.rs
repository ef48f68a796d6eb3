//! The group law and scalar multiplication for [`Point`]s.
//!
//! These are the functions behind [`Point::add`], [`Point::sub`],
//! [`Point::neg`] and [`Point::scalar_mul`]. They are generic over the
//! [`Coordinate`] type so the same code runs over prime fields and over the
//! integers.
//!
//! ```
//! use ecfun::{op, secp256k1};
//! use num_bigint::BigUint;
//! let G = secp256k1::generator();
//! let two_G = op::point_add(&G, &G)?;
//! assert_eq!(op::scalar_mul_point(&BigUint::from(2u32), &G)?, two_G);
//! # Ok::<(), ecfun::Error>(())
//! ```
use crate::{Coordinate, Error, Point};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Adds two points with the chord and tangent rule.
///
/// The cases are tried in order:
///
/// 1. If either point is the identity the other one is returned.
/// 2. Same `x` but different `y` means the points are inverses: identity.
/// 3. Different `x`: the chord through both points.
/// 4. The same point with `y = 0`: the tangent is vertical so the result is the identity.
/// 5. The same point otherwise: the tangent at that point.
///
/// Fails with [`Error::CurveMismatch`] if the points are on different curves.
pub fn point_add<C: Coordinate>(P: &Point<C>, Q: &Point<C>) -> Result<Point<C>, Error> {
    if !P.same_curve(Q) {
        return Err(Error::CurveMismatch);
    }

    let ((x1, y1), (x2, y2)) = match (P.coordinates(), Q.coordinates()) {
        (None, _) => return Ok(Q.clone()),
        (_, None) => return Ok(P.clone()),
        (Some(p), Some(q)) => (p, q),
    };

    if x1 == x2 && y1 != y2 {
        return Ok(P.to_identity());
    }

    let slope = if x1 != x2 {
        y2.sub(y1)?.div(&x2.sub(x1)?)?
    } else {
        if y1.is_zero() {
            return Ok(P.to_identity());
        }
        x1.mul(x1)?.scale(3).add(P.a())?.div(&y1.scale(2))?
    };

    let x3 = slope.mul(&slope)?.sub(x1)?.sub(x2)?;
    let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
    Ok(Point::from_affine_unchecked(x3, y3, P.a().clone(), P.b().clone()))
}

/// Negates a point by negating its `y` coordinate.
pub fn point_negate<C: Coordinate>(P: &Point<C>) -> Result<Point<C>, Error> {
    match P.coordinates() {
        None => Ok(P.clone()),
        Some((x, y)) => {
            let zero = y.scale(0);
            Ok(Point::from_affine_unchecked(
                x.clone(),
                zero.sub(y)?,
                P.a().clone(),
                P.b().clone(),
            ))
        }
    }
}

/// Subtracts one point from another.
pub fn point_sub<C: Coordinate>(P: &Point<C>, Q: &Point<C>) -> Result<Point<C>, Error> {
    if !P.same_curve(Q) {
        return Err(Error::CurveMismatch);
    }
    point_add(P, &point_negate(Q)?)
}

/// Multiplies the point `P` by the non-negative integer `k` with binary
/// double-and-add, starting from the least significant bit.
///
/// `k = 0` gives the identity. Nothing is reduced: callers that know the
/// group order should reduce `k` first (see [`secp256k1::mul_point`]).
///
/// [`secp256k1::mul_point`]: crate::secp256k1::mul_point
pub fn scalar_mul_point<C: Coordinate>(k: &BigUint, P: &Point<C>) -> Result<Point<C>, Error> {
    let mut coef = k.clone();
    let mut current = P.clone();
    let mut result = P.to_identity();
    while !coef.is_zero() {
        if coef.is_odd() {
            result = point_add(&result, &current)?;
        }
        coef >>= 1;
        if !coef.is_zero() {
            current = point_add(&current, &current)?;
        }
    }
    Ok(result)
}
