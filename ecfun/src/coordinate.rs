use crate::{Error, FieldElement};
use core::fmt::Debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// The arithmetic a [`Point`] needs from its coordinates.
///
/// The group law only ever adds, subtracts, multiplies and divides coordinates
/// and multiplies them by small constants, so anything that can do that can be
/// used as a coordinate. [`FieldElement`] is the real one. [`BigInt`] is also
/// implemented so the textbook curves over the integers can be worked with
/// directly.
///
/// The binary operations are fallible because combining elements of different
/// fields or dividing by zero has to be reported.
///
/// [`Point`]: crate::Point
pub trait Coordinate: Clone + PartialEq + Debug {
    /// `self + rhs`
    fn add(&self, rhs: &Self) -> Result<Self, Error>;
    /// `self - rhs`
    fn sub(&self, rhs: &Self) -> Result<Self, Error>;
    /// `self * rhs`
    fn mul(&self, rhs: &Self) -> Result<Self, Error>;
    /// `self / rhs`
    fn div(&self, rhs: &Self) -> Result<Self, Error>;
    /// `k * self` for a small constant `k`.
    fn scale(&self, k: u32) -> Self;
    /// Whether this is the additive identity.
    fn is_zero(&self) -> bool;
}

impl Coordinate for FieldElement {
    fn add(&self, rhs: &Self) -> Result<Self, Error> {
        FieldElement::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, Error> {
        FieldElement::sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, Error> {
        FieldElement::mul(self, rhs)
    }

    fn div(&self, rhs: &Self) -> Result<Self, Error> {
        FieldElement::div(self, rhs)
    }

    fn scale(&self, k: u32) -> Self {
        self.scalar_mul(k)
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }
}

/// Plain integers. Division must come out exact or it fails with
/// [`Error::InexactDivision`].
impl Coordinate for BigInt {
    fn add(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self + rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self - rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self * rhs)
    }

    fn div(&self, rhs: &Self) -> Result<Self, Error> {
        if Zero::is_zero(rhs) {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = self.div_rem(rhs);
        if !Zero::is_zero(&remainder) {
            return Err(Error::InexactDivision);
        }
        Ok(quotient)
    }

    fn scale(&self, k: u32) -> Self {
        self * k
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}
