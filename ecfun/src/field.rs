//! Prime field arithmetic (integers mod a prime `p`)
use crate::Error;
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// An element of the prime field `ℤ/pℤ`.
///
/// A `FieldElement` carries its own modulus. The value is always in `[0, p)`:
/// [`new`] refuses anything else and every operation re-normalizes its result.
/// Operations between elements of two different fields fail with
/// [`Error::FieldMismatch`] rather than coercing one into the other.
///
/// ```
/// use ecfun::FieldElement;
/// let a = FieldElement::from_u64(7, 13)?;
/// let b = FieldElement::from_u64(12, 13)?;
/// assert_eq!(a.add(&b)?, FieldElement::from_u64(6, 13)?);
/// assert_eq!(a.div(&b)?.mul(&b)?, a);
/// # Ok::<(), ecfun::Error>(())
/// ```
///
/// The modulus is assumed to be prime. Nothing checks that, but [`invert`] and
/// [`div`] only give meaningful answers when it is.
///
/// [`new`]: FieldElement::new
/// [`invert`]: FieldElement::invert
/// [`div`]: FieldElement::div
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    num: BigUint,
    prime: BigUint,
}

impl FieldElement {
    /// Creates the element `num` of the field of integers modulo `prime`.
    ///
    /// Returns [`Error::OutOfRange`] unless `num < prime`.
    pub fn new(num: BigUint, prime: BigUint) -> Result<Self, Error> {
        if num >= prime {
            return Err(Error::OutOfRange);
        }
        Ok(Self { num, prime })
    }

    /// Convenience for small fields.
    pub fn from_u64(num: u64, prime: u64) -> Result<Self, Error> {
        Self::new(BigUint::from(num), BigUint::from(prime))
    }

    /// The additive identity of the field modulo `prime`.
    pub fn zero(prime: BigUint) -> Result<Self, Error> {
        Self::new(BigUint::zero(), prime)
    }

    /// The multiplicative identity of the field modulo `prime`.
    pub fn one(prime: BigUint) -> Result<Self, Error> {
        Self::new(BigUint::one(), prime)
    }

    // `num` must already be reduced.
    fn in_field_of(&self, num: BigUint) -> Self {
        debug_assert!(num < self.prime);
        Self {
            num,
            prime: self.prime.clone(),
        }
    }

    fn check_field(&self, rhs: &Self) -> Result<(), Error> {
        if self.prime != rhs.prime {
            return Err(Error::FieldMismatch);
        }
        Ok(())
    }

    /// The value as an integer in `[0, p)`.
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    /// The modulus of the field this element belongs to.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Whether this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// `self + rhs mod p`
    pub fn add(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_field(rhs)?;
        Ok(self.in_field_of((&self.num + &rhs.num) % &self.prime))
    }

    /// `self - rhs mod p`
    pub fn sub(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_field(rhs)?;
        Ok(self.in_field_of((&self.num + &self.prime - &rhs.num) % &self.prime))
    }

    /// `self * rhs mod p`
    pub fn mul(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_field(rhs)?;
        Ok(self.in_field_of((&self.num * &rhs.num) % &self.prime))
    }

    /// The additive inverse `-self mod p`.
    pub fn neg(&self) -> Self {
        self.in_field_of((&self.prime - &self.num) % &self.prime)
    }

    /// Raises the element to a (possibly negative) integer power.
    ///
    /// The exponent is first reduced modulo `p - 1`, which is the order of the
    /// multiplicative group, so `x.pow(-1)` is the inverse of `x`.
    ///
    /// A negative exponent on zero is an [`Error::DivisionByZero`]. Otherwise
    /// zero follows the reduced exponent: one when it reduces to 0 (so
    /// `0^(p-1)` is one) and zero when it is positive.
    ///
    /// ```
    /// use ecfun::{Error, FieldElement};
    /// let a = FieldElement::from_u64(17, 31)?;
    /// assert_eq!(a.pow(-3)?, FieldElement::from_u64(29, 31)?);
    /// let zero = FieldElement::from_u64(0, 31)?;
    /// assert_eq!(zero.pow(7)?, zero);
    /// assert_eq!(zero.pow(30)?, FieldElement::from_u64(1, 31)?);
    /// assert_eq!(zero.pow(-1), Err(Error::DivisionByZero));
    /// # Ok::<(), ecfun::Error>(())
    /// ```
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Result<Self, Error> {
        let exponent = exponent.into();
        if self.is_zero() && exponent.sign() == Sign::Minus {
            return Err(Error::DivisionByZero);
        }
        let order = BigInt::from(self.prime.clone()) - 1;
        let reduced = exponent.mod_floor(&order);
        if reduced.is_zero() {
            return Ok(self.in_field_of(BigUint::one() % &self.prime));
        }
        Ok(self.in_field_of(self.num.modpow(reduced.magnitude(), &self.prime)))
    }

    /// The multiplicative inverse, computed as `self^(p-2)` (Fermat's little theorem).
    pub fn invert(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let exponent = &self.prime - 2u32;
        Ok(self.in_field_of(self.num.modpow(&exponent, &self.prime)))
    }

    /// `self / rhs mod p`
    pub fn div(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_field(rhs)?;
        self.mul(&rhs.invert()?)
    }

    /// Multiplies the element by a plain integer: `k * self mod p`.
    ///
    /// This does not depend on `p` being prime. Curve formulas use it for the
    /// small constants like the `3` in `3x² + a`.
    pub fn scalar_mul(&self, k: impl Into<BigInt>) -> Self {
        let k = k.into().mod_floor(&BigInt::from(self.prime.clone()));
        self.in_field_of((k.magnitude() * &self.num) % &self.prime)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.num, f)
    }
}

/// Formats the value (not the modulus) in hex. `{:064x}` gives the fixed
/// width form used for 256-bit fields.
impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.num, f)
    }
}
