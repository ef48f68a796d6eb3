use crate::{Error, secp256k1};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// An integer modulo the secp256k1 group order `n`.
///
/// Private keys, nonces and both halves of a signature are `Scalar`s, as is
/// the message digest once it has been interpreted as a number. The value is
/// always in `[0, n)` so, unlike [`FieldElement`], the arithmetic operators
/// can be implemented infallibly.
///
/// ```
/// use ecfun::Scalar;
/// let x = Scalar::from(7u32);
/// let y = Scalar::minus_one();
/// assert_eq!(&x + &y, Scalar::from(6u32));
/// assert_eq!(&x * &x.invert()?, Scalar::one());
/// # Ok::<(), ecfun::Error>(())
/// ```
///
/// [`FieldElement`]: crate::FieldElement
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(BigUint);

impl Scalar {
    fn reduce(num: BigUint) -> Self {
        Scalar(num % secp256k1::n())
    }

    /// The integer `0`.
    pub fn zero() -> Self {
        Scalar(BigUint::zero())
    }

    /// The integer `1`.
    pub fn one() -> Self {
        Scalar(BigUint::one())
    }

    /// The integer `-1` (i.e. `n - 1`).
    pub fn minus_one() -> Self {
        Scalar(secp256k1::n() - 1u32)
    }

    /// Generates a random scalar from a caller provided cryptographically
    /// secure random number generator.
    ///
    /// The 32 random bytes are reduced modulo `n`, so the result is uniform
    /// to within a negligible bias.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self::from_bytes_mod_order(bytes)
    }

    /// Decodes 32 big-endian bytes, returning `None` if the value is not less
    /// than `n`.
    pub fn from_bytes(bytes: [u8; 32]) -> Option<Self> {
        Self::from_biguint(BigUint::from_bytes_be(&bytes))
    }

    /// Like [`from_bytes`](Self::from_bytes) but for a slice, which must be
    /// exactly 32 bytes long.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 32 {
            return None;
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Self::from_bytes(bytes)
    }

    /// Interprets 32 big-endian bytes as an integer and reduces it modulo `n`.
    ///
    /// This is how a 32-byte hash becomes a scalar.
    ///
    /// ```
    /// use ecfun::{hex, Scalar};
    /// let overflowed = Scalar::from_bytes_mod_order(
    ///     hex::decode_array("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364142")
    ///         .unwrap(),
    /// );
    /// assert_eq!(overflowed, Scalar::one());
    /// ```
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Self {
        Self::reduce(BigUint::from_bytes_be(&bytes))
    }

    /// Returns `None` unless `num < n`.
    pub fn from_biguint(num: BigUint) -> Option<Self> {
        if num >= secp256k1::n() {
            return None;
        }
        Some(Scalar(num))
    }

    /// Reduces any integer modulo `n`.
    pub fn from_biguint_mod_order(num: BigUint) -> Self {
        Self::reduce(num)
    }

    /// The 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        be_bytes_32(&self.0)
    }

    /// The value as an integer in `[0, n)`.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns true if the scalar is equal to zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns whether the scalar is greater than `n / 2`.
    pub fn is_high(&self) -> bool {
        self.0 > (secp256k1::n() >> 1)
    }

    /// Negates the scalar in-place if `cond` is true.
    pub fn conditional_negate(&mut self, cond: bool) {
        if cond {
            *self = -&*self;
        }
    }

    /// The multiplicative inverse modulo `n`, computed as `self^(n-2)`.
    ///
    /// Zero has no inverse: [`Error::DivisionByZero`].
    pub fn invert(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let n = secp256k1::n();
        Ok(Scalar(self.0.modpow(&(&n - 2u32), &n)))
    }
}

/// Left pads the big-endian bytes of `num` to 32 bytes. `num` must fit.
pub(crate) fn be_bytes_32(num: &BigUint) -> [u8; 32] {
    let bytes = num.to_bytes_be();
    debug_assert!(bytes.len() <= 32);
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

impl From<u32> for Scalar {
    fn from(int: u32) -> Self {
        Self::reduce(int.into())
    }
}

impl From<u64> for Scalar {
    fn from(int: u64) -> Self {
        Self::reduce(int.into())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::zero()
    }
}

crate::impl_display_debug_serialize! {
    fn to_bytes(scalar: &Scalar) -> [u8;32] {
        scalar.to_bytes()
    }
}

crate::impl_fromstr_deserialize! {
    name => "secp256k1 scalar",
    fn from_bytes(bytes: [u8;32]) -> Option<Scalar> {
        Scalar::from_bytes(bytes)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        let n = secp256k1::n();
        Scalar((&n - &self.0) % &n)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;

            fn $method(self, rhs: &Scalar) -> Scalar {
                let ($lhs, $rhs) = (&self.0, &rhs.0);
                Scalar::reduce($body)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: Scalar) -> Scalar {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Scalar> for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: &Scalar) -> Scalar {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<Scalar> for &Scalar {
            type Output = Scalar;

            fn $method(self, rhs: Scalar) -> Scalar {
                $trait::$method(self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, |a, b| a + b);
impl_binary_op!(Sub, sub, |a, b| a + secp256k1::n() - b);
impl_binary_op!(Mul, mul, |a, b| a * b);
