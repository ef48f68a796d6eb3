use crate::{Error, Point, Scalar, secp256k1};
use num_bigint::BigUint;
use rand_core::RngCore;

/// A secp256k1 secret together with its public point.
///
/// The secret is a non-zero [`Scalar`] and the public point is `secret * G`,
/// computed once when the key is created.
///
/// ```
/// use ecfun::{PrivateKey, secp256k1};
/// use num_bigint::BigUint;
/// let key = PrivateKey::from_biguint(BigUint::from(12345u32))?;
/// let (x, _) = key.public_point().coordinates().unwrap();
/// assert_eq!(
///     format!("{:064x}", x),
///     "f01d6b9018ab421dd410404cb869072065522bf85734008f105cf385a023a80f"
/// );
/// # Ok::<(), ecfun::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PrivateKey {
    secret: Scalar,
    point: Point,
}

impl PrivateKey {
    /// Creates the key for `secret`.
    ///
    /// Zero is not a valid secret: [`Error::OutOfRange`].
    pub fn new(secret: Scalar) -> Result<Self, Error> {
        if secret.is_zero() {
            return Err(Error::OutOfRange);
        }
        Ok(Self {
            point: secp256k1::generator_mul(&secret),
            secret,
        })
    }

    /// Creates the key for an integer secret, which must be in `[1, n)`.
    pub fn from_biguint(secret: BigUint) -> Result<Self, Error> {
        Self::new(Scalar::from_biguint(secret).ok_or(Error::OutOfRange)?)
    }

    /// Generates a key from a caller provided cryptographically secure random
    /// number generator.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        Self::new(Scalar::random(rng)).expect("computationally unreachable")
    }

    /// Returns a reference to the secret.
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The public point `secret * G`.
    pub fn public_point(&self) -> &Point {
        &self.point
    }

    /// Gets a reference to the key as a tuple
    pub fn as_tuple(&self) -> (&Scalar, &Point) {
        (&self.secret, &self.point)
    }

    /// The secret as 64 hex characters.
    #[cfg(feature = "alloc")]
    pub fn hex(&self) -> alloc::string::String {
        crate::hex::encode_u256(self.secret.as_biguint())
    }
}
