use ecfun::{Error, Scalar};

/// An ECDSA signature.
///
/// Both components are in `[1, n)`. Whether `s` is low is a signing policy
/// (see [`ECDSA::enforce_low_s`]) rather than something the type guarantees.
///
/// A signature displays as 128 hex characters: `r` then `s`, each as 32
/// big-endian bytes.
///
/// [`ECDSA::enforce_low_s`]: crate::ECDSA::enforce_low_s
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The `x` coordinate of the nonce point, reduced modulo `n`.
    pub r: Scalar,
    /// The `s` component.
    pub s: Scalar,
}

impl Signature {
    /// Creates a signature from its components. Fails with
    /// [`Error::InvalidSignature`] if either of them is zero.
    pub fn new(r: Scalar, s: Scalar) -> Result<Self, Error> {
        if r.is_zero() || s.is_zero() {
            return Err(Error::InvalidSignature);
        }
        Ok(Self { r, s })
    }

    /// The 64-byte `r || s` encoding.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[0..32].copy_from_slice(&self.r.to_bytes()[..]);
        bytes[32..64].copy_from_slice(&self.s.to_bytes()[..]);
        bytes
    }

    /// Decodes `r || s`, returning `None` unless both components are in `[1, n)`.
    pub fn from_bytes(bytes: [u8; 64]) -> Option<Self> {
        let r = Scalar::from_slice(&bytes[0..32])?;
        let s = Scalar::from_slice(&bytes[32..64])?;
        Self::new(r, s).ok()
    }

    /// Gets references to `(r, s)`.
    pub fn as_tuple(&self) -> (&Scalar, &Scalar) {
        (&self.r, &self.s)
    }
}

ecfun::impl_fromstr_deserialize! {
    name => "secp256k1 ECDSA signature",
    fn from_bytes(bytes: [u8;64]) -> Option<Signature> {
        Signature::from_bytes(bytes)
    }
}

ecfun::impl_display_debug_serialize! {
    fn to_bytes(sig: &Signature) -> [u8;64] {
        sig.to_bytes()
    }
}
