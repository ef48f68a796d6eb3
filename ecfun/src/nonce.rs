//! Nonce generation utilities
//!
//! Every ECDSA signature needs a fresh secret nonce `k`. Reusing one, or even
//! letting it be slightly predictable, leaks the secret key. Schemes built on
//! this crate take a [`NonceGen`] when they are instantiated and ask it for a
//! nonce for each secret and message they sign.
//!
//! The provided generator is [`Deterministic`] which derives the nonce from
//! the secret and the message with iterated HMAC (in the style of
//! [RFC 6979]) so that signing the same message twice gives the same
//! signature and there is no dependence on a random number generator.
//!
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
use crate::{Scalar, scalar::be_bytes_32, secp256k1};
use core::{fmt, marker::PhantomData};
use digest::{Digest, core_api::BlockSizeUser, generic_array::typenum::U32};
use hmac::{Mac, SimpleHmac};
use num_bigint::BigUint;
use sha2::Sha256;

/// A trait for nonce generation.
///
/// Implementations must return a non-zero scalar that appears uniformly random
/// to anyone who doesn't know `secret`.
pub trait NonceGen {
    /// Derives the nonce to sign the 32-byte `message` digest with `secret`.
    fn derive_nonce(&self, secret: &Scalar, message: &[u8; 32]) -> Scalar;
}

/// A deterministic nonce generator driven by HMAC over the hash `H`.
///
/// # Example
///
/// ```
/// use ecfun::{
///     nonce::{Deterministic, NonceGen},
///     Scalar,
/// };
/// use sha2::Sha256;
/// let nonce_gen = Deterministic::<Sha256>::default();
/// let secret = Scalar::from(42u32);
/// let k1 = nonce_gen.derive_nonce(&secret, &[7u8; 32]);
/// let k2 = nonce_gen.derive_nonce(&secret, &[7u8; 32]);
/// assert_eq!(k1, k2);
/// assert_ne!(k1, nonce_gen.derive_nonce(&secret, &[8u8; 32]));
/// ```
pub struct Deterministic<H = Sha256> {
    // fn(H) keeps the generator Send + Sync whatever H is
    hash: PhantomData<fn(H)>,
}

impl<H> Default for Deterministic<H> {
    fn default() -> Self {
        Self { hash: PhantomData }
    }
}

impl<H> Clone for Deterministic<H> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<H> fmt::Debug for Deterministic<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Deterministic<{}>", core::any::type_name::<H>())
    }
}

fn hmac_32<H>(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32]
where
    H: Digest<OutputSize = U32> + BlockSizeUser,
{
    let mut mac = <SimpleHmac<H> as Mac>::new_from_slice(key)
        .expect("HMAC accepts keys of any length");
    for part in parts {
        Mac::update(&mut mac, part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&Mac::finalize(mac).into_bytes());
    out
}

impl<H> NonceGen for Deterministic<H>
where
    H: Digest<OutputSize = U32> + BlockSizeUser,
{
    fn derive_nonce(&self, secret: &Scalar, message: &[u8; 32]) -> Scalar {
        let n = secp256k1::n();
        let mut z = BigUint::from_bytes_be(message);
        if z > n {
            z -= &n;
        }
        let z_bytes = be_bytes_32(&z);
        let secret_bytes = secret.to_bytes();

        let mut k = [0u8; 32];
        let mut v = [1u8; 32];
        for separator in [0x00u8, 0x01] {
            k = hmac_32::<H>(&k, &[&v, &[separator], &secret_bytes, &z_bytes]);
            v = hmac_32::<H>(&k, &[&v]);
        }

        loop {
            v = hmac_32::<H>(&k, &[&v]);
            if let Some(candidate) = Scalar::from_bytes(v) {
                if !candidate.is_zero() {
                    return candidate;
                }
            }
            k = hmac_32::<H>(&k, &[&v, &[0x00]]);
            v = hmac_32::<H>(&k, &[&v]);
        }
    }
}
