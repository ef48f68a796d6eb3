#![doc = include_str!("../README.md")]
#![no_std]
#![allow(non_snake_case)]
#![deny(missing_docs)]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub use ecfun;
use ecfun::{
    Error, Point, PrivateKey, Scalar,
    nonce::{Deterministic, NonceGen},
    num_bigint::BigUint,
    secp256k1,
};
use sha2::Sha256;

mod signature;
pub use signature::Signature;

/// An instance of the ECDSA signature scheme.
pub struct ECDSA<NG = Deterministic<Sha256>> {
    /// An instance of [`NonceGen`] to produce nonces.
    ///
    /// [`NonceGen`]: ecfun::nonce::NonceGen
    pub nonce_gen: NG,
    /// `enforce_low_s`: Whether the verify algorithm should enforce that the `s` component of the signature is low (see [BIP-146]).
    ///
    /// [BIP-146]: https://github.com/bitcoin/bips/blob/master/bip-0146.mediawiki#low_s
    pub enforce_low_s: bool,
}

impl<NG: Default> Default for ECDSA<NG> {
    fn default() -> Self {
        ECDSA {
            nonce_gen: NG::default(),
            enforce_low_s: false,
        }
    }
}

impl<NG> ECDSA<NG> {
    /// Creates an ECDSA instance that signs with the nonces from `nonce_gen`.
    pub fn new(nonce_gen: NG) -> Self {
        ECDSA {
            nonce_gen,
            enforce_low_s: false,
        }
    }
}

impl ECDSA<()> {
    /// Creates an `ECDSA` instance that cannot be used to sign messages but can
    /// verify signatures.
    pub fn verify_only() -> Self {
        ECDSA {
            nonce_gen: (),
            enforce_low_s: false,
        }
    }
}

impl<NG> ECDSA<NG> {
    /// Transforms the ECDSA instance into one which enforces the [BIP-146] low s constraint.
    ///
    /// [BIP-146]: https://github.com/bitcoin/bips/blob/master/bip-0146.mediawiki#low_s
    pub fn enforce_low_s(self) -> Self {
        ECDSA {
            nonce_gen: self.nonce_gen,
            enforce_low_s: true,
        }
    }

    /// Get the corresponding verification key for a secret key.
    pub fn verification_key_for(&self, secret_key: &Scalar) -> Point {
        secp256k1::generator_mul(secret_key)
    }

    /// Verify an ECDSA signature on a 32-byte message digest.
    ///
    /// Returns `Ok(false)` for a well formed signature that doesn't verify.
    /// Errors are reserved for inputs that aren't well formed: a component of
    /// the signature that is zero is [`Error::InvalidSignature`] and a public
    /// point that isn't on secp256k1 is [`Error::CurveMismatch`].
    ///
    /// The identity is never the public key of a secret in `[1, n)` so
    /// nothing verifies against it.
    pub fn verify(
        &self,
        public_key: &Point,
        message: &[u8; 32],
        signature: &Signature,
    ) -> Result<bool, Error> {
        let (r, s) = signature.as_tuple();
        if r.is_zero() || s.is_zero() {
            return Err(Error::InvalidSignature);
        }
        // This ensures that there is only one valid s value per r for any given message.
        if s.is_high() && self.enforce_low_s {
            return Ok(false);
        }
        if !secp256k1::is_on_curve(public_key) {
            return Err(Error::CurveMismatch);
        }
        // with P at infinity v·P vanishes and s = z/k forges for any k
        if public_key.is_identity() {
            return Ok(false);
        }

        let z = Scalar::from_bytes_mod_order(*message);
        let s_inv = s.invert()?;
        let u = &z * &s_inv;
        let v = r * &s_inv;

        let implied_R = secp256k1::double_mul(&u, &v, public_key)?;
        Ok(match implied_R.x() {
            Some(x) => Scalar::from_biguint_mod_order(x.num().clone()) == *r,
            None => false,
        })
    }

    /// Verify a signature given as plain integers.
    ///
    /// Unlike [`verify`](Self::verify) the components haven't been reduced yet
    /// so anything outside of `[1, n)` is an [`Error::InvalidSignature`]. The
    /// digest `z` may be any size and is reduced modulo `n`.
    pub fn verify_digest(
        &self,
        public_key: &Point,
        z: &BigUint,
        r: &BigUint,
        s: &BigUint,
    ) -> Result<bool, Error> {
        let r = Scalar::from_biguint(r.clone()).ok_or(Error::InvalidSignature)?;
        let s = Scalar::from_biguint(s.clone()).ok_or(Error::InvalidSignature)?;
        let z = Scalar::from_biguint_mod_order(z.clone());
        self.verify(public_key, &z.to_bytes(), &Signature { r, s })
    }
}

impl<NG: NonceGen> ECDSA<NG> {
    /// Deterministically produce an ECDSA signature on a message digest.
    ///
    /// The `s` of the result is always low.
    ///
    /// # Examples
    ///
    /// ```
    /// use ecfun_ecdsa::{
    ///     ECDSA,
    ///     ecfun::{PrivateKey, nonce::Deterministic},
    /// };
    /// use sha2::{Digest, Sha256};
    ///
    /// let key = PrivateKey::random(&mut rand::thread_rng());
    /// let ecdsa = ECDSA::<Deterministic<Sha256>>::default();
    /// let message_hash: [u8; 32] = Sha256::digest(b"Attack at dawn").into();
    /// let signature = ecdsa.sign(&key, &message_hash);
    /// assert!(ecdsa.verify(key.public_point(), &message_hash, &signature)?);
    /// # Ok::<(), ecfun_ecdsa::ecfun::Error>(())
    /// ```
    pub fn sign(&self, key: &PrivateKey, message: &[u8; 32]) -> Signature {
        let x = key.secret();
        let z = Scalar::from_bytes_mod_order(*message);
        let k = self.nonce_gen.derive_nonce(x, message);
        let R = secp256k1::generator_mul(&k);

        // The nonce is in [1, n) so R is never the identity.
        let R_x = R.x().expect("computationally unreachable");
        let r = Scalar::from_biguint_mod_order(R_x.num().clone());

        let k_inv = k.invert().expect("nonces are never zero");
        let mut s = &(&z + &(&r * x)) * &k_inv;

        // s values must be low (less than half group order), otherwise signatures
        // would be malleable i.e. (r,s) and (r,-s) would both be valid signatures.
        s.conditional_negate(s.is_high());

        // r = 0 or s = 0 would need a hash collision with the group structure
        Signature::new(r, s).expect("computationally unreachable")
    }

    /// Signs a digest given as an integer. It must fit in 256 bits or the
    /// result is [`Error::OutOfRange`].
    pub fn sign_digest(&self, key: &PrivateKey, z: &BigUint) -> Result<Signature, Error> {
        if z.bits() > 256 {
            return Err(Error::OutOfRange);
        }
        let mut message = [0u8; 32];
        let bytes = z.to_bytes_be();
        message[32 - bytes.len()..].copy_from_slice(&bytes);
        Ok(self.sign(key, &message))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ecfun::TEST_SOUNDNESS;
    use rand::RngCore;

    fn random_message() -> [u8; 32] {
        let mut message = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut message);
        message
    }

    #[test]
    fn repeated_sign_and_verify() {
        let ecdsa = ECDSA::<Deterministic<Sha256>>::default();
        for _ in 0..TEST_SOUNDNESS {
            let message = random_message();
            let key = PrivateKey::random(&mut rand::thread_rng());
            let sig = ecdsa.sign(&key, &message);
            assert!(ecdsa.verify(key.public_point(), &message, &sig).unwrap());
            assert!(!sig.s.is_high());
        }
    }

    #[test]
    fn low_s() {
        for _ in 0..TEST_SOUNDNESS {
            let ecdsa = ECDSA::<Deterministic<Sha256>>::default();
            let ecdsa_enforce_low_s = ECDSA::<Deterministic<Sha256>>::default().enforce_low_s();
            let message = random_message();
            let key = PrivateKey::random(&mut rand::thread_rng());
            let public_key = key.public_point();
            let mut sig = ecdsa.sign(&key, &message);
            assert!(ecdsa.verify(public_key, &message, &sig).unwrap());
            assert!(ecdsa_enforce_low_s.verify(public_key, &message, &sig).unwrap());
            sig.s = -sig.s;
            assert!(!ecdsa_enforce_low_s.verify(public_key, &message, &sig).unwrap());
            assert!(ecdsa.verify(public_key, &message, &sig).unwrap());
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let ecdsa = ECDSA::<Deterministic<Sha256>>::default();
        let key = PrivateKey::random(&mut rand::thread_rng());
        let message = random_message();
        assert_eq!(ecdsa.sign(&key, &message), ecdsa.sign(&key, &message));
    }

    #[test]
    fn tampering_is_detected() {
        let ecdsa = ECDSA::<Deterministic<Sha256>>::default();
        let key = PrivateKey::random(&mut rand::thread_rng());
        let message = random_message();
        let sig = ecdsa.sign(&key, &message);
        let public_key = key.public_point();

        let mut other_message = message;
        other_message[0] ^= 1;
        assert!(!ecdsa.verify(public_key, &other_message, &sig).unwrap());

        let bad_r = Signature::new(&sig.r + &Scalar::one(), sig.s.clone()).unwrap();
        assert!(!ecdsa.verify(public_key, &message, &bad_r).unwrap());

        let bad_s = Signature::new(sig.r.clone(), &sig.s + &Scalar::one()).unwrap();
        assert!(!ecdsa.verify(public_key, &message, &bad_s).unwrap());

        let other_key = PrivateKey::random(&mut rand::thread_rng());
        assert!(!ecdsa.verify(other_key.public_point(), &message, &sig).unwrap());
    }

    #[test]
    fn zero_components_are_errors() {
        let ecdsa = ECDSA::verify_only();
        let G = secp256k1::generator();
        let zero_r = Signature {
            r: Scalar::zero(),
            s: Scalar::one(),
        };
        assert_eq!(
            ecdsa.verify(&G, &[1u8; 32], &zero_r),
            Err(Error::InvalidSignature)
        );
        let n = secp256k1::n();
        let one = BigUint::from(1u32);
        assert_eq!(
            ecdsa.verify_digest(&G, &one, &n, &one),
            Err(Error::InvalidSignature)
        );
        assert_eq!(
            ecdsa.verify_digest(&G, &one, &one, &BigUint::from(0u32)),
            Err(Error::InvalidSignature)
        );
    }

    #[test]
    fn verification_key_matches_private_key() {
        let ecdsa = ECDSA::verify_only();
        let key = PrivateKey::random(&mut rand::thread_rng());
        assert_eq!(&ecdsa.verification_key_for(key.secret()), key.public_point());
    }

    #[test]
    fn integer_digests() {
        let ecdsa = ECDSA::<Deterministic<Sha256>>::default();
        let key = PrivateKey::from_biguint(BigUint::from(1u32)).unwrap();
        let z = BigUint::from(1u32);
        let sig = ecdsa.sign_digest(&key, &z).unwrap();
        let mut message = [0u8; 32];
        message[31] = 1;
        assert_eq!(sig, ecdsa.sign(&key, &message));
        assert!(
            ecdsa
                .verify_digest(key.public_point(), &z, sig.r.as_biguint(), sig.s.as_biguint())
                .unwrap()
        );
        let too_big = BigUint::from(1u32) << 256;
        assert_eq!(ecdsa.sign_digest(&key, &too_big), Err(Error::OutOfRange));
        // digests bigger than n are fine and reduced
        let z = secp256k1::n() + 1u32;
        let sig = ecdsa.sign_digest(&key, &z).unwrap();
        assert!(
            ecdsa
                .verify_digest(key.public_point(), &z, sig.r.as_biguint(), sig.s.as_biguint())
                .unwrap()
        );
    }

    #[cfg(feature = "proptest")]
    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(8))]
            #[test]
            fn sign_then_verify(key in any::<PrivateKey>(), message in any::<[u8; 32]>()) {
                let ecdsa = ECDSA::<Deterministic<Sha256>>::default().enforce_low_s();
                let sig = ecdsa.sign(&key, &message);
                prop_assert!(ecdsa.verify(key.public_point(), &message, &sig).unwrap());
            }
        }
    }
}
