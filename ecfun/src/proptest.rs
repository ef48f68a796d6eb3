//! Strategies for generating test data with [`proptest`], and [`Arbitrary`]
//! implementations for [`Scalar`] and [`PrivateKey`].
//!
//! [`proptest`]: https://github.com/proptest-rs/proptest
//! [`Arbitrary`]: proptest::arbitrary::Arbitrary
use crate::{Point, PrivateKey, Scalar, secp256k1};
use ::proptest::prelude::*;

prop_compose! {
    /// Generate a random `Scalar`.
    pub fn scalar()(
        bytes in any::<[u8; 32]>(),
    ) -> Scalar {
        Scalar::from_bytes_mod_order(bytes)
    }
}

prop_compose! {
    /// Generate a random, non-zero `Scalar`.
    pub fn non_zero_scalar()(
        x in scalar().prop_filter("Value cannot be zero", |x| !x.is_zero()),
    ) -> Scalar {
        x
    }
}

prop_compose! {
    /// Generate a random point on secp256k1 (never the identity).
    pub fn point()(
        x in non_zero_scalar(),
    ) -> Point {
        secp256k1::generator_mul(&x)
    }
}

impl Arbitrary for Scalar {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            // insert some pathological cases
            1 => Just(Scalar::zero()),
            1 => Just(Scalar::one()),
            1 => Just(Scalar::minus_one()),
            27 => scalar(),
        ]
        .boxed()
    }
}

impl Arbitrary for PrivateKey {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(Scalar::one()),
            1 => Just(Scalar::minus_one()),
            18 => non_zero_scalar(),
        ]
        .prop_map(|secret| PrivateKey::new(secret).expect("secret is non-zero"))
        .boxed()
    }
}
