#![doc = include_str!("../README.md")]
#![no_std]
#![allow(non_snake_case)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub mod hex;
pub mod nonce;
pub mod op;
pub mod secp256k1;

pub use digest;
pub use num_bigint;
pub use rand_core;

mod coordinate;
mod error;
mod field;
mod keypair;
mod point;
mod scalar;

mod macros;
pub use coordinate::Coordinate;
pub use error::Error;
pub use field::FieldElement;
pub use keypair::PrivateKey;
pub use point::Point;
pub use scalar::Scalar;

#[cfg(feature = "serde")]
pub extern crate serde;

#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub mod proptest;

#[doc(hidden)]
pub const TEST_SOUNDNESS: usize = 20;
