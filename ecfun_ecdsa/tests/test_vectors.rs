#![allow(non_snake_case)]
use ecfun_ecdsa::{
    ECDSA, Signature,
    ecfun::{Error, PrivateKey, Scalar, hex, num_bigint::BigUint, secp256k1},
};
use sha2::{Digest, Sha256};

fn big(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

fn hash256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

struct SignVector {
    secret: &'static str,
    message: [u8; 32],
    r: &'static str,
    s: &'static str,
}

fn sign_vectors() -> Vec<SignVector> {
    vec![
        SignVector {
            secret: "3039",
            message: hash256(b"Programming Bitcoin!"),
            r: "8eeacac05e4c29e793b5287ed044637132ce9ead7fded533e7441d87a8dc9c23",
            s: "36674f81f10c7fb347c1224bd546813ea24ada6f642c02f2248516e3aa8cb303",
        },
        SignVector {
            secret: "1",
            message: hex::decode_array(
                "0000000000000000000000000000000000000000000000000000000000000001",
            )
            .unwrap(),
            r: "6673ffad2147741f04772b6f921f0ba6af0c1e77fc439e65c36dedf4092e8898",
            s: "4c1a971652e0ada880120ef8025e709fff2080c4a39aae068d12eed009b68c89",
        },
        SignVector {
            secret: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
            // the group order plus five
            message: hex::decode_array(
                "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364146",
            )
            .unwrap(),
            r: "24365e1c0408fc3822d7ac8717a1cda8818e994d6e976b912621de5f8582d6ab",
            s: "0ce9d6c7fc6119b9cbbe7e59db061451006863857a02314b258a8a71fd76e5f6",
        },
    ]
}

#[test]
fn message_digest() {
    assert_eq!(
        hex::encode(&hash256(b"Programming Bitcoin!")),
        "969f6056aa26f7d2795fd013fe88868d09c9f6aed96965016e1936ae47060d48"
    );
}

#[test]
fn deterministic_signatures() {
    let ecdsa: ECDSA = ECDSA::default();
    for vector in sign_vectors() {
        let key = PrivateKey::from_biguint(big(vector.secret)).unwrap();
        let signature = ecdsa.sign(&key, &vector.message);
        assert_eq!(hex::encode(&signature.r.to_bytes()), vector.r);
        assert_eq!(hex::encode(&signature.s.to_bytes()), vector.s);
        assert_eq!(
            format!("{}", signature),
            format!("{}{}", vector.r, vector.s)
        );
        assert!(
            ecdsa
                .verify(key.public_point(), &vector.message, &signature)
                .unwrap()
        );
    }
}

#[test]
fn published_signatures_verify() {
    let P = secp256k1::point(
        big("887387e452b8eacc4acfde10d9aaf7f6d9a0f975aabb10d006e4da568744d06c"),
        big("61de6d95231cd89026e286df3b6ae4a894a3378e393e93a0f45b666329a0ae34"),
    )
    .unwrap();
    let vectors = [
        (
            "ec208baa0fc1c19f708a9ca96fdeff3ac3f230bb4a7ba4aede4942ad003c0f60",
            "ac8d1c87e51d0d441be8b3dd5b05c8795b48875dffe00b7ffcfac23010d3a395",
            "068342ceff8935ededd102dd876ffd6ba72d6a427a3edb13d26eb0781cb423c4",
        ),
        (
            "7c076ff316692a3d7eb3c3bb0f8b1488cf72e1afcd929e29307032997a838a3d",
            "00eff69ef2b1bd93a66ed5219add4fb51e11a840f404876325a1e8ffe0529a2c",
            "c7207fee197d27c618aea621406f6bf5ef6fca38681d82b2f06fddbdce6feab6",
        ),
    ];
    let ecdsa = ECDSA::verify_only();
    for (z, r, s) in vectors {
        assert!(ecdsa.verify_digest(&P, &big(z), &big(r), &big(s)).unwrap());

        let signature: Signature = format!("{}{}", r, s).parse().unwrap();
        let message: [u8; 32] = hex::decode_array(z).unwrap();
        assert!(ecdsa.verify(&P, &message, &signature).unwrap());

        // the first s is low, the second high
        let low = !signature.s.is_high();
        assert_eq!(
            ECDSA::verify_only()
                .enforce_low_s()
                .verify(&P, &message, &signature)
                .unwrap(),
            low
        );

        let mut tampered = message;
        tampered[31] ^= 0x80;
        assert!(!ecdsa.verify(&P, &tampered, &signature).unwrap());
    }
}

#[test]
fn verifying_against_a_point_on_another_curve() {
    use ecfun_ecdsa::ecfun::{FieldElement, Point};
    let fe = |n| FieldElement::from_u64(n, 223).unwrap();
    let P = Point::from_coordinates(fe(47), fe(71), fe(0), fe(7)).unwrap();
    let signature = Signature::new(Scalar::one(), Scalar::one()).unwrap();
    assert_eq!(
        ECDSA::verify_only().verify(&P, &[0u8; 32], &signature),
        Err(Error::CurveMismatch)
    );
}

#[test]
fn identity_is_never_a_valid_public_key() {
    let ecdsa = ECDSA::verify_only();
    let message = hash256(b"Programming Bitcoin!");
    let z = Scalar::from_bytes_mod_order(message);
    let k = Scalar::from(1234567u32);
    let R = secp256k1::generator_mul(&k);
    let r = Scalar::from_biguint_mod_order(R.x().unwrap().num().clone());
    let s = &z * &k.invert().unwrap();
    let signature = Signature::new(r, s).unwrap();
    let infinity = secp256k1::identity();

    // u·G alone hits R, so only the key check stops this one
    let u = &z * &signature.s.invert().unwrap();
    assert_eq!(
        secp256k1::double_mul(&u, &Scalar::one(), &infinity).unwrap(),
        R
    );
    assert!(!ecdsa.verify(&infinity, &message, &signature).unwrap());
    assert!(
        !ecdsa
            .verify_digest(
                &infinity,
                &BigUint::from_bytes_be(&message),
                signature.r.as_biguint(),
                signature.s.as_biguint()
            )
            .unwrap()
    );
}
