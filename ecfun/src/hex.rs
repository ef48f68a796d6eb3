//! Utility module for hex encoding and decoding
#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;
#[cfg(feature = "alloc")]
use num_bigint::BigUint;

/// Error representing a failed conversion from hex into the bytes for the target type.
#[derive(Debug, Clone, PartialEq)]
pub enum HexError {
    /// The string was not a valid hex string.
    InvalidHex,
    /// The string was not the right length for the target type.
    InvalidLength,
    /// The bytes did not encode a valid value for the target type.
    InvalidEncoding,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use HexError::*;
        match self {
            InvalidHex => write!(f, "invalid hex string"),
            InvalidLength => write!(f, "hex string had an invalid length"),
            InvalidEncoding => write!(f, "hex value did not encode the expected type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

fn hex_val(c: u8) -> Result<u8, HexError> {
    match c {
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(HexError::InvalidHex),
    }
}

#[cfg(feature = "alloc")]
/// Encode some bytes as a lowercase hex String.
///
/// # Examples
/// ```
/// use ecfun::hex;
/// assert_eq!(hex::encode(&[0x00, 0xab, 0x10]), "00ab10");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    use core::fmt::Write;
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).expect("writing to a String cannot fail")
    }
    hex
}

#[cfg(feature = "alloc")]
/// Encode a 256-bit integer as exactly 64 lowercase hex characters, zero padded
/// on the left.
///
/// Values wider than 256 bits are not truncated, they just come out longer.
///
/// # Examples
/// ```
/// use ecfun::hex;
/// use num_bigint::BigUint;
/// assert_eq!(
///     hex::encode_u256(&BigUint::from(0xbeefu32)),
///     "000000000000000000000000000000000000000000000000000000000000beef"
/// );
/// ```
pub fn encode_u256(num: &BigUint) -> String {
    alloc::format!("{:064x}", num)
}

/// Decode some hex bytes into a fixed length array.
///
/// # Examples
/// ```
/// use ecfun::hex;
/// let bytes: [u8; 2] = hex::decode_array("beef").unwrap();
/// assert_eq!(bytes, [0xbe, 0xef]);
/// assert_eq!(hex::decode_array::<3>("beef"), Err(hex::HexError::InvalidLength));
/// ```
pub fn decode_array<const N: usize>(hex: &str) -> Result<[u8; N], HexError> {
    let mut bytes = [0u8; N];
    if hex.len() % 2 != 0 {
        return Err(HexError::InvalidHex);
    }
    if hex.len() != N * 2 {
        return Err(HexError::InvalidLength);
    }
    for (hex_byte, byte) in hex.as_bytes().chunks(2).zip(bytes.iter_mut()) {
        *byte = (hex_val(hex_byte[0])? << 4) | hex_val(hex_byte[1])?
    }
    Ok(bytes)
}
