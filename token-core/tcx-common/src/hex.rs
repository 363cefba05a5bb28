//! Hex text transport for encoded messages.
//!
//! The app shell hands every `TcxAction` over as a hex string and reads the
//! reply back the same way.
use crate::errors::CommonError;
use crate::Result;

pub trait ToHex {
    fn to_hex(&self) -> String;

    fn to_0x_hex(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

impl<T: AsRef<[u8]>> ToHex for T {
    fn to_hex(&self) -> String {
        hex::encode(self)
    }
}

impl ToHex for [u8] {
    fn to_hex(&self) -> String {
        hex::encode(self)
    }
}

pub trait FromHex: Sized {
    fn from_hex<T: AsRef<[u8]>>(value: T) -> Result<Self>;

    /// Accepts both `0x`-prefixed and bare hex.
    fn from_hex_auto<T: AsRef<[u8]>>(value: T) -> Result<Self> {
        let bytes = value.as_ref();
        match bytes {
            [b'0', b'x' | b'X', rest @ ..] => Self::from_hex(rest),
            [b'0'] => Err(CommonError::InvalidHexPrefix.into()),
            _ => Self::from_hex(bytes),
        }
    }
}

impl FromHex for Vec<u8> {
    fn from_hex<T: AsRef<[u8]>>(value: T) -> Result<Self> {
        hex::decode(value).map_err(|_| CommonError::InvalidHex.into())
    }
}
