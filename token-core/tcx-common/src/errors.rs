use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommonError {
    #[error("invalid_hex")]
    InvalidHex,
    #[error("invalid_hex_prefix")]
    InvalidHexPrefix,
}
