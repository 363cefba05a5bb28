mod errors;
pub mod hex;

pub use crate::errors::CommonError;
pub use crate::hex::{FromHex, ToHex};

pub type Result<T> = std::result::Result<T, anyhow::Error>;
