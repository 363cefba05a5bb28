mod codec;
pub mod transaction;

pub use crate::transaction::{TronMessageInput, TronMessageOutput, TronTxInput, TronTxOutput};

use tcx_common::FromHex;

pub const TRON: &str = "TRON";

pub mod tron {
    use crate::TRON;

    pub const CHAINS: [&str; 1] = [TRON];

    pub type TransactionInput = crate::transaction::TronTxInput;
    pub type TransactionOutput = crate::transaction::TronTxOutput;

    pub type MessageInput = crate::transaction::TronMessageInput;
    pub type MessageOutput = crate::transaction::TronMessageOutput;
}

impl TronMessageInput {
    /// The bytes to be signed: `value` is hex (with or without `0x`) when `is_hex` is set,
    /// UTF-8 text otherwise.
    pub fn message_bytes(&self) -> tcx_common::Result<Vec<u8>> {
        if self.is_hex {
            Vec::from_hex_auto(&self.value)
        } else {
            Ok(self.value.as_bytes().to_vec())
        }
    }
}
