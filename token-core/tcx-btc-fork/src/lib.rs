mod codec;
pub mod transaction;

pub use transaction::{BtcForkSignedTxOutput, BtcForkTxInput, Utxo};

pub const BITCOIN: &str = "BITCOIN";
pub const BITCOINCASH: &str = "BITCOINCASH";
pub const LITECOIN: &str = "LITECOIN";

pub mod bitcoin_fork {
    use crate::{BITCOIN, BITCOINCASH, LITECOIN};

    pub const CHAINS: [&str; 3] = [BITCOIN, BITCOINCASH, LITECOIN];

    pub type TransactionInput = crate::transaction::BtcForkTxInput;
    pub type TransactionOutput = crate::transaction::BtcForkSignedTxOutput;
}
