use tcx_proto::impl_plain_object;

use crate::transaction::{BtcForkSignedTxOutput, BtcForkTxInput, Utxo};

impl_plain_object! {
    Utxo, "transaction", "Utxo" {
        tx_hash: "txHash" => Str,
        vout: "vout" => Int32,
        amount: "amount" => Int64,
        address: "address" => Str,
        script_pub_key: "scriptPubKey" => Str,
        derived_path: "derivedPath" => Str,
        sequence: "sequence" => Int64,
    }

    BtcForkTxInput, "transaction", "BtcForkTxInput" {
        to: "to" => Str,
        amount: "amount" => Int64,
        unspents: "unspents" => Repeated<Utxo>,
        memo: "memo" => Str,
        fee: "fee" => Int64,
        change_idx: "changeIdx" => Uint32,
        change_address: "changeAddress" => Str,
        network: "network" => Str,
        seg_wit: "segWit" => Str,
    }

    BtcForkSignedTxOutput, "transaction", "BtcForkSignedTxOutput" {
        signature: "signature" => Str,
        tx_hash: "txHash" => Str,
    }
}
