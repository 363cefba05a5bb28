use tcx_proto::impl_plain_object;

use crate::transaction::{TronMessageInput, TronMessageOutput, TronTxInput, TronTxOutput};

impl_plain_object! {
    TronTxInput, "transaction", "TronTxInput" {
        raw_data: "rawData" => Bytes,
    }

    TronTxOutput, "transaction", "TronTxOutput" {
        signature: "signature" => Bytes,
    }

    TronMessageInput, "transaction", "TronMessageInput" {
        value: "value" => Str,
        is_hex: "isHex" => Bool,
        is_tron_header: "isTronHeader" => Bool,
    }

    TronMessageOutput, "transaction", "TronMessageOutput" {
        signature: "signature" => Str,
    }
}
