use tcx_btc_fork::bitcoin_fork;
use tcx_tron::tron;

use crate::api::SignParam;
use crate::error_handling::ApiError;
use crate::Result;

sign_payloads! {
    BtcForkTxInput => bitcoin_fork::TransactionInput, bitcoin_fork::CHAINS;
    TronTxInput => tron::TransactionInput, tron::CHAINS;
    TronMessageInput => tron::MessageInput, tron::CHAINS;
}

impl SignParam {
    /// Typed view of `input`.
    pub fn payload(&self) -> Result<SignPayload> {
        let input = self.input.as_ref().ok_or(ApiError::ParamMissing)?;
        SignPayload::from_any(input)
    }

    pub fn set_payload(&mut self, payload: impl Into<SignPayload>) {
        self.input = Some(payload.into().to_any());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use prost_types::Any;
    use tcx_btc_fork::{BtcForkTxInput, Utxo};
    use tcx_tron::{TronMessageInput, TronTxInput};

    fn btc_input() -> BtcForkTxInput {
        BtcForkTxInput {
            to: "qq40fskqshxem2gvz0xkf34ww3h6zwv4dcr7pm0z6s".to_string(),
            amount: 93_454,
            unspents: vec![Utxo {
                tx_hash: "09c3a49c1d01f6341c43ea43dd0de571664a45b4e7d9211945cb3046006a98e2".to_string(),
                vout: 0,
                amount: 100_000,
                address: "qzld7dav7d2sfjdl6x9snkvf6raj8lfxjcj5fa8y2r".to_string(),
                script_pub_key: "76a91488d9931ea73d60eaf7e5671efc0552b912911f2a88ac".to_string(),
                derived_path: "0/0".to_string(),
                sequence: 0,
            }],
            fee: 6_000,
            change_idx: 1,
            network: "MAINNET".to_string(),
            seg_wit: "NONE".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_known_payloads() {
        let input = btc_input();
        let payload = SignPayload::from_any(&SignPayload::from(input.clone()).to_any()).unwrap();
        assert_eq!(payload, SignPayload::BtcForkTxInput(input));
        assert!(payload.supports_chain("BITCOINCASH"));
        assert!(!payload.supports_chain("TRON"));

        let message = TronMessageInput {
            value: "hello world".to_string(),
            is_hex: false,
            is_tron_header: true,
        };
        let payload = SignPayload::from_any(&tcx_proto::pack_any(&message)).unwrap();
        assert_eq!(payload, SignPayload::TronMessageInput(message));
        assert_eq!(
            payload.type_url(),
            "type.googleapis.com/transaction.TronMessageInput"
        );
        assert_eq!(payload.chains(), &["TRON"]);
    }

    #[test]
    fn test_bare_type_name_resolves() {
        let input = TronTxInput {
            raw_data: vec![0x0a, 0x02, 0x0e, 0x2d],
        };
        let any = Any {
            type_url: "transaction.TronTxInput".to_string(),
            value: input.encode_to_vec(),
        };
        assert_eq!(
            SignPayload::from_any(&any).unwrap(),
            SignPayload::TronTxInput(input)
        );
    }

    #[test]
    fn test_unknown_payload_is_opaque() {
        let any = Any {
            type_url: "type.googleapis.com/transaction.EthTxInput".to_string(),
            value: vec![0x0a, 0x01, 0x31],
        };
        let payload = SignPayload::from_any(&any).unwrap();
        assert_eq!(payload, SignPayload::Opaque(any.clone()));
        assert_eq!(payload.to_any(), any);
        assert_eq!(payload.type_url(), any.type_url);
        assert!(payload.chains().is_empty());
    }

    #[test]
    fn test_malformed_known_payload() {
        let any = Any {
            type_url: "type.googleapis.com/transaction.BtcForkTxInput".to_string(),
            value: vec![0x1a, 0x05, 0x0a],
        };
        assert!(SignPayload::from_any(&any).is_err());
    }

    #[test]
    fn test_sign_param_payload() {
        let mut param = SignParam {
            id: "w1".to_string(),
            password: "pw".to_string(),
            chain_type: "BITCOINCASH".to_string(),
            address: "qzld7dav7d2sfjdl6x9snkvf6raj8lfxjcj5fa8y2r".to_string(),
            input: None,
        };
        let err = param.payload().unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>(), Some(&ApiError::ParamMissing));

        param.set_payload(btc_input());
        assert_eq!(
            param.input.as_ref().map(|any| any.type_url.as_str()),
            Some("type.googleapis.com/transaction.BtcForkTxInput")
        );
        let payload = param.payload().unwrap();
        assert!(payload.supports_chain(&param.chain_type));
        assert_eq!(payload, SignPayload::BtcForkTxInput(btc_input()));
    }
}
