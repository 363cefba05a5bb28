#![allow(dead_code)]

use std::panic;

use anyhow::anyhow;
use prost::Message;
use tcx::api::{
    AccountResponse, AccountsResponse, ExternalAddressParam, ExternalAddressResult,
    HdStoreDeriveParam, InitTokenCoreXParam, Response, SignParam, TcxAction, WalletKeyParam,
};
use tcx::handler::encode_message;
use tcx::*;
use tcx_btc_fork::BtcForkSignedTxOutput;
use tcx_common::{FromHex, ToHex};
use tcx_tron::{TronMessageOutput, TronTxOutput};

pub static TEST_PASSWORD: &str = "imToken1";
pub static TEST_MNEMONIC: &str =
    "inject kidney empty canal shadow pact comfort wife crush horse wife sketch";
pub static TEST_FILE_DIR: &str = "/tmp/imtoken";

pub fn setup() {
    register_mock_handlers();
    init_token_core_x(TEST_FILE_DIR);
    clear_err();
}

pub fn teardown() {
    clear_err();
    set_debug(false);
}

pub fn run_test<T>(test: T)
where
    T: FnOnce() + panic::UnwindSafe,
{
    setup();
    let result = panic::catch_unwind(test);
    teardown();
    assert!(result.is_ok())
}

pub fn init_token_core_x(file_dir: &str) {
    let param = InitTokenCoreXParam {
        file_dir: file_dir.to_string(),
        xpub_common_key: "B888D25EC8C12BD5043777B1AC49F872".to_string(),
        xpub_common_iv: "9C0C30889CBCC5E01AB5B2BB88715799".to_string(),
    };
    call_api("init_token_core_x", param).unwrap();
}

/// Sends `msg` through `call_tcx_api` the way the app shell does and turns the last error
/// message back into an `Err`.
pub fn call_api(method: &str, msg: impl Message) -> anyhow::Result<Vec<u8>> {
    let action = TcxAction {
        method: method.to_string(),
        param: Some(::prost_types::Any {
            type_url: "imtoken".to_string(),
            value: encode_message(msg).unwrap(),
        }),
    };
    call_action(&action)
}

pub fn call_action(action: &TcxAction) -> anyhow::Result<Vec<u8>> {
    clear_err();
    let ret_hex = call_tcx_api(&encode_message(action.clone()).unwrap().to_hex());
    let err = get_last_err_message();
    if !err.is_empty() {
        let err_bytes = Vec::from_hex(err).unwrap();
        let err_ret = Response::decode(err_bytes.as_slice()).unwrap();
        assert!(!err_ret.is_success);
        Err(anyhow!("{}", err_ret.error))
    } else {
        Ok(Vec::from_hex(ret_hex).unwrap())
    }
}

/// Stand-in wallet core: derives fake addresses, checks `TEST_PASSWORD` and "signs" by echoing
/// the payload.
pub fn register_mock_handlers() {
    register_handler(ApiMethod::HdStoreDerive, |param: HdStoreDeriveParam| {
        if param.password != TEST_PASSWORD {
            return Err(anyhow!("password_incorrect"));
        }
        let accounts = param
            .derivations
            .iter()
            .map(|derivation| AccountResponse {
                chain_type: derivation.chain_type.clone(),
                address: format!("{}@{}", derivation.chain_type, derivation.path),
                path: derivation.path.clone(),
                extended_xpub_key: String::new(),
            })
            .collect();
        Ok(AccountsResponse { accounts })
    });

    register_handler(ApiMethod::KeystoreCommonVerify, |param: WalletKeyParam| {
        if param.password == TEST_PASSWORD {
            Ok(Response {
                is_success: true,
                error: String::new(),
            })
        } else {
            Err(anyhow!("password_incorrect"))
        }
    });

    register_handler(
        ApiMethod::CalcExternalAddress,
        |param: ExternalAddressParam| {
            if param.id.is_empty() {
                panic!("wallet_not_found");
            }
            Ok(ExternalAddressResult {
                address: format!("{}-external-{}", param.chain_type, param.external_idx),
                derived_path: format!("0/{}", param.external_idx),
                r#type: "EXTERNAL".to_string(),
            })
        },
    );

    register_raw_handler(ApiMethod::SignTx, |data: &[u8]| {
        let param = SignParam::decode(data)?;
        let payload = param.payload()?;
        if !payload.supports_chain(&param.chain_type) {
            return Err(anyhow!("unsupported_chain"));
        }
        match payload {
            SignPayload::BtcForkTxInput(input) => {
                let total: i64 = input.unspents.iter().map(|utxo| utxo.amount).sum();
                encode_message(BtcForkSignedTxOutput {
                    signature: format!("{}:{}", input.to, total - input.amount - input.fee),
                    tx_hash: input.unspents.len().to_string(),
                })
            }
            SignPayload::TronTxInput(input) => encode_message(TronTxOutput {
                signature: input.raw_data.iter().rev().cloned().collect(),
            }),
            _ => Err(anyhow!("unsupported_chain")),
        }
    });

    register_handler(ApiMethod::TronSignMsg, |param: SignParam| {
        match param.payload()? {
            SignPayload::TronMessageInput(input) => Ok(TronMessageOutput {
                signature: input.message_bytes()?.to_0x_hex(),
            }),
            _ => Err(anyhow!("unsupported_chain")),
        }
    });
}
