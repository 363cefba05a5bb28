use tcx_proto::{impl_plain_object, ProtoEnum};

use crate::api::external_address_extra::ExternalAddress;
use crate::api::hd_store_derive_param::Derivation;
use crate::api::*;

impl ProtoEnum for KeyType {
    fn from_number(value: i32) -> Option<Self> {
        KeyType::from_i32(value)
    }

    fn from_name(name: &str) -> Option<Self> {
        KeyType::from_str_name(name)
    }

    fn number(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        self.as_str_name()
    }
}

impl_plain_object! {
    TcxAction, "api", "TcxAction" {
        method: "method" => Str,
        param: "param" => Message<::prost_types::Any>,
    }

    Response, "api", "Response" {
        is_success: "isSuccess" => Bool,
        error: "error" => Str,
    }

    InitTokenCoreXParam, "api", "InitTokenCoreXParam" {
        file_dir: "fileDir" => Str,
        xpub_common_key: "xpubCommonKey" => Str,
        xpub_common_iv: "xpubCommonIv" => Str,
    }

    HdStoreCreateParam, "api", "HdStoreCreateParam" {
        password: "password" => Str,
        password_hint: "passwordHint" => Str,
        name: "name" => Str,
    }

    HdStoreImportParam, "api", "HdStoreImportParam" {
        chain_type: "chainType" => Str,
        mnemonic: "mnemonic" => Str,
        password: "password" => Str,
        path: "path" => Str,
        source: "source" => Str,
        name: "name" => Str,
        network: "network" => Str,
        seg_wit: "segWit" => Str,
        password_hint: "passwordHint" => Str,
        overwrite: "overwrite" => Bool,
    }

    HdStoreDeriveParam, "api", "HdStoreDeriveParam" {
        id: "id" => Str,
        password: "password" => Str,
        derivations: "derivations" => Repeated<Derivation>,
    }

    Derivation, "api", "HdStoreDeriveParam.Derivation" {
        chain_type: "chainType" => Str,
        path: "path" => Str,
        network: "network" => Str,
        seg_wit: "segWit" => Str,
        chain_id: "chainId" => Str,
    }

    BtcForkDeriveExtraParam, "api", "BtcForkDeriveExtraParam" {
        network: "network" => Str,
        seg_wit: "segWit" => Str,
    }

    AccountResponse, "api", "AccountResponse" {
        chain_type: "chainType" => Str,
        address: "address" => Str,
        path: "path" => Str,
        extended_xpub_key: "extendedXpubKey" => Str,
    }

    AccountsResponse, "api", "AccountsResponse" {
        accounts: "accounts" => Repeated<AccountResponse>,
    }

    HdStoreExtendedPublicKeyParam, "api", "HdStoreExtendedPublicKeyParam" {
        id: "id" => Str,
        password: "password" => Str,
        chain_type: "chainType" => Str,
        address: "address" => Str,
    }

    HdStoreExtendedPublicKeyResponse, "api", "HdStoreExtendedPublicKeyResponse" {
        extended_public_key: "extendedPublicKey" => Str,
    }

    KeystoreCommonAccountsParam, "api", "KeystoreCommonAccountsParam" {
        id: "id" => Str,
    }

    PrivateKeyStoreImportParam, "api", "PrivateKeyStoreImportParam" {
        private_key: "privateKey" => Str,
        password: "password" => Str,
        chain_type: "chainType" => Str,
        network: "network" => Str,
        seg_wit: "segWit" => Str,
        overwrite: "overwrite" => Bool,
    }

    PrivateKeyStoreExportParam, "api", "PrivateKeyStoreExportParam" {
        id: "id" => Str,
        password: "password" => Str,
        chain_type: "chainType" => Str,
        network: "network" => Str,
    }

    WalletKeyParam, "api", "WalletKeyParam" {
        id: "id" => Str,
        password: "password" => Str,
    }

    KeystoreCommonExistsParam, "api", "KeystoreCommonExistsParam" {
        r#type: "type" => Enumeration<KeyType>,
        value: "value" => Str,
    }

    KeystoreCommonExportResult, "api", "KeystoreCommonExportResult" {
        id: "id" => Str,
        r#type: "type" => Enumeration<KeyType>,
        value: "value" => Str,
    }

    KeystoreCommonExistsResult, "api", "KeystoreCommonExistsResult" {
        is_exists: "isExists" => Bool,
        id: "id" => Str,
    }

    SignParam, "api", "SignParam" {
        id: "id" => Str,
        password: "password" => Str,
        chain_type: "chainType" => Str,
        address: "address" => Str,
        input: "input" => Message<::prost_types::Any>,
    }

    WalletResult, "api", "WalletResult" {
        id: "id" => Str,
        name: "name" => Str,
        source: "source" => Str,
        accounts: "accounts" => Repeated<AccountResponse>,
        created_at: "createdAt" => Int64,
    }

    ExternalAddressParam, "api", "ExternalAddressParam" {
        id: "id" => Str,
        chain_type: "chainType" => Str,
        external_idx: "externalIdx" => Uint32,
    }

    ExternalAddressResult, "api", "ExternalAddressResult" {
        address: "address" => Str,
        derived_path: "derivedPath" => Str,
        r#type: "type" => Str,
    }

    ExternalAddressExtra, "api", "ExternalAddressExtra" {
        enc_xpub: "encXpub" => Str,
        external_address: "externalAddress" => Message<ExternalAddress>,
    }

    ExternalAddress, "api", "ExternalAddressExtra.ExternalAddress" {
        address: "address" => Str,
        derived_path: "derivedPath" => Str,
        r#type: "type" => Str,
    }

    CacheDerivedKeyParam, "api", "CacheDerivedKeyParam" {
        id: "id" => Str,
        derived_key: "derivedKey" => Str,
        temp_password: "tempPassword" => Str,
    }

    VerifyDerivedKeyParam, "api", "VerifyDerivedKeyParam" {
        id: "id" => Str,
        derived_key: "derivedKey" => Str,
    }

    DerivedKeyResult, "api", "DerivedKeyResult" {
        id: "id" => Str,
        derived_key: "derivedKey" => Str,
    }
}
