use std::fmt;
use std::str::FromStr;

use tcx_proto::MessageName;
use tcx_tron::TronMessageOutput;

use crate::api::*;
use crate::error_handling::ApiError;

macro_rules! api_methods {
    (@result ()) => { None };
    (@result $result:ty) => { Some(<$result as MessageName>::full_name()) };
    ($($method:ident => $name:literal, $param:ty, $result:tt;)+) => {
        /// Methods reachable through `TcxAction.method`.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ApiMethod {
            $($method,)+
        }

        impl ApiMethod {
            pub const ALL: &'static [ApiMethod] = &[$(ApiMethod::$method,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ApiMethod::$method => $name,)+
                }
            }

            /// Full name of the message carried in `TcxAction.param`.
            pub fn param_type(&self) -> String {
                match self {
                    $(ApiMethod::$method => <$param as MessageName>::full_name(),)+
                }
            }

            /// Full name of the reply message, `None` when the reply is empty or depends on the
            /// signed payload.
            pub fn result_type(&self) -> Option<String> {
                match self {
                    $(ApiMethod::$method => api_methods!(@result $result),)+
                }
            }
        }

        impl FromStr for ApiMethod {
            type Err = ApiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($name => Ok(ApiMethod::$method),)+
                    _ => Err(ApiError::UnsupportedMethod),
                }
            }
        }
    };
}

api_methods! {
    InitTokenCoreX => "init_token_core_x", InitTokenCoreXParam, ();
    HdStoreCreate => "hd_store_create", HdStoreCreateParam, WalletResult;
    HdStoreImport => "hd_store_import", HdStoreImportParam, WalletResult;
    HdStoreDerive => "hd_store_derive", HdStoreDeriveParam, AccountsResponse;
    HdStoreExport => "hd_store_export", WalletKeyParam, KeystoreCommonExportResult;
    HdStoreExtendedPublicKey => "hd_store_extended_public_key", HdStoreExtendedPublicKeyParam, HdStoreExtendedPublicKeyResponse;
    PrivateKeyStoreImport => "private_key_store_import", PrivateKeyStoreImportParam, WalletResult;
    PrivateKeyStoreExport => "private_key_store_export", PrivateKeyStoreExportParam, KeystoreCommonExportResult;
    KeystoreCommonVerify => "keystore_common_verify", WalletKeyParam, Response;
    KeystoreCommonDelete => "keystore_common_delete", WalletKeyParam, Response;
    KeystoreCommonExists => "keystore_common_exists", KeystoreCommonExistsParam, KeystoreCommonExistsResult;
    KeystoreCommonAccounts => "keystore_common_accounts", KeystoreCommonAccountsParam, AccountsResponse;
    SignTx => "sign_tx", SignParam, ();
    TronSignMsg => "tron_sign_msg", SignParam, TronMessageOutput;
    CalcExternalAddress => "calc_external_address", ExternalAddressParam, ExternalAddressResult;
    CacheDerivedKey => "cache_derived_key", CacheDerivedKeyParam, Response;
    VerifyDerivedKey => "verify_derived_key", VerifyDerivedKeyParam, DerivedKeyResult;
    GetDerivedKey => "get_derived_key", WalletKeyParam, DerivedKeyResult;
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
