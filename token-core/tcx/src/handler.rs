use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use log::debug;
use prost::Message;
use tcx_common::{FromHex, ToHex};

use crate::api::TcxAction;
use crate::config::{self, IS_DEBUG};
use crate::error_handling::{landingpad, ApiError};
use crate::method::ApiMethod;
use crate::Result;

type Handler = Arc<dyn Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync>;

pub fn encode_message(msg: impl Message) -> Result<Vec<u8>> {
    if *IS_DEBUG.read() {
        debug!("{:#?}", msg);
    }
    Ok(tcx_proto::encode_message(&msg)?)
}

/// Routes a `TcxAction` to the handler registered for its method.
///
/// The dispatcher owns only the envelope: it decodes `param.value` as the handler's param type
/// and encodes whatever the handler returns. Handlers are shared, so a clone is a cheap
/// snapshot of the current table.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<ApiMethod, Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// Registers `handler` for `method`, replacing any previous one.
    pub fn register<P, R, F>(&mut self, method: ApiMethod, handler: F) -> &mut Self
    where
        P: Message + Default,
        R: Message,
        F: Fn(P) -> Result<R> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(move |data: &[u8]| {
            let param = P::decode(data)?;
            encode_message(handler(param)?)
        });
        self.handlers.insert(method, handler);
        self
    }

    /// Registers a handler working on the encoded param and reply, for methods whose reply type
    /// depends on the param, like `sign_tx`.
    pub fn register_raw<F>(&mut self, method: ApiMethod, handler: F) -> &mut Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.handlers.insert(method, Arc::new(handler));
        self
    }

    pub fn is_registered(&self, method: ApiMethod) -> bool {
        method == ApiMethod::InitTokenCoreX || self.handlers.contains_key(&method)
    }

    fn dispatch(&self, action: &TcxAction) -> Result<Vec<u8>> {
        let method = action.method.parse::<ApiMethod>()?;
        let param = action.param.as_ref().ok_or(ApiError::ParamMissing)?;
        debug!("dispatch {} with {}", method, param.type_url);

        match method {
            ApiMethod::InitTokenCoreX => {
                config::init_token_core_x(&param.value)?;
                Ok(vec![])
            }
            _ => {
                let handler = self
                    .handlers
                    .get(&method)
                    .ok_or_else(|| ApiError::HandlerNotRegistered(method.to_string()))?;
                handler(&param.value)
            }
        }
    }

    fn dispatch_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let action = TcxAction::decode(data)?;
        self.dispatch(&action)
    }

    /// Errors and panics raised while handling `action` end up as the thread's last error.
    pub fn call(&self, action: &TcxAction) -> Result<Vec<u8>> {
        landingpad(AssertUnwindSafe(|| self.dispatch(action)))
    }

    /// Same as `call` with `data` holding an encoded `TcxAction`.
    pub fn call_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        landingpad(AssertUnwindSafe(|| self.dispatch_bytes(data)))
    }

    /// Hex in, hex out. Returns an empty string on failure, `get_last_err_message` tells why.
    pub fn call_hex(&self, hex_str: &str) -> String {
        let reply = landingpad(AssertUnwindSafe(|| {
            let data = Vec::from_hex_auto(hex_str)?;
            self.dispatch_bytes(&data)
        }));
        match reply {
            Ok(reply) => reply.to_hex(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{KeystoreCommonAccountsParam, Response, WalletKeyParam};
    use crate::error_handling::{clear_last_error, last_error};
    use prost_types::Any;
    use tcx_proto::pack_any;

    fn verify_password(param: WalletKeyParam) -> Result<Response> {
        Ok(Response {
            is_success: param.password == "imToken1",
            error: String::new(),
        })
    }

    fn action(method: &str, param: Option<Any>) -> TcxAction {
        TcxAction {
            method: method.to_string(),
            param,
        }
    }

    #[test]
    fn test_typed_handler() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(ApiMethod::KeystoreCommonVerify, verify_password);
        let param = WalletKeyParam {
            id: "w1".to_string(),
            password: "imToken1".to_string(),
        };

        let reply = dispatcher
            .call(&action("keystore_common_verify", Some(pack_any(&param))))
            .unwrap();
        assert!(Response::decode(reply.as_slice()).unwrap().is_success);

        let reply = dispatcher
            .call(&action("KEYSTORE_COMMON_VERIFY", Some(pack_any(&param))))
            .unwrap();
        assert!(Response::decode(reply.as_slice()).unwrap().is_success);
    }

    #[test]
    fn test_dispatch_errors() {
        let dispatcher = Dispatcher::new();
        let param = pack_any(&KeystoreCommonAccountsParam { id: "w1".to_string() });

        clear_last_error();
        let err = dispatcher.call(&action("eth_sign", Some(param.clone()))).unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>(), Some(&ApiError::UnsupportedMethod));
        assert_eq!(last_error(), Some("unsupported_method".to_string()));

        let err = dispatcher.call(&action("keystore_common_accounts", None)).unwrap_err();
        assert_eq!(err.to_string(), "param_missing");

        let err = dispatcher
            .call(&action("keystore_common_accounts", Some(param)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "handler_not_registered# method: keystore_common_accounts"
        );
        assert!(!dispatcher.is_registered(ApiMethod::KeystoreCommonAccounts));
        assert!(dispatcher.is_registered(ApiMethod::InitTokenCoreX));
    }

    #[test]
    fn test_malformed_param() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(ApiMethod::KeystoreCommonVerify, verify_password);
        let param = Any {
            type_url: "api.WalletKeyParam".to_string(),
            value: vec![0x0a, 0x09, 0x77],
        };
        let err = dispatcher
            .call(&action("keystore_common_verify", Some(param)))
            .unwrap_err();
        assert!(err.downcast_ref::<prost::DecodeError>().is_some());
    }

    #[test]
    fn test_call_hex() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(ApiMethod::KeystoreCommonVerify, verify_password);
        let request = action(
            "keystore_common_verify",
            Some(pack_any(&WalletKeyParam {
                id: "w1".to_string(),
                password: "imToken1".to_string(),
            })),
        );

        let reply = dispatcher.call_hex(&request.encode_to_vec().to_hex());
        assert_eq!(reply, "0801");
        let reply = dispatcher.call_hex(&request.encode_to_vec().to_0x_hex());
        assert_eq!(reply, "0801");

        clear_last_error();
        assert_eq!(dispatcher.call_hex("0x0g"), "");
        assert_eq!(last_error(), Some("invalid_hex".to_string()));
    }
}
