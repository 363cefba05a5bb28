use anyhow::Error;
use parking_lot::RwLock;
use prost::Message;
use std::result;
use tcx_common::ToHex;

pub mod api;
mod codec;
pub mod config;
pub mod error_handling;
pub mod handler;
#[macro_use]
mod macros;
pub mod method;
pub mod payload;

use crate::api::Response;
use crate::error_handling::{clear_last_error, last_error};
use crate::handler::encode_message;

pub use crate::config::{config, set_debug, CoreConfig, IS_DEBUG};
pub use crate::error_handling::ApiError;
pub use crate::handler::Dispatcher;
pub use crate::method::ApiMethod;
pub use crate::payload::SignPayload;

#[macro_use]
extern crate lazy_static;

pub type Result<T> = result::Result<T, Error>;

lazy_static! {
    static ref DISPATCHER: RwLock<Dispatcher> = RwLock::new(Dispatcher::new());
}

/// Installs `handler` on the dispatcher behind `call_tcx_api`.
pub fn register_handler<P, R, F>(method: ApiMethod, handler: F)
where
    P: Message + Default,
    R: Message,
    F: Fn(P) -> Result<R> + Send + Sync + 'static,
{
    DISPATCHER.write().register(method, handler);
}

pub fn register_raw_handler<F>(method: ApiMethod, handler: F)
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync + 'static,
{
    DISPATCHER.write().register_raw(method, handler);
}

/// dispatch protobuf rpc call
pub fn call_tcx_api(hex_str: &str) -> String {
    // handlers run without the lock held, they may register or call back in
    let dispatcher = DISPATCHER.read().clone();
    dispatcher.call_hex(hex_str)
}

pub fn clear_err() {
    clear_last_error();
}

/// Hex encoded `Response` describing the last failed call on this thread, empty when there is
/// none.
pub fn get_last_err_message() -> String {
    match last_error() {
        Some(error) => {
            let rsp = Response {
                is_success: false,
                error,
            };
            encode_message(rsp)
                .map(|bytes| bytes.to_hex())
                .unwrap_or_default()
        }
        None => String::new(),
    }
}
