use std::any::Any;
use std::cell::RefCell;
use std::panic;

use anyhow::anyhow;
use log::warn;
use thiserror::Error;

use crate::Result;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("unsupported_method")]
    UnsupportedMethod,
    #[error("param_missing")]
    ParamMissing,
    #[error("handler_not_registered# method: {0}")]
    HandlerNotRegistered(String),
}

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = RefCell::new(None);
}

fn notify_err(err: &anyhow::Error) {
    warn!("call failed: {:#}", err);
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(err.to_string());
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown_panic".to_string()
    }
}

/// Runs `f`, turning both returned errors and panics into an `Err` whose message is kept as the
/// thread's last error.
pub fn landingpad<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + panic::UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(Ok(ret)) => Ok(ret),
        Ok(Err(err)) => {
            notify_err(&err);
            Err(err)
        }
        Err(payload) => {
            let err = anyhow!(panic_message(payload.as_ref()));
            notify_err(&err);
            Err(err)
        }
    }
}

pub fn last_error() -> Option<String> {
    LAST_ERROR.with(|e| e.borrow().clone())
}

pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}
