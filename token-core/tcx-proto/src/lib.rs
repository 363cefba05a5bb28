//! TokenCore Proto
//! Runtime shared by every generated message in the token-core workspace: wire codec helpers,
//! message naming for `Any` envelopes and the plain-object (JSON-like) conversions the app
//! shell relies on.
mod any;
mod codec;
mod error;
pub mod field;
mod macros;
mod name;
mod object;

pub use crate::any::{pack_any, unpack_any};
pub use crate::codec::{encode_message, MessageCodec};
pub use crate::error::{ProtoError, Result};
pub use crate::name::{MessageName, TYPE_URL_PREFIX};
pub use crate::object::{
    BytesFormat, ConversionOptions, EnumFormat, LongFormat, PlainObject, ProtoEnum,
};

#[doc(hidden)]
pub use serde_json;
