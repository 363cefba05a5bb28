use serde_json::Value;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LongFormat {
    /// Exact JSON integer.
    #[default]
    Number,
    /// Decimal string.
    String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnumFormat {
    #[default]
    Number,
    /// Variant name, e.g. `PRIVATE_KEY`. Unknown numbers stay numeric.
    Name,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BytesFormat {
    /// Array of octets.
    #[default]
    Array,
    Base64,
}

/// Controls how `PlainObject::to_object` renders a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    pub longs: LongFormat,
    pub enums: EnumFormat,
    pub bytes: BytesFormat,
    /// Also emit fields holding their zero value; absent sub-messages become `null`.
    pub defaults: bool,
    /// Emit empty repeated fields as `[]`.
    pub arrays: bool,
}

impl ConversionOptions {
    /// Preset used by `to_json`: 64-bit integers, enums and bytes rendered as strings.
    pub fn json() -> Self {
        ConversionOptions {
            longs: LongFormat::String,
            enums: EnumFormat::Name,
            bytes: BytesFormat::Base64,
            defaults: false,
            arrays: false,
        }
    }
}

/// Conversions between a message and an untyped JSON-like mapping keyed by lowerCamelCase
/// field names.
pub trait PlainObject: Sized {
    /// Returns `None` when `object` could be converted without loss, otherwise the reason for the
    /// first offending field.
    fn verify(object: &Value) -> Option<String>;

    /// Best-effort coercion of every known field. Only structural mismatches fail.
    fn from_object(object: &Value) -> Result<Self>;

    fn to_object(&self, options: &ConversionOptions) -> Value;

    fn to_json(&self) -> Value {
        self.to_object(&ConversionOptions::json())
    }
}

/// Name/number table of a protobuf enum.
pub trait ProtoEnum: Sized + Copy {
    fn from_number(value: i32) -> Option<Self>;

    fn from_name(name: &str) -> Option<Self>;

    fn number(self) -> i32;

    fn name(self) -> &'static str;
}
