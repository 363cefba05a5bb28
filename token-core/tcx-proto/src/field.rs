//! Field kinds used by `impl_plain_object!`.
//!
//! Each kind knows how to check, coerce and render one protobuf field type inside a plain
//! object. Coercion follows the loose rules of the app shell's JavaScript runtime: numbers
//! wrap into 32 bits, booleans come from truthiness, 64-bit integers may arrive as strings or
//! as `{low, high}` halves.
use std::marker::PhantomData;

use serde_json::{Number, Value};

use crate::error::{ProtoError, Result};
use crate::object::{BytesFormat, ConversionOptions, EnumFormat, LongFormat, PlainObject, ProtoEnum};

pub trait FieldKind {
    type Value;

    fn verify(key: &str, value: &Value) -> Option<String>;

    /// `path` is the fully qualified field name used in error messages.
    fn from_value(path: &str, value: &Value) -> Result<Self::Value>;

    /// `None` means the field is left out of the rendered object.
    fn to_value(value: &Self::Value, options: &ConversionOptions) -> Option<Value>;
}

pub struct Str;
pub struct Bool;
pub struct Int32;
pub struct Uint32;
pub struct Int64;
pub struct Bytes;
pub struct Message<M>(PhantomData<M>);
pub struct Repeated<M>(PhantomData<M>);
pub struct Enumeration<E>(PhantomData<E>);

fn expected(key: &str, kind: &str) -> Option<String> {
    Some(format!("{}: {} expected", key, kind))
}

fn integral(number: &Number) -> Option<i128> {
    if let Some(v) = number.as_i64() {
        return Some(i128::from(v));
    }
    if let Some(v) = number.as_u64() {
        return Some(i128::from(v));
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i128)
}

fn integral_in(value: &Value, min: i128, max: i128) -> bool {
    match value {
        Value::Number(n) => integral(n).map_or(false, |v| v >= min && v <= max),
        _ => false,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Modulo 2^32 reduction of whatever numeric value `value` carries.
fn wrap_u32(value: &Value) -> u32 {
    let exact = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|v| v as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if let Some(v) = exact {
        return v as u32;
    }
    let f = to_f64(value);
    if !f.is_finite() {
        return 0;
    }
    f.trunc().rem_euclid(4_294_967_296.0) as u32
}

fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| v as i64))
            .unwrap_or_else(|| n.as_f64().map_or(0, |f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<u64>().ok().map(|v| v as i64))
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Object(object) => match (object.get("low"), object.get("high")) {
            (Some(low), Some(high)) => {
                (i64::from(wrap_u32(high) as i32) << 32) | i64::from(wrap_u32(low))
            }
            _ => 0,
        },
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn is_long(value: &Value) -> bool {
    match value {
        Value::Number(_) => integral_in(value, i128::from(i64::MIN), i128::from(i64::MAX)),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        Value::Object(object) => match (object.get("low"), object.get("high")) {
            (Some(low), Some(high)) => {
                integral_in(low, i128::from(i32::MIN), i128::from(u32::MAX))
                    && integral_in(high, i128::from(i32::MIN), i128::from(u32::MAX))
            }
            _ => false,
        },
        _ => false,
    }
}

impl FieldKind for Str {
    type Value = String;

    fn verify(key: &str, value: &Value) -> Option<String> {
        if value.is_string() {
            None
        } else {
            expected(key, "string")
        }
    }

    fn from_value(_path: &str, value: &Value) -> Result<String> {
        Ok(match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    fn to_value(value: &String, options: &ConversionOptions) -> Option<Value> {
        if value.is_empty() && !options.defaults {
            return None;
        }
        Some(Value::String(value.clone()))
    }
}

impl FieldKind for Bool {
    type Value = bool;

    fn verify(key: &str, value: &Value) -> Option<String> {
        if value.is_boolean() {
            None
        } else {
            expected(key, "boolean")
        }
    }

    fn from_value(_path: &str, value: &Value) -> Result<bool> {
        Ok(truthy(value))
    }

    fn to_value(value: &bool, options: &ConversionOptions) -> Option<Value> {
        if !*value && !options.defaults {
            return None;
        }
        Some(Value::Bool(*value))
    }
}

impl FieldKind for Int32 {
    type Value = i32;

    fn verify(key: &str, value: &Value) -> Option<String> {
        if integral_in(value, i128::from(i32::MIN), i128::from(i32::MAX)) {
            None
        } else {
            expected(key, "integer")
        }
    }

    fn from_value(_path: &str, value: &Value) -> Result<i32> {
        Ok(wrap_u32(value) as i32)
    }

    fn to_value(value: &i32, options: &ConversionOptions) -> Option<Value> {
        if *value == 0 && !options.defaults {
            return None;
        }
        Some(Value::from(*value))
    }
}

impl FieldKind for Uint32 {
    type Value = u32;

    fn verify(key: &str, value: &Value) -> Option<String> {
        if integral_in(value, 0, i128::from(u32::MAX)) {
            None
        } else {
            expected(key, "integer")
        }
    }

    fn from_value(_path: &str, value: &Value) -> Result<u32> {
        Ok(wrap_u32(value))
    }

    fn to_value(value: &u32, options: &ConversionOptions) -> Option<Value> {
        if *value == 0 && !options.defaults {
            return None;
        }
        Some(Value::from(*value))
    }
}

impl FieldKind for Int64 {
    type Value = i64;

    fn verify(key: &str, value: &Value) -> Option<String> {
        if is_long(value) {
            None
        } else {
            expected(key, "integer|Long")
        }
    }

    fn from_value(_path: &str, value: &Value) -> Result<i64> {
        Ok(to_i64(value))
    }

    fn to_value(value: &i64, options: &ConversionOptions) -> Option<Value> {
        if *value == 0 && !options.defaults {
            return None;
        }
        Some(match options.longs {
            LongFormat::Number => Value::from(*value),
            LongFormat::String => Value::String(value.to_string()),
        })
    }
}

impl FieldKind for Bytes {
    type Value = Vec<u8>;

    fn verify(key: &str, value: &Value) -> Option<String> {
        let valid = match value {
            Value::String(s) => base64::decode(s).is_ok(),
            Value::Array(items) => items.iter().all(|item| integral_in(item, 0, 255)),
            _ => false,
        };
        if valid {
            None
        } else {
            expected(key, "buffer")
        }
    }

    fn from_value(path: &str, value: &Value) -> Result<Vec<u8>> {
        match value {
            Value::String(s) => base64::decode(s)
                .map_err(|_| ProtoError::InvalidObject(format!("{}: invalid encoding", path))),
            Value::Array(items) => Ok(items.iter().map(|item| wrap_u32(item) as u8).collect()),
            _ => Ok(vec![]),
        }
    }

    fn to_value(value: &Vec<u8>, options: &ConversionOptions) -> Option<Value> {
        if value.is_empty() && !options.defaults {
            return None;
        }
        Some(match options.bytes {
            BytesFormat::Base64 => Value::String(base64::encode(value)),
            BytesFormat::Array => Value::Array(value.iter().map(|b| Value::from(*b)).collect()),
        })
    }
}

impl<M: PlainObject> FieldKind for Message<M> {
    type Value = Option<M>;

    fn verify(key: &str, value: &Value) -> Option<String> {
        M::verify(value).map(|reason| format!("{}.{}", key, reason))
    }

    fn from_value(path: &str, value: &Value) -> Result<Option<M>> {
        if !value.is_object() {
            return Err(ProtoError::InvalidObject(format!("{}: object expected", path)));
        }
        Ok(Some(M::from_object(value)?))
    }

    fn to_value(value: &Option<M>, options: &ConversionOptions) -> Option<Value> {
        match value {
            Some(message) => Some(message.to_object(options)),
            None if options.defaults => Some(Value::Null),
            None => None,
        }
    }
}

impl<M: PlainObject> FieldKind for Repeated<M> {
    type Value = Vec<M>;

    fn verify(key: &str, value: &Value) -> Option<String> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return expected(key, "array"),
        };
        items
            .iter()
            .find_map(|item| M::verify(item))
            .map(|reason| format!("{}.{}", key, reason))
    }

    fn from_value(path: &str, value: &Value) -> Result<Vec<M>> {
        let items = value
            .as_array()
            .ok_or_else(|| ProtoError::InvalidObject(format!("{}: array expected", path)))?;
        items
            .iter()
            .map(|item| {
                if item.is_object() {
                    M::from_object(item)
                } else {
                    Err(ProtoError::InvalidObject(format!("{}: object expected", path)))
                }
            })
            .collect()
    }

    fn to_value(value: &Vec<M>, options: &ConversionOptions) -> Option<Value> {
        if value.is_empty() && !(options.arrays || options.defaults) {
            return None;
        }
        Some(Value::Array(
            value.iter().map(|item| item.to_object(options)).collect(),
        ))
    }
}

impl<E: ProtoEnum> FieldKind for Enumeration<E> {
    type Value = i32;

    fn verify(key: &str, value: &Value) -> Option<String> {
        let known = match value {
            Value::String(name) => E::from_name(name).is_some(),
            Value::Number(n) => integral(n)
                .and_then(|v| i32::try_from(v).ok())
                .and_then(E::from_number)
                .is_some(),
            _ => false,
        };
        if known {
            None
        } else {
            expected(key, "enum value")
        }
    }

    fn from_value(_path: &str, value: &Value) -> Result<i32> {
        Ok(match value {
            Value::String(name) => E::from_name(name).map_or(0, E::number),
            Value::Number(_) => wrap_u32(value) as i32,
            _ => 0,
        })
    }

    fn to_value(value: &i32, options: &ConversionOptions) -> Option<Value> {
        if *value == 0 && !options.defaults {
            return None;
        }
        Some(match (options.enums, E::from_number(*value)) {
            (EnumFormat::Name, Some(known)) => Value::String(known.name().to_string()),
            _ => Value::from(*value),
        })
    }
}
