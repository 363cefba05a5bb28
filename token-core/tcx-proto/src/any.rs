use log::trace;
use prost::Message;
use prost_types::Any;

use crate::error::{ProtoError, Result};
use crate::name::MessageName;

crate::impl_plain_object! {
    Any, "google.protobuf", "Any" {
        type_url: "type_url" => Str,
        value: "value" => Bytes,
    }
}

/// Wraps `message` into an `Any` tagged with its type URL.
pub fn pack_any<M: Message + MessageName>(message: &M) -> Any {
    Any {
        type_url: M::type_url(),
        value: message.encode_to_vec(),
    }
}

/// Decodes the payload of `any` as `M`. The envelope carries no schema of its own, so a type URL
/// naming another message is rejected before touching the bytes.
pub fn unpack_any<M: Message + Default + MessageName>(any: &Any) -> Result<M> {
    if !M::matches_type_url(&any.type_url) {
        return Err(ProtoError::TypeUrlMismatch {
            expected: M::type_url(),
            actual: any.type_url.clone(),
        });
    }
    trace!("unpack {} ({} bytes)", any.type_url, any.value.len());
    Ok(M::decode(any.value.as_slice())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConversionOptions, PlainObject};
    use serde_json::json;

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct Probe {
        #[prost(string, tag = "1")]
        value: String,
    }

    impl MessageName for Probe {
        const PACKAGE: &'static str = "transaction";
        const NAME: &'static str = "Probe";
    }

    #[test]
    fn test_pack_unpack() {
        let probe = Probe {
            value: "0x68656c6c6f".to_string(),
        };
        let any = pack_any(&probe);
        assert_eq!(any.type_url, "type.googleapis.com/transaction.Probe");
        assert_eq!(unpack_any::<Probe>(&any).unwrap(), probe);
    }

    #[test]
    fn test_unpack_type_url_mismatch() {
        let any = Any {
            type_url: "type.googleapis.com/transaction.Other".to_string(),
            value: vec![],
        };
        let err = unpack_any::<Probe>(&any).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type_url_mismatch# expected: type.googleapis.com/transaction.Probe, actual: type.googleapis.com/transaction.Other"
        );
    }

    #[test]
    fn test_unpack_malformed_value() {
        let any = Any {
            type_url: "transaction.Probe".to_string(),
            value: vec![0x0a, 0x05, 0x68],
        };
        assert!(matches!(unpack_any::<Probe>(&any), Err(ProtoError::Decode(_))));
    }

    #[test]
    fn test_any_plain_object() {
        let any = Any {
            type_url: "type.googleapis.com/transaction.Probe".to_string(),
            value: vec![0x0a, 0x01, 0x61],
        };
        let object = any.to_json();
        assert_eq!(
            object,
            json!({"type_url": "type.googleapis.com/transaction.Probe", "value": "CgFh"})
        );
        assert_eq!(Any::verify(&object), None);
        assert_eq!(Any::from_object(&object).unwrap(), any);

        let object = any.to_object(&ConversionOptions::default());
        assert_eq!(object["value"], json!([10, 1, 97]));
        assert_eq!(Any::from_object(&object).unwrap(), any);

        assert_eq!(
            Any::verify(&json!({"type_url": 1})),
            Some("type_url: string expected".to_string())
        );
        assert_eq!(Any::verify(&json!([])), Some("object expected".to_string()));
    }
}
