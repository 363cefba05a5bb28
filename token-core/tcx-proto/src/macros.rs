/// Implements `MessageName` and `PlainObject` for prost messages.
///
/// ```ignore
/// impl_plain_object! {
///     Utxo, "transaction", "Utxo" {
///         tx_hash: "txHash" => Str,
///         vout: "vout" => Int32,
///         amount: "amount" => Int64,
///     }
///     BtcForkTxInput, "transaction", "BtcForkTxInput" {
///         unspents: "unspents" => Repeated<Utxo>,
///     }
/// }
/// ```
///
/// Each field names the struct member, its plain-object key and its kind from
/// [`crate::field`].
#[macro_export]
macro_rules! impl_plain_object {
    ($(
        $msg:ty, $package:literal, $name:literal {
            $($field:ident : $key:literal => $kind:ident $(< $arg:ty >)?),* $(,)?
        }
    )*) => {$(
        impl $crate::MessageName for $msg {
            const PACKAGE: &'static str = $package;
            const NAME: &'static str = $name;
        }

        impl $crate::PlainObject for $msg {
            #[allow(unused_variables)]
            fn verify(object: &$crate::serde_json::Value) -> ::core::option::Option<String> {
                let object = match object.as_object() {
                    Some(object) => object,
                    None => return Some("object expected".to_string()),
                };
                $(
                    if let Some(value) = object.get($key).filter(|value| !value.is_null()) {
                        let reason = <$crate::field::$kind $(<$arg>)? as $crate::field::FieldKind>::verify(
                            $key, value,
                        );
                        if reason.is_some() {
                            return reason;
                        }
                    }
                )*
                None
            }

            #[allow(unused_variables, unused_mut)]
            fn from_object(object: &$crate::serde_json::Value) -> $crate::Result<Self> {
                let full_name = <Self as $crate::MessageName>::full_name();
                let object = object.as_object().ok_or_else(|| {
                    $crate::ProtoError::InvalidObject(format!("{}: object expected", full_name))
                })?;
                let mut message = <Self as ::core::default::Default>::default();
                $(
                    if let Some(value) = object.get($key).filter(|value| !value.is_null()) {
                        message.$field = <$crate::field::$kind $(<$arg>)? as $crate::field::FieldKind>::from_value(
                            &format!("{}.{}", full_name, $key),
                            value,
                        )?;
                    }
                )*
                Ok(message)
            }

            #[allow(unused_variables, unused_mut)]
            fn to_object(&self, options: &$crate::ConversionOptions) -> $crate::serde_json::Value {
                let mut object = $crate::serde_json::Map::new();
                $(
                    if let Some(value) = <$crate::field::$kind $(<$arg>)? as $crate::field::FieldKind>::to_value(
                        &self.$field,
                        options,
                    ) {
                        object.insert($key.to_string(), value);
                    }
                )*
                $crate::serde_json::Value::Object(object)
            }
        }
    )*};
}
