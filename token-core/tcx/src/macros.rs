/// Builds `SignPayload`, one variant per chain input message plus an `Opaque` fallback that keeps
/// envelopes whose type URL is not known here.
///
/// ```ignore
/// sign_payloads! {
///     BtcForkTxInput => tcx_btc_fork::bitcoin_fork::TransactionInput, tcx_btc_fork::bitcoin_fork::CHAINS;
/// }
/// ```
macro_rules! sign_payloads {
    ($($variant:ident => $payload:ty, $chains:expr;)+) => {
        #[derive(Clone, Debug, PartialEq)]
        pub enum SignPayload {
            $($variant($payload),)+
            Opaque(::prost_types::Any),
        }

        impl SignPayload {
            /// Resolves `any` against the known payload types, falling back to `Opaque`.
            pub fn from_any(any: &::prost_types::Any) -> $crate::Result<Self> {
                $(
                    if <$payload as ::tcx_proto::MessageName>::matches_type_url(&any.type_url) {
                        let payload = ::tcx_proto::unpack_any::<$payload>(any)?;
                        return Ok(SignPayload::$variant(payload));
                    }
                )+
                ::log::trace!("keep {} as opaque payload", any.type_url);
                Ok(SignPayload::Opaque(any.clone()))
            }

            pub fn to_any(&self) -> ::prost_types::Any {
                match self {
                    $(SignPayload::$variant(payload) => ::tcx_proto::pack_any(payload),)+
                    SignPayload::Opaque(any) => any.clone(),
                }
            }

            pub fn type_url(&self) -> String {
                match self {
                    $(SignPayload::$variant(_) => <$payload as ::tcx_proto::MessageName>::type_url(),)+
                    SignPayload::Opaque(any) => any.type_url.clone(),
                }
            }

            /// Chain types that accept this payload. Empty for opaque payloads.
            pub fn chains(&self) -> &'static [&'static str] {
                match self {
                    $(SignPayload::$variant(_) => &$chains,)+
                    SignPayload::Opaque(_) => &[],
                }
            }

            pub fn supports_chain(&self, chain_type: &str) -> bool {
                self.chains().contains(&chain_type)
            }
        }

        $(
            impl From<$payload> for SignPayload {
                fn from(payload: $payload) -> Self {
                    SignPayload::$variant(payload)
                }
            }
        )+
    };
}
