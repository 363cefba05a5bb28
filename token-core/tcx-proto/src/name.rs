pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Fully qualified protobuf name of a message, used to tag `Any` payloads.
pub trait MessageName {
    const PACKAGE: &'static str;
    /// Nested messages carry their parent, e.g. `HdStoreDeriveParam.Derivation`.
    const NAME: &'static str;

    fn full_name() -> String {
        format!("{}.{}", Self::PACKAGE, Self::NAME)
    }

    fn type_url() -> String {
        format!("{}{}", TYPE_URL_PREFIX, Self::full_name())
    }

    /// True for `type.googleapis.com/<full name>`, any other `<host>/<full name>` and the bare
    /// full name.
    fn matches_type_url(type_url: &str) -> bool {
        type_url.rsplit('/').next() == Some(Self::full_name().as_str())
    }
}
