use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProtoError>;

#[derive(Error, Debug)]
pub enum ProtoError {
    #[error("decode_failed# {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("encode_failed# {0}")]
    Encode(#[from] prost::EncodeError),
    #[error("length_out_of_range# requested: {requested}, available: {available}")]
    LengthOutOfRange { requested: usize, available: usize },
    #[error("type_url_mismatch# expected: {expected}, actual: {actual}")]
    TypeUrlMismatch { expected: String, actual: String },
    #[error("invalid_object# {0}")]
    InvalidObject(String),
}
