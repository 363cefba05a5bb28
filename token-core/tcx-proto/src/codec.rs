use bytes::BytesMut;
use prost::Message;

use crate::error::{ProtoError, Result};

/// Encode a message into a freshly allocated buffer.
pub fn encode_message(msg: &impl Message) -> Result<Vec<u8>> {
    let mut buf = BytesMut::with_capacity(msg.encoded_len());
    msg.encode(&mut buf)?;
    Ok(buf.to_vec())
}

/// Buffer level encode/decode entry points shared by all generated messages.
///
/// Encoding never validates: whatever the fields hold is written, fields equal to their zero
/// value are skipped. Decoding skips unknown tags and fails on truncated input, bad varints
/// or a wire type that does not match a known field.
pub trait MessageCodec: Message + Default {
    /// Appends the encoded message to `buf`.
    fn encode_into(&self, buf: &mut BytesMut) -> Result<()> {
        buf.reserve(self.encoded_len());
        self.encode(buf)?;
        Ok(())
    }

    /// Appends a varint length prefix followed by the encoded message.
    fn encode_delimited_into(&self, buf: &mut BytesMut) -> Result<()> {
        let len = self.encoded_len();
        buf.reserve(len + prost::length_delimiter_len(len));
        self.encode_length_delimited(buf)?;
        Ok(())
    }

    fn encode_delimited_to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::new();
        self.encode_delimited_into(&mut buf)?;
        Ok(buf.to_vec())
    }

    /// Decodes the first `length` bytes of `buf`, or all of it when no length is given.
    fn decode_message(buf: &[u8], length: Option<usize>) -> Result<Self> {
        let data = match length {
            Some(requested) if requested > buf.len() => {
                return Err(ProtoError::LengthOutOfRange {
                    requested,
                    available: buf.len(),
                })
            }
            Some(requested) => &buf[..requested],
            None => buf,
        };
        Ok(Self::decode(data)?)
    }

    /// Reads one length-delimited message and advances `buf` past it, leaving any trailing
    /// bytes for the caller.
    fn decode_delimited(buf: &mut &[u8]) -> Result<Self> {
        Ok(Self::decode_length_delimited(buf)?)
    }
}

impl<M: Message + Default> MessageCodec for M {}
