//! Length-delimited framing
//!
//! Each frame is a varint byte count followed by one encoded record, so
//! several records can share a stream or file.

use std::io::{ErrorKind, Read, Write};

use crate::config::Config;
use crate::error::{DecodeError, Error, Result};
use crate::message::Message;

/// Longest varint a length prefix may take
const MAX_PREFIX_LEN: usize = 10;

/// Encode a record with its length prefix
pub fn encode_delimited<M: Message>(message: &M) -> Vec<u8> {
    prost::Message::encode_length_delimited_to_vec(message)
}

/// Decode one length-prefixed record
///
/// Returns the record and the number of bytes consumed.
pub fn decode_delimited<M: Message>(bytes: &[u8]) -> std::result::Result<(M, usize), DecodeError> {
    let mut buf = bytes;
    let len = prost::decode_length_delimiter(&mut buf)?;
    let prefix = bytes.len() - buf.len();
    let message = M::decode_length(buf, len)?;
    Ok((message, prefix + len))
}

/// Write one framed record to a stream
pub fn write_delimited<W: Write, M: Message>(writer: &mut W, message: &M) -> Result<()> {
    let bytes = encode_delimited(message);
    writer.write_all(&bytes)?;
    writer.flush()?;
    tracing::trace!(record = M::NAME, bytes = bytes.len(), "wrote frame");
    Ok(())
}

/// Read one framed record from a stream
///
/// Returns `Ok(None)` when the stream ends cleanly between frames.
pub fn read_delimited<R: Read, M: Message>(reader: &mut R, config: &Config) -> Result<Option<M>> {
    let Some(len) = read_length_prefix(reader)? else {
        return Ok(None);
    };

    // Validate payload length
    if len > config.max_frame_size {
        return Err(Error::FrameTooLarge {
            size: len,
            max: config.max_frame_size,
        });
    }

    let mut payload = vec![0u8; len];
    if let Err(e) = reader.read_exact(&mut payload) {
        if e.kind() == ErrorKind::UnexpectedEof {
            return Err(Error::IncompleteFrame(format!(
                "expected {} payload bytes",
                len
            )));
        }
        return Err(e.into());
    }

    tracing::trace!(record = M::NAME, bytes = len, "read frame");
    Ok(Some(<M as Message>::decode(&payload)?))
}

/// Read the varint length prefix, `None` on a clean end of stream
fn read_length_prefix<R: Read>(reader: &mut R) -> Result<Option<usize>> {
    let mut prefix = Vec::with_capacity(MAX_PREFIX_LEN);

    loop {
        let mut byte = [0u8; 1];
        match reader.read(&mut byte) {
            Ok(0) if prefix.is_empty() => return Ok(None),
            Ok(0) => {
                return Err(Error::IncompleteFrame(format!(
                    "length prefix cut after {} bytes",
                    prefix.len()
                )))
            }
            Ok(_) => {
                prefix.push(byte[0]);
                if byte[0] < 0x80 || prefix.len() == MAX_PREFIX_LEN {
                    break;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let len = prost::decode_length_delimiter(prefix.as_slice()).map_err(DecodeError::from)?;
    Ok(Some(len))
}
