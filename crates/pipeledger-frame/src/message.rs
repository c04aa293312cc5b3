use std::io::{Read, Write};

use bytes::BytesMut;
use pipeledger_pipe::{read_exact, write_exact};

use crate::codec::{decode_elements, encode_frame, Element, DEFAULT_MAX_ELEMENTS, HEADER_SIZE};
use crate::error::{FrameError, Result};

/// A decoded framed message.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A variable-length array of signed integers.
    IntArray(Vec<i64>),
    /// A single floating-point result, framed with a count of 1.
    FloatScalar(f64),
}

/// Which payload a channel role expects.
///
/// The wire carries no type tag; the role of a response channel determines
/// the element decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    IntArray,
    FloatScalar,
}

/// Send a count-prefixed array of elements.
pub fn send_array<W: Write, E: Element>(writer: &mut W, elements: &[E]) -> Result<()> {
    if elements.len() > DEFAULT_MAX_ELEMENTS {
        return Err(FrameError::CountTooLarge {
            count: elements.len(),
            max: DEFAULT_MAX_ELEMENTS,
        });
    }

    let mut buf = BytesMut::new();
    encode_frame(elements, &mut buf);
    write_exact(writer, &buf)?;
    Ok(())
}

/// Receive a count-prefixed array of elements.
///
/// Reads the count header first, then exactly `count * WIDTH` payload
/// bytes. A peer close before the declared payload arrives surfaces as
/// [`FrameError::Truncated`].
pub fn recv_array<R: Read, E: Element>(reader: &mut R) -> Result<Vec<E>> {
    let count = recv_count(reader)?;
    recv_elements(reader, count)
}

/// Send a scalar result using the uniform header shape (count = 1).
pub fn send_scalar<W: Write, E: Element>(writer: &mut W, value: E) -> Result<()> {
    send_array(writer, &[value])
}

/// Receive a scalar result; the declared count must be exactly 1.
pub fn recv_scalar<R: Read, E: Element>(reader: &mut R) -> Result<E> {
    let count = recv_count(reader)?;
    if count != 1 {
        return Err(FrameError::ScalarCount { count });
    }
    let elements: Vec<E> = recv_elements(reader, 1)?;
    Ok(elements[0])
}

/// Send a typed message envelope.
pub fn send_message<W: Write>(writer: &mut W, message: &Message) -> Result<()> {
    match message {
        Message::IntArray(values) => send_array(writer, values),
        Message::FloatScalar(value) => send_scalar(writer, *value),
    }
}

/// Receive a typed message envelope, decoding per the expected kind.
pub fn recv_message<R: Read>(reader: &mut R, kind: PayloadKind) -> Result<Message> {
    match kind {
        PayloadKind::IntArray => Ok(Message::IntArray(recv_array(reader)?)),
        PayloadKind::FloatScalar => Ok(Message::FloatScalar(recv_scalar(reader)?)),
    }
}

fn recv_count<R: Read>(reader: &mut R) -> Result<usize> {
    let mut header = [0u8; HEADER_SIZE];
    read_exact(reader, &mut header).map_err(FrameError::from_read)?;

    let count = u32::from_le_bytes(header) as usize;
    if count > DEFAULT_MAX_ELEMENTS {
        return Err(FrameError::CountTooLarge {
            count,
            max: DEFAULT_MAX_ELEMENTS,
        });
    }
    tracing::trace!(count, "frame header received");
    Ok(count)
}

fn recv_elements<R: Read, E: Element>(reader: &mut R, count: usize) -> Result<Vec<E>> {
    let mut payload = vec![0u8; count * E::WIDTH];
    read_exact(reader, &mut payload).map_err(FrameError::from_read)?;
    Ok(decode_elements(&payload, count))
}
