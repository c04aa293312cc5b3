//! Count-prefixed message framing for pipeledger channels.
//!
//! Every message is framed as:
//! - A 4-byte little-endian element count
//! - `count` fixed-width little-endian elements
//!
//! The element width is not carried on the wire; each channel role knows
//! which payload it expects, so one generic receive routine serves both
//! integer arrays and scalar floats by varying only the element codec.
//! Scalar results reuse the same header shape with the count fixed at 1.

pub mod codec;
pub mod error;
pub mod message;

pub use codec::{Element, DEFAULT_MAX_ELEMENTS, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use message::{
    recv_array, recv_message, recv_scalar, send_array, send_message, send_scalar, Message,
    PayloadKind,
};
