use bytes::{BufMut, BytesMut};

/// Frame header: element count (4 bytes, little-endian).
pub const HEADER_SIZE: usize = 4;

/// Default maximum element count accepted by receivers.
///
/// Guards the count-driven allocation against a corrupt or hostile header
/// before any buffer is reserved.
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 24;

/// A fixed-width wire element.
///
/// The framing routines are generic over this trait, so the integer-array
/// and scalar-float paths share one encoder/decoder pair.
pub trait Element: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Append the little-endian encoding of `self` to `dst`.
    fn put(self, dst: &mut BytesMut);

    /// Decode one element from `src`, which holds exactly [`Self::WIDTH`] bytes.
    fn get(src: &[u8]) -> Self;
}

impl Element for i64 {
    const WIDTH: usize = 8;

    fn put(self, dst: &mut BytesMut) {
        dst.put_i64_le(self);
    }

    fn get(src: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(src);
        i64::from_le_bytes(raw)
    }
}

impl Element for f64 {
    const WIDTH: usize = 8;

    fn put(self, dst: &mut BytesMut) {
        dst.put_f64_le(self);
    }

    fn get(src: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(src);
        f64::from_le_bytes(raw)
    }
}

/// Encode a frame (header + elements) into `dst`.
pub(crate) fn encode_frame<E: Element>(elements: &[E], dst: &mut BytesMut) {
    dst.reserve(HEADER_SIZE + elements.len() * E::WIDTH);
    dst.put_u32_le(elements.len() as u32);
    for element in elements {
        element.put(dst);
    }
}

/// Decode `count` elements from the raw payload bytes.
pub(crate) fn decode_elements<E: Element>(payload: &[u8], count: usize) -> Vec<E> {
    debug_assert_eq!(payload.len(), count * E::WIDTH);
    payload.chunks_exact(E::WIDTH).map(E::get).collect()
}
