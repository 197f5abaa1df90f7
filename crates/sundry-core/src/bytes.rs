// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Little-endian packing of primitive numbers.
//!
//! Signed integers and floats travel as their unsigned bit patterns, so
//! `-1_i16` packs to `[0xFF, 0xFF]` and `1.0_f32` to `[0, 0, 0x80, 0x3F]`.
//! Decoding checks the input length and reports short buffers instead of
//! panicking.

use ::bytes::{Buf, BufMut};
use thiserror::Error;

/// Errors produced while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BytesError {
    /// Input ended before a full value could be read.
    #[error("need {needed} bytes, only {available} available")]
    Truncated {
        /// Width of the requested type.
        needed: usize,
        /// Bytes left in the input.
        available: usize,
    },
}

/// Fixed-width little-endian encoding.
pub trait LeBytes: Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Appends the encoding of `self` to `buf`.
    fn put_le<B: BufMut>(self, buf: &mut B);

    /// Consumes `SIZE` bytes from `buf`.
    ///
    /// # Panics
    /// Panics if fewer than `SIZE` bytes remain; [`read_le`] checks first.
    fn get_le<B: Buf>(buf: &mut B) -> Self;
}

macro_rules! impl_le_bytes {
    ($($t:ty => $put:ident, $get:ident);* $(;)?) => {$(
        impl LeBytes for $t {
            const SIZE: usize = core::mem::size_of::<$t>();

            fn put_le<B: BufMut>(self, buf: &mut B) {
                buf.$put(self);
            }

            fn get_le<B: Buf>(buf: &mut B) -> Self {
                buf.$get()
            }
        }
    )*};
}

impl_le_bytes! {
    u8 => put_u8, get_u8;
    i8 => put_i8, get_i8;
    u16 => put_u16_le, get_u16_le;
    i16 => put_i16_le, get_i16_le;
    u32 => put_u32_le, get_u32_le;
    i32 => put_i32_le, get_i32_le;
    u64 => put_u64_le, get_u64_le;
    i64 => put_i64_le, get_i64_le;
    f32 => put_f32_le, get_f32_le;
    f64 => put_f64_le, get_f64_le;
}

/// Encodes `value` into a fresh vector.
pub fn to_le_vec<T: LeBytes>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::SIZE);
    value.put_le(&mut out);
    out
}

/// Appends the encoding of `value` to `buf`.
pub fn write_le<T: LeBytes, B: BufMut>(buf: &mut B, value: T) {
    value.put_le(buf);
}

/// Consumes one `T` from the front of `buf`.
pub fn read_le<T: LeBytes, B: Buf>(buf: &mut B) -> Result<T, BytesError> {
    let available = buf.remaining();
    if available < T::SIZE {
        return Err(BytesError::Truncated {
            needed: T::SIZE,
            available,
        });
    }
    Ok(T::get_le(buf))
}

/// Decodes a `T` from the first `T::SIZE` bytes of `bytes`; trailing bytes
/// are ignored.
pub fn from_le_slice<T: LeBytes>(bytes: &[u8]) -> Result<T, BytesError> {
    let mut cursor = bytes;
    read_le(&mut cursor)
}
