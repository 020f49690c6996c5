//! n-bit unsigned integer encoding (Spec 7.1.9).
//!
//! Represents an unsigned integer value using exactly `n` bits in the
//! bit-packed stream. When `n` is 0 the value is omitted entirely. The
//! width `n` comes from [`crate::bit_width::coding_length`] over the number
//! of distinguishable values of the field.

use crate::Result;
use crate::bitstream::{BitReader, BitWriter};

/// Encodes an unsigned integer using exactly `n` bits (Spec 7.1.9).
///
/// # Panics
///
/// Panics if `n > 32` or if `value` does not fit in `n` bits.
#[inline]
pub fn encode(writer: &mut BitWriter, value: u32, n: u8) {
    assert!(n <= 32, "bit width must be 0..=32, got {n}");
    assert!(
        n == 32 || value < (1u32 << n),
        "value {value} does not fit in {n} bits"
    );
    writer.write_bits(value, n);
}

/// Decodes an unsigned integer from exactly `n` bits (Spec 7.1.9).
///
/// # Panics
///
/// Panics if `n > 32`.
#[inline]
pub fn decode(reader: &mut BitReader, n: u8) -> Result<u32> {
    reader.read_bits(n)
}
