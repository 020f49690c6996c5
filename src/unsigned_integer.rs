//! Variable-length 7-bit unsigned integer encoding (Spec 7.1.6).
//!
//! Each octet has a continuation bit (MSB) and 7 data bits. The least
//! significant group is written first; the last octet has continuation = 0.
//! [`crate::bit_width::seven_bit_block_count`] liefert die exakte Anzahl
//! Oktette, die ein Wert belegen wird.

use crate::bitstream::{BitReader, BitWriter};
use crate::{Error, Result};

/// Encodes a `u32` as a variable-length unsigned integer (Spec 7.1.6).
#[inline]
pub fn encode(writer: &mut BitWriter, value: u32) {
    let mut v = value;
    loop {
        let low7 = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            writer.write_byte_aligned(low7);
            return;
        }
        writer.write_byte_aligned(0x80 | low7);
    }
}

/// Decodes a variable-length unsigned integer from the stream (Spec 7.1.6).
///
/// # Errors
///
/// `Error::IntegerOverflow` wenn der codierte Wert nicht in 32 Bits passt;
/// `Error::PrematureEndOfStream` bei abgeschnittenem Stream.
#[inline]
pub fn decode(reader: &mut BitReader) -> Result<u32> {
    let mut result = 0u32;
    let mut shift = 0u32;
    loop {
        let byte = reader.read_byte_aligned()?;
        let data = u32::from(byte & 0x7F);
        // 5. Block: nur noch 4 Datenbits gültig, kein weiterer Continuation-Block
        if shift == 28 && (data > 0x0F || byte & 0x80 != 0) {
            return Err(Error::IntegerOverflow);
        }
        result |= data << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
    }
}
