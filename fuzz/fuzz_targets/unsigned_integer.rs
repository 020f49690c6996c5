#![no_main]
use libfuzzer_sys::fuzz_target;
use minexi::bit_width::seven_bit_block_count;
use minexi::{BitReader, BitWriter, unsigned_integer};

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes; on success re-encode and compare the canonical
    // form plus the predicted block count.
    let mut reader = BitReader::new(data);
    if let Ok(value) = unsigned_integer::decode(&mut reader) {
        let consumed = reader.bit_position() / 8;
        let mut writer = BitWriter::new();
        unsigned_integer::encode(&mut writer, value);
        let reencoded = writer.into_vec();
        assert_eq!(reencoded.len(), seven_bit_block_count(value) as usize);
        // Kanonische Form: Re-Encoding ist nie länger als das Gelesene
        assert!(reencoded.len() <= consumed);
        let mut reader2 = BitReader::new(&reencoded);
        assert_eq!(unsigned_integer::decode(&mut reader2).unwrap(), value);
    }
});
