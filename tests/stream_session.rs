//! Simulierte Stream-Session über den gesamten Kern.
//!
//! Die Grammar-Engine ist hier durch den Test ersetzt: sie entscheidet,
//! wann ein QName neu ist (add) und wann nur nachgeschlagen wird, und
//! schreibt die vergebenen Identifier mit minimaler Breite auf den Draht.
//! Encoder- und Decoder-Seite führen je eine eigene `RuntimeNameTable`
//! über derselben geteilten `PrepopulatedNameTable` und müssen zu
//! identischen Identifiern und Bitpositionen kommen.

use minexi::bit_width::{coding_length, seven_bit_block_count};
use minexi::name_table::{PrepopulatedNameTable, RuntimeNameTable};
use minexi::{BitReader, BitWriter, CodecConfig, Error};
use minexi::{n_bit_unsigned_integer, unsigned_integer};

/// Ein QName-Ereignis aus Sicht der Engine: entweder bereits bekannte
/// Identifier oder eine Neuaufnahme.
enum NameEvent {
    Known { uri_id: usize, local_name_id: usize },
    NewUri,
    NewLocalName { uri_id: usize },
}

/// Encoder-Seite: vergibt Identifier, schreibt sie n-bit-codiert.
fn encode_session(
    prepopulated: &PrepopulatedNameTable,
    runtime: &mut RuntimeNameTable,
    events: &[NameEvent],
    writer: &mut BitWriter,
) -> Vec<(usize, usize)> {
    let mut emitted = Vec::new();
    for event in events {
        let (uri_id, local_name_id) = match event {
            NameEvent::Known { uri_id, local_name_id } => (*uri_id, *local_name_id),
            NameEvent::NewUri => {
                let uri_id = runtime.add_uri(prepopulated).unwrap();
                (uri_id, 0)
            }
            NameEvent::NewLocalName { uri_id } => {
                let local_name_id = runtime.add_local_name(prepopulated, *uri_id).unwrap();
                (*uri_id, local_name_id)
            }
        };
        // Identifier-Breiten richten sich nach dem Tabellenstand NACH der
        // Vergabe; der Decoder rechnet denselben Stand nach.
        let uri_bits = coding_length(runtime.uri_count(prepopulated)).unwrap();
        let ln_bits =
            coding_length(runtime.local_name_count(prepopulated, uri_id).unwrap()).unwrap();
        n_bit_unsigned_integer::encode(writer, uri_id as u32, uri_bits);
        n_bit_unsigned_integer::encode(writer, local_name_id as u32, ln_bits);
        emitted.push((uri_id, local_name_id));
    }
    emitted
}

/// Decoder-Seite: spiegelt die Tabellen-Mutationen und liest die Identifier.
fn decode_session(
    prepopulated: &PrepopulatedNameTable,
    runtime: &mut RuntimeNameTable,
    events: &[NameEvent],
    reader: &mut BitReader,
) -> Vec<(usize, usize)> {
    let mut decoded = Vec::new();
    for event in events {
        match event {
            NameEvent::Known { .. } => {}
            NameEvent::NewUri => {
                runtime.add_uri(prepopulated).unwrap();
            }
            NameEvent::NewLocalName { uri_id } => {
                runtime.add_local_name(prepopulated, *uri_id).unwrap();
            }
        }
        let uri_bits = coding_length(runtime.uri_count(prepopulated)).unwrap();
        let uri_id = n_bit_unsigned_integer::decode(reader, uri_bits).unwrap() as usize;
        let ln_bits =
            coding_length(runtime.local_name_count(prepopulated, uri_id).unwrap()).unwrap();
        let local_name_id = n_bit_unsigned_integer::decode(reader, ln_bits).unwrap() as usize;
        decoded.push((uri_id, local_name_id));
    }
    decoded
}

/// Encoder und Decoder kommen über eine gemischte Session zu identischen
/// Identifiern, und der Stream geht restlos auf.
#[test]
fn qname_identifiers_round_trip() {
    // Schema: 3 URIs mit 4, 0 und 46 prepopulierten Local-Names
    let prepopulated = PrepopulatedNameTable::new(&[4, 0, 46]);
    let config = CodecConfig::default().with_name_partition_capacity(16);

    let events = [
        NameEvent::Known { uri_id: 0, local_name_id: 3 },
        NameEvent::NewLocalName { uri_id: 0 },
        NameEvent::NewUri,
        NameEvent::NewLocalName { uri_id: 3 },
        NameEvent::NewLocalName { uri_id: 3 },
        NameEvent::Known { uri_id: 2, local_name_id: 45 },
        NameEvent::NewUri,
        NameEvent::NewLocalName { uri_id: 1 },
    ];

    let mut enc_runtime = RuntimeNameTable::with_config(&config);
    let mut writer = BitWriter::new();
    let emitted = encode_session(&prepopulated, &mut enc_runtime, &events, &mut writer);
    let bits_written = writer.bit_position();
    let data = writer.into_vec();

    let mut dec_runtime = RuntimeNameTable::with_config(&config);
    let mut reader = BitReader::new(&data);
    let decoded = decode_session(&prepopulated, &mut dec_runtime, &events, &mut reader);

    assert_eq!(emitted, decoded);
    assert_eq!(reader.bit_position(), bits_written);

    // Beide Seiten halten denselben Tabellenstand
    assert_eq!(
        enc_runtime.uri_count(&prepopulated),
        dec_runtime.uri_count(&prepopulated)
    );
    assert_eq!(enc_runtime.entries(), dec_runtime.entries());

    // Erwartete Vergabe: erste neue URI = 3, zweite = 4; Local-Names
    // lückenlos ab dem prepopulierten Stand
    assert_eq!(emitted[1], (0, 4));
    assert_eq!(emitted[2], (3, 0));
    assert_eq!(emitted[3], (3, 0));
    assert_eq!(emitted[4], (3, 1));
    assert_eq!(emitted[6], (4, 0));
    assert_eq!(emitted[7], (1, 0));
}

/// Längenfelder als variable-length Integer neben n-bit-Feldern im selben
/// Stream; seven_bit_block_count sagt die Oktettzahl exakt voraus.
#[test]
fn mixed_n_bit_and_varint_stream() {
    let prepopulated = PrepopulatedNameTable::new(&[4, 0]);
    let mut runtime = RuntimeNameTable::new(4);

    let mut writer = BitWriter::new();
    let uri_bits = coding_length(runtime.uri_count(&prepopulated)).unwrap();
    assert_eq!(uri_bits, 1);
    n_bit_unsigned_integer::encode(&mut writer, 1, uri_bits);
    // Ein String-Längenfeld, wie es auf eine Table-Miss folgt
    writer.align_to_byte();
    let length = 300u32;
    let before = writer.bit_position();
    unsigned_integer::encode(&mut writer, length);
    assert_eq!(
        writer.bit_position() - before,
        seven_bit_block_count(length) as usize * 8
    );
    runtime.add_local_name(&prepopulated, 1).unwrap();

    let data = writer.into_vec();
    let mut reader = BitReader::new(&data);
    assert_eq!(n_bit_unsigned_integer::decode(&mut reader, uri_bits).unwrap(), 1);
    reader.align_to_byte();
    assert_eq!(unsigned_integer::decode(&mut reader).unwrap(), length);
}

/// Kapazität aus der Konfiguration ist ein harter Deckel: die Session
/// endet mit einem gemeldeten Fehler, nicht mit stillem Wachstum.
#[test]
fn session_hits_configured_capacity() {
    let prepopulated = PrepopulatedNameTable::new(&[1]);
    let config = CodecConfig::default().with_name_partition_capacity(2);
    let mut runtime = RuntimeNameTable::with_config(&config);

    runtime.add_uri(&prepopulated).unwrap();
    runtime.add_local_name(&prepopulated, 1).unwrap();
    let err = runtime.add_uri(&prepopulated).unwrap_err();
    assert_eq!(err, Error::NameTableFull { capacity: 2 });
    assert_eq!(err.code(), -106);

    // Stand der Tabelle entspricht exakt dem vor dem fehlgeschlagenen Aufruf
    assert_eq!(runtime.uri_count(&prepopulated), 2);
    assert_eq!(runtime.local_name_count(&prepopulated, 1).unwrap(), 1);
}

/// Wiederverwendung einer Laufzeit-Tabelle über zwei Streams hinweg.
#[test]
fn runtime_table_reuse_across_streams() {
    let prepopulated = PrepopulatedNameTable::new(&[2, 3]);
    let mut runtime = RuntimeNameTable::new(8);

    // Stream 1
    assert_eq!(runtime.add_uri(&prepopulated).unwrap(), 2);
    assert_eq!(runtime.add_local_name(&prepopulated, 2).unwrap(), 0);

    // Stream 2: nach reset identische Vergabe wie bei frischer Tabelle
    runtime.reset();
    assert_eq!(runtime.uri_count(&prepopulated), 2);
    assert_eq!(runtime.add_uri(&prepopulated).unwrap(), 2);
    assert_eq!(runtime.add_local_name(&prepopulated, 2).unwrap(), 0);
}
