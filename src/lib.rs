//! minexi – EXI 1.0 codec core for constrained targets.
//!
//! Implementiert die Bausteine, aus denen ein EXI-Prozessor seine kompakte
//! QName-Darstellung bezieht: die zweischichtige Name Table (schema-
//! abgeleitete plus Laufzeit-Partitionen, Spec 7.3.1) und die Bitbreiten-
//! Primitiven, mit denen jeder n-bit- und variable-length-Integer des
//! Streams dimensioniert wird (Spec 7.1.6, 7.1.9). Die Grammar-Engine und
//! die Schema-Kompilation liegen außerhalb dieses Kerns.
//!
//! # Beispiel
//!
//! ```
//! use minexi::bit_width;
//! use minexi::name_table::{PrepopulatedNameTable, RuntimeNameTable};
//!
//! // Schema-Kompilation lieferte 2 URIs mit 3 bzw. 0 Local-Names.
//! let schema = PrepopulatedNameTable::new(&[3, 0]);
//! let mut runtime = RuntimeNameTable::new(16);
//!
//! let uri = runtime.add_uri(&schema).unwrap();
//! assert_eq!(uri, 2);
//! assert_eq!(runtime.add_local_name(&schema, 0).unwrap(), 3);
//!
//! // Identifier-Breite für das n-bit Encoding auf dem Draht
//! let bits = bit_width::coding_length(runtime.uri_count(&schema)).unwrap();
//! assert_eq!(bits, 2);
//! ```

pub mod bit_width;
pub mod bitstream;
pub mod config;
pub mod error;
pub mod n_bit_unsigned_integer;
pub mod name_table;
pub mod unsigned_integer;

pub use error::{Error, Result};

// Public API: Konfiguration
pub use config::{AllocationMode, CodecConfig, StreamMedium, StringRepresentation};

// Public API: Name Table
pub use name_table::{NamePartitionEntry, PrepopulatedNameTable, RuntimeNameTable};

// Public API: Bitstream
pub use bitstream::{BitReader, BitWriter};
