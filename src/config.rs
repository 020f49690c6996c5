//! Codec deployment configuration.
//!
//! Alle Werte stehen fest, bevor eine Stream-Session beginnt; zur Laufzeit
//! wird nichts davon verändert. Die Grammar-Engine konsumiert
//! `element_stack_size` und `string_representation`, der Codec-Kern selbst
//! nur `name_partition_capacity` (via [`crate::name_table::RuntimeNameTable::with_config`]).
//!
//! # Beispiel
//!
//! ```
//! use minexi::config::{CodecConfig, StreamMedium};
//!
//! let config = CodecConfig::default()
//!     .with_stream_medium(StreamMedium::ByteArray)
//!     .with_name_partition_capacity(128);
//!
//! assert_eq!(config.stream_medium(), StreamMedium::ByteArray);
//! assert_eq!(config.name_partition_capacity(), 128);
//! ```

/// Trägermedium des EXI-Streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMedium {
    /// Stream liegt vollständig als Byte-Array im Speicher.
    ByteArray,
    /// Stream wird aus einer Datei gelesen bzw. in eine Datei geschrieben.
    #[default]
    File,
}

/// Speichervergabe-Strategie des Codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationMode {
    /// Alle Puffer fest dimensioniert zur Übersetzungszeit.
    Static,
    /// Puffer werden zur Laufzeit angelegt (innerhalb der konfigurierten
    /// Obergrenzen).
    #[default]
    Dynamic,
}

/// Darstellung von Stringinhalten im umgebenden Prozessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringRepresentation {
    /// Nur ASCII-Zeichen.
    Ascii,
    /// Universal Character Set.
    #[default]
    Ucs,
}

/// Maximale Verschachtelungstiefe des Element-Stacks (Default).
const DEFAULT_ELEMENT_STACK_SIZE: usize = 128;

/// Default-Kapazität des Laufzeit-Partitions-Logs: neue URIs plus neue
/// Local-Names pro Dokument.
const DEFAULT_NAME_PARTITION_CAPACITY: usize = 64;

/// Deployment configuration, fixed before any stream session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    stream_medium: StreamMedium,
    allocation_mode: AllocationMode,
    string_representation: StringRepresentation,
    element_stack_size: usize,
    name_partition_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            stream_medium: StreamMedium::default(),
            allocation_mode: AllocationMode::default(),
            string_representation: StringRepresentation::default(),
            element_stack_size: DEFAULT_ELEMENT_STACK_SIZE,
            name_partition_capacity: DEFAULT_NAME_PARTITION_CAPACITY,
        }
    }
}

impl CodecConfig {
    // --- Getter ---

    /// Trägermedium des EXI-Streams.
    pub fn stream_medium(&self) -> StreamMedium { self.stream_medium }
    /// Speichervergabe-Strategie.
    pub fn allocation_mode(&self) -> AllocationMode { self.allocation_mode }
    /// Darstellung von Stringinhalten.
    pub fn string_representation(&self) -> StringRepresentation { self.string_representation }
    /// Maximale Verschachtelungstiefe des Element-Stacks.
    pub fn element_stack_size(&self) -> usize { self.element_stack_size }
    /// Kapazität des Laufzeit-Partitions-Logs der Name Table.
    pub fn name_partition_capacity(&self) -> usize { self.name_partition_capacity }

    // --- Builder-Setter (Fluent API) ---

    /// Setzt das Trägermedium.
    pub fn with_stream_medium(mut self, medium: StreamMedium) -> Self { self.stream_medium = medium; self }
    /// Setzt die Speichervergabe-Strategie.
    pub fn with_allocation_mode(mut self, mode: AllocationMode) -> Self { self.allocation_mode = mode; self }
    /// Setzt die String-Darstellung.
    pub fn with_string_representation(mut self, repr: StringRepresentation) -> Self { self.string_representation = repr; self }
    /// Setzt die Element-Stack-Tiefe.
    pub fn with_element_stack_size(mut self, size: usize) -> Self { self.element_stack_size = size; self }
    /// Setzt die Kapazität des Laufzeit-Partitions-Logs.
    pub fn with_name_partition_capacity(mut self, capacity: usize) -> Self { self.name_partition_capacity = capacity; self }
}
