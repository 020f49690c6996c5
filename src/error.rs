//! Central error types for the codec core.
//!
//! Every fallible operation in this crate reports through [`Error`]; the
//! surrounding grammar engine decides which failures end the stream session.

use core::fmt;

/// All error conditions raised by the codec core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The bit stream ended before the requested bits were available (Spec 7.1).
    PrematureEndOfStream,
    /// A URI identifier exists in neither the prepopulated nor the runtime
    /// partition (Spec 7.3.1).
    UriOutOfBounds {
        /// Der angefragte URI-Identifier.
        uri_id: usize,
        /// Anzahl aktuell vergebener URI-Identifier (statisch + Laufzeit).
        uri_count: usize,
    },
    /// An addition would exceed the configured capacity of the runtime name
    /// partition log. Counters and log are untouched when this is returned.
    NameTableFull {
        /// Die konfigurierte Kapazität des Partitions-Logs.
        capacity: usize,
    },
    /// A coding length was requested for more distinct values than the
    /// supported 16-bit ceiling of 65536 (Spec 7.1.9).
    UnsupportedCharacteristics(usize),
    /// A variable-length unsigned integer exceeds the 32-bit value range
    /// (Spec 7.1.6).
    IntegerOverflow,
}

impl Error {
    /// Numerischer Fehlercode für Engines, die das Embedded-Katalogschema
    /// konsumieren (kleine negative Integer, stabil pro Bedingung).
    pub fn code(&self) -> i32 {
        match self {
            Self::PrematureEndOfStream => -10,
            Self::UriOutOfBounds { .. } => -100,
            Self::NameTableFull { .. } => -106,
            Self::UnsupportedCharacteristics(_) => -133,
            Self::IntegerOverflow => -134,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrematureEndOfStream => write!(f, "premature end of EXI stream (Spec 7.1)"),
            Self::UriOutOfBounds { uri_id, uri_count } => write!(
                f,
                "URI identifier {uri_id} out of bounds, partition holds {uri_count} URIs (Spec 7.3.1)"
            ),
            Self::NameTableFull { capacity } => {
                write!(f, "runtime name partition log full ({capacity} entries)")
            }
            Self::UnsupportedCharacteristics(n) => write!(
                f,
                "coding length for {n} characteristics exceeds the 16-bit ceiling (Spec 7.1.9)"
            ),
            Self::IntegerOverflow => {
                write!(f, "unsigned integer exceeds 32-bit value range (Spec 7.1.6)")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
