//! Identifier partitions for qualified names (Spec 7.3.1).
//!
//! EXI ordnet Namespace-URIs und Local-Names kompakte Integer-Identifier zu.
//! Die Tabelle hat zwei Schichten: eine schema-abgeleitete, unveränderliche
//! Schicht ([`PrepopulatedNameTable`], einmal gebaut und von beliebig vielen
//! Streams parallel gelesen) und eine Laufzeit-Schicht pro Stream
//! ([`RuntimeNameTable`]), die im Dokument neu auftauchende Namen als
//! append-only Log registriert. Gespeichert werden ausschließlich Identifier
//! und Zähler; die Stringinhalte hält die aufrufende Grammar-Engine.
//!
//! Lifecycle: eine `RuntimeNameTable` pro Stream; vor der Wiederverwendung
//! für einen weiteren Stream ist [`RuntimeNameTable::reset`] aufzurufen.

use log::warn;

use crate::config::CodecConfig;
use crate::{Error, Result};

/// Schema-abgeleitete Schicht: pro URI die Anzahl vorab bekannter
/// Local-Names.
///
/// Nach der Konstruktion unveränderlich; keine innere Mutabilität, daher
/// über `&` oder `Arc` sicher zwischen parallelen Stream-Sessions teilbar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepopulatedNameTable {
    /// Index = URI-Identifier, Wert = Anzahl prepopulierter Local-Names.
    local_names: Box<[usize]>,
}

impl PrepopulatedNameTable {
    /// Baut die Tabelle aus den Local-Name-Zählern der Schema-Kompilation.
    /// Der i-te Eintrag gehört zum URI-Identifier `i`.
    pub fn new(local_names: &[usize]) -> Self {
        Self { local_names: local_names.into() }
    }

    /// Anzahl prepopulierter URIs; deren Identifier belegen `0..uri_count()`.
    pub fn uri_count(&self) -> usize {
        self.local_names.len()
    }

    /// Anzahl prepopulierter Local-Names unter `uri_id`; 0 für Identifier
    /// außerhalb des prepopulierten Bereichs (Laufzeit-URIs starten leer).
    pub fn local_name_count(&self, uri_id: usize) -> usize {
        self.local_names.get(uri_id).copied().unwrap_or(0)
    }
}

/// Ein Eintrag im append-only Partitions-Log der Laufzeit-Schicht.
///
/// URI- und Local-Name-Ergänzungen teilen sich ein Log; die Variante trägt
/// die Partition, der Compiler erzwingt vollständige Fallunterscheidung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePartitionEntry {
    /// Während des Streams registrierte URI.
    Uri {
        /// Der zugewiesene URI-Identifier.
        uri_id: usize,
    },
    /// Während des Streams registrierter Local-Name.
    LocalName {
        /// Die besitzende URI.
        uri_id: usize,
        /// Der zugewiesene Local-Name-Identifier innerhalb dieser URI.
        local_name_id: usize,
    },
}

/// Laufzeit-Schicht der Name Table: ein append-only Log pro Stream.
///
/// Identifier-Vergabe (Spec 7.3.1):
/// - URIs: `[0, prepopulated.uri_count())` ist statisch; die k-te in diesem
///   Stream ergänzte URI erhält `prepopulated.uri_count() + k`.
/// - Local-Names: pro URI lückenlos sequenziell über statischen und
///   Laufzeit-Anteil hinweg.
///
/// Die Kapazität ist fest konfiguriert; das Log wächst nie darüber hinaus.
#[derive(Debug, Clone)]
pub struct RuntimeNameTable {
    entries: Vec<NamePartitionEntry>,
    capacity: usize,
    added_uri_entries: usize,
    added_local_name_entries: usize,
}

impl RuntimeNameTable {
    /// Erstellt ein leeres Log mit fester Kapazität. Die Kapazität deckelt
    /// die Summe aus neuen URIs und neuen Local-Names eines Streams.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            added_uri_entries: 0,
            added_local_name_entries: 0,
        }
    }

    /// Erstellt das Log mit der Kapazität aus der Codec-Konfiguration.
    pub fn with_config(config: &CodecConfig) -> Self {
        Self::new(config.name_partition_capacity())
    }

    /// Setzt die Tabelle für einen neuen Stream zurück: Zähler auf 0, Log
    /// logisch leer. Die Allokation des Logs bleibt erhalten.
    pub fn reset(&mut self) {
        self.added_uri_entries = 0;
        self.added_local_name_entries = 0;
        self.entries.clear();
    }

    /// Konfigurierte Kapazität des Logs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Anzahl der in diesem Stream ergänzten URIs.
    pub fn added_uri_entries(&self) -> usize {
        self.added_uri_entries
    }

    /// Anzahl der in diesem Stream ergänzten Local-Names.
    pub fn added_local_name_entries(&self) -> usize {
        self.added_local_name_entries
    }

    /// Das Partitions-Log in Einfügereihenfolge.
    pub fn entries(&self) -> &[NamePartitionEntry] {
        &self.entries
    }

    /// Gesamtzahl bekannter URIs: statische plus in diesem Stream ergänzte.
    pub fn uri_count(&self, prepopulated: &PrepopulatedNameTable) -> usize {
        prepopulated.uri_count() + self.added_uri_entries
    }

    /// Gesamtzahl bekannter Local-Names unter `uri_id`: statischer Anteil
    /// plus Scan über das Partitions-Log.
    ///
    /// Der Scan ist O(Log-Länge) pro Aufruf. Namen werden höchstens einmal
    /// pro (URI, Local-Name)-Paar und Dokument ergänzt und Dokumente sind
    /// klein; Aufrufer verlassen sich auf genau diesen Kostenrahmen.
    ///
    /// # Errors
    ///
    /// `Error::UriOutOfBounds` wenn `uri_id` weder statisch noch zur
    /// Laufzeit existiert. Es wird dann nicht gescannt.
    pub fn local_name_count(
        &self,
        prepopulated: &PrepopulatedNameTable,
        uri_id: usize,
    ) -> Result<usize> {
        let mut count = if uri_id < prepopulated.uri_count() {
            prepopulated.local_name_count(uri_id)
        } else {
            let uri_count = self.uri_count(prepopulated);
            if uri_id >= uri_count {
                return Err(Error::UriOutOfBounds { uri_id, uri_count });
            }
            0
        };
        for entry in &self.entries {
            if let NamePartitionEntry::LocalName { uri_id: owner, .. } = entry
                && *owner == uri_id
            {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Registriert eine neue URI und gibt den zugewiesenen Identifier
    /// zurück: `prepopulated.uri_count() + k` für die k-te Ergänzung,
    /// unabhängig von zwischenzeitlichen Local-Name-Ergänzungen.
    ///
    /// Der Identifier ist sofort für [`Self::local_name_count`] und
    /// [`Self::add_local_name`] gültig.
    ///
    /// # Errors
    ///
    /// `Error::NameTableFull` bei erschöpfter Kapazität; Zähler und Log
    /// bleiben dann unverändert.
    pub fn add_uri(&mut self, prepopulated: &PrepopulatedNameTable) -> Result<usize> {
        self.ensure_capacity()?;
        let uri_id = prepopulated.uri_count() + self.added_uri_entries;
        self.entries.push(NamePartitionEntry::Uri { uri_id });
        self.added_uri_entries += 1;
        Ok(uri_id)
    }

    /// Registriert einen neuen Local-Name unter `uri_id` und gibt dessen
    /// Identifier zurück: den kleinsten noch unvergebenen, d.h. den
    /// aktuellen [`Self::local_name_count`] vor der Ergänzung.
    ///
    /// # Errors
    ///
    /// `Error::UriOutOfBounds` für unbekannte URIs, `Error::NameTableFull`
    /// bei erschöpfter Kapazität. In beiden Fällen bleibt der Zustand
    /// unverändert; alle Prüfungen laufen vor der ersten Mutation.
    pub fn add_local_name(
        &mut self,
        prepopulated: &PrepopulatedNameTable,
        uri_id: usize,
    ) -> Result<usize> {
        let local_name_id = self.local_name_count(prepopulated, uri_id)?;
        self.ensure_capacity()?;
        self.entries
            .push(NamePartitionEntry::LocalName { uri_id, local_name_id });
        self.added_local_name_entries += 1;
        Ok(local_name_id)
    }

    fn ensure_capacity(&self) -> Result<()> {
        debug_assert_eq!(
            self.entries.len(),
            self.added_uri_entries + self.added_local_name_entries,
        );
        if self.entries.len() >= self.capacity {
            warn!(
                "runtime name partition log full ({} entries), rejecting addition",
                self.capacity
            );
            return Err(Error::NameTableFull { capacity: self.capacity });
        }
        Ok(())
    }
}
