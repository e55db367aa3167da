//! Index -> semantic name mapping handed to the game engine.
//!
//! Wire form is one pair per entry, `"<index>":"<name>"`, each followed by the
//! separator (trailing separator included), e.g. `"0":"grass" "1":"dirt" `.
//!
//! No escaping is performed. Instead a name is rejected when it contains the
//! quote character, the separator, or any control character, so every
//! accepted manifest splits back into exactly the pairs that produced it.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{GlyphTilesError, Result};

pub const QUOTE: char = '"';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    offset: usize,
    separator: String,
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(offset: usize, separator: impl Into<String>) -> Self {
        Self { offset, separator: separator.into(), entries: Vec::new() }
    }

    /// Manifest index for a catalog ordinal under this manifest's offset.
    pub fn index_for(&self, ordinal: usize) -> usize {
        ordinal + self.offset
    }

    /// Reject names the wire form cannot carry unambiguously.
    pub fn check_name(&self, ordinal: usize, name: &str) -> Result<()> {
        let reason = if name.contains(QUOTE) {
            Some("contains the quote character".to_string())
        } else if !self.separator.is_empty() && name.contains(self.separator.as_str()) {
            Some(format!("contains the separator {:?}", self.separator))
        } else if name.chars().any(char::is_control) {
            Some("contains a control character".to_string())
        } else {
            None
        };
        match reason {
            Some(reason) => Err(GlyphTilesError::InvalidManifestName {
                index: self.index_for(ordinal),
                name: name.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Append the entry for `ordinal`. Entries must arrive in catalog order.
    pub fn push(&mut self, ordinal: usize, name: &str) -> Result<()> {
        self.check_name(ordinal, name)?;
        let index = self.index_for(ordinal);
        self.entries.push(ManifestEntry { index, name: name.to_string() });
        Ok(())
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            write!(f, "{QUOTE}{}{QUOTE}:{QUOTE}{}{QUOTE}{}", e.index, e.name, self.separator)?;
        }
        Ok(())
    }
}

// Serialized as a JSON object keyed by index, in catalog order.
impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(&e.index.to_string(), &e.name)?;
        }
        map.end()
    }
}
