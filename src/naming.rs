//! Ordinal + glyph -> filename.
//!
//! Generate and clean both go through [`asset_filename`]; there is no other
//! place that knows the naming scheme.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::CatalogEntry;
use crate::error::{GlyphTilesError, Result};

pub const PREFIX: &str = "part-";
pub const EXTENSION: &str = "png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PadWidth {
    /// `ceil(log10(catalog_len))`, at least 1.
    #[default]
    Derived,
    Fixed(usize),
}

impl PadWidth {
    /// Resolve to a concrete width for a catalog of `len` entries.
    pub fn resolve(self, len: usize) -> usize {
        match self {
            PadWidth::Derived => derived_pad_width(len),
            PadWidth::Fixed(w) => w.max(1),
        }
    }
}

/// Smallest `w >= 1` with `10^w >= len`, i.e. `ceil(log10(len))` without floats.
pub fn derived_pad_width(len: usize) -> usize {
    let mut width = 0usize;
    let mut reach = 1usize;
    while reach < len {
        reach = reach.saturating_mul(10);
        width += 1;
    }
    width.max(1)
}

pub fn asset_filename(ordinal: usize, glyph: &str, pad_width: usize) -> String {
    format!("{PREFIX}{ordinal:0pad_width$}{glyph}.{EXTENSION}")
}

/// Filenames for every catalog entry, in catalog order.
///
/// Fails if two ordinals produce the same filename, which can happen with a
/// fixed width narrower than the ordinals and digit-leading glyphs.
pub fn plan_filenames(entries: &[CatalogEntry], pad_width: usize) -> Result<Vec<String>> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut out = Vec::with_capacity(entries.len());
    for (i, e) in entries.iter().enumerate() {
        let name = asset_filename(i, e.glyph, pad_width);
        if let Some(&first) = seen.get(&name) {
            return Err(GlyphTilesError::NameCollision { filename: name, first, second: i });
        }
        seen.insert(name.clone(), i);
        out.push(name);
    }
    Ok(out)
}
