//! Fixed glyph catalogs.
//!
//! Position in a catalog is the asset's identity: it feeds both the filename
//! ordinal and the manifest index. Append new entries, never reorder.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub glyph: &'static str,
    pub name: &'static str,
}

const fn entry(glyph: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry { glyph, name }
}

/// Terrain, buildings, directional connectors and a fallback tile.
pub const MINIMAL: &[CatalogEntry] = &[
    entry("g", "grass"),
    entry("d", "dirt"),
    entry("s", "snow"),
    // buildings
    entry("S-tru", "spawn-truck"),
    entry("S-tra", "spawn-train"),
    entry("S-b", "spawn-boat"),
    entry("Su-r", "supply-red"),
    entry("Su-g", "supply-green"),
    entry("Su-b", "supply-blue"),
    entry("D-r", "depot-red"),
    entry("D-g", "depot-green"),
    entry("D-b", "depot-blue"),
    // tiled connectors
    entry("ro<", "road-west"),
    entry("ro>", "road-east"),
    entry("rov", "road-south"),
    entry("ro^", "road-north"),
    entry("c<", "canal-west"),
    entry("c>", "canal-east"),
    entry("cv", "canal-south"),
    entry("c^", "canal-north"),
    entry("ra<", "rails-west"),
    entry("ra>", "rails-east"),
    entry("rav", "rails-south"),
    entry("ra^", "rails-north"),
    entry("X", "default"),
];

/// Minimal set plus vehicle sprites, an empty default and the mixers.
pub const EXTENDED: &[CatalogEntry] = &[
    entry("g", "grass"),
    entry("d", "dirt"),
    entry("s", "snow"),
    // buildings
    entry("S-tru", "spawn-truck"),
    entry("S-tra", "spawn-train"),
    entry("S-b", "spawn-boat"),
    entry("Su-r", "supply-red"),
    entry("Su-g", "supply-green"),
    entry("Su-b", "supply-blue"),
    entry("D-r", "depot-red-30"),
    entry("D-g", "depot-green-30"),
    entry("D-b", "depot-blue-30"),
    // tiled connectors
    entry("ro<", "road-west"),
    entry("ro>", "road-east"),
    entry("rov", "road-south"),
    entry("ro^", "road-north"),
    entry("c<", "canal-west"),
    entry("c>", "canal-east"),
    entry("cv", "canal-south"),
    entry("c^", "canal-north"),
    entry("ra<", "rails-west"),
    entry("ra>", "rails-east"),
    entry("rav", "rails-south"),
    entry("ra^", "rails-north"),
    // vehicles
    entry("Tu>", "truck"),
    entry("Ta>", "train"),
    entry("B>", "boat"),
    entry("", "default"),
    entry("M", "mixer"),
    entry("My", "mixer-yellow"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Variant {
    Minimal,
    #[default]
    Extended,
}

impl Variant {
    pub fn entries(self) -> &'static [CatalogEntry] {
        match self {
            Variant::Minimal => MINIMAL,
            Variant::Extended => EXTENDED,
        }
    }
}
