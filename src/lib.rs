pub mod catalog;
pub mod clean;
pub mod config;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod overrides;
pub mod pipeline;
pub mod render;

// Curated re-exports
pub use catalog::{CatalogEntry, Variant};
pub use config::PipelineConfig;
pub use error::{GlyphTilesError, Result};
pub use manifest::Manifest;
pub use pipeline::{GenerateReport, Pipeline};
