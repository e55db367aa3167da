//! Generate and clean runs over a catalog.
//!
//! Entries are processed strictly in catalog order, one at a time. A failure
//! on entry `k` leaves entries `0..k` on disk; there is no rollback.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::catalog::CatalogEntry;
use crate::clean::{remove_asset, CleanReport};
use crate::config::PipelineConfig;
use crate::error::{GlyphTilesError, Result};
use crate::manifest::Manifest;
use crate::naming::plan_filenames;
use crate::overrides::OverrideResolver;
use crate::render::{render_placeholder, write_png, FontPainter, GlyphPainter, RenderStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Rendered,
    Override(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub ordinal: usize,
    pub filename: String,
    pub source: AssetSource,
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub manifest: Manifest,
    pub assets: Vec<GeneratedAsset>,
}

impl GenerateReport {
    pub fn overrides_used(&self) -> usize {
        self.assets.iter().filter(|a| matches!(a.source, AssetSource::Override(_))).count()
    }
}

pub struct Pipeline {
    entries: &'static [CatalogEntry],
    pad_width: usize,
    style: RenderStyle,
    resolver: OverrideResolver,
    index_offset: usize,
    separator: String,
    font_path: PathBuf,
    font_size: f32,
}

impl Pipeline {
    pub fn new(cfg: &PipelineConfig) -> Self {
        Self::with_entries(cfg, cfg.entries())
    }

    /// Same settings, different catalog.
    pub fn with_entries(cfg: &PipelineConfig, entries: &'static [CatalogEntry]) -> Self {
        Self {
            entries,
            pad_width: cfg.pad_width.resolve(entries.len()),
            style: cfg.render_style(),
            resolver: cfg.override_resolver(),
            index_offset: cfg.index_offset,
            separator: cfg.separator.clone(),
            font_path: cfg.font_path.clone(),
            font_size: cfg.font_size,
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn pad_width(&self) -> usize {
        self.pad_width
    }

    pub fn filenames(&self) -> Result<Vec<String>> {
        plan_filenames(self.entries, self.pad_width)
    }

    /// Load the configured font, then generate. The font is loaded before
    /// anything is written, so a bad font leaves the output untouched.
    pub fn generate(&self, out_dir: &Path) -> Result<GenerateReport> {
        let painter = FontPainter::load(&self.font_path, self.font_size)?;
        debug!("loaded font {}", painter.path().display());
        self.generate_with(&painter, out_dir)
    }

    pub fn generate_with(&self, painter: &dyn GlyphPainter, out_dir: &Path) -> Result<GenerateReport> {
        let filenames = self.filenames()?;
        // validate every name up front; the manifest is all or nothing
        let mut manifest = Manifest::new(self.index_offset, self.separator.as_str());
        for (i, e) in self.entries.iter().enumerate() {
            manifest.push(i, e.name)?;
        }
        fs::create_dir_all(out_dir).map_err(|e| GlyphTilesError::io(out_dir, e))?;

        let mut assets = Vec::with_capacity(self.entries.len());
        for (i, (entry, filename)) in self.entries.iter().zip(filenames).enumerate() {
            let dest = out_dir.join(&filename);
            let source = match self.resolver.resolve(&filename) {
                Some(src) => {
                    OverrideResolver::apply(&src, &dest)?;
                    debug!("{filename}: copied override {}", src.display());
                    AssetSource::Override(src)
                }
                None => {
                    let canvas = render_placeholder(painter, &self.style, entry.glyph);
                    write_png(canvas, self.style.use_alpha, &dest)?;
                    debug!("{filename}: rendered {:?}", entry.glyph);
                    AssetSource::Rendered
                }
            };
            assets.push(GeneratedAsset { ordinal: i, filename, source });
        }
        let report = GenerateReport { manifest, assets };
        info!(
            "generated {} assets in {} ({} from overrides)",
            report.assets.len(),
            out_dir.display(),
            report.overrides_used()
        );
        Ok(report)
    }

    pub fn clean(&self, out_dir: &Path) -> Result<CleanReport> {
        let mut report = CleanReport::default();
        for filename in self.filenames()? {
            let outcome = remove_asset(&out_dir.join(&filename))?;
            debug!("{filename}: {outcome:?}");
            report.outcomes.push((filename, outcome));
        }
        info!(
            "clean {}: removed {}, already absent {}",
            out_dir.display(),
            report.removed(),
            report.already_absent()
        );
        Ok(report)
    }
}
