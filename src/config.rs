//! Pipeline configuration.
//!
//! One [`PipelineConfig`] parameterizes the whole generator; the two catalog
//! variants are just presets of it. A RON file can overlay any subset of
//! fields on top of a preset:
//!
//! ```ron
//! (
//!     variant: Minimal,
//!     canvas_size: 32,
//!     font_path: "assets/fonts/DroidSansMono.ttf",
//!     separator: ";",
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use ron::extensions::Extensions;
use serde::Deserialize;

use crate::catalog::{CatalogEntry, Variant};
use crate::manifest::QUOTE;
use crate::naming::PadWidth;
use crate::overrides::OverrideResolver;
use crate::render::RenderStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub variant: Variant,
    pub canvas_size: u32,
    pub use_alpha: bool,
    pub pad_width: PadWidth,
    pub index_offset: usize,
    pub separator: String,
    pub override_enabled: bool,
    pub override_dir: PathBuf,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub base_color: [u8; 3],
    pub text_color: [u8; 3],
    pub text_origin: (f32, f32),
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::extended()
    }
}

impl PipelineConfig {
    /// 64x64 opaque tiles, white on black, unpadded 0-based, space separated.
    pub fn minimal() -> Self {
        Self {
            variant: Variant::Minimal,
            canvas_size: 64,
            use_alpha: false,
            pad_width: PadWidth::Fixed(1),
            index_offset: 0,
            separator: " ".into(),
            override_enabled: false,
            override_dir: PathBuf::from("override"),
            font_path: PathBuf::from("/usr/share/vlc/skins2/fonts/FreeSans.ttf"),
            font_size: 32.0,
            base_color: [0, 0, 0],
            text_color: [255, 255, 255],
            text_origin: (0.0, 0.0),
        }
    }

    /// 48x48 transparent sprites, black on magenta, padded 1-based, comma separated.
    pub fn extended() -> Self {
        Self {
            variant: Variant::Extended,
            canvas_size: 48,
            use_alpha: true,
            pad_width: PadWidth::Derived,
            index_offset: 1,
            separator: ",".into(),
            override_enabled: true,
            override_dir: PathBuf::from("override"),
            font_path: PathBuf::from("proggy.ttf"),
            font_size: 24.0,
            base_color: [255, 0, 255],
            text_color: [0, 0, 0],
            text_origin: (0.0, 0.0),
        }
    }

    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::Minimal => Self::minimal(),
            Variant::Extended => Self::extended(),
        }
    }

    /// Preset named by the file's `variant` (default extended) with the file's fields on top.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let overlay = ConfigOverlay::load_from_file(path)?;
        let base = Self::preset(overlay.variant.unwrap_or_default());
        Ok(overlay.apply(base))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.variant.entries()
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            canvas_size: self.canvas_size,
            use_alpha: self.use_alpha,
            base_color: self.base_color,
            text_color: self.text_color,
            text_origin: self.text_origin,
        }
    }

    pub fn override_resolver(&self) -> OverrideResolver {
        if self.override_enabled {
            OverrideResolver::new(Some(self.override_dir.clone()))
        } else {
            OverrideResolver::disabled()
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.canvas_size == 0 {
            w.push("canvas_size is 0; images will be empty".into());
        } else if self.canvas_size > 4096 {
            w.push(format!("canvas_size {} very large for a placeholder", self.canvas_size));
        }
        if self.font_size <= 0.0 {
            w.push(format!("font_size {} must be > 0", self.font_size));
        }
        let (ox, oy) = self.text_origin;
        if ox < 0.0 || oy < 0.0 || ox >= self.canvas_size as f32 || oy >= self.canvas_size as f32 {
            w.push(format!("text_origin ({ox}, {oy}) outside the {0}x{0} canvas", self.canvas_size));
        }
        if self.separator.is_empty() {
            w.push("separator is empty; manifest pairs will run together".into());
        } else if self.separator.contains(QUOTE) || self.separator.contains(':') {
            w.push(format!("separator {:?} collides with pair syntax", self.separator));
        }
        if self.index_offset > 1 {
            w.push(format!("index_offset {} is neither 0-based nor 1-based", self.index_offset));
        }
        if self.override_enabled && self.override_dir.as_os_str().is_empty() {
            w.push("override_enabled with an empty override_dir; the output dir itself would match".into());
        }
        w
    }
}

/// Partial config as written in a RON file. Absent fields keep the preset value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    pub variant: Option<Variant>,
    pub canvas_size: Option<u32>,
    pub use_alpha: Option<bool>,
    pub pad_width: Option<PadWidth>,
    pub index_offset: Option<usize>,
    pub separator: Option<String>,
    pub override_enabled: Option<bool>,
    pub override_dir: Option<PathBuf>,
    pub font_path: Option<PathBuf>,
    pub font_size: Option<f32>,
    pub base_color: Option<[u8; 3]>,
    pub text_color: Option<[u8; 3]>,
    pub text_origin: Option<(f32, f32)>,
}

impl ConfigOverlay {
    pub fn from_ron(text: &str) -> Result<Self, String> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
            .map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config {}: {e}", path.as_ref().display()))?;
        Self::from_ron(&data)
    }

    /// Apply on top of `base`. `variant` is not applied; it selects the base.
    pub fn apply(self, mut base: PipelineConfig) -> PipelineConfig {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $( if let Some(v) = self.$field { base.$field = v; } )*
            };
        }
        take!(
            canvas_size,
            use_alpha,
            pad_width,
            index_offset,
            separator,
            override_enabled,
            override_dir,
            font_path,
            font_size,
            base_color,
            text_color,
            text_origin,
        );
        base
    }
}
