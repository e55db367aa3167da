//! Placeholder tile generator.
//!
//!   glyph_tiles gen   [--variant minimal|extended] [--config FILE] [--out-dir DIR] [--manifest-json FILE]
//!   glyph_tiles clean [--variant minimal|extended] [--config FILE] [--out-dir DIR]
//!
//! `gen` writes one `part-<ordinal><glyph>.png` per catalog entry and prints
//! the index->name manifest on a single stdout line. `clean` removes the same
//! files. Logging goes to stderr (`RUST_LOG=info` for a summary).
//!
//! Besides the single `gen`/`clean` positional, the optional flags above are
//! accepted, so a valid invocation may carry more than one argument. Anything
//! clap rejects (no command, unknown command, extra positionals, unknown
//! flags) prints the usage line and runs nothing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::warn;

use glyph_tiles::config::ConfigOverlay;
use glyph_tiles::{Pipeline, PipelineConfig, Variant};

const USAGE: &str = "Usage: either gen or clean as first argument";

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate placeholder tile PNGs and their manifest", long_about = None)]
struct Cli {
    #[arg(value_enum)]
    command: Command,
    /// Catalog preset. Overrides `variant` in --config; defaults to extended.
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,
    /// RON file overlaying fields on the preset
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Also write the manifest as a JSON object (gen only)
    #[arg(long)]
    manifest_json: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Command {
    Gen,
    Clean,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Minimal,
    Extended,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Minimal => Variant::Minimal,
            VariantArg::Extended => Variant::Extended,
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let overlay = match &cli.config {
        Some(path) => ConfigOverlay::load_from_file(path).map_err(anyhow::Error::msg)?,
        None => ConfigOverlay::default(),
    };
    let variant = cli.variant.map(Variant::from).or(overlay.variant).unwrap_or_default();
    let cfg = overlay.apply(PipelineConfig::preset(variant));
    for w in cfg.validate() {
        warn!("config: {w}");
    }
    Ok(cfg)
}

fn cmd_gen(cli: &Cli, cfg: &PipelineConfig) -> Result<()> {
    let report = Pipeline::new(cfg)
        .generate(&cli.out_dir)
        .with_context(|| format!("generate into {}", cli.out_dir.display()))?;
    if let Some(path) = &cli.manifest_json {
        let js = report.manifest.to_json_pretty()?;
        fs::write(path, js).with_context(|| format!("write {}", path.display()))?;
    }
    println!("{}", report.manifest);
    Ok(())
}

fn cmd_clean(cli: &Cli, cfg: &PipelineConfig) -> Result<()> {
    Pipeline::new(cfg)
        .clean(&cli.out_dir)
        .with_context(|| format!("clean {}", cli.out_dir.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // bad invocation is not a failure, it just runs nothing
            let _ = e.print();
            if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                println!("{USAGE}");
            }
            return Ok(());
        }
    };
    let cfg = resolve_config(&cli)?;
    match cli.command {
        Command::Gen => cmd_gen(&cli, &cfg),
        Command::Clean => cmd_clean(&cli, &cfg),
    }
}
