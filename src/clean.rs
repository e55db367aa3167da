//! Removal of previously generated assets.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GlyphTilesError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Removed,
    AlreadyAbsent,
}

/// Delete `path`. A missing file is success; any other failure is returned.
pub fn remove_asset(path: &Path) -> Result<CleanOutcome> {
    match fs::remove_file(path) {
        Ok(()) => Ok(CleanOutcome::Removed),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(CleanOutcome::AlreadyAbsent),
        Err(e) => Err(GlyphTilesError::io(path, e)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub outcomes: Vec<(String, CleanOutcome)>,
}

impl CleanReport {
    pub fn removed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == CleanOutcome::Removed).count()
    }

    pub fn already_absent(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == CleanOutcome::AlreadyAbsent).count()
    }
}
