//! Hand-authored art that replaces a generated placeholder.
//!
//! An override is just a file at `<override_dir>/<filename>`. It is copied
//! verbatim; size, mode and even format are not checked.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlyphTilesError, Result};

#[derive(Debug, Clone, Default)]
pub struct OverrideResolver {
    dir: Option<PathBuf>,
}

impl OverrideResolver {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Path of the override for `filename` if one exists as a regular file.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let candidate = self.dir.as_ref()?.join(filename);
        candidate.is_file().then_some(candidate)
    }

    /// Copy `src` to `dest` byte for byte. Errors name whichever side failed.
    pub fn apply(src: &Path, dest: &Path) -> Result<()> {
        fs::copy(src, dest).map_err(|e| {
            let failed = if src.is_file() { dest } else { src };
            GlyphTilesError::io(failed, e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_matches() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("part-0g.png"), b"x").unwrap();
        assert!(OverrideResolver::disabled().resolve("part-0g.png").is_none());
    }

    #[test]
    fn resolves_existing_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("override");
        fs::create_dir_all(dir.join("part-1d.png")).unwrap(); // a directory, not an override
        fs::write(dir.join("part-0g.png"), b"art").unwrap();
        let r = OverrideResolver::new(Some(dir.clone()));
        assert_eq!(r.resolve("part-0g.png"), Some(dir.join("part-0g.png")));
        assert!(r.resolve("part-1d.png").is_none());
        assert!(r.resolve("part-2s.png").is_none());
    }

    #[test]
    fn apply_copies_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src.png");
        let dest = tmp.path().join("dest.png");
        fs::write(&src, b"\x89PNG not really").unwrap();
        fs::write(&dest, b"old").unwrap();
        OverrideResolver::apply(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"\x89PNG not really");
    }

    #[test]
    fn apply_error_names_the_failing_side() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src.png");
        fs::write(&src, b"art").unwrap();
        let dest = tmp.path().join("missing-dir").join("part-0g.png");
        match OverrideResolver::apply(&src, &dest) {
            Err(GlyphTilesError::Io { path, .. }) => assert_eq!(path, dest),
            other => panic!("expected io error on dest, got {other:?}"),
        }
        let gone = tmp.path().join("gone.png");
        match OverrideResolver::apply(&gone, &tmp.path().join("out.png")) {
            Err(GlyphTilesError::Io { path, .. }) => assert_eq!(path, gone),
            other => panic!("expected io error on src, got {other:?}"),
        }
    }
}
