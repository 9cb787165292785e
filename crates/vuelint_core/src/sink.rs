//! Write sinks and fix reintegration for hybrid documents.
//!
//! Persisting fixed content goes through an explicit [`WriteSink`]
//! capability instead of a patched global write primitive. The
//! [`ReintegratingSink`] decorator is constructed for the duration of a fix
//! pass and dropped afterwards; scoping replaces the activate/deactivate
//! bracket a global override would need, and the inner sink is untouched
//! once the decorator goes out of scope.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use vuelint_sfc::{DocumentKind, ExtractedRegion};

/// Normalizes a path lexically: strips `.` components and folds `..` into
/// its parent where possible. No case folding and no filesystem access;
/// paths that collide only under a case-insensitive filesystem stay
/// distinct here.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Per-run mapping from normalized path to the most recent extracted
/// region of a hybrid document.
///
/// Entries are written once per file immediately before its lint/fix pass
/// and read once when that file's fixed content is persisted. The cache
/// never outlives one lint run.
#[derive(Debug, Default)]
pub struct SubstitutionCache {
    entries: HashMap<PathBuf, ExtractedRegion>,
}

impl SubstitutionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the extracted region for a path, replacing any prior entry.
    pub fn insert(&mut self, path: &Path, region: ExtractedRegion) {
        self.entries.insert(normalize_path(path), region);
    }

    /// Looks up the region for a path.
    pub fn get(&self, path: &Path) -> Option<&ExtractedRegion> {
        self.entries.get(&normalize_path(path))
    }

    /// Returns the number of cached regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no regions are cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The write primitive used to persist fixed files.
pub trait WriteSink {
    /// Writes `content` to `path`.
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

/// The real write primitive.
#[derive(Debug, Default)]
pub struct DiskSink;

impl WriteSink for DiskSink {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

/// Decorator that splices fixed hybrid scripts back into their documents.
///
/// Writes to plain documents, and to hybrid documents with no cached
/// extraction, pass through unchanged. Errors from the inner sink
/// propagate unchanged; this layer only transforms content.
pub struct ReintegratingSink<'a, S: WriteSink> {
    inner: &'a mut S,
    cache: &'a SubstitutionCache,
}

impl<'a, S: WriteSink> ReintegratingSink<'a, S> {
    /// Wraps `inner` with reintegration against `cache`.
    pub fn new(inner: &'a mut S, cache: &'a SubstitutionCache) -> Self {
        Self { inner, cache }
    }
}

impl<S: WriteSink> WriteSink for ReintegratingSink<'_, S> {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        if DocumentKind::of(path).is_hybrid()
            && let Some(region) = self.cache.get(path)
        {
            debug!("Reintegrating fixed script into {}", path.display());
            return self.inner.write(path, &region.reassemble(content));
        }
        self.inner.write(path, content)
    }
}
