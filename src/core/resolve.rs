//! Path resolver
//!
//! Maps an include directive to an opened file using one of two strategies:
//! quoted targets try the including file's own directory first and fall back
//! to the search list; angle-bracket targets consult the search list only.
//!
//! Each candidate is resolved with a single open attempt. A candidate that
//! fails to open for any reason (missing, permission denied, is a directory)
//! simply does not resolve, and probing moves on to the next candidate.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::core::directive::{IncludeDirective, IncludeKind};

/// Read-only resolution configuration shared by every frame of an expansion.
///
/// The directory list is probed in the order given and is never reordered.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    search_dirs: Vec<PathBuf>,
}

impl SearchContext {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Probe each search directory in order; first candidate that opens wins.
    fn open_from_search_dirs(&self, target: &str) -> Option<(PathBuf, File)> {
        self.search_dirs
            .iter()
            .find_map(|dir| try_open(dir.join(target)))
    }
}

fn try_open(candidate: PathBuf) -> Option<(PathBuf, File)> {
    match File::open(&candidate) {
        Ok(file) => Some((candidate, file)),
        Err(_) => None,
    }
}

/// Resolve a directive against the including file's directory and the search
/// context. Returns the resolved path together with its opened file, or
/// `None` when no candidate resolves.
pub fn resolve(
    directive: &IncludeDirective,
    including_dir: &Path,
    ctx: &SearchContext,
) -> Option<(PathBuf, File)> {
    match directive.kind {
        IncludeKind::Quoted => try_open(including_dir.join(&directive.target))
            .or_else(|| ctx.open_from_search_dirs(&directive.target)),
        IncludeKind::AngleBracketed => ctx.open_from_search_dirs(&directive.target),
    }
}
