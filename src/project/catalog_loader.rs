//! Loading the public API catalog from a descriptor list.
//!
//! The list holds one packed descriptor per line. Blank lines and lines
//! starting with `#` are ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::hir::Catalog;
use crate::parser::{SignatureSyntaxError, parse_descriptor};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error during read.
    #[error("Failed to read public API list at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// One or more lines are not valid descriptors.
    #[error("{} invalid line(s) in public API list: {}", .lines.len(), render_lines(.lines))]
    InvalidEntries {
        /// `(1-based line number, error)`
        lines: Vec<(usize, SignatureSyntaxError)>,
    },
}

fn render_lines(lines: &[(usize, SignatureSyntaxError)]) -> String {
    lines
        .iter()
        .map(|(line, err)| format!("line {}: {}", line, err))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Loads public API lists into a [`Catalog`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a public API list from disk.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Catalog, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = self.load_str(&content)?;
        debug!("Loaded {} public members from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a public API list held in memory.
    pub fn load_str(&self, content: &str) -> Result<Catalog, LoadError> {
        let mut members = Vec::new();
        let mut invalid = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_descriptor(line) {
                Ok(member) => members.push(member),
                Err(err) => {
                    warn!("Invalid public API entry on line {}: {}", index + 1, err);
                    invalid.push((index + 1, err));
                }
            }
        }

        if invalid.is_empty() {
            Ok(Catalog::from_members(members))
        } else {
            Err(LoadError::InvalidEntries { lines: invalid })
        }
    }
}
