//! Catalog discovery and loading
//!
//! A catalog is a JSON array of name records. It is found via `--catalog`
//! (or `NAMECAT_CATALOG`), else `names.json` in the working directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use namecat_core::bail_usage;
use namecat_core::error::{NamecatError, Result};
use namecat_core::name::Name;
use namecat_core::trace_time;
use tracing::{debug, warn};

/// Catalog file looked up in the working directory
pub const DEFAULT_CATALOG_FILE: &str = "names.json";

/// A loaded name catalog
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    names: Vec<Name>,
}

impl Catalog {
    /// Open the explicit catalog path, or discover one under `root`
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let resolved = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            return Self::open(&resolved);
        }

        let candidate = root.join(DEFAULT_CATALOG_FILE);
        if !candidate.is_file() {
            bail_usage!(format!(
                "no catalog found: pass --catalog or create {} in {}",
                DEFAULT_CATALOG_FILE,
                root.display()
            ));
        }
        Self::open(&candidate)
    }

    /// Read and validate a catalog file
    pub fn open(path: &Path) -> Result<Self> {
        let start = Instant::now();

        let content =
            fs::read_to_string(path).map_err(|e| NamecatError::invalid_catalog(path, e))?;
        let names: Vec<Name> =
            serde_json::from_str(&content).map_err(|e| NamecatError::invalid_catalog(path, e))?;

        validate(path, &names)?;

        trace_time!(start, "load_catalog", count = names.len());
        debug!(path = %path.display(), count = names.len(), "catalog_loaded");

        Ok(Catalog {
            path: path.to_path_buf(),
            names,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Look up a name by exact id, then by display name ignoring case
    pub fn find(&self, query: &str) -> Result<&Name> {
        if let Some(name) = self.names.iter().find(|n| n.id == query) {
            return Ok(name);
        }

        let wanted = query.trim().to_lowercase();
        self.names
            .iter()
            .find(|n| n.name.trim().to_lowercase() == wanted)
            .ok_or_else(|| NamecatError::NameNotFound {
                query: query.to_string(),
            })
    }
}

fn validate(path: &Path, names: &[Name]) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, name) in names.iter().enumerate() {
        if name.id.trim().is_empty() {
            return Err(NamecatError::invalid_catalog(
                path,
                format!("entry {} has an empty id", index),
            ));
        }
        if name.name.trim().is_empty() {
            return Err(NamecatError::invalid_catalog(
                path,
                format!("entry {} ({}) has an empty name", index, name.id),
            ));
        }
        if !seen.insert(name.id.as_str()) {
            warn!(id = %name.id, "duplicate catalog id; lookups use the first entry");
        }
    }

    Ok(())
}
