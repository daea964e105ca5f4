// src/cache.rs
//
// Persistent geocode cache: a flat address → {lat, lon} mapping kept in one
// JSON file. Grows monotonically — entries are never evicted, refreshed, or
// retried. A null/null entry records a lookup that failed for good.
//
// Addresses are keys verbatim: "1 Main St" and "1 Main St " are two entries.
// The file is read once at startup and rewritten wholesale at most once per
// run, and only when the run added entries. No cross-process locking.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::consts::{GEOCACHE_FILE, STORE_DIR};

/// One cached lookup. `None` coordinates mean the provider returned nothing
/// or the call failed; the entry still counts as cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Coords {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat: Some(lat), lon: Some(lon) }
    }

    /// Permanent failure marker.
    pub fn miss() -> Self {
        Self { lat: None, lon: None }
    }

    pub fn is_miss(&self) -> bool {
        self.lat.is_none() || self.lon.is_none()
    }
}

#[derive(Debug, Default)]
pub struct GeocodeCache {
    path: PathBuf,
    entries: HashMap<String, Coords>,
    added: usize,
}

impl GeocodeCache {
    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(GEOCACHE_FILE)
    }

    /// Load from `path`; an absent file is just an empty cache. A file that
    /// exists but does not parse is an error — silently dropping the cache
    /// would re-geocode everything on the next pass.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let entries = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| format!("{}: {}", path.display(), e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(format!("{}: {}", path.display(), e).into()),
        };

        logf!("Geocache: {} entr(ies) from {}", entries.len(), path.display());
        Ok(Self { path: path.to_path_buf(), entries, added: 0 })
    }

    /// Cached result, if any — including null/null failure markers.
    pub fn lookup(&self, address: &str) -> Option<Coords> {
        self.entries.get(address).copied()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.entries.contains_key(address)
    }

    /// Record a fresh lookup. First write wins: an address already present
    /// (hit or miss) is never overwritten, so failures stay permanent.
    pub fn insert(&mut self, address: &str, coords: Coords) {
        if self.entries.contains_key(address) {
            return;
        }
        self.entries.insert(s!(address), coords);
        self.added += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries added since load (i.e. whether `save_if_dirty` will write).
    pub fn added(&self) -> usize {
        self.added
    }

    /// Rewrite the whole file if this run added anything. At most one write
    /// per run; a pass that only hit the cache leaves the file untouched.
    pub fn save_if_dirty(&mut self) -> Result<(), Box<dyn Error>> {
        if self.added == 0 {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        logf!("Geocache: wrote {} entr(ies) ({} new) to {}",
            self.entries.len(), self.added, self.path.display());
        self.added = 0;
        Ok(())
    }
}
