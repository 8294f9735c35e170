//! Session cache for catalog and normative corpus
//!
//! Explicit load-once memoization owned by the composition root: the
//! catalog and corpus are loaded on first use and reused for the process
//! lifetime. There is no other invalidation. A catalog that cannot be
//! loaded degrades to an empty one with a warning so every later query
//! cleanly reports zero results instead of crashing the session.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::{load_catalog, Catalog};
use crate::corpus::{load_corpus, NormativeCorpus};

/// Default catalog file name, looked up in the working directory first
pub const DEFAULT_CATALOG_FILE: &str = "catalogo_errores_unificado.csv";

/// Default normative data directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Per-session cache of loaded data
pub struct SessionCache {
    catalog_path: PathBuf,
    data_dir: PathBuf,
    catalog: Option<Catalog>,
    corpus: Option<NormativeCorpus>,
    degraded: bool,
}

impl SessionCache {
    pub fn new(catalog_path: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            catalog_path,
            data_dir,
            catalog: None,
            corpus: None,
            degraded: false,
        }
    }

    /// Resolve the catalog path from an explicit override, the working
    /// directory, or the platform data directory, in that order.
    pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }

        let local = PathBuf::from(DEFAULT_CATALOG_FILE);
        if local.exists() {
            return local;
        }

        if let Some(data_dir) = dirs::data_dir() {
            let shared = data_dir.join("aduanal").join(DEFAULT_CATALOG_FILE);
            if shared.exists() {
                return shared;
            }
        }

        local
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// The loaded catalog, loading it on first access.
    ///
    /// Load failure is reported once as a warning and the cache then serves
    /// an empty catalog for the rest of the session.
    pub fn catalog(&mut self) -> &Catalog {
        if self.catalog.is_none() {
            match load_catalog(&self.catalog_path) {
                Ok(catalog) => {
                    self.catalog = Some(catalog);
                }
                Err(e) => {
                    warn!("No se pudo cargar el catálogo: {}", e);
                    self.degraded = true;
                    self.catalog = Some(Catalog::empty());
                }
            }
        }
        self.catalog.as_ref().unwrap()
    }

    /// True when the last catalog load failed and the empty fallback is in use
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The normative corpus, loading it on first access
    pub fn corpus(&mut self) -> &NormativeCorpus {
        if self.corpus.is_none() {
            let corpus = load_corpus(&self.data_dir);
            info!(
                "Loaded normative corpus: {} fragments from {}",
                corpus.len(),
                self.data_dir.display()
            );
            self.corpus = Some(corpus);
        }
        self.corpus.as_ref().unwrap()
    }
}
