//! Normative reference corpus
//!
//! Loads unstructured regulatory text fragments from the data directory.
//! The fragments are surfaced to the presentation layer as-is; the search
//! engine never indexes or scans them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

/// Byte cap per fragment, matching the catalog distribution format
const MAX_FRAGMENT_BYTES: usize = 80_000;

/// One named fragment of normative reference text
#[derive(Debug, Clone, Serialize)]
pub struct Fragment {
    pub name: String,
    pub bytes_loaded: usize,
    pub text: String,
}

/// The loaded corpus: zero or more fragments in directory order
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormativeCorpus {
    pub fragments: Vec<Fragment>,
}

impl NormativeCorpus {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// Load normative fragments from a data directory.
///
/// A missing directory yields an empty corpus; an unreadable file is logged
/// and skipped. Neither condition is an error, the corpus is best-effort
/// context.
pub fn load_corpus(data_dir: &Path) -> NormativeCorpus {
    if !data_dir.is_dir() {
        debug!("No normative data directory at {}", data_dir.display());
        return NormativeCorpus::default();
    }

    let mut paths: Vec<PathBuf> = match fs::read_dir(data_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect(),
        Err(e) => {
            warn!("Failed to read data directory {}: {}", data_dir.display(), e);
            return NormativeCorpus::default();
        }
    };
    paths.sort();

    let mut fragments = Vec::new();
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match fs::read(&path) {
            Ok(bytes) => {
                let slice = &bytes[..bytes.len().min(MAX_FRAGMENT_BYTES)];
                let text = String::from_utf8_lossy(slice).into_owned();
                debug!("Loaded normative fragment {} ({} bytes)", name, slice.len());
                fragments.push(Fragment {
                    name,
                    bytes_loaded: slice.len(),
                    text,
                });
            }
            Err(e) => {
                warn!("Failed to read normative fragment {}: {}", path.display(), e);
            }
        }
    }

    NormativeCorpus { fragments }
}
