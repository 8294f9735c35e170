//! Catalog summary tool
//!
//! Reports which catalog file the session loaded and its basic shape, so a
//! user can tell at a glance whether the right file is in use.

use serde::Serialize;

use crate::cache::SessionCache;
use crate::cli::InfoArgs;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct CatalogSummary {
    path: String,
    records: usize,
    degraded: bool,
    clases: Vec<String>,
}

pub fn execute_info(args: &InfoArgs, cache: &mut SessionCache) -> Result<String, AppError> {
    let path = cache.catalog_path().display().to_string();
    let catalog = cache.catalog();
    let clases: Vec<String> = catalog
        .distinct_clases()
        .into_iter()
        .map(|c| c.to_string())
        .collect();
    let records = catalog.len();
    let degraded = cache.is_degraded();

    if args.json {
        let summary = CatalogSummary {
            path,
            records,
            degraded,
            clases,
        };
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let mut out = String::new();
    out.push_str("# Catálogo de errores\n\n");
    out.push_str(&format!("- Archivo: {}\n", path));
    out.push_str(&format!("- Registros: {}\n", records));
    if degraded {
        out.push_str("- Estado: ⚠️ no se pudo cargar, catálogo vacío\n");
    }
    if !clases.is_empty() {
        out.push_str(&format!("- Clases: {}\n", clases.join(", ")));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_info_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogo.csv");
        fs::write(&path, "CODIGO,Clase\n1,3\n2,5\n3,3\n").unwrap();
        let mut cache = SessionCache::new(path, dir.path().join("data"));

        let output = execute_info(&InfoArgs { json: false }, &mut cache).unwrap();
        assert!(output.contains("Registros: 3"));
        assert!(output.contains("Clases: 3, 5"));
        assert!(!output.contains("no se pudo cargar"));
    }

    #[test]
    fn test_info_degraded_json() {
        let mut cache = SessionCache::new(
            PathBuf::from("/nonexistent/catalogo.csv"),
            PathBuf::from("/nonexistent/data"),
        );

        let output = execute_info(&InfoArgs { json: true }, &mut cache).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["records"], 0);
        assert_eq!(value["degraded"], true);
    }
}
