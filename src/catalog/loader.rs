//! Catalog file loading
//!
//! Reads the unified error catalog from CSV. Headers and values are
//! whitespace-trimmed on the way in, which is what makes the searcher's
//! exact-equality filter comparisons safe. Columns the catalog does not
//! carry are defaulted to empty strings per record.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tracing::{debug, info};

use super::{Catalog, ErrorRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(String),
    #[error("Catalog read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Load the error catalog from a CSV file.
///
/// Rows that fail to deserialize abort the load; a catalog that cannot be
/// read in full is reported upstream as a `CatalogError`, and the session
/// cache degrades it to an empty catalog rather than crashing the search
/// path.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()));
    }

    debug!("Loading catalog from {}", path.display());

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ErrorRecord = result?;
        records.push(record);
    }

    info!("Loaded catalog: {} records from {}", records.len(), path.display());
    Ok(Catalog::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Column;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_catalog() {
        let file = write_csv(
            "CODIGO,Clase,Normativa / Registro,Campo Relacionado,Error / Descripción,Solución,Ejemplo / Referencia,Criterio Relacionado,Llenado / Observaciones\n\
             2350,3,500,2,Tipo de cambio inválido,Verificar el tipo de cambio,Ejemplo A,Criterio B,Observación C\n",
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let record = &catalog.records()[0];
        assert_eq!(record.codigo, "2350");
        assert_eq!(record.clase, "3");
        assert_eq!(record.normativa, "500");
        assert_eq!(record.campo, "2");
        assert_eq!(record.descripcion, "Tipo de cambio inválido");
    }

    #[test]
    fn test_headers_and_values_trimmed() {
        let file = write_csv(
            " CODIGO , Clase \n  2350 , 3 \n",
        );

        let catalog = load_catalog(file.path()).unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.codigo, "2350");
        assert_eq!(record.clase, "3");
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let file = write_csv("CODIGO,Clase\n10,5\n");

        let catalog = load_catalog(file.path()).unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.codigo, "10");
        assert_eq!(record.clase, "5");
        for column in [
            Column::Normativa,
            Column::Campo,
            Column::Descripcion,
            Column::Solucion,
            Column::Ejemplo,
            Column::Criterio,
            Column::Llenado,
        ] {
            assert_eq!(record.field(column), "");
        }
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let file = write_csv("CODIGO,Extra Column\n77,ignored\n");

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.records()[0].codigo, "77");
    }

    #[test]
    fn test_missing_file_reported() {
        let result = load_catalog(Path::new("/nonexistent/catalogo.csv"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_row_order_preserved() {
        let file = write_csv("CODIGO\n3\n1\n2\n");

        let catalog = load_catalog(file.path()).unwrap();
        let codigos: Vec<&str> = catalog
            .records()
            .iter()
            .map(|r| r.codigo.as_str())
            .collect();
        assert_eq!(codigos, vec!["3", "1", "2"]);
    }
}
