//! Catalog data model
//!
//! Typed representation of the unified error catalog: nine fixed columns,
//! every value a string, missing values stored as empty strings (never
//! absent). Records are addressed through the `Column` enum so a filter can
//! only ever reach a real field.

pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::{load_catalog, CatalogError};

/// The nine recognized catalog columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Codigo,
    Clase,
    Normativa,
    Campo,
    Descripcion,
    Solucion,
    Ejemplo,
    Criterio,
    Llenado,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 9] = [
        Column::Codigo,
        Column::Clase,
        Column::Normativa,
        Column::Campo,
        Column::Descripcion,
        Column::Solucion,
        Column::Ejemplo,
        Column::Criterio,
        Column::Llenado,
    ];

    /// Columns scanned by the fallback text search
    pub const SEARCHABLE: [Column; 5] = [
        Column::Codigo,
        Column::Descripcion,
        Column::Clase,
        Column::Normativa,
        Column::Campo,
    ];

    /// The exact header as it appears in the catalog file
    pub fn header(&self) -> &'static str {
        match self {
            Column::Codigo => "CODIGO",
            Column::Clase => "Clase",
            Column::Normativa => "Normativa / Registro",
            Column::Campo => "Campo Relacionado",
            Column::Descripcion => "Error / Descripción",
            Column::Solucion => "Solución",
            Column::Ejemplo => "Ejemplo / Referencia",
            Column::Criterio => "Criterio Relacionado",
            Column::Llenado => "Llenado / Observaciones",
        }
    }

    /// Position in display order, usable as an array index
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// One row of the error catalog.
///
/// Field names follow the catalog headers; serde renames map them back to
/// the exact header strings so the CSV loader and the JSON output agree
/// with the file format. Every field defaults to `""` when the column is
/// missing from the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "CODIGO", default)]
    pub codigo: String,
    #[serde(rename = "Clase", default)]
    pub clase: String,
    #[serde(rename = "Normativa / Registro", default)]
    pub normativa: String,
    #[serde(rename = "Campo Relacionado", default)]
    pub campo: String,
    #[serde(rename = "Error / Descripción", default)]
    pub descripcion: String,
    #[serde(rename = "Solución", default)]
    pub solucion: String,
    #[serde(rename = "Ejemplo / Referencia", default)]
    pub ejemplo: String,
    #[serde(rename = "Criterio Relacionado", default)]
    pub criterio: String,
    #[serde(rename = "Llenado / Observaciones", default)]
    pub llenado: String,
}

impl ErrorRecord {
    /// Access a field by column
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Codigo => &self.codigo,
            Column::Clase => &self.clase,
            Column::Normativa => &self.normativa,
            Column::Campo => &self.campo,
            Column::Descripcion => &self.descripcion,
            Column::Solucion => &self.solucion,
            Column::Ejemplo => &self.ejemplo,
            Column::Criterio => &self.criterio,
            Column::Llenado => &self.llenado,
        }
    }
}

/// The full catalog: an ordered, read-only sequence of records.
///
/// Duplicates are preserved as-is; the searcher never reorders rows.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ErrorRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ErrorRecord>) -> Self {
        Self { records }
    }

    /// Empty catalog, used as the degraded state when loading fails
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of the `Clase` column, in first-seen order
    pub fn distinct_clases(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            let clase = record.clase.as_str();
            if !clase.is_empty() && !seen.contains(&clase) {
                seen.push(clase);
            }
        }
        seen
    }
}
