//! Query tool implementation
//!
//! Runs one search against the catalog and renders the outcome: markdown
//! with matched cells emphasized, or a JSON report with records, highlight
//! masks, and the stage that produced the match.

use serde::Serialize;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::cache::SessionCache;
use crate::catalog::{Column, ErrorRecord};
use crate::cli::QueryArgs;
use crate::error::{validate_query, AppError};
use crate::search::{highlight, CatalogSearcher, HighlightMask, MatchStage};

/// Cell display cap, in grapheme clusters
const MAX_CELL_GRAPHEMES: usize = 240;

/// JSON report for one query
#[derive(Debug, Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    stage: &'a str,
    total: usize,
    shown: usize,
    results: Vec<ResultEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultEntry<'a> {
    record: &'a ErrorRecord,
    /// Headers of the cells that matched the query
    highlights: Vec<&'static str>,
}

/// Execute the query command.
///
/// Zero matches is reported as `NotFound` so the caller shows a clean
/// user-facing message; the engine itself never fails.
pub fn execute_query(args: &QueryArgs, cache: &mut SessionCache) -> Result<String, AppError> {
    validate_query(&args.query)?;

    let degraded = {
        let _ = cache.catalog();
        cache.is_degraded()
    };
    let catalog = cache.catalog();

    debug!("Query: '{}' against {} records", args.query, catalog.len());

    let outcome = CatalogSearcher::search(catalog, &args.query);

    // Filters that excluded every row silently fall back to text search;
    // surface that at debug level since it can surprise users.
    if outcome.parsed.has_filters() && outcome.stage == Some(MatchStage::Text) {
        debug!("Structured filters matched nothing; text fallback produced {} rows", outcome.len());
    }

    if outcome.is_empty() {
        let hint = if degraded {
            " (el catálogo no se pudo cargar)"
        } else {
            ""
        };
        return Err(AppError::NotFound(format!(
            "No se encontró '{}' en el catálogo{}",
            args.query.trim(),
            hint
        )));
    }

    let total = outcome.len();
    let shown: Vec<&ErrorRecord> = outcome
        .records
        .iter()
        .copied()
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if args.json {
        let stage = match outcome.stage {
            Some(MatchStage::Structured) => "structured",
            Some(MatchStage::Text) => "text",
            None => "none",
        };
        let results: Vec<ResultEntry> = shown
            .iter()
            .map(|record| {
                let mask = highlight(record, &args.query);
                ResultEntry {
                    record,
                    highlights: mask
                        .highlighted_columns()
                        .into_iter()
                        .map(|c| c.header())
                        .collect(),
                }
            })
            .collect();

        let report = QueryReport {
            query: &args.query,
            stage,
            total,
            shown: results.len(),
            results,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(format_results(&shown, total, &args.query))
}

/// Render matching records as markdown, emphasizing matched cells.
pub fn format_results(records: &[&ErrorRecord], total: usize, query: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Se encontraron {} coincidencias\n\n", total));
    if records.len() < total {
        md.push_str(&format!("Mostrando las primeras {}.\n\n", records.len()));
    }

    for record in records {
        let mask = highlight(record, query);

        let title = if record.codigo.is_empty() {
            "## (sin código)".to_string()
        } else {
            format!("## CODIGO {}", record.codigo)
        };
        md.push_str(&title);
        md.push_str("\n\n");

        for column in Column::ALL {
            if column == Column::Codigo {
                continue;
            }
            let value = record.field(column);
            if value.is_empty() {
                continue;
            }
            md.push_str(&format!(
                "- {}: {}\n",
                column.header(),
                emphasized_cell(value, &mask, column)
            ));
        }

        md.push('\n');
        md.push_str("---\n\n");
    }

    md
}

/// Truncate a cell on a grapheme boundary and wrap it in `**` when its
/// column matched the query.
fn emphasized_cell(value: &str, mask: &HighlightMask, column: Column) -> String {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    let cell = if graphemes.len() > MAX_CELL_GRAPHEMES {
        format!("{}…", graphemes[..MAX_CELL_GRAPHEMES].concat())
    } else {
        value.to_string()
    };

    if mask.is_highlighted(column) {
        format!("**{}**", cell)
    } else {
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cache_with_catalog(rows: &str) -> (TempDir, SessionCache) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogo.csv");
        fs::write(
            &path,
            format!(
                "CODIGO,Clase,Normativa / Registro,Campo Relacionado,Error / Descripción,Solución\n{}",
                rows
            ),
        )
        .unwrap();
        let cache = SessionCache::new(path, dir.path().join("data"));
        (dir, cache)
    }

    fn query_args(query: &str) -> QueryArgs {
        QueryArgs {
            query: query.to_string(),
            limit: None,
            json: false,
        }
    }

    #[test]
    fn test_query_renders_count_and_highlight() {
        let (_dir, mut cache) = cache_with_catalog(
            "2350,3,500,2,Tipo de Cambio incorrecto,Verificar tipo de cambio\n",
        );

        let output = execute_query(&query_args("tipo de cambio"), &mut cache).unwrap();
        assert!(output.contains("Se encontraron 1 coincidencias"));
        assert!(output.contains("## CODIGO 2350"));
        assert!(output.contains("**Tipo de Cambio incorrecto**"));
        assert!(output.contains("**Verificar tipo de cambio**"));
        // Clase did not match and must not be emphasized
        assert!(output.contains("- Clase: 3\n"));
    }

    #[test]
    fn test_structured_query_single_row() {
        let (_dir, mut cache) = cache_with_catalog(
            "2350,3,500,2,Tipo de Cambio incorrecto,Verificar\n10,5,100,1,Otro error,Nada\n",
        );

        let output = execute_query(&query_args("codigo 2350"), &mut cache).unwrap();
        assert!(output.contains("## CODIGO 2350"));
        assert!(!output.contains("## CODIGO 10"));
    }

    #[test]
    fn test_no_match_is_not_found() {
        let (_dir, mut cache) = cache_with_catalog("2350,3,500,2,Error,Solución\n");

        let result = execute_query(&query_args("inexistente"), &mut cache);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_empty_query_rejected_at_boundary() {
        let (_dir, mut cache) = cache_with_catalog("2350,3,500,2,Error,Solución\n");

        let result = execute_query(&query_args("   "), &mut cache);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_degraded_catalog_mentioned_in_not_found() {
        let mut cache = SessionCache::new(
            PathBuf::from("/nonexistent/catalogo.csv"),
            PathBuf::from("/nonexistent/data"),
        );

        let err = execute_query(&query_args("codigo 2350"), &mut cache).unwrap_err();
        let message = err.message();
        assert!(message.contains("no se pudo cargar"));
    }

    #[test]
    fn test_limit_respected() {
        let (_dir, mut cache) = cache_with_catalog(
            "1,1,1,1,error comun,a\n2,1,1,1,error comun,b\n3,1,1,1,error comun,c\n",
        );

        let args = QueryArgs {
            query: "error comun".to_string(),
            limit: Some(2),
            json: false,
        };
        let output = execute_query(&args, &mut cache).unwrap();
        assert!(output.contains("Se encontraron 3 coincidencias"));
        assert!(output.contains("Mostrando las primeras 2"));
        assert!(output.contains("## CODIGO 1"));
        assert!(output.contains("## CODIGO 2"));
        assert!(!output.contains("## CODIGO 3"));
    }

    #[test]
    fn test_json_report_shape() {
        let (_dir, mut cache) = cache_with_catalog(
            "2350,3,500,2,Tipo de Cambio incorrecto,Verificar\n",
        );

        let args = QueryArgs {
            query: "codigo 2350".to_string(),
            limit: None,
            json: true,
        };
        let output = execute_query(&args, &mut cache).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["stage"], "structured");
        assert_eq!(value["total"], 1);
        assert_eq!(value["results"][0]["record"]["CODIGO"], "2350");
        // The highlight substring is the whole normalized query, which no
        // cell of this row contains
        let highlights = value["results"][0]["highlights"].as_array().unwrap();
        assert!(highlights.is_empty());

        // A bare code reaches the row through the text stage, and then the
        // CODIGO cell itself carries the match
        let args = QueryArgs {
            query: "2350".to_string(),
            limit: None,
            json: true,
        };
        let output = execute_query(&args, &mut cache).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["stage"], "text");
        let highlights = value["results"][0]["highlights"].as_array().unwrap();
        assert!(highlights.iter().any(|h| h == "CODIGO"));
    }

    #[test]
    fn test_format_results_skips_empty_cells() {
        let record = ErrorRecord {
            codigo: "7".to_string(),
            descripcion: "Dato faltante".to_string(),
            ..Default::default()
        };

        let md = format_results(&[&record], 1, "dato");
        assert!(md.contains("Error / Descripción"));
        assert!(!md.contains("Solución"));
    }

    #[test]
    fn test_long_cell_truncated_on_grapheme_boundary() {
        let record = ErrorRecord {
            codigo: "1".to_string(),
            descripcion: format!("match {}", "á".repeat(400)),
            ..Default::default()
        };

        let md = format_results(&[&record], 1, "match");
        assert!(md.contains('…'));
        // No broken UTF-8: the output is a valid String by construction,
        // but the truncated run must still be whole "á" characters.
        assert!(md.contains("áá"));
    }
}
