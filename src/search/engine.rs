//! Catalog search engine
//!
//! Two-stage pipeline over the in-memory catalog. Structured filters
//! extracted from the query run first as exact AND-combined equality on
//! their columns; when they produce nothing (or no filters were extracted
//! at all) the search falls through to a normalized substring scan across
//! the searchable columns. The outcome carries an explicit stage marker so
//! callers never have to infer "which stage matched" from emptiness.

use tracing::debug;

use crate::catalog::{Catalog, Column, ErrorRecord};

use super::normalize::normalize;
use super::parser::{ParsedQuery, QueryParser};

/// Which stage of the pipeline produced the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    /// Structured column filters matched at least one record
    Structured,
    /// Fallback substring search ran (its result may still be empty)
    Text,
}

/// Result of one search: a subsequence of the catalog in original order
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub records: Vec<&'a ErrorRecord>,
    /// `None` only for the empty-query / empty-catalog short-circuit
    pub stage: Option<MatchStage>,
    /// The parsed query the outcome was computed from
    pub parsed: ParsedQuery,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Catalog searcher. Stateless; every query is independent.
pub struct CatalogSearcher;

impl CatalogSearcher {
    /// Search the catalog with a raw query.
    ///
    /// Total over its inputs: an empty query, an empty catalog, or a query
    /// nothing matches are all normal empty outcomes, never errors.
    pub fn search<'a>(catalog: &'a Catalog, raw_query: &str) -> SearchOutcome<'a> {
        let parsed = QueryParser::parse(raw_query);

        if parsed.normalized.is_empty() || catalog.is_empty() {
            return SearchOutcome {
                records: Vec::new(),
                stage: None,
                parsed,
            };
        }

        // Stage 1: exact column filters, AND-combined. A non-empty result
        // here always wins over the text fallback.
        if parsed.has_filters() {
            let hits: Vec<&ErrorRecord> = catalog
                .records()
                .iter()
                .filter(|record| Self::matches_filters(record, &parsed))
                .collect();

            if !hits.is_empty() {
                debug!(
                    "Structured filters matched {} of {} records",
                    hits.len(),
                    catalog.len()
                );
                return SearchOutcome {
                    records: hits,
                    stage: Some(MatchStage::Structured),
                    parsed,
                };
            }

            debug!("Structured filters excluded every record, falling back to text search");
        }

        // Stage 2: normalized substring search, OR across columns
        let query = parsed.normalized.as_str();
        let hits: Vec<&ErrorRecord> = catalog
            .records()
            .iter()
            .filter(|record| {
                Column::SEARCHABLE
                    .iter()
                    .any(|column| normalize(record.field(*column)).contains(query))
            })
            .collect();

        debug!("Text search matched {} of {} records", hits.len(), catalog.len());

        SearchOutcome {
            records: hits,
            stage: Some(MatchStage::Text),
            parsed,
        }
    }

    /// Exact string equality against every filter present in the query
    fn matches_filters(record: &ErrorRecord, parsed: &ParsedQuery) -> bool {
        let checks: [(&Option<String>, Column); 4] = [
            (&parsed.codigo, Column::Codigo),
            (&parsed.clase, Column::Clase),
            (&parsed.registro, Column::Normativa),
            (&parsed.campo, Column::Campo),
        ];

        checks.iter().all(|(filter, column)| match filter {
            Some(value) => record.field(*column) == value.as_str(),
            None => true,
        })
    }
}
