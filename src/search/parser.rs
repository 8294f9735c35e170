//! Query parser
//!
//! Extracts structured column filters from a free-form query. A filter is a
//! recognized label ("codigo", "clase", "registro", "campo") immediately
//! followed by optional whitespace and a digit run, matched against the
//! normalized query so casing and punctuation never matter. Absent labels
//! are the common case, not an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::normalize;

/// Label + optional whitespace + digits, e.g. "codigo 2350" or "codigo2350".
/// Matched against normalized text, so only lowercase labels occur.
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(codigo|clase|registro|campo)\s*(\d+)").unwrap());

/// Parsed and preprocessed search query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    /// Normalized form of the whole query, used by the text-fallback stage
    pub normalized: String,
    /// Exact-match filter on the CODIGO column
    pub codigo: Option<String>,
    /// Exact-match filter on the Clase column
    pub clase: Option<String>,
    /// Exact-match filter on the Normativa / Registro column
    pub registro: Option<String>,
    /// Exact-match filter on the Campo Relacionado column
    pub campo: Option<String>,
}

impl ParsedQuery {
    /// True when at least one structured filter was extracted
    pub fn has_filters(&self) -> bool {
        self.codigo.is_some()
            || self.clase.is_some()
            || self.registro.is_some()
            || self.campo.is_some()
    }
}

/// Query parser and preprocessor
pub struct QueryParser;

impl QueryParser {
    /// Parse a raw query into structured filters plus its normalized text.
    ///
    /// If a label appears multiple times, the first occurrence wins.
    pub fn parse(raw_query: &str) -> ParsedQuery {
        let normalized = normalize(raw_query);

        let mut parsed = ParsedQuery {
            normalized: normalized.clone(),
            ..Default::default()
        };

        for captures in LABEL_RE.captures_iter(&normalized) {
            let digits = captures[2].to_string();
            let slot = match &captures[1] {
                "codigo" => &mut parsed.codigo,
                "clase" => &mut parsed.clase,
                "registro" => &mut parsed.registro,
                "campo" => &mut parsed.campo,
                _ => unreachable!("regex alternation is exhaustive"),
            };
            if slot.is_none() {
                *slot = Some(digits);
            }
        }

        parsed
    }
}
