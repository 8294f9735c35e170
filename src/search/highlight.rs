//! Match highlighting
//!
//! Decides, per displayed cell, whether the cell's content matched the
//! query and should be visually emphasized. Operates on normalized text on
//! both sides, independently per cell.

use serde::Serialize;

use crate::catalog::{Column, ErrorRecord};

use super::normalize::normalize;

/// Per-column highlight flags for one displayed record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightMask {
    flags: [bool; Column::ALL.len()],
}

impl HighlightMask {
    pub fn is_highlighted(&self, column: Column) -> bool {
        self.flags[column.index()]
    }

    /// Columns flagged for emphasis, in display order
    pub fn highlighted_columns(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .copied()
            .filter(|c| self.is_highlighted(*c))
            .collect()
    }

    #[allow(dead_code)]
    pub fn any(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }
}

/// Compute the highlight mask for one record against the original query.
///
/// An empty normalized query highlights nothing; the degenerate
/// empty-substring-matches-everything case never occurs.
pub fn highlight(record: &ErrorRecord, raw_query: &str) -> HighlightMask {
    let query = normalize(raw_query);
    if query.is_empty() {
        return HighlightMask::default();
    }

    let mut mask = HighlightMask::default();
    for column in Column::ALL {
        mask.flags[column.index()] = normalize(record.field(column)).contains(&query);
    }
    mask
}
