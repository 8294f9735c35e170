//! Normative corpus listing tool
//!
//! Surfaces the loaded reference fragments. The text is passed through
//! unmodified; the search engine never touches it.

use unicode_segmentation::UnicodeSegmentation;

use crate::cache::SessionCache;
use crate::cli::NormativaArgs;
use crate::error::AppError;

/// Preview length for the listing, in grapheme clusters
const PREVIEW_GRAPHEMES: usize = 120;

pub fn execute_normativa(
    args: &NormativaArgs,
    cache: &mut SessionCache,
) -> Result<String, AppError> {
    let corpus = cache.corpus();

    if args.json {
        return Ok(serde_json::to_string_pretty(corpus)?);
    }

    if corpus.is_empty() {
        return Ok("No hay documentos normativos cargados.".to_string());
    }

    let mut out = String::new();
    out.push_str(&format!("# Normativa · {} documentos\n\n", corpus.len()));
    for fragment in &corpus.fragments {
        out.push_str(&format!(
            "## {} ({} bytes)\n\n",
            fragment.name, fragment.bytes_loaded
        ));

        let graphemes: Vec<&str> = fragment.text.graphemes(true).collect();
        let preview = if graphemes.len() > PREVIEW_GRAPHEMES {
            format!("{}…", graphemes[..PREVIEW_GRAPHEMES].concat())
        } else {
            fragment.text.clone()
        };
        if !preview.is_empty() {
            out.push_str(&format!("> {}\n\n", preview.replace('\n', " ")));
        }
    }

    Ok(out)
}
