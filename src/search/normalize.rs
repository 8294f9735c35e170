//! Text normalization for flexible comparison
//!
//! Canonicalizes catalog values and queries before any matching: NFC
//! composition, lowercasing, removal of everything that is not a lowercase
//! ASCII letter, digit, preserved accented letter, or whitespace, then
//! whitespace collapsing. The accented vowels and letters of the catalog's
//! language (á é í ó ú ñ ü) survive normalization untouched.
//!
//! Total and pure: any input produces a string, never an error, and
//! `normalize(normalize(x)) == normalize(x)`.

use unicode_normalization::UnicodeNormalization;

/// Accented letters kept by the character filter
const PRESERVED: [char; 7] = ['á', 'é', 'í', 'ó', 'ú', 'ñ', 'ü'];

/// Normalize text for comparison.
///
/// NFC runs first so decomposed accents ("e" + combining acute) compose
/// into the preserved single characters instead of being stripped.
pub fn normalize(text: &str) -> String {
    let lowered: String = text.nfc().collect::<String>().to_lowercase();

    let mut filtered = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || PRESERVED.contains(&ch) {
            filtered.push(ch);
        } else if ch.is_whitespace() {
            filtered.push(' ');
        }
        // Everything else is dropped without leaving a gap
    }

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("CODIGO 2350"), "codigo 2350");
    }

    #[test]
    fn test_preserves_accents() {
        assert_eq!(normalize("Solución Número Año"), "solución número año");
        assert_eq!(normalize("pingüino ñandú"), "pingüino ñandú");
    }

    #[test]
    fn test_removes_punctuation_without_gap() {
        assert_eq!(normalize("Tipo de Cambio (art. 5)"), "tipo de cambio art 5");
        assert_eq!(normalize("codigo-2350"), "codigo2350");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  tipo \t de\n\ncambio  "), "tipo de cambio");
    }

    #[test]
    fn test_decomposed_accent_composes() {
        // "e" + combining acute composes to the preserved "é"
        assert_eq!(normalize("Solucio\u{0301}n"), "solución");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ### ???"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Tipo de Cambio (art. 5)",
            "CODIGO 2350",
            "  ñ  ü  á  ",
            "",
            "¿Qué pasó?",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }
}
