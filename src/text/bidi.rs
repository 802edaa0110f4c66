//! Visual reordering of bidirectional text.
//!
//! PresentationML run text is rendered verbatim by consumers that do not
//! apply the Unicode Bidirectional Algorithm themselves, so mixed
//! Arabic/Latin strings have to be stored in visual order. [`reorder`] runs
//! the UBA over the logical string and flattens the result: right-to-left
//! runs are reversed character by character, embedded left-to-right runs
//! (Latin fragments, digits) keep their internal order.

use phf::phf_map;
use unicode_bidi::BidiInfo;

// Paired punctuation swapped when it lands in a reversed run (UBA rule L4).
static MIRRORED: phf::Map<char, char> = phf_map! {
    '(' => ')',
    ')' => '(',
    '<' => '>',
    '>' => '<',
    '[' => ']',
    ']' => '[',
    '{' => '}',
    '}' => '{',
};

/// Reorder `text` from logical order into left-to-right visual order.
///
/// The paragraph direction is detected from the first strong character, so
/// Latin-only strings come back unchanged while Arabic-led strings are laid
/// out right-to-left. The output has exactly the characters of the input,
/// possibly permuted and with paired brackets mirrored inside reversed runs.
pub fn reorder(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let bidi = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());
    for para in &bidi.paragraphs {
        let (levels, runs) = bidi.visual_runs(para, para.range.clone());
        for run in runs {
            if levels[run.start].is_rtl() {
                for c in text[run.clone()].chars().rev() {
                    out.push(MIRRORED.get(&c).copied().unwrap_or(c));
                }
            } else {
                out.push_str(&text[run.clone()]);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_identity() {
        assert_eq!(reorder("Laravel 11 REST API"), "Laravel 11 REST API");
        assert_eq!(reorder(""), "");
    }

    #[test]
    fn test_rtl_is_reversed() {
        assert_eq!(reorder("\u{FEE3}\u{FEA4}\u{FEE4}\u{FEAA}"), "\u{FEAA}\u{FEE4}\u{FEA4}\u{FEE3}");
    }

    #[test]
    fn test_embedded_latin_keeps_order() {
        // Arabic sentence with an embedded acronym: the Latin fragment must
        // survive contiguously and unreversed
        let display = reorder("\u{FEE3}\u{FEA4} LMS \u{FEE3}\u{FEA4}");
        assert!(display.contains("LMS"));
        assert_eq!(display, "\u{FEA4}\u{FEE3} LMS \u{FEA4}\u{FEE3}");
    }

    #[test]
    fn test_digits_keep_order() {
        // European digits resolve to a left-to-right run even inside an
        // RTL paragraph; the separators travel with them
        assert_eq!(reorder("\u{FEE3}\u{FEA4} 2026/08/23"), "2026/08/23 \u{FEA4}\u{FEE3}");
    }

    #[test]
    fn test_brackets_are_mirrored() {
        let display = reorder("\u{FEE3}\u{FEA4} (LMS) \u{FEE3}\u{FEA4}");
        assert!(display.contains("(LMS)"));
        assert!(!display.contains(")LMS("));
    }

    #[test]
    fn test_character_multiset_is_preserved() {
        let input = "\u{FEE3}\u{FEA4} Next.js \u{FEAA}\u{FEE4}";
        let mut want: Vec<char> = input.chars().collect();
        let mut got: Vec<char> = reorder(input).chars().collect();
        want.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, want);
    }
}
