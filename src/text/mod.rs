//! Logical-to-display preparation for right-to-left text.
//!
//! Deck content is authored in logical order (the order the text is typed
//! and read). Before it is written into a slide the string goes through two
//! passes: contextual glyph shaping ([`shaping`]) followed by bidirectional
//! reordering ([`bidi`]). The result is a display-order string that renders
//! correctly in viewers that neither shape nor reorder on their own.
//!
//! Both passes are pure functions of the input string. The combined
//! transformation is not idempotent: feeding a display-order string back in
//! reverses it again, so each string must be routed through [`display`]
//! exactly once.
//!
//! When the crate is built without the `shaping` feature the whole module
//! degrades to the identity transform and a warning is logged once per
//! process; the deck is still produced, just without glyph-level fidelity.

#[cfg(feature = "shaping")]
pub mod bidi;
#[cfg(feature = "shaping")]
pub mod shaping;

/// Convert a logical-order string into the display-order form stored in
/// slide XML.
///
/// # Examples
///
/// ```
/// use longan::text;
///
/// // Latin-only text is a fixed point
/// assert_eq!(text::display("Tailwind CSS"), "Tailwind CSS");
/// ```
#[cfg(feature = "shaping")]
pub fn display(logical: &str) -> String {
    bidi::reorder(&shaping::shape(logical))
}

/// Identity fallback used when the `shaping` feature is disabled.
#[cfg(not(feature = "shaping"))]
pub fn display(logical: &str) -> String {
    use std::sync::Once;

    static WARNED: Once = Once::new();
    WARNED.call_once(|| {
        log::warn!(
            "built without the `shaping` feature; Arabic text is emitted in logical order without contextual forms"
        );
    });
    logical.to_string()
}

#[cfg(all(test, feature = "shaping"))]
mod tests {
    use super::*;

    #[test]
    fn test_display_composes_both_passes() {
        assert_eq!(
            display("\u{0645}\u{062D}\u{0645}\u{062F}"),
            bidi::reorder(&shaping::shape("\u{0645}\u{062D}\u{0645}\u{062F}"))
        );
        assert_eq!(display("\u{0645}\u{062D}\u{0645}\u{062F}"), "\u{FEAA}\u{FEE4}\u{FEA4}\u{FEE3}");
    }

    #[test]
    fn test_display_is_not_idempotent() {
        let once = display("\u{0645}\u{062D}\u{0645}\u{062F}");
        let twice = display(&once);
        assert_ne!(once, twice);
        // Presentation forms are not reshaped, so the second pass is a pure
        // reversal and restores the shaped logical order
        assert_eq!(twice, shaping::shape("\u{0645}\u{062D}\u{0645}\u{062F}"));
    }

    #[test]
    fn test_display_handles_mixed_content() {
        let display = display("\u{062A}\u{0642}\u{0646}\u{064A}\u{0627}\u{062A} Next.js \u{0648} SSL");
        assert!(display.contains("Next.js"));
        assert!(display.contains("SSL"));
    }

    #[test]
    fn test_display_keeps_digit_order() {
        // The title-slide date stamp pairs an Arabic label with a numeric
        // date. The digits must survive as one contiguous, unreversed
        // fragment while the label is shaped and reordered around them.
        let stamp = display(
            "\u{062A}\u{0627}\u{0631}\u{064A}\u{062E} \u{0627}\u{0644}\u{0639}\u{0631}\u{0636}: 2026/08/23",
        );
        assert!(stamp.contains("2026/08/23"));
        assert_eq!(
            stamp,
            "2026/08/23 :\u{FEBD}\u{FEAE}\u{FECC}\u{FEDF}\u{FE8D} \u{FEA6}\u{FEF3}\u{FEAD}\u{FE8E}\u{FE97}"
        );
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_ascii_is_fixed_point(s in "[ -~]{0,40}") {
                prop_assert_eq!(display(&s), s);
            }

            #[test]
            fn prop_display_is_deterministic(s in "\\PC{0,40}") {
                prop_assert_eq!(display(&s), display(&s));
            }

            #[test]
            fn prop_output_empty_iff_input_empty(s in "[\u{0621}-\u{064A} ]{0,20}") {
                prop_assert_eq!(display(&s).is_empty(), s.is_empty());
            }
        }
    }
}

#[cfg(all(test, not(feature = "shaping")))]
mod degraded_tests {
    use super::*;

    #[test]
    fn test_display_is_identity() {
        assert_eq!(display("\u{0645}\u{062D}\u{0645}\u{062F}"), "\u{0645}\u{062D}\u{0645}\u{062F}");
        assert_eq!(display("Tailwind CSS"), "Tailwind CSS");
    }
}
