//! Contextual glyph selection for Arabic letters.
//!
//! Characters in the Arabic block (U+0621..U+064A and U+0671) are stored in
//! their abstract form; renderers that do not run their own shaping engine
//! need the text pre-resolved to Arabic Presentation Forms. [`shape`] walks
//! the logical string and substitutes each base letter with the isolated,
//! initial, medial or final variant implied by its joining context.

use phf::phf_map;
use unicode_joining_type::{JoiningType, get_joining_type};

const LAM: char = '\u{0644}';

/// Presentation forms for one base letter: isolated, final, initial, medial.
///
/// Right-joining letters have no initial or medial variant; those slots hold
/// the isolated and final fallbacks so form selection never misses.
type Forms = [char; 4];

static PRESENTATION_FORMS: phf::Map<char, Forms> = phf_map! {
    '\u{0621}' => ['\u{FE80}', '\u{FE80}', '\u{FE80}', '\u{FE80}'], // hamza
    '\u{0622}' => ['\u{FE81}', '\u{FE82}', '\u{FE81}', '\u{FE82}'], // alef with madda
    '\u{0623}' => ['\u{FE83}', '\u{FE84}', '\u{FE83}', '\u{FE84}'], // alef with hamza above
    '\u{0624}' => ['\u{FE85}', '\u{FE86}', '\u{FE85}', '\u{FE86}'], // waw with hamza
    '\u{0625}' => ['\u{FE87}', '\u{FE88}', '\u{FE87}', '\u{FE88}'], // alef with hamza below
    '\u{0626}' => ['\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'], // yeh with hamza
    '\u{0627}' => ['\u{FE8D}', '\u{FE8E}', '\u{FE8D}', '\u{FE8E}'], // alef
    '\u{0628}' => ['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'], // beh
    '\u{0629}' => ['\u{FE93}', '\u{FE94}', '\u{FE93}', '\u{FE94}'], // teh marbuta
    '\u{062A}' => ['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'], // teh
    '\u{062B}' => ['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'], // theh
    '\u{062C}' => ['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'], // jeem
    '\u{062D}' => ['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'], // hah
    '\u{062E}' => ['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'], // khah
    '\u{062F}' => ['\u{FEA9}', '\u{FEAA}', '\u{FEA9}', '\u{FEAA}'], // dal
    '\u{0630}' => ['\u{FEAB}', '\u{FEAC}', '\u{FEAB}', '\u{FEAC}'], // thal
    '\u{0631}' => ['\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}'], // reh
    '\u{0632}' => ['\u{FEAF}', '\u{FEB0}', '\u{FEAF}', '\u{FEB0}'], // zain
    '\u{0633}' => ['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'], // seen
    '\u{0634}' => ['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'], // sheen
    '\u{0635}' => ['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'], // sad
    '\u{0636}' => ['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'], // dad
    '\u{0637}' => ['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'], // tah
    '\u{0638}' => ['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'], // zah
    '\u{0639}' => ['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'], // ain
    '\u{063A}' => ['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'], // ghain
    '\u{0641}' => ['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'], // feh
    '\u{0642}' => ['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'], // qaf
    '\u{0643}' => ['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'], // kaf
    '\u{0644}' => ['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'], // lam
    '\u{0645}' => ['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'], // meem
    '\u{0646}' => ['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'], // noon
    '\u{0647}' => ['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'], // heh
    '\u{0648}' => ['\u{FEED}', '\u{FEEE}', '\u{FEED}', '\u{FEEE}'], // waw
    '\u{0649}' => ['\u{FEEF}', '\u{FEF0}', '\u{FEEF}', '\u{FEF0}'], // alef maksura
    '\u{064A}' => ['\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'], // yeh
    '\u{0671}' => ['\u{FB50}', '\u{FB51}', '\u{FB50}', '\u{FB51}'], // alef wasla
};

// Mandatory lam-alef ligatures, keyed by the alef variant: [isolated, final].
static LAM_ALEF_LIGATURES: phf::Map<char, [char; 2]> = phf_map! {
    '\u{0622}' => ['\u{FEF5}', '\u{FEF6}'],
    '\u{0623}' => ['\u{FEF7}', '\u{FEF8}'],
    '\u{0625}' => ['\u{FEF9}', '\u{FEFA}'],
    '\u{0627}' => ['\u{FEFB}', '\u{FEFC}'],
};

/// Whether `c` can join towards the character that follows it.
#[inline]
fn connects_forward(c: char) -> bool {
    matches!(
        get_joining_type(c),
        JoiningType::DualJoining | JoiningType::LeftJoining | JoiningType::JoinCausing
    )
}

/// Whether `c` can join towards the character that precedes it.
#[inline]
fn connects_backward(c: char) -> bool {
    matches!(
        get_joining_type(c),
        JoiningType::DualJoining | JoiningType::RightJoining | JoiningType::JoinCausing
    )
}

/// Transparent characters (harakat and other combining marks) neither join
/// nor break joining; they are skipped when resolving context and copied
/// through to the output unchanged.
#[inline]
fn is_transparent(c: char) -> bool {
    matches!(get_joining_type(c), JoiningType::Transparent)
}

fn prev_base(chars: &[char], i: usize) -> Option<char> {
    chars[..i].iter().rev().copied().find(|&c| !is_transparent(c))
}

fn next_base_idx(chars: &[char], i: usize) -> Option<usize> {
    (i + 1..chars.len()).find(|&j| !is_transparent(chars[j]))
}

/// Replace every Arabic base letter in `text` with its contextual
/// presentation form.
///
/// Joining context is resolved from the full logical string: whitespace,
/// punctuation, digits and letters of other scripts are non-joining, so a
/// run of Arabic letters interrupted by any of them shapes as two separate
/// runs. Characters outside the Arabic block pass through unchanged, which
/// makes the function the identity on Latin-only input.
pub fn shape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut consumed = vec![false; chars.len()];

    for i in 0..chars.len() {
        if consumed[i] {
            continue;
        }
        let c = chars[i];
        if is_transparent(c) {
            out.push(c);
            continue;
        }
        let Some(forms) = PRESENTATION_FORMS.get(&c) else {
            out.push(c);
            continue;
        };

        let joins_prev = connects_backward(c)
            && prev_base(&chars, i).is_some_and(connects_forward);

        if c == LAM {
            if let Some(j) = next_base_idx(&chars, i) {
                if let Some(ligature) = LAM_ALEF_LIGATURES.get(&chars[j]) {
                    out.push(if joins_prev { ligature[1] } else { ligature[0] });
                    // Harakat between the lam and the alef stay attached
                    for k in i + 1..j {
                        out.push(chars[k]);
                    }
                    for slot in consumed.iter_mut().take(j + 1).skip(i + 1) {
                        *slot = true;
                    }
                    continue;
                }
            }
        }

        let joins_next = connects_forward(c)
            && next_base_idx(&chars, i).is_some_and(|j| connects_backward(chars[j]));

        let form = match (joins_prev, joins_next) {
            (false, false) => forms[0],
            (true, false) => forms[1],
            (false, true) => forms[2],
            (true, true) => forms[3],
        };
        out.push(form);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_untouched() {
        assert_eq!(shape("Next.js 14 / React"), "Next.js 14 / React");
        assert_eq!(shape(""), "");
    }

    #[test]
    fn test_four_letter_word_forms() {
        // meem-hah-meem-dal: initial, medial, medial, final
        assert_eq!(shape("\u{0645}\u{062D}\u{0645}\u{062F}"), "\u{FEE3}\u{FEA4}\u{FEE4}\u{FEAA}");
    }

    #[test]
    fn test_right_joining_letter_breaks_run() {
        // dal only joins backwards, so the letter after it starts a new run
        let shaped = shape("\u{062F}\u{0631}\u{0633}");
        assert_eq!(shaped, "\u{FEA9}\u{FEAD}\u{FEB1}");
    }

    #[test]
    fn test_lam_alef_ligature() {
        // lam + alef as the whole word: isolated ligature
        assert_eq!(shape("\u{0644}\u{0627}"), "\u{FEFB}");
        // seen-lam-alef-meem: the ligature takes the final form, the meem
        // cannot join across the alef and falls back to isolated
        assert_eq!(
            shape("\u{0627}\u{0644}\u{0633}\u{0644}\u{0627}\u{0645}"),
            "\u{FE8D}\u{FEDF}\u{FEB4}\u{FEFC}\u{FEE1}"
        );
    }

    #[test]
    fn test_whitespace_resets_joining() {
        // identical words shape identically on both sides of the space
        let one = shape("\u{0628}\u{0628}");
        let two = shape("\u{0628}\u{0628} \u{0628}\u{0628}");
        assert_eq!(two, format!("{one} {one}"));
    }

    #[test]
    fn test_harakat_are_transparent() {
        // fatha between the letters must not break the join
        let plain = shape("\u{0628}\u{0628}");
        let marked = shape("\u{0628}\u{064E}\u{0628}");
        assert_eq!(plain, "\u{FE91}\u{FE90}");
        assert_eq!(marked, "\u{FE91}\u{064E}\u{FE90}");
    }

    #[test]
    fn test_tatweel_keeps_join_alive() {
        // beh + tatweel + beh: tatweel is join-causing on both sides
        let shaped = shape("\u{0628}\u{0640}\u{0628}");
        assert_eq!(shaped, "\u{FE91}\u{0640}\u{FE90}");
    }

    #[test]
    fn test_mixed_script_boundary() {
        let shaped = shape("\u{0645}\u{062D} Java");
        assert_eq!(shaped, "\u{FEE3}\u{FEA2} Java");
    }
}
