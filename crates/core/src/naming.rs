//! Name normalization for generated files and components
//!
//! Design-tool names are free text ("Flèches & Arrows", "Café Açaí"). Generated
//! artifacts need stable ASCII-friendly segments, so every name goes through
//! [`strip_diacritics`] before being cased.

use heck::{ToKebabCase, ToUpperCamelCase};
use icu_normalizer::DecomposingNormalizerBorrowed;
use icu_properties::CodePointMapData;
use icu_properties::props::GeneralCategory;

/// Remove combining accents from `input`.
///
/// The text is decomposed (NFD) and every nonspacing mark is dropped. Letters
/// that have no canonical decomposition but are commonly written with a
/// "diacritic" (`ø`, `æ`, `ß`, ...) are folded to their base spelling.
#[must_use]
pub fn strip_diacritics(input: &str) -> String {
    let nfd = DecomposingNormalizerBorrowed::new_nfd().normalize(input);
    let categories = CodePointMapData::<GeneralCategory>::new();

    let mut out = String::with_capacity(nfd.len());
    for c in nfd.chars() {
        if categories.get(c) == GeneralCategory::NonspacingMark {
            continue;
        }
        match fold_letter(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

fn fold_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'ø' => "o",
        'Ø' => "O",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ß' => "ss",
        'đ' => "d",
        'Đ' => "D",
        'ł' => "l",
        'Ł' => "L",
        _ => return None,
    })
}

/// Diacritic-free kebab-case segment used for directories and file names.
#[must_use]
pub fn kebab_segment(input: &str) -> String {
    strip_diacritics(input).to_kebab_case()
}

/// PascalCase identifier derived from a kebab-case file name.
#[must_use]
pub fn pascal_case(input: &str) -> String {
    input.to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("Café Açaí"), "Cafe Acai");
        assert_eq!(strip_diacritics("Flèches"), "Fleches");
        assert_eq!(strip_diacritics("Ærøskøbing"), "AEroskobing");
        assert_eq!(strip_diacritics("plain"), "plain");
    }

    #[test]
    fn test_kebab_segment() {
        assert_eq!(kebab_segment("Café Açaí"), "cafe-acai");
        assert_eq!(kebab_segment("Arrows"), "arrows");
        assert_eq!(kebab_segment("ArrowLeft"), "arrow-left");
        assert_eq!(kebab_segment("Smileys & Émotions"), "smileys-emotions");
        assert_eq!(kebab_segment("chevron_down"), "chevron-down");
    }

    #[test]
    fn test_kebab_segment_is_stable() {
        let once = kebab_segment("Éléphant Rose");
        assert_eq!(once, "elephant-rose");
        assert_eq!(kebab_segment(&once), once);
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("oui-icon-left"), "OuiIconLeft");
        assert_eq!(pascal_case("oui-emoji-food-cafe-acai"), "OuiEmojiFoodCafeAcai");
    }
}
