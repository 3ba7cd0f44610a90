//! Maidenhead locator validation.

/// Fallback used whenever the locator cannot be trusted.
const LOCATOR_FALLBACK: &str = "AA00";

/// Validate the four character Maidenhead locator.
///
/// Characters must be digits or letters A-R (case insensitive). On any
/// invalid character the whole locator is replaced with `"AA00"`; there is
/// no per-character repair. Receivers depend on this exact fallback.
pub fn normalize_locator(raw: &str) -> String {
    let chars: Vec<char> = raw
        .chars()
        .take(4)
        .map(|ch| ch.to_ascii_uppercase())
        .collect();

    let valid = chars.len() == 4
        && chars
            .iter()
            .all(|&ch| ch.is_ascii_digit() || ('A'..='R').contains(&ch));

    if valid {
        chars.iter().collect()
    } else {
        LOCATOR_FALLBACK.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_normalize_locator {
        ($name:ident, $raw:expr, $expected:expr) => {
            paste::item! {
                #[test]
                fn [< normalizes_ $name >]() {
                    assert_eq!(normalize_locator($raw), $expected);
                }
            }
        };
    }

    test_normalize_locator!(valid_locator, "FN42", "FN42");
    test_normalize_locator!(lowercase_locator, "fn42", "FN42");
    test_normalize_locator!(letter_past_r_rejected, "FS42", "AA00");
    test_normalize_locator!(punctuation_rejected, "F-42", "AA00");
    test_normalize_locator!(short_locator_rejected, "FN4", "AA00");
    test_normalize_locator!(empty_locator_rejected, "", "AA00");
    test_normalize_locator!(six_char_input_truncated, "FN42AB", "FN42");
    test_normalize_locator!(all_digit_locator_kept, "0000", "0000");

    #[test]
    fn single_bad_character_discards_valid_ones() {
        // the entire field falls back, even though three characters were fine
        assert_eq!(normalize_locator("FN4Z"), "AA00");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["FN42", "fn42", "QF22", "XX99"] {
            let once = normalize_locator(raw);
            assert_eq!(normalize_locator(&once), once);
        }
    }
}
