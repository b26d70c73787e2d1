use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLURAL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+s\b").expect("invalid plural regex"));

/// Drops the trailing "s" of every plural-looking word.
///
/// Words ending in "ss" ("class", "boss") are left alone, as are lone
/// one-letter words.
///
/// # Examples
/// ```
/// assert_eq!(np_lobby::util::singularize("ships stars"), "ship star");
/// assert_eq!(np_lobby::util::singularize("class"), "class");
/// ```
pub fn singularize(text: &str) -> String {
    PLURAL_WORD
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            if word.ends_with("ss") {
                word.to_string()
            } else {
                word[..word.len() - 1].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("ships stars"), "ship star");
        assert_eq!(singularize("64 Player Games"), "64 Player Game");
        assert_eq!(singularize("Official Proteus Games"), "Official Proteu Game");

        // Left untouched
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("s"), "s");
        assert_eq!(singularize("fleet"), "fleet");
        assert_eq!(singularize(""), "");

        // Punctuation is a word boundary
        assert_eq!(singularize("carriers, stars."), "carrier, star.");
    }
}
