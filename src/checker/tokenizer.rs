use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything outside this class is a separator
    static ref WORD: Regex = Regex::new(r"[a-zA-Z0-9']+").unwrap();
}

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of ASCII letters, digits and apostrophes. The
/// iterator is lazy; call `tokenize` again on the same text to restart it.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}
