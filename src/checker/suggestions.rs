use crate::checker::dictionary::Dictionary;
use std::collections::HashSet;

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Generate replacements that are one insertion or one deletion away.
///
/// Candidates come out in generation order: every deletion (left to right)
/// before every insertion (left to right, then `a` through `z`). A word
/// reachable through several edits is listed once, at its first position.
pub fn generate(word: &str, dictionary: &Dictionary) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut emitted = HashSet::new();
    let mut suggestions = Vec::new();

    let mut offer = |candidate: String| {
        if dictionary.contains(&candidate) && emitted.insert(candidate.clone()) {
            suggestions.push(candidate);
        }
    };

    for candidate in deletions(&chars) {
        offer(candidate);
    }
    for candidate in insertions(&chars) {
        offer(candidate);
    }

    log::trace!("{} replacement(s) for '{}'", suggestions.len(), word);
    suggestions
}

fn deletions(chars: &[char]) -> impl Iterator<Item = String> + '_ {
    (0..chars.len()).map(move |i| {
        let mut new_word = chars.to_vec();
        new_word.remove(i);
        new_word.iter().collect()
    })
}

fn insertions(chars: &[char]) -> impl Iterator<Item = String> + '_ {
    (0..=chars.len()).flat_map(move |i| {
        ALPHABET.map(move |letter| {
            let mut new_word = chars.to_vec();
            new_word.insert(i, letter);
            new_word.iter().collect()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words).unwrap()
    }

    #[test]
    fn test_deletion_finds_shorter_word() {
        let suggestions = generate("cats", &dict(&["cat"]));
        assert_eq!(suggestions, vec!["cat"]);
    }

    #[test]
    fn test_deletion_at_first_index() {
        let suggestions = generate("xcat", &dict(&["cat"]));
        assert_eq!(suggestions, vec!["cat"]);
    }

    #[test]
    fn test_insertion_finds_longer_word() {
        let suggestions = generate("cat", &dict(&["cats"]));
        assert_eq!(suggestions, vec!["cats"]);
    }

    #[test]
    fn test_insertion_at_both_ends() {
        let suggestions = generate("at", &dict(&["bat", "ate"]));
        assert_eq!(suggestions, vec!["bat", "ate"]);
    }

    #[test]
    fn test_duplicate_edits_listed_once() {
        // 's' inserted before or after the existing 's' gives the same word
        let suggestions = generate("mispelled", &dict(&["misspelled"]));
        assert_eq!(suggestions, vec!["misspelled"]);
    }

    #[test]
    fn test_deletions_come_before_insertions() {
        let suggestions = generate("bat", &dict(&["bath", "at", "ba", "abat"]));
        assert_eq!(suggestions, vec!["at", "ba", "abat", "bath"]);
    }

    #[test]
    fn test_insertion_letters_in_alphabetical_order() {
        let suggestions = generate("at", &dict(&["rat", "cat", "mat"]));
        assert_eq!(suggestions, vec!["cat", "mat", "rat"]);
    }

    #[test]
    fn test_no_candidates() {
        assert!(generate("qzxv", &dict(&["apple", "banana"])).is_empty());
        assert!(generate("", &dict(&["apple"])).is_empty());
    }

    #[test]
    fn test_no_substitutions_or_transpositions() {
        let d = dict(&["cat"]);
        assert!(generate("cot", &d).is_empty());
        assert!(generate("act", &d).is_empty());
    }
}
