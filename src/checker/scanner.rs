use crate::checker::dictionary::Dictionary;
use crate::checker::tokenizer::tokenize;
use crate::Misspelling;

/// Collect every token absent from the dictionary, in reading order.
///
/// Lines are numbered from 1 and blank lines still count. A word that
/// recurs is reported once per occurrence.
pub fn scan(content: &str, dictionary: &Dictionary) -> Vec<Misspelling> {
    let mut misspellings = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        for word in tokenize(line) {
            if !dictionary.contains(&word) {
                misspellings.push(Misspelling {
                    text: word,
                    line: line_num,
                });
            }
        }
    }

    misspellings
}
