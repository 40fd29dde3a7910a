use crate::checker::tokenizer::tokenize;
use crate::error::{Error, Result};
use fst::Set;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Immutable set of known lowercase words.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Build a dictionary from one or more word-list files.
    ///
    /// Every source is tokenized in full; the result is the union of all
    /// tokens. A source that cannot be read fails the whole build.
    pub fn from_sources<P: AsRef<Path>>(sources: &[P]) -> Result<Self> {
        let mut words = BTreeSet::new();

        for source in sources {
            let path = source.as_ref();
            let bytes =
                fs::read(path).map_err(|e| Error::source_unavailable(path, "dictionary", e))?;
            let text = String::from_utf8_lossy(&bytes);

            let before = words.len();
            words.extend(tokenize(&text));
            log::info!(
                "Loaded {} new words from {}",
                words.len() - before,
                path.display()
            );
        }

        Self::from_sorted(words)
    }

    /// Build a dictionary from in-memory text; each item is tokenized first
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            set.extend(tokenize(word.as_ref()));
        }
        Self::from_sorted(set)
    }

    fn from_sorted(words: BTreeSet<String>) -> Result<Self> {
        let set = Set::from_iter(words.iter())?;
        log::debug!("Dictionary holds {} words", set.len());
        Ok(Self { set })
    }

    /// Check if word exists in dictionary (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        let probe = if word.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(word.to_ascii_lowercase())
        } else {
            Cow::Borrowed(word)
        };
        self.set.contains(probe.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
