//! The 2048-word list a mnemonic draws from.
//!
//! The mnemonic engine indexes the list with 11-bit values, so a
//! [`Wordlist`] always holds exactly 2048 distinct words. The English list
//! is taken from the `bip39` crate; other lists can be loaded from
//! newline-separated text. Words are used as given: callers that need
//! NFKD-normalized words must normalize before loading.

use std::collections::HashSet;

use seedkit_types::WordIndex;

use crate::mnemonic::MnemonicError;

/// Number of words in every list.
pub const WORDLIST_LEN: usize = 2048;

#[derive(Clone, Debug)]
enum Words {
    Static(&'static [&'static str; WORDLIST_LEN]),
    Owned(Vec<String>),
}

/// An ordered list of exactly 2048 unique words.
#[derive(Clone, Debug)]
pub struct Wordlist {
    words: Words,
}

impl Wordlist {
    /// The BIP39 English list.
    pub fn english() -> Self {
        Self {
            words: Words::Static(bip39::Language::English.word_list()),
        }
    }

    /// Build a list from owned words, checking count and uniqueness.
    pub fn from_words(words: Vec<String>) -> Result<Self, MnemonicError> {
        validate(&words, |i| format!("index {i}"))?;
        Ok(Self {
            words: Words::Owned(words),
        })
    }

    /// Parse one word per line. Surrounding whitespace and blank lines are
    /// ignored; errors name the 1-based line of the offending word.
    pub fn from_text(text: &str) -> Result<Self, MnemonicError> {
        let (lines, words): (Vec<usize>, Vec<String>) = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, word)| !word.is_empty())
            .map(|(line, word)| (line, word.to_owned()))
            .unzip();
        validate(&words, |i| format!("line {}", lines[i]))?;
        Ok(Self {
            words: Words::Owned(words),
        })
    }

    /// The word at `index`.
    pub fn word(&self, index: WordIndex) -> &str {
        match &self.words {
            Words::Static(list) => list[index.as_usize()],
            Words::Owned(list) => &list[index.as_usize()],
        }
    }

    /// Position of `word` in the list.
    pub fn index_of(&self, word: &str) -> Option<WordIndex> {
        let pos = match &self.words {
            Words::Static(list) => list.iter().position(|w| *w == word),
            Words::Owned(list) => list.iter().position(|w| w == word),
        }?;
        Some(WordIndex::from_masked(pos as u32))
    }

    pub fn len(&self) -> usize {
        WORDLIST_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        (0..WORDLIST_LEN as u32).map(move |i| self.word(WordIndex::from_masked(i)))
    }
}

/// Check count, shape and uniqueness. `position` renders the location of
/// the `i`-th word for error messages.
fn validate(words: &[String], position: impl Fn(usize) -> String) -> Result<(), MnemonicError> {
    if words.len() != WORDLIST_LEN {
        return Err(MnemonicError::InvalidWordlist(format!(
            "expected {WORDLIST_LEN} words, got {}",
            words.len()
        )));
    }
    let mut seen = HashSet::with_capacity(WORDLIST_LEN);
    for (i, word) in words.iter().enumerate() {
        if word.chars().any(char::is_whitespace) || word.is_empty() {
            return Err(MnemonicError::InvalidWordlist(format!(
                "word at {} is empty or contains whitespace",
                position(i)
            )));
        }
        if !seen.insert(word.as_str()) {
            return Err(MnemonicError::InvalidWordlist(format!(
                "duplicate word {word:?} at {}",
                position(i)
            )));
        }
    }
    Ok(())
}
