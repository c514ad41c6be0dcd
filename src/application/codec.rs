//! Text <-> Morse pipelines
//!
//! Both directions degrade silently: unmapped characters and unresolvable
//! letter-codes are dropped, never reported. [`validate_text`] and
//! [`validate_morse`] give callers a strict pre-check on the same tokenization.

use tracing::{debug, instrument, trace};

use crate::domain::{DomainError, MorseTrie};

/// Separates words in Morse text.
pub const WORD_SEPARATOR: char = '/';
/// Separates letter-codes within a word.
pub const LETTER_SEPARATOR: char = ' ';

/// Encode `text` as Morse.
///
/// Lower-case ASCII letters are upper-cased first. A space becomes `"/ "`,
/// every other character with a code becomes its code plus one trailing
/// space, and everything else is dropped.
///
/// ```
/// use morse_trie::{build_trie, encode};
/// let trie = build_trie();
/// assert_eq!(encode(&trie, "sos"), "... --- ... ");
/// ```
#[instrument(level = "debug", skip(trie))]
pub fn encode(trie: &MorseTrie, text: &str) -> String {
    let mut morse = String::with_capacity(text.len() * 5);
    for c in text.chars() {
        let c = c.to_ascii_uppercase();
        if c == ' ' {
            morse.push(WORD_SEPARATOR);
            morse.push(LETTER_SEPARATOR);
            continue;
        }
        match trie.code_for(c) {
            Some(code) => {
                morse.push_str(&code);
                morse.push(LETTER_SEPARATOR);
            }
            None => trace!("dropping unmapped character {:?}", c),
        }
    }
    morse
}

/// Decode Morse text.
///
/// Words are split on `/`, letter-codes on single spaces. Empty and
/// unresolvable letter-codes contribute nothing. Every word, even one that
/// decodes to nothing, is followed by one space except the last; input
/// that decodes no character at all yields `""`.
#[instrument(level = "debug", skip(trie))]
pub fn decode(trie: &MorseTrie, morse: &str) -> String {
    let words: Vec<String> = morse
        .split(WORD_SEPARATOR)
        .map(|word| {
            letter_codes(word)
                .filter_map(|code| trie.lookup(code))
                .collect::<String>()
        })
        .collect();
    debug!("decoded {} words", words.len());
    if words.iter().all(String::is_empty) {
        return String::new();
    }
    words.join(" ")
}

/// Non-empty letter-codes of one word.
fn letter_codes(word: &str) -> impl Iterator<Item = &str> {
    word.split(LETTER_SEPARATOR).filter(|code| !code.is_empty())
}

/// Fail on the first character [`encode`] would drop.
pub fn validate_text(trie: &MorseTrie, text: &str) -> Result<(), DomainError> {
    for (position, character) in text.chars().enumerate() {
        if character != ' ' && trie.code_for(character.to_ascii_uppercase()).is_none() {
            return Err(DomainError::UnmappedCharacter {
                character,
                position,
            });
        }
    }
    Ok(())
}

/// Fail on the first letter-code [`decode`] would drop.
///
/// The reported position counts non-empty letter-codes across all words.
pub fn validate_morse(trie: &MorseTrie, morse: &str) -> Result<(), DomainError> {
    let codes = morse.split(WORD_SEPARATOR).flat_map(letter_codes);
    for (position, code) in codes.enumerate() {
        if trie.lookup(code).is_none() {
            return Err(DomainError::UnresolvableCode {
                code: code.to_string(),
                position,
            });
        }
    }
    Ok(())
}
