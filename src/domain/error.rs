//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Raised only by strict validation; the trie and the pipelines never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no Morse code for character {character:?} at position {position}")]
    UnmappedCharacter { character: char, position: usize },

    #[error("no character for Morse code {code:?} at position {position}")]
    UnresolvableCode { code: String, position: usize },
}
