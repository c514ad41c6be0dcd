//! Codec service
//!
//! Wraps a shared trie and the silent pipelines, adding opt-in strict
//! validation and not-found errors for single lookups.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::codec::{decode, encode, validate_morse, validate_text};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{render_tree_with, MorseTrie, RenderOptions};

/// Service for translating between text and Morse.
#[derive(Debug, Clone)]
pub struct CodecService {
    trie: Arc<MorseTrie>,
    strict: bool,
}

impl CodecService {
    /// Create a new codec service over a populated trie.
    pub fn new(trie: Arc<MorseTrie>, strict: bool) -> Self {
        Self { trie, strict }
    }

    /// Service over the standard alphabet.
    pub fn standard(strict: bool) -> Self {
        Self::new(Arc::new(MorseTrie::standard()), strict)
    }

    pub fn trie(&self) -> &MorseTrie {
        &self.trie
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Encode text; in strict mode the first unmapped character is an error.
    #[instrument(level = "debug", skip(self))]
    pub fn encode(&self, text: &str) -> ApplicationResult<String> {
        if self.strict {
            validate_text(&self.trie, text)?;
        }
        let morse = encode(&self.trie, text);
        debug!("encode: {} chars -> {} bytes", text.chars().count(), morse.len());
        Ok(morse)
    }

    /// Decode Morse; in strict mode the first unresolvable letter-code is an error.
    #[instrument(level = "debug", skip(self))]
    pub fn decode(&self, morse: &str) -> ApplicationResult<String> {
        if self.strict {
            validate_morse(&self.trie, morse)?;
        }
        Ok(decode(&self.trie, morse))
    }

    /// Character for a single code.
    pub fn lookup(&self, code: &str) -> ApplicationResult<char> {
        self.trie
            .lookup(code)
            .ok_or_else(|| ApplicationError::CodeNotFound(code.to_string()))
    }

    /// Code for a single character, upper-casing ASCII letters first.
    pub fn code_for(&self, character: char) -> ApplicationResult<String> {
        self.trie
            .code_for(character.to_ascii_uppercase())
            .ok_or(ApplicationError::CharacterNotFound(character))
    }

    /// Assigned `(code, character)` pairs in trie pre-order.
    pub fn table(&self) -> Vec<(String, char)> {
        self.trie.entries().collect()
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        render_tree_with(&self.trie, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_lenient_service_when_encoding_unmapped_then_drops_silently() {
        let service = CodecService::standard(false);
        assert_eq!(service.encode("a#").unwrap(), ".- ");
    }

    #[test]
    fn given_strict_service_when_encoding_unmapped_then_fails() {
        let service = CodecService::standard(true);
        let err = service.encode("a#").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnmappedCharacter {
                character: '#',
                position: 1
            })
        ));
    }

    #[test]
    fn given_strict_service_when_decoding_valid_input_then_succeeds() {
        let service = CodecService::standard(true);
        assert_eq!(service.decode("... --- ...").unwrap(), "SOS");
        assert!(service.decode("...---...").is_err());
    }

    #[test]
    fn given_lowercase_character_when_looking_up_code_then_uppercases() {
        let service = CodecService::standard(false);
        assert_eq!(service.code_for('q').unwrap(), "--.-");
        assert!(matches!(
            service.code_for('?'),
            Err(ApplicationError::CharacterNotFound('?'))
        ));
        assert!(matches!(
            service.lookup("..--"),
            Err(ApplicationError::CodeNotFound(_))
        ));
    }
}
