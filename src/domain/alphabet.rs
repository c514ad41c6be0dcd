//! International Morse alphabet for letters and digits.

use tracing::{debug, instrument};

use crate::domain::trie::MorseTrie;

/// `(code, character)` pairs in insertion order: letters A-Z, then digits 0-9.
pub const ALPHABET: [(&str, char); 36] = [
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    ("-----", '0'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
];

/// Build a trie holding the full [`ALPHABET`].
#[instrument(level = "debug")]
pub fn build_trie() -> MorseTrie {
    let mut trie = MorseTrie::new();
    for (code, character) in ALPHABET {
        trie.insert(code, character);
    }
    debug!("trie built: {} entries, depth {}", trie.len(), trie.depth());
    trie
}
