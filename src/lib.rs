//! # morse-trie
//!
//! Bidirectional codec between plain text and Morse code, built on a binary
//! trie whose left edges are dots and right edges are dashes.
//!
//! ```
//! use morse_trie::{build_trie, decode, encode};
//!
//! let trie = build_trie();
//! let morse = encode(&trie, "Hello 73");
//! assert_eq!(morse, ".... . .-.. .-.. --- / --... ...-- ");
//! assert_eq!(decode(&trie, &morse), "HELLO 73");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{decode, encode, CodecService};
pub use domain::{build_trie, render_tree, MorseTrie, Symbol, TrieNode};
