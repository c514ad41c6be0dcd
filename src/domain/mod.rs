//! Domain layer: symbols, the Morse trie, the alphabet and tree rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod alphabet;
pub mod error;
pub mod render;
pub mod symbol;
pub mod trie;

pub use alphabet::{build_trie, ALPHABET};
pub use error::DomainError;
pub use render::{render_tree, render_tree_with, RenderOptions, TreeRender, NULL_MARKER};
pub use symbol::{Symbol, DASH, DOT};
pub use trie::{MorseTrie, PreOrderIterator, TrieNode};
