//! Human-readable dump of the trie shape.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::symbol::{DASH, DOT};
use crate::domain::trie::MorseTrie;

/// Label used for nodes without a character.
pub const NULL_MARKER: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown for unassigned nodes
    pub null_marker: String,
    /// Append each node's code to its label
    pub show_codes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            null_marker: NULL_MARKER.to_string(),
            show_codes: false,
        }
    }
}

pub trait TreeRender {
    fn to_tree(&self, options: &RenderOptions) -> Tree<String>;
}

impl TreeRender for MorseTrie {
    #[instrument(level = "debug", skip(self))]
    fn to_tree(&self, options: &RenderOptions) -> Tree<String> {
        fn label(trie: &MorseTrie, idx: Index, code: &str, options: &RenderOptions) -> String {
            let character = trie
                .node(idx)
                .and_then(|node| node.character)
                .map(String::from)
                .unwrap_or_else(|| options.null_marker.clone());
            if options.show_codes && !code.is_empty() {
                format!("{character} {code}")
            } else {
                character
            }
        }

        fn build_tree(
            trie: &MorseTrie,
            idx: Index,
            code: &str,
            options: &RenderOptions,
            parent_tree: &mut Tree<String>,
        ) {
            if let Some(node) = trie.node(idx) {
                for (child, symbol) in [(node.dot, DOT), (node.dash, DASH)] {
                    if let Some(child_idx) = child {
                        let child_code = format!("{code}{symbol}");
                        let mut child_tree =
                            Tree::new(label(trie, child_idx, &child_code, options));
                        build_tree(trie, child_idx, &child_code, options, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let root = self.root();
        let mut tree = Tree::new(label(self, root, "", options));
        build_tree(self, root, "", options, &mut tree);
        tree
    }
}

/// Multi-line dump with `├──`/`└──` connectors, dot child listed before dash child.
pub fn render_tree(trie: &MorseTrie) -> String {
    render_tree_with(trie, &RenderOptions::default())
}

pub fn render_tree_with(trie: &MorseTrie, options: &RenderOptions) -> String {
    trie.to_tree(options).to_string()
}
