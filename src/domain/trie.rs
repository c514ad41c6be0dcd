use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::symbol::{symbols, Symbol, DASH, DOT};

/// One trie position. Dot edges go left, dash edges go right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Resolved character, None for internal/unassigned positions
    pub character: Option<char>,
    /// Child reached by consuming a dot
    pub dot: Option<Index>,
    /// Child reached by consuming a dash
    pub dash: Option<Index>,
}

impl TrieNode {
    pub fn child(&self, symbol: Symbol) -> Option<Index> {
        match symbol {
            Symbol::Dot => self.dot,
            Symbol::Dash => self.dash,
        }
    }

    fn child_slot(&mut self, symbol: Symbol) -> &mut Option<Index> {
        match symbol {
            Symbol::Dot => &mut self.dot,
            Symbol::Dash => &mut self.dash,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.dot.is_none() && self.dash.is_none()
    }
}

/// Binary trie keyed by Morse symbols.
///
/// Nodes live in a generational arena and are never removed, so every index
/// handed out by the trie stays valid for its lifetime. The root represents
/// the empty prefix and normally carries no character.
#[derive(Debug)]
pub struct MorseTrie {
    arena: Arena<TrieNode>,
    root: Index,
}

impl Default for MorseTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl MorseTrie {
    /// Empty trie: a single unassigned root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TrieNode::default());
        Self { arena, root }
    }

    /// Trie populated with the international A-Z / 0-9 alphabet.
    pub fn standard() -> Self {
        crate::domain::alphabet::build_trie()
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&TrieNode> {
        self.arena.get(idx)
    }

    /// Assign `character` to the node addressed by `code`, creating missing
    /// nodes on the way. Characters other than `.` and `-` are skipped, and a
    /// later insert for the same code replaces the earlier character.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, code: &str, character: char) {
        let mut current = self.root;
        for symbol in symbols(code) {
            current = match self.arena[current].child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.arena.insert(TrieNode::default());
                    *self.arena[current].child_slot(symbol) = Some(next);
                    next
                }
            };
        }

        if let Some(previous) = self.arena[current].character.replace(character) {
            if previous != character {
                debug!("code {:?}: {:?} replaced by {:?}", code, previous, character);
            }
        }
    }

    /// Resolve a code to its character.
    ///
    /// Foreign characters in `code` are skipped. Returns `None` when the path
    /// breaks before the end of the code, or when it ends on an unassigned node.
    #[instrument(level = "trace", skip(self))]
    pub fn lookup(&self, code: &str) -> Option<char> {
        let mut current = self.node(self.root)?;
        for symbol in symbols(code) {
            current = self.node(current.child(symbol)?)?;
        }
        current.character
    }

    /// Code of the first node holding `character` in pre-order, dot subtree
    /// before dash subtree. The root is never matched: an empty code is
    /// reserved for "not found".
    #[instrument(level = "trace", skip(self))]
    pub fn code_for(&self, character: char) -> Option<String> {
        self.iter()
            .filter(|(code, _)| !code.is_empty())
            .find(|(_, node)| node.character == Some(character))
            .map(|(code, _)| code)
    }

    /// Like [`code_for`](Self::code_for), with the empty string meaning "not found".
    pub fn lookup_code(&self, character: char) -> String {
        self.code_for(character).unwrap_or_default()
    }

    /// Pre-order walk over every node, root first with code `""`.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Assigned `(code, character)` pairs in pre-order.
    pub fn entries(&self) -> impl Iterator<Item = (String, char)> + '_ {
        self.iter()
            .filter_map(|(code, node)| node.character.map(|c| (code, c)))
    }

    /// Edges on the longest root-to-node path.
    pub fn depth(&self) -> usize {
        self.iter().map(|(code, _)| code.len()).max().unwrap_or(0)
    }

    /// Number of nodes carrying a character.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct PreOrderIterator<'a> {
    trie: &'a MorseTrie,
    stack: Vec<(Index, String)>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(trie: &'a MorseTrie) -> Self {
        Self {
            trie,
            stack: vec![(trie.root(), String::new())],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (String, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, code)) = self.stack.pop() {
            if let Some(node) = self.trie.node(idx) {
                // Dash pushed first so the dot subtree is fully walked before it
                if let Some(dash) = node.dash {
                    self.stack.push((dash, format!("{code}{DASH}")));
                }
                if let Some(dot) = node.dot {
                    self.stack.push((dot, format!("{code}{DOT}")));
                }
                return Some((code, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_trie_when_inspected_then_has_only_root() {
        let trie = MorseTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.depth(), 0);
        assert_eq!(trie.iter().count(), 1);
        assert_eq!(trie.lookup(""), None);
    }

    #[test]
    fn given_deep_insert_when_walking_then_creates_unassigned_intermediates() {
        let mut trie = MorseTrie::new();
        trie.insert("-..", 'D');

        assert_eq!(trie.lookup("-.."), Some('D'));
        assert_eq!(trie.lookup("-"), None);
        assert_eq!(trie.lookup("-."), None);
        assert_eq!(trie.iter().count(), 4);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn given_broken_path_when_lookup_then_returns_none() {
        let mut trie = MorseTrie::new();
        trie.insert(".", 'E');
        assert_eq!(trie.lookup(".-"), None);
        assert_eq!(trie.lookup("--"), None);
    }

    #[test]
    fn given_same_code_twice_when_inserting_then_last_wins() {
        let mut trie = MorseTrie::new();
        trie.insert(".-", 'A');
        trie.insert(".-", 'Z');
        assert_eq!(trie.lookup(".-"), Some('Z'));
        assert_eq!(trie.code_for('A'), None);
    }

    #[test]
    fn given_malformed_code_when_inserting_then_targets_shallower_node() {
        let mut trie = MorseTrie::new();
        trie.insert(".x-", 'A');
        assert_eq!(trie.lookup(".-"), Some('A'));
        assert_eq!(trie.depth(), 2);
    }

    #[test]
    fn given_duplicate_characters_when_searching_code_then_dot_subtree_wins() {
        let mut trie = MorseTrie::new();
        trie.insert("-", 'Q');
        trie.insert("...", 'Q');
        assert_eq!(trie.code_for('Q').as_deref(), Some("..."));
    }

    #[test]
    fn given_duplicate_characters_on_one_path_when_searching_code_then_shallower_wins() {
        let mut trie = MorseTrie::new();
        trie.insert(".-.", 'R');
        trie.insert(".", 'R');
        assert_eq!(trie.lookup_code('R'), ".");
    }

    #[test]
    fn given_missing_character_when_searching_code_then_returns_empty() {
        let trie = MorseTrie::new();
        assert_eq!(trie.code_for('A'), None);
        assert_eq!(trie.lookup_code('A'), "");
    }

    #[test]
    fn given_character_assigned_to_root_when_searching_code_then_not_found() {
        let mut trie = MorseTrie::new();
        trie.insert("x", 'Q');
        assert_eq!(trie.lookup(""), Some('Q'));
        assert_eq!(trie.code_for('Q'), None);
        assert_eq!(trie.lookup_code('Q'), "");
    }

    #[test]
    fn given_small_trie_when_iterating_then_visits_in_pre_order() {
        let mut trie = MorseTrie::new();
        trie.insert("-", 'T');
        trie.insert(".-", 'A');
        trie.insert(".", 'E');
        trie.insert("..", 'I');

        let codes: Vec<String> = trie.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["", ".", "..", ".-", "-"]);
    }

    #[test]
    fn given_trie_when_shared_across_threads_then_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MorseTrie>();
    }
}
