// Permuterm Rotation Trie
// Arena-backed character trie storing every rotation of every indexed word

use crate::types::WordId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Index of a node in the trie arena
pub type NodeId = u32;

const ROOT: NodeId = 0;

/// A node in the rotation trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Outgoing edges: character → child node
    children: FxHashMap<char, NodeId>,

    /// Set when a stored rotation ends here
    terminal: bool,

    /// Every word whose rotation path passes through this node
    words: FxHashSet<WordId>,
}

impl TrieNode {
    /// Child reached by `ch`, if any
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    /// Whether a stored rotation ends at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Words passing through this node
    pub fn words(&self) -> &FxHashSet<WordId> {
        &self.words
    }
}

/// Character trie over rotated forms, owning all of its nodes
///
/// Nodes live in a single vector and refer to their children by index;
/// node 0 is the root. Each node accumulates the ids of the words whose
/// rotations pass through it, so a prefix lookup is a single walk with no
/// subtree traversal.
#[derive(Debug, Clone)]
pub struct RotationTrie {
    nodes: Vec<TrieNode>,
    terminals: usize,
}

impl Default for RotationTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationTrie {
    /// Create a trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            terminals: 0,
        }
    }

    /// Store `path`, tagging every node along it (root excluded) with `word`
    ///
    /// Missing nodes are created; the final node is marked terminal.
    /// Panics if the arena would exceed `u32::MAX` nodes.
    pub fn insert_path(&mut self, path: &str, word: WordId) {
        let mut node = ROOT;

        for ch in path.chars() {
            node = match self.nodes[node as usize].child(ch) {
                Some(child) => child,
                None => self.push_child(node, ch),
            };
            self.nodes[node as usize].words.insert(word);
        }

        let last = &mut self.nodes[node as usize];
        if !last.terminal {
            last.terminal = true;
            self.terminals += 1;
        }
    }

    /// Words with a stored rotation beginning with `prefix`
    ///
    /// Returns `None` when no stored rotation starts with `prefix`.
    pub fn lookup_prefix(&self, prefix: &str) -> Option<&FxHashSet<WordId>> {
        self.find_node(prefix).map(|node| node.words())
    }

    /// Whether `path` is stored as a complete rotation
    pub fn contains_path(&self, path: &str) -> bool {
        self.find_node(path).map_or(false, TrieNode::is_terminal)
    }

    /// Node reached by walking `prefix` from the root
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = ROOT;
        for ch in prefix.chars() {
            node = self.nodes[node as usize].child(ch)?;
        }
        Some(&self.nodes[node as usize])
    }

    /// Total node count, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored rotations (terminal nodes)
    pub fn rotation_count(&self) -> usize {
        self.terminals
    }

    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = node_id(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.nodes[parent as usize].children.insert(ch, id);
        id
    }
}

/// Id for the node stored at arena slot `slot`
///
/// # Panics
/// If the arena grows past `u32::MAX` nodes; ids would otherwise alias.
fn node_id(slot: usize) -> NodeId {
    NodeId::try_from(slot).expect("rotation trie exceeds u32::MAX nodes")
}
