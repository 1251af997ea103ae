//! Trie nodes and the restricted symbol set
//!
//! Nodes live in an arena owned by the [`Lexicon`](super::Lexicon) and refer to
//! their children through [`NodeId`] handles, one slot per admissible symbol.

/// Admissible symbols, in traversal order
pub const SYMBOLS: &[u8; SYMBOL_COUNT] = b"abcdefghijklmnopqrstuvwxyz-'";

/// Number of admissible symbols (26 letters, hyphen, apostrophe)
pub const SYMBOL_COUNT: usize = 28;

/// Map a character to its child slot
///
/// Returns `None` for characters outside the symbol set.
#[inline]
#[must_use]
pub const fn symbol_index(ch: char) -> Option<usize> {
    match ch {
        'a'..='z' => Some(ch as usize - 'a' as usize),
        '-' => Some(26),
        '\'' => Some(27),
        _ => None,
    }
}

/// Map a child slot back to its character
///
/// # Panics
/// Panics if slot >= 28
#[inline]
#[must_use]
pub const fn slot_symbol(slot: usize) -> char {
    SYMBOLS[slot] as char
}

/// Handle of a node inside the lexicon arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    /// The root node, always present at index 0
    pub(crate) const ROOT: Self = Self(0);

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// A single trie node
///
/// `terminal` means the path from the root to this node spells a stored word.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    children: [Option<NodeId>; SYMBOL_COUNT],
    terminal: bool,
}

impl TrieNode {
    /// Get the child reached through `slot`
    #[inline]
    #[must_use]
    pub(crate) const fn child(&self, slot: usize) -> Option<NodeId> {
        self.children[slot]
    }

    /// Get the child reached through character `ch`
    #[inline]
    #[must_use]
    pub(crate) fn child_for(&self, ch: char) -> Option<NodeId> {
        symbol_index(ch).and_then(|slot| self.children[slot])
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, slot: usize, child: NodeId) {
        self.children[slot] = Some(child);
    }

    /// Check whether this node ends a stored word
    #[inline]
    #[must_use]
    pub(crate) const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Mark the node as ending a word
    ///
    /// Returns `true` only on the first marking.
    #[inline]
    pub(crate) const fn mark_terminal(&mut self) -> bool {
        let first = !self.terminal;
        self.terminal = true;
        first
    }
}
