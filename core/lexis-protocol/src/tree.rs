use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A node of a phrase-structure tree as produced by an external constituency parser.
/// Leaves have no children and carry the word form as their label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PhraseNode {
    pub label: String,
    pub children: Vec<PhraseNode>,
}

impl PhraseNode {
    pub fn new(label: impl Into<String>, children: Vec<PhraseNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn leaf(word: impl Into<String>) -> Self {
        Self::new(word, Vec::new())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A preterminal holds exactly one leaf: `(VBG running)`.
    pub fn is_preterminal(&self) -> bool {
        matches!(self.children.as_slice(), [only] if only.is_leaf())
    }

    pub fn child(&self, index: usize) -> Option<&PhraseNode> {
        self.children.get(index)
    }

    pub fn child_label(&self, index: usize) -> Option<&str> {
        self.child(index).map(|c| c.label.as_str())
    }

    /// Words spanned by this node, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                out.push(node.label.as_str());
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// Every non-leaf node at any depth, in pre-order. The node itself is included.
    pub fn branches(&self) -> Vec<&PhraseNode> {
        let mut found = Vec::new();
        if !self.is_leaf() {
            found.push(self);
        }
        for child in &self.children {
            found.extend(child.branches());
        }
        found
    }

    /// Every node labelled `label` at any depth, in pre-order.
    pub fn find_all(&self, label: &str) -> Vec<&PhraseNode> {
        self.branches().into_iter().filter(|n| n.label == label).collect()
    }
}
