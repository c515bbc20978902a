//! Record Tree
//!
//!     GEDCOM nesting is carried by a running level integer, so a block's
//!     internal structure has to be inferred. Rather than re-scanning flat
//!     line windows with lookahead-level arithmetic, each block is
//!     materialized once as an explicit tree of `{ level, tag, value,
//!     children }` nodes and the extractors walk children directly.
//!
//!     The tree is an arena: nodes live in a `Vec` and children are index
//!     lists, so there is no recursive ownership and node handles are plain
//!     `Copy` ids.
//!
//! Field Readers
//!
//!     Two reader primitives operate over a node's subtree in document
//!     (preorder) order: [`RecordTree::first_value`] and
//!     [`RecordTree::all_values`]. Matching is exact on the tag token,
//!     case-sensitive, and independent of depth, which mirrors how ragged
//!     sub-blocks are populated in the wild (a DATE two levels down still
//!     belongs to the event above it). Where sibling boundaries matter
//!     (citations, media, coordinate blocks) the extractors use the
//!     direct-child readers instead.

use crate::ged::blocks::Block;

/// Handle to a node in a [`RecordTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One line of a record, with its children resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub level: u32,
    pub tag: String,
    pub value: Option<String>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Arena tree for one record block.
#[derive(Debug, Clone)]
pub struct RecordTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl RecordTree {
    /// Build the tree from a block's line sequence.
    ///
    /// The block's first line becomes the root. Every other line attaches to
    /// the nearest preceding line with a smaller level; lines that skip
    /// levels downward still attach there, and lines shallower than any open
    /// ancestor pop back up, matching how the format is written in practice.
    pub fn from_block(block: &Block) -> Self {
        let mut nodes = Vec::with_capacity(block.lines.len());
        let root = NodeId(0);

        let first = block.lines.first();
        nodes.push(Node {
            level: first.map(|l| l.level).unwrap_or(0),
            tag: first
                .map(|l| l.tag.clone())
                .unwrap_or_else(|| block.record_tag.clone()),
            value: first.and_then(|l| l.value.clone()),
            children: Vec::new(),
        });

        // Stack of open ancestors, root always at the bottom.
        let mut stack: Vec<NodeId> = vec![root];
        for line in block.lines.iter().skip(1) {
            while stack.len() > 1 && nodes[stack[stack.len() - 1].0].level >= line.level {
                stack.pop();
            }
            let parent = stack[stack.len() - 1];
            let id = NodeId(nodes.len());
            nodes.push(Node {
                level: line.level,
                tag: line.tag.clone(),
                value: line.value.clone(),
                children: Vec::new(),
            });
            nodes[parent.0].children.push(id);
            stack.push(id);
        }

        RecordTree { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Direct children of `id` whose tag matches exactly.
    pub fn children_tagged<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(move |child| self.nodes[child.0].tag == tag)
    }

    pub fn first_child_tagged(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children_tagged(id, tag).next()
    }

    /// All nodes below `id` in document (preorder) order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.clone();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// First non-empty value of a matching tag anywhere below `id`.
    pub fn first_value(&self, id: NodeId, tag: &str) -> Option<&str> {
        self.descendants(id).find_map(|child| {
            let node = self.node(child);
            if node.tag == tag {
                node.value.as_deref().filter(|v| !v.is_empty())
            } else {
                None
            }
        })
    }

    /// Every non-empty value of a matching tag below `id`, in document order.
    pub fn all_values(&self, id: NodeId, tag: &str) -> Vec<&str> {
        self.descendants(id)
            .filter_map(|child| {
                let node = self.node(child);
                if node.tag == tag {
                    node.value.as_deref().filter(|v| !v.is_empty())
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Preorder iterator over a subtree.
pub struct Descendants<'a> {
    tree: &'a RecordTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for child in self.tree.node(id).children.iter().rev() {
            self.stack.push(*child);
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ged::blocks::extract_blocks;
    use crate::ged::lexing::classify_lines;

    fn tree_of(source: &str) -> RecordTree {
        let lines = classify_lines(source);
        let blocks = extract_blocks(&lines, "INDI");
        RecordTree::from_block(&blocks[0])
    }

    const NESTED: &str = "0 @I1@ INDI\n\
        1 NAME Anna /Persson/\n\
        2 GIVN Anna\n\
        2 SURN Persson\n\
        1 BIRT\n\
        2 DATE 12 MAY 1850\n\
        2 PLAC Vinslöv\n\
        3 MAP\n\
        4 LATI N56.1\n\
        4 LONG E13.9\n\
        1 SEX F";

    #[test]
    fn test_children_follow_levels() {
        let tree = tree_of(NESTED);
        let root = tree.root();

        let top: Vec<&str> = tree
            .node(root)
            .children
            .iter()
            .map(|c| tree.node(*c).tag.as_str())
            .collect();
        assert_eq!(top, vec!["NAME", "BIRT", "SEX"]);

        let name = tree.first_child_tagged(root, "NAME").unwrap();
        assert_eq!(tree.node(name).children.len(), 2);
    }

    #[test]
    fn test_first_value_searches_subtree() {
        let tree = tree_of(NESTED);
        let root = tree.root();
        // GIVN sits two levels down but is still found from the root.
        assert_eq!(tree.first_value(root, "GIVN"), Some("Anna"));

        let birt = tree.first_child_tagged(root, "BIRT").unwrap();
        assert_eq!(tree.first_value(birt, "LATI"), Some("N56.1"));
        assert_eq!(tree.first_value(birt, "GIVN"), None);
    }

    #[test]
    fn test_all_values_in_document_order() {
        let tree = tree_of(
            "0 @I1@ INDI\n1 OCCU Farmer\n1 OCCU Miller\n1 RESI\n2 PLAC Vinslöv",
        );
        assert_eq!(
            tree.all_values(tree.root(), "OCCU"),
            vec!["Farmer", "Miller"]
        );
    }

    #[test]
    fn test_level_skip_attaches_to_nearest_ancestor() {
        let tree = tree_of("0 @I1@ INDI\n1 BIRT\n3 DATE 1850");
        let birt = tree.first_child_tagged(tree.root(), "BIRT").unwrap();
        assert_eq!(tree.first_value(birt, "DATE"), Some("1850"));
    }

    #[test]
    fn test_tag_matching_is_case_sensitive() {
        let tree = tree_of("0 @I1@ INDI\n1 Note lower\n1 NOTE upper");
        assert_eq!(tree.first_value(tree.root(), "NOTE"), Some("upper"));
    }
}
