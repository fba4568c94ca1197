//! Content flow blocks
//!
//! This module defines the semantic blocks produced by the assembler. Blocks
//! carry a role and literal text only; fonts, sizes and positions are the
//! renderer's business.

use serde::{Deserialize, Serialize};

/// One unit of document content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    /// Name or section title
    Heading(String),
    /// Entry title (job title, program)
    SubHeading(String),
    /// Secondary line: contact info or "company | location | dates"
    MetaLine(String),
    /// Horizontal rule under a section title
    Rule,
    /// Body text
    Paragraph(String),
    /// Bulleted item
    Bullet(String),
    /// Vertical space, in points
    Space(f32),
}

impl Block {
    /// The literal text carried by the block, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading(text)
            | Block::SubHeading(text)
            | Block::MetaLine(text)
            | Block::Paragraph(text)
            | Block::Bullet(text) => Some(text),
            Block::Rule | Block::Space(_) => None,
        }
    }

    /// Whether the block is a spacer
    pub fn is_space(&self) -> bool {
        matches!(self, Block::Space(_))
    }
}

/// An ordered sequence of blocks ready for pagination
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFlow {
    blocks: Vec<Block>,
}

impl ContentFlow {
    /// Create an empty flow
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a block
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the flow has no blocks at all
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check if the flow has nothing but spacing
    ///
    /// This is the shape an entirely empty record assembles to.
    pub fn is_blank(&self) -> bool {
        self.blocks.iter().all(Block::is_space)
    }

    /// Iterate over the blocks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Borrow the blocks as a slice
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the flow, returning its blocks
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Text of every `Heading` block, in order
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<Block>> for ContentFlow {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl<'a> IntoIterator for &'a ContentFlow {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_flow() {
        let flow = ContentFlow::new();
        assert!(flow.is_empty());
        assert!(flow.is_blank());
        assert_eq!(flow.len(), 0);
    }

    #[test]
    fn test_blank_flow_with_spacing() {
        let flow = ContentFlow::from(vec![Block::Space(7.2), Block::Space(7.2)]);
        assert!(!flow.is_empty());
        assert!(flow.is_blank());
    }

    #[test]
    fn test_headings() {
        let mut flow = ContentFlow::new();
        flow.push(Block::Heading("ANA".to_string()));
        flow.push(Block::Rule);
        flow.push(Block::Heading("SKILLS".to_string()));
        flow.push(Block::Bullet("Rust".to_string()));

        assert!(!flow.is_blank());
        assert_eq!(flow.headings(), vec!["ANA", "SKILLS"]);
    }

    #[test]
    fn test_block_text() {
        assert_eq!(Block::Bullet("Go".to_string()).text(), Some("Go"));
        assert_eq!(Block::Rule.text(), None);
        assert_eq!(Block::Space(1.0).text(), None);
    }

    #[test]
    fn test_block_json_shape() {
        let json = serde_json::to_string(&Block::Heading("SKILLS".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"heading","value":"SKILLS"}"#);

        let json = serde_json::to_string(&Block::Rule).unwrap();
        assert_eq!(json, r#"{"kind":"rule"}"#);
    }

    #[test]
    fn test_flow_serializes_as_array() {
        let flow = ContentFlow::from(vec![Block::MetaLine("a | b".to_string()), Block::Space(7.2)]);
        let value = serde_json::to_value(&flow).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["kind"], "meta_line");
    }
}
