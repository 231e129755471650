use crate::block::{Block, BlockId, BlockType};
use crate::settings::PageSettings;
use crate::template::sequential_blocks;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Baseline layout used for new pages and for recovery from corrupted state
pub const DEFAULT_BLOCKS: [BlockType; 5] = [
    BlockType::Hero,
    BlockType::Features,
    BlockType::Testimonials,
    BlockType::Cta,
    BlockType::Footer,
];

/// Ordered block sequence plus global settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub blocks: Vec<Block>,
    pub settings: PageSettings,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            blocks: Self::default_blocks(),
            settings: PageSettings::default(),
        }
    }
}

impl Page {
    pub fn new(blocks: Vec<Block>, settings: PageSettings) -> Self {
        Self { blocks, settings }
    }

    /// The five-block baseline with ids 1..5
    pub fn default_blocks() -> Vec<Block> {
        sequential_blocks(&DEFAULT_BLOCKS)
    }

    /// Index of the block with `id`
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn find_block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn max_id(&self) -> Option<BlockId> {
        self.blocks.iter().map(|b| b.id).max()
    }

    pub fn block_types(&self) -> Vec<BlockType> {
        self.blocks.iter().map(|b| b.block_type).collect()
    }

    /// True if no two blocks share an id
    pub fn has_unique_ids(&self) -> bool {
        has_unique_ids(&self.blocks)
    }
}

pub fn has_unique_ids(blocks: &[Block]) -> bool {
    let mut seen = HashSet::with_capacity(blocks.len());
    blocks.iter().all(|b| seen.insert(b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(
            page.block_types(),
            vec![
                BlockType::Hero,
                BlockType::Features,
                BlockType::Testimonials,
                BlockType::Cta,
                BlockType::Footer,
            ]
        );
        assert_eq!(page.max_id(), Some(BlockId(5)));
        assert!(page.has_unique_ids());
    }

    #[test]
    fn test_lookup() {
        let page = Page::default();
        assert_eq!(page.position(BlockId(3)), Some(2));
        assert_eq!(page.position(BlockId(99)), None);
        assert_eq!(page.find_block(BlockId(1)).map(|b| b.block_type), Some(BlockType::Hero));
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let blocks = vec![
            Block::new(BlockId(1), BlockType::Hero),
            Block::new(BlockId(1), BlockType::Footer),
        ];
        assert!(!has_unique_ids(&blocks));
    }
}
