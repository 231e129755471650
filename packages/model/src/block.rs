use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique block identifier within a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl BlockId {
    /// Largest id a JSON number reader keeps exact (2^53 - 1)
    pub const MAX: u64 = (1 << 53) - 1;

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = ModelError;

    /// Only positive decimal integers up to `BlockId::MAX` are valid ids
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(ModelError::InvalidBlockId(s.to_string())),
            Ok(id) if id > BlockId::MAX => Err(ModelError::InvalidBlockId(s.to_string())),
            Ok(id) => Ok(BlockId(id)),
        }
    }
}

impl From<u64> for BlockId {
    fn from(id: u64) -> Self {
        BlockId(id)
    }
}

/// Closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Hero,
    Features,
    Testimonials,
    Pricing,
    Portfolio,
    Contact,
    Footer,
    Cta,
}

impl BlockType {
    pub const ALL: [BlockType; 8] = [
        BlockType::Hero,
        BlockType::Features,
        BlockType::Testimonials,
        BlockType::Pricing,
        BlockType::Portfolio,
        BlockType::Contact,
        BlockType::Footer,
        BlockType::Cta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Features => "features",
            BlockType::Testimonials => "testimonials",
            BlockType::Pricing => "pricing",
            BlockType::Portfolio => "portfolio",
            BlockType::Contact => "contact",
            BlockType::Footer => "footer",
            BlockType::Cta => "cta",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::InvalidBlockType(s.to_string()))
    }
}

/// Reorder direction for adjacent swaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ModelError::InvalidDirection(other.to_string())),
        }
    }
}

/// One content section of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,

    #[serde(rename = "type")]
    pub block_type: BlockType,

    /// Per-block overrides; kept through persistence, not read by renderers
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Block {
    pub fn new(id: BlockId, block_type: BlockType) -> Self {
        Self {
            id,
            block_type,
            settings: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_type_parsing() {
        for block_type in BlockType::ALL {
            assert_eq!(block_type.as_str().parse::<BlockType>(), Ok(block_type));
        }

        assert_eq!(
            "banner".parse::<BlockType>(),
            Err(ModelError::InvalidBlockType("banner".to_string()))
        );
        assert!("Hero".parse::<BlockType>().is_err());
        assert!("".parse::<BlockType>().is_err());
    }

    #[test]
    fn test_block_id_shape() {
        assert_eq!("42".parse::<BlockId>(), Ok(BlockId(42)));
        assert!("0".parse::<BlockId>().is_err());
        assert!("-3".parse::<BlockId>().is_err());
        assert!("abc".parse::<BlockId>().is_err());
        assert!("1.5".parse::<BlockId>().is_err());
        assert!("9007199254740991".parse::<BlockId>().is_ok());
        assert!("9007199254740992".parse::<BlockId>().is_err());
        assert!("18446744073709551615".parse::<BlockId>().is_err());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert!("left".parse::<Direction>().is_err());
    }

    #[test]
    fn test_block_serialization_shape() {
        let block = Block::new(BlockId(7), BlockType::Cta);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"id":7,"type":"cta","settings":{}}"#);

        // Missing settings default to an empty object
        let parsed: Block = serde_json::from_str(r#"{"id":3,"type":"hero"}"#).unwrap();
        assert_eq!(parsed, Block::new(BlockId(3), BlockType::Hero));

        assert!(serde_json::from_str::<Block>(r#"{"id":3,"type":"banner"}"#).is_err());
    }
}
