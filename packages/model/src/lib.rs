//! # Pagex Model
//!
//! Data model of a landing page: an ordered sequence of typed blocks plus
//! one global settings record.
//!
//! Everything that crosses a text boundary (CLI arguments, persisted JSON)
//! is parsed through the `FromStr` impls here, which is where unknown
//! block types, malformed ids, bad directions, unknown templates and
//! malformed colors are rejected.

pub mod block;
pub mod error;
pub mod id_generator;
pub mod page;
pub mod settings;
pub mod template;

pub use block::{Block, BlockId, BlockType, Direction};
pub use error::{ModelError, ModelResult};
pub use id_generator::IdGenerator;
pub use page::Page;
pub use settings::{is_hex_color, PageSettings};
pub use template::{TemplateName, TemplatePreset};
