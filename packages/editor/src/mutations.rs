//! # Page Mutations
//!
//! Every user action on the page is one `Mutation`.
//!
//! ## Semantics
//!
//! - **Validated first**: a mutation that fails validation leaves the page
//!   untouched.
//! - **Whole-state**: templates and default blocks replace the sequence
//!   wholesale; no partial merges.
//! - **Adjacent moves**: `MoveBlock` swaps with a neighbor. Moving the
//!   first block up, the last block down, or an absent id does nothing.
//! - **Idempotent removal**: removing an absent id does nothing.

use pagex_model::{
    is_hex_color, Block, BlockId, BlockType, Direction, IdGenerator, ModelError, Page,
    PageSettings, TemplateName,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic page operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new block to the end of the page
    AddBlock { block_type: BlockType },

    /// Remove the block with this id, if present
    RemoveBlock { id: BlockId },

    /// Swap a block with its neighbor
    MoveBlock { id: BlockId, direction: Direction },

    /// Replace blocks and main settings with a named preset
    LoadTemplate { name: TemplateName },

    /// Replace blocks with the five-block baseline
    LoadDefaultBlocks,

    /// Patch individual settings fields
    UpdateSettings { patch: SettingsPatch },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error(transparent)]
    Invalid(#[from] ModelError),
}

/// Field-by-field settings edit; `None` leaves the field alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }

    fn validate(&self) -> Result<(), MutationError> {
        for color in [&self.primary_color, &self.secondary_color].into_iter().flatten() {
            if !is_hex_color(color) {
                return Err(ModelError::InvalidColor(color.clone()).into());
            }
        }
        Ok(())
    }

    fn apply_to(&self, settings: &mut PageSettings) {
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }
        if let Some(headline) = &self.headline {
            settings.headline = headline.clone();
        }
        if let Some(cta_text) = &self.cta_text {
            settings.cta_text = cta_text.clone();
        }
        if let Some(color) = &self.primary_color {
            settings.primary_color = color.clone();
        }
        if let Some(color) = &self.secondary_color {
            settings.secondary_color = color.clone();
        }
        if let Some(gradient) = &self.bg_gradient {
            settings.bg_gradient = gradient.clone();
        }
        if let Some(animate) = self.animate_background {
            settings.animate_background = animate;
        }
        if let Some(dark) = self.dark_mode {
            settings.dark_mode = dark;
        }
    }
}

/// What a successful mutation did to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationEffect {
    /// The page changed
    Changed,
    /// The mutation was valid but had nothing to do
    Unchanged,
    /// A block was appended with this id
    Added(BlockId),
}

impl Mutation {
    /// `addBlock` from untrusted text
    pub fn add_block(block_type: &str) -> Result<Self, MutationError> {
        Ok(Mutation::AddBlock {
            block_type: block_type.parse()?,
        })
    }

    /// `removeBlock` from untrusted text
    pub fn remove_block(id: &str) -> Result<Self, MutationError> {
        Ok(Mutation::RemoveBlock { id: id.parse()? })
    }

    /// `moveBlock` from untrusted text
    pub fn move_block(id: &str, direction: &str) -> Result<Self, MutationError> {
        Ok(Mutation::MoveBlock {
            id: id.parse()?,
            direction: direction.parse()?,
        })
    }

    /// `loadTemplate` from untrusted text
    pub fn load_template(name: &str) -> Result<Self, MutationError> {
        Ok(Mutation::LoadTemplate { name: name.parse()? })
    }

    /// Debug name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock { .. } => "addBlock",
            Mutation::RemoveBlock { .. } => "removeBlock",
            Mutation::MoveBlock { .. } => "moveBlock",
            Mutation::LoadTemplate { .. } => "loadTemplate",
            Mutation::LoadDefaultBlocks => "loadDefaultBlocks",
            Mutation::UpdateSettings { .. } => "updateSettings",
        }
    }

    /// Apply mutation to the page with validation
    pub fn apply(&self, page: &mut Page, ids: &mut IdGenerator) -> Result<MutationEffect, MutationError> {
        self.validate()?;

        let effect = match self {
            Mutation::AddBlock { block_type } => {
                let id = ids.next_id(page.max_id());
                page.blocks.push(Block::new(id, *block_type));
                MutationEffect::Added(id)
            }

            Mutation::RemoveBlock { id } => match page.position(*id) {
                Some(index) => {
                    page.blocks.remove(index);
                    MutationEffect::Changed
                }
                None => MutationEffect::Unchanged,
            },

            Mutation::MoveBlock { id, direction } => Self::apply_move(page, *id, *direction),

            Mutation::LoadTemplate { name } => {
                let preset = name.preset();
                preset.apply_settings(&mut page.settings);
                page.blocks = preset.blocks();
                MutationEffect::Changed
            }

            Mutation::LoadDefaultBlocks => {
                page.blocks = Page::default_blocks();
                MutationEffect::Changed
            }

            Mutation::UpdateSettings { patch } => {
                if patch.is_empty() {
                    MutationEffect::Unchanged
                } else {
                    patch.apply_to(&mut page.settings);
                    MutationEffect::Changed
                }
            }
        };

        Ok(effect)
    }

    fn apply_move(page: &mut Page, id: BlockId, direction: Direction) -> MutationEffect {
        let Some(index) = page.position(id) else {
            return MutationEffect::Unchanged;
        };

        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < page.blocks.len() => index + 1,
            _ => return MutationEffect::Unchanged,
        };

        page.blocks.swap(index, target);
        MutationEffect::Changed
    }

    /// Validate without applying
    ///
    /// Typed fields are already valid by construction; what remains are the
    /// values serde can produce but the model forbids.
    pub fn validate(&self) -> Result<(), MutationError> {
        match self {
            Mutation::RemoveBlock { id } | Mutation::MoveBlock { id, .. } if id.get() == 0 => {
                Err(ModelError::InvalidBlockId(id.to_string()).into())
            }
            Mutation::UpdateSettings { patch } => patch.validate(),
            _ => Ok(()),
        }
    }
}

/// Result of applying a mutation through a session
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    pub effect: MutationEffect,

    /// False if the page could not be written to storage
    pub persisted: bool,
}
