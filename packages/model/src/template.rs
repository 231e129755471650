//! Named presets that replace the block sequence and the main settings.

use crate::block::{Block, BlockId, BlockType};
use crate::error::ModelError;
use crate::settings::PageSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    Product,
    Leads,
    Portfolio,
}

/// Fixed settings and block layout of a template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePreset {
    pub title: &'static str,
    pub headline: &'static str,
    pub cta_text: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub bg_gradient: &'static str,
    pub blocks: &'static [BlockType],
}

const PRODUCT: TemplatePreset = TemplatePreset {
    title: "Produto Incrível",
    headline: "Descubra como nosso produto pode transformar seu negócio",
    cta_text: "Comprar Agora",
    primary_color: "#e11d48",
    secondary_color: "#ea580c",
    bg_gradient: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    blocks: &[
        BlockType::Hero,
        BlockType::Features,
        BlockType::Pricing,
        BlockType::Testimonials,
        BlockType::Cta,
        BlockType::Footer,
    ],
};

const LEADS: TemplatePreset = TemplatePreset {
    title: "E-Book Gratuito",
    headline: "Baixe nosso e-book exclusivo e aprenda os segredos do sucesso",
    cta_text: "Baixar Agora",
    primary_color: "#2563eb",
    secondary_color: "#059669",
    bg_gradient: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    blocks: &[
        BlockType::Hero,
        BlockType::Features,
        BlockType::Testimonials,
        BlockType::Contact,
        BlockType::Footer,
    ],
};

const PORTFOLIO: TemplatePreset = TemplatePreset {
    title: "Meu Portfólio",
    headline: "Designer & Desenvolvedor Web Criativo",
    cta_text: "Ver Trabalhos",
    primary_color: "#7c3aed",
    secondary_color: "#db2777",
    bg_gradient: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    blocks: &[
        BlockType::Hero,
        BlockType::Portfolio,
        BlockType::Testimonials,
        BlockType::Contact,
        BlockType::Footer,
    ],
};

impl TemplateName {
    pub const ALL: [TemplateName; 3] = [
        TemplateName::Product,
        TemplateName::Leads,
        TemplateName::Portfolio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::Product => "product",
            TemplateName::Leads => "leads",
            TemplateName::Portfolio => "portfolio",
        }
    }

    pub fn preset(self) -> &'static TemplatePreset {
        match self {
            TemplateName::Product => &PRODUCT,
            TemplateName::Leads => &LEADS,
            TemplateName::Portfolio => &PORTFOLIO,
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::InvalidTemplate(s.to_string()))
    }
}

impl TemplatePreset {
    /// Blocks of this template, ids assigned 1..n
    pub fn blocks(&self) -> Vec<Block> {
        sequential_blocks(self.blocks)
    }

    /// Overwrite the template-controlled fields; toggles and unknown keys stay
    pub fn apply_settings(&self, settings: &mut PageSettings) {
        settings.title = self.title.to_string();
        settings.headline = self.headline.to_string();
        settings.cta_text = self.cta_text.to_string();
        settings.primary_color = self.primary_color.to_string();
        settings.secondary_color = self.secondary_color.to_string();
        settings.bg_gradient = self.bg_gradient.to_string();
    }
}

pub(crate) fn sequential_blocks(types: &[BlockType]) -> Vec<Block> {
    types
        .iter()
        .zip(1u64..)
        .map(|(block_type, id)| Block::new(BlockId(id), *block_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_names() {
        assert_eq!("product".parse::<TemplateName>(), Ok(TemplateName::Product));
        assert_eq!("leads".parse::<TemplateName>(), Ok(TemplateName::Leads));
        assert_eq!("portfolio".parse::<TemplateName>(), Ok(TemplateName::Portfolio));
        assert_eq!(
            "blog".parse::<TemplateName>(),
            Err(ModelError::InvalidTemplate("blog".to_string()))
        );
    }

    #[test]
    fn test_product_blocks_are_numbered_sequentially() {
        let blocks = TemplateName::Product.preset().blocks();
        let ids: Vec<u64> = blocks.iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(blocks.iter().all(|b| b.settings.is_empty()));
    }

    #[test]
    fn test_every_preset_color_is_valid() {
        for name in TemplateName::ALL {
            let preset = name.preset();
            assert!(crate::is_hex_color(preset.primary_color));
            assert!(crate::is_hex_color(preset.secondary_color));
        }
    }
}
