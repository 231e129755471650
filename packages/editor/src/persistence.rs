//! # Page Persistence
//!
//! Two storage keys, written after every mutation:
//!
//! ```text
//! pageX_landingPage → [{"id": 1, "type": "hero", "settings": {}}, ...]
//! pageX_settings    → {"title": "...", "primaryColor": "#4f46e5", ...}
//! ```
//!
//! Loading never fails. Anything missing or corrupted falls back to the
//! defaults for that key and is logged.

use crate::EditorError;
use pagex_common::Storage;
use pagex_model::{page::has_unique_ids, Block, BlockId, Page, PageSettings};
use serde_json::Value;
use tracing::{debug, warn};

pub const BLOCKS_KEY: &str = "pageX_landingPage";
pub const SETTINGS_KEY: &str = "pageX_settings";

/// Read the page from storage, falling back to defaults per key
pub fn load_page<S: Storage + ?Sized>(storage: &S) -> Page {
    let blocks = match storage.get_item(BLOCKS_KEY) {
        Ok(Some(raw)) => decode_blocks(&raw).unwrap_or_else(|reason| {
            warn!(key = BLOCKS_KEY, %reason, "discarding stored blocks");
            Page::default_blocks()
        }),
        Ok(None) => {
            debug!(key = BLOCKS_KEY, "no stored blocks, using defaults");
            Page::default_blocks()
        }
        Err(e) => {
            warn!(key = BLOCKS_KEY, error = %e, "failed to read stored blocks");
            Page::default_blocks()
        }
    };

    let settings = match storage.get_item(SETTINGS_KEY) {
        Ok(Some(raw)) => decode_settings(&raw).unwrap_or_else(|reason| {
            warn!(key = SETTINGS_KEY, %reason, "discarding stored settings");
            PageSettings::default()
        }),
        Ok(None) => PageSettings::default(),
        Err(e) => {
            warn!(key = SETTINGS_KEY, error = %e, "failed to read stored settings");
            PageSettings::default()
        }
    };

    Page::new(blocks, settings)
}

/// Write both keys
pub fn save_page<S: Storage + ?Sized>(storage: &mut S, page: &Page) -> Result<(), EditorError> {
    let blocks = serde_json::to_string(&page.blocks)?;
    let settings = serde_json::to_string(&page.settings)?;

    storage.set_item(BLOCKS_KEY, &blocks)?;
    storage.set_item(SETTINGS_KEY, &settings)?;
    Ok(())
}

fn decode_blocks(raw: &str) -> Result<Vec<Block>, String> {
    let blocks: Vec<Block> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    if !has_unique_ids(&blocks) {
        return Err("duplicate block ids".to_string());
    }
    if blocks.iter().any(|b| b.id.get() == 0) {
        return Err("block id 0 is not valid".to_string());
    }
    if let Some(block) = blocks.iter().find(|b| b.id.get() > BlockId::MAX) {
        return Err(format!("block id {} is out of range", block.id));
    }

    Ok(blocks)
}

fn decode_settings(raw: &str) -> Result<PageSettings, String> {
    match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(PageSettings::merged_over_defaults(map)),
        other => Err(format!("expected an object, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
