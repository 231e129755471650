//! # Pagex Editor
//!
//! Page editing engine: owns the page, applies mutations, persists state
//! and re-renders the live preview.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Block, PageSettings, templates       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession lifecycle + mutations   │
//! │  - Load/save through a Storage              │
//! │  - Apply mutations with validation          │
//! │  - Persist after every mutation             │
//! │  - Coordinate mutate → render pipeline      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html / compiler-css: preview       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagex_common::FileStorage;
//! use pagex_editor::{EditSession, Mutation};
//!
//! let mut session = EditSession::load(FileStorage::new(".pagex"));
//! session.apply(Mutation::add_block("pricing")?)?;
//! ```

mod errors;
mod mutations;
mod persistence;
mod pipeline;
mod session;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationEffect, MutationError, MutationResult, SettingsPatch};
pub use persistence::{load_page, save_page, BLOCKS_KEY, SETTINGS_KEY};
pub use pipeline::{Pipeline, PipelineResult, Preview};
pub use session::EditSession;
