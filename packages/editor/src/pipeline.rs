//! # Editing Pipeline
//!
//! Coordinates the full editing lifecycle: Mutate → Persist → Render
//!
//! The Pipeline manages:
//! - Applying mutations through the session
//! - Re-rendering the preview fragment and theme stylesheet
//! - Caching the last preview to report whether output changed

use crate::{EditSession, EditorError, Mutation, MutationResult};
use pagex_common::Storage;
use pagex_compiler_css::compile_preview_css;
use pagex_compiler_html::{compile_preview, CompileOptions, RenderContext};

/// Rendered live preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Block markup wrapped in editing containers
    pub html: String,
    /// Theme overrides for the current settings
    pub css: String,
}

/// Manages the full edit → render pipeline
pub struct Pipeline<S: Storage> {
    session: EditSession<S>,
    ctx: RenderContext,
    options: CompileOptions,
    last_preview: Option<Preview>,
}

impl<S: Storage> Pipeline<S> {
    pub fn new(session: EditSession<S>, ctx: RenderContext) -> Self {
        Self {
            session,
            ctx,
            options: CompileOptions::default(),
            last_preview: None,
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Apply mutation and re-render
    ///
    /// A rejected mutation returns the error without touching the cached
    /// preview.
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Result<PipelineResult, EditorError> {
        let mutation = self.session.apply(mutation)?;

        let preview = self.render();
        let changed = self.last_preview.as_ref() != Some(&preview);
        self.last_preview = Some(preview.clone());

        Ok(PipelineResult {
            mutation,
            preview,
            changed,
        })
    }

    /// Full re-render (initial paint, recovery)
    pub fn full_evaluate(&mut self) -> Preview {
        let preview = self.render();
        self.last_preview = Some(preview.clone());
        preview
    }

    fn render(&self) -> Preview {
        let page = self.session.page();
        Preview {
            html: compile_preview(page, &self.ctx, &self.options),
            css: compile_preview_css(&page.settings),
        }
    }

    pub fn session(&self) -> &EditSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession<S> {
        &mut self.session
    }

    pub fn into_session(self) -> EditSession<S> {
        self.session
    }

    pub fn last_preview(&self) -> Option<&Preview> {
        self.last_preview.as_ref()
    }

    /// Forget the cached preview; the next mutation reports `changed`
    pub fn clear_cache(&mut self) {
        self.last_preview = None;
    }
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub mutation: MutationResult,

    pub preview: Preview,

    /// False when the rendered preview is identical to the previous one
    pub changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagex_common::MemoryStorage;
    use pagex_model::{BlockType, Direction, Page};

    fn pipeline() -> Pipeline<MemoryStorage> {
        let session = EditSession::load(MemoryStorage::new());
        Pipeline::new(session, RenderContext::new(2024))
    }

    #[test]
    fn test_pipeline_initial_evaluation() {
        let mut pipeline = pipeline();

        let preview = pipeline.full_evaluate();

        assert_eq!(preview.html.matches("class=\"block-container\"").count(), 5);
        assert!(preview.css.contains("--primary-color: #4f46e5;"));
        assert!(pipeline.last_preview().is_some());
    }

    #[test]
    fn test_pipeline_mutation_rerenders() {
        let mut pipeline = pipeline();
        pipeline.full_evaluate();

        let result = pipeline
            .apply_mutation(Mutation::AddBlock { block_type: BlockType::Pricing })
            .unwrap();

        assert_eq!(result.mutation.version, 1);
        assert!(result.changed);
        assert!(result.preview.html.contains("data-block-type=\"pricing\""));
    }

    #[test]
    fn test_boundary_move_reports_unchanged() {
        let mut pipeline = pipeline();
        pipeline.full_evaluate();
        let first = pipeline.session().page().blocks[0].id;

        let result = pipeline
            .apply_mutation(Mutation::MoveBlock { id: first, direction: Direction::Up })
            .unwrap();

        assert!(!result.changed);
        assert_eq!(pipeline.session().page(), &Page::default());
    }

    #[test]
    fn test_rejected_mutation_keeps_preview() {
        let mut pipeline = pipeline();
        let before = pipeline.full_evaluate();

        let result = pipeline.apply_mutation(Mutation::UpdateSettings {
            patch: crate::SettingsPatch {
                secondary_color: Some("green".to_string()),
                ..Default::default()
            },
        });

        assert!(result.is_err());
        assert_eq!(pipeline.last_preview(), Some(&before));
    }

    #[test]
    fn test_clear_cache() {
        let mut pipeline = pipeline();
        pipeline.full_evaluate();
        pipeline.clear_cache();

        assert!(pipeline.last_preview().is_none());
        let first = pipeline.session().page().blocks[0].id;
        let result = pipeline
            .apply_mutation(Mutation::MoveBlock { id: first, direction: Direction::Up })
            .unwrap();
        assert!(result.changed);
    }
}
