use crate::markdown::RenderedTable;

/// Shown instead of an empty comparison table.
pub const EMPTY_TABLE_PLACEHOLDER: &str = "No detailed analysis data available";

/// Shown instead of an empty narrative.
pub const EMPTY_NARRATIVE_PLACEHOLDER: &str = "Please see the detailed analysis above";

/// What the result area shows. Exactly one exists at a time; transitions
/// replace it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionView {
    /// Nothing submitted yet, or reset
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The backend produced an assessment
    Success {
        table: RenderedTable,
        narrative: String,
    },
    /// Validation, transport or server failure, as a user-facing message
    Error(String),
}

impl SubmissionView {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionView::Loading)
    }

    /// `Success` or `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionView::Success { .. } | SubmissionView::Error(_)
        )
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionView::Idle => "idle",
            SubmissionView::Loading => "loading",
            SubmissionView::Success { .. } => "success",
            SubmissionView::Error(_) => "error",
        }
    }
}
