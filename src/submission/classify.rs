//! Outcome to view.

use tracing::warn;

use super::view::SubmissionView;
use crate::error::AssessResult;
use crate::markdown::render_table;
use crate::models::AssessmentResult;

/// Turn a finished request into its terminal view.
///
/// Success runs the table through the renderer and keeps the narrative
/// verbatim. Failures become their user-facing message; details go to the
/// log.
pub fn view_from_outcome(outcome: AssessResult<AssessmentResult>) -> SubmissionView {
    match outcome {
        Ok(result) => SubmissionView::Success {
            table: render_table(&result.result_table),
            narrative: result.result,
        },
        Err(err) => {
            warn!(
                code = err.error_code(),
                category = %err.category(),
                "assessment failed: {}",
                err
            );
            SubmissionView::Error(err.user_message())
        }
    }
}
