//! AppMessage enum for async communication within the application.

use crate::error::AssessResult;
use crate::models::AssessmentResult;
use crate::submission::SubmissionTicket;

/// Messages received from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// An assessment request finished (possibly after being superseded)
    AssessmentResolved {
        ticket: SubmissionTicket,
        outcome: AssessResult<AssessmentResult>,
    },
    /// Startup health probe finished
    HealthChecked { healthy: bool },
}
