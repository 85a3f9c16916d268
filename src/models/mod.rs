//! Wire types for the assessment backend.

mod envelope;
mod request;
mod result;

pub use envelope::{ApiEnvelope, CODE_OK};
pub use request::{AssessmentRequest, Language, StandardAssessRequest};
pub use result::{AssessmentResult, StandardAssessResponse, STATUS_SUCCESS};
