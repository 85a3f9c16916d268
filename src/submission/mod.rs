//! Submission lifecycle: validate, send, await, render.
//!
//! [`SubmissionMachine`] is the synchronous state machine;
//! [`AssessmentController`] runs it against an [`AssessClient`](crate::client::AssessClient)
//! on the tokio runtime and publishes every view through a watch channel.

mod classify;
mod controller;
mod machine;
mod view;

pub use classify::view_from_outcome;
pub use controller::AssessmentController;
pub use machine::{SubmissionMachine, SubmissionTicket, SubmitRejected};
pub use view::{SubmissionView, EMPTY_NARRATIVE_PLACEHOLDER, EMPTY_TABLE_PLACEHOLDER};
