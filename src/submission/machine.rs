//! The submission lifecycle.
//!
//! ```text
//! Idle ──submit──▶ Loading ──resolve──▶ Success | Error
//!  ▲                  │                      │
//!  └──────reset───────┴──────────────────────┘
//! ```
//!
//! At most one request is in flight. Every submission takes a fresh
//! [`SubmissionTicket`]; only a resolution carrying the latest ticket may
//! change the view. Reset advances the counter too, so a request that was in
//! flight at reset time can never land afterwards.

use std::fmt;

use tracing::{debug, info};

use super::classify::view_from_outcome;
use super::view::SubmissionView;
use crate::error::{AssessResult, ValidationError};
use crate::models::{AssessmentRequest, AssessmentResult};

/// Identifies one submission. Later submissions have larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why `submit` did not start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is already in flight; the view is unchanged.
    InFlight,
    /// The title failed validation; the view now shows the error.
    Invalid(ValidationError),
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::InFlight => write!(f, "An assessment is already running"),
            SubmitRejected::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitRejected {}

/// Owns the current [`SubmissionView`] and the ticket counter.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    view: SubmissionView,
    /// Last ticket handed out (or burned by a reset)
    latest: u64,
    in_flight: bool,
}

impl SubmissionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &SubmissionView {
        &self.view
    }

    /// Whether a new submission would be accepted.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// The ticket a resolution must carry to be applied.
    pub fn latest_ticket(&self) -> SubmissionTicket {
        SubmissionTicket(self.latest)
    }

    /// Validate `title` and, if it passes, enter `Loading`.
    ///
    /// On success the caller owns sending `request` and reporting back with
    /// the returned ticket. A validation failure goes straight to `Error`
    /// without a ticket.
    pub fn submit(
        &mut self,
        title: &str,
    ) -> Result<(SubmissionTicket, AssessmentRequest), SubmitRejected> {
        if self.in_flight {
            debug!("submission rejected: request in flight");
            return Err(SubmitRejected::InFlight);
        }

        let request = match AssessmentRequest::new(title) {
            Ok(request) => request,
            Err(err) => {
                debug!("submission rejected: {}", err);
                self.view = SubmissionView::Error(err.user_message());
                return Err(SubmitRejected::Invalid(err));
            }
        };

        self.latest += 1;
        self.in_flight = true;
        self.view = SubmissionView::Loading;
        let ticket = SubmissionTicket(self.latest);
        info!("submission {} started for {:?}", ticket, request.title());
        Ok((ticket, request))
    }

    /// Apply a finished request.
    ///
    /// Returns `false` (and changes nothing) if `ticket` is stale.
    pub fn resolve(
        &mut self,
        ticket: SubmissionTicket,
        outcome: AssessResult<AssessmentResult>,
    ) -> bool {
        if ticket != self.latest_ticket() || !self.in_flight {
            debug!(
                "discarding stale resolution {} (latest {})",
                ticket,
                self.latest_ticket()
            );
            return false;
        }

        self.view = view_from_outcome(outcome);
        self.in_flight = false;
        info!("submission {} finished: {}", ticket, self.view.label());
        true
    }

    /// Back to `Idle`. Does not abort an in-flight request, but makes its
    /// resolution stale.
    pub fn reset(&mut self) {
        if self.in_flight {
            debug!("reset while {} in flight", self.latest_ticket());
        }
        self.latest += 1;
        self.in_flight = false;
        self.view = SubmissionView::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    fn success(narrative: &str) -> AssessResult<AssessmentResult> {
        Ok(AssessmentResult {
            result_table: "A|B\n1|2".to_string(),
            result: narrative.to_string(),
            status: "SUCCESS".to_string(),
            error_message: None,
        })
    }

    fn narrative(view: &SubmissionView) -> Option<&str> {
        match view {
            SubmissionView::Success { narrative, .. } => Some(narrative),
            _ => None,
        }
    }

    #[test]
    fn test_starts_idle() {
        let machine = SubmissionMachine::new();
        assert_eq!(machine.view(), &SubmissionView::Idle);
        assert!(machine.can_submit());
    }

    #[test]
    fn test_submit_enters_loading() {
        let mut machine = SubmissionMachine::new();
        let (ticket, request) = machine.submit("  ISO 9001  ").unwrap();
        assert_eq!(request.title(), "ISO 9001");
        assert_eq!(machine.view(), &SubmissionView::Loading);
        assert!(!machine.can_submit());
        assert_eq!(ticket, machine.latest_ticket());
    }

    #[test]
    fn test_invalid_title_goes_to_error_without_ticket() {
        let mut machine = SubmissionMachine::new();
        let before = machine.latest_ticket();

        let err = machine.submit("x").unwrap_err();
        assert!(matches!(
            err,
            SubmitRejected::Invalid(ValidationError::LengthOutOfRange { .. })
        ));
        assert_eq!(
            machine.view(),
            &SubmissionView::Error("Standard name must be between 2 and 200 characters".to_string())
        );
        assert_eq!(machine.latest_ticket(), before);
        assert!(machine.can_submit());
    }

    #[test]
    fn test_empty_title_message() {
        let mut machine = SubmissionMachine::new();
        let _ = machine.submit("   ");
        assert_eq!(
            machine.view(),
            &SubmissionView::Error("Please enter a standard name".to_string())
        );
    }

    #[test]
    fn test_submit_while_loading_is_rejected() {
        let mut machine = SubmissionMachine::new();
        let (ticket, _) = machine.submit("ISO 9001").unwrap();
        assert_eq!(machine.submit("ISO 14001"), Err(SubmitRejected::InFlight));
        assert_eq!(machine.view(), &SubmissionView::Loading);
        assert_eq!(machine.latest_ticket(), ticket);
    }

    #[test]
    fn test_resolve_success() {
        let mut machine = SubmissionMachine::new();
        let (ticket, _) = machine.submit("ISO 9001").unwrap();
        assert!(machine.resolve(ticket, success("done")));
        assert_eq!(narrative(machine.view()), Some("done"));
        assert!(machine.can_submit());
    }

    #[test]
    fn test_resolve_failure_reenables_submission() {
        let mut machine = SubmissionMachine::new();
        let (ticket, _) = machine.submit("ISO 9001").unwrap();
        let outcome = Err(TransportError::Timeout {
            operation: "assessment request".to_string(),
            duration_secs: 120,
        }
        .into());
        assert!(machine.resolve(ticket, outcome));
        assert!(matches!(machine.view(), SubmissionView::Error(_)));
        assert!(machine.can_submit());
    }

    #[test]
    fn test_terminal_state_accepts_new_submission() {
        let mut machine = SubmissionMachine::new();
        let (first, _) = machine.submit("ISO 9001").unwrap();
        machine.resolve(first, success("one"));
        let (second, _) = machine.submit("ISO 14001").unwrap();
        assert!(second > first);
        assert_eq!(machine.view(), &SubmissionView::Loading);
    }

    #[test]
    fn test_reset_makes_in_flight_resolution_stale() {
        let mut machine = SubmissionMachine::new();
        let (a, _) = machine.submit("ISO 9001").unwrap();
        machine.reset();
        assert_eq!(machine.view(), &SubmissionView::Idle);
        assert!(machine.can_submit());

        assert!(!machine.resolve(a, success("late")));
        assert_eq!(machine.view(), &SubmissionView::Idle);
    }

    #[test]
    fn test_later_submission_wins_regardless_of_order() {
        let mut machine = SubmissionMachine::new();
        let (a, _) = machine.submit("ISO 9001").unwrap();
        machine.reset();
        let (b, _) = machine.submit("ISO 14001").unwrap();

        assert!(machine.resolve(b, success("B")));
        assert!(!machine.resolve(a, success("A")));
        assert_eq!(narrative(machine.view()), Some("B"));
    }

    #[test]
    fn test_earlier_submission_resolving_first_after_reset_is_discarded() {
        let mut machine = SubmissionMachine::new();
        let (a, _) = machine.submit("ISO 9001").unwrap();
        machine.reset();
        let (b, _) = machine.submit("ISO 14001").unwrap();

        assert!(!machine.resolve(a, success("A")));
        assert_eq!(machine.view(), &SubmissionView::Loading);
        assert!(machine.resolve(b, success("B")));
        assert_eq!(narrative(machine.view()), Some("B"));
    }

    #[test]
    fn test_duplicate_resolution_is_ignored() {
        let mut machine = SubmissionMachine::new();
        let (ticket, _) = machine.submit("ISO 9001").unwrap();
        assert!(machine.resolve(ticket, success("first")));
        assert!(!machine.resolve(ticket, success("second")));
        assert_eq!(narrative(machine.view()), Some("first"));
    }
}
