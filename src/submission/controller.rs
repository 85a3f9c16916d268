//! Drives a [`SubmissionMachine`] against the real backend.
//!
//! The controller lives on the app loop. Requests run in spawned tasks that
//! never touch the machine; they report back through the app's message
//! channel and the loop hands the result to [`AssessmentController::on_resolved`].

use tokio::sync::{mpsc, watch};
use tracing::debug;

use super::machine::{SubmissionMachine, SubmissionTicket, SubmitRejected};
use super::view::SubmissionView;
use crate::app::AppMessage;
use crate::client::AssessClient;
use crate::error::AssessResult;
use crate::models::AssessmentResult;
use crate::traits::HttpClient;

pub struct AssessmentController<C: HttpClient + 'static> {
    client: AssessClient<C>,
    machine: SubmissionMachine,
    view_tx: watch::Sender<SubmissionView>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl<C: HttpClient + 'static> AssessmentController<C> {
    /// Resolutions are delivered to `message_tx` as
    /// [`AppMessage::AssessmentResolved`].
    pub fn new(client: AssessClient<C>, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let (view_tx, _) = watch::channel(SubmissionView::Idle);
        Self {
            client,
            machine: SubmissionMachine::new(),
            view_tx,
            message_tx,
        }
    }

    /// Observe the view. Receivers see every transition's end state.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionView> {
        self.view_tx.subscribe()
    }

    pub fn view(&self) -> &SubmissionView {
        self.machine.view()
    }

    pub fn can_submit(&self) -> bool {
        self.machine.can_submit()
    }

    /// Validate and send `title`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_submit(&mut self, title: &str) -> Result<SubmissionTicket, SubmitRejected> {
        let result = self.machine.submit(title);
        self.publish();
        let (ticket, request) = result?;

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = client.assess(&request).await;
            if tx
                .send(AppMessage::AssessmentResolved { ticket, outcome })
                .is_err()
            {
                debug!("app loop gone, dropping resolution {}", ticket);
            }
        });

        Ok(ticket)
    }

    /// Back to `Idle`; an in-flight request keeps running but is ignored.
    pub fn on_reset(&mut self) {
        self.machine.reset();
        self.publish();
    }

    /// Apply a resolution. Returns whether it changed the view.
    pub fn on_resolved(
        &mut self,
        ticket: SubmissionTicket,
        outcome: AssessResult<AssessmentResult>,
    ) -> bool {
        let applied = self.machine.resolve(ticket, outcome);
        if applied {
            self.publish();
        }
        applied
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.machine.view().clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;

    const BASE: &str = "http://backend.test";

    fn controller(
        mock: &MockHttpClient,
    ) -> (
        AssessmentController<MockHttpClient>,
        mpsc::UnboundedReceiver<AppMessage>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = AssessClient::new(BASE, mock.clone());
        (AssessmentController::new(client, tx), rx)
    }

    async fn feed(
        controller: &mut AssessmentController<MockHttpClient>,
        rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    ) -> bool {
        match rx.recv().await {
            Some(AppMessage::AssessmentResolved { ticket, outcome }) => {
                controller.on_resolved(ticket, outcome)
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_publishes_loading_then_success() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(json!({
            "code": 0,
            "data": {"resultTable": "A|B\n1|2", "result": "ok", "status": "SUCCESS"}
        })));
        let (mut controller, mut rx) = controller(&mock);
        let view_rx = controller.subscribe();

        controller.on_submit("ISO 9001").unwrap();
        assert_eq!(*view_rx.borrow(), SubmissionView::Loading);

        assert!(feed(&mut controller, &mut rx).await);
        assert!(matches!(*view_rx.borrow(), SubmissionView::Success { .. }));
    }

    #[tokio::test]
    async fn test_invalid_title_never_hits_transport() {
        let mock = MockHttpClient::new();
        let (mut controller, _rx) = controller(&mock);
        let view_rx = controller.subscribe();

        assert!(controller.on_submit("").is_err());
        assert!(matches!(*view_rx.borrow(), SubmissionView::Error(_)));
        tokio::task::yield_now().await;
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_reset_publishes_idle() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Pending);
        let (mut controller, _rx) = controller(&mock);
        let view_rx = controller.subscribe();

        controller.on_submit("ISO 9001").unwrap();
        controller.on_reset();
        assert_eq!(*view_rx.borrow(), SubmissionView::Idle);
        assert!(controller.can_submit());
    }
}
