//! Full-screen rendering of each submission state with TestBackend.

mod common;

use common::{mock_client, success_envelope, MockHttpClient, MockResponse};
use ratatui::{backend::TestBackend, Terminal};
use stdassess::app::{App, AppMessage};
use stdassess::input::Command;
use stdassess::submission::{EMPTY_NARRATIVE_PLACEHOLDER, EMPTY_TABLE_PLACEHOLDER};
use stdassess::ui;

fn screen_text(app: &App<MockHttpClient>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

async fn resolved_app(body: serde_json::Value) -> App<MockHttpClient> {
    let (client, mock) = mock_client();
    mock.set_default_response(MockResponse::json(body));
    let mut app = App::new(client);
    let mut rx = app.message_rx.take().unwrap();

    app.execute(Command::Paste("ISO 9001".to_string()));
    app.execute(Command::Submit);
    match rx.recv().await {
        Some(msg @ AppMessage::AssessmentResolved { .. }) => app.handle_message(msg),
        other => panic!("unexpected message: {:?}", other),
    }
    app
}

#[tokio::test]
async fn test_success_screen_shows_table_and_conclusion() {
    let app = resolved_app(success_envelope(
        "Item|Draft|Reference\nScope|wide|narrow",
        "The draft **extends** the reference.",
    ))
    .await;

    let text = screen_text(&app, 100, 30);
    assert!(text.contains("Assessment succeeded"));
    assert!(text.contains("Detailed analysis"));
    assert!(text.contains("│ Scope"));
    assert!(text.contains("Conclusion"));
    assert!(text.contains("extends"));
    assert!(!text.contains("**"));
}

#[tokio::test]
async fn test_empty_success_shows_placeholders() {
    let app = resolved_app(success_envelope("", "")).await;

    let text = screen_text(&app, 100, 30);
    assert!(text.contains(EMPTY_TABLE_PLACEHOLDER));
    assert!(text.contains(EMPTY_NARRATIVE_PLACEHOLDER));
}

#[tokio::test]
async fn test_loading_screen_shows_spinner_label() {
    let (client, mock) = mock_client();
    mock.set_default_response(MockResponse::Pending);
    let mut app = App::new(client);

    app.execute(Command::Paste("ISO 9001".to_string()));
    app.execute(Command::Submit);

    let text = screen_text(&app, 80, 20);
    assert!(text.contains("Assessing..."));
}

#[test]
fn test_narrow_terminal_does_not_panic() {
    let (client, _mock) = mock_client();
    let app = App::new(client);
    let _ = screen_text(&app, 20, 6);
}
