//! One-shot assessment modes: run one request, print, exit.
//!
//! The primary assessment goes through the same outcome classification as
//! the TUI, so a script sees exactly the messages a user would.

use std::future::Future;
use std::io::{self, IsTerminal};
use std::time::Duration;

use chrono::Local;
use color_eyre::Result;
use tracing::info;

use crate::cli_output::{
    clear_step_spinner, icons, print_block, print_header, print_section, print_step_line,
    print_step_spinner, print_table, SPINNER_CHARS,
};
use crate::client::AssessClient;
use crate::health_check::run_health_check;
use crate::models::{AssessmentRequest, StandardAssessRequest, StandardAssessResponse};
use crate::models::Language;
use crate::submission::{
    view_from_outcome, SubmissionView, EMPTY_NARRATIVE_PLACEHOLDER, EMPTY_TABLE_PLACEHOLDER,
};
use crate::traits::HttpClient;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Await `fut`, animating a spinner on an interactive stdout.
async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    if !io::stdout().is_terminal() {
        return fut.await;
    }

    tokio::pin!(fut);
    let mut interval = tokio::time::interval(SPINNER_INTERVAL);
    let mut frame = 0usize;
    loop {
        tokio::select! {
            output = &mut fut => {
                clear_step_spinner();
                return output;
            }
            _ = interval.tick() => {
                print_step_spinner(SPINNER_CHARS[frame % SPINNER_CHARS.len()], message);
                frame += 1;
            }
        }
    }
}

/// `--title`: assess a standard by name.
///
/// Returns whether the assessment succeeded.
pub async fn run_assess<C: HttpClient>(
    client: &AssessClient<C>,
    title: &str,
    html: bool,
) -> Result<bool> {
    let request = match AssessmentRequest::new(title) {
        Ok(request) => request,
        Err(err) => {
            print_step_line(icons::FAILURE, &err.user_message());
            return Ok(false);
        }
    };

    info!("one-shot assessment for {:?}", request.title());
    let outcome = with_spinner("Assessing...", client.assess(&request)).await;

    match view_from_outcome(outcome) {
        SubmissionView::Success { table, narrative } => {
            if html {
                println!("{}", table.to_html());
                return Ok(true);
            }

            print_header("STANDARD ASSESSMENT");
            print_step_line(icons::SUCCESS, &format!("Assessment succeeded: {}", request.title()));
            println!();

            print_section("DETAILED ANALYSIS");
            print_table(&table, EMPTY_TABLE_PLACEHOLDER);
            println!();

            print_section("CONCLUSION");
            if narrative.trim().is_empty() {
                print_block(EMPTY_NARRATIVE_PLACEHOLDER);
            } else {
                print_block(&narrative);
            }
            println!();
            println!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
            Ok(true)
        }
        SubmissionView::Error(message) => {
            print_step_line(icons::FAILURE, &message);
            Ok(false)
        }
        SubmissionView::Idle | SubmissionView::Loading => Ok(false),
    }
}

/// `--content`: assess free-text content.
pub async fn run_assess_content<C: HttpClient>(
    client: &AssessClient<C>,
    content: &str,
    language: Language,
) -> Result<bool> {
    let request = match StandardAssessRequest::new(content) {
        Ok(request) => request.with_language(language),
        Err(err) => {
            print_step_line(icons::FAILURE, &err.user_message());
            return Ok(false);
        }
    };

    match with_spinner("Assessing...", client.assess_content(&request)).await {
        Ok(response) => {
            print_content_response(&response);
            Ok(true)
        }
        Err(err) => {
            tracing::warn!(code = err.error_code(), "content assessment failed: {}", err);
            print_step_line(icons::FAILURE, &err.user_message());
            Ok(false)
        }
    }
}

fn print_content_response(response: &StandardAssessResponse) {
    print_header("CONTENT ASSESSMENT");
    if let Some(topic) = &response.topic {
        println!("Topic: {}", topic);
    }
    if let Some(score) = response.score {
        println!("Score: {}", score);
    }
    if let Some(summary) = &response.summary {
        println!();
        print_section("SUMMARY");
        print_block(summary);
    }
    if !response.recommendations.is_empty() {
        println!();
        print_section("RECOMMENDATIONS");
        for recommendation in &response.recommendations {
            println!("  • {}", recommendation);
        }
    }
}

/// `--health`: probe the backend.
pub async fn run_health<C: HttpClient>(client: &AssessClient<C>) -> Result<bool> {
    let result = run_health_check(client).await;
    match (result.healthy, result.response_time_ms) {
        (true, Some(ms)) => {
            print_step_line(
                icons::SUCCESS,
                &format!("{} reachable ({} ms)", client.base_url(), ms),
            );
        }
        (false, Some(_)) => {
            print_step_line(
                icons::WARNING,
                &format!("{} answered with an error status", client.base_url()),
            );
        }
        _ => {
            let reason = result.error_message.unwrap_or_default();
            print_step_line(
                icons::FAILURE,
                &format!("{} unreachable: {}", client.base_url(), reason),
            );
        }
    }
    Ok(result.healthy)
}
