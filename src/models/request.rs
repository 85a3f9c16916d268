use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::validate;

/// Body of `POST /admin/evaluation/assess`.
///
/// Only constructible from a validated title, so a request in hand always
/// satisfies the length bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentRequest {
    title: String,
}

impl AssessmentRequest {
    /// Validate `title` and wrap its canonical form.
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        validate(title).map(|title| Self { title })
    }

    /// The canonical (trimmed) title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Output language for the secondary assessment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-cn")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Language {
    /// Parse a CLI value (`zh-cn` / `en`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "zh-cn" | "zh" => Some(Language::ZhCn),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-cn",
            Language::En => "en",
        }
    }
}

/// Body of `POST /assess/standard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardAssessRequest {
    pub content: String,
    pub language: Language,
}

impl StandardAssessRequest {
    /// Request in the default language. Blank content is rejected, matching
    /// the server's `@NotBlank`.
    pub fn new(content: &str) -> Result<Self, ValidationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(Self {
            content: content.to_string(),
            language: Language::default(),
        })
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
