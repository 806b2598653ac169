//! Remote grading of code submissions.
//!
//! The grader is an injected collaborator: it takes an objective, the player's
//! code and its language, and always resolves to a [`GradeResponse`]. Transport
//! and parse failures are absorbed here and turned into a zero-score response,
//! so callers never handle errors from this seam.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::GraderConfig;
use crate::model::Language;

pub const CONNECTION_ERROR_FEEDBACK: &str =
    "Failed to connect to the grading server (AI Error). Please check your connection.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeRequest {
    pub objective: String,
    pub code: String,
    pub language: Language,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResponse {
    pub score: u8,
    pub feedback: String,
    pub is_correct: bool,
}

impl GradeResponse {
    pub fn connection_failure() -> Self {
        Self {
            score: 0,
            feedback: CONNECTION_ERROR_FEEDBACK.to_string(),
            is_correct: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    #[error("no API key configured for the grading service")]
    MissingApiKey,
    #[error("transport error: {0}")]
    Transport(#[from] gloo::net::Error),
    #[error("grading service answered with HTTP {0}")]
    Status(u16),
    #[error("grading service returned no content")]
    EmptyResponse,
    #[error("malformed grading payload: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type GradeFuture = Pin<Box<dyn Future<Output = GradeResponse>>>;

pub trait Grader {
    /// Never fails; see [`GradeResponse::connection_failure`].
    fn grade(&self, request: GradeRequest) -> GradeFuture;
}

/// Shared grader handle suitable for a Yew context.
#[derive(Clone)]
pub struct GraderHandle(pub Rc<dyn Grader>);

impl GraderHandle {
    pub fn new(grader: impl Grader + 'static) -> Self {
        Self(Rc::new(grader))
    }

    pub fn grade(&self, request: GradeRequest) -> GradeFuture {
        self.0.grade(request)
    }
}

impl PartialEq for GraderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Collapses a fallible grading attempt into the response the session sees.
pub fn absorb(result: Result<GradeResponse, GradingError>) -> GradeResponse {
    match result {
        Ok(r) => r,
        Err(e) => {
            log::error!("grading failed: {e}");
            GradeResponse::connection_failure()
        }
    }
}

pub fn build_prompt(request: &GradeRequest) -> String {
    format!(
        "Act as a strict code reviewer for a programming game.\n\
         Language: {}\n\
         Objective: {}\n\n\
         User's Code:\n```\n{}\n```\n\n\
         Evaluate if the code achieves the visual or logical objective.\n\
         For HTML/CSS, focus on visual similarity to description.\n\
         For JS/C++/Java, focus on functional correctness and output.",
        request.language, request.objective, request.code
    )
}

/// Request body for `generateContent` with a JSON response schema.
pub fn build_body(request: &GradeRequest) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(request) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "score": {
                        "type": "INTEGER",
                        "description": "A score from 0 to 100 representing how well the code meets the objective."
                    },
                    "feedback": {
                        "type": "STRING",
                        "description": "Constructive feedback on what is wrong or right. Keep it brief and witty."
                    },
                    "isCorrect": {
                        "type": "BOOLEAN",
                        "description": "True if the code functionally achieves the goal, even if not perfect."
                    }
                },
                "required": ["score", "feedback", "isCorrect"]
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvaluation {
    score: i64,
    feedback: String,
    is_correct: bool,
}

/// Parses the model's JSON answer, clamping the score into 0-100.
pub fn parse_evaluation(text: &str) -> Result<GradeResponse, GradingError> {
    let raw: RawEvaluation = serde_json::from_str(text.trim())?;
    Ok(GradeResponse {
        score: raw.score.clamp(0, 100) as u8,
        feedback: raw.feedback,
        is_correct: raw.is_correct,
    })
}

/// Extracts and parses the first candidate text of a `generateContent` reply.
pub fn parse_generate_response(body: &str) -> Result<GradeResponse, GradingError> {
    let reply: GenerateResponse = serde_json::from_str(body)?;
    let text: String = reply
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter_map(|p| p.text)
        .next()
        .filter(|t| !t.trim().is_empty())
        .ok_or(GradingError::EmptyResponse)?;
    parse_evaluation(&text)
}

/// Grader backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiGrader {
    config: Rc<GraderConfig>,
}

impl GeminiGrader {
    pub fn new(config: GraderConfig) -> Self {
        Self { config: Rc::new(config) }
    }
}

async fn request_grade(config: &GraderConfig, request: &GradeRequest) -> Result<GradeResponse, GradingError> {
    let key = config.api_key.as_deref().ok_or(GradingError::MissingApiKey)?;
    let response = Request::post(&config.generate_url())
        .query([("key", key)])
        .json(&build_body(request))?
        .send()
        .await?;
    if !response.ok() {
        return Err(GradingError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_generate_response(&body)
}

impl Grader for GeminiGrader {
    fn grade(&self, request: GradeRequest) -> GradeFuture {
        let config = Rc::clone(&self.config);
        Box::pin(async move {
            log::debug!("grading {} submission ({} bytes)", request.language, request.code.len());
            absorb(request_grade(&config, &request).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GradeRequest {
        GradeRequest {
            objective: "Create an <h1> tag containing \"Hello Terminal\".".into(),
            code: "<h1>Hello Terminal</h1>".into(),
            language: Language::Html,
        }
    }

    #[test]
    fn prompt_carries_objective_code_and_language() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Language: HTML"));
        assert!(prompt.contains("Hello Terminal"));
        assert!(prompt.contains("<h1>Hello Terminal</h1>"));
    }

    #[test]
    fn body_requests_json_schema() {
        let body = build_body(&request());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["required"][2], "isCorrect");
    }

    #[test]
    fn parses_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":" {\"score\": 88, \"feedback\": \"Nice\", \"isCorrect\": true} "}]}}]}"#;
        let r = parse_generate_response(body).unwrap();
        assert_eq!(r, GradeResponse { score: 88, feedback: "Nice".into(), is_correct: true });
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let r = parse_evaluation(r#"{"score": 140, "feedback": "", "isCorrect": true}"#).unwrap();
        assert_eq!(r.score, 100);
        let r = parse_evaluation(r#"{"score": -3, "feedback": "", "isCorrect": false}"#).unwrap();
        assert_eq!(r.score, 0);
    }

    #[test]
    fn empty_and_malformed_replies_are_errors() {
        assert!(matches!(parse_generate_response(r#"{"candidates":[]}"#), Err(GradingError::EmptyResponse)));
        assert!(matches!(parse_generate_response("not json"), Err(GradingError::Parse(_))));
        assert!(matches!(
            parse_generate_response(r#"{"candidates":[{"content":{"parts":[{"text":"{oops"}]}}]}"#),
            Err(GradingError::Parse(_))
        ));
    }

    #[test]
    fn errors_are_absorbed_into_the_fallback() {
        let r = absorb(Err(GradingError::MissingApiKey));
        assert_eq!(r, GradeResponse::connection_failure());
        assert_eq!(r.score, 0);
        assert!(!r.is_correct);
    }

    #[test]
    fn missing_key_resolves_to_fallback_without_network() {
        let grader = GeminiGrader::new(GraderConfig::default());
        let r = futures::executor::block_on(grader.grade(request()));
        assert_eq!(r, GradeResponse::connection_failure());
    }
}
