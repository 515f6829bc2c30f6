//! AI-generated executive summaries of the dashboard metrics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::InsightConfig;
use crate::error::{InsightError, InsightResult};
use crate::models::{
    AttendancePoint, DepartmentScore, Granularity, RecruitmentStage, Segment, ViewSelection,
};
use crate::resolver;

pub const EMPTY_INSIGHT: &str = "No insights generated.";
pub const FALLBACK_INSIGHT: &str =
    "Unable to generate insights at this time. Please try again later.";

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub granularity: Granularity,
    pub segment: Segment,
    pub attendance: Vec<AttendancePoint>,
    pub average_attendance: Option<u8>,
    pub recruitment: Vec<RecruitmentStage>,
    pub violations: u32,
    pub department_performance: Vec<DepartmentScore>,
}

impl MetricsSnapshot {
    pub fn from_view(view: &ViewSelection) -> Self {
        Self {
            granularity: view.granularity,
            segment: view.segment,
            attendance: view.attendance.clone(),
            average_attendance: resolver::average_attendance(&view.attendance),
            recruitment: view.recruitment.clone(),
            violations: view.violations,
            department_performance: resolver::department_scores(),
        }
    }
}

pub fn build_prompt(snapshot: &MetricsSnapshot) -> InsightResult<String> {
    let metrics = serde_json::to_string_pretty(snapshot)?;
    Ok(format!(
        "Act as a senior HR Analyst. Analyze the following {} HR dashboard metrics and provide \
         a brief, executive-level summary (max 3 bullet points) highlighting key risks or \
         achievements.\n\nMetrics:\n{}\n\nFocus on attendance, time-to-hire, and department \
         performance.",
        snapshot.granularity, metrics
    ))
}

/// A text-generation backend that turns a prompt into prose.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> InsightResult<String>;

    fn name(&self) -> &str;
}

/// Produces the insight text for a snapshot. Never fails: errors are logged
/// and replaced with [`FALLBACK_INSIGHT`].
pub async fn generate_insights(summarizer: &dyn Summarizer, snapshot: &MetricsSnapshot) -> String {
    let outcome = match build_prompt(snapshot) {
        Ok(prompt) => summarizer.summarize(&prompt).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(text) if text.trim().is_empty() => EMPTY_INSIGHT.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::error!(service = summarizer.name(), error = %err, "insight generation failed");
            FALLBACK_INSIGHT.to_string()
        }
    }
}

/// Insight text for the configured service. A missing API key disables the
/// service and yields [`FALLBACK_INSIGHT`].
pub async fn insight_text(config: &InsightConfig, snapshot: &MetricsSnapshot) -> String {
    match GeminiClient::from_config(config) {
        Ok(client) => generate_insights(&client, snapshot).await,
        Err(err) => {
            tracing::warn!(error = %err, "insights disabled");
            FALLBACK_INSIGHT.to_string()
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn from_config(config: &InsightConfig) -> InsightResult<Self> {
        let api_key = config.api_key.clone().ok_or(InsightError::MissingApiKey)?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, prompt: &str) -> InsightResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::info!(model = %self.model, prompt_len = prompt.len(), "requesting insights");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.text())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
