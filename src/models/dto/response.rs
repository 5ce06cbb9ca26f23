use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    clients::ModelInfo,
    models::domain::{Misconceptions, ProblemAnalysis, Snippet},
};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponseDto {
    pub request_id: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub explanation: String,
    pub misconceptions: Misconceptions,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisResponseDto {
    pub fn from_analysis(analysis: ProblemAnalysis, model: String) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            model,
            correct_answer: analysis.correct_answer,
            explanation: analysis.explanation,
            misconceptions: analysis.misconceptions,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDto {
    pub id: String,
    pub name: String,
}

impl From<ModelInfo> for ModelDto {
    fn from(info: ModelInfo) -> Self {
        let name = info.name.unwrap_or_else(|| info.id.clone());
        Self { id: info.id, name }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SnippetDto {
    pub key: String,
    pub script: String,
}

impl From<Snippet> for SnippetDto {
    fn from(snippet: Snippet) -> Self {
        Self {
            key: snippet.key,
            script: snippet.script,
        }
    }
}
