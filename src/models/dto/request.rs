use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerOption, QuestionForm, QuestionType},
    services::request_builder::ImageAttachment,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateAnalysisRequestDto {
    #[validate(length(max = 20000))]
    pub problem_text: Option<String>,

    pub image_base64: Option<String>,

    #[validate(length(max = 100))]
    pub image_mime: Option<String>,

    #[validate(length(max = 20000))]
    pub prompt_override: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub question_type: String,
}

impl GenerateAnalysisRequestDto {
    /// Decodes the uploaded image, if any. Rejecting a bad upload here means
    /// no model call is spent on it.
    pub fn decode_image(&self) -> AppResult<Option<ImageAttachment>> {
        let Some(encoded) = self
            .image_base64
            .as_deref()
            .map(str::trim)
            .filter(|encoded| !encoded.is_empty())
        else {
            return Ok(None);
        };

        // Browser uploads sometimes arrive as full data URIs; keep the payload
        let payload = encoded.rsplit(',').next().unwrap_or(encoded);
        let bytes = BASE64.decode(payload).map_err(|_| {
            AppError::ValidationError("Uploaded image is not valid base64 data".to_string())
        })?;

        let mime = self
            .image_mime
            .clone()
            .filter(|mime| !mime.trim().is_empty())
            .unwrap_or_else(|| "image/png".to_string());

        Ok(Some(ImageAttachment { bytes, mime }))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerOptionDto {
    #[validate(length(min = 1, max = 2))]
    pub letter: String,

    #[validate(length(max = 2000))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenderSnippetsRequestDto {
    #[validate(range(min = 1, max = 99))]
    pub question_number: u32,

    #[validate(length(min = 1, max = 50))]
    pub question_type: String,

    #[serde(default)]
    pub options: Vec<AnswerOptionDto>,

    #[validate(length(max = 200))]
    pub correct_answer: Option<String>,

    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub misconceptions: Vec<String>,

    #[serde(default)]
    pub teks_standard: String,

    pub feedback: Option<String>,
}

impl From<RenderSnippetsRequestDto> for QuestionForm {
    fn from(dto: RenderSnippetsRequestDto) -> Self {
        let question_type = parse_question_type(&dto.question_type);
        let mut form = QuestionForm::new_draft(dto.question_number, question_type)
            .with_correct_answer(dto.correct_answer)
            .with_explanation(dto.explanation)
            .with_teks_standard(dto.teks_standard);

        if !dto.options.is_empty() {
            form = form.with_options(
                dto.options
                    .into_iter()
                    .map(|option| AnswerOption {
                        letter: option.letter,
                        text: option.text,
                    })
                    .collect(),
            );
        }

        for (index, text) in dto.misconceptions.into_iter().enumerate() {
            form = form.with_misconception(index, text);
        }

        if let Some(feedback) = dto.feedback {
            form = form.with_feedback(feedback);
        }

        form
    }
}

pub fn parse_question_type(value: &str) -> QuestionType {
    match value.trim().to_lowercase().as_str() {
        "equation" | "open-ended" | "open_ended" => QuestionType::Equation,
        _ => QuestionType::MultipleChoice,
    }
}
