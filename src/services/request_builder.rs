use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::{
    clients::chat_client::{ChatCompletionRequest, ChatMessage, ContentPart, ResponseFormat},
    constants::prompts::{
        EQUATION_ANALYSIS_PROMPT, IMAGE_ANALYSIS_INSTRUCTION, MULTIPLE_CHOICE_ANALYSIS_PROMPT,
        TEXT_ANALYSIS_INSTRUCTION,
    },
    models::domain::QuestionType,
};

/// An uploaded problem image, decoded from the transport encoding. The
/// builder re-encodes it into the data URI the wire format expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub mime: String,
}

pub struct AnalysisRequestParams<'a> {
    pub prompt_override: Option<&'a str>,
    pub problem_text: Option<&'a str>,
    pub image: Option<&'a ImageAttachment>,
    pub model: &'a str,
    pub question_type: QuestionType,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Assembles the one outbound completion request for a generation call.
/// Pure assembly; issuing the request is the chat client's job.
pub fn build_chat_request(params: AnalysisRequestParams<'_>) -> ChatCompletionRequest {
    let system_prompt = params
        .prompt_override
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or_else(|| default_prompt(params.question_type));

    let user_message = match params.image {
        Some(image) => {
            let data_uri = format!("data:{};base64,{}", image.mime, BASE64.encode(&image.bytes));
            ChatMessage::user_parts(vec![
                ContentPart::text(user_instruction(
                    params.problem_text,
                    IMAGE_ANALYSIS_INSTRUCTION,
                )),
                ContentPart::image_url(data_uri),
            ])
        }
        None => ChatMessage::user_text(user_instruction(
            params.problem_text,
            TEXT_ANALYSIS_INSTRUCTION,
        )),
    };

    ChatCompletionRequest {
        model: params.model.to_string(),
        messages: vec![ChatMessage::system(system_prompt), user_message],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
        response_format: supports_json_mode(params.model).then(ResponseFormat::json_object),
    }
}

pub fn default_prompt(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::MultipleChoice => MULTIPLE_CHOICE_ANALYSIS_PROMPT,
        QuestionType::Equation => EQUATION_ANALYSIS_PROMPT,
    }
}

/// Whether the model family honors the `json_object` response format. The
/// request falls back to free text for anything unrecognized; the normalizer
/// copes either way.
pub fn supports_json_mode(model: &str) -> bool {
    const JSON_MODE_FAMILIES: [&str; 5] = ["gpt-4o", "gpt-4-turbo", "gpt-4.1", "gpt-3.5-turbo", "o3"];

    JSON_MODE_FAMILIES
        .iter()
        .any(|family| model.starts_with(family))
}

fn user_instruction(problem_text: Option<&str>, instruction: &str) -> String {
    match problem_text.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => format!("{}\n\n{}", instruction, text),
        None => instruction.to_string(),
    }
}
