use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::SecretString;

use cl_author_server::{
    clients::chat_client::{ChatCompletionRequest, MessageContent},
    clients::{ChatClient, ModelInfo},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::QuestionType,
    services::{AnalysisService, GenerateAnalysisInput, ModelService},
};

/// Chat client double that records the requests it receives and replies with
/// a canned body.
struct RecordingChatClient {
    reply: String,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl RecordingChatClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Arc<Mutex<Vec<ChatCompletionRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        Ok(self.reply.clone())
    }

    async fn list_models(&self) -> AppResult<Vec<ModelInfo>> {
        Ok(vec![ModelInfo {
            id: "gpt-4o".to_string(),
            name: None,
        }])
    }
}

struct FailingChatClient;

#[async_trait]
impl ChatClient for FailingChatClient {
    async fn complete(&self, _request: ChatCompletionRequest) -> AppResult<String> {
        Err(AppError::UpstreamError(
            "Incorrect API key provided".to_string(),
        ))
    }

    async fn list_models(&self) -> AppResult<Vec<ModelInfo>> {
        Err(AppError::UpstreamError(
            "Incorrect API key provided".to_string(),
        ))
    }
}

fn test_config() -> Config {
    Config {
        model_api_key: SecretString::from("test_api_key".to_string()),
        model_base_url: "https://api.openai.com/v1".to_string(),
        default_model: "gpt-4o".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        request_timeout_secs: 5,
        max_completion_tokens: 1000,
        model_temperature: 0.3,
    }
}

fn text_input(problem: &str) -> GenerateAnalysisInput {
    GenerateAnalysisInput {
        problem_text: Some(problem.to_string()),
        image: None,
        prompt_override: None,
        model: "gpt-4o".to_string(),
        question_type: QuestionType::MultipleChoice,
    }
}

#[tokio::test]
async fn generation_sends_one_request_and_normalizes_the_reply() {
    let client = RecordingChatClient::new(
        r#"{"correctAnswer":"A","explanation":"Isolate x.","misconceptions":["one","two","three"]}"#,
    );
    let requests = client.requests();
    let service = AnalysisService::new(Arc::new(client), Arc::new(test_config()));

    let analysis = service
        .generate(text_input("Solve x + 1 = 3."))
        .await
        .expect("generation should succeed");

    assert_eq!(analysis.correct_answer.as_deref(), Some("A"));
    assert_eq!(analysis.misconceptions.get(2), Some("three"));

    let requests = requests.lock().expect("request log should not be poisoned");
    assert_eq!(requests.len(), 1, "exactly one outbound call per generation");

    let request = &requests[0];
    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, "system");
    match &request.messages[1].content {
        MessageContent::Text(text) => assert!(text.contains("Solve x + 1 = 3.")),
        MessageContent::Parts(_) => panic!("text-only input should produce a plain user message"),
    }
    assert!(request.response_format.is_some());
}

#[tokio::test]
async fn generation_survives_a_reply_that_ignores_the_format() {
    let client = RecordingChatClient::new(
        "Sure! Let me walk you through this.\n\n\
         The correct answer is C.\n\n\
         To solve it, first distribute the coefficient across the parentheses, then collect \
         the variable terms on the left side and the constants on the right side of the equation.",
    );
    let service = AnalysisService::new(Arc::new(client), Arc::new(test_config()));

    let analysis = service
        .generate(text_input("Solve 3(x + 2) = 12."))
        .await
        .expect("a malformed reply is not an error");

    assert_eq!(analysis.correct_answer.as_deref(), Some("C"));
    assert!(!analysis.explanation.is_empty());
    assert_eq!(analysis.misconceptions.as_array().len(), 3);
}

#[tokio::test]
async fn upstream_failures_surface_the_provider_message() {
    let service = AnalysisService::new(Arc::new(FailingChatClient), Arc::new(test_config()));

    let result = service.generate(text_input("Solve x + 1 = 3.")).await;

    assert!(
        matches!(result, Err(AppError::UpstreamError(message)) if message == "Incorrect API key provided")
    );
}

#[tokio::test]
async fn model_listing_passes_through_the_client() {
    let client = RecordingChatClient::new("");
    let service = ModelService::new(Arc::new(client), Arc::new(test_config()));

    let models = service.list_models().await.expect("listing should succeed");

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].id, "gpt-4o");
}
