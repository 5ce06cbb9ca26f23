use std::sync::Arc;

use crate::{
    clients::ChatClient,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ProblemAnalysis, QuestionType},
    services::{
        request_builder::{build_chat_request, AnalysisRequestParams, ImageAttachment},
        response_normalizer,
    },
};

pub struct GenerateAnalysisInput {
    pub problem_text: Option<String>,
    pub image: Option<ImageAttachment>,
    pub prompt_override: Option<String>,
    pub model: String,
    pub question_type: QuestionType,
}

pub struct AnalysisService {
    client: Arc<dyn ChatClient>,
    config: Arc<Config>,
}

impl AnalysisService {
    pub fn new(client: Arc<dyn ChatClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Runs one generation call: precondition checks, one completion
    /// request, then normalization of whatever came back. Upstream failures
    /// propagate without producing a partial record; malformed model output
    /// is not a failure.
    pub async fn generate(&self, input: GenerateAnalysisInput) -> AppResult<ProblemAnalysis> {
        if !self.config.has_api_key() {
            return Err(AppError::ValidationError(
                "No model API key is configured".to_string(),
            ));
        }

        let has_problem_text = input
            .problem_text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty());
        if !has_problem_text && input.image.is_none() {
            return Err(AppError::ValidationError(
                "Provide a problem image or a problem description before generating".to_string(),
            ));
        }

        let request = build_chat_request(AnalysisRequestParams {
            prompt_override: input.prompt_override.as_deref(),
            problem_text: input.problem_text.as_deref(),
            image: input.image.as_ref(),
            model: &input.model,
            question_type: input.question_type,
            temperature: self.config.model_temperature,
            max_tokens: self.config.max_completion_tokens,
        });

        let raw = self.client.complete(request).await?;
        log::info!(
            "Received {} characters of analysis output from {}",
            raw.len(),
            input.model
        );

        Ok(response_normalizer::normalize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::chat_client::MockChatClient;
    use secrecy::SecretString;

    fn input_with_text() -> GenerateAnalysisInput {
        GenerateAnalysisInput {
            problem_text: Some("Solve 2x + 4 = 10.".to_string()),
            image: None,
            prompt_override: None,
            model: "gpt-4o".to_string(),
            question_type: QuestionType::MultipleChoice,
        }
    }

    fn service(mock: MockChatClient) -> AnalysisService {
        AnalysisService::new(Arc::new(mock), Arc::new(Config::test_config()))
    }

    #[actix_web::test]
    async fn generate_normalizes_structured_output() {
        let mut mock = MockChatClient::new();
        mock.expect_complete().times(1).returning(|_| {
            Ok(r#"{"correctAnswer":"B","explanation":"Subtract, then divide.","misconceptions":["Added instead"]}"#
                .to_string())
        });

        let analysis = service(mock)
            .generate(input_with_text())
            .await
            .expect("generation should succeed");

        assert_eq!(analysis.correct_answer.as_deref(), Some("B"));
        assert_eq!(analysis.explanation, "Subtract, then divide.");
        assert_eq!(analysis.misconceptions.get(0), Some("Added instead"));
        assert_eq!(analysis.misconceptions.get(2), Some(""));
    }

    #[actix_web::test]
    async fn generate_normalizes_free_text_output() {
        let mut mock = MockChatClient::new();
        mock.expect_complete().times(1).returning(|_| {
            Ok("Correct answer: A\n\n## Explanation\nAdd the angles.\n\n## Misconceptions\n1. Mixed up supplementary and complementary.".to_string())
        });

        let analysis = service(mock)
            .generate(input_with_text())
            .await
            .expect("generation should succeed");

        assert_eq!(analysis.correct_answer.as_deref(), Some("A"));
        assert_eq!(analysis.explanation, "Add the angles.");
        assert_eq!(
            analysis.misconceptions.get(0),
            Some("Mixed up supplementary and complementary.")
        );
    }

    #[actix_web::test]
    async fn generate_rejects_missing_credential_before_calling_the_model() {
        let mut config = Config::test_config();
        config.model_api_key = SecretString::from(String::new());

        let mut mock = MockChatClient::new();
        mock.expect_complete().times(0);

        let service = AnalysisService::new(Arc::new(mock), Arc::new(config));
        let result = service.generate(input_with_text()).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn generate_rejects_empty_input_before_calling_the_model() {
        let mut mock = MockChatClient::new();
        mock.expect_complete().times(0);

        let input = GenerateAnalysisInput {
            problem_text: Some("   ".to_string()),
            image: None,
            prompt_override: None,
            model: "gpt-4o".to_string(),
            question_type: QuestionType::MultipleChoice,
        };

        let result = service(mock).generate(input).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn generate_accepts_image_without_problem_text() {
        let mut mock = MockChatClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok("{}".to_string()));

        let input = GenerateAnalysisInput {
            problem_text: None,
            image: Some(ImageAttachment {
                bytes: vec![0xff, 0xd8],
                mime: "image/jpeg".to_string(),
            }),
            prompt_override: None,
            model: "gpt-4o".to_string(),
            question_type: QuestionType::MultipleChoice,
        };

        let analysis = service(mock)
            .generate(input)
            .await
            .expect("generation should succeed");
        assert_eq!(analysis.correct_answer, None);
    }

    #[actix_web::test]
    async fn generate_propagates_upstream_errors() {
        let mut mock = MockChatClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Err(AppError::UpstreamError("quota exceeded".to_string())));

        let result = service(mock).generate(input_with_text()).await;

        assert!(
            matches!(result, Err(AppError::UpstreamError(message)) if message == "quota exceeded")
        );
    }
}
