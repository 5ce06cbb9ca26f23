use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{parse_question_type, GenerateAnalysisRequestDto},
        response::AnalysisResponseDto,
    },
    services::GenerateAnalysisInput,
};

#[post("/api/analysis")]
async fn generate_analysis(
    state: web::Data<AppState>,
    request: web::Json<GenerateAnalysisRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let image = request.decode_image()?;
    let model = request
        .model
        .clone()
        .map(|model| model.trim().to_string())
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| state.config.default_model.clone());

    let analysis = state
        .analysis_service
        .generate(GenerateAnalysisInput {
            problem_text: request.problem_text,
            image,
            prompt_override: request.prompt_override,
            model: model.clone(),
            question_type: parse_question_type(&request.question_type),
        })
        .await?;

    Ok(HttpResponse::Ok().json(AnalysisResponseDto::from_analysis(analysis, model)))
}

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
