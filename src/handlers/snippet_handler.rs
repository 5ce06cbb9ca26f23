use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    errors::AppError,
    models::{
        domain::QuestionForm,
        dto::{request::RenderSnippetsRequestDto, response::SnippetDto},
    },
    services::snippet_service,
};

#[post("/api/snippets")]
async fn render_snippets(
    request: web::Json<RenderSnippetsRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let form: QuestionForm = request.into();
    let snippets: Vec<SnippetDto> = snippet_service::render_snippets(&form)
        .into_iter()
        .map(SnippetDto::from)
        .collect();

    Ok(HttpResponse::Ok().json(snippets))
}
