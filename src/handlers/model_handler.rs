use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::ModelDto};

#[get("/api/models")]
async fn list_models(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let models = state.model_service.list_models().await?;
    let listing: Vec<ModelDto> = models.into_iter().map(ModelDto::from).collect();
    Ok(HttpResponse::Ok().json(listing))
}
