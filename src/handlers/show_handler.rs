//! Show handlers of the booking directory.

use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::CreateShowRequest;
use crate::services::DirectoryService;

/// List all shows ordered by start time
#[utoipa::path(
    get,
    path = "/api/fyyur/shows",
    tag = "Shows",
    responses(
        (status = 200, description = "All shows", body = crate::models::ShowsResponse)
    )
)]
pub async fn get_shows(
    directory_service: web::Data<DirectoryService>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service.shows().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Book an artist at a venue
#[utoipa::path(
    post,
    path = "/api/fyyur/shows",
    tag = "Shows",
    request_body = CreateShowRequest,
    responses(
        (status = 200, description = "Show listed", body = crate::models::ShowResponse),
        (status = 400, description = "Malformed body", body = crate::models::ErrorResponse),
        (status = 422, description = "Unknown artist or venue", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_show(
    directory_service: web::Data<DirectoryService>,
    body: web::Json<CreateShowRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service.create_show(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
