//! Venue handlers of the booking directory.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::info;

use crate::errors::ApiError;
use crate::models::{CreateVenueRequest, DirectorySearchRequest, UpdateVenueRequest};
use crate::pagination::PageQuery;
use crate::services::DirectoryService;
use crate::validators::validate_body;

/// List venues grouped by city and state
#[utoipa::path(
    get,
    path = "/api/fyyur/venues",
    tag = "Venues",
    responses(
        (status = 200, description = "Venue areas", body = crate::models::VenueAreasResponse)
    )
)]
pub async fn get_venues(
    directory_service: web::Data<DirectoryService>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service.venue_areas(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Show a venue with its past and upcoming shows
#[utoipa::path(
    get,
    path = "/api/fyyur/venues/{id}",
    tag = "Venues",
    params(
        ("id" = i64, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue details", body = crate::models::VenueDetailResponse),
        (status = 404, description = "Venue not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_venue(
    directory_service: web::Data<DirectoryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service
        .venue_detail(path.into_inner(), Utc::now())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Search venues by name
#[utoipa::path(
    post,
    path = "/api/fyyur/venues/search",
    tag = "Venues",
    params(PageQuery),
    request_body = DirectorySearchRequest,
    responses(
        (status = 200, description = "Matching venues", body = crate::models::DirectorySearchResponse)
    )
)]
pub async fn search_venues(
    directory_service: web::Data<DirectoryService>,
    query: web::Query<PageQuery>,
    body: web::Json<DirectorySearchRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service
        .search_venues(&body.search_term, query.page_request(), Utc::now())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// List a new venue
#[utoipa::path(
    post,
    path = "/api/fyyur/venues",
    tag = "Venues",
    request_body = CreateVenueRequest,
    responses(
        (status = 200, description = "Venue created", body = crate::models::VenueResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_venue(
    directory_service: web::Data<DirectoryService>,
    body: web::Json<CreateVenueRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_body(&*body, "create venue")?;
    let response = directory_service.create_venue(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Edit a venue
#[utoipa::path(
    patch,
    path = "/api/fyyur/venues/{id}",
    tag = "Venues",
    params(
        ("id" = i64, Path, description = "Venue ID")
    ),
    request_body = UpdateVenueRequest,
    responses(
        (status = 200, description = "Venue updated", body = crate::models::VenueResponse),
        (status = 404, description = "Venue not found", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_venue(
    directory_service: web::Data<DirectoryService>,
    path: web::Path<i64>,
    body: web::Json<UpdateVenueRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_body(&*body, "update venue")?;
    let response = directory_service
        .update_venue(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Delete a venue and all of its shows
#[utoipa::path(
    delete,
    path = "/api/fyyur/venues/{id}",
    tag = "Venues",
    params(
        ("id" = i64, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue deleted", body = crate::models::DeletedResponse),
        (status = 404, description = "Venue not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_venue(
    directory_service: web::Data<DirectoryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let response = directory_service.delete_venue(id).await?;
    info!("Venue {} was successfully deleted", id);
    Ok(HttpResponse::Ok().json(response))
}
