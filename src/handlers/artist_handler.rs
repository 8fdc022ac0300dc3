//! Artist handlers of the booking directory.

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::errors::ApiError;
use crate::models::{CreateArtistRequest, DirectorySearchRequest, UpdateArtistRequest};
use crate::pagination::PageQuery;
use crate::services::DirectoryService;
use crate::validators::validate_body;

/// List artists by id and name
#[utoipa::path(
    get,
    path = "/api/fyyur/artists",
    tag = "Artists",
    responses(
        (status = 200, description = "All artists, possibly none", body = crate::models::ArtistsResponse)
    )
)]
pub async fn get_artists(
    directory_service: web::Data<DirectoryService>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service.artists().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Show an artist with past and upcoming shows
#[utoipa::path(
    get,
    path = "/api/fyyur/artists/{id}",
    tag = "Artists",
    params(
        ("id" = i64, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist details", body = crate::models::ArtistDetailResponse),
        (status = 404, description = "Artist not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_artist(
    directory_service: web::Data<DirectoryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service
        .artist_detail(path.into_inner(), Utc::now())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Search artists by name
#[utoipa::path(
    post,
    path = "/api/fyyur/artists/search",
    tag = "Artists",
    params(PageQuery),
    request_body = DirectorySearchRequest,
    responses(
        (status = 200, description = "Matching artists", body = crate::models::DirectorySearchResponse)
    )
)]
pub async fn search_artists(
    directory_service: web::Data<DirectoryService>,
    query: web::Query<PageQuery>,
    body: web::Json<DirectorySearchRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = directory_service
        .search_artists(&body.search_term, query.page_request(), Utc::now())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// List a new artist
#[utoipa::path(
    post,
    path = "/api/fyyur/artists",
    tag = "Artists",
    request_body = CreateArtistRequest,
    responses(
        (status = 200, description = "Artist created", body = crate::models::ArtistResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_artist(
    directory_service: web::Data<DirectoryService>,
    body: web::Json<CreateArtistRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_body(&*body, "create artist")?;
    let response = directory_service.create_artist(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Edit an artist
#[utoipa::path(
    patch,
    path = "/api/fyyur/artists/{id}",
    tag = "Artists",
    params(
        ("id" = i64, Path, description = "Artist ID")
    ),
    request_body = UpdateArtistRequest,
    responses(
        (status = 200, description = "Artist updated", body = crate::models::ArtistResponse),
        (status = 404, description = "Artist not found", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_artist(
    directory_service: web::Data<DirectoryService>,
    path: web::Path<i64>,
    body: web::Json<UpdateArtistRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_body(&*body, "update artist")?;
    let response = directory_service
        .update_artist(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
