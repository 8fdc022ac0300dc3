use actix_web::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpRequest, HttpResponse, Resource};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{
    CODE_INVALID_JSON, CODE_INVALID_QUERY, CODE_METHOD_NOT_ALLOWED, CODE_NOT_FOUND,
    MSG_SERVER_RUNNING, MSG_STATUS_OK,
};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::Services;

const CORS_ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
const CORS_ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// Response headers added to every reply so browser frontends on another
/// origin can call the API.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS))
        .add((ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS))
}

/// A resource that answers unsupported methods with a JSON 405.
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(unsupported_method))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, services: &Services, auth: &AuthMiddleware) {
    cfg.app_data(web::Data::from(services.trivia.clone()))
        .app_data(web::Data::from(services.drinks.clone()))
        .app_data(web::Data::from(services.directory.clone()))
        .app_data(web::JsonConfig::default().error_handler(|err, req| {
            warn!("Invalid JSON body on {}: {}", req.path(), err);
            ApiError::bad_request(CODE_INVALID_JSON).into()
        }))
        .app_data(web::QueryConfig::default().error_handler(|err, req| {
            warn!("Invalid query string on {}: {}", req.path(), err);
            ApiError::bad_request(CODE_INVALID_QUERY).into()
        }))
        // Ids that are not integers cannot name any record.
        .app_data(web::PathConfig::default().error_handler(|err, req| {
            warn!("Invalid path parameter on {}: {}", req.path(), err);
            ApiError::not_found(CODE_NOT_FOUND).into()
        }))
        .service(
            web::scope("/api")
                // Health check
                .service(resource("/health").route(web::get().to(health_check)))
                .service(resource("/openapi.json").route(web::get().to(openapi_json)))
                // Trivia routes (public)
                .service(
                    web::scope("/trivia")
                        .service(
                            resource("/categories").route(web::get().to(handlers::get_categories)),
                        )
                        .service(
                            resource("/categories/{id}/questions")
                                .route(web::get().to(handlers::get_category_questions)),
                        )
                        .service(
                            resource("/questions")
                                .route(web::get().to(handlers::get_questions))
                                .route(web::post().to(handlers::create_question)),
                        )
                        // Must be registered before /questions/{id}
                        .service(
                            resource("/questions/search")
                                .route(web::post().to(handlers::search_questions)),
                        )
                        .service(
                            resource("/questions/{id}")
                                .route(web::delete().to(handlers::delete_question)),
                        )
                        .service(resource("/quizzes").route(web::post().to(handlers::play_quiz))),
                )
                // Coffee shop routes (bearer token, checked per handler)
                .service(
                    web::scope("/coffee")
                        .wrap(auth.clone())
                        .service(
                            resource("/drinks")
                                .route(web::get().to(handlers::get_drinks))
                                .route(web::post().to(handlers::create_drink)),
                        )
                        .service(
                            resource("/drinks-detail")
                                .route(web::get().to(handlers::get_drinks_detail)),
                        )
                        .service(
                            resource("/drinks/{id}")
                                .route(web::patch().to(handlers::update_drink))
                                .route(web::delete().to(handlers::delete_drink)),
                        ),
                )
                // Booking directory routes (public)
                .service(
                    web::scope("/fyyur")
                        .service(
                            resource("/venues")
                                .route(web::get().to(handlers::get_venues))
                                .route(web::post().to(handlers::create_venue)),
                        )
                        .service(
                            resource("/venues/search")
                                .route(web::post().to(handlers::search_venues)),
                        )
                        .service(
                            resource("/venues/{id}")
                                .route(web::get().to(handlers::get_venue))
                                .route(web::patch().to(handlers::update_venue))
                                .route(web::delete().to(handlers::delete_venue)),
                        )
                        .service(
                            resource("/artists")
                                .route(web::get().to(handlers::get_artists))
                                .route(web::post().to(handlers::create_artist)),
                        )
                        .service(
                            resource("/artists/search")
                                .route(web::post().to(handlers::search_artists)),
                        )
                        .service(
                            resource("/artists/{id}")
                                .route(web::get().to(handlers::get_artist))
                                .route(web::patch().to(handlers::update_artist)),
                        )
                        .service(
                            resource("/shows")
                                .route(web::get().to(handlers::get_shows))
                                .route(web::post().to(handlers::create_show)),
                        ),
                ),
        )
        .default_service(web::to(not_found));
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_STATUS_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Preflight requests succeed on every known path; other unsupported
/// methods are rejected.
async fn unsupported_method(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if *req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    warn!("Method {} not allowed on {}", req.method(), req.path());
    Err(ApiError::method_not_allowed(CODE_METHOD_NOT_ALLOWED))
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    warn!("No route for {} {}", req.method(), req.path());
    Err(ApiError::not_found(CODE_NOT_FOUND))
}
