//! Trivia handlers: categories, paged questions, search and quizzes.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::errors::ApiError;
use crate::models::{CreateQuestionRequest, QuizRequest, SearchQuestionsRequest};
use crate::pagination::PageQuery;
use crate::services::TriviaService;
use crate::validators::validate_body;

/// List all categories
#[utoipa::path(
    get,
    path = "/api/trivia/categories",
    tag = "Trivia",
    responses(
        (status = 200, description = "Category id to name map", body = crate::models::CategoriesResponse),
        (status = 404, description = "No categories", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_categories(
    trivia_service: web::Data<TriviaService>,
) -> Result<HttpResponse, ApiError> {
    let response = trivia_service.categories().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/api/trivia/questions",
    tag = "Trivia",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = crate::models::QuestionsPageResponse),
        (status = 404, description = "Page is empty", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_questions(
    trivia_service: web::Data<TriviaService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let response = trivia_service.questions_page(query.page_request()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/api/trivia/questions/{id}",
    tag = "Trivia",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = crate::models::QuestionDeletedResponse),
        (status = 422, description = "Question could not be deleted", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_question(
    trivia_service: web::Data<TriviaService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    debug!("Deleting question {}", id);
    let response = trivia_service.delete_question(id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/api/trivia/questions",
    tag = "Trivia",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = crate::models::QuestionCreatedResponse),
        (status = 400, description = "Malformed JSON", body = crate::models::ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_question(
    trivia_service: web::Data<TriviaService>,
    body: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_body(&*body, "create question")?;
    let response = trivia_service.create_question(body.into_inner()).await?;
    info!("Question {} created", response.created);
    Ok(HttpResponse::Ok().json(response))
}

/// Search questions by text
#[utoipa::path(
    post,
    path = "/api/trivia/questions/search",
    tag = "Trivia",
    params(PageQuery),
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "One page of matching questions", body = crate::models::SearchQuestionsResponse),
        (status = 404, description = "No matches on this page", body = crate::models::ErrorResponse)
    )
)]
pub async fn search_questions(
    trivia_service: web::Data<TriviaService>,
    query: web::Query<PageQuery>,
    body: web::Json<SearchQuestionsRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = trivia_service
        .search_questions(&body.search_term, query.page_request())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/api/trivia/categories/{id}/questions",
    tag = "Trivia",
    params(
        ("id" = i64, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = crate::models::CategoryQuestionsResponse),
        (status = 404, description = "Unknown category or empty page", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_category_questions(
    trivia_service: web::Data<TriviaService>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let response = trivia_service
        .category_questions(path.into_inner(), query.page_request())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Get the next quiz question
#[utoipa::path(
    post,
    path = "/api/trivia/quizzes",
    tag = "Trivia",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or no question once the quiz is over", body = crate::models::QuizResponse),
        (status = 400, description = "quiz_category missing", body = crate::models::ErrorResponse)
    )
)]
pub async fn play_quiz(
    trivia_service: web::Data<TriviaService>,
    body: web::Json<QuizRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = trivia_service.next_quiz_question(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
