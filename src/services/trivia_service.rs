//! Trivia service: paged question listings, search, edits and quiz play.

use std::sync::Arc;

use log::{debug, error, info, warn};
use rand::seq::SliceRandom;

use crate::constants::{
    CODE_CATEGORY_NOT_FOUND, CODE_NO_CATEGORIES, CODE_PAGE_EMPTY, CODE_QUESTION_NOT_FOUND,
    CODE_QUIZ_CATEGORY_REQUIRED, CODE_UNPROCESSABLE, CODE_VALIDATION_FAILED,
};
use crate::errors::ApiError;
use crate::models::{
    category_map, CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest, PageInfo,
    Question, QuestionCreatedResponse, QuestionDeletedResponse, QuestionsPageResponse,
    QuizRequest, QuizResponse, SearchQuestionsResponse,
};
use crate::pagination::{paginate, PageRequest};
use crate::repositories::{RepositoryError, TriviaRepository};
use crate::utils::truncate_term;

/// A write that the store refused is reported as unprocessable, not as a
/// server fault.
fn failed_mutation(action: &str, err: RepositoryError) -> ApiError {
    error!("Failed to {}: {}", action, err);
    ApiError::unprocessable(CODE_UNPROCESSABLE)
}

/// Cut one page out of `questions`, failing with 404 when it is empty.
fn page_of(questions: &[Question], page: PageRequest) -> Result<Vec<Question>, ApiError> {
    let current = paginate(questions, page);
    if current.is_empty() {
        warn!(
            "Page {} is empty ({} questions in total)",
            page.page(),
            questions.len()
        );
        return Err(ApiError::not_found(CODE_PAGE_EMPTY));
    }
    Ok(current.to_vec())
}

pub struct TriviaService {
    repository: Arc<dyn TriviaRepository>,
}

impl TriviaService {
    pub fn new(repository: Arc<dyn TriviaRepository>) -> Self {
        Self { repository }
    }

    pub async fn categories(&self) -> Result<CategoriesResponse, ApiError> {
        let categories = self.repository.categories().await?;
        if categories.is_empty() {
            warn!("No trivia categories configured");
            return Err(ApiError::not_found(CODE_NO_CATEGORIES));
        }

        Ok(CategoriesResponse {
            success: true,
            total_categories: categories.len() as u64,
            categories: category_map(&categories),
        })
    }

    pub async fn questions_page(&self, page: PageRequest) -> Result<QuestionsPageResponse, ApiError> {
        debug!("Listing questions, page {}", page.page());
        let questions = self.repository.questions().await?;
        let current = page_of(&questions, page)?;
        let categories = self.repository.categories().await?;
        let total = questions.len() as u64;

        Ok(QuestionsPageResponse {
            success: true,
            questions: current,
            total_questions: total,
            categories: category_map(&categories),
            current_category: None,
            page_info: PageInfo::new(page, total),
        })
    }

    pub async fn delete_question(&self, id: i64) -> Result<QuestionDeletedResponse, ApiError> {
        let deleted = self
            .repository
            .delete_question(id)
            .await
            .map_err(|e| failed_mutation("delete question", e))?;
        if !deleted {
            warn!("Delete failed: question {} does not exist", id);
            return Err(ApiError::unprocessable(CODE_QUESTION_NOT_FOUND));
        }

        info!("Deleted question {}", id);
        Ok(QuestionDeletedResponse {
            success: true,
            deleted: id,
            total_questions: self.repository.count_questions().await?,
        })
    }

    /// Store a validated question under an existing category.
    pub async fn create_question(
        &self,
        req: CreateQuestionRequest,
    ) -> Result<QuestionCreatedResponse, ApiError> {
        let (Some(question), Some(answer), Some(category), Some(difficulty)) =
            (req.question, req.answer, req.category, req.difficulty)
        else {
            return Err(ApiError::unprocessable(CODE_VALIDATION_FAILED));
        };
        let difficulty = i32::try_from(difficulty)
            .map_err(|_| ApiError::unprocessable(CODE_VALIDATION_FAILED))?;

        if self.repository.find_category(category).await?.is_none() {
            warn!("Create question failed: category {} does not exist", category);
            return Err(ApiError::unprocessable(CODE_CATEGORY_NOT_FOUND));
        }

        let created = self
            .repository
            .insert_question(Question {
                id: 0,
                question,
                answer,
                category,
                difficulty,
            })
            .await
            .map_err(|e| failed_mutation("create question", e))?;

        info!("Created question {} in category {}", created.id, category);
        Ok(QuestionCreatedResponse {
            success: true,
            created: created.id,
            total_questions: self.repository.count_questions().await?,
        })
    }

    pub async fn search_questions(
        &self,
        term: &str,
        page: PageRequest,
    ) -> Result<SearchQuestionsResponse, ApiError> {
        debug!(
            "Searching questions for {:?}, page {}",
            truncate_term(term),
            page.page()
        );
        let matches = self.repository.search_questions(term).await?;
        let current = page_of(&matches, page)?;
        let total = matches.len() as u64;

        Ok(SearchQuestionsResponse {
            success: true,
            questions: current,
            total_questions: total,
            page_info: PageInfo::new(page, total),
        })
    }

    pub async fn category_questions(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<CategoryQuestionsResponse, ApiError> {
        let category = self
            .repository
            .find_category(category_id)
            .await?
            .ok_or_else(|| {
                warn!("Category {} not found", category_id);
                ApiError::not_found(CODE_CATEGORY_NOT_FOUND)
            })?;

        let questions = self.repository.questions_in_category(category_id).await?;
        let current = page_of(&questions, page)?;
        let total = questions.len() as u64;

        Ok(CategoryQuestionsResponse {
            success: true,
            questions: current,
            total_questions: total,
            current_category: category.kind,
            page_info: PageInfo::new(page, total),
        })
    }

    /// Pick a random question that has not been asked yet in this quiz.
    pub async fn next_quiz_question(&self, req: QuizRequest) -> Result<QuizResponse, ApiError> {
        let category = req.quiz_category.ok_or_else(|| {
            warn!("Quiz request without quiz_category");
            ApiError::bad_request(CODE_QUIZ_CATEGORY_REQUIRED)
        })?;

        let candidates = self
            .repository
            .quiz_candidates(&req.previous_questions, category.filter())
            .await?;
        debug!(
            "Quiz in category {} ({}): {} questions left",
            category.id,
            category.kind.as_deref().unwrap_or("all"),
            candidates.len()
        );

        Ok(QuizResponse {
            success: true,
            question: candidates.choose(&mut rand::thread_rng()).cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizCategory;
    use crate::repositories::InMemoryTriviaRepository;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    async fn service_with(questions: &[(&str, i64)]) -> TriviaService {
        let repo = InMemoryTriviaRepository::with_categories(&["Science", "Art", "History"]);
        for (text, category) in questions {
            repo.insert_question(Question {
                id: 0,
                question: text.to_string(),
                answer: "answer".to_string(),
                category: *category,
                difficulty: 2,
            })
            .await
            .unwrap();
        }
        TriviaService::new(Arc::new(repo))
    }

    fn create_request(category: i64) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: Some("Who painted the Mona Lisa?".to_string()),
            answer: Some("Leonardo da Vinci".to_string()),
            category: Some(category),
            difficulty: Some(3),
        }
    }

    #[tokio::test]
    async fn test_questions_page_and_empty_page() {
        let texts: Vec<String> = (0..12).map(|i| format!("question {i}")).collect();
        let pairs: Vec<(&str, i64)> = texts.iter().map(|t| (t.as_str(), 1)).collect();
        let service = service_with(&pairs).await;

        let second = service.questions_page(PageRequest::new(2)).await.unwrap();
        assert_eq!(second.questions.len(), 2);
        assert_eq!(second.total_questions, 12);
        assert_eq!(second.page_info.total_pages, 2);

        let err = service.questions_page(PageRequest::new(3)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_requires_existing_category() {
        let service = service_with(&[]).await;
        let err = service.create_question(create_request(99)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let created = service.create_question(create_request(2)).await.unwrap();
        assert_eq!(created.created, 1);
        assert_eq!(created.total_questions, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_question_is_unprocessable() {
        let service = service_with(&[("a", 1)]).await;
        let err = service.delete_question(42).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let deleted = service.delete_question(1).await.unwrap();
        assert_eq!(deleted.deleted, 1);
        assert_eq!(deleted.total_questions, 0);
    }

    #[tokio::test]
    async fn test_category_questions() {
        let service = service_with(&[("a", 1), ("b", 2), ("c", 2)]).await;
        let art = service
            .category_questions(2, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(art.current_category, "Art");
        assert_eq!(art.total_questions, 2);

        let unknown = service
            .category_questions(7, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);

        let empty = service
            .category_questions(3, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(empty.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quiz_walks_every_question_once() {
        let service = service_with(&[("a", 1), ("b", 2), ("c", 1)]).await;
        let mut asked = Vec::new();
        loop {
            let response = service
                .next_quiz_question(QuizRequest {
                    previous_questions: asked.clone(),
                    quiz_category: Some(QuizCategory { id: 1, kind: None }),
                })
                .await
                .unwrap();
            match response.question {
                Some(q) => {
                    assert_eq!(q.category, 1);
                    assert!(!asked.contains(&q.id));
                    asked.push(q.id);
                }
                None => break,
            }
        }
        asked.sort();
        assert_eq!(asked, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_quiz_without_category_is_bad_request() {
        let service = service_with(&[("a", 1)]).await;
        let err = service
            .next_quiz_question(QuizRequest {
                previous_questions: vec![],
                quiz_category: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
