//! Trivia repository for categories and questions.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database, IndexModel};
use tokio::sync::RwLock;

use crate::constants::{COLLECTION_CATEGORIES, COLLECTION_QUESTIONS};
use crate::models::{Category, Question};

use super::{contains_ignore_case, contains_regex, sequence, RepositoryError};

/// Storage of trivia categories and questions.
///
/// Every listing is ordered by id; the `id` of a record passed to an insert
/// method is ignored and replaced by a freshly allocated one.
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, RepositoryError>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>, RepositoryError>;

    async fn insert_category(&self, kind: &str) -> Result<Category, RepositoryError>;

    async fn questions(&self) -> Result<Vec<Question>, RepositoryError>;

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, RepositoryError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Questions not listed in `exclude`, optionally limited to one category.
    async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, RepositoryError>;

    async fn count_questions(&self) -> Result<u64, RepositoryError>;

    async fn insert_question(&self, question: Question) -> Result<Question, RepositoryError>;

    /// Returns `false` when no question has this id.
    async fn delete_question(&self, id: i64) -> Result<bool, RepositoryError>;
}

/// MongoDB-backed trivia storage.
pub struct MongoTriviaRepository {
    db: Database,
    categories: Collection<Category>,
    questions: Collection<Question>,
}

impl MongoTriviaRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            categories: db.collection(COLLECTION_CATEGORIES),
            questions: db.collection(COLLECTION_QUESTIONS),
        }
    }

    /// Create the unique id indexes and the category lookup index.
    pub async fn create_indexes(&self) -> Result<(), RepositoryError> {
        info!("Creating database indexes for trivia collections...");
        let unique_id = || {
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build()
        };

        self.categories.create_index(unique_id()).await?;
        self.questions
            .create_indexes(vec![
                unique_id(),
                IndexModel::builder().keys(doc! { "category": 1 }).build(),
            ])
            .await?;
        Ok(())
    }

    async fn find_questions(&self, filter: Document) -> Result<Vec<Question>, RepositoryError> {
        debug!("Repository: Finding questions with filter: {:?}", filter);
        let cursor = self.questions.find(filter).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl TriviaRepository for MongoTriviaRepository {
    async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let cursor = self.categories.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, RepositoryError> {
        debug!("Repository: Finding category by ID: {}", id);
        Ok(self.categories.find_one(doc! { "id": id }).await?)
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, RepositoryError> {
        let category = Category {
            id: sequence::next_id(&self.db, COLLECTION_CATEGORIES).await?,
            kind: kind.to_string(),
        };
        self.categories.insert_one(&category).await?;
        Ok(category)
    }

    async fn questions(&self) -> Result<Vec<Question>, RepositoryError> {
        self.find_questions(doc! {}).await
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, RepositoryError> {
        self.find_questions(doc! { "category": category }).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        self.find_questions(doc! { "question": { "$regex": contains_regex(term) } })
            .await
    }

    async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, RepositoryError> {
        let mut filter = doc! { "id": { "$nin": exclude.to_vec() } };
        if let Some(category) = category {
            filter.insert("category", category);
        }
        self.find_questions(filter).await
    }

    async fn count_questions(&self) -> Result<u64, RepositoryError> {
        Ok(self.questions.count_documents(doc! {}).await?)
    }

    async fn insert_question(&self, question: Question) -> Result<Question, RepositoryError> {
        let question = Question {
            id: sequence::next_id(&self.db, COLLECTION_QUESTIONS).await?,
            ..question
        };
        self.questions.insert_one(&question).await?;
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = self.questions.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count == 1)
    }
}

#[derive(Default)]
struct TriviaState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_category_id: i64,
    last_question_id: i64,
}

/// Trivia storage kept in process memory.
#[derive(Default)]
pub struct InMemoryTriviaRepository {
    state: RwLock<TriviaState>,
}

impl InMemoryTriviaRepository {
    /// Start with the given categories, numbered from 1 in order.
    pub fn with_categories(kinds: &[&str]) -> Self {
        let categories: Vec<Category> = kinds
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id,
                kind: kind.to_string(),
            })
            .collect();
        let last_category_id = categories.len() as i64;
        Self {
            state: RwLock::new(TriviaState {
                categories,
                last_category_id,
                ..TriviaState::default()
            }),
        }
    }
}

#[async_trait]
impl TriviaRepository for InMemoryTriviaRepository {
    async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.state.read().await.categories.clone())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_category_id += 1;
        let category = Category {
            id: state.last_category_id,
            kind: kind.to_string(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn questions(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.state.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .iter()
            .filter(|q| contains_ignore_case(&q.question, term))
            .cloned()
            .collect())
    }

    async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .iter()
            .filter(|q| !exclude.contains(&q.id))
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect())
    }

    async fn count_questions(&self) -> Result<u64, RepositoryError> {
        Ok(self.state.read().await.questions.len() as u64)
    }

    async fn insert_question(&self, question: Question) -> Result<Question, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let question = Question {
            id: state.last_question_id,
            ..question
        };
        // Ids only grow, so pushing keeps the list ordered by id.
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        Ok(state.questions.len() != before)
    }
}
