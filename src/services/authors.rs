//! Author management service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{utc_now, Author, AuthorBooks, CreateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Author> {
        self.repository.authors_list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Author> {
        self.repository.authors_get_by_id(id).await
    }

    pub async fn create(&self, data: CreateAuthor) -> AppResult<Author> {
        let fields = data.validate()?;
        let author = self
            .repository
            .authors_create(Author::new(Uuid::new_v4().to_string(), fields, utc_now()))
            .await;
        tracing::info!("Created author {} ({})", author.id, author.name);
        Ok(author)
    }

    /// Full replacement; a body error in `payload` surfaces only after the author is found
    pub async fn replace(&self, id: &str, payload: AppResult<CreateAuthor>) -> AppResult<Author> {
        let author = self
            .repository
            .authors_update(id, |existing| {
                Ok(existing.replaced(payload?.validate()?, utc_now()))
            })
            .await?;
        tracing::info!("Replaced author {}", author.id);
        Ok(author)
    }

    /// Books keep their `author_id` after the author is gone
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.authors_delete(id).await?;
        tracing::info!("Deleted author {}", id);
        Ok(())
    }

    pub async fn books(&self, id: &str) -> AppResult<AuthorBooks> {
        self.repository.authors_get_with_books(id).await
    }
}
