//! Reviews service.

use async_trait::async_trait;
use futures::TryStreamExt as _;
use mockall::automock;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use serde_json::Value;

use crate::{
    database::REVIEWS_COLLECTION,
    documents::{InsertAck, document_from_json},
    domain::reviews::errors::ReviewsServiceError,
};

#[derive(Debug, Clone)]
pub struct MongoReviewsService {
    collection: Collection<Document>,
}

impl MongoReviewsService {
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(REVIEWS_COLLECTION),
        }
    }
}

#[async_trait]
impl ReviewsService for MongoReviewsService {
    async fn list_reviews(&self) -> Result<Vec<Document>, ReviewsServiceError> {
        let reviews = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(reviews)
    }

    async fn create_review(&self, review: Value) -> Result<InsertAck, ReviewsServiceError> {
        let review = document_from_json(review).map_err(ReviewsServiceError::InvalidDocument)?;

        Ok(self.collection.insert_one(review).await?.into())
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Retrieves every review.
    async fn list_reviews(&self) -> Result<Vec<Document>, ReviewsServiceError>;

    async fn create_review(&self, review: Value) -> Result<InsertAck, ReviewsServiceError>;
}
