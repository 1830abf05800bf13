//! Orders service.

use async_trait::async_trait;
use futures::TryStreamExt as _;
use mockall::automock;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
};
use serde_json::Value;

use crate::{
    database::ORDERS_COLLECTION,
    documents::{DeleteAck, InsertAck, document_from_json, parse_object_id},
    domain::orders::errors::OrdersServiceError,
};

#[derive(Debug, Clone)]
pub struct MongoOrdersService {
    collection: Collection<Document>,
}

impl MongoOrdersService {
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ORDERS_COLLECTION),
        }
    }
}

/// Build the filter used to look up orders by their `email` field.
///
/// An absent email matches orders whose `email` is null or missing.
#[must_use]
pub fn email_filter(email: Option<String>) -> Document {
    let email = email.map_or(Bson::Null, Bson::String);

    doc! { "email": email }
}

#[async_trait]
impl OrdersService for MongoOrdersService {
    async fn list_orders(&self) -> Result<Vec<Document>, OrdersServiceError> {
        let orders = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(orders)
    }

    async fn find_orders_by_email(
        &self,
        email: Option<String>,
    ) -> Result<Vec<Document>, OrdersServiceError> {
        let orders = self
            .collection
            .find(email_filter(email))
            .await?
            .try_collect()
            .await?;

        Ok(orders)
    }

    async fn create_order(&self, order: Value) -> Result<InsertAck, OrdersServiceError> {
        let order = document_from_json(order).map_err(OrdersServiceError::InvalidDocument)?;

        Ok(self.collection.insert_one(order).await?.into())
    }

    async fn delete_order(&self, id: &str) -> Result<DeleteAck, OrdersServiceError> {
        let id = parse_object_id(id).map_err(OrdersServiceError::InvalidId)?;

        Ok(self.collection.delete_one(doc! { "_id": id }).await?.into())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves every order regardless of who placed it.
    async fn list_orders(&self) -> Result<Vec<Document>, OrdersServiceError>;

    /// Retrieves the orders whose `email` field equals `email`.
    async fn find_orders_by_email(
        &self,
        email: Option<String>,
    ) -> Result<Vec<Document>, OrdersServiceError>;

    /// Stores an order document as given.
    async fn create_order(&self, order: Value) -> Result<InsertAck, OrdersServiceError>;

    /// Delete the order with the given hex `ObjectId`. Deleting an order that
    /// does not exist is not an error; the acknowledgment reports zero.
    async fn delete_order(&self, id: &str) -> Result<DeleteAck, OrdersServiceError>;
}
