//! Products service.

use async_trait::async_trait;
use futures::TryStreamExt as _;
use mockall::automock;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use serde_json::Value;

use crate::{
    database::PRODUCTS_COLLECTION,
    documents::{InsertAck, document_from_json, parse_object_id},
    domain::products::errors::ProductsServiceError,
};

#[derive(Debug, Clone)]
pub struct MongoProductsService {
    collection: Collection<Document>,
}

impl MongoProductsService {
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(PRODUCTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ProductsService for MongoProductsService {
    async fn list_products(&self) -> Result<Vec<Document>, ProductsServiceError> {
        let products = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(products)
    }

    async fn get_product(&self, id: &str) -> Result<Document, ProductsServiceError> {
        let id = parse_object_id(id).map_err(ProductsServiceError::InvalidId)?;

        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, product: Value) -> Result<InsertAck, ProductsServiceError> {
        let product = document_from_json(product).map_err(ProductsServiceError::InvalidDocument)?;

        Ok(self.collection.insert_one(product).await?.into())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Document>, ProductsServiceError>;

    /// Retrieve a single product by its hex `ObjectId`.
    async fn get_product(&self, id: &str) -> Result<Document, ProductsServiceError>;

    /// Stores a product document as given.
    async fn create_product(&self, product: Value) -> Result<InsertAck, ProductsServiceError>;
}
