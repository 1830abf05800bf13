//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{FirebaseConfig, FirebaseIdentityVerifier, IdentityVerifier},
    database,
    domain::{
        orders::{MongoOrdersService, OrdersService},
        products::{MongoProductsService, ProductsService},
        reviews::{MongoReviewsService, ReviewsService},
        users::{MongoUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] mongodb::error::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
    pub identity: Arc<dyn IdentityVerifier>,
}

impl AppContext {
    /// Build application context from a MongoDB connection string.
    ///
    /// # Errors
    ///
    /// Returns an error when the deployment cannot be reached.
    pub async fn connect(
        uri: &str,
        database_name: &str,
        firebase: FirebaseConfig,
    ) -> Result<Self, AppInitError> {
        let db = database::connect(uri, database_name)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            products: Arc::new(MongoProductsService::new(&db)),
            reviews: Arc::new(MongoReviewsService::new(&db)),
            orders: Arc::new(MongoOrdersService::new(&db)),
            users: Arc::new(MongoUsersService::new(&db)),
            identity: Arc::new(FirebaseIdentityVerifier::new(firebase)),
        })
    }
}
