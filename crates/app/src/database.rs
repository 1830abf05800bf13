//! Database connection management

use mongodb::{Client, Database, bson::doc};

/// Database used when none is configured.
pub const DEFAULT_DATABASE_NAME: &str = "BikersHub";

/// Collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Collection holding review documents.
pub const REVIEWS_COLLECTION: &str = "reviews";

/// Collection holding order documents.
pub const ORDERS_COLLECTION: &str = "order";

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Build a MongoDB Atlas SRV connection string from discrete credentials.
#[must_use]
pub fn atlas_uri(user: &str, password: &str, cluster_host: &str) -> String {
    format!("mongodb+srv://{user}:{password}@{cluster_host}/?retryWrites=true&w=majority")
}

/// Connect to MongoDB and select the application database.
///
/// The driver connects lazily, so a `ping` is issued to surface bad
/// credentials or an unreachable cluster at startup.
///
/// # Errors
///
/// Returns an error if the URI is invalid or the server does not answer the ping.
pub async fn connect(uri: &str, database_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database(database_name);

    database.run_command(doc! { "ping": 1 }).await?;

    Ok(database)
}
