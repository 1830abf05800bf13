//! Users service.

use async_trait::async_trait;
use futures::TryStreamExt as _;
use mockall::automock;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use serde_json::Value;
use tracing::{Span, info};

use crate::{
    database::USERS_COLLECTION,
    documents::{InsertAck, UpdateAck, document_from_json},
    domain::users::errors::UsersServiceError,
};

/// Role value that grants the right to promote other users.
pub const ADMIN_ROLE: &str = "admin";

/// Outcome of a request to promote a user to admin.
#[derive(Debug, Clone, PartialEq)]
pub enum Promotion {
    /// The requester is an admin and the target was updated.
    Promoted(UpdateAck),

    /// The requester exists but is not an admin.
    Forbidden,

    /// No user matches the requester's email.
    RequesterNotFound,
}

#[derive(Debug, Clone)]
pub struct MongoUsersService {
    collection: Collection<Document>,
}

impl MongoUsersService {
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Document>, UsersServiceError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }
}

/// Whether a looked up user document carries the admin role.
#[must_use]
pub fn is_admin_document(user: Option<&Document>) -> bool {
    user.and_then(|user| user.get_str("role").ok()) == Some(ADMIN_ROLE)
}

#[async_trait]
impl UsersService for MongoUsersService {
    async fn list_users(&self) -> Result<Vec<Document>, UsersServiceError> {
        let users = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(users)
    }

    async fn is_admin(&self, email: &str) -> Result<bool, UsersServiceError> {
        let user = self.find_by_email(email).await?;

        Ok(is_admin_document(user.as_ref()))
    }

    async fn create_user(&self, user: Value) -> Result<InsertAck, UsersServiceError> {
        let user = document_from_json(user).map_err(UsersServiceError::InvalidDocument)?;

        Ok(self.collection.insert_one(user).await?.into())
    }

    #[tracing::instrument(
        name = "users.service.upsert_user",
        skip(self, user),
        fields(upserted = tracing::field::Empty),
        err
    )]
    async fn upsert_user(&self, user: Value) -> Result<UpdateAck, UsersServiceError> {
        let user = document_from_json(user).map_err(UsersServiceError::InvalidDocument)?;

        let Ok(email) = user.get_str("email").map(ToString::to_string) else {
            return Err(UsersServiceError::MissingEmail);
        };

        let result = self
            .collection
            .replace_one(doc! { "email": email }, user)
            .upsert(true)
            .await?;

        Span::current().record(
            "upserted",
            tracing::field::display(result.upserted_id.is_some()),
        );

        Ok(result.into())
    }

    async fn grant_admin(&self, email: &str) -> Result<UpdateAck, UsersServiceError> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "role": ADMIN_ROLE } },
            )
            .await?;

        Ok(result.into())
    }

    #[tracing::instrument(
        name = "users.service.promote_to_admin",
        skip_all,
        fields(requester = %requester, target = %target),
        err
    )]
    async fn promote_to_admin(
        &self,
        requester: &str,
        target: &str,
    ) -> Result<Promotion, UsersServiceError> {
        let Some(requester) = self.find_by_email(requester).await? else {
            return Ok(Promotion::RequesterNotFound);
        };

        if !is_admin_document(Some(&requester)) {
            return Ok(Promotion::Forbidden);
        }

        let ack = self.grant_admin(target).await?;

        info!(matched = ack.matched_count, "granted admin role");

        Ok(Promotion::Promoted(ack))
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves every user.
    async fn list_users(&self) -> Result<Vec<Document>, UsersServiceError>;

    /// Whether a user with `email` exists and has the admin role.
    async fn is_admin(&self, email: &str) -> Result<bool, UsersServiceError>;

    /// Insert a user document as given, without checking for an existing
    /// user with the same email.
    async fn create_user(&self, user: Value) -> Result<InsertAck, UsersServiceError>;

    /// Replace the user matching the body's `email`, inserting it when absent.
    async fn upsert_user(&self, user: Value) -> Result<UpdateAck, UsersServiceError>;

    /// Set the admin role on the user matching `email`, unconditionally.
    async fn grant_admin(&self, email: &str) -> Result<UpdateAck, UsersServiceError>;

    /// Grant the admin role to `target` when `requester` is an admin.
    async fn promote_to_admin(
        &self,
        requester: &str,
        target: &str,
    ) -> Result<Promotion, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[test]
    fn admin_role_is_admin() {
        assert!(is_admin_document(Some(&doc! { "email": "a@x.com", "role": "admin" })));
    }

    #[test]
    fn other_roles_are_not_admin() {
        assert!(!is_admin_document(Some(&doc! { "role": "rider" })));
        assert!(!is_admin_document(Some(&doc! { "role": "Admin" })));
        assert!(!is_admin_document(Some(&doc! { "role": true })));
    }

    #[test]
    fn missing_role_is_not_admin() {
        assert!(!is_admin_document(Some(&doc! { "email": "a@x.com" })));
    }

    #[test]
    fn unknown_user_is_not_admin() {
        assert!(!is_admin_document(None));
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the MongoDB test container"]
    async fn upserting_same_user_twice_keeps_one_document() -> TestResult {
        let ctx = TestContext::new().await;

        let body = json!({ "email": "rider@example.com", "displayName": "Rider" });

        let first = ctx.users.upsert_user(body.clone()).await?;
        let second = ctx.users.upsert_user(body).await?;

        assert_eq!(first.upserted_count, 1, "first upsert should insert");
        assert_eq!(second.upserted_count, 0, "second upsert should replace");
        assert_eq!(second.matched_count, 1);

        let count = ctx
            .db
            .database
            .collection::<Document>(USERS_COLLECTION)
            .count_documents(doc! { "email": "rider@example.com" })
            .await?;

        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the MongoDB test container"]
    async fn upsert_replaces_whole_document() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users
            .upsert_user(json!({ "email": "rider@example.com", "phone": "017" }))
            .await?;
        ctx.users
            .upsert_user(json!({ "email": "rider@example.com", "displayName": "Rider" }))
            .await?;

        let users = ctx.users.list_users().await?;

        assert_eq!(users.len(), 1);
        assert!(users[0].get("phone").is_none(), "replace should drop old fields");
        assert_eq!(users[0].get_str("displayName")?, "Rider");

        Ok(())
    }

    #[tokio::test]
    async fn upsert_without_email_is_rejected() {
        let ctx = TestContext::unreachable().await;

        let result = ctx.users.upsert_user(json!({ "displayName": "Nobody" })).await;

        assert!(
            matches!(result, Err(UsersServiceError::MissingEmail)),
            "expected MissingEmail, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the MongoDB test container"]
    async fn is_admin_reflects_stored_role() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users
            .create_user(json!({ "email": "boss@example.com", "role": "admin" }))
            .await?;
        ctx.users
            .create_user(json!({ "email": "rider@example.com" }))
            .await?;

        assert!(ctx.users.is_admin("boss@example.com").await?);
        assert!(!ctx.users.is_admin("rider@example.com").await?);
        assert!(!ctx.users.is_admin("ghost@example.com").await?);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the MongoDB test container"]
    async fn admin_can_promote_another_user() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users
            .create_user(json!({ "email": "a@x.com", "role": "admin" }))
            .await?;
        ctx.users.create_user(json!({ "email": "b@x.com" })).await?;

        let outcome = ctx.users.promote_to_admin("a@x.com", "b@x.com").await?;

        let Promotion::Promoted(ack) = outcome else {
            panic!("expected Promoted, got {outcome:?}");
        };

        assert_eq!(ack.matched_count, 1);
        assert_eq!(ack.modified_count, 1);
        assert!(ctx.users.is_admin("b@x.com").await?);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the MongoDB test container"]
    async fn non_admin_cannot_promote() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users
            .create_user(json!({ "email": "a@x.com", "role": "rider" }))
            .await?;
        ctx.users.create_user(json!({ "email": "b@x.com" })).await?;

        let outcome = ctx.users.promote_to_admin("a@x.com", "b@x.com").await?;

        assert_eq!(outcome, Promotion::Forbidden);
        assert!(!ctx.users.is_admin("b@x.com").await?);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the MongoDB test container"]
    async fn unknown_requester_cannot_promote() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(json!({ "email": "b@x.com" })).await?;

        let outcome = ctx.users.promote_to_admin("ghost@x.com", "b@x.com").await?;

        assert_eq!(outcome, Promotion::RequesterNotFound);

        Ok(())
    }
}
