//! MongoDB-backed issue store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::issues::model::{Issue, IssueUpdate, NewIssue};
use crate::store::{IssueStore, StoreError};

/// BSON shape of a stored issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IssueDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    description: String,
    location: String,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
}

impl From<IssueDocument> for Issue {
    fn from(doc: IssueDocument) -> Self {
        Issue {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            location: doc.location,
            created_at: DateTime::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

/// Issue store backed by a MongoDB collection.
///
/// The client connects lazily: construction succeeds even when the database
/// is unreachable, and connectivity failures surface per-operation.
pub struct MongoIssueStore {
    db: Database,
    collection: Collection<IssueDocument>,
}

impl MongoIssueStore {
    /// Build a store from a connection string and store settings.
    pub async fn connect(uri: &str, config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(&client, config))
    }

    /// Build a store from an existing client.
    pub fn new(client: &Client, config: &StoreConfig) -> Self {
        let db = client.database(&config.database);
        let collection = db.collection(&config.collection);
        Self { db, collection }
    }

    fn parse_id(&self, id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl IssueStore for MongoIssueStore {
    async fn insert(&self, new: NewIssue) -> Result<Issue, StoreError> {
        let document = IssueDocument {
            id: ObjectId::new(),
            title: new.title,
            description: new.description,
            location: new.location,
            created_at: bson::DateTime::now(),
        };
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn list(&self) -> Result<Vec<Issue>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<IssueDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Issue::from).collect())
    }

    async fn find(&self, id: &str) -> Result<Option<Issue>, StoreError> {
        let oid = self.parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Issue::from))
    }

    async fn update(&self, id: &str, update: IssueUpdate) -> Result<Option<Issue>, StoreError> {
        let oid = self.parse_id(id)?;

        // $set with an empty document is rejected by the server; an update
        // with no fields is a read of the current record.
        if update.is_empty() {
            let document = self.collection.find_one(doc! { "_id": oid }).await?;
            return Ok(document.map(Issue::from));
        }

        let mut set = Document::new();
        if let Some(title) = update.title {
            set.insert("title", title);
        }
        if let Some(description) = update.description {
            set.insert("description", description);
        }
        if let Some(location) = update.location {
            set.insert("location", location);
        }

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(Issue::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let oid = self.parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
