//! In-memory issue store.
//!
//! Ephemeral backend for the integration test suite and `--memory` runs.
//! Records live in an insertion-ordered vector behind a tokio `RwLock`;
//! every id is a UUID v4, so any string is a well-formed identifier and an
//! unknown one is simply not found.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::issues::model::{Issue, IssueUpdate, NewIssue};
use crate::store::{IssueStore, StoreError};

/// Thread-safe in-memory store.
#[derive(Default)]
pub struct MemoryIssueStore {
    issues: RwLock<Vec<Issue>>,
}

impl MemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IssueStore for MemoryIssueStore {
    async fn insert(&self, new: NewIssue) -> Result<Issue, StoreError> {
        let issue = Issue {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            location: new.location,
            created_at: Utc::now(),
        };
        self.issues.write().await.push(issue.clone());
        Ok(issue)
    }

    async fn list(&self) -> Result<Vec<Issue>, StoreError> {
        Ok(self.issues.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Issue>, StoreError> {
        Ok(self
            .issues
            .read()
            .await
            .iter()
            .find(|issue| issue.id == id)
            .cloned())
    }

    async fn update(&self, id: &str, update: IssueUpdate) -> Result<Option<Issue>, StoreError> {
        let mut issues = self.issues.write().await;
        match issues.iter_mut().find(|issue| issue.id == id) {
            Some(issue) => {
                update.apply_to(issue);
                Ok(Some(issue.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut issues = self.issues.write().await;
        let before = issues.len();
        issues.retain(|issue| issue.id != id);
        Ok(issues.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
