//! Issue record and request payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A stored issue report as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Store-assigned identifier, immutable.
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Set at insertion, never modified by updates.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Creation input after validation. All fields are known non-empty.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub location: String,
}

/// Raw creation payload as received. Fields are optional so that missing
/// ones become a typed validation error instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIssuePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl NewIssuePayload {
    /// Require all three fields present and non-empty.
    pub fn validate(self) -> Result<NewIssue, ApiError> {
        match (
            non_empty(self.title),
            non_empty(self.description),
            non_empty(self.location),
        ) {
            (Some(title), Some(description), Some(location)) => Ok(NewIssue {
                title,
                description,
                location,
            }),
            _ => Err(ApiError::Validation("All fields are required")),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Partial update. Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl IssueUpdate {
    /// True when no field is present; such an update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.location.is_none()
    }

    /// Apply the present fields to an existing record in place.
    pub fn apply_to(&self, issue: &mut Issue) {
        if let Some(title) = &self.title {
            issue.title = title.clone();
        }
        if let Some(description) = &self.description {
            issue.description = description.clone();
        }
        if let Some(location) = &self.location {
            issue.location = location.clone();
        }
    }
}
