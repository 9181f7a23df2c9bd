//! Incident reports filed by registered users.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Stable server-assigned incident identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(Uuid);

impl IncidentId {
    /// Generate a new random [`IncidentId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Incident report fields supplied by the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    /// Short headline, at most 200 characters.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional location, at most 200 characters.
    pub location: Option<String>,
    /// Id of the reporting user. The store is responsible for checking the
    /// reference resolves to an existing account.
    pub reported_by: UserId,
}

/// A filed incident report.
///
/// ## Invariants
/// - `date_reported` is stamped when the report is filed and never mutated.
/// - `reported_by` is an id-based back-reference; the reporter record is
///   resolved on demand by the store, never owned here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Server-assigned identifier.
    pub id: IncidentId,
    /// Short headline.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional location.
    pub location: Option<String>,
    /// Id of the reporting user.
    pub reported_by: UserId,
    /// Filing timestamp.
    pub date_reported: DateTime<Utc>,
}

impl Incident {
    /// File a report, assigning an id and stamping the filing time.
    ///
    /// Callers validate the draft through
    /// [`validation::validate_incident`](crate::domain::validation::validate_incident)
    /// before filing.
    pub fn file(draft: NewIncident) -> Self {
        Self {
            id: IncidentId::random(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            reported_by: draft.reported_by,
            date_reported: Utc::now(),
        }
    }
}
