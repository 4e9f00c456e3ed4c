//! Wire DTOs for the course API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads exactly (Mongo-style `_id`, camelCase
//! field names) so serde stays lossless and pages can stay schema-unaware.
//! Courses are request-scoped copies; the API owns the entities.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A course as returned by the catalog and admin endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form duration label, e.g. `"6 weeks"`. Filtering parses the
    /// numeric prefix.
    pub duration: String,
    pub instructor: String,
    /// Absent on enrollment payloads.
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<String>,
}

/// Fields submitted when creating or updating a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub instructor: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
}
