//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON schema (camelCase fields,
//! Mongo-style `_id` identifiers) so serde round-trips stay lossless.
//! Fields the backend may omit carry `#[serde(default)]`. The
//! `local_only` markers are client-side bookkeeping for records
//! synthesized by the create-fallback path and are never serialized.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/check`, login, signup,
/// and profile-update responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Profile image reference (URL or data URL), if set.
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// ISO 8601 account creation timestamp, if supplied.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Relationship of a family member to the account owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    #[default]
    #[serde(rename = "Self")]
    Myself,
    Father,
    Mother,
    Spouse,
    Child,
    Sibling,
    #[serde(other)]
    Other,
}

impl Relationship {
    /// All variants, in the order the add-member form offers them.
    pub const ALL: [Relationship; 7] = [
        Relationship::Myself,
        Relationship::Father,
        Relationship::Mother,
        Relationship::Spouse,
        Relationship::Child,
        Relationship::Sibling,
        Relationship::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Relationship::Myself => "Self",
            Relationship::Father => "Father",
            Relationship::Mother => "Mother",
            Relationship::Spouse => "Spouse",
            Relationship::Child => "Child",
            Relationship::Sibling => "Sibling",
            Relationship::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == value)
    }
}

/// A family member owned by the current account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Backend identifier, or the `"self"` sentinel / a `local-*` value
    /// for client-synthesized entries.
    #[serde(rename = "memberId", alias = "_id")]
    pub id: String,
    pub name: String,
    /// Age as entered; may be empty for the synthesized Self entry.
    #[serde(default)]
    pub age: String,
    /// May be empty for the synthesized Self entry.
    #[serde(default)]
    pub gender: String,
    pub relationship: Relationship,
    /// True for records fabricated locally after a failed create call.
    #[serde(skip)]
    pub local_only: bool,
}

/// A prescription document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// ISO 8601 upload/document date.
    #[serde(default)]
    pub date: Option<String>,
    /// Ordered tag set; only the first tag is displayed.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub member_id: String,
    #[serde(default, alias = "imageUrl")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(skip)]
    pub local_only: bool,
}

/// A medical report. Same shape as [`Prescription`] with a `type`
/// field standing in for the title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub member_id: String,
    #[serde(default, alias = "imageUrl")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(skip)]
    pub local_only: bool,
}

/// A document fetched through a share token. Every field is optional
/// because the public endpoint serves both document kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "imageUrl")]
    pub file_url: Option<String>,
}

/// The two document categories the backend stores in separate
/// collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocKind {
    Prescription,
    Report,
}

impl DocKind {
    /// Display form, also the value used by the document-type selects.
    pub fn label(self) -> &'static str {
        match self {
            DocKind::Prescription => "Prescription",
            DocKind::Report => "Report",
        }
    }

    /// Lowercase form used in share payloads and the `/view/:kind/:token`
    /// route.
    pub fn wire(self) -> &'static str {
        match self {
            DocKind::Prescription => "prescription",
            DocKind::Report => "report",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Prescription" => Some(DocKind::Prescription),
            "Report" => Some(DocKind::Report),
            _ => None,
        }
    }

    pub fn from_route(value: &str) -> Option<Self> {
        match value {
            "prescription" => Some(DocKind::Prescription),
            "report" => Some(DocKind::Report),
            _ => None,
        }
    }
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Signup request body. The confirm-password field never appears here;
/// it is stripped when the form converts itself into this payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub aadhar: String,
    pub blood_group: String,
    pub dob: String,
}

/// Partial identity document for `PUT /auth/update-profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// New family member request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberPayload {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub relationship: Relationship,
}
