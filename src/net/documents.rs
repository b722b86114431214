//! Family-member and document endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prescriptions and reports live in separate backend collections with
//! the same query surface; the only wire difference on upload is the
//! name field (`title` vs `type`). Document listing shares one query
//! shape assembled by [`DocumentQuery`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use super::types::{DocKind, FamilyMember, NewMemberPayload, Prescription, Report};
use crate::util::files::SelectedFile;

#[cfg(any(test, feature = "web"))]
const FAMILY_ENDPOINT: &str = "/api/family";

#[cfg(not(feature = "web"))]
const OFFLINE: &str = "not available outside the browser";

/// Collection endpoint for a document kind, used for both listing and
/// multipart upload.
pub fn documents_endpoint(kind: DocKind) -> &'static str {
    match kind {
        DocKind::Prescription => "/api/prescriptions",
        DocKind::Report => "/api/reports",
    }
}

#[cfg(any(test, feature = "web"))]
fn member_delete_endpoint(id: &str) -> String {
    format!("/api/family/{id}")
}

#[cfg(any(test, feature = "web"))]
fn document_delete_endpoint(kind: DocKind, id: &str) -> String {
    format!("{}/{id}", documents_endpoint(kind))
}

/// Query parameters for a document listing fetch. Empty fields are
/// omitted from the request entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub member_id: Option<String>,
    pub tag: Option<String>,
    /// Inclusive `(startDate, endDate)` range in ISO date form.
    pub date_range: Option<(String, String)>,
}

impl DocumentQuery {
    /// Flatten into `(key, value)` pairs in the order the backend
    /// documents them.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(member_id) = &self.member_id {
            pairs.push(("memberId", member_id.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tags", tag.clone()));
        }
        if let Some((start, end)) = &self.date_range {
            pairs.push(("startDate", start.clone()));
            pairs.push(("endDate", end.clone()));
        }
        pairs
    }
}

/// Multipart fields for a document upload. Prescriptions name the
/// document with `title`, reports with `type`; an empty date is left
/// out.
pub fn upload_fields(
    kind: DocKind,
    name: &str,
    member_id: &str,
    tag: &str,
    date: &str,
) -> Vec<(String, String)> {
    let name_field = match kind {
        DocKind::Prescription => "title",
        DocKind::Report => "type",
    };
    let mut fields = vec![
        (name_field.to_owned(), name.trim().to_owned()),
        ("memberId".to_owned(), member_id.to_owned()),
        ("tags".to_owned(), tag.to_owned()),
    ];
    if !date.is_empty() {
        fields.push(("date".to_owned(), date.to_owned()));
    }
    fields
}

/// Fetch the family-member list.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when the fetch fails.
pub async fn fetch_members() -> Result<Vec<FamilyMember>, String> {
    #[cfg(feature = "web")]
    {
        let response = super::api::send("GET /api/family", super::api::get(FAMILY_ENDPOINT).build()).await?;
        super::api::read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Create a family member; returns the persisted record.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when creation fails.
pub async fn add_member(member: &NewMemberPayload) -> Result<FamilyMember, String> {
    #[cfg(feature = "web")]
    {
        let response =
            super::api::send("POST /api/family", super::api::post(FAMILY_ENDPOINT).json(member)).await?;
        super::api::read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = member;
        Err(OFFLINE.to_owned())
    }
}

/// Delete a family member by identifier.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when deletion fails.
pub async fn delete_member(id: &str) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        let endpoint = member_delete_endpoint(id);
        let response =
            super::api::send("DELETE /api/family/:id", super::api::delete(&endpoint).build()).await?;
        super::api::read_ok(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Fetch the prescription list for the given query.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when the fetch fails.
pub async fn fetch_prescriptions(query: &DocumentQuery) -> Result<Vec<Prescription>, String> {
    #[cfg(feature = "web")]
    {
        let request =
            super::api::get(documents_endpoint(DocKind::Prescription)).query(query.pairs()).build();
        let response = super::api::send("GET /api/prescriptions", request).await?;
        super::api::read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = query;
        Err(OFFLINE.to_owned())
    }
}

/// Fetch the report list for the given query.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when the fetch fails.
pub async fn fetch_reports(query: &DocumentQuery) -> Result<Vec<Report>, String> {
    #[cfg(feature = "web")]
    {
        let request =
            super::api::get(documents_endpoint(DocKind::Report)).query(query.pairs()).build();
        let response = super::api::send("GET /api/reports", request).await?;
        super::api::read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = query;
        Err(OFFLINE.to_owned())
    }
}

/// Upload a document as a multipart form to the collection endpoint
/// matching its kind. The browser supplies the multipart content type
/// and boundary.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when the upload fails.
pub async fn upload_document(
    kind: DocKind,
    fields: &[(String, String)],
    file: &SelectedFile,
) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        let form = build_upload_form(fields, file)?;
        let request = super::api::post(documents_endpoint(kind)).body(form);
        let response = super::api::send("POST documents upload", request).await?;
        super::api::read_ok(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (kind, fields, file);
        Err(OFFLINE.to_owned())
    }
}

#[cfg(feature = "web")]
fn build_upload_form(
    fields: &[(String, String)],
    file: &SelectedFile,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| super::api::SERVER_ERROR.to_owned())?;
    for (key, value) in fields {
        form.append_with_str(key, value).map_err(|_| super::api::SERVER_ERROR.to_owned())?;
    }
    form.append_with_blob_and_filename("file", &file.handle, &file.name)
        .map_err(|_| super::api::SERVER_ERROR.to_owned())?;
    Ok(form)
}

/// Delete a document by kind and identifier.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when deletion fails.
pub async fn delete_document(kind: DocKind, id: &str) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        let endpoint = document_delete_endpoint(kind, id);
        let response =
            super::api::send("DELETE document", super::api::delete(&endpoint).build()).await?;
        super::api::read_ok(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (kind, id);
        Err(OFFLINE.to_owned())
    }
}
