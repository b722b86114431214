//! Family-member list state.
//!
//! DESIGN
//! ======
//! The list is normalized so exactly one "Self" entry is always
//! present: the backend's copy when it supplies one, a synthesized
//! sentinel entry otherwise. Even a failed fetch leaves a usable
//! singleton list rather than an empty one.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use crate::net::types::{FamilyMember, Relationship};

/// Fixed identifier for the client-synthesized Self entry.
pub const SELF_MEMBER_ID: &str = "self";

/// Shared family-member list state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembersState {
    pub items: Vec<FamilyMember>,
    pub loading: bool,
}

impl MembersState {
    /// Store a fetched list, normalizing the Self invariant.
    pub fn apply_fetched(&mut self, fetched: Vec<FamilyMember>) {
        self.items = ensure_self(fetched);
        self.loading = false;
    }

    /// Fetch failed: fall back to the singleton Self list.
    pub fn apply_fetch_failure(&mut self) {
        self.items = vec![synthetic_self()];
        self.loading = false;
    }

    /// Case-insensitive name lookup used for duplicate rejection.
    pub fn has_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.items.iter().any(|member| member.name.eq_ignore_ascii_case(name))
    }

    /// Display name for a member id; falls back to the raw id for
    /// documents whose member is no longer in the list.
    pub fn member_name(&self, id: &str) -> String {
        self.items
            .iter()
            .find(|member| member.id == id)
            .map_or_else(|| id.to_owned(), |member| member.name.clone())
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|member| member.id != id);
    }
}

/// Guarantee exactly one conceptual Self entry, matching either an
/// existing relationship of Self or a case-insensitive "self" name.
pub fn ensure_self(members: Vec<FamilyMember>) -> Vec<FamilyMember> {
    let has_self = members
        .iter()
        .any(|m| m.relationship == Relationship::Myself || m.name.eq_ignore_ascii_case("self"));
    if has_self {
        return members;
    }
    let mut normalized = Vec::with_capacity(members.len() + 1);
    normalized.push(synthetic_self());
    normalized.extend(members);
    normalized
}

/// The placeholder Self entry with the fixed sentinel identifier.
pub fn synthetic_self() -> FamilyMember {
    FamilyMember {
        id: SELF_MEMBER_ID.to_owned(),
        name: "Self".to_owned(),
        age: String::new(),
        gender: String::new(),
        relationship: Relationship::Myself,
        local_only: false,
    }
}

/// Build the local-only record appended when a create call fails, so
/// the attempted entry is never silently dropped. Tagged `local_only`
/// to stay distinguishable from persisted records.
pub fn local_member(
    id: String,
    name: &str,
    age: &str,
    gender: &str,
    relationship: Relationship,
) -> FamilyMember {
    FamilyMember {
        id,
        name: name.trim().to_owned(),
        age: age.to_owned(),
        gender: gender.to_owned(),
        relationship,
        local_only: true,
    }
}

/// Time-based identifier for a local-only member record.
pub fn local_member_id() -> String {
    #[cfg(feature = "web")]
    {
        format!("local-{}", js_sys::Date::now() as u64)
    }
    #[cfg(not(feature = "web"))]
    {
        "local-0".to_owned()
    }
}
