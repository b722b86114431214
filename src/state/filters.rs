//! Document filter state and its projection into fetch decisions.
//!
//! DESIGN
//! ======
//! The select-backed filters keep their raw string values (`""`/`"all"`
//! both mean unfiltered) so the state mirrors what the controls show.
//! Only the member/tag/doc-type selection triggers a refetch; the
//! quick-filter toggles fold into the next fetch's derived parameters
//! instead of driving their own.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::net::documents::DocumentQuery;
use crate::util::dates::CivilDate;

/// Tag vocabulary offered by the tag selects.
pub const TAG_OPTIONS: [&str; 8] =
    ["ENT", "Cardiology", "Neuro", "General", "Follow-up", "Heart", "Orthopedics", "Dermatology"];

/// Boolean quick-filter toggles. Only `last_month` expands into query
/// parameters today; the other two are carried as inert toggles the
/// backend does not yet consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickFilters {
    pub last_month: bool,
    pub by_type: bool,
    pub by_id: bool,
}

/// Which document collections the current doc-type filter wants
/// fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchPlan {
    pub prescriptions: bool,
    pub reports: bool,
}

/// Transient filter state combined into query parameters on each
/// fetch. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FiltersState {
    /// `""`/`"all"` fetch both kinds; `"Prescription"`/`"Report"` fetch
    /// one.
    pub doc_type: String,
    pub member: String,
    pub tag: String,
    pub quick: QuickFilters,
}

impl FiltersState {
    /// Reset every filter, as the upload-success path requires.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any filter deviates from the default.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// The slice of filter state whose changes trigger a refetch.
    pub fn selection_key(&self) -> (String, String, String) {
        (self.member.clone(), self.tag.clone(), self.doc_type.clone())
    }

    /// Gate the two collection fetches on the doc-type value. Unset and
    /// `"all"` fetch both; an unrecognized value fetches neither.
    pub fn fetch_plan(&self) -> FetchPlan {
        let unfiltered = self.doc_type.is_empty() || self.doc_type == "all";
        FetchPlan {
            prescriptions: unfiltered || self.doc_type == "Prescription",
            reports: unfiltered || self.doc_type == "Report",
        }
    }

    /// Assemble the backend query, expanding the last-month quick
    /// filter into a date range ending at `today` when available.
    pub fn query(&self, today: Option<CivilDate>) -> DocumentQuery {
        let selected = |value: &str| {
            if value.is_empty() || value == "all" { None } else { Some(value.to_owned()) }
        };
        DocumentQuery {
            member_id: selected(&self.member),
            tag: selected(&self.tag),
            date_range: match (self.quick.last_month, today) {
                (true, Some(today)) => Some((today.one_month_earlier().iso(), today.iso())),
                _ => None,
            },
        }
    }
}
