//! Document-list state with epoch-based fetch de-duplication.
//!
//! DESIGN
//! ======
//! Rapid filter changes can overlap fetches; each fetch claims the next
//! epoch and results are applied only while that epoch is still
//! current, so a slow stale response can never overwrite a fresher one.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::{Prescription, Report};
use crate::util::files::SelectedFile;

/// Shared prescription/report list state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentsState {
    pub prescriptions: Vec<Prescription>,
    pub reports: Vec<Report>,
    pub loading: bool,
    epoch: u64,
}

impl DocumentsState {
    /// Claim the next fetch epoch and mark the lists loading.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Apply fetched prescriptions if the epoch is still current;
    /// returns whether anything was applied.
    pub fn apply_prescriptions(&mut self, epoch: u64, items: Vec<Prescription>) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        self.prescriptions = items;
        true
    }

    /// Apply fetched reports if the epoch is still current; returns
    /// whether anything was applied.
    pub fn apply_reports(&mut self, epoch: u64, items: Vec<Report>) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        self.reports = items;
        true
    }

    /// Clear the loading flag once the fetch that owns `epoch`
    /// finishes, unless a newer fetch has taken over.
    pub fn finish_fetch(&mut self, epoch: u64) {
        if self.is_current(epoch) {
            self.loading = false;
        }
    }

    pub fn remove_prescription(&mut self, id: &str) {
        self.prescriptions.retain(|p| p.id != id);
    }

    pub fn remove_report(&mut self, id: &str) {
        self.reports.retain(|r| r.id != id);
    }

    /// Deterministic display identifier for a local-fallback record,
    /// derived from the current list lengths.
    pub fn fallback_display_id(&self) -> String {
        format!("PR-{}", 1000 + self.prescriptions.len() + self.reports.len())
    }
}

/// Build the local-only prescription appended when an upload fails.
pub fn local_prescription(
    id: String,
    title: &str,
    date: &str,
    tag: &str,
    member_id: &str,
    file: &SelectedFile,
) -> Prescription {
    Prescription {
        id,
        title: title.trim().to_owned(),
        date: if date.is_empty() { None } else { Some(date.to_owned()) },
        tags: vec![tag.to_owned()],
        member_id: member_id.to_owned(),
        file_url: None,
        file_type: Some(file.content_type.clone()),
        local_only: true,
    }
}

/// Build the local-only report appended when an upload fails.
pub fn local_report(
    id: String,
    doc_type: &str,
    date: &str,
    tag: &str,
    member_id: &str,
    file: &SelectedFile,
) -> Report {
    Report {
        id,
        doc_type: doc_type.trim().to_owned(),
        date: if date.is_empty() { None } else { Some(date.to_owned()) },
        tags: vec![tag.to_owned()],
        member_id: member_id.to_owned(),
        file_url: None,
        file_type: Some(file.content_type.clone()),
        local_only: true,
    }
}
