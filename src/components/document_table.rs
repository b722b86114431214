//! Reusable document table for the dashboard's prescription and report
//! lists.
//!
//! Both document kinds flatten into [`DocumentRow`] so one table
//! renders either collection; the only kind-specific behavior left is
//! which source field supplies the display name.

#[cfg(test)]
#[path = "document_table_test.rs"]
mod document_table_test;

use leptos::prelude::*;

use crate::net::types::{DocKind, Prescription, Report};
use crate::state::members::MembersState;
use crate::util::dates::date_only;

/// View model for one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub id: String,
    pub name: String,
    pub date: Option<String>,
    /// First tag only; the backend stores an ordered set but the table
    /// shows a single badge.
    pub tag: Option<String>,
    pub member: String,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub local_only: bool,
}

/// Flatten prescriptions into rows, resolving member names.
pub fn prescription_rows(items: &[Prescription], members: &MembersState) -> Vec<DocumentRow> {
    items
        .iter()
        .map(|p| DocumentRow {
            id: p.id.clone(),
            name: p.title.clone(),
            date: p.date.clone(),
            tag: p.tags.first().cloned(),
            member: members.member_name(&p.member_id),
            file_url: p.file_url.clone(),
            file_type: p.file_type.clone(),
            local_only: p.local_only,
        })
        .collect()
}

/// Flatten reports into rows, resolving member names.
pub fn report_rows(items: &[Report], members: &MembersState) -> Vec<DocumentRow> {
    items
        .iter()
        .map(|r| DocumentRow {
            id: r.id.clone(),
            name: r.doc_type.clone(),
            date: r.date.clone(),
            tag: r.tags.first().cloned(),
            member: members.member_name(&r.member_id),
            file_url: r.file_url.clone(),
            file_type: r.file_type.clone(),
            local_only: r.local_only,
        })
        .collect()
}

fn empty_message(kind: DocKind) -> String {
    format!("No {}s uploaded yet.", kind.label().to_lowercase())
}

#[component]
pub fn DocumentTable(
    kind: DocKind,
    rows: Signal<Vec<DocumentRow>>,
    /// `(file_url, file_type)` of the row whose View button was pressed.
    on_view: Callback<(String, Option<String>)>,
    /// Document id of the row whose Share button was pressed.
    on_share: Callback<String>,
    /// `(id, display name)` of the row whose Delete button was pressed.
    on_delete: Callback<(String, String)>,
    #[prop(optional, into)] on_add: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <section class="doc-table">
            <header class="doc-table__header">
                <h4 class="doc-table__title">
                    {format!("{}s", kind.label())} " (" {move || rows.get().len()} ")"
                </h4>
                {on_add.map(|on_add| {
                    view! {
                        <button class="btn btn--primary doc-table__add" on:click=move |_| on_add.run(()) title="Add document">
                            "+"
                        </button>
                    }
                })}
            </header>
            <table class="doc-table__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Date"</th>
                        <th>"Tag"</th>
                        <th>"Family Member"</th>
                        <th>"File"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !rows.get().is_empty()
                        fallback=move || {
                            view! {
                                <tr>
                                    <td class="doc-table__empty" colspan="6">{empty_message(kind)}</td>
                                </tr>
                            }
                        }
                    >
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let DocumentRow { id, name, date, tag, member, file_url, file_type, local_only } = row;
                                    let share_id = id.clone();
                                    let delete_id = id;
                                    let delete_name = name.clone();
                                    let view_target = file_url.clone().map(|url| (url, file_type));
                                    view! {
                                        <tr class="doc-table__row">
                                            <td>
                                                {name}
                                                <Show when=move || local_only>
                                                    <span class="badge badge--unsynced">"not synced"</span>
                                                </Show>
                                            </td>
                                            <td>{date.as_deref().map_or_else(|| "-".to_owned(), |d| date_only(d).to_owned())}</td>
                                            <td>
                                                {tag.map(|tag| view! { <span class="badge badge--tag">{tag}</span> })}
                                            </td>
                                            <td>{member}</td>
                                            <td>
                                                {match view_target {
                                                    Some(target) => view! {
                                                        <button class="btn btn--link" on:click=move |_| on_view.run(target.clone())>
                                                            "View"
                                                        </button>
                                                    }.into_any(),
                                                    None => view! { <span class="doc-table__no-file">"No file"</span> }.into_any(),
                                                }}
                                            </td>
                                            <td class="doc-table__actions">
                                                <button
                                                    class="btn btn--link"
                                                    on:click=move |_| on_share.run(share_id.clone())
                                                    disabled=local_only
                                                    title="Share"
                                                >
                                                    "Share"
                                                </button>
                                                <button
                                                    class="btn btn--link btn--danger"
                                                    on:click=move |_| on_delete.run((delete_id.clone(), delete_name.clone()))
                                                    title="Delete"
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </tbody>
            </table>
        </section>
    }
}
