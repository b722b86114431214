//! Dashboard page: family members, document tables, filters, and the
//! modal workflows that hang off them.
//!
//! ARCHITECTURE
//! ============
//! This is the authenticated landing route. It owns the fetch/filter
//! protocol: members are fetched once on mount; documents are fetched
//! on mount and again whenever the member/tag/doc-type selection
//! changes, with quick-filter toggles folded into the next fetch
//! instead of driving their own. Rendering details are delegated to
//! `components`; dialogs local to this page live here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::document_table::{DocumentTable, prescription_rows, report_rows};
use crate::components::file_viewer_modal::FileViewerModal;
use crate::components::filter_panel::FilterPanel;
use crate::components::share_modal::ShareModal;
use crate::net::documents::upload_fields;
use crate::net::types::{DocKind, FamilyMember, NewMemberPayload, Relationship};
use crate::state::documents::DocumentsState;
#[cfg(feature = "web")]
use crate::state::documents::{local_prescription, local_report};
use crate::state::filters::{FiltersState, TAG_OPTIONS};
use crate::state::members::MembersState;
#[cfg(feature = "web")]
use crate::state::members::{local_member, local_member_id};
use crate::state::notify::{self, NotifyState};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::files::SelectedFile;

/// What a delete confirmation is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteKind {
    Member,
    Prescription,
    Report,
}

impl DeleteKind {
    fn noun(self) -> &'static str {
        match self {
            DeleteKind::Member => "family member",
            DeleteKind::Prescription => "prescription",
            DeleteKind::Report => "report",
        }
    }
}

/// Captured target of a pending delete confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: DeleteKind,
    pub id: String,
    pub name: String,
}

fn delete_prompt(target: &DeleteTarget) -> String {
    format!(
        "Are you sure you want to delete {} \"{}\"? This action cannot be undone.",
        target.kind.noun(),
        target.name
    )
}

/// Gate an upload submission; checks run in the order the form asks for
/// its inputs.
fn validate_upload(
    kind: Option<DocKind>,
    member: &str,
    name: &str,
    tag: &str,
    has_file: bool,
) -> Result<DocKind, &'static str> {
    let Some(kind) = kind else {
        return Err("Select document type");
    };
    if member.is_empty() {
        return Err("Select family member");
    }
    if name.trim().is_empty() {
        return Err("Enter document name");
    }
    if tag.is_empty() {
        return Err("Select tag");
    }
    if !has_file {
        return Err("Select a file to upload");
    }
    Ok(kind)
}

/// "Father • 62 years • Male", skipping empty parts.
fn member_meta(member: &FamilyMember) -> String {
    let mut parts = vec![member.relationship.label().to_owned()];
    if !member.age.is_empty() {
        parts.push(format!("{} years", member.age));
    }
    if !member.gender.is_empty() {
        parts.push(member.gender.clone());
    }
    parts.join(" • ")
}

/// Fetch the member list, normalizing the Self invariant on success and
/// falling back to the singleton Self list on failure.
#[cfg(feature = "web")]
async fn load_members(members: RwSignal<MembersState>, notices: RwSignal<NotifyState>) {
    members.update(|state| state.loading = true);
    match crate::net::documents::fetch_members().await {
        Ok(fetched) => members.update(|state| state.apply_fetched(fetched)),
        Err(message) => {
            notify::error(notices, format!("Failed to load family members: {message}"));
            members.update(|state| state.apply_fetch_failure());
        }
    }
}

/// Fetch up to two document collections, gated by the doc-type filter.
/// The claimed epoch makes overlapping fetches last-claim-wins.
#[cfg(feature = "web")]
async fn load_documents(
    snapshot: FiltersState,
    documents: RwSignal<DocumentsState>,
    notices: RwSignal<NotifyState>,
) {
    let plan = snapshot.fetch_plan();
    let query = snapshot.query(Some(crate::util::dates::today()));
    let epoch = documents.try_update(|state| state.begin_fetch()).unwrap_or(0);

    if plan.prescriptions {
        match crate::net::documents::fetch_prescriptions(&query).await {
            Ok(items) => {
                documents.update(|state| {
                    state.apply_prescriptions(epoch, items);
                });
            }
            Err(message) => {
                notify::error(notices, format!("Failed to load prescriptions: {message}"));
            }
        }
    } else {
        documents.update(|state| {
            state.apply_prescriptions(epoch, Vec::new());
        });
    }

    if plan.reports {
        match crate::net::documents::fetch_reports(&query).await {
            Ok(items) => {
                documents.update(|state| {
                    state.apply_reports(epoch, items);
                });
            }
            Err(message) => {
                notify::error(notices, format!("Failed to load reports: {message}"));
            }
        }
    } else {
        documents.update(|state| {
            state.apply_reports(epoch, Vec::new());
        });
    }

    documents.update(|state| state.finish_fetch(epoch));
}

/// Dashboard page. Redirects to the login page when unauthenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let members = expect_context::<RwSignal<MembersState>>();
    let documents = expect_context::<RwSignal<DocumentsState>>();
    let filters = expect_context::<RwSignal<FiltersState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    // One-time member fetch on mount.
    let members_requested = RwSignal::new(false);
    Effect::new(move || {
        if members_requested.get() {
            return;
        }
        members_requested.set(true);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            load_members(members, notices).await;
        });
    });

    // Document fetch on mount and on each member/tag/doc-type change.
    // The memo keeps quick-filter toggles from retriggering the effect;
    // `refresh` lets upload-success and reset-all force a refetch.
    let refresh = RwSignal::new(0_u64);
    let selection = Memo::new(move |_| filters.get().selection_key());
    Effect::new(move || {
        selection.track();
        refresh.track();
        let snapshot = filters.get_untracked();
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            load_documents(snapshot, documents, notices).await;
        });
        #[cfg(not(feature = "web"))]
        let _ = snapshot;
    });

    // Modal state.
    let show_member_form = RwSignal::new(false);
    let show_document_form = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<DeleteTarget>);
    let viewer = RwSignal::new(None::<(String, Option<String>)>);
    let share_target = RwSignal::new(None::<(DocKind, String)>);

    let on_member_form_close = Callback::new(move |()| show_member_form.set(false));
    let on_document_form_close = Callback::new(move |()| show_document_form.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_viewer_close = Callback::new(move |()| viewer.set(None));
    let on_share_close = Callback::new(move |()| share_target.set(None));

    let on_view = Callback::new(move |target: (String, Option<String>)| viewer.set(Some(target)));
    let on_add_document = Callback::new(move |()| show_document_form.set(true));
    let on_share_prescription =
        Callback::new(move |id: String| share_target.set(Some((DocKind::Prescription, id))));
    let on_share_report = Callback::new(move |id: String| share_target.set(Some((DocKind::Report, id))));
    let on_delete_prescription = Callback::new(move |(id, name): (String, String)| {
        delete_target.set(Some(DeleteTarget { kind: DeleteKind::Prescription, id, name }));
    });
    let on_delete_report = Callback::new(move |(id, name): (String, String)| {
        delete_target.set(Some(DeleteTarget { kind: DeleteKind::Report, id, name }));
    });

    let on_filters_reset = Callback::new(move |()| {
        filters.update(|f| f.clear());
        refresh.update(|n| *n += 1);
    });

    let prescription_rows_signal =
        Signal::derive(move || prescription_rows(&documents.get().prescriptions, &members.get()));
    let report_rows_signal =
        Signal::derive(move || report_rows(&documents.get().reports, &members.get()));

    view! {
        <Show
            when=move || !session.get().checking && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || {
                            if session.get().checking { "Loading..." } else { "Redirecting to login..." }
                        }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <div class="dashboard-page__top">
                    <section class="member-card">
                        <header class="member-card__header">
                            <h4>"Family Members"</h4>
                            <button class="btn btn--primary" on:click=move |_| show_member_form.set(true)>
                                "Add Member"
                            </button>
                        </header>
                        <Show
                            when=move || !members.get().items.is_empty()
                            fallback=|| view! { <p class="member-card__empty">"No family members added yet"</p> }
                        >
                            <ul class="member-card__list">
                                {move || {
                                    members
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|member| {
                                            let meta = member_meta(&member);
                                            let name = member.name.clone();
                                            let local_only = member.local_only;
                                            let delete_id = member.id.clone();
                                            let delete_name = member.name;
                                            view! {
                                                <li class="member-card__item">
                                                    <div>
                                                        <p class="member-card__name">
                                                            {name}
                                                            <Show when=move || local_only>
                                                                <span class="badge badge--unsynced">"not synced"</span>
                                                            </Show>
                                                        </p>
                                                        <p class="member-card__meta">{meta}</p>
                                                    </div>
                                                    <button
                                                        class="btn btn--link btn--danger"
                                                        title="Delete member"
                                                        on:click=move |_| {
                                                            delete_target.set(Some(DeleteTarget {
                                                                kind: DeleteKind::Member,
                                                                id: delete_id.clone(),
                                                                name: delete_name.clone(),
                                                            }));
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </section>
                    <FilterPanel filters=filters members=members on_reset=on_filters_reset/>
                </div>

                <Show when=move || documents.get().loading>
                    <p class="dashboard-page__loading">"Loading documents..."</p>
                </Show>

                <DocumentTable
                    kind=DocKind::Prescription
                    rows=prescription_rows_signal
                    on_view=on_view
                    on_share=on_share_prescription
                    on_delete=on_delete_prescription
                    on_add=on_add_document
                />
                <DocumentTable
                    kind=DocKind::Report
                    rows=report_rows_signal
                    on_view=on_view
                    on_share=on_share_report
                    on_delete=on_delete_report
                />

                <Show when=move || show_member_form.get()>
                    <AddMemberDialog members=members notices=notices on_close=on_member_form_close/>
                </Show>
                <Show when=move || show_document_form.get()>
                    <AddDocumentDialog
                        members=members
                        documents=documents
                        filters=filters
                        notices=notices
                        refresh=refresh
                        on_close=on_document_form_close
                    />
                </Show>
                <Show when=move || delete_target.get().is_some()>
                    <ConfirmDeleteDialog
                        target=delete_target
                        members=members
                        documents=documents
                        notices=notices
                        on_cancel=on_delete_cancel
                    />
                </Show>
                {move || {
                    viewer.get().map(|(url, content_type)| {
                        view! { <FileViewerModal url=url content_type=content_type on_close=on_viewer_close/> }
                    })
                }}
                {move || {
                    share_target.get().map(|(kind, id)| {
                        view! { <ShareModal kind=kind document_id=id on_close=on_share_close/> }
                    })
                }}
            </div>
        </Show>
    }
}

/// Modal dialog for adding a family member.
#[component]
fn AddMemberDialog(
    members: RwSignal<MembersState>,
    notices: RwSignal<NotifyState>,
    on_close: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let relationship = RwSignal::new(None::<Relationship>);
    let saving = RwSignal::new(false);

    let submit = move |_| {
        if saving.get() {
            return;
        }
        let member_name = name.get().trim().to_owned();
        let Some(selected_relationship) = relationship.get() else {
            notify::error(notices, "Please fill required fields");
            return;
        };
        if member_name.is_empty() {
            notify::error(notices, "Please fill required fields");
            return;
        }
        if members.with_untracked(|state| state.has_name(&member_name)) {
            notify::error(notices, "Member with this name already exists");
            return;
        }
        saving.set(true);
        let payload = NewMemberPayload {
            name: member_name,
            age: age.get_untracked(),
            gender: gender.get_untracked(),
            relationship: selected_relationship,
        };
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            match crate::net::documents::add_member(&payload).await {
                Ok(record) => {
                    members.update(|state| state.items.push(record));
                    notify::success(notices, "Member added successfully");
                }
                Err(message) => {
                    notify::error(notices, format!("Failed to add member: {message}"));
                    // Keep the attempted entry visible, explicitly tagged
                    // instead of posing as persisted.
                    let record = local_member(
                        local_member_id(),
                        &payload.name,
                        &payload.age,
                        &payload.gender,
                        payload.relationship,
                    );
                    members.update(|state| state.items.push(record));
                }
            }
            saving.set(false);
            on_close.run(());
        });
        #[cfg(not(feature = "web"))]
        {
            let _ = payload;
            saving.set(false);
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>"Add Family Member"</h2>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </header>
                <label class="dialog__label">
                    "Full Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter member's full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Age"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="Enter age"
                        prop:value=move || age.get()
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Gender"
                    <select
                        class="dialog__input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="Male">"Male"</option>
                        <option value="Female">"Female"</option>
                        <option value="Other">"Other"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Relationship"
                    <select
                        class="dialog__input"
                        prop:value=move || relationship.get().map_or("", Relationship::label)
                        on:change=move |ev| relationship.set(Relationship::from_label(&event_target_value(&ev)))
                    >
                        <option value="">"Select relationship"</option>
                        {Relationship::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.label()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=submit
                        disabled=move || {
                            saving.get() || name.get().trim().is_empty() || relationship.get().is_none()
                        }
                    >
                        "Add Member"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for uploading a document.
#[component]
fn AddDocumentDialog(
    members: RwSignal<MembersState>,
    documents: RwSignal<DocumentsState>,
    filters: RwSignal<FiltersState>,
    notices: RwSignal<NotifyState>,
    refresh: RwSignal<u64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let doc_kind = RwSignal::new(None::<DocKind>);
    let doc_name = RwSignal::new(String::new());
    let doc_date = RwSignal::new(String::new());
    let doc_tag = RwSignal::new(String::new());
    let doc_member = RwSignal::new(String::new());
    let file = RwSignal::new(None::<SelectedFile>);
    let saving = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "web")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(picked) = input.files().and_then(|list| list.get(0)) {
                file.set(Some(SelectedFile::from_web(picked)));
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = ev;
        }
    };

    let submit = move |_| {
        if saving.get() {
            return;
        }
        let kind = match validate_upload(
            doc_kind.get(),
            &doc_member.get(),
            &doc_name.get(),
            &doc_tag.get(),
            file.with(|f| f.is_some()),
        ) {
            Ok(kind) => kind,
            Err(message) => {
                notify::error(notices, message);
                return;
            }
        };
        saving.set(true);
        let name = doc_name.get_untracked();
        let date = doc_date.get_untracked();
        let tag = doc_tag.get_untracked();
        let member_id = doc_member.get_untracked();
        let Some(selected_file) = file.get_untracked() else {
            saving.set(false);
            return;
        };
        let fields = upload_fields(kind, &name, &member_id, &tag, &date);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            match crate::net::documents::upload_document(kind, &fields, &selected_file).await {
                Ok(()) => {
                    notify::success(notices, format!("{} uploaded successfully!", kind.label()));
                    // Show the full document set again, including the new
                    // upload.
                    filters.update(|f| f.clear());
                    refresh.update(|n| *n += 1);
                }
                Err(message) => {
                    notify::error(
                        notices,
                        format!("Failed to upload {}: {message}", kind.label().to_lowercase()),
                    );
                    documents.update(|state| {
                        let display_id = state.fallback_display_id();
                        match kind {
                            DocKind::Prescription => {
                                let record = local_prescription(
                                    display_id, &name, &date, &tag, &member_id, &selected_file,
                                );
                                state.prescriptions.push(record);
                            }
                            DocKind::Report => {
                                let record = local_report(
                                    display_id, &name, &date, &tag, &member_id, &selected_file,
                                );
                                state.reports.push(record);
                            }
                        }
                    });
                }
            }
            saving.set(false);
            on_close.run(());
        });
        #[cfg(not(feature = "web"))]
        {
            let _ = (fields, selected_file, documents, filters, refresh);
            saving.set(false);
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>"Add Document"</h2>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </header>
                <label class="dialog__label">
                    "Document Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Document Name"
                        prop:value=move || doc_name.get()
                        on:input=move |ev| doc_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || doc_date.get()
                        on:input=move |ev| doc_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Document Type"
                    <select
                        class="dialog__input"
                        prop:value=move || doc_kind.get().map_or("", DocKind::label)
                        on:change=move |ev| doc_kind.set(DocKind::from_label(&event_target_value(&ev)))
                    >
                        <option value="">"Select Document Type"</option>
                        <option value="Prescription">"Prescription"</option>
                        <option value="Report">"Report"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Tag"
                    <select
                        class="dialog__input"
                        prop:value=move || doc_tag.get()
                        on:change=move |ev| doc_tag.set(event_target_value(&ev))
                    >
                        <option value="">"Select Tag"</option>
                        {TAG_OPTIONS
                            .into_iter()
                            .map(|tag| view! { <option value=tag>{tag}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Family Member"
                    <select
                        class="dialog__input"
                        prop:value=move || doc_member.get()
                        on:change=move |ev| doc_member.set(event_target_value(&ev))
                    >
                        <option value="">"Select Member"</option>
                        {move || {
                            members
                                .get()
                                .items
                                .into_iter()
                                .map(|member| {
                                    let label = if member.relationship == Relationship::Myself {
                                        member.name.clone()
                                    } else {
                                        format!("{} - {}", member.name, member.relationship.label())
                                    };
                                    view! { <option value=member.id.clone()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "File"
                    <input class="dialog__input" type="file" on:change=on_file_change/>
                </label>
                <Show when=move || file.with(|f| f.is_some())>
                    <p class="dialog__file-name">
                        {move || file.get().map(|f| f.name).unwrap_or_default()}
                    </p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit disabled=move || saving.get()>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation step for member and document deletes. Local state is
/// only mutated after the backend confirms; a failed delete leaves the
/// dialog open with the list untouched.
#[component]
fn ConfirmDeleteDialog(
    target: RwSignal<Option<DeleteTarget>>,
    members: RwSignal<MembersState>,
    documents: RwSignal<DocumentsState>,
    notices: RwSignal<NotifyState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let deleting = RwSignal::new(false);

    let submit = move |_| {
        if deleting.get() {
            return;
        }
        let Some(current) = target.get_untracked() else {
            return;
        };
        deleting.set(true);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            let result = match current.kind {
                DeleteKind::Member => crate::net::documents::delete_member(&current.id).await,
                DeleteKind::Prescription => {
                    crate::net::documents::delete_document(DocKind::Prescription, &current.id).await
                }
                DeleteKind::Report => {
                    crate::net::documents::delete_document(DocKind::Report, &current.id).await
                }
            };
            match result {
                Ok(()) => {
                    match current.kind {
                        DeleteKind::Member => members.update(|state| state.remove(&current.id)),
                        DeleteKind::Prescription => {
                            documents.update(|state| state.remove_prescription(&current.id));
                        }
                        DeleteKind::Report => {
                            documents.update(|state| state.remove_report(&current.id));
                        }
                    }
                    target.set(None);
                }
                Err(message) => {
                    notify::error(notices, format!("Failed to delete {}: {message}", current.kind.noun()));
                }
            }
            deleting.set(false);
        });
        #[cfg(not(feature = "web"))]
        {
            let _ = (current, members, documents, notices);
            deleting.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2 class="dialog__danger-title">"Confirm Delete"</h2>
                    <button class="btn dialog__close" on:click=move |_| on_cancel.run(()) title="Close">
                        "✕"
                    </button>
                </header>
                <p class="dialog__danger">
                    {move || target.get().as_ref().map(delete_prompt).unwrap_or_default()}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=submit disabled=move || deleting.get()>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
