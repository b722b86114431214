//! Filter panel: quick-filter toggles, the three select filters, and
//! active-filter chips.
//!
//! Mutating the filter signal is all this component does; the dashboard
//! owns the refetch reaction.

use leptos::prelude::*;

use crate::state::filters::{FiltersState, TAG_OPTIONS};
use crate::state::members::MembersState;

#[component]
pub fn FilterPanel(
    filters: RwSignal<FiltersState>,
    members: RwSignal<MembersState>,
    /// Reset-all also forces a refetch even when nothing tracked by the
    /// selection key changed.
    on_reset: Callback<()>,
) -> impl IntoView {
    let quick_class = |active: bool| {
        if active { "btn filter-panel__quick filter-panel__quick--on" } else { "btn filter-panel__quick" }
    };

    view! {
        <aside class="filter-panel">
            <header class="filter-panel__header">
                <h3>"Filters"</h3>
                <button class="btn btn--link" on:click=move |_| on_reset.run(())>
                    "Reset All"
                </button>
            </header>

            <div class="filter-panel__quick-grid">
                <button
                    class=move || quick_class(filters.get().quick.last_month)
                    on:click=move |_| filters.update(|f| f.quick.last_month = !f.quick.last_month)
                >
                    "Last Month"
                </button>
                <button
                    class=move || quick_class(filters.get().quick.by_type)
                    on:click=move |_| filters.update(|f| f.quick.by_type = !f.quick.by_type)
                >
                    "By Type"
                </button>
                <button
                    class=move || quick_class(filters.get().quick.by_id)
                    on:click=move |_| filters.update(|f| f.quick.by_id = !f.quick.by_id)
                >
                    "By ID"
                </button>
            </div>

            <label class="filter-panel__label">
                "Document Type"
                <select
                    class="filter-panel__select"
                    prop:value=move || filters.get().doc_type
                    on:change=move |ev| filters.update(|f| f.doc_type = event_target_value(&ev))
                >
                    <option value="">"Select type"</option>
                    <option value="all">"All Documents"</option>
                    <option value="Prescription">"Prescriptions"</option>
                    <option value="Report">"Reports"</option>
                </select>
            </label>

            <label class="filter-panel__label">
                "Family Member"
                <select
                    class="filter-panel__select"
                    prop:value=move || filters.get().member
                    on:change=move |ev| filters.update(|f| f.member = event_target_value(&ev))
                >
                    <option value="">"Select member"</option>
                    <option value="all">"All Members"</option>
                    {move || {
                        members
                            .get()
                            .items
                            .into_iter()
                            .map(|member| {
                                view! { <option value=member.id.clone()>{member.name.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <label class="filter-panel__label">
                "Medical Category"
                <select
                    class="filter-panel__select"
                    prop:value=move || filters.get().tag
                    on:change=move |ev| filters.update(|f| f.tag = event_target_value(&ev))
                >
                    <option value="">"Select category"</option>
                    <option value="all">"All Categories"</option>
                    {TAG_OPTIONS
                        .into_iter()
                        .map(|tag| view! { <option value=tag>{tag}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <Show when=move || filters.get().is_active()>
                <div class="filter-panel__chips">
                    <Show when=move || filters.get().quick.last_month>
                        <span class="chip" on:click=move |_| filters.update(|f| f.quick.last_month = false)>
                            "Last Month ✕"
                        </span>
                    </Show>
                    <Show when=move || filters.get().quick.by_type>
                        <span class="chip" on:click=move |_| filters.update(|f| f.quick.by_type = false)>
                            "By Type ✕"
                        </span>
                    </Show>
                    <Show when=move || filters.get().quick.by_id>
                        <span class="chip" on:click=move |_| filters.update(|f| f.quick.by_id = false)>
                            "By ID ✕"
                        </span>
                    </Show>
                    <Show when=move || {
                        let value = filters.get().doc_type;
                        !value.is_empty() && value != "all"
                    }>
                        <span class="chip" on:click=move |_| filters.update(|f| f.doc_type = String::new())>
                            {move || filters.get().doc_type} " ✕"
                        </span>
                    </Show>
                    <Show when=move || {
                        let value = filters.get().member;
                        !value.is_empty() && value != "all"
                    }>
                        <span class="chip" on:click=move |_| filters.update(|f| f.member = String::new())>
                            {move || members.get().member_name(&filters.get().member)} " ✕"
                        </span>
                    </Show>
                    <Show when=move || {
                        let value = filters.get().tag;
                        !value.is_empty() && value != "all"
                    }>
                        <span class="chip" on:click=move |_| filters.update(|f| f.tag = String::new())>
                            {move || filters.get().tag} " ✕"
                        </span>
                    </Show>
                </div>
            </Show>
        </aside>
    }
}
