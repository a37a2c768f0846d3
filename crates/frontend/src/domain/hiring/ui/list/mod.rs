use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::dates::{parse_record_datetime, DateRange};
use contracts::domain::candidate::{Candidate, CandidateDraft, Stage};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_suggest::SearchSuggest;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};

use super::details::CandidateDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/candidates");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 8;

#[component]
pub fn HiringBoard() -> impl IntoView {
    let panel: Panel<Candidate> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<CandidateDraft>::closed());
    let (stage_tab, set_stage_tab) = signal(Stage::Applied);
    let (search, set_search) = signal(String::new());
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());

    // Every facet change rebuilds the predicate against the snapshot;
    // picking a suggestion goes through the same path as typing, so the
    // pass never narrows an already-filtered view.
    let install_filter = move || {
        let stage = stage_tab.get_untracked();
        let q = search.get_untracked();
        let range = DateRange::parse(&date_from.get_untracked(), &date_to.get_untracked());
        panel.set_filter(Arc::new(move |c: &Candidate| {
            if c.stage != stage {
                return false;
            }
            if !filters::text_contains(&c.name, &q) {
                return false;
            }
            match &range {
                Some(range) => c
                    .interview_at
                    .as_deref()
                    .and_then(parse_record_datetime)
                    .map_or(false, |at| range.contains(at)),
                None => true,
            }
        }));
    };

    let select_tab = move |stage: Stage| {
        set_stage_tab.set(stage);
        install_filter();
    };

    let on_search = move |value: String| {
        set_search.set(value);
        install_filter();
    };

    let suggestions = Signal::derive(move || {
        let q = search.get();
        panel
            .state
            .with(|s| filters::suggestions(s.original.iter().map(|c| c.name.as_str()), &q))
    });

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|c| c.id == id) {
            form.update(|f| f.open_edit(id, CandidateDraft::from_record(&record)));
        }
    };

    // Tabs start on Applied; install the matching predicate before the
    // first response lands.
    install_filter();
    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Hiring"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New candidate"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| panel.load()
                        disabled=move || panel.loading.get()
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="tabs">
                {Stage::ALL
                    .into_iter()
                    .map(|stage| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || stage_tab.get() == stage
                                on:click=move |_| select_tab(stage)
                            >
                                {stage.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="filter-bar">
                <SearchSuggest
                    value=search
                    suggestions=suggestions
                    on_change=Callback::new(on_search)
                    placeholder="Search by name..."
                />
                <DateRangePicker
                    date_from=date_from
                    date_to=date_to
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        set_date_from.set(from);
                        set_date_to.set(to);
                        install_filter();
                    })
                    label="Interview".to_string()
                />
            </div>

            <Show
                when=move || panel.loaded.get()
                fallback=|| view! { <div class="page-spinner"><Spinner /></div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"#"}</th>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"Position"}</th>
                                <th class="table__header-cell">{"Experience"}</th>
                                <th class="table__header-cell">{"Applied"}</th>
                                <th class="table__header-cell">{"Interview"}</th>
                                <th class="table__header-cell">{"Resume"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = panel.page_items();
                                let cursor = panel.cursor();
                                if rows.is_empty() {
                                    view! { <NoDataRow colspan=COLUMNS /> }.into_any()
                                } else {
                                    rows.into_iter()
                                        .enumerate()
                                        .map(|(i, candidate)| {
                                            let id_for_edit = candidate.id.clone();
                                            let id_for_delete = candidate.id.clone();
                                            let interview = candidate
                                                .interview_at
                                                .as_deref()
                                                .map(format_datetime)
                                                .unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{candidate.name.clone()}</td>
                                                    <td class="table__cell">{candidate.position.clone()}</td>
                                                    <td class="table__cell">{candidate.experience.clone()}</td>
                                                    <td class="table__cell">{format_date(&candidate.applied_at)}</td>
                                                    <td class="table__cell">{interview}</td>
                                                    <td class="table__cell">
                                                        {if candidate.resume_ref.is_some() { "Uploaded" } else { "-" }}
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <button
                                                            class="icon-button"
                                                            title="Edit"
                                                            on:click=move |_| open_edit(id_for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </button>
                                                        <button
                                                            class="icon-button icon-button--danger"
                                                            title="Delete"
                                                            on:click=move |_| {
                                                                panel.remove(id_for_delete.clone(), "Delete this candidate?")
                                                            }
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    cursor=Signal::derive(move || panel.cursor())
                    on_page_change=Callback::new(move |page| panel.set_page(page))
                />
            </Show>

            <CandidateDetails form=form panel=panel />
        </div>
    }
}
