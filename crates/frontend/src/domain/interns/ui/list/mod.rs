use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::intern::{Intern, InternDraft, InternStatus};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};

use super::details::InternDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/interns");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 9;

#[component]
pub fn InternsList() -> impl IntoView {
    // Interns are a small collection: fetched once, paged locally.
    let panel: Panel<Intern> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<InternDraft>::closed());
    let (search, set_search) = signal(String::new());

    let on_search = move |value: String| {
        set_search.set(value.clone());
        panel.set_filter(Arc::new(move |i: &Intern| {
            filters::text_contains(&i.name, &value) || filters::text_contains(&i.university, &value)
        }));
    };

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|i| i.id == id) {
            form.update(|f| f.open_edit(id, InternDraft::from_record(&record)));
        }
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Interns"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New intern"}
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

            <div class="filter-bar">
                <input
                    type="text"
                    class="filter-bar__input"
                    placeholder="Search by name or university..."
                    prop:value=move || search.get()
                    on:input=move |ev| on_search(event_target_value(&ev))
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
                                <th class="table__header-cell">{"University"}</th>
                                <th class="table__header-cell">{"Mentor"}</th>
                                <th class="table__header-cell">{"Start"}</th>
                                <th class="table__header-cell">{"Months"}</th>
                                <th class="table__header-cell">{"Status"}</th>
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
                                        .map(|(i, intern)| {
                                            let id_for_edit = intern.id.clone();
                                            let id_for_delete = intern.id.clone();
                                            let status_class = match intern.status {
                                                InternStatus::Ongoing => "badge badge--info",
                                                InternStatus::Completed => "badge badge--muted",
                                                InternStatus::Converted => "badge badge--success",
                                            };
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{intern.name.clone()}</td>
                                                    <td class="table__cell">{intern.position.clone()}</td>
                                                    <td class="table__cell">{intern.university.clone()}</td>
                                                    <td class="table__cell">{intern.mentor.clone()}</td>
                                                    <td class="table__cell">{format_date(&intern.start_date)}</td>
                                                    <td class="table__cell">{intern.duration_months}</td>
                                                    <td class="table__cell">
                                                        <span class=status_class>{intern.status.label()}</span>
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
                                                                panel.remove(id_for_delete.clone(), "Delete this intern?")
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

            <InternDetails form=form panel=panel />
        </div>
    }
}
