use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::culture::{CultureDraft, CultureEntry};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};

use super::details::CultureDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/culture");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 5;

#[component]
pub fn CultureList() -> impl IntoView {
    let panel: Panel<CultureEntry> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<CultureDraft>::closed());
    let (search, set_search) = signal(String::new());

    let on_search = move |value: String| {
        set_search.set(value.clone());
        panel.set_filter(Arc::new(move |entry: &CultureEntry| {
            filters::text_contains(&entry.title, &value)
        }));
    };

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|c| c.id == id) {
            form.update(|f| f.open_edit(id, CultureDraft::from_record(&record)));
        }
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Culture"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New entry"}
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
                    placeholder="Search by title..."
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
                                <th class="table__header-cell">{"Title"}</th>
                                <th class="table__header-cell">{"Description"}</th>
                                <th class="table__header-cell">{"Image"}</th>
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
                                        .map(|(i, entry)| {
                                            let id_for_edit = entry.id.clone();
                                            let id_for_delete = entry.id.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{entry.title.clone()}</td>
                                                    <td class="table__cell">{entry.description.clone()}</td>
                                                    <td class="table__cell">
                                                        {if entry.image_ref.is_some() { "Uploaded" } else { "-" }}
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
                                                                panel.remove(id_for_delete.clone(), "Delete this culture entry?")
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

            <CultureDetails form=form panel=panel />
        </div>
    }
}
