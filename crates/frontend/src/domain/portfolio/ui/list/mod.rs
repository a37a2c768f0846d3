use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::portfolio::{PortfolioDraft, PortfolioItem};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};

use super::details::PortfolioDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/portfolio");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 7;

#[component]
pub fn PortfolioList() -> impl IntoView {
    let panel: Panel<PortfolioItem> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<PortfolioDraft>::closed());
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let install_filter = move || {
        let q = search.get_untracked();
        let cat = category.get_untracked();
        panel.set_filter(Arc::new(move |item: &PortfolioItem| {
            filters::text_contains(&item.title, &q) && (cat.is_empty() || item.category == cat)
        }));
    };

    // Category options come from the snapshot, so the dropdown always
    // matches what is actually published.
    let categories = Signal::derive(move || {
        let mut cats: Vec<String> = panel
            .state
            .with(|s| s.original.iter().map(|i| i.category.clone()).collect());
        cats.sort();
        cats.dedup();
        cats
    });

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|p| p.id == id) {
            form.update(|f| f.open_edit(id, PortfolioDraft::from_record(&record)));
        }
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Portfolio"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New item"}
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
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        install_filter();
                    }
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        set_category.set(if v == "all" { String::new() } else { v });
                        install_filter();
                    }
                >
                    <option value="all">{"All categories"}</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|cat| view! { <option value=cat.clone()>{cat.clone()}</option> })
                            .collect_view()
                    }}
                </select>
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
                                <th class="table__header-cell">{"Category"}</th>
                                <th class="table__header-cell">{"Description"}</th>
                                <th class="table__header-cell">{"Link"}</th>
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
                                        .map(|(i, item)| {
                                            let id_for_edit = item.id.clone();
                                            let id_for_delete = item.id.clone();
                                            let link = item.link.clone().unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{item.title.clone()}</td>
                                                    <td class="table__cell">{item.category.clone()}</td>
                                                    <td class="table__cell">{item.description.clone()}</td>
                                                    <td class="table__cell">{link}</td>
                                                    <td class="table__cell">
                                                        {if item.image_ref.is_some() { "Uploaded" } else { "-" }}
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
                                                                panel.remove(id_for_delete.clone(), "Delete this portfolio item?")
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

            <PortfolioDetails form=form panel=panel />
        </div>
    }
}
