use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::position::{OpenPosition, PositionDraft, PositionStatus};

use crate::shared::api_client::ResourceClient;
use crate::shared::colors::badge_color;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::icons::icon;
use crate::shared::resource::{FormState, PagingMode, Panel};

use super::details::PositionDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/positions");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 8;

#[component]
pub fn PositionsList() -> impl IntoView {
    let panel: Panel<OpenPosition> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<PositionDraft>::closed());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<PositionStatus>>(None);

    let install_filter = move || {
        let q = search.get_untracked();
        let status = status_filter.get_untracked();
        panel.set_filter(Arc::new(move |p: &OpenPosition| {
            p.matches_query(&q) && status.map_or(true, |s| p.status == s)
        }));
    };

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|p| p.id == id) {
            form.update(|f| f.open_edit(id, PositionDraft::from_record(&record)));
        }
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Open positions"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New position"}
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
                    placeholder="Search department, position or job type..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        install_filter();
                    }
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        set_status_filter.set(match event_target_value(&ev).as_str() {
                            "open" => Some(PositionStatus::Open),
                            "closed" => Some(PositionStatus::Closed),
                            _ => None,
                        });
                        install_filter();
                    }
                >
                    <option value="all">{"All"}</option>
                    <option value="open">{"Open"}</option>
                    <option value="closed">{"Closed"}</option>
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
                                <th class="table__header-cell">{"Position"}</th>
                                <th class="table__header-cell">{"Department"}</th>
                                <th class="table__header-cell">{"Job type"}</th>
                                <th class="table__header-cell">{"Experience"}</th>
                                <th class="table__header-cell">{"Duties"}</th>
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
                                        .map(|(i, position)| {
                                            let id_for_edit = position.id.clone();
                                            let id_for_delete = position.id.clone();
                                            // Department badges keep their color across
                                            // reloads via the persisted label cache.
                                            let badge_style = format!(
                                                "background: {};",
                                                badge_color(&position.department)
                                            );
                                            let status_class = match position.status {
                                                PositionStatus::Open => "badge badge--success",
                                                PositionStatus::Closed => "badge badge--muted",
                                            };
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{position.position.clone()}</td>
                                                    <td class="table__cell">
                                                        <span class="badge badge--label" style=badge_style>
                                                            {position.department.clone()}
                                                        </span>
                                                    </td>
                                                    <td class="table__cell">{position.job_type.clone()}</td>
                                                    <td class="table__cell">{position.experience.clone()}</td>
                                                    <td class="table__cell">{position.duties.len()}</td>
                                                    <td class="table__cell">
                                                        <span class=status_class>{position.status.label()}</span>
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
                                                                panel.remove(id_for_delete.clone(), "Delete this position?")
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

            <PositionDetails form=form panel=panel />
        </div>
    }
}
