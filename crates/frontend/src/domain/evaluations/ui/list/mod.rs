use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::evaluation::{Evaluation, EvaluationDraft};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::date_utils::month_label;
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};

use super::details::EvaluationDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/evaluations");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 10;

#[component]
pub fn EvaluationsPage() -> impl IntoView {
    let panel: Panel<Evaluation> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<EvaluationDraft>::closed());
    let (search, set_search) = signal(String::new());
    let (month, set_month) = signal(String::new());

    let install_filter = move || {
        let q = search.get_untracked();
        let m = month.get_untracked();
        panel.set_filter(Arc::new(move |ev: &Evaluation| {
            filters::text_contains(&ev.employee_name, &q) && (m.is_empty() || ev.month == m)
        }));
    };

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|e| e.id == id) {
            form.update(|f| f.open_edit(id, EvaluationDraft::from_record(&record)));
        }
    };

    // Month summary over the filtered view, one bar per entry.
    let summary = Signal::derive(move || {
        let mut rows: Vec<(String, f64, &'static str)> = panel.state.with(|s| {
            s.visible
                .iter()
                .map(|e| (e.employee_name.clone(), e.average(), e.grade().label()))
                .collect()
        });
        rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        rows
    });

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Evaluations"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New evaluation"}
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
                    placeholder="Search by employee..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        install_filter();
                    }
                />
                <input
                    type="month"
                    class="filter-bar__input"
                    prop:value=move || month.get()
                    on:change=move |ev| {
                        set_month.set(event_target_value(&ev));
                        install_filter();
                    }
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
                                <th class="table__header-cell">{"Employee"}</th>
                                <th class="table__header-cell">{"Month"}</th>
                                <th class="table__header-cell">{"Work"}</th>
                                <th class="table__header-cell">{"Leave"}</th>
                                <th class="table__header-cell">{"Time"}</th>
                                <th class="table__header-cell">{"Behaviour"}</th>
                                <th class="table__header-cell">{"Average"}</th>
                                <th class="table__header-cell">{"Grade"}</th>
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
                                        .map(|(i, evaluation)| {
                                            let id_for_edit = evaluation.id.clone();
                                            let id_for_delete = evaluation.id.clone();
                                            let average = evaluation.average();
                                            let grade = evaluation.grade().label();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{evaluation.employee_name.clone()}</td>
                                                    <td class="table__cell">{month_label(&evaluation.month)}</td>
                                                    <td class="table__cell">{evaluation.work}</td>
                                                    <td class="table__cell">{evaluation.leave}</td>
                                                    <td class="table__cell">{evaluation.time}</td>
                                                    <td class="table__cell">{evaluation.behaviour}</td>
                                                    <td class="table__cell">{format!("{:.1}", average)}</td>
                                                    <td class="table__cell">
                                                        <span class="badge badge--info">{grade}</span>
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
                                                                panel.remove(id_for_delete.clone(), "Delete this evaluation?")
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

                // Simple CSS bars; good enough for a per-month comparison
                // without pulling in a chart library.
                <div class="summary">
                    <h2 class="summary__title">{"Monthly summary"}</h2>
                    {move || {
                        summary
                            .get()
                            .into_iter()
                            .map(|(name, average, grade)| {
                                let width = format!("width: {:.1}%;", average.clamp(0.0, 100.0));
                                view! {
                                    <div class="summary__row">
                                        <span class="summary__name">{name}</span>
                                        <div class="summary__bar-track">
                                            <div class="summary__bar" style=width></div>
                                        </div>
                                        <span class="summary__value">
                                            {format!("{:.1} ({})", average, grade)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <EvaluationDetails form=form panel=panel />
        </div>
    }
}
