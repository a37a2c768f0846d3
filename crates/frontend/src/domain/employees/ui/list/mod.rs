use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::employee::{Employee, EmployeeDraft, EmployeeStatus};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_suggest::SearchSuggest;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::date_utils::format_date;
use crate::shared::export::{escape_html, print_document};
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};
use crate::shared::toast::use_toasts;

use super::details::EmployeeDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/employees");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 9;

#[component]
pub fn EmployeesList() -> impl IntoView {
    let toasts = use_toasts();
    let panel: Panel<Employee> = Panel::new(CLIENT, PagingMode::Server, PAGE_SIZE);
    let form = RwSignal::new(FormState::<EmployeeDraft>::closed());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<EmployeeStatus>>(None);

    // Conjoin all active facets into one predicate and re-derive from the
    // snapshot; the panel resets to page 1 on every install.
    let install_filter = move || {
        let q = search.get_untracked();
        let status = status_filter.get_untracked();
        panel.set_filter(Arc::new(move |e: &Employee| {
            filters::text_contains(&e.name, &q) && status.map_or(true, |s| e.status == s)
        }));
    };

    let on_search = move |value: String| {
        set_search.set(value);
        install_filter();
    };

    let suggestions = Signal::derive(move || {
        let q = search.get();
        panel
            .state
            .with(|s| filters::suggestions(s.original.iter().map(|e| e.name.as_str()), &q))
    });

    let open_create = move |_| form.update(|f| f.open_create());

    let open_edit = move |id: String| {
        let record = panel.snapshot().into_iter().find(|e| e.id == id);
        if let Some(record) = record {
            form.update(|f| f.open_edit(id, EmployeeDraft::from_record(&record)));
        }
    };

    let print_letter = move |employee: Employee| {
        let body = format!(
            "<h1>Experience Letter</h1>\
             <p>This is to certify that <b>{}</b> has been working with us as \
             <b>{}</b> in the {} department since {}.</p>\
             <p>We wish them continued success.</p>\
             <p>HR Department</p>",
            escape_html(&employee.name),
            escape_html(&employee.position),
            escape_html(&employee.department),
            format_date(&employee.joining_date),
        );
        if let Err(err) = print_document("Experience Letter", &body) {
            log::error!("print failed: {}", err);
            toasts.error("Could not open the print window");
        }
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Employees"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=open_create>
                        {icon("plus")}
                        {"New employee"}
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
                <SearchSuggest
                    value=search
                    suggestions=suggestions
                    on_change=Callback::new(on_search)
                    placeholder="Search by name..."
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        set_status_filter.set(match event_target_value(&ev).as_str() {
                            "active" => Some(EmployeeStatus::Active),
                            "onLeave" => Some(EmployeeStatus::OnLeave),
                            "resigned" => Some(EmployeeStatus::Resigned),
                            _ => None,
                        });
                        install_filter();
                    }
                >
                    <option value="all">{"All statuses"}</option>
                    <option value="active">{"Active"}</option>
                    <option value="onLeave">{"On leave"}</option>
                    <option value="resigned">{"Resigned"}</option>
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
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"Position"}</th>
                                <th class="table__header-cell">{"Department"}</th>
                                <th class="table__header-cell">{"Email"}</th>
                                <th class="table__header-cell">{"Phone"}</th>
                                <th class="table__header-cell">{"Joined"}</th>
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
                                        .map(|(i, employee)| {
                                            let id_for_edit = employee.id.clone();
                                            let id_for_delete = employee.id.clone();
                                            let for_letter = employee.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{employee.name.clone()}</td>
                                                    <td class="table__cell">{employee.position.clone()}</td>
                                                    <td class="table__cell">{employee.department.clone()}</td>
                                                    <td class="table__cell">{employee.email.clone()}</td>
                                                    <td class="table__cell">{employee.phone.clone()}</td>
                                                    <td class="table__cell">{format_date(&employee.joining_date)}</td>
                                                    <td class="table__cell">{employee.status.label()}</td>
                                                    <td class="table__cell table__cell--actions">
                                                        <button
                                                            class="icon-button"
                                                            title="Edit"
                                                            on:click=move |_| open_edit(id_for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </button>
                                                        <button
                                                            class="icon-button"
                                                            title="Experience letter"
                                                            on:click=move |_| print_letter(for_letter.clone())
                                                        >
                                                            {icon("print")}
                                                        </button>
                                                        <button
                                                            class="icon-button icon-button--danger"
                                                            title="Delete"
                                                            on:click=move |_| {
                                                                panel.remove(
                                                                    id_for_delete.clone(),
                                                                    "Delete this employee?",
                                                                )
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

            <EmployeeDetails form=form panel=panel />
        </div>
    }
}
