use std::sync::Arc;

use leptos::prelude::*;
use thaw::Spinner;

use contracts::domain::salary::{SalaryDraft, SalaryRecord};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::date_utils::month_label;
use crate::shared::export::{escape_html, export_csv, print_document, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};
use crate::shared::toast::use_toasts;

use super::details::SalaryDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/salary");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 9;

impl CsvExportable for SalaryRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Employee", "Month", "Basic", "Allowances", "Deductions", "Net pay"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee_name.clone(),
            self.month.clone(),
            format!("{:.2}", self.basic),
            format!("{:.2}", self.allowances),
            format!("{:.2}", self.deductions),
            format!("{:.2}", self.net_pay),
        ]
    }
}

fn slip_html(record: &SalaryRecord) -> String {
    format!(
        "<h1>Salary Slip {}</h1>\
         <p><b>{}</b></p>\
         <table>\
         <tr><th>Basic</th><td>{:.2}</td></tr>\
         <tr><th>Allowances</th><td>{:.2}</td></tr>\
         <tr><th>Deductions</th><td>{:.2}</td></tr>\
         <tr><th>Net pay</th><td><b>{:.2}</b></td></tr>\
         </table>",
        escape_html(&month_label(&record.month)),
        escape_html(&record.employee_name),
        record.basic,
        record.allowances,
        record.deductions,
        record.net_pay,
    )
}

#[component]
pub fn SalaryList() -> impl IntoView {
    let toasts = use_toasts();
    let panel: Panel<SalaryRecord> = Panel::new(CLIENT, PagingMode::Server, PAGE_SIZE);
    let form = RwSignal::new(FormState::<SalaryDraft>::closed());
    let (search, set_search) = signal(String::new());
    let (month, set_month) = signal(String::new());

    let install_filter = move || {
        let q = search.get_untracked();
        let m = month.get_untracked();
        panel.set_filter(Arc::new(move |record: &SalaryRecord| {
            filters::text_contains(&record.employee_name, &q)
                && (m.is_empty() || record.month == m)
        }));
    };

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|r| r.id == id) {
            form.update(|f| f.open_edit(id, SalaryDraft::from_record(&record)));
        }
    };

    let export_report = move |_| {
        let rows = panel.state.with_untracked(|s| s.visible.clone());
        match export_csv(&rows, "salary-report.csv") {
            Ok(()) => toasts.success("Salary report exported"),
            Err(err) => toasts.error(err),
        }
    };

    let print_slip = move |record: SalaryRecord| {
        if let Err(err) = print_document("Salary Slip", &slip_html(&record)) {
            log::error!("print failed: {}", err);
            toasts.error("Could not open the print window");
        }
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Salary"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New entry"}
                    </button>
                    <button class="button button--secondary" on:click=export_report>
                        {icon("download")}
                        {"Export CSV"}
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
                                <th class="table__header-cell">{"Basic"}</th>
                                <th class="table__header-cell">{"Allowances"}</th>
                                <th class="table__header-cell">{"Deductions"}</th>
                                <th class="table__header-cell">{"Net pay"}</th>
                                <th class="table__header-cell">{"Slip"}</th>
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
                                        .map(|(i, record)| {
                                            let id_for_edit = record.id.clone();
                                            let id_for_delete = record.id.clone();
                                            let for_print = record.clone();
                                            let has_slip = record.slip_ref.is_some();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{record.employee_name.clone()}</td>
                                                    <td class="table__cell">{month_label(&record.month)}</td>
                                                    <td class="table__cell">{format!("{:.2}", record.basic)}</td>
                                                    <td class="table__cell">{format!("{:.2}", record.allowances)}</td>
                                                    <td class="table__cell">{format!("{:.2}", record.deductions)}</td>
                                                    <td class="table__cell">{format!("{:.2}", record.net_pay)}</td>
                                                    <td class="table__cell">
                                                        {if has_slip { "Uploaded" } else { "-" }}
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <button
                                                            class="icon-button"
                                                            title="Print slip"
                                                            on:click=move |_| print_slip(for_print.clone())
                                                        >
                                                            {icon("print")}
                                                        </button>
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
                                                                panel.remove(id_for_delete.clone(), "Delete this salary entry?")
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

            <SalaryDetails form=form panel=panel />
        </div>
    }
}
