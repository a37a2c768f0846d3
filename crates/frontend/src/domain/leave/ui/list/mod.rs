use std::sync::Arc;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

use contracts::dates::DateRange;
use contracts::domain::leave::{LeaveDraft, LeaveRequest, LeaveStatus};

use crate::shared::api_client::ResourceClient;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_bits::NoDataRow;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::resource::{filters, FormState, PagingMode, Panel};
use crate::shared::toast::use_toasts;

use super::details::LeaveDetails;

const CLIENT: ResourceClient = ResourceClient::new("/api/leave");
const PAGE_SIZE: usize = 10;
const COLUMNS: usize = 7;

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// A leave matches the facet when its [start, end] days overlap the
/// selected range at all.
fn overlaps(leave: &LeaveRequest, range: &DateRange) -> bool {
    match (parse_day(&leave.start_date), parse_day(&leave.end_date)) {
        (Some(start), Some(end)) => start <= range.end.date() && end >= range.start.date(),
        _ => false,
    }
}

#[component]
pub fn LeaveList() -> impl IntoView {
    let toasts = use_toasts();
    let panel: Panel<LeaveRequest> = Panel::new(CLIENT, PagingMode::Client, PAGE_SIZE);
    let form = RwSignal::new(FormState::<LeaveDraft>::closed());
    let (search, set_search) = signal(String::new());
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<LeaveStatus>>(None);

    let install_filter = move || {
        let q = search.get_untracked();
        let range = DateRange::parse(&date_from.get_untracked(), &date_to.get_untracked());
        let status = status_filter.get_untracked();
        panel.set_filter(Arc::new(move |leave: &LeaveRequest| {
            filters::text_contains(&leave.name, &q)
                && range.as_ref().map_or(true, |r| overlaps(leave, r))
                && status.map_or(true, |s| leave.status == s)
        }));
    };

    let open_edit = move |id: String| {
        if let Some(record) = panel.snapshot().into_iter().find(|l| l.id == id) {
            form.update(|f| f.open_edit(id, LeaveDraft::from_record(&record)));
        }
    };

    // Approve/reject never opens the modal; it's a one-field PATCH with
    // the usual toast-and-refetch follow-up.
    let set_status = move |id: String, status: LeaveStatus| {
        spawn_local(async move {
            let payload = serde_json::json!({ "status": status });
            match panel
                .client()
                .update::<_, LeaveRequest>(&id, &payload)
                .await
            {
                Ok(_) => {
                    toasts.success(match status {
                        LeaveStatus::Approved => "Leave approved",
                        LeaveStatus::Rejected => "Leave rejected",
                        LeaveStatus::Pending => "Leave updated",
                    });
                    panel.load();
                }
                Err(err) => {
                    log::error!("leave status change failed: {}", err);
                    toasts.error(err.user_message());
                }
            }
        });
    };

    panel.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Leave"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| form.update(|f| f.open_create())>
                        {icon("plus")}
                        {"New leave"}
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
                    placeholder="Search by name..."
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
                            "pending" => Some(LeaveStatus::Pending),
                            "approved" => Some(LeaveStatus::Approved),
                            "rejected" => Some(LeaveStatus::Rejected),
                            _ => None,
                        });
                        install_filter();
                    }
                >
                    <option value="all">{"All statuses"}</option>
                    <option value="pending">{"Pending"}</option>
                    <option value="approved">{"Approved"}</option>
                    <option value="rejected">{"Rejected"}</option>
                </select>
                <DateRangePicker
                    date_from=date_from
                    date_to=date_to
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        set_date_from.set(from);
                        set_date_to.set(to);
                        install_filter();
                    })
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
                                <th class="table__header-cell">{"From"}</th>
                                <th class="table__header-cell">{"To"}</th>
                                <th class="table__header-cell">{"Reason"}</th>
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
                                        .map(|(i, leave)| {
                                            let id_for_edit = leave.id.clone();
                                            let id_for_delete = leave.id.clone();
                                            let id_for_approve = leave.id.clone();
                                            let id_for_reject = leave.id.clone();
                                            let pending = leave.status == LeaveStatus::Pending;
                                            let status_class = match leave.status {
                                                LeaveStatus::Pending => "badge badge--warn",
                                                LeaveStatus::Approved => "badge badge--success",
                                                LeaveStatus::Rejected => "badge badge--danger",
                                            };
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{cursor.row_number(i)}</td>
                                                    <td class="table__cell">{leave.name.clone()}</td>
                                                    <td class="table__cell">{format_date(&leave.start_date)}</td>
                                                    <td class="table__cell">{format_date(&leave.end_date)}</td>
                                                    <td class="table__cell">{leave.reason.clone()}</td>
                                                    <td class="table__cell">
                                                        <span class=status_class>{leave.status.label()}</span>
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <Show when=move || pending>
                                                            <button
                                                                class="icon-button"
                                                                title="Approve"
                                                                on:click={
                                                                    let id = id_for_approve.clone();
                                                                    move |_| set_status(id.clone(), LeaveStatus::Approved)
                                                                }
                                                            >
                                                                {icon("check")}
                                                            </button>
                                                            <button
                                                                class="icon-button"
                                                                title="Reject"
                                                                on:click={
                                                                    let id = id_for_reject.clone();
                                                                    move |_| set_status(id.clone(), LeaveStatus::Rejected)
                                                                }
                                                            >
                                                                {icon("x")}
                                                            </button>
                                                        </Show>
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
                                                                panel.remove(id_for_delete.clone(), "Delete this leave entry?")
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

            <LeaveDetails form=form panel=panel />
        </div>
    }
}
