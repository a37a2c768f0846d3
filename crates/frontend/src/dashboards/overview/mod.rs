pub mod reminders;

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

use contracts::domain::candidate::{Candidate, Stage};
use contracts::domain::employee::{Employee, EmployeeStatus};
use contracts::domain::leave::{LeaveRequest, LeaveStatus};

use crate::shared::api_client::ResourceClient;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

use self::reminders::{compute_reminders, mark_shown_today, should_show_today, Reminder};

const EMPLOYEES: ResourceClient = ResourceClient::new("/api/employees");
const LEAVE: ResourceClient = ResourceClient::new("/api/leave");
const CANDIDATES: ResourceClient = ResourceClient::new("/api/candidates");

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let toasts = use_toasts();
    let (loaded, set_loaded) = signal(false);
    let (employees, set_employees) = signal::<Vec<Employee>>(Vec::new());
    let (leaves, set_leaves) = signal::<Vec<LeaveRequest>>(Vec::new());
    let (candidates, set_candidates) = signal::<Vec<Candidate>>(Vec::new());
    let (queue, set_queue) = signal::<Vec<Reminder>>(Vec::new());
    let (popup_open, set_popup_open) = signal(false);

    // One combined initial fetch; whatever fails just reports a toast and
    // leaves its card at zero.
    spawn_local(async move {
        let today = Utc::now().date_naive();

        match EMPLOYEES.fetch_page::<Employee>(None).await {
            Ok(page) => set_employees.set(page.items),
            Err(err) => {
                log::error!("employee fetch failed: {}", err);
                toasts.error(err.user_message());
            }
        }
        match LEAVE.fetch_page::<LeaveRequest>(None).await {
            Ok(page) => set_leaves.set(page.items),
            Err(err) => {
                log::error!("leave fetch failed: {}", err);
                toasts.error(err.user_message());
            }
        }
        match CANDIDATES.fetch_page::<Candidate>(None).await {
            Ok(page) => set_candidates.set(page.items),
            Err(err) => {
                log::error!("candidate fetch failed: {}", err);
                toasts.error(err.user_message());
            }
        }

        // The reminder queue is derived once, after the records are in,
        // and fires at most once per day.
        let reminders = compute_reminders(
            today,
            &leaves.get_untracked(),
            &candidates.get_untracked(),
        );
        if !reminders.is_empty() && should_show_today(today) {
            mark_shown_today(today);
            set_queue.set(reminders);
            set_popup_open.set(true);
        }

        set_loaded.set(true);
    });

    let active_count = move || {
        employees
            .get()
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count()
    };
    let on_leave_count = move || {
        employees
            .get()
            .iter()
            .filter(|e| e.status == EmployeeStatus::OnLeave)
            .count()
    };
    let pending_leave_count = move || {
        leaves
            .get()
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .count()
    };
    let interview_count = move || {
        candidates
            .get()
            .iter()
            .filter(|c| c.stage == Stage::Interview)
            .count()
    };

    view! {
        <div class="page page--dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Dashboard"}</h1>
                </div>
            </div>

            <Show
                when=move || loaded.get()
                fallback=|| view! { <div class="page-spinner"><Spinner /></div> }
            >
                <div class="stat-grid">
                    <div class="stat-card">
                        {icon("users")}
                        <div class="stat-card__value">{active_count}</div>
                        <div class="stat-card__label">{"Active employees"}</div>
                    </div>
                    <div class="stat-card">
                        {icon("calendar")}
                        <div class="stat-card__value">{on_leave_count}</div>
                        <div class="stat-card__label">{"On leave"}</div>
                    </div>
                    <div class="stat-card">
                        {icon("file-text")}
                        <div class="stat-card__value">{pending_leave_count}</div>
                        <div class="stat-card__label">{"Pending leave requests"}</div>
                    </div>
                    <div class="stat-card">
                        {icon("briefcase")}
                        <div class="stat-card__value">{interview_count}</div>
                        <div class="stat-card__label">{"Candidates in interview"}</div>
                    </div>
                </div>

                <Show when=move || popup_open.get()>
                    <div class="modal-overlay" on:click=move |_| set_popup_open.set(false)>
                        <div class="modal-surface" on:click=move |ev| ev.stop_propagation()>
                            <div class="modal-surface__header">
                                <h3>{"Today's reminders"}</h3>
                                <button
                                    class="modal-surface__close"
                                    on:click=move |_| set_popup_open.set(false)
                                    title="Close"
                                >
                                    {icon("x")}
                                </button>
                            </div>
                            <ul class="reminder-list">
                                {move || {
                                    queue
                                        .get()
                                        .into_iter()
                                        .map(|r| view! { <li class="reminder-list__item">{r.text()}</li> })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
