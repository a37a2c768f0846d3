use chrono::Utc;
use leptos::prelude::*;

use contracts::dates::{DatePreset, DateRange};

/// DateRangePicker component - two date inputs plus the named quick-pick
/// buttons (today .. last month). Presets resolve against today's date and
/// report through the same callback as manual edits.
#[component]
pub fn DateRangePicker(
    /// "from" value, yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" value, yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback on any range change (from, to)
    on_change: Callback<(String, String)>,

    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let apply_preset = move |preset: DatePreset| {
        let today = Utc::now().date_naive();
        let range = DateRange::from_preset(preset, today);
        on_change.run((
            range.start.date().format("%Y-%m-%d").to_string(),
            range.end.date().format("%Y-%m-%d").to_string(),
        ));
    };

    view! {
        <div class="date-range-picker">
            {label.map(|l| view! { <span class="date-range-picker__label">{l}</span> })}
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_from.get()
                on:change=move |ev| on_from_change(event_target_value(&ev))
            />
            <span class="date-range-picker__sep">{"to"}</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || date_to.get()
                on:change=move |ev| on_to_change(event_target_value(&ev))
            />
            <div class="date-range-picker__presets">
                {DatePreset::ALL
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                class="button button--ghost"
                                on:click=move |_| apply_preset(preset)
                            >
                                {preset.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
