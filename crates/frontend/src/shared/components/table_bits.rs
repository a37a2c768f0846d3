use leptos::prelude::*;

/// Explicit empty-state row; every list shows it instead of a blank body.
#[component]
pub fn NoDataRow(colspan: usize) -> impl IntoView {
    view! {
        <tr class="table__row table__row--empty">
            <td class="table__cell table__cell--empty" colspan=colspan>
                {"No data found"}
            </td>
        </tr>
    }
}
