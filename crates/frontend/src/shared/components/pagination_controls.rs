use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::resource::PageCursor;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based; requests outside the valid range are swallowed by
/// the cursor, so the buttons only ever issue adjacent or edge pages.
#[component]
pub fn PaginationControls(
    /// Current cursor (page, page size, totals)
    #[prop(into)]
    cursor: Signal<PageCursor>,

    /// Callback when a page is requested
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let page = move || cursor.get().page;
    let total_pages = move || cursor.get().total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = page();
                    if p > 1 {
                        on_page_change.run(p - 1);
                    }
                }
                disabled=move || page() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let cursor = cursor.get();
                    format!(
                        "{} / {} ({})",
                        cursor.page,
                        cursor.total_pages().max(1),
                        cursor.total_items
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = page();
                    if p < total_pages() {
                        on_page_change.run(p + 1);
                    }
                }
                disabled=move || page() >= total_pages()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || page() >= total_pages()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
