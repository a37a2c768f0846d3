pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use sidebar::Sidebar;
use top_header::TopHeader;

/// Authenticated application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
