use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // App-wide toast stream for gateway outcomes.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
