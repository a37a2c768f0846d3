use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::{complete_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| "admin".to_string())
    };

    let on_logout = move |_| {
        complete_logout(set_auth_state);
        navigate("/login", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("briefcase")}
                <span>"HR Back Office"</span>
            </div>
            <div class="top-header__user">
                <span class="top-header__username">{username}</span>
                <button class="button button--ghost" on:click=on_logout title="Sign out">
                    {icon("logout")}
                    {"Sign out"}
                </button>
            </div>
        </header>
    }
}
