use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Route guard for the authenticated shell.
///
/// No token in state means a hard redirect to the login route; the token
/// itself is not inspected further on the client.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
