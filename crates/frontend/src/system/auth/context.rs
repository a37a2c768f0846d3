use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use crate::shared::storage::{self, StoreKey};

/// The token is trusted as-is on the client; presence alone unlocks the
/// app shell and every request carries it as a bearer header.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from localStorage before first paint so a
    // reload does not bounce through /login.
    let initial = AuthState {
        token: storage::auth_token(),
        user: None,
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Login boundary: persist the token, then flip the in-memory state.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, token: String, user: UserInfo) {
    storage::set(StoreKey::AuthToken, &token);
    set_auth_state.set(AuthState {
        token: Some(token),
        user: Some(user),
    });
}

/// Logout boundary: drop the token and every transient section PIN.
pub fn complete_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_auth_state();
    set_auth_state.set(AuthState::default());
}
