use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_client::ResourceClient;
use crate::shared::toast::ToastService;

use super::pagination::PageCursor;
use super::seq::RequestSeq;
use super::state::{no_filter, FilterFn, PagingMode, ResourceState};

/// List controller for one resource page.
///
/// Owns the snapshot/view/cursor state, tags every fetch so a stale
/// response is discarded, terminates the loading flag on both outcomes
/// and turns every failure into a toast. Cheap to copy into closures.
pub struct Panel<T: Send + Sync + 'static> {
    pub state: RwSignal<ResourceState<T>>,
    /// First fetch finished (successfully or not); gates the page spinner.
    pub loaded: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    filter: StoredValue<FilterFn<T>>,
    seq: StoredValue<RequestSeq>,
    client: StoredValue<ResourceClient>,
    mode: PagingMode,
    toasts: ToastService,
}

impl<T: Send + Sync + 'static> Clone for Panel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Panel<T> {}

impl<T> Panel<T>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(client: ResourceClient, mode: PagingMode, page_size: usize) -> Self {
        Self {
            state: RwSignal::new(ResourceState::new(mode, page_size)),
            loaded: RwSignal::new(false),
            loading: RwSignal::new(false),
            filter: StoredValue::new(no_filter()),
            seq: StoredValue::new(RequestSeq::new()),
            client: StoredValue::new(client),
            mode,
            toasts: crate::shared::toast::use_toasts(),
        }
    }

    pub fn client(&self) -> ResourceClient {
        self.client.get_value()
    }

    fn page_param(&self) -> Option<usize> {
        match self.mode {
            PagingMode::Server => Some(self.state.with_untracked(|s| s.cursor.page)),
            PagingMode::Client => None,
        }
    }

    /// Fetch the collection (or the current page in server mode). A
    /// response is applied only if no newer fetch has been issued since.
    pub fn load(&self) {
        let panel = *self;
        let tag = panel.seq.try_update_value(|s| s.issue()).unwrap_or(0);
        let page = panel.page_param();
        panel.loading.set(true);

        spawn_local(async move {
            let result = panel.client.get_value().fetch_page::<T>(page).await;
            if !panel.seq.with_value(|s| s.is_latest(tag)) {
                // A newer request owns the list now.
                return;
            }
            match result {
                Ok(page) => {
                    let filter = panel.filter.get_value();
                    panel
                        .state
                        .update(|s| s.ingest(page.items, Some(page.total_items), &filter));
                }
                Err(err) => {
                    log::error!("list fetch failed: {}", err);
                    panel.state.update(|s| s.clear());
                    panel.toasts.error(err.user_message());
                }
            }
            panel.loaded.set(true);
            panel.loading.set(false);
        });
    }

    /// Install a new predicate set: re-derive the view from the snapshot
    /// and reset to page 1. Server-paged lists refetch page 1 instead.
    pub fn set_filter(&self, filter: FilterFn<T>) {
        self.filter.set_value(filter.clone());
        self.state.update(|s| s.apply_filter(&filter));
        if self.mode == PagingMode::Server {
            self.load();
        }
    }

    /// Page-change request; out-of-range values are rejected as no-ops.
    pub fn set_page(&self, page: usize) {
        let moved = self
            .state
            .try_update(|s| s.try_set_page(page))
            .unwrap_or(false);
        if moved && self.mode == PagingMode::Server {
            self.load();
        }
    }

    pub fn cursor(&self) -> PageCursor {
        self.state.with(|s| s.cursor)
    }

    pub fn page_items(&self) -> Vec<T> {
        self.state.with(|s| s.page_items())
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.state.with(|s| s.original.clone())
    }

    /// Confirm-then-delete. Refetches on success so the list reflects
    /// server truth; on failure the row stays and a toast reports why.
    pub fn remove(&self, id: String, confirm_text: &str) {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(confirm_text).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let panel = *self;
        spawn_local(async move {
            match panel.client.get_value().remove(&id).await {
                Ok(()) => {
                    panel.toasts.success("Record deleted");
                    panel.load();
                }
                Err(err) => {
                    log::error!("delete failed: {}", err);
                    panel.toasts.error(err.user_message());
                }
            }
        });
    }
}
