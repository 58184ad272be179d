//! Signals behind a management table: rows, loading flag and error banner.
//!
//! Loads and reloads may finish after the owning view unmounted, so every
//! access goes through the `try_*` accessors and quietly does nothing once
//! the signals are disposed.

use crate::shared::crud::{Reloaded, Repository};
use crate::shared::http::ApiError;
use leptos::prelude::*;

pub struct ListResource<E: Send + Sync + 'static> {
    pub items: RwSignal<Vec<E>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<E: Send + Sync + 'static> Clone for ListResource<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for ListResource<E> {}

impl<E: Send + Sync + 'static> ListResource<E> {
    /// Empty list, loading until the first load finishes
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// Enter the loading state and clear the banner; `false` once disposed
    pub fn begin(&self) -> bool {
        self.loading.try_update(|l| *l = true).is_some()
            && self.error.try_update(|e| *e = None).is_some()
    }

    /// Show the loaded rows or `failure_message`
    pub fn finish(&self, result: Reloaded<E>, failure_message: &str) {
        match result {
            Ok(rows) => {
                self.items.try_set(rows);
                self.error.try_set(None);
            }
            Err(e) => {
                log::error!("{}: {}", failure_message, e);
                self.error.try_set(Some(failure_message.to_string()));
            }
        }
        self.loading.try_set(false);
    }

    /// Banner for a failed mutation
    pub fn fail(&self, message: &str, error: &ApiError) {
        log::error!("{}: {}", message, error);
        self.error.try_set(Some(message.to_string()));
    }
}

impl<E: Send + Sync + 'static> Default for ListResource<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Load `repo` under the current `filter` into `list`.
///
/// Returns without a request when the view owning `filter` is gone.
pub async fn load<R>(
    repo: &R,
    list: ListResource<R::Entity>,
    filter: Signal<R::Filter>,
    failure_message: &str,
) where
    R: Repository,
    R::Entity: Send + Sync + 'static,
    R::Filter: Clone + Send + Sync + 'static,
{
    let Some(current) = filter.try_get_untracked() else {
        return;
    };
    if !list.begin() {
        return;
    }
    let result = repo.list(&current).await;
    list.finish(result, failure_message);
}
