use std::future::Future;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::ApiResponse;

pub const GENERIC_FETCH_ERROR: &str = "Something went wrong. Please try again.";

/// Loading/error/data tri-state for one asynchronous read. `loading` is true
/// only between request start and settle; a failed cycle never leaves stale
/// `data` behind.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn settle(&mut self, response: ApiResponse<T>) {
        self.loading = false;
        match response {
            ApiResponse {
                success: true,
                data: Some(data),
                ..
            } => {
                self.error = None;
                self.data = Some(data);
            }
            ApiResponse { message, .. } => {
                self.data = None;
                self.error = Some(message.unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string()));
            }
        }
    }
}

/// Staleness guard for overlapping requests: every `begin` stamps a new
/// generation, and only a settle carrying the latest token may touch state.
/// Responses from superseded requests are dropped on the floor.
#[derive(Debug, Default)]
pub struct FetchCycle {
    latest: u64,
}

impl FetchCycle {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

pub struct FetchHandle<T: 'static> {
    pub state: RwSignal<FetchState<T>>,
    runner: Callback<()>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchHandle<T> {}

impl<T: 'static> FetchHandle<T> {
    pub fn run(&self) {
        self.runner.run(());
    }

    /// The same fetcher as a callback, for retry buttons.
    pub fn retry(&self) -> Callback<()> {
        self.runner
    }
}

/// Wraps a zero-argument async fetcher in the standard loading/error/data
/// lifecycle. Each `run` supersedes any still-pending one.
pub fn use_fetch<T, Fut, F>(fetcher: F) -> FetchHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ApiResponse<T>> + 'static,
{
    let state = RwSignal::new(FetchState::default());
    let cycle = Arc::new(Mutex::new(FetchCycle::default()));

    let runner = Callback::new(move |_: ()| {
        let token = match cycle.lock() {
            Ok(mut cycle) => cycle.begin(),
            Err(_) => return,
        };
        state.update(FetchState::begin);

        let cycle = Arc::clone(&cycle);
        let fut = fetcher();
        spawn_local(async move {
            let response = fut.await;
            let current = cycle
                .lock()
                .map(|cycle| cycle.is_current(token))
                .unwrap_or(false);
            if !current {
                return;
            }
            state.update(|s| s.settle(response));
        });
    });

    FetchHandle { state, runner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state: FetchState<Vec<i64>> = FetchState::default();
        state.error = Some("old failure".to_string());
        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_clears_data_and_stores_message() {
        let mut state = FetchState {
            data: Some(vec![1, 2, 3]),
            loading: true,
            error: None,
        };
        state.settle(ApiResponse::fail("Network error"));
        assert_eq!(state.data, None);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn success_replaces_data_and_clears_error() {
        let mut state: FetchState<Vec<i64>> = FetchState::default();
        state.begin();
        state.settle(ApiResponse::ok(vec![7]));
        assert_eq!(state.data, Some(vec![7]));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn success_without_payload_falls_back_to_generic_error() {
        let mut state: FetchState<Vec<i64>> = FetchState::default();
        state.settle(ApiResponse {
            success: true,
            data: None,
            message: None,
        });
        assert_eq!(state.error.as_deref(), Some(GENERIC_FETCH_ERROR));
    }

    #[test]
    fn only_the_latest_generation_is_current() {
        let mut cycle = FetchCycle::default();
        let first = cycle.begin();
        let second = cycle.begin();
        assert!(!cycle.is_current(first));
        assert!(cycle.is_current(second));
    }
}
