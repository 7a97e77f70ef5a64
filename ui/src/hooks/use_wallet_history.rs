use crate::app_state_mut::AppStateMut;
use api::ApiError;
use api::HistoryClient;
use api::HistoryItem;
use api::HistoryRequest;
use dioxus::prelude::*;
use std::rc::Rc;

/// Lifecycle of the history request owned by the history screen.
#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Pending,
    Loaded(Rc<Vec<HistoryItem>>),
    Failed(ApiError),
}

impl RequestState {
    /// Moves to `Pending`. Returns `false` if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Records the outcome of the request started by [`RequestState::begin`].
    pub fn finish(&mut self, result: Result<Vec<HistoryItem>, ApiError>) {
        *self = match result {
            Ok(items) => Self::Loaded(Rc::new(items)),
            Err(e) => Self::Failed(e),
        };
    }
}

/// What the result area should show for a given [`RequestState`].
#[derive(Clone, PartialEq, Debug)]
pub enum ResultView {
    Nothing,
    Loading,
    Empty,
    Table(Rc<Vec<HistoryItem>>),
}

impl From<&RequestState> for ResultView {
    fn from(state: &RequestState) -> Self {
        match state {
            // A failure leaves no stale table behind.
            RequestState::Idle | RequestState::Failed(_) => Self::Nothing,
            RequestState::Pending => Self::Loading,
            RequestState::Loaded(items) if items.is_empty() => Self::Empty,
            RequestState::Loaded(items) => Self::Table(items.clone()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct WalletHistory {
    state: Signal<RequestState>,
    notifier: AppStateMut,
}

impl WalletHistory {
    /// Starts a request unless one is already pending.
    ///
    /// On failure the backend's message (or the generic fallback) is raised
    /// as an error toast. Returns whether a request was started.
    pub fn fetch(&mut self, client: HistoryClient, request: HistoryRequest) -> bool {
        if !self.state.with_mut(|s| s.begin()) {
            dioxus_logger::tracing::debug!("submit ignored: request already pending");
            return false;
        }

        dioxus_logger::tracing::info!(
            "fetching {} transactions for {} on {}",
            request.limit,
            request.wallet_address,
            request.network
        );

        let mut state = self.state;
        let mut notifier = self.notifier;
        spawn(async move {
            let result = client.wallet_history(&request).await;
            match &result {
                Ok(items) => {
                    dioxus_logger::tracing::info!("received {} history records", items.len())
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("wallet history request failed: {}", e);
                    notifier.error(e.notification_text());
                }
            }
            state.with_mut(|s| s.finish(result));
        });
        true
    }

    /// Call .read() on this in a component to subscribe to changes.
    pub fn state(&self) -> Signal<RequestState> {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.read().is_pending()
    }
}

pub fn use_wallet_history() -> WalletHistory {
    let state = use_signal(RequestState::default);
    let notifier = use_context::<AppStateMut>();
    WalletHistory { state, notifier }
}
