use api::AppConfig;
use api::HistoryClient;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub config: AppConfig,
    pub client: HistoryClient,
}

/// Immutable state shared through the component tree.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = HistoryClient::new(&config);
        dioxus_logger::tracing::info!("wallet history endpoint: {}", client.endpoint());
        Self(Arc::new(AppStateData { config, client }))
    }
}
