//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use lotacor_api::{Explorer, ExplorerConfig, LotacorClient, RequestTicket};

/// Shared application state for the explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parameters and the current phase (form, loading, error, result)
    pub explorer: Signal<Explorer>,
    /// Runtime settings
    pub config: Signal<ExplorerConfig>,
    /// HTTP client (None until the endpoint has been resolved)
    pub client: Signal<Option<LotacorClient>>,
    /// Startup problem that prevents any query (bad endpoint, no window)
    pub setup_error: Signal<Option<String>>,
    /// Request started at construction, sent once the client exists
    pub initial_request: Signal<Option<RequestTicket>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// With `fetch_on_mount` the explorer starts out loading.
    pub fn new(config: ExplorerConfig) -> Self {
        let (explorer, initial_request) = Explorer::starting(config.fetch_on_mount);
        Self {
            explorer: Signal::new(explorer),
            config: Signal::new(config),
            client: Signal::new(None),
            setup_error: Signal::new(None),
            initial_request: Signal::new(initial_request),
        }
    }
}
