//! Lotacor API Explorer
//!
//! Single-page form that posts query parameters to the Lotacor fishery API
//! and shows the raw JSON response, a few statistics and an optional chart.
//!
//! Data flow:
//! 1. On mount: resolve the endpoint against the page origin and build the
//!    HTTP client. With `fetch_on_mount` the app starts out loading and the
//!    first query goes out right away.
//! 2. Filter edits update the parameters held by `AppState.explorer`.
//! 3. Submit / retry / refresh take a ticket from the explorer and spawn the
//!    POST; the outcome comes back with its ticket, so a superseded response
//!    is dropped.
//! 4. Whenever a chartable result is shown, the D3 bar chart is re-rendered.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn, Level};
use lotacor_api::{
    ChartSeries, ExplorerConfig, LotacorClient, Phase, QueryError, QueryField, RequestTicket,
};
use lotacor_ui::components::{
    ApiResponse, CurrentParameters, ErrorHandler, Filter, Header, Loader, CHART_CONTAINER_ID,
};
use lotacor_ui::js_bridge;
use lotacor_ui::state::AppState;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting Lotacor API Explorer");
    launch(App);
}

fn app_config() -> ExplorerConfig {
    if cfg!(feature = "standalone") {
        ExplorerConfig::standalone()
    } else {
        ExplorerConfig::default()
    }
}

/// Send the request behind `ticket` and hand the outcome back to the explorer.
fn dispatch(state: AppState, ticket: Option<RequestTicket>) {
    let Some(ticket) = ticket else {
        return;
    };
    let mut explorer = state.explorer;

    let Some(client) = state.client.peek().clone() else {
        let message = state
            .setup_error
            .peek()
            .clone()
            .unwrap_or_else(|| "API client not ready".to_string());
        explorer
            .write()
            .finish_request(ticket, Err(QueryError::Transport(message)));
        return;
    };

    spawn(async move {
        let outcome = client.submit(&ticket.params).await;
        if !explorer.write().finish_request(ticket, outcome) {
            info!("Ignored response of a superseded request");
        }
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(app_config()));

    // ─── Effect 1: build the client once on mount ───
    use_effect(move || {
        let config = state.config.peek().clone();
        match config.resolve_endpoint(js_bridge::page_origin().as_deref()) {
            Ok(url) => {
                info!("Using endpoint {}", url);
                state.client.set(Some(LotacorClient::new(url)));
            }
            Err(e) => {
                warn!("Endpoint setup failed: {}", e);
                state.setup_error.set(Some(e.to_string()));
            }
        }

        js_bridge::init_charts();

        let initial = state.initial_request.write().take();
        dispatch(state, initial);
    });

    // ─── Effect 2: draw the chart for the shown result ───
    use_effect(move || {
        let explorer = state.explorer.read();
        if let Some(series) = explorer.result().and_then(ChartSeries::from_result) {
            let config_json = serde_json::json!({
                "yAxisLabel": series.value_field,
                "color": "#2563eb",
            })
            .to_string();
            js_bridge::render_bar_chart(CHART_CONTAINER_ID, &series.to_json(), &config_json);
        }
    });

    let explorer = state.explorer.read().clone();

    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(135deg, #eff6ff, #ffffff, #ecfeff); font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 1100px; margin: 0 auto; padding: 32px 16px;",

                Header {}

                if let Some(err) = state.setup_error.read().as_ref() {
                    div {
                        style: "padding: 12px 16px; margin-bottom: 16px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                        strong { "Error: " }
                        "{err}"
                    }
                }

                if explorer.form_visible() {
                    Filter {
                        params: explorer.params().clone(),
                        loading: explorer.is_loading(),
                        on_change: move |(field, value): (QueryField, String)| {
                            state.explorer.write().update_field(field, value);
                        },
                        on_submit: move |_| {
                            let ticket = state.explorer.write().submit();
                            dispatch(state, ticket);
                        },
                        on_reset: move |_| {
                            js_bridge::destroy_chart(CHART_CONTAINER_ID);
                            state.explorer.write().reset_query();
                        },
                    }
                }

                {match explorer.phase() {
                    Phase::Form => rsx! {},
                    Phase::Loading { .. } => rsx! { Loader {} },
                    Phase::Error { message, .. } => rsx! {
                        ErrorHandler {
                            error: message.clone(),
                            on_retry: move |_| {
                                let ticket = state.explorer.write().retry();
                                dispatch(state, ticket);
                            },
                            on_edit: move |_| state.explorer.write().edit(),
                        }
                    },
                    Phase::Result { result } => rsx! {
                        CurrentParameters {
                            params: explorer.params().clone(),
                            on_edit: move |_| {
                                js_bridge::destroy_chart(CHART_CONTAINER_ID);
                                state.explorer.write().edit();
                            },
                        }
                        ApiResponse {
                            result: result.clone(),
                            on_refresh: move |_| {
                                js_bridge::destroy_chart(CHART_CONTAINER_ID);
                                let ticket = state.explorer.write().refresh();
                                dispatch(state, ticket);
                            },
                            on_new_query: move |_| {
                                js_bridge::destroy_chart(CHART_CONTAINER_ID);
                                state.explorer.write().reset_query();
                            },
                        }
                    },
                }}
            }
        }
    }
}
