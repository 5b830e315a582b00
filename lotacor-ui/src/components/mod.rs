//! Reusable Dioxus RSX components for the Lotacor explorer.

mod api_response;
mod current_parameters;
mod error_handler;
mod filter;
mod header;
mod loader;
mod response_chart;

pub use api_response::ApiResponse;
pub use current_parameters::CurrentParameters;
pub use error_handler::ErrorHandler;
pub use filter::Filter;
pub use header::Header;
pub use loader::Loader;
pub use response_chart::{ResponseChart, CHART_CONTAINER_ID};
