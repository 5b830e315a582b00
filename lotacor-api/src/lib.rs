//! Core types and API client for the Lotacor fishery-data explorer.
//!
//! This crate provides:
//! - `params`: the form-bound `QueryParameters` record and its selector options
//! - `response`: the opaque `QueryResult` payload, its summary and chart series
//! - `explorer`: the explicit `Phase` state machine driven by the root controller
//! - `client`: the `LotacorClient` issuing the form-encoded POST
//! - `config` / `error`: endpoint configuration and the `QueryError` type

pub mod client;
pub mod config;
pub mod error;
pub mod explorer;
pub mod params;
pub mod response;

pub use client::LotacorClient;
pub use config::ExplorerConfig;
pub use error::{QueryError, Result};
pub use explorer::{Explorer, Phase, RequestTicket};
pub use params::{QueryField, QueryParameters, ReportType};
pub use response::{ChartSeries, QueryResult, ResponseSummary};
