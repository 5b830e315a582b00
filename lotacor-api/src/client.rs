//! HTTP client for the Lotacor query endpoint.
//!
//! The same client runs natively (CLI) and in the browser, where reqwest
//! goes through `fetch`.

use crate::error::Result;
use crate::params::QueryParameters;
use crate::response::QueryResult;
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};

pub const ACCEPT_VALUE: &str = "application/json, text/javascript, */*; q=0.01";
pub const CONTENT_TYPE_VALUE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// The fixed headers sent with every query.
pub fn query_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_VALUE));
    headers.insert(
        REQUESTED_WITH_HEADER,
        HeaderValue::from_static(REQUESTED_WITH_VALUE),
    );
    headers
}

/// Posts query parameters to one endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LotacorClient {
    client: Client,
    endpoint: Url,
}

impl LotacorClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Use a preconfigured reqwest client (e.g. one with a timeout).
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `params` as a form-encoded body and return the payload.
    ///
    /// Any transport failure or non-2xx status is an error; a 2xx body that
    /// is not JSON is returned as a JSON string.
    pub async fn submit(&self, params: &QueryParameters) -> Result<QueryResult> {
        info!(
            "POST {} (type={}, ilha_id={}, {}..{})",
            self.endpoint, params.report_type, params.ilha_id, params.start_date, params.final_date
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(params)
            .headers(query_headers())
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.text().await?;
        info!("Response {}: {} bytes", status, body.len());

        Ok(QueryResult::from_body(&body))
    }
}
