//! Query state owned by the root controller.
//!
//! `Explorer` holds the parameter record and an explicit [`Phase`]. Every
//! network request is tied to a [`RequestTicket`]; only the ticket of the
//! most recent request may complete it, so a slow earlier response can never
//! overwrite a newer one.

use crate::error::QueryError;
use crate::params::{QueryField, QueryParameters};
use crate::response::QueryResult;
use log::{debug, info, warn};

/// Fallback shown when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// What the explorer is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Editing parameters, nothing in flight
    Form,
    /// A request is in flight; `editing` keeps the form on screen
    Loading { editing: bool },
    /// The last request failed
    Error { message: String, editing: bool },
    /// The last request succeeded
    Result { result: QueryResult },
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket {
    generation: u64,
    /// Snapshot of the parameters sent with this request
    pub params: QueryParameters,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    params: QueryParameters,
    phase: Phase,
    generation: u64,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self {
            params: QueryParameters::default(),
            phase: Phase::Form,
            generation: 0,
        }
    }

    /// A fresh explorer, already loading the default query when `fetch` is set.
    pub fn starting(fetch: bool) -> (Self, Option<RequestTicket>) {
        let mut explorer = Self::new();
        let ticket = fetch.then(|| explorer.begin_request(None));
        (explorer, ticket)
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// The submit control is enabled only while nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Whether the filter form is on screen.
    pub fn form_visible(&self) -> bool {
        match self.phase {
            Phase::Form => true,
            Phase::Loading { editing } | Phase::Error { editing, .. } => editing,
            Phase::Result { .. } => false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match &self.phase {
            Phase::Result { result } => Some(result),
            _ => None,
        }
    }

    pub fn update_field(&mut self, field: QueryField, value: impl Into<String>) {
        self.params.set(field, value);
    }

    /// Restore the default parameters and go back to an empty form.
    ///
    /// Any request still in flight is invalidated.
    pub fn reset_query(&mut self) {
        info!("Resetting query parameters");
        self.params = QueryParameters::default();
        self.phase = Phase::Form;
        self.generation += 1;
    }

    /// Start a request with `params`, or the stored parameters when `None`.
    ///
    /// A request already in flight is superseded: its ticket goes stale.
    pub fn begin_request(&mut self, params: Option<QueryParameters>) -> RequestTicket {
        let editing = self.form_visible();
        if self.is_loading() {
            warn!("Superseding in-flight request {}", self.generation);
        }
        self.generation += 1;
        self.phase = Phase::Loading { editing };
        RequestTicket {
            generation: self.generation,
            params: params.unwrap_or_else(|| self.params.clone()),
        }
    }

    /// Form submission; refused while a request is in flight.
    pub fn submit(&mut self) -> Option<RequestTicket> {
        self.can_submit().then(|| self.begin_request(None))
    }

    /// Re-issue the current parameters after a failure.
    pub fn retry(&mut self) -> Option<RequestTicket> {
        matches!(self.phase, Phase::Error { .. }).then(|| self.begin_request(None))
    }

    /// Re-issue the current parameters from the result view.
    pub fn refresh(&mut self) -> Option<RequestTicket> {
        matches!(self.phase, Phase::Result { .. }).then(|| self.begin_request(None))
    }

    /// Back to the form, keeping the parameters.
    pub fn edit(&mut self) {
        if matches!(self.phase, Phase::Error { .. } | Phase::Result { .. }) {
            self.phase = Phase::Form;
        }
    }

    /// Apply the outcome of a request.
    ///
    /// Returns false, leaving the state untouched, when the ticket is stale.
    pub fn finish_request(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<QueryResult, QueryError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            debug!(
                "Dropping stale response for request {} (current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        self.phase = match outcome {
            Ok(result) => Phase::Result { result },
            Err(err) => {
                let mut message = err.to_string();
                if message.trim().is_empty() {
                    message = UNKNOWN_ERROR.to_string();
                }
                warn!("Query failed: {}", message);
                Phase::Error {
                    message,
                    editing: self.form_visible(),
                }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn network_error() -> QueryError {
        QueryError::Transport("Network Error".to_string())
    }

    fn ok_result() -> QueryResult {
        QueryResult::new(json!({"success": true, "data": [{"a": 1}, {"b": 2}]}))
    }

    #[test]
    fn starts_on_the_form() {
        let explorer = Explorer::new();
        assert_eq!(explorer.phase(), &Phase::Form);
        assert!(explorer.form_visible());
        assert!(explorer.can_submit());
    }

    #[test]
    fn fetch_on_start_begins_loading() {
        let (explorer, ticket) = Explorer::starting(true);
        let ticket = ticket.unwrap();
        assert!(explorer.is_loading());
        assert!(!explorer.can_submit());
        assert_eq!(ticket.params, QueryParameters::default());

        let mut explorer = explorer;
        assert!(explorer.finish_request(ticket, Ok(ok_result())));
        assert!(explorer.result().is_some());

        let (explorer, ticket) = Explorer::starting(false);
        assert!(ticket.is_none());
        assert_eq!(explorer.phase(), &Phase::Form);
    }

    #[test]
    fn field_updates_keep_latest_value_only() {
        let mut explorer = Explorer::new();
        explorer.update_field(QueryField::Fao, "2");
        explorer.update_field(QueryField::IlhaId, "1");

        let expected = QueryParameters {
            fao: "2".to_string(),
            ilha_id: "1".to_string(),
            ..QueryParameters::default()
        };
        assert_eq!(explorer.params(), &expected);
    }

    #[test]
    fn submit_disables_until_completion() {
        let mut explorer = Explorer::new();
        let ticket = explorer.submit().unwrap();
        assert!(!explorer.can_submit());
        assert!(explorer.form_visible());
        assert!(explorer.submit().is_none());

        assert!(explorer.finish_request(ticket, Ok(ok_result())));
        assert!(explorer.can_submit());
        assert!(!explorer.form_visible());
        assert_eq!(explorer.result().unwrap().summary().data_points, Some(2));
    }

    #[test]
    fn failure_reenables_submit_and_keeps_message() {
        let mut explorer = Explorer::new();
        let ticket = explorer.submit().unwrap();
        assert!(explorer.finish_request(ticket, Err(network_error())));

        assert!(explorer.can_submit());
        assert_eq!(explorer.error(), Some("Network Error"));
        assert!(explorer.form_visible());

        let retry = explorer.retry().unwrap();
        assert!(explorer.is_loading());
        assert!(explorer.finish_request(retry, Err(network_error())));
        explorer.edit();
        assert_eq!(explorer.phase(), &Phase::Form);
    }

    #[test]
    fn empty_failure_message_falls_back() {
        let mut explorer = Explorer::new();
        let ticket = explorer.submit().unwrap();
        explorer.finish_request(ticket, Err(QueryError::Transport(String::new())));
        assert_eq!(explorer.error(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn ticket_snapshots_parameters() {
        let mut explorer = Explorer::new();
        let ticket = explorer.submit().unwrap();
        explorer.update_field(QueryField::Fao, "9");
        assert_eq!(ticket.params.fao, "all");

        let custom = QueryParameters {
            report_type: "PML".to_string(),
            ..QueryParameters::default()
        };
        let ticket = explorer.begin_request(Some(custom));
        assert_eq!(ticket.params.report_type, "PML");
        assert_eq!(explorer.params().report_type, "DPI");
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut explorer = Explorer::new();
        let first = explorer.submit().unwrap();
        let second = explorer.begin_request(None);
        assert!(second.generation() > first.generation());

        assert!(explorer.finish_request(second, Err(network_error())));
        assert!(!explorer.finish_request(first, Ok(ok_result())));
        assert_eq!(explorer.error(), Some("Network Error"));
    }

    #[test]
    fn reset_restores_defaults_and_invalidates() {
        let mut explorer = Explorer::new();
        explorer.update_field(QueryField::ReportType, "PCL");
        let ticket = explorer.submit().unwrap();
        explorer.reset_query();

        assert_eq!(explorer.params(), &QueryParameters::default());
        assert_eq!(explorer.phase(), &Phase::Form);
        assert!(!explorer.is_loading());
        assert!(explorer.error().is_none());
        assert!(explorer.result().is_none());
        assert!(!explorer.finish_request(ticket, Ok(ok_result())));
        assert_eq!(explorer.phase(), &Phase::Form);
    }

    #[test]
    fn refresh_from_result_hides_form() {
        let mut explorer = Explorer::new();
        let ticket = explorer.submit().unwrap();
        explorer.finish_request(ticket, Ok(ok_result()));

        let refresh = explorer.refresh().unwrap();
        assert_eq!(explorer.phase(), &Phase::Loading { editing: false });
        explorer.finish_request(refresh, Err(network_error()));
        assert!(!explorer.form_visible());
        assert!(explorer.refresh().is_none());

        explorer.edit();
        assert!(explorer.form_visible());
    }

    #[test]
    fn edit_from_result_keeps_parameters() {
        let mut explorer = Explorer::new();
        explorer.update_field(QueryField::StartDate, "2024-12-01");
        let ticket = explorer.submit().unwrap();
        explorer.finish_request(ticket, Ok(ok_result()));
        explorer.edit();

        assert_eq!(explorer.phase(), &Phase::Form);
        assert_eq!(explorer.params().start_date, "2024-12-01");
    }
}
