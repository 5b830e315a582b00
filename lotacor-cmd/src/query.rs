//! Query command: post one set of parameters and report on the response.

use anyhow::Context;
use clap::Args;
use log::info;
use lotacor_api::config::STANDALONE_ENDPOINT;
use lotacor_api::params::{
    ALL, DEFAULT_FINAL_DATE, DEFAULT_ISLAND, DEFAULT_REPORT_TYPE, DEFAULT_START_DATE,
};
use lotacor_api::{ExplorerConfig, LotacorClient, QueryParameters, QueryResult, ReportType};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Report type code (see `report-types`); sent as given
    #[arg(short = 't', long = "type", default_value = DEFAULT_REPORT_TYPE)]
    pub report_type: String,

    /// Lota identifier, or "all"
    #[arg(short = 'l', long, default_value = ALL)]
    pub lota_id: String,

    /// FAO species code, or "all"
    #[arg(short = 'f', long, default_value = ALL)]
    pub fao: String,

    /// Island code
    #[arg(short = 'i', long, default_value = DEFAULT_ISLAND)]
    pub ilha_id: String,

    #[arg(long, default_value = DEFAULT_START_DATE)]
    pub start_date: String,

    #[arg(long, default_value = DEFAULT_FINAL_DATE)]
    pub final_date: String,

    /// Single day to query instead of the range
    #[arg(long)]
    pub day_date: Option<String>,

    /// Endpoint receiving the form-encoded POST
    #[arg(short = 'e', long, default_value = STANDALONE_ENDPOINT)]
    pub endpoint: String,

    /// Give up on the request after this many seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Print only the raw JSON response
    #[arg(long)]
    pub raw: bool,

    /// Also write the pretty-printed JSON response to this file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl QueryArgs {
    pub fn params(&self) -> QueryParameters {
        QueryParameters {
            report_type: self.report_type.clone(),
            lota_id: self.lota_id.clone(),
            fao: self.fao.clone(),
            ilha_id: self.ilha_id.clone(),
            start_date: self.start_date.clone(),
            final_date: self.final_date.clone(),
            day_date: self.day_date.clone().unwrap_or_default(),
        }
    }
}

/// Run one query against the configured endpoint.
pub async fn run_query(args: QueryArgs) -> anyhow::Result<()> {
    let config = ExplorerConfig::standalone().with_endpoint(args.endpoint.as_str());
    let url = config.resolve_endpoint(None)?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let client = LotacorClient::with_client(http, url);

    let params = args.params();
    let result = client.submit(&params).await?;

    print!("{}", render_report(&result, args.raw));

    if let Some(path) = &args.output {
        write_output(path, &result)?;
    }
    Ok(())
}

/// Save the pretty-printed response.
pub fn write_output(path: &Path, result: &QueryResult) -> anyhow::Result<()> {
    std::fs::write(path, result.pretty())
        .with_context(|| format!("Failed to write response to {}", path.display()))?;
    info!("Response written to {}", path.display());
    Ok(())
}

/// Text printed for a response: the summary lines followed by the JSON.
pub fn render_report(result: &QueryResult, raw: bool) -> String {
    if raw {
        return format!("{}\n", result.pretty());
    }

    let mut out = String::new();
    for line in result.summary().lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&result.pretty());
    out.push('\n');
    out
}

/// One "CODE  label" row per report type.
pub fn report_types_table() -> String {
    ReportType::ALL
        .iter()
        .map(|report| format!("{:<5}{}\n", report.code(), report.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: QueryArgs,
    }

    #[test]
    fn defaults_match_the_form_defaults() {
        let cli = TestCli::parse_from(["lotacor-cli"]);
        assert_eq!(cli.args.params(), QueryParameters::default());
        assert_eq!(cli.args.endpoint, STANDALONE_ENDPOINT);
        assert_eq!(cli.args.timeout_secs, 60);
    }

    #[test]
    fn flags_override_single_fields() {
        let cli = TestCli::parse_from([
            "lotacor-cli",
            "--type",
            "PML",
            "--fao",
            "2",
            "--day-date",
            "2025-01-17",
        ]);
        let params = cli.args.params();
        assert_eq!(params.report_type, "PML");
        assert_eq!(params.fao, "2");
        assert_eq!(params.day_date, "2025-01-17");
        assert_eq!(params.ilha_id, "7");
    }

    #[test]
    fn report_starts_with_summary() {
        let result = QueryResult::new(json!({"success": true, "data": [{"a": 1}, {"b": 2}]}));
        let report = render_report(&result, false);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Status: Success");
        assert_eq!(lines[1], "Data Points: 2");
        assert!(lines[2].starts_with("Response Size: "));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "{");
    }

    #[test]
    fn raw_report_is_only_json() {
        let result = QueryResult::new(json!({"success": false}));
        assert_eq!(render_report(&result, true), "{\n  \"success\": false\n}\n");
    }

    #[test]
    fn report_types_are_all_listed() {
        let table = report_types_table();
        assert_eq!(table.lines().count(), 9);
        assert!(table.contains("DPI  Descargas por Ilha"));
    }

    #[test]
    fn output_file_holds_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        let result = QueryResult::new(json!({"data": []}));
        write_output(&path, &result).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"data\": []\n}");
    }

    #[test]
    fn output_to_missing_directory_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("response.json");
        let err = write_output(&path, &QueryResult::new(json!({}))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write response to"));
    }
}
