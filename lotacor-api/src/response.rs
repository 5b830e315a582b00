//! The API payload and everything derived from it at render time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A response payload from the Lotacor API.
///
/// The payload is kept as an opaque JSON value; only `success` and `data`
/// are ever read, through the accessors below.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    value: Value,
    received_at: DateTime<Utc>,
}

impl QueryResult {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            received_at: Utc::now(),
        }
    }

    /// Build a result from a raw response body.
    ///
    /// A body that is not JSON is kept verbatim as a JSON string.
    pub fn from_body(body: &str) -> Self {
        let value = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        Self::new(value)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// False only when the payload carries `"success": false`.
    pub fn success(&self) -> bool {
        !matches!(self.value.get("success"), Some(Value::Bool(false)))
    }

    /// The `data` array, when the payload has one.
    pub fn data_items(&self) -> Option<&Vec<Value>> {
        self.value.get("data").and_then(Value::as_array)
    }

    /// Byte length of the compact JSON serialization.
    pub fn size_bytes(&self) -> usize {
        serde_json::to_string(&self.value)
            .map(|json| json.len())
            .unwrap_or_default()
    }

    /// Two-space indented JSON for the raw response view.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
    }

    pub fn summary(&self) -> ResponseSummary {
        ResponseSummary {
            success: self.success(),
            data_points: self.data_items().map(Vec::len),
            size_bytes: self.size_bytes(),
        }
    }
}

/// Statistics shown in the response cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSummary {
    pub success: bool,
    pub data_points: Option<usize>,
    pub size_bytes: usize,
}

impl ResponseSummary {
    pub fn status(&self) -> &'static str {
        if self.success {
            "Success"
        } else {
            "Failed"
        }
    }

    pub fn data_points_text(&self) -> String {
        self.data_points
            .map(|count| count.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn size_text(&self) -> String {
        format!("{} bytes", self.size_bytes)
    }

    /// Label/value lines in display order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Status: {}", self.status()),
            format!("Data Points: {}", self.data_points_text()),
            format!("Response Size: {}", self.size_text()),
        ]
    }
}

/// One bar of the response chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A single numeric series pulled out of the `data` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub value_field: String,
    pub label_field: Option<String>,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Chart the first numeric, non-identifier field of the `data` rows.
    ///
    /// Rows are labelled by the first non-numeric string field, or by their
    /// 1-based position when there is none. Returns `None` when nothing in
    /// the payload can be charted.
    pub fn from_result(result: &QueryResult) -> Option<Self> {
        let rows = result.data_items()?;
        let first = rows.iter().find_map(Value::as_object)?;

        let value_field = first
            .iter()
            .find(|(key, value)| !is_identifier(key) && numeric(value).is_some())
            .map(|(key, _)| key.clone())?;
        let label_field = first
            .iter()
            .find(|(_, value)| value.is_string() && numeric(value).is_none())
            .map(|(key, _)| key.clone());

        let points: Vec<ChartPoint> = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| {
                let value = numeric(row.get(&value_field)?)?;
                let label = label_field
                    .as_ref()
                    .and_then(|field| row.get(field))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| (idx + 1).to_string());
                Some(ChartPoint { label, value })
            })
            .collect();

        if points.is_empty() {
            return None;
        }

        Some(Self {
            value_field,
            label_field,
            points,
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.points).unwrap_or_else(|_| "[]".to_string())
    }
}

fn is_identifier(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key == "id" || key.ends_with("_id")
}

/// JSON numbers, or strings holding one ("12.5", and "12,5" as written in PT).
fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Optional sign, digits, and at most one `.` or `,` decimal separator.
fn parse_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut digits = 0;
    let mut separators = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' => separators += 1,
            _ => return None,
        }
    }
    if digits == 0 || separators > 1 {
        return None;
    }
    s.replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_counts_data_points() {
        let result = QueryResult::new(json!({"success": true, "data": [{"a": 1}, {"b": 2}]}));
        let summary = result.summary();
        assert_eq!(summary.data_points, Some(2));
        assert_eq!(summary.lines()[0], "Status: Success");
        assert_eq!(summary.lines()[1], "Data Points: 2");
    }

    #[test]
    fn missing_success_field_defaults_to_success() {
        let result = QueryResult::new(json!({"data": []}));
        assert!(result.success());
        assert_eq!(result.summary().status(), "Success");
    }

    #[test]
    fn only_boolean_false_marks_failure() {
        assert!(!QueryResult::new(json!({"success": false})).success());
        assert!(QueryResult::new(json!({"success": "false"})).success());
        assert!(QueryResult::new(json!({"success": null})).success());
        assert!(QueryResult::new(json!([1, 2, 3])).success());
    }

    #[test]
    fn data_points_not_available_without_array() {
        let result = QueryResult::new(json!({"success": true, "data": {"rows": 3}}));
        assert_eq!(result.summary().data_points_text(), "N/A");
    }

    #[test]
    fn size_is_compact_utf8_length() {
        let result = QueryResult::new(json!({"a": "ã"}));
        // {"a":"ã"} with a two-byte character
        assert_eq!(result.size_bytes(), 10);
        assert_eq!(result.summary().size_text(), "10 bytes");
    }

    #[test]
    fn non_json_body_is_kept_as_text() {
        let result = QueryResult::from_body("<html>oops</html>");
        assert_eq!(result.value(), &Value::String("<html>oops</html>".to_string()));
        assert!(result.success());
        assert_eq!(result.summary().data_points, None);
    }

    #[test]
    fn pretty_print_uses_two_spaces() {
        let result = QueryResult::new(json!({"success": true}));
        assert_eq!(result.pretty(), "{\n  \"success\": true\n}");
    }

    #[test]
    fn chart_series_uses_first_measure_and_label() {
        let result = QueryResult::new(json!({
            "success": true,
            "data": [
                {"lota_id": "34", "especie": "Atum", "kg": "1200,5", "euros": 300},
                {"lota_id": "34", "especie": "Chicharro", "kg": 80, "euros": 120},
                {"lota_id": "34", "especie": "Polvo", "kg": null, "euros": 10}
            ]
        }));
        let series = ChartSeries::from_result(&result).unwrap();
        assert_eq!(series.value_field, "kg");
        assert_eq!(series.label_field.as_deref(), Some("especie"));
        assert_eq!(
            series.points,
            vec![
                ChartPoint { label: "Atum".to_string(), value: 1200.5 },
                ChartPoint { label: "Chicharro".to_string(), value: 80.0 },
            ]
        );
    }

    #[test]
    fn chart_series_falls_back_to_row_numbers() {
        let result = QueryResult::new(json!({"data": [{"total": 5}, {"total": 7}]}));
        let series = ChartSeries::from_result(&result).unwrap();
        assert_eq!(series.label_field, None);
        assert_eq!(series.points[1].label, "2");
        assert_eq!(series.to_json(), r#"[{"label":"1","value":5.0},{"label":"2","value":7.0}]"#);
    }

    #[test]
    fn number_like_words_are_labels_not_values() {
        let result = QueryResult::new(json!({
            "data": [{"especie": "Nan", "kg": 5}, {"especie": "Atum", "kg": 7}]
        }));
        let series = ChartSeries::from_result(&result).unwrap();
        assert_eq!(series.value_field, "kg");
        assert_eq!(series.label_field.as_deref(), Some("especie"));
        assert_eq!(series.to_json(), r#"[{"label":"Nan","value":5.0},{"label":"Atum","value":7.0}]"#);
    }

    #[test]
    fn numeric_strings_are_plain_decimals() {
        for text in ["12", " -3,5 ", "+0.25", ".5"] {
            assert!(numeric(&json!(text)).is_some(), "{text}");
        }
        for text in ["nan", "inf", "-Infinity", "1e3", "1.200,5", "", "-", ",", "12 kg"] {
            assert_eq!(numeric(&json!(text)), None, "{text}");
        }
    }

    #[test]
    fn failed_status_text() {
        let summary = QueryResult::new(json!({"success": false, "data": []})).summary();
        assert_eq!(summary.status(), "Failed");
        assert_eq!(summary.lines()[0], "Status: Failed");
        assert_eq!(summary.lines()[1], "Data Points: 0");
    }

    #[test]
    fn nothing_to_chart() {
        assert!(ChartSeries::from_result(&QueryResult::new(json!({"success": true}))).is_none());
        let labels_only = QueryResult::new(json!({"data": [{"a": "x"}]}));
        assert!(ChartSeries::from_result(&labels_only).is_none());
        assert!(ChartSeries::from_result(&QueryResult::new(json!({"data": [1, 2]}))).is_none());
    }
}
