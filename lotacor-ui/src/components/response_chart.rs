//! Container for the optional D3 bar chart of the response data.

use dioxus::prelude::*;
use lotacor_api::ChartSeries;

/// DOM id for the D3 chart container div.
pub const CHART_CONTAINER_ID: &str = "lotacor-response-chart";

/// Title plus the empty div D3 renders into.
///
/// The drawing itself happens in the app's chart effect through
/// `js_bridge::render_bar_chart`.
#[component]
pub fn ResponseChart(series: ChartSeries) -> Element {
    let caption = match &series.label_field {
        Some(label) => format!("{} by {}", series.value_field, label),
        None => format!("{} by row", series.value_field),
    };

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            h3 {
                style: "font-size: 18px; font-weight: 600; color: #374151; margin: 0 0 4px 0;",
                "Chart"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #6b7280;",
                "{caption} ({series.points.len()} rows)"
            }
            div {
                id: CHART_CONTAINER_ID,
                style: "width: 100%; min-height: 360px; background: #f9fafb; border-radius: 8px;",
            }
        }
    }
}
