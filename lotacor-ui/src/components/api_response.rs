//! Result view: summary cards, optional chart and the raw JSON payload.

use super::response_chart::ResponseChart;
use dioxus::prelude::*;
use lotacor_api::{ChartSeries, QueryResult};

const CARD_STYLE: &str = "color: white; padding: 16px; border-radius: 8px;";

#[derive(Props, Clone, PartialEq)]
pub struct ApiResponseProps {
    pub result: QueryResult,
    pub on_refresh: EventHandler<()>,
    pub on_new_query: EventHandler<()>,
}

#[component]
pub fn ApiResponse(props: ApiResponseProps) -> Element {
    let summary = props.result.summary();
    let series = ChartSeries::from_result(&props.result);
    let pretty = props.result.pretty();
    let received = props.result.received_at().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let cards = [
        ("Status", summary.status().to_string(), "#2563eb"),
        ("Data Points", summary.data_points_text(), "#16a34a"),
        ("Response Size", summary.size_text(), "#9333ea"),
    ];

    rsx! {
        div {
            style: "background: white; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); padding: 24px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                div {
                    h2 {
                        style: "font-size: 24px; font-weight: 600; color: #1f2937; margin: 0;",
                        "API Response"
                    }
                    p { style: "margin: 4px 0 0 0; font-size: 12px; color: #6b7280;", "Received {received}" }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 8px; font-size: 14px; cursor: pointer;",
                        onclick: move |_| props.on_refresh.call(()),
                        "Refresh Data"
                    }
                    button {
                        style: "padding: 8px 16px; background: #4b5563; color: white; border: none; border-radius: 8px; font-size: 14px; cursor: pointer;",
                        onclick: move |_| props.on_new_query.call(()),
                        "New Query"
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 24px;",
                for (title, value, color) in cards {
                    div {
                        key: "{title}",
                        style: "{CARD_STYLE} background: {color};",
                        h4 { style: "font-size: 14px; font-weight: 600; opacity: 0.9; margin: 0;", "{title}" }
                        p { style: "font-size: 20px; font-weight: bold; margin: 4px 0 0 0;", "{value}" }
                    }
                }
            }

            if let Some(series) = series {
                ResponseChart { series }
            }

            div {
                style: "background: #f9fafb; border-radius: 8px; padding: 16px; max-height: 384px; overflow: auto;",
                h3 {
                    style: "font-size: 18px; font-weight: 600; color: #374151; margin: 0 0 12px 0;",
                    "Raw JSON Response:"
                }
                pre {
                    style: "font-size: 14px; color: #4b5563; white-space: pre-wrap; word-break: break-word; margin: 0;",
                    "{pretty}"
                }
            }
        }
    }
}
