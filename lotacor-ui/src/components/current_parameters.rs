//! Compact summary of the parameters behind the shown result.

use dioxus::prelude::*;
use lotacor_api::QueryParameters;

#[component]
pub fn CurrentParameters(params: QueryParameters, on_edit: EventHandler<()>) -> Element {
    let entries = [
        ("Type", params.report_type.clone()),
        ("Island", params.ilha_id.clone()),
        ("Start", params.start_date.clone()),
        ("End", params.final_date.clone()),
    ];

    rsx! {
        div {
            style: "background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 12px; padding: 24px; margin-bottom: 32px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h3 {
                    style: "font-size: 18px; font-weight: 600; color: #1e40af; margin: 0;",
                    "Current Parameters"
                }
                button {
                    style: "padding: 8px 16px; background: none; border: none; color: #2563eb; font-weight: 500; cursor: pointer;",
                    onclick: move |_| on_edit.call(()),
                    "Edit Parameters"
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; font-size: 14px;",
                for (label, value) in entries {
                    div {
                        key: "{label}",
                        span { style: "font-weight: 500; color: #1d4ed8;", "{label}:" }
                        p { style: "color: #2563eb; margin: 4px 0 0 0;", "{value}" }
                    }
                }
            }
        }
    }
}
