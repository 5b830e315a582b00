//! Controlled query form.
//!
//! The form owns no state: every input reflects `params` and reports edits
//! through `on_change`. Submitting calls `on_submit` once, with the browser's
//! own form submission suppressed.

use dioxus::prelude::*;
use lotacor_api::params::{ISLAND_OPTIONS, LOTA_OPTIONS};
use lotacor_api::{QueryField, QueryParameters, ReportType};

const LABEL_STYLE: &str = "display: block; font-size: 14px; font-weight: 600; color: #374151; margin-bottom: 8px;";
const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px 14px; border: 1px solid #d1d5db; border-radius: 8px; font-size: 14px;";

/// Text of the submit button.
fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Fetching..."
    } else {
        "Fetch Data"
    }
}

fn submit_style(loading: bool) -> &'static str {
    if loading {
        "padding: 12px 24px; background: #93c5fd; color: white; border: none; border-radius: 8px; font-weight: 600; cursor: not-allowed;"
    } else {
        "padding: 12px 24px; background: #2563eb; color: white; border: none; border-radius: 8px; font-weight: 600; cursor: pointer;"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FilterProps {
    pub params: QueryParameters,
    /// Disables the submit button while a query is in flight
    pub loading: bool,
    pub on_change: EventHandler<(QueryField, String)>,
    pub on_submit: EventHandler<()>,
    pub on_reset: EventHandler<()>,
}

#[component]
pub fn Filter(props: FilterProps) -> Element {
    let FilterProps {
        params,
        loading,
        on_change,
        on_submit,
        on_reset,
    } = props;

    rsx! {
        div {
            style: "background: white; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); padding: 32px; margin-bottom: 32px;",
            h2 {
                style: "font-size: 24px; font-weight: 600; color: #1f2937; margin: 0 0 24px 0;",
                "API Parameters"
            }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 24px;",

                    div {
                        label { style: LABEL_STYLE, r#for: "report-type", "Mapa" }
                        select {
                            id: "report-type",
                            style: INPUT_STYLE,
                            onchange: move |evt| on_change.call((QueryField::ReportType, evt.value())),
                            for report in ReportType::ALL {
                                option {
                                    key: "{report.code()}",
                                    value: report.code(),
                                    selected: params.report_type == report.code(),
                                    "{report.label()}"
                                }
                            }
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, r#for: "lota-id", "Lota" }
                        select {
                            id: "lota-id",
                            style: INPUT_STYLE,
                            onchange: move |evt| on_change.call((QueryField::LotaId, evt.value())),
                            for (value, label) in LOTA_OPTIONS.iter() {
                                option {
                                    key: "{value}",
                                    value: *value,
                                    selected: params.lota_id == *value,
                                    "{label}"
                                }
                            }
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, r#for: "fao", "Especie" }
                        input {
                            id: "fao",
                            style: INPUT_STYLE,
                            value: "{params.fao}",
                            placeholder: "e.g., all, 1, 2...",
                            oninput: move |evt| on_change.call((QueryField::Fao, evt.value())),
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, r#for: "ilha-id", "Ilha" }
                        select {
                            id: "ilha-id",
                            style: INPUT_STYLE,
                            onchange: move |evt| on_change.call((QueryField::IlhaId, evt.value())),
                            for (value, label) in ISLAND_OPTIONS.iter() {
                                option {
                                    key: "{value}",
                                    value: *value,
                                    selected: params.ilha_id == *value,
                                    "{label}"
                                }
                            }
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, r#for: "start-date", "Start Date" }
                        input {
                            id: "start-date",
                            r#type: "date",
                            style: INPUT_STYLE,
                            value: "{params.start_date}",
                            oninput: move |evt| on_change.call((QueryField::StartDate, evt.value())),
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, r#for: "final-date", "Final Date" }
                        input {
                            id: "final-date",
                            r#type: "date",
                            style: INPUT_STYLE,
                            value: "{params.final_date}",
                            oninput: move |evt| on_change.call((QueryField::FinalDate, evt.value())),
                        }
                    }

                    div {
                        label { style: LABEL_STYLE, r#for: "day-date", "Day Date (Optional)" }
                        input {
                            id: "day-date",
                            r#type: "date",
                            style: INPUT_STYLE,
                            value: "{params.day_date}",
                            oninput: move |evt| on_change.call((QueryField::DayDate, evt.value())),
                        }
                        p {
                            style: "font-size: 12px; color: #6b7280; margin: 4px 0 0 0;",
                            "Leave empty if not needed"
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 16px; padding-top: 24px;",
                    button {
                        r#type: "submit",
                        style: submit_style(loading),
                        disabled: loading,
                        "{submit_label(loading)}"
                    }
                    button {
                        r#type: "button",
                        style: "padding: 12px 24px; background: white; color: #374151; border: 1px solid #d1d5db; border-radius: 8px; font-weight: 500; cursor: pointer;",
                        onclick: move |_| on_reset.call(()),
                        "Reset"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{submit_label, submit_style};

    #[test]
    fn submit_button_reflects_loading() {
        assert_eq!(submit_label(false), "Fetch Data");
        assert_eq!(submit_label(true), "Fetching...");
        assert!(submit_style(true).contains("cursor: not-allowed"));
        assert!(submit_style(false).contains("cursor: pointer"));
    }
}
