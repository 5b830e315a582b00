//! Error panel with retry and edit actions.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorHandlerProps {
    /// Message of the failed request, shown verbatim
    pub error: String,
    pub on_retry: EventHandler<()>,
    pub on_edit: EventHandler<()>,
}

#[component]
pub fn ErrorHandler(props: ErrorHandlerProps) -> Element {
    rsx! {
        div {
            style: "background: #fef2f2; border: 1px solid #fecaca; border-radius: 12px; padding: 24px; margin-bottom: 32px;",
            h3 {
                style: "font-size: 18px; font-weight: 600; color: #991b1b; margin: 0 0 12px 0;",
                "Error Fetching Data"
            }
            p {
                class: "error-message",
                style: "color: #b91c1c; margin: 0 0 16px 0;",
                "{props.error}"
            }
            div {
                style: "display: flex; gap: 12px;",
                button {
                    style: "padding: 8px 16px; background: #dc2626; color: white; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| props.on_retry.call(()),
                    "Try Again"
                }
                button {
                    style: "padding: 8px 16px; background: #4b5563; color: white; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| props.on_edit.call(()),
                    "Edit Parameters"
                }
            }
            div {
                style: "margin-top: 16px; padding: 16px; background: #fefce8; border: 1px solid #fef08a; border-radius: 8px; font-size: 14px; color: #854d0e;",
                strong { "Note: " }
                "This error might be due to CORS restrictions."
            }
        }
    }
}
