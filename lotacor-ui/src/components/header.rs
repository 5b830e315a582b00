//! Page title block.

use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 40px;",
            h1 {
                style: "font-size: 36px; font-weight: bold; color: #1f2937; margin: 0 0 12px 0;",
                "Lotacor API Explorer"
            }
            p {
                style: "font-size: 18px; color: #4b5563; max-width: 640px; margin: 0 auto;",
                "Dynamically fetch fishery data from Lotacor API for the Azores region"
            }
        }
    }
}
