//! Loading indicator.

use dioxus::prelude::*;

/// Shown while a query is in flight.
#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 48px 0; font-size: 18px; color: #4b5563;",
            "Fetching data from Lotacor API..."
        }
    }
}
