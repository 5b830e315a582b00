//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/bar-chart.js`, is embedded at
//! compile time and evaluated as a global (no ES modules) once D3 has loaded.

use log::warn;

static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// D3 build injected by `init_charts` when the page has none.
pub const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Lotacor JS call failed:', e); }}",
        code
    );
    if js_sys::eval(&wrapped).is_err() {
        warn!("JS evaluation failed");
    }
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Load D3 and initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is evaluated at global scope via indirect eval once D3 is
/// ready, and `renderBarChart` is promoted to `window`.
pub fn init_charts() {
    call_js(&format!(
        "if (typeof d3 === 'undefined') {{ var s = document.createElement('script'); s.src = {}; document.head.appendChild(s); }}",
        js_string(D3_SRC)
    ));
    call_js(&format!(
        "window.__lotacorChartScripts = {};",
        js_string(BAR_CHART_JS)
    ));

    call_js(
        r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__lotacorChartScripts);
                    delete window.__lotacorChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__lotacorChartsReady = true;
                }
            }, 100);
        })();
        "#,
    );
}

/// Render the response bar chart into `container_id`.
///
/// Polls until D3, the chart script and the container element all exist.
/// A later render or [`destroy_chart`] cancels a poll that is still waiting.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&bar_chart_script(container_id, data_json, config_json));
}

fn bar_chart_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var gen = window.__lotacorChartGen = (window.__lotacorChartGen || 0) + 1;
            var poll = setInterval(function() {{
                if (window.__lotacorChartGen !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__lotacorChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Lotacor] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Clear a chart container and cancel any pending render.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_script(container_id));
}

fn destroy_chart_script(container_id: &str) -> String {
    format!(
        "window.__lotacorChartGen = (window.__lotacorChartGen || 0) + 1; \
         var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    )
}

/// Origin of the page hosting the app, e.g. `http://localhost:8080`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
