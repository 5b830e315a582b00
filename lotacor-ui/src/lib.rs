//! Shared Dioxus components and D3.js bridge for the Lotacor explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: The RSX views (filter form, result, error, loader, ...)

pub mod js_bridge;
pub mod state;
pub mod components;
