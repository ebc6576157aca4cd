//! Terminal host for the widget: stands in for the page that embeds it.
mod app;
mod config;
mod effects;
mod input;
mod logging;
mod notify;
mod ui;

pub use app::run_app;
