//! # Launch Dashboard
//!
//! Interactive dashboard over a historical rocket launch dataset.
//!
//! The crate loads a static CSV of launch records once at start-up and
//! serves a single page with two controls (a launch site dropdown and a
//! payload range slider) and two charts (a success pie chart and a payload
//! vs. outcome scatter chart). Every control change re-renders the charts
//! that depend on it.
//!
//! ## Architecture
//!
//! - [`models`]: Launch records and the immutable, shared dataset
//! - [`io`]: Polars-based CSV loader
//! - [`controls`]: Control domains and the control state
//! - [`charts`]: Engine-independent chart specifications
//! - [`services`]: Pure chart bindings (pie, scatter)
//! - [`reactive`]: Listener subscriptions and event dispatch
//! - [`layout`]: Declarative page tree and HTML rendering
//! - [`config`]: Optional `dashboard.toml` settings
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod charts;
pub mod config;
pub mod controls;
pub mod io;
pub mod layout;
pub mod models;
pub mod reactive;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
