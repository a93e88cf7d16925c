//! Core types for the 3D model panel.
//!
//! This crate has no UI dependencies so the same query plumbing can be
//! driven from the Dioxus panel and from the command-line tool:
//! - `query`: the plot `Query` and `derive_url`
//! - `canonical`: key-order-independent JSON encoding
//! - `panel`: the `PanelController` state holder
//! - `props`: initial properties handed to the panel
//! - `api`: metadata endpoints and (with the `api` feature) an HTTP client
//! - `options`: combo-box option items and selection toggling

pub mod api;
pub mod canonical;
pub mod options;
pub mod panel;
pub mod props;
pub mod query;

pub use panel::{PanelController, PanelPhase, SelectionState};
pub use props::InitialProps;
pub use query::{derive_url, Query};
