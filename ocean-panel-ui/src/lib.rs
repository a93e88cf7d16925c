//! Dioxus components for the 3D model panel.
//!
//! This crate provides:
//! - `state`: `AppState` holding the panel controller in a Dioxus Signal
//! - `components`: the panel, its selection row, combo boxes and plot viewport

pub mod components;
pub mod state;
