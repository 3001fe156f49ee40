//! `tuido` — single-screen terminal to-do list library.

pub mod app;
pub mod config;
pub mod store;
pub mod tasks;
pub mod ui;
