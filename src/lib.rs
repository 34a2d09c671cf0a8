#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # flowcanvas
//!
//! Command-line tooling for flowcanvas workflows: offline checks of exported
//! snapshot files and a reqwest client for the workflow REST backend.

pub mod cli;
pub mod commands;
pub mod http;

pub use flowcanvas_core;
pub use http::HttpRepository;
