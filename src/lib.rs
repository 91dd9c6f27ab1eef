//! portfolio: query a catalog of projects from the command line or over HTTP.
//!
//! The binary is a thin shell: configuration and logging setup live here,
//! the query engine lives in `portfolio-core` and the HTTP routes in
//! `portfolio-web`. This crate exposes its modules so integration tests can
//! drive the command line directly.
//!
//! # Architecture
//!
//! ```text
//! config.toml ──► Cli ──► serve ──► portfolio-web ──┐
//!                  │                                ├──► portfolio-core
//!                  └──► headless commands ──────────┘
//! ```

pub mod cli;
pub mod logging;
