//! phantomwp - WordPress reconnaissance scanner
//!
//! Determines whether target web servers run WordPress by inspecting
//! HTTP response headers and probing well-known WordPress paths.
//! Supports single-target checks and concurrent batch scans from a
//! line-delimited target list.

pub mod cli;
pub mod config;
pub mod constants;
pub mod detector;
pub mod models;
pub mod output;
pub mod scanner;
