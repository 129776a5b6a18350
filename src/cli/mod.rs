//! CLI module for promptr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for inspecting
//! templates, checking delimiter compliance, and extracting spans.

pub mod commands;

pub use commands::Cli;
