//! Triage CLI library.
//!
//! This crate provides the `triage` command line, its configuration, the
//! `show` command and the interactive board.

pub mod cli;
pub mod commands;
pub mod config;
pub mod opener;
pub mod tui;
