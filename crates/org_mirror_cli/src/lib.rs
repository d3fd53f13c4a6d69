//! org-mirror CLI library exports for integration testing.
//!
//! This module exposes the command implementations and configuration handling.

pub mod commands;
pub mod config;
pub mod errors;
