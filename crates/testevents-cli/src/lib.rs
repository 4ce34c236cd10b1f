// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! testevents-cli library
//!
//! This module exports the demo driver, its configuration and the console and
//! JSON listeners for use in integration tests and by the binary.

pub mod config;
pub mod console;
pub mod demo;
pub mod json;

pub use config::{Config, ConfigError, OutputFormat};
pub use console::ConsoleListener;
pub use json::JsonLinesListener;
