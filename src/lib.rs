// Copyright 2026 Interop Atlas Contributors
// SPDX-License-Identifier: Apache-2.0

//! Interop Atlas library: scrape a vendor's healthcare interface
//! documentation site into a structured catalog and render it as a report.
//!
//! This library crate exposes the core modules for integration testing.

pub mod catalog;
pub mod cli;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod store;
