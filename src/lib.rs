// Copyright 2026 Termscout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Termscout library — heuristic key-date extraction from academic pages.
//!
//! The core of the crate is the synchronous scrape pipeline in [`extract`]:
//! three independent DOM strategies (tables, heading-delimited sections,
//! lists) feed a dedup step and produce a flat list of [`model::ScrapedDate`]
//! records. The [`fetch`] and [`store`] modules are thin async/filesystem
//! collaborators around that core.

pub mod cli;
pub mod dates;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod store;
