// Copyright 2026 Lexiscope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lexiscope library — aggregate word lookups from heterogeneous web sources.
//!
//! One lookup fans out to three concurrent retrievals (a scraped synonym
//! page with a JSON API fallback, a dictionary API, and a scraped etymology
//! page) and merges whatever each source produced into a single
//! [`model::LookupResult`]. A failing source yields an empty field, never a
//! failed lookup.

pub mod aggregate;
pub mod cli;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod panel;
pub mod sources;
