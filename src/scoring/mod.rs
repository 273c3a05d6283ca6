// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their numbers and their order.
//!
//! Exact evidence dominates. A keyword found verbatim earns up to 5 points;
//! the best possible fuzzy hit earns 1.05 after weighting. Coverage (how many
//! of the requested keywords showed up at all) adds at most 1.5 on top.

mod core;
pub mod ranking;

pub use core::*;
