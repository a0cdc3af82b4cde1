// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with the other Listbox crates.
//!
//! Each adapter is gated behind a feature flag to keep the core control
//! lightweight and dependency-free by default.
//!
//! - [`options`] (`options_adapter` feature): implements the control's view
//!   trait for `listbox_options::ResolvedList`, so a resolved option catalog
//!   plugs straight into [`Combo`](crate::Combo).

#[cfg(feature = "options_adapter")]
pub mod options;
