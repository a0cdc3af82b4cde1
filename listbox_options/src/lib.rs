// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox Options: the option catalog behind a list-box control.
//!
//! This crate turns raw, caller-shaped option data into the **visible option
//! list** a list-box control actually navigates:
//!
//! - An [`OptionAccessor`] resolves the attributes of an opaque option
//!   record: display label, comparison value, disabled flag, group children,
//!   named search fields, and the equality used against the external
//!   selected value (structural by default, narrowable to a key field).
//! - [`ResolvedList::resolve`] flattens grouped data (group headers
//!   interleaved with their children) and, when filtering is active, narrows
//!   each group's children independently, dropping groups left empty. The
//!   result is an index table of [`ListEntry`] coordinates into the *raw*
//!   data — nothing is copied and nothing recurses.
//! - [`selected_coord`] / [`current_selection`] map the external
//!   selected value back onto the raw collection, as grouped
//!   `{group, child}` coordinates or a flat index.
//!
//! The resolved list implements [`listbox_cursor::NavView`] and
//! [`listbox_typeahead::TypeaheadView`], so cursor navigation and typeahead
//! search run directly over it.
//!
//! Resolution is a pure function of its inputs. The list is expected to be
//! recomputed whenever the raw data or the filter text changes, never cached
//! across them.
//!
//! ## Minimal example
//!
//! ```rust
//! use listbox_cursor::NavView;
//! use listbox_options::{BasicAccessor, BasicOption, FilterSpec, ResolvedList};
//!
//! let options = [
//!     BasicOption::group(
//!         "Citrus",
//!         vec![BasicOption::new("Lemon", 1), BasicOption::new("Lime", 2)],
//!     ),
//!     BasicOption::group("Berries", vec![BasicOption::new("Blueberry", 3)]),
//! ];
//!
//! // Filtering for "li" keeps the Citrus header and Lime only; the Berries
//! // group is dropped entirely.
//! let accessor = BasicAccessor::new();
//! let list = ResolvedList::resolve(
//!     &accessor,
//!     &options,
//!     true,
//!     Some(&FilterSpec::new("li")),
//! );
//! assert_eq!(list.len(), 2);
//! assert!(list.is_group(0));
//! assert_eq!(list.label(1).as_deref(), Some("Lime"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod accessor;
mod filter;
mod list;
mod selection;

pub use accessor::{BasicAccessor, BasicOption, OptionAccessor};
pub use filter::{FilterSpec, MatchMode};
pub use list::{ListEntry, ResolvedList};
pub use selection::{SelectedCoord, current_selection, is_selected, selected_coord};
