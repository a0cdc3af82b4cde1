// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox Cursor: keyboard cursor primitives for option lists.
//!
//! This crate models the keyboard cursor of a list-box style control as a set
//! of pure index computations over a read-only view of the visible option
//! list:
//!
//! - A **navigable view** ([`NavView`]) that reports how many entries exist
//!   and which of them are *selectable* (neither disabled nor a group
//!   header).
//! - **Edge-stopping steps** ([`next_selectable`] / [`prev_selectable`]) that
//!   skip unselectable entries and return the input index unchanged when no
//!   valid neighbor exists — the cursor never wraps around.
//! - **Seeds** ([`first_selectable`] / [`last_selectable`] and the
//!   selection-aware [`first_focusable`] / [`last_focusable`]) used when the
//!   overlay opens or Home/End is pressed.
//!
//! The cursor itself (which index is currently focused) is owned by a higher
//! layer; this crate only answers "where can the cursor go next".
//!
//! ## Minimal example
//!
//! A five-entry list where entry 1 is disabled and entry 2 is a group
//! header:
//!
//! ```rust
//! use listbox_cursor::{NavView, first_focusable, next_selectable};
//!
//! struct Flags(&'static [bool]);
//!
//! impl NavView for Flags {
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn is_selectable(&self, index: usize) -> bool {
//!         self.0[index]
//!     }
//! }
//!
//! let view = Flags(&[true, false, false, true, true]);
//!
//! // Stepping from entry 0 skips the disabled entry and the header.
//! assert_eq!(next_selectable(&view, 0), 3);
//! // Stepping past the end leaves the cursor where it is.
//! assert_eq!(next_selectable(&view, 4), 4);
//! // With a selected entry the overlay seeds focus there, else at the first
//! // selectable entry.
//! assert_eq!(first_focusable(&view, Some(3)), Some(3));
//! assert_eq!(first_focusable(&view, None), Some(0));
//! ```
//!
//! Indices out of range are tolerated everywhere: a stale index simply fails
//! the selectability test and the functions degrade to their no-match
//! behavior. Nothing here panics.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

/// A read-only view of the entries the keyboard cursor can travel over.
///
/// Implementations describe the *visible* option list of a control — the
/// post-flatten, post-filter sequence — where group headers and disabled
/// options occupy indices but can never hold the cursor.
pub trait NavView {
    /// Number of entries in the visible list.
    fn len(&self) -> usize;

    /// Returns `true` if the view contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the entry at `index` can hold the cursor.
    ///
    /// Must return `false` for disabled options, group headers, and any
    /// out-of-range index.
    fn is_selectable(&self, index: usize) -> bool;
}

/// First selectable index, or `None` when every entry is unselectable.
pub fn first_selectable<V: NavView + ?Sized>(view: &V) -> Option<usize> {
    (0..view.len()).find(|&i| view.is_selectable(i))
}

/// Last selectable index, or `None` when every entry is unselectable.
pub fn last_selectable<V: NavView + ?Sized>(view: &V) -> Option<usize> {
    (0..view.len()).rev().find(|&i| view.is_selectable(i))
}

/// Nearest selectable index after `index`, or `index` itself when none
/// exists.
///
/// The cursor stops at the edge: stepping forward from the last selectable
/// entry is a no-op rather than a wraparound.
pub fn next_selectable<V: NavView + ?Sized>(view: &V, index: usize) -> usize {
    let start = index.saturating_add(1);
    (start..view.len())
        .find(|&i| view.is_selectable(i))
        .unwrap_or(index)
}

/// Nearest selectable index before `index`, or `index` itself when none
/// exists.
pub fn prev_selectable<V: NavView + ?Sized>(view: &V, index: usize) -> usize {
    (0..index.min(view.len()))
        .rev()
        .find(|&i| view.is_selectable(i))
        .unwrap_or(index)
}

/// Seed index for opening or Home-style navigation: the current selection
/// when it is present and selectable, else the first selectable entry.
///
/// A selection that is disabled in the current view (or stale after a
/// filter change) is ignored, so the cursor never seeds onto an entry it
/// could not otherwise reach.
pub fn first_focusable<V: NavView + ?Sized>(view: &V, selected: Option<usize>) -> Option<usize> {
    selected
        .filter(|&i| view.is_selectable(i))
        .or_else(|| first_selectable(view))
}

/// Seed index for End-style navigation: the current selection when present
/// and selectable, else the last selectable entry.
pub fn last_focusable<V: NavView + ?Sized>(view: &V, selected: Option<usize>) -> Option<usize> {
    selected
        .filter(|&i| view.is_selectable(i))
        .or_else(|| last_selectable(view))
}
