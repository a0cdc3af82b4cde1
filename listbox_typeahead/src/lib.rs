// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox Typeahead: resolve rapid keystrokes into jump-to-match navigation.
//!
//! A list-box control lets the user type the leading characters of an option
//! label to move the cursor there. This crate owns the transient search
//! buffer for that interaction:
//!
//! - Characters accumulate into a buffer; the comparison is case-insensitive
//!   "label starts with buffer".
//! - The scan starts at the focused entry (inclusive) and wraps once around
//!   the list, so repeated single characters cycle through options sharing a
//!   prefix.
//! - The buffer expires after [`RESET_TIMEOUT_MS`] of inactivity. There is
//!   no timer here: callers pass a millisecond timestamp with every
//!   keystroke and may schedule a wakeup for [`Typeahead::deadline_ms`] to
//!   call [`Typeahead::expire`], in the same style as the timestamped event
//!   state machines elsewhere in this workspace.
//! - When the buffer matches nothing and no entry is focused, the match
//!   falls back to the control's first-focusable seed. A miss *with* an
//!   existing focus changes nothing — the cursor stays put and the buffer
//!   keeps ticking.
//!
//! ## Minimal example
//!
//! ```rust
//! # extern crate alloc;
//! use listbox_cursor::NavView;
//! use listbox_typeahead::{TypeMatch, Typeahead, TypeaheadView};
//!
//! struct Labels(&'static [&'static str]);
//!
//! impl NavView for Labels {
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn is_selectable(&self, index: usize) -> bool {
//!         index < self.0.len()
//!     }
//! }
//!
//! impl TypeaheadView for Labels {
//!     fn label(&self, index: usize) -> Option<alloc::borrow::Cow<'_, str>> {
//!         self.0.get(index).map(|s| (*s).into())
//!     }
//! }
//!
//! let view = Labels(&["Apple", "Banana", "Berry"]);
//! let mut typeahead = Typeahead::new();
//!
//! // "b" jumps to Banana…
//! assert_eq!(
//!     typeahead.type_char('b', 1_000, &view, None, None),
//!     TypeMatch::Matched(1)
//! );
//! // …and "e" within 500ms refines the buffer to "be" → Berry.
//! assert_eq!(
//!     typeahead.type_char('e', 1_200, &view, Some(1), None),
//!     TypeMatch::Matched(2)
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;

use listbox_cursor::{NavView, first_focusable};

/// Inactivity window after which the search buffer is discarded, in
/// milliseconds.
pub const RESET_TIMEOUT_MS: u64 = 500;

/// A navigable view that can also resolve display labels.
///
/// Labels drive the starts-with comparison. Entries without a resolvable
/// label (for example group headers in some data shapes) simply never match.
pub trait TypeaheadView: NavView {
    /// Display label of the entry at `index`, if one can be resolved.
    fn label(&self, index: usize) -> Option<Cow<'_, str>>;
}

/// Result of feeding one character to the typeahead buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeMatch {
    /// The buffer matched the label at this index; move the cursor there.
    Matched(usize),
    /// The buffer matched nothing, no entry was focused, and the search fell
    /// back to the first-focusable seed; move the cursor there.
    Fallback(usize),
    /// The buffer matched nothing and the cursor should stay where it is.
    Miss,
}

/// Transient typeahead search buffer with timestamp-driven expiry.
///
/// All methods take the current time as a caller-supplied millisecond
/// timestamp; the buffer holds a deadline rather than a timer. A keystroke
/// arriving at or after the deadline starts a fresh buffer, so keystrokes
/// separated by more than [`RESET_TIMEOUT_MS`] behave as independent
/// single-character searches.
#[derive(Clone, Debug, Default)]
pub struct Typeahead {
    buffer: String,
    deadline_ms: Option<u64>,
}

impl Typeahead {
    /// Create an empty typeahead buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated search text. Empty when no search is pending.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Timestamp at which the pending buffer expires, if one is pending.
    ///
    /// Hosts that want eager expiry (rather than expiry on the next
    /// keystroke) can schedule a wakeup for this instant and call
    /// [`Self::expire`].
    #[must_use]
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Discard the buffer and cancel the pending deadline.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.deadline_ms = None;
    }

    /// Discard the buffer if `now_ms` has reached the deadline.
    ///
    /// Returns `true` if the buffer was cleared.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        if self.deadline_ms.is_some_and(|deadline| now_ms >= deadline) {
            self.clear();
            return true;
        }
        false
    }

    /// Append one character at `now_ms` and resolve the buffer against
    /// `view`.
    ///
    /// `focused` is the currently focused entry: the scan runs from it
    /// (inclusive) to the end of the list, then wraps to scan the entries
    /// before it. `selected` is the index of the committed selection in
    /// `view`, used only for the no-focus fallback seed.
    ///
    /// Each keystroke restarts the expiry deadline; it never resets the
    /// buffer unless the previous deadline had already passed.
    pub fn type_char<V: TypeaheadView + ?Sized>(
        &mut self,
        ch: char,
        now_ms: u64,
        view: &V,
        focused: Option<usize>,
        selected: Option<usize>,
    ) -> TypeMatch {
        self.expire(now_ms);
        self.buffer.push(ch);
        self.deadline_ms = Some(now_ms.saturating_add(RESET_TIMEOUT_MS));

        let needle = self.buffer.to_lowercase();
        let matched = match focused {
            Some(origin) => (origin..view.len())
                .chain(0..origin)
                .find(|&i| label_starts_with(view, i, &needle)),
            None => (0..view.len()).find(|&i| label_starts_with(view, i, &needle)),
        };

        match matched {
            Some(index) => TypeMatch::Matched(index),
            None if focused.is_none() => match first_focusable(view, selected) {
                Some(index) => TypeMatch::Fallback(index),
                None => TypeMatch::Miss,
            },
            None => TypeMatch::Miss,
        }
    }
}

fn label_starts_with<V: TypeaheadView + ?Sized>(view: &V, index: usize, needle: &str) -> bool {
    view.is_selectable(index)
        && view
            .label(index)
            .is_some_and(|label| label.to_lowercase().starts_with(needle))
}
