// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration.

use bitflags::bitflags;

bitflags! {
    /// Boolean configuration surface of the control.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ComboFlags: u16 {
        /// The trigger hosts a free-text input; typed text commits as the
        /// value and typeahead is off.
        const EDITABLE = 1 << 0;
        /// All keyboard and pointer handling is short-circuited.
        const DISABLED = 1 << 1;
        /// Pointer toggling is blocked while data is loading; keys still
        /// work.
        const LOADING = 1 << 2;
        /// A filter text input is rendered inside the overlay.
        const FILTER = 1 << 3;
        /// Opening with no prior focus seeds the first focusable entry.
        const AUTO_FOCUS_ON_OPEN = 1 << 4;
        /// Moving the focus cursor also commits the focused entry, without
        /// closing.
        const SELECT_ON_FOCUS = 1 << 5;
        /// Focusing the trigger input opens the overlay.
        const SHOW_ON_FOCUS = 1 << 6;
        /// Closing the overlay clears the filter text.
        const RESET_FILTER_ON_HIDE = 1 << 7;
        /// A document scroll while open closes the overlay instead of
        /// realigning it.
        const CLOSE_ON_DOCUMENT_SCROLL = 1 << 8;
    }
}

/// How long a blur notification is deferred, so a competing option-click
/// commit can land first.
pub const BLUR_DELAY_MS: u64 = 200;

/// Static configuration of a [`Combo`](crate::Combo).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComboConfig {
    /// Boolean flags.
    pub flags: ComboFlags,
    /// Debounce applied to filter text before the visible list is
    /// recomputed. Zero applies immediately.
    pub filter_delay_ms: u64,
    /// Deferral of the blur notification.
    pub blur_delay_ms: u64,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            flags: ComboFlags::AUTO_FOCUS_ON_OPEN,
            filter_delay_ms: 0,
            blur_delay_ms: BLUR_DELAY_MS,
        }
    }
}

impl ComboConfig {
    /// Whether `flag` is set.
    #[must_use]
    pub fn has(&self, flag: ComboFlags) -> bool {
        self.flags.contains(flag)
    }
}
