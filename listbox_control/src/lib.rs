// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox Control: the headless combo-box interaction state machine.
//!
//! ## Overview
//!
//! This crate decides *what happens* when a selectable-list control receives
//! input. It renders nothing and touches no environment: every inbound event
//! (a decoded [`Key`] with its originating [`KeySurface`], a [`ClickTarget`],
//! an [`OutsideEvent`], text changes, overlay lifecycle hooks) is answered
//! with a [`Transition`] — a consumed flag plus an ordered list of
//! [`Effect`]s the host binding layer applies. Row effects address options
//! by their stable index in the current visible list, never by node
//! identity.
//!
//! ## Inputs
//!
//! Each event arrives with a [`ComboContext`]: the current visible list (any
//! [`ComboView`] implementor), the external selection's index in it, whether
//! the overlay exposes focusable descendants, and the current time in
//! milliseconds. The committed value itself lives with the caller; the
//! control only emits commit requests.
//!
//! ## State
//!
//! [`Combo`] owns the focus cursor, the open flag, the filter text, the
//! typeahead buffer, and the "just clicked" pointer bias. Two top-level
//! states, Closed and Open, further conditioned by the `EDITABLE` and
//! `DISABLED` [`ComboFlags`].
//!
//! ## Time
//!
//! There is no runtime and no timer thread. Typeahead expiry, the filter
//! debounce, and the deferred blur notification are all deadlines derived
//! from event timestamps; the host calls [`Combo::poll`] at
//! [`Combo::next_deadline`] to fire them. Teardown via [`Combo::on_detach`]
//! cancels everything.
//!
//! ## Adapters
//!
//! The `options_adapter` feature implements [`ComboView`] for
//! `listbox_options::ResolvedList`, wiring the option catalog straight into
//! the control.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adapters;
mod config;
mod control;
mod types;

pub use config::{BLUR_DELAY_MS, ComboConfig, ComboFlags};
pub use control::Combo;
pub use types::{
    ClickTarget, ComboContext, ComboView, EditableText, Effect, Key, KeySurface, OutsideEvent,
    Surface, Transition,
};
