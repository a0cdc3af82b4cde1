// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inbound event types, outbound effects, and the transition record.

use listbox_typeahead::TypeaheadView;
use smallvec::SmallVec;

/// A keyboard event, pre-decoded by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Arrow down.
    ArrowDown,
    /// Arrow up; `alt` commits-and-closes instead of navigating.
    ArrowUp {
        /// Whether Alt was held.
        alt: bool,
    },
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter.
    Enter,
    /// Space.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// A bare Shift press.
    Shift,
    /// A printable character, modifier-free.
    Char(char),
}

/// Which surface a key event originated on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeySurface {
    /// The trigger (the closed control and its hidden focus input).
    Trigger,
    /// The free-text input of an editable control.
    Editable,
    /// The filter input inside the overlay.
    Filter,
}

/// Where a pointer press on the control landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The trigger area; toggles the overlay.
    Trigger,
    /// The clear affordance; clears the value, never toggles.
    ClearAffordance,
    /// A text input (editable or filter); ignored for toggling.
    TextInput,
    /// The overlay panel outside any option row.
    Overlay,
}

/// An interaction observed outside the control while its outside listener
/// is bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutsideEvent {
    /// A pointer press outside the trigger and overlay.
    Pointer {
        /// Whether the press landed on the clear affordance, which must not
        /// close the overlay.
        on_clear_affordance: bool,
    },
    /// The document scrolled.
    DocumentScroll,
    /// Any other in-page interaction (resize, orientation change).
    Other,
}

/// A focusable surface the host can be asked to focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Surface {
    /// The trigger's hidden focus input.
    TriggerInput,
    /// The hidden sentinel before the overlay's content.
    FirstHiddenFocusable,
    /// The hidden sentinel after the overlay's content.
    LastHiddenFocusable,
    /// The first focusable descendant inside the overlay.
    OverlayFirstFocusable,
    /// The last focusable descendant inside the overlay.
    OverlayLastFocusable,
}

/// What the editable input's visible text should become.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditableText {
    /// The label of the entry at this index.
    Label(usize),
    /// The label of the current external selection, or empty when none.
    Restore,
    /// Empty.
    Cleared,
}

/// A side effect the host binding layer must apply.
///
/// Effects reference options by their stable index in the current visible
/// list, never by node identity. The control itself never touches the
/// environment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Make the overlay visible.
    Open,
    /// Make the overlay hidden.
    Close,
    /// Give input focus to the rendered row at this index.
    FocusOption(usize),
    /// Scroll the row at this index into view.
    ScrollTo(usize),
    /// Move the text caret to the start of the originating input.
    CaretToStart,
    /// Move the text caret to the end of the originating input.
    CaretToEnd,
    /// Give input focus to a control surface.
    FocusSurface(Surface),
    /// Commit the entry at this index as the new value.
    Commit(usize),
    /// Commit a cleared (absent) value.
    CommitCleared,
    /// Commit the editable input's current text as the value.
    CommitText,
    /// Replace the editable input's visible text.
    SetEditableText(EditableText),
    /// Recompute the visible list from the control's current filter text.
    Refilter,
    /// Realign the overlay to its anchor.
    Align,
    /// The filter text changed.
    NotifyFilter,
    /// The overlay finished opening.
    NotifyShow,
    /// The overlay finished closing.
    NotifyHide,
    /// The control gained input focus.
    NotifyFocus,
    /// The control lost input focus (deferred by the blur delay).
    NotifyBlur,
    /// Acquire a stacking/z-index resource for the overlay.
    AcquireStacking,
    /// Release the stacking/z-index resource.
    ReleaseStacking,
    /// Start observing outside interactions.
    BindOutsideListener,
    /// Stop observing outside interactions.
    UnbindOutsideListener,
}

/// The result of feeding one event to the control.
///
/// `consumed` means the host should suppress the event's default handling
/// (`preventDefault` in a browser binding). Effects are applied in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Whether the event's default handling should be suppressed.
    pub consumed: bool,
    /// Side effects for the host to apply, in order.
    pub effects: SmallVec<[Effect; 4]>,
}

impl Transition {
    /// An unconsumed, effect-free transition.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    /// A consumed transition with no effects yet.
    #[must_use]
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            effects: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Whether this transition changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.consumed && self.effects.is_empty()
    }
}

/// The control's view of the visible option list.
///
/// Extends the typeahead view with value presence, which decides whether
/// committing an entry selects or clears.
pub trait ComboView: TypeaheadView {
    /// Whether the entry at `index` resolves to a value. Value-less entries
    /// (placeholder rows) close the overlay without committing.
    fn has_value(&self, index: usize) -> bool;
}

/// Per-event context supplied by the host.
///
/// The control borrows the current visible list and the external
/// selection's position in it; it owns neither.
#[derive(Copy, Clone, Debug)]
pub struct ComboContext<'a, V: ComboView + ?Sized> {
    /// The current visible option list.
    pub view: &'a V,
    /// Index of the external selection in `view`, when present and
    /// selectable there.
    pub selected: Option<usize>,
    /// Whether the overlay currently exposes focusable descendants of its
    /// own (filter input, custom content).
    pub overlay_has_focusables: bool,
    /// Current time in milliseconds, from any monotonic host clock.
    pub now_ms: u64,
}
