// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The combo-box control state machine.

use alloc::string::String;

use listbox_cursor::{
    first_focusable, first_selectable, last_focusable, last_selectable, next_selectable,
    prev_selectable,
};
use listbox_typeahead::{TypeMatch, Typeahead};

use crate::config::{ComboConfig, ComboFlags};
use crate::types::{
    ClickTarget, ComboContext, ComboView, EditableText, Effect, Key, KeySurface, OutsideEvent,
    Surface, Transition,
};

/// The headless combo-box control.
///
/// Owns the focus cursor, the open flag, the filter text, the typeahead
/// buffer, and the "just clicked" bias. The committed value stays outside;
/// each event arrives with a [`ComboContext`] describing the current visible
/// list and where the external selection sits in it, and leaves as a
/// [`Transition`] of effects for the host to apply.
///
/// Time-based behaviors (typeahead expiry, filter debounce, deferred blur)
/// are driven by the timestamps on incoming events plus [`Combo::poll`];
/// [`Combo::next_deadline`] tells the host when the next poll is due.
#[derive(Clone, Debug)]
pub struct Combo {
    config: ComboConfig,
    open: bool,
    focused: Option<usize>,
    just_clicked: bool,
    typeahead: Typeahead,
    filter: String,
    filter_deadline_ms: Option<u64>,
    blur_deadline_ms: Option<u64>,
}

impl Combo {
    /// A closed control with the given configuration.
    #[must_use]
    pub fn new(config: ComboConfig) -> Self {
        Self {
            config,
            open: false,
            focused: None,
            just_clicked: false,
            typeahead: Typeahead::new(),
            filter: String::new(),
            filter_deadline_ms: None,
            blur_deadline_ms: None,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ComboConfig {
        &self.config
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the focused option in the visible list, if any.
    ///
    /// When `Some(i)`, entry `i` is selectable in the list the focus was
    /// computed against.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The current filter text.
    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// The earliest pending deadline (typeahead expiry, filter debounce, or
    /// deferred blur), for scheduling the next [`Self::poll`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.typeahead.deadline_ms(),
            self.filter_deadline_ms,
            self.blur_deadline_ms,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Advance time to `now_ms`, firing any deadline that has passed.
    pub fn poll(&mut self, now_ms: u64) -> Transition {
        let mut tx = Transition::ignored();
        let _ = self.typeahead.expire(now_ms);
        if self.filter_deadline_ms.is_some_and(|d| now_ms >= d) {
            self.filter_deadline_ms = None;
            tx.push(Effect::Refilter);
            if self.open {
                tx.push(Effect::Align);
            }
        }
        if self.blur_deadline_ms.is_some_and(|d| now_ms >= d) {
            self.blur_deadline_ms = None;
            tx.push(Effect::NotifyBlur);
        }
        tx
    }

    /// A key event on one of the control's surfaces.
    pub fn on_key<V: ComboView + ?Sized>(
        &mut self,
        key: Key,
        surface: KeySurface,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        if self.config.has(ComboFlags::DISABLED) {
            return Transition::ignored();
        }
        let tx = match surface {
            KeySurface::Filter => self.filter_key(key, ctx),
            KeySurface::Trigger => self.surface_key(key, false, ctx),
            KeySurface::Editable => self.surface_key(key, true, ctx),
        };
        // A key on the trigger or editable surface supersedes the pointer
        // bias; filter-input keys leave it alone.
        if surface != KeySurface::Filter {
            self.just_clicked = false;
        }
        tx
    }

    fn surface_key<V: ComboView + ?Sized>(
        &mut self,
        key: Key,
        in_text: bool,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        match key {
            Key::ArrowDown => self.arrow_down(ctx),
            Key::ArrowUp { alt } => self.arrow_up(alt, in_text, ctx),
            Key::ArrowLeft | Key::ArrowRight => {
                // Caret movement wins over list navigation.
                if in_text {
                    self.focused = None;
                }
                Transition::ignored()
            }
            Key::Home => {
                if in_text {
                    self.focused = None;
                    let mut tx = Transition::consumed();
                    tx.push(Effect::CaretToStart);
                    tx
                } else {
                    self.focus_edge_and_open(first_selectable(ctx.view), ctx)
                }
            }
            Key::End => {
                if in_text {
                    self.focused = None;
                    let mut tx = Transition::consumed();
                    tx.push(Effect::CaretToEnd);
                    tx
                } else {
                    self.focus_edge_and_open(last_selectable(ctx.view), ctx)
                }
            }
            // Consumed so the page does not scroll underneath the overlay.
            Key::PageUp | Key::PageDown => Transition::consumed(),
            Key::Enter => self.enter(ctx),
            Key::Space => {
                if in_text {
                    Transition::ignored()
                } else {
                    self.enter(ctx)
                }
            }
            Key::Escape => self.escape(),
            Key::Tab => self.tab(ctx),
            Key::Backspace => {
                if in_text && !self.open {
                    let mut tx = Transition::ignored();
                    self.show_into(ctx, &mut tx);
                    tx
                } else {
                    Transition::ignored()
                }
            }
            Key::Shift => Transition::ignored(),
            Key::Char(ch) => {
                if in_text || self.config.has(ComboFlags::EDITABLE) {
                    return Transition::ignored();
                }
                let mut tx = Transition::consumed();
                if !self.open {
                    self.show_into(ctx, &mut tx);
                }
                match self
                    .typeahead
                    .type_char(ch, ctx.now_ms, ctx.view, self.focused, ctx.selected)
                {
                    TypeMatch::Matched(i) | TypeMatch::Fallback(i) => {
                        self.change_focus_into(i, ctx, &mut tx);
                    }
                    TypeMatch::Miss => {}
                }
                tx
            }
        }
    }

    /// The filter input routes navigation keys to the list and keeps
    /// everything else as plain text editing.
    fn filter_key<V: ComboView + ?Sized>(
        &mut self,
        key: Key,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        match key {
            Key::ArrowDown => self.arrow_down(ctx),
            Key::ArrowUp { alt } => self.arrow_up(alt, true, ctx),
            Key::ArrowLeft | Key::ArrowRight => {
                self.focused = None;
                Transition::ignored()
            }
            Key::Enter => self.enter(ctx),
            Key::Escape => self.escape(),
            _ => Transition::ignored(),
        }
    }

    /// A pointer press on the control itself.
    pub fn on_click<V: ComboView + ?Sized>(
        &mut self,
        target: ClickTarget,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        if self.config.has(ComboFlags::DISABLED) || self.config.has(ComboFlags::LOADING) {
            return Transition::ignored();
        }
        match target {
            ClickTarget::Trigger => {
                let mut tx = Transition::consumed();
                if self.open {
                    self.hide_into(false, &mut tx);
                } else {
                    self.show_into(ctx, &mut tx);
                }
                self.just_clicked = true;
                tx.push(Effect::FocusSurface(Surface::TriggerInput));
                tx
            }
            ClickTarget::ClearAffordance => self.clear(),
            ClickTarget::TextInput | ClickTarget::Overlay => Transition::ignored(),
        }
    }

    /// A pointer press on an option row.
    ///
    /// Closes the overlay regardless of the row; commits only when the row
    /// is selectable.
    pub fn on_option_click<V: ComboView + ?Sized>(
        &mut self,
        index: usize,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        if self.config.has(ComboFlags::DISABLED) {
            return Transition::ignored();
        }
        let mut tx = Transition::consumed();
        if ctx.view.is_selectable(index) {
            if ctx.view.has_value(index) {
                tx.push(Effect::Commit(index));
                if self.config.has(ComboFlags::EDITABLE) {
                    tx.push(Effect::SetEditableText(EditableText::Label(index)));
                }
            } else {
                tx.push(Effect::CommitCleared);
                if self.config.has(ComboFlags::EDITABLE) {
                    tx.push(Effect::SetEditableText(EditableText::Restore));
                }
            }
            tx.push(Effect::FocusSurface(Surface::TriggerInput));
        }
        self.hide_into(false, &mut tx);
        tx
    }

    /// Keyboard activation of the clear affordance.
    pub fn on_clear_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Enter | Key::Space => self.clear(),
            _ => Transition::ignored(),
        }
    }

    /// Focus arrived on one of the hidden sentinel focusables.
    ///
    /// Coming from the trigger, the hop continues into the overlay's
    /// first/last focusable descendant; coming from anywhere else it returns
    /// to the trigger.
    pub fn on_sentinel_focus(&self, sentinel: Surface, from_trigger: bool) -> Transition {
        let target = match (sentinel, from_trigger) {
            (Surface::FirstHiddenFocusable, true) => Surface::OverlayFirstFocusable,
            (Surface::LastHiddenFocusable, true) => Surface::OverlayLastFocusable,
            _ => Surface::TriggerInput,
        };
        let mut tx = Transition::consumed();
        tx.push(Effect::FocusSurface(target));
        tx
    }

    /// An interaction observed outside the control while open.
    pub fn on_outside(&mut self, event: OutsideEvent) -> Transition {
        if !self.open {
            return Transition::ignored();
        }
        let mut tx = Transition::ignored();
        match event {
            OutsideEvent::Pointer {
                on_clear_affordance: true,
            } => {}
            OutsideEvent::Pointer { .. } => self.hide_into(false, &mut tx),
            OutsideEvent::DocumentScroll => {
                if self.config.has(ComboFlags::CLOSE_ON_DOCUMENT_SCROLL) {
                    self.hide_into(false, &mut tx);
                } else {
                    tx.push(Effect::Align);
                }
            }
            OutsideEvent::Other => tx.push(Effect::Align),
        }
        tx
    }

    /// Free text typed into an editable control.
    ///
    /// Opens the overlay if it is closed, then moves the focus cursor
    /// speculatively to the exact label match, else the first prefix match,
    /// without requesting row focus; the text itself commits as the value.
    pub fn on_editable_input<V: ComboView + ?Sized>(
        &mut self,
        text: &str,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        if self.config.has(ComboFlags::DISABLED) {
            return Transition::ignored();
        }
        let mut tx = Transition::ignored();
        if !self.open {
            self.show_into(ctx, &mut tx);
        }
        let view = ctx.view;
        if text.is_empty() {
            self.focused = None;
        } else {
            let needle = text.to_lowercase();
            let exact = (0..view.len()).find(|&i| {
                view.is_selectable(i)
                    && view.label(i).is_some_and(|l| l.to_lowercase() == needle)
            });
            self.focused = exact.or_else(|| {
                (0..view.len()).find(|&i| {
                    view.is_selectable(i)
                        && view
                            .label(i)
                            .is_some_and(|l| l.to_lowercase().starts_with(needle.as_str()))
                })
            });
        }
        tx.push(Effect::CommitText);
        tx
    }

    /// The filter input's text changed.
    pub fn on_filter_input(&mut self, text: &str, now_ms: u64) -> Transition {
        if self.config.has(ComboFlags::DISABLED) {
            return Transition::ignored();
        }
        self.filter.clear();
        self.filter.push_str(text);
        self.focused = None;
        let mut tx = Transition::ignored();
        tx.push(Effect::NotifyFilter);
        if self.config.filter_delay_ms == 0 {
            tx.push(Effect::Refilter);
            if self.open {
                tx.push(Effect::Align);
            }
        } else {
            self.filter_deadline_ms = Some(now_ms + self.config.filter_delay_ms);
        }
        tx
    }

    /// The trigger input gained focus.
    pub fn on_input_focus<V: ComboView + ?Sized>(
        &mut self,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        let mut tx = Transition::ignored();
        tx.push(Effect::NotifyFocus);
        if self.config.has(ComboFlags::SHOW_ON_FOCUS) && !self.open {
            self.show_into(ctx, &mut tx);
        }
        tx
    }

    /// The trigger input lost focus. Notification is deferred so a
    /// competing option-click commit can land first.
    pub fn on_input_blur(&mut self, now_ms: u64) -> Transition {
        self.blur_deadline_ms = Some(now_ms + self.config.blur_delay_ms);
        Transition::ignored()
    }

    /// The editable text input gained focus; the overlay collapses so the
    /// text is editable in place.
    pub fn on_editable_input_focus(&mut self) -> Transition {
        let mut tx = Transition::ignored();
        tx.push(Effect::NotifyFocus);
        self.hide_into(false, &mut tx);
        tx
    }

    /// Overlay transition: entering (before it is visible).
    pub fn on_overlay_enter(&self) -> Transition {
        let mut tx = Transition::ignored();
        tx.push(Effect::AcquireStacking);
        tx.push(Effect::Align);
        if let Some(i) = self.focused {
            tx.push(Effect::ScrollTo(i));
        }
        tx
    }

    /// Overlay transition: fully entered.
    pub fn on_overlay_entered(&self) -> Transition {
        let mut tx = Transition::ignored();
        tx.push(Effect::BindOutsideListener);
        tx.push(Effect::NotifyShow);
        tx
    }

    /// Overlay transition: exiting.
    pub fn on_overlay_exit(&self) -> Transition {
        let mut tx = Transition::ignored();
        tx.push(Effect::UnbindOutsideListener);
        tx
    }

    /// Overlay transition: fully exited.
    pub fn on_overlay_exited(&mut self) -> Transition {
        let mut tx = Transition::ignored();
        if self.config.has(ComboFlags::FILTER)
            && self.config.has(ComboFlags::RESET_FILTER_ON_HIDE)
            && !self.filter.is_empty()
        {
            self.filter.clear();
            self.filter_deadline_ms = None;
            tx.push(Effect::NotifyFilter);
            tx.push(Effect::Refilter);
        }
        tx.push(Effect::ReleaseStacking);
        tx.push(Effect::NotifyHide);
        tx
    }

    /// The control was mounted into the host tree.
    pub fn on_attach(&self) -> Transition {
        let mut tx = Transition::ignored();
        tx.push(Effect::Align);
        tx
    }

    /// The control is being torn down. Releases the stacking resource and
    /// cancels every pending deadline, whatever state the control is in.
    pub fn on_detach(&mut self) -> Transition {
        self.open = false;
        self.just_clicked = false;
        self.focused = None;
        self.typeahead.clear();
        self.filter_deadline_ms = None;
        self.blur_deadline_ms = None;
        let mut tx = Transition::ignored();
        tx.push(Effect::UnbindOutsideListener);
        tx.push(Effect::ReleaseStacking);
        tx
    }

    /// Open the overlay. No-op while already open.
    pub fn show<V: ComboView + ?Sized>(&mut self, ctx: &ComboContext<'_, V>) -> Transition {
        if self.config.has(ComboFlags::DISABLED) {
            return Transition::ignored();
        }
        let mut tx = Transition::ignored();
        self.show_into(ctx, &mut tx);
        tx
    }

    /// Close the overlay. No-op while already closed.
    pub fn hide(&mut self) -> Transition {
        let mut tx = Transition::ignored();
        self.hide_into(false, &mut tx);
        tx
    }

    /// Clear the committed value. Also drops the focused option and, on a
    /// filtering control, resets the filter text.
    pub fn clear(&mut self) -> Transition {
        if self.config.has(ComboFlags::DISABLED) {
            return Transition::ignored();
        }
        self.focused = None;
        let mut tx = Transition::consumed();
        tx.push(Effect::CommitCleared);
        if self.config.has(ComboFlags::FILTER) && !self.filter.is_empty() {
            self.filter.clear();
            self.filter_deadline_ms = None;
            tx.push(Effect::NotifyFilter);
            tx.push(Effect::Refilter);
        }
        if self.config.has(ComboFlags::EDITABLE) {
            tx.push(Effect::SetEditableText(EditableText::Cleared));
        }
        tx
    }

    fn arrow_down<V: ComboView + ?Sized>(&mut self, ctx: &ComboContext<'_, V>) -> Transition {
        let mut tx = Transition::consumed();
        if self.open {
            let target = match self.focused {
                Some(i) => Some(next_selectable(ctx.view, i)),
                None if self.just_clicked => first_selectable(ctx.view),
                None => first_focusable(ctx.view, ctx.selected),
            };
            if let Some(t) = target {
                self.change_focus_into(t, ctx, &mut tx);
            }
        } else {
            self.open_from_trigger(ctx, &mut tx);
        }
        tx
    }

    fn arrow_up<V: ComboView + ?Sized>(
        &mut self,
        alt: bool,
        in_text: bool,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        let mut tx = Transition::consumed();
        if alt && !in_text {
            if let Some(i) = self.focused {
                self.commit_entry(i, ctx, &mut tx);
            }
            self.hide_into(true, &mut tx);
        } else {
            let target = match self.focused {
                Some(i) => Some(prev_selectable(ctx.view, i)),
                None if self.just_clicked => last_selectable(ctx.view),
                None => last_focusable(ctx.view, ctx.selected),
            };
            if let Some(t) = target {
                self.change_focus_into(t, ctx, &mut tx);
            }
            if !self.open {
                self.show_into(ctx, &mut tx);
            }
        }
        tx
    }

    fn enter<V: ComboView + ?Sized>(&mut self, ctx: &ComboContext<'_, V>) -> Transition {
        let mut tx = Transition::consumed();
        if self.open {
            // Without a focused option there is nothing to commit and the
            // overlay stays open.
            if let Some(i) = self.focused {
                self.commit_entry(i, ctx, &mut tx);
                self.hide_into(true, &mut tx);
            }
        } else {
            // Seed exactly as ArrowDown would; any speculative focus from
            // editable typing is dropped first.
            self.focused = None;
            self.open_from_trigger(ctx, &mut tx);
        }
        tx
    }

    fn escape(&mut self) -> Transition {
        // Consumed even while closed, so the host never propagates an
        // Escape that could dismiss an enclosing dialog.
        let mut tx = Transition::consumed();
        self.hide_into(true, &mut tx);
        tx
    }

    fn tab<V: ComboView + ?Sized>(&mut self, ctx: &ComboContext<'_, V>) -> Transition {
        if self.open && !ctx.overlay_has_focusables {
            let mut tx = Transition::consumed();
            tx.push(Effect::FocusSurface(Surface::FirstHiddenFocusable));
            return tx;
        }
        // Tab proceeds to the next tab stop; commit what was focused on the
        // way out.
        let mut tx = Transition::ignored();
        if let Some(i) = self.focused {
            self.commit_entry(i, ctx, &mut tx);
        }
        self.hide_into(false, &mut tx);
        tx
    }

    fn focus_edge_and_open<V: ComboView + ?Sized>(
        &mut self,
        target: Option<usize>,
        ctx: &ComboContext<'_, V>,
    ) -> Transition {
        let mut tx = Transition::consumed();
        if let Some(t) = target {
            self.change_focus_into(t, ctx, &mut tx);
        }
        if !self.open {
            self.show_into(ctx, &mut tx);
        }
        tx
    }

    fn open_from_trigger<V: ComboView + ?Sized>(
        &mut self,
        ctx: &ComboContext<'_, V>,
        tx: &mut Transition,
    ) {
        self.show_into(ctx, tx);
        if self.config.has(ComboFlags::EDITABLE) {
            if let Some(s) = ctx.selected {
                self.change_focus_into(s, ctx, tx);
            }
        }
    }

    fn show_into<V: ComboView + ?Sized>(&mut self, ctx: &ComboContext<'_, V>, tx: &mut Transition) {
        if self.open {
            return;
        }
        self.open = true;
        tx.push(Effect::Open);
        let seed = match self.focused {
            Some(i) => Some(i),
            None => {
                if self.config.has(ComboFlags::AUTO_FOCUS_ON_OPEN) {
                    first_focusable(ctx.view, ctx.selected)
                } else if self.config.has(ComboFlags::EDITABLE) {
                    None
                } else {
                    ctx.selected
                }
            }
        };
        if seed != self.focused {
            self.focused = seed;
            if let Some(i) = seed {
                tx.push(Effect::FocusOption(i));
                tx.push(Effect::ScrollTo(i));
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(focused = ?self.focused, "overlay opening");
    }

    fn hide_into(&mut self, refocus_trigger: bool, tx: &mut Transition) {
        if !self.open {
            return;
        }
        self.open = false;
        self.just_clicked = false;
        self.focused = None;
        tx.push(Effect::Close);
        if refocus_trigger {
            tx.push(Effect::FocusSurface(Surface::TriggerInput));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("overlay closing");
    }

    fn change_focus_into<V: ComboView + ?Sized>(
        &mut self,
        target: usize,
        ctx: &ComboContext<'_, V>,
        tx: &mut Transition,
    ) {
        if self.focused == Some(target) {
            return;
        }
        self.focused = Some(target);
        tx.push(Effect::FocusOption(target));
        tx.push(Effect::ScrollTo(target));
        if self.config.has(ComboFlags::SELECT_ON_FOCUS) && ctx.view.has_value(target) {
            tx.push(Effect::Commit(target));
            if self.config.has(ComboFlags::EDITABLE) {
                tx.push(Effect::SetEditableText(EditableText::Label(target)));
            }
        }
    }

    fn commit_entry<V: ComboView + ?Sized>(
        &mut self,
        index: usize,
        ctx: &ComboContext<'_, V>,
        tx: &mut Transition,
    ) {
        if ctx.view.has_value(index) {
            tx.push(Effect::Commit(index));
            if self.config.has(ComboFlags::EDITABLE) {
                tx.push(Effect::SetEditableText(EditableText::Label(index)));
            }
        } else {
            // A value-less row closes without committing; the filter resets
            // and the editable label falls back to the external value.
            if !self.filter.is_empty() {
                self.filter.clear();
                self.filter_deadline_ms = None;
                tx.push(Effect::NotifyFilter);
                tx.push(Effect::Refilter);
            }
            if self.config.has(ComboFlags::EDITABLE) {
                tx.push(Effect::SetEditableText(EditableText::Restore));
            }
        }
    }
}
