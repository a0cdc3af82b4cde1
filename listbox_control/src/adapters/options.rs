// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-trait adapter for `listbox_options` resolved lists.

use listbox_options::{OptionAccessor, ResolvedList};

use crate::types::ComboView;

impl<A: OptionAccessor> ComboView for ResolvedList<'_, A> {
    fn has_value(&self, index: usize) -> bool {
        self.value(index).is_some()
    }
}
