// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filter configuration and match modes.

use alloc::string::String;

/// How filter text is compared against a search field.
///
/// Comparison is case-insensitive (Unicode default case folding) in every
/// mode; the filter text is trimmed before folding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Field contains the filter text anywhere.
    #[default]
    Contains,
    /// Field starts with the filter text.
    StartsWith,
    /// Field ends with the filter text.
    EndsWith,
    /// Field equals the filter text exactly.
    Equals,
    /// Field differs from the filter text.
    NotEquals,
}

impl MatchMode {
    /// Apply the mode to an already case-folded haystack/needle pair.
    #[must_use]
    pub fn matches(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Contains => haystack.contains(needle),
            Self::StartsWith => haystack.starts_with(needle),
            Self::EndsWith => haystack.ends_with(needle),
            Self::Equals => haystack == needle,
            Self::NotEquals => haystack != needle,
        }
    }
}

/// Filter configuration for one resolve pass.
///
/// `fields` names the search fields consulted through
/// [`OptionAccessor::field`](crate::OptionAccessor::field); when empty, only
/// the label is searched. `lazy` marks an externally filtered source: the
/// resolver passes data through untouched and the upstream source is
/// responsible for supplying an already-narrowed page.
#[derive(Clone, Debug)]
pub struct FilterSpec<'a> {
    /// Raw filter text. Empty or all-whitespace text disables narrowing.
    pub text: &'a str,
    /// Comparison mode.
    pub match_mode: MatchMode,
    /// Search field names; empty means label only.
    pub fields: &'a [&'a str],
    /// Filtering already applied upstream; pass data through.
    pub lazy: bool,
}

impl<'a> FilterSpec<'a> {
    /// A filter over the label with the default match mode.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            match_mode: MatchMode::default(),
            fields: &[],
            lazy: false,
        }
    }

    /// Trimmed, case-folded needle, or `None` when the filter is inactive
    /// (blank text or lazy source).
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        if self.lazy {
            return None;
        }
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_modes_compare_folded_text() {
        assert!(MatchMode::Contains.matches("blueberry", "eber"));
        assert!(MatchMode::StartsWith.matches("blueberry", "blue"));
        assert!(!MatchMode::StartsWith.matches("blueberry", "berry"));
        assert!(MatchMode::EndsWith.matches("blueberry", "berry"));
        assert!(MatchMode::Equals.matches("lime", "lime"));
        assert!(MatchMode::NotEquals.matches("lime", "lemon"));
        assert!(!MatchMode::NotEquals.matches("lime", "lime"));
    }

    #[test]
    fn needle_trims_and_folds() {
        assert_eq!(FilterSpec::new("  Li ").needle().as_deref(), Some("li"));
        assert_eq!(FilterSpec::new("   ").needle(), None);
        assert_eq!(FilterSpec::new("").needle(), None);
    }

    #[test]
    fn lazy_spec_never_produces_a_needle() {
        let spec = FilterSpec {
            lazy: true,
            ..FilterSpec::new("li")
        };
        assert_eq!(spec.needle(), None);
    }
}
