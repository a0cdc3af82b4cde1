// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved visible option list: an index table over raw data.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use listbox_cursor::NavView;
use listbox_typeahead::TypeaheadView;
use smallvec::SmallVec;

use crate::accessor::OptionAccessor;
use crate::filter::FilterSpec;

/// One row of the visible option list, as coordinates into the raw data.
///
/// Grouped data flattens to a `Group` header followed by the `Child`
/// coordinates of its surviving members; ungrouped data flattens to `Flat`
/// indices. Coordinates always point into the *raw* collection, so a
/// filtered list needs no copies of the option records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListEntry {
    /// Group header row; `group` is the header's index in the raw
    /// collection.
    Group {
        /// Index of the header in the raw collection.
        group: usize,
    },
    /// Plain option row of an ungrouped collection.
    Flat {
        /// Index of the option in the raw collection.
        index: usize,
    },
    /// Child option row of a grouped collection.
    Child {
        /// Index of the owning header in the raw collection.
        group: usize,
        /// Index of the option within the header's children.
        child: usize,
    },
}

/// The flattened, optionally filter-narrowed visible option list.
///
/// Produced by [`ResolvedList::resolve`]; borrows the raw data and the
/// accessor and owns only the entry table. Pure data — recompute it whenever
/// the raw options or the filter text change.
///
/// Implements [`NavView`] and [`TypeaheadView`], so cursor navigation and
/// typeahead search run over it directly.
#[derive(Debug)]
pub struct ResolvedList<'a, A: OptionAccessor> {
    accessor: &'a A,
    raw: &'a [A::Item],
    entries: Vec<ListEntry>,
}

impl<'a, A: OptionAccessor> ResolvedList<'a, A> {
    /// Flatten `raw` (grouped when `grouped` is set) and narrow it with
    /// `filter`.
    ///
    /// Narrowing is skipped when `filter` is `None`, when its text is blank,
    /// and when it is marked lazy (the upstream source already filtered).
    /// For grouped data each group's children are filtered independently and
    /// groups left without survivors are dropped, header included.
    pub fn resolve(
        accessor: &'a A,
        raw: &'a [A::Item],
        grouped: bool,
        filter: Option<&FilterSpec<'_>>,
    ) -> Self {
        let needle = filter.and_then(FilterSpec::needle);
        let mut entries = Vec::new();

        if grouped {
            for (group, header) in raw.iter().enumerate() {
                let children = accessor.children(header).unwrap_or(&[]);
                match (&needle, filter) {
                    (Some(needle), Some(spec)) => {
                        let survivors: SmallVec<[usize; 8]> = children
                            .iter()
                            .enumerate()
                            .filter(|(_, child)| item_matches(accessor, child, spec, needle))
                            .map(|(child, _)| child)
                            .collect();
                        if !survivors.is_empty() {
                            entries.push(ListEntry::Group { group });
                            entries
                                .extend(survivors.into_iter().map(|child| ListEntry::Child { group, child }));
                        }
                    }
                    _ => {
                        entries.push(ListEntry::Group { group });
                        entries.extend((0..children.len()).map(|child| ListEntry::Child { group, child }));
                    }
                }
            }
        } else {
            match (&needle, filter) {
                (Some(needle), Some(spec)) => {
                    entries.extend(
                        raw.iter()
                            .enumerate()
                            .filter(|(_, item)| item_matches(accessor, item, spec, needle))
                            .map(|(index, _)| ListEntry::Flat { index }),
                    );
                }
                _ => entries.extend((0..raw.len()).map(|index| ListEntry::Flat { index })),
            }
        }

        Self {
            accessor,
            raw,
            entries,
        }
    }

    /// The entry table.
    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Entry at `index`, if in range.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<ListEntry> {
        self.entries.get(index).copied()
    }

    /// The raw option record behind entry `index` (for a header row, the
    /// header record itself).
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&'a A::Item> {
        match self.entries.get(index)? {
            ListEntry::Flat { index } => self.raw.get(*index),
            ListEntry::Group { group } => self.raw.get(*group),
            ListEntry::Child { group, child } => self
                .accessor
                .children(self.raw.get(*group)?)?
                .get(*child),
        }
    }

    /// Whether entry `index` is a group header row.
    #[must_use]
    pub fn is_group(&self, index: usize) -> bool {
        matches!(self.entries.get(index), Some(ListEntry::Group { .. }))
    }

    /// Whether entry `index` is disabled.
    #[must_use]
    pub fn is_disabled(&self, index: usize) -> bool {
        self.item(index)
            .is_some_and(|item| self.accessor.disabled(item))
    }

    /// Display label of entry `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<Cow<'a, str>> {
        self.item(index).map(|item| self.accessor.label(item))
    }

    /// Comparison value of entry `index`. Header rows carry no value.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<A::Value> {
        if self.is_group(index) {
            return None;
        }
        self.item(index).and_then(|item| self.accessor.value(item))
    }

    /// First non-header entry whose value equals `value` under the
    /// accessor's equality, disabled rows included.
    ///
    /// This is the lookup used to re-focus a row that was just committed;
    /// use [`Self::selected_index`] when seeding the cursor.
    #[must_use]
    pub fn locate_value(&self, value: &A::Value) -> Option<usize> {
        (0..self.entries.len()).find(|&i| {
            !self.is_group(i)
                && self
                    .value(i)
                    .is_some_and(|candidate| self.accessor.values_equal(value, &candidate))
        })
    }

    /// First *selectable* entry whose value equals `value`; `None` when the
    /// selection is absent, filtered out, or disabled in this view.
    #[must_use]
    pub fn selected_index(&self, value: &A::Value) -> Option<usize> {
        (0..self.entries.len()).find(|&i| {
            self.is_selectable(i)
                && self
                    .value(i)
                    .is_some_and(|candidate| self.accessor.values_equal(value, &candidate))
        })
    }
}

fn item_matches<A: OptionAccessor>(
    accessor: &A,
    item: &A::Item,
    spec: &FilterSpec<'_>,
    needle: &str,
) -> bool {
    let mode = spec.match_mode;
    if spec.fields.is_empty() {
        return mode.matches(&accessor.label(item).to_lowercase(), needle);
    }
    spec.fields.iter().any(|field| {
        accessor
            .field(item, field)
            .is_some_and(|text| mode.matches(&text.to_lowercase(), needle))
    })
}

impl<A: OptionAccessor> NavView for ResolvedList<'_, A> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_selectable(&self, index: usize) -> bool {
        index < self.entries.len() && !self.is_group(index) && !self.is_disabled(index)
    }
}

impl<A: OptionAccessor> TypeaheadView for ResolvedList<'_, A> {
    fn label(&self, index: usize) -> Option<Cow<'_, str>> {
        Self::label(self, index)
    }
}
