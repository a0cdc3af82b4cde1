// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating the selected value in the *raw* (unfiltered) collection.
//!
//! The resolved list answers "where is the selection *on screen*"; these
//! helpers answer "which raw record is selected" regardless of any active
//! filter, which is what label rendering and commit comparison need.

use crate::accessor::OptionAccessor;

/// Coordinates of the selected record in the raw collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectedCoord {
    /// Index into an ungrouped collection.
    Flat(usize),
    /// Group and child indices into a grouped collection.
    Grouped {
        /// Index of the owning header.
        group: usize,
        /// Index within the header's children.
        child: usize,
    },
}

/// Whether `item` is the option selected as `value`.
///
/// A value-less item never compares selected, even against a `None`-like
/// external value; clearing the selection deselects everything.
pub fn is_selected<A: OptionAccessor>(accessor: &A, item: &A::Item, value: &A::Value) -> bool {
    accessor
        .value(item)
        .is_some_and(|candidate| accessor.values_equal(value, &candidate))
}

/// Coordinates of the first raw record whose value equals `value`.
pub fn selected_coord<A: OptionAccessor>(
    accessor: &A,
    raw: &[A::Item],
    grouped: bool,
    value: &A::Value,
) -> Option<SelectedCoord> {
    if grouped {
        raw.iter().enumerate().find_map(|(group, header)| {
            accessor.children(header)?.iter().position(|child| is_selected(accessor, child, value)).map(
                |child| SelectedCoord::Grouped { group, child },
            )
        })
    } else {
        raw.iter()
            .position(|item| is_selected(accessor, item, value))
            .map(SelectedCoord::Flat)
    }
}

/// The raw record currently selected as `value`, if any.
pub fn current_selection<'a, A: OptionAccessor>(
    accessor: &A,
    raw: &'a [A::Item],
    grouped: bool,
    value: &A::Value,
) -> Option<&'a A::Item> {
    match selected_coord(accessor, raw, grouped, value)? {
        SelectedCoord::Flat(index) => raw.get(index),
        SelectedCoord::Grouped { group, child } => accessor.children(raw.get(group)?)?.get(child),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{BasicAccessor, BasicOption};
    use alloc::borrow::Cow;
    use alloc::vec;

    #[test]
    fn flat_lookup_finds_the_matching_record() {
        let raw = vec![
            BasicOption::new("Apple", 1),
            BasicOption::new("Banana", 2),
        ];
        assert_eq!(
            selected_coord(&BasicAccessor::new(), &raw, false, &2),
            Some(SelectedCoord::Flat(1))
        );
        assert_eq!(selected_coord(&BasicAccessor::new(), &raw, false, &9), None);
        assert_eq!(
            current_selection(&BasicAccessor::new(), &raw, false, &2).map(|o| o.label.as_str()),
            Some("Banana")
        );
    }

    #[test]
    fn grouped_lookup_descends_into_children() {
        let raw = vec![
            BasicOption::group("A", vec![BasicOption::new("Lemon", 1)]),
            BasicOption::group(
                "B",
                vec![BasicOption::new("Blueberry", 2), BasicOption::new("Cranberry", 3)],
            ),
        ];
        assert_eq!(
            selected_coord(&BasicAccessor::new(), &raw, true, &3),
            Some(SelectedCoord::Grouped { group: 1, child: 1 })
        );
        assert_eq!(
            current_selection(&BasicAccessor::new(), &raw, true, &3).map(|o| o.label.as_str()),
            Some("Cranberry")
        );
    }

    #[test]
    fn selection_survives_a_filter_hiding_it() {
        // The raw collection is consulted directly, so the lookup is
        // independent of whatever the resolved list currently shows.
        let raw = vec![BasicOption::new("Apple", 1), BasicOption::new("Banana", 2)];
        let accessor = BasicAccessor::new();
        let list = crate::ResolvedList::resolve(
            &accessor,
            &raw,
            false,
            Some(&crate::FilterSpec::new("banana")),
        );
        assert_eq!(list.selected_index(&1), None);
        assert!(current_selection(&BasicAccessor::new(), &raw, false, &1).is_some());
    }

    #[test]
    fn placeholder_rows_never_compare_selected() {
        let raw = vec![BasicOption::<i32>::placeholder("None of these")];
        assert_eq!(selected_coord(&BasicAccessor::new(), &raw, false, &0), None);
    }

    #[test]
    fn key_narrowed_equality_finds_logically_equal_values() {
        #[derive(Clone, Debug, PartialEq)]
        struct User {
            id: u32,
            name: &'static str,
        }

        struct ById;
        impl OptionAccessor for ById {
            type Item = User;
            type Value = User;

            fn label<'a>(&self, item: &'a User) -> Cow<'a, str> {
                Cow::Borrowed(item.name)
            }
            fn value(&self, item: &User) -> Option<User> {
                Some(item.clone())
            }
            fn values_equal(&self, a: &User, b: &User) -> bool {
                a.id == b.id
            }
        }

        let raw = vec![User { id: 7, name: "Ada" }];
        // Same id, differing payload: still the selected record.
        let external = User { id: 7, name: "stale" };
        assert!(is_selected(&ById, &raw[0], &external));
        assert_eq!(
            selected_coord(&ById, &raw, false, &external),
            Some(SelectedCoord::Flat(0))
        );
    }
}
