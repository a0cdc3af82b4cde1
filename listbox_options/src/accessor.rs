// Copyright 2025 the Listbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field accessors over opaque option records.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// Resolves the attributes of an opaque option record.
///
/// Options arrive in whatever shape the caller keeps them — structs, enums,
/// plain strings. The accessor is the single seam through which the control
/// reads them, mirroring the configurable field selectors of a classic
/// select control. An option is either a plain option or a group header
/// ([`Self::children`] returns `Some`), never both.
///
/// All methods are total: an attribute an item does not carry degrades to
/// `None` / `false` / an empty label rather than failing.
pub trait OptionAccessor {
    /// The raw option record type.
    type Item;
    /// The comparison/output value type.
    type Value: Clone + PartialEq;

    /// Display label of an option.
    fn label<'a>(&self, item: &'a Self::Item) -> Cow<'a, str>;

    /// Comparison value of an option. `None` means the option carries no
    /// value (a placeholder row, say); committing it clears instead of
    /// selecting.
    fn value(&self, item: &Self::Item) -> Option<Self::Value>;

    /// Whether the option is disabled. Defaults to enabled.
    fn disabled(&self, _item: &Self::Item) -> bool {
        false
    }

    /// The ordered children of a group header, or `None` for a plain
    /// option.
    fn children<'a>(&self, _item: &'a Self::Item) -> Option<&'a [Self::Item]> {
        None
    }

    /// Resolve a named search field for filtering.
    ///
    /// The default knows only the `"label"` field. Accessors for richer
    /// records expose additional fields here so filter configurations can
    /// search across them.
    fn field<'a>(&self, item: &'a Self::Item, field: &str) -> Option<Cow<'a, str>> {
        (field == "label").then(|| self.label(item))
    }

    /// Equality between the external selected value and a candidate option
    /// value.
    ///
    /// Defaults to structural equality. Accessors whose values are records
    /// with a dedicated key field override this to compare the key only, so
    /// identity-differing but logically-equal values still match. Never
    /// identity-based.
    fn values_equal(&self, a: &Self::Value, b: &Self::Value) -> bool {
        a == b
    }
}

/// A ready-made option record for the common label/value/disabled/children
/// shape.
///
/// `children: Some(..)` marks the record as a group header; group headers
/// are never selectable regardless of their other fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicOption<V> {
    /// Display label.
    pub label: String,
    /// Comparison value; `None` for value-less placeholder rows.
    pub value: Option<V>,
    /// Whether the option is disabled.
    pub disabled: bool,
    /// Child options when this record is a group header.
    pub children: Option<Vec<BasicOption<V>>>,
}

impl<V> BasicOption<V> {
    /// A plain enabled option.
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            disabled: false,
            children: None,
        }
    }

    /// A plain option without a value.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            disabled: false,
            children: None,
        }
    }

    /// A group header owning `children`.
    pub fn group(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            label: label.into(),
            value: None,
            disabled: false,
            children: Some(children),
        }
    }

    /// Mark the option disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Accessor for [`BasicOption`] records carrying values of type `V`.
#[derive(Debug)]
pub struct BasicAccessor<V>(core::marker::PhantomData<fn() -> V>);

impl<V> BasicAccessor<V> {
    /// Construct the accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self(core::marker::PhantomData)
    }
}

impl<V> Default for BasicAccessor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for BasicAccessor<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for BasicAccessor<V> {}

impl<V: Clone + PartialEq> OptionAccessor for BasicAccessor<V> {
    type Item = BasicOption<V>;
    type Value = V;

    fn label<'a>(&self, item: &'a Self::Item) -> Cow<'a, str> {
        Cow::Borrowed(&item.label)
    }

    fn value(&self, item: &Self::Item) -> Option<Self::Value> {
        item.value.clone()
    }

    fn disabled(&self, item: &Self::Item) -> bool {
        item.disabled
    }

    fn children<'a>(&self, item: &'a Self::Item) -> Option<&'a [Self::Item]> {
        item.children.as_deref()
    }
}
