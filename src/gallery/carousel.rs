// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation over a fixed, ordered list of items.
//!
//! `CarouselNavigator` holds the item list and the current selection. It is
//! the single source of truth for which project the detail view shows; the
//! UI only renders what it reports.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Items the navigator can select by a stable identifier.
pub trait Identified {
    type Id: PartialEq + Clone + Debug;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No item in the list carries the requested identifier.
    #[error("no item with id {id}")]
    NotFound { id: String },
}

/// Selection pointer into an immutable list.
///
/// The selection is either absent or points at exactly one item. Only
/// [`select`](Self::select), [`next`](Self::next), [`prev`](Self::prev) and
/// [`clear`](Self::clear) change it.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselNavigator<T> {
    /// Items in display order
    items: Arc<[T]>,
    /// Index of the selected item
    selected: Option<usize>,
}

impl<T: Identified> CarouselNavigator<T> {
    /// Creates a navigator with nothing selected.
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
            selected: None,
        }
    }

    /// Selects the item with the given id and returns it.
    ///
    /// Returns `NavigationError::NotFound` and leaves the current selection
    /// untouched when no item matches.
    pub fn select(&mut self, id: &T::Id) -> Result<&T, NavigationError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == *id)
            .ok_or_else(|| NavigationError::NotFound {
                id: format!("{id:?}"),
            })?;
        self.selected = Some(index);
        Ok(&self.items[index])
    }

    /// Moves to the following item and returns it.
    ///
    /// Wraps from the last item to the first. Does nothing and returns
    /// `None` when nothing is selected.
    pub fn next(&mut self) -> Option<&T> {
        let len = self.items.len();
        let index = self.selected?;
        if len == 0 {
            return None;
        }
        let next = (index + 1) % len;
        self.selected = Some(next);
        self.items.get(next)
    }

    /// Moves to the preceding item and returns it.
    ///
    /// Wraps from the first item to the last. Does nothing and returns
    /// `None` when nothing is selected.
    pub fn prev(&mut self) -> Option<&T> {
        let len = self.items.len();
        let index = self.selected?;
        if len == 0 {
            return None;
        }
        let prev = (index + len - 1) % len;
        self.selected = Some(prev);
        self.items.get(prev)
    }

    /// Drops the selection. Calling it with nothing selected is a no-op.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Returns the selected item, if any.
    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Returns the id of the selected item, if any.
    pub fn selected_id(&self) -> Option<T::Id> {
        self.selected().map(Identified::id)
    }

    /// Returns the index of the selected item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Checks whether an item is selected (the detail view is open).
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
