//! Controller for dynamic list fields.
//!
//! Each entry carries a UI key that stays with it while other entries are
//! added, removed or moved, so keyed rendering never confuses two rows.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// A list entry together with its UI key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyed<T> {
    /// Stable key for keyed rendering. Not part of the submitted data.
    pub key: String,
    /// The entry itself.
    #[serde(flatten)]
    pub value: T,
}

/// Ordered, index-addressable list of entries with stable keys.
///
/// Order is display order. Duplicate values are allowed.
#[derive(Debug, Clone)]
pub struct ArrayField<T> {
    items: Vec<Keyed<T>>,
    next_key: u64,
}

impl<T> Default for ArrayField<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_key: 0,
        }
    }
}

impl<T> ArrayField<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from values, assigning a fresh key to each.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut field = Self::new();
        for value in values {
            field.push(value);
        }
        field
    }

    fn fresh_key(&mut self) -> String {
        let key = format!("item-{}", self.next_key);
        self.next_key += 1;
        key
    }

    /// Appends `value` at the end and returns its key.
    pub fn push(&mut self, value: T) -> String {
        let key = self.fresh_key();
        self.items.push(Keyed {
            key: key.clone(),
            value,
        });
        key
    }

    /// Removes the entry at `index`, shifting later entries down by one.
    ///
    /// An index outside the list leaves it unchanged and reports
    /// [`FormError::IndexOutOfRange`].
    pub fn remove(&mut self, index: usize) -> Result<Keyed<T>> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Moves the entry at `from` to position `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Returns the entries in display order.
    pub fn items(&self) -> &[Keyed<T>] {
        &self.items
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|item| &item.value)
    }

    /// Returns the entry at `index` for editing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index).map(|item| &mut item.value)
    }

    /// Returns the keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.key.as_str()).collect()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the entries without their keys.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| &item.value)
    }
}

impl<T: Clone> ArrayField<T> {
    /// Returns the entries without their keys.
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Default> ArrayField<T> {
    /// Appends a default entry with a fresh key and returns the updated list.
    pub fn append(&mut self) -> &[Keyed<T>] {
        self.push(T::default());
        &self.items
    }
}
