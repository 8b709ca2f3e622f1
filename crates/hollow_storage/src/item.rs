//! Items that can lie in a room or be carried.

/// A named object.
///
/// Identity is the [`ItemId`](hollow_foundation::ItemId) handle, not the
/// name: two items may share a name and still be told apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
}

impl Item {
    /// Creates an item with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
