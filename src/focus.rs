/// Tracks which item currently has hover focus.
///
/// This lives next to the tree, not inside it: feed it the payload of each
/// nearest neighbor result and act on the returned [`FocusChange`], e.g. by
/// restoring the styling of `previous` and highlighting `current`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Focus<K> {
    current: Option<K>,
}

/// Outcome of moving the focus
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusChange<K> {
    /// The key already had focus, nothing to do
    Unchanged,
    /// Focus moved to `current`, away from `previous` if anything was focused
    Moved { previous: Option<K>, current: K },
}

impl<K: PartialEq + Clone> Focus<K> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently focused key
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Give focus to `key`
    pub fn focus(&mut self, key: K) -> FocusChange<K> {
        if self.current.as_ref() == Some(&key) {
            return FocusChange::Unchanged;
        }
        let previous = self.current.replace(key.clone());
        FocusChange::Moved {
            previous,
            current: key,
        }
    }

    /// Drop the focus, returning the key that had it
    pub fn clear(&mut self) -> Option<K> {
        self.current.take()
    }
}
