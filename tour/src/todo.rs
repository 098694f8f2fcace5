//! The todo list domain model.
//!
//! An ordered, in-memory list with monotonic id assignment. This is the
//! only stateful entity in the tour; everything else is derived from it
//! or static.

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Unique within the owning list's lifetime; never reused.
    pub id: u64,
    /// Display text, immutable after creation.
    pub text: String,
    /// Completion flag, toggled independently of `text`.
    pub completed: bool,
}

/// Ordered todo list with a strictly increasing id counter.
///
/// Insertion order is display order. Ids start at 1 and are never
/// reused, even after deletion: every id in the list is strictly less
/// than the next id to be assigned.
#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new item and return it.
    ///
    /// Always succeeds; rejecting blank text is the caller's concern.
    pub fn add(&mut self, text: impl Into<String>) -> &TodoItem {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            text: text.into(),
            completed: false,
        });
        &self.items[self.items.len() - 1]
    }

    /// Flip the completion flag of the item with `id`.
    ///
    /// Silently does nothing when no item matches; stale ids have no
    /// effect.
    pub fn toggle(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
        }
    }

    /// Remove the item with `id`, preserving the order of the rest.
    ///
    /// Silently does nothing when no item matches.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// All items, in insertion order.
    ///
    /// Callers cannot mutate through this borrow; an owned snapshot
    /// (`items().to_vec()`) stays independent of later list changes.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids_from_one() {
        let mut list = TodoList::new();

        let first = list.add("buy milk").clone();
        assert_eq!(first.id, 1);
        assert_eq!(first.text, "buy milk");
        assert!(!first.completed);

        let second = list.add("walk dog").clone();
        assert_eq!(second.id, 2);

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_keeps_remaining_ids() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");

        list.remove(1);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "b");
        assert_eq!(list.items()[0].id, 2);
    }

    #[test]
    fn test_ids_are_never_reused_after_deletion() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.remove(2);

        let third = list.add("c").clone();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut list = TodoList::new();
        let id = list.add("a").id;

        list.toggle(id);
        assert!(list.items()[0].completed);

        list.toggle(id);
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let mut list = TodoList::new();
        list.add("a");

        let before = list.items().to_vec();
        list.toggle(999);

        assert_eq!(list.items(), &before[..]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut list = TodoList::new();
        list.add("a");

        list.remove(999);

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        list.remove(2);

        let texts: Vec<_> = list.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_mutation() {
        let mut list = TodoList::new();
        list.add("a");

        let snapshot = list.items().to_vec();
        list.add("b");
        list.toggle(1);

        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot[0].completed);
    }
}
