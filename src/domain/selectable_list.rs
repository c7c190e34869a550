use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem<K> {
    pub key: K,
    pub label: String,
    pub selected: bool,
}

/// Receives the full item sequence after every mutation of a [`SelectableList`].
pub trait ListObserver<K> {
    fn list_changed(&mut self, items: &[SelectableItem<K>]);
}

/// Ordered checkbox list keyed by a stable identifier.
///
/// Items keep insertion order, keys are unique, and every key carries exactly
/// one selection flag. Labels are presentation data and may repeat.
pub struct SelectableList<K> {
    items: Vec<SelectableItem<K>>,
    observers: Vec<Box<dyn ListObserver<K>>>,
}

impl<K> Default for SelectableList<K> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for SelectableList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableList")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<K: PartialEq + Clone> SelectableList<K> {
    pub fn subscribe(&mut self, observer: Box<dyn ListObserver<K>>) {
        self.observers.push(observer);
    }

    pub fn items(&self) -> &[SelectableItem<K>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|item| item.label.clone()).collect()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.items.iter().any(|item| &item.key == key)
    }

    /// Appends every entry whose key is not present yet; duplicates are skipped.
    pub fn add_all<I, L>(&mut self, entries: I, checked: bool)
    where
        I: IntoIterator<Item = (K, L)>,
        L: Into<String>,
    {
        for (key, label) in entries {
            if self.contains_key(&key) {
                continue;
            }

            self.items.push(SelectableItem {
                key,
                label: label.into(),
                selected: checked,
            });
        }

        self.notify();
    }

    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    pub fn unselect_all(&mut self) {
        self.set_all(false);
    }

    /// Sets the flag of the row at `index`. Returns `false` when out of range.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };

        item.selected = selected;
        self.notify();
        true
    }

    /// Flips the flag of the row at `index`. Returns `false` when out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(current) = self.items.get(index).map(|item| item.selected) else {
            return false;
        };

        self.set_selected(index, !current)
    }

    pub fn selected_indexes(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.selected)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn selected_labels(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.label.clone())
            .collect()
    }

    pub fn selected_keys(&self) -> Vec<K> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.key.clone())
            .collect()
    }

    /// Removes every selected row and returns them in removal order.
    ///
    /// Selected positions are computed once. After each removal the pending
    /// positions above the removed one shift down by one, so the remaining
    /// indexes stay valid against the shrinking sequence.
    pub fn delete_selected(
        &mut self,
        mut before_delete: Option<&mut dyn FnMut(&SelectableItem<K>)>,
    ) -> Vec<SelectableItem<K>> {
        let mut pending = self.selected_indexes();
        let mut removed = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let index = pending.remove(0);

            if let Some(callback) = before_delete.as_mut() {
                callback(&self.items[index]);
            }

            removed.push(self.items.remove(index));

            for position in pending.iter_mut() {
                if *position > index {
                    *position -= 1;
                }
            }
        }

        self.notify();
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.notify();
    }

    fn set_all(&mut self, selected: bool) {
        for item in &mut self.items {
            item.selected = selected;
        }

        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.list_changed(&self.items);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn list_of(labels: &[&str]) -> SelectableList<String> {
        let mut list = SelectableList::default();
        list.add_all(labels.iter().map(|label| (label.to_string(), *label)), false);
        list
    }

    struct RecordingObserver {
        snapshots: Rc<RefCell<Vec<Vec<String>>>>,
    }

    impl ListObserver<String> for RecordingObserver {
        fn list_changed(&mut self, items: &[SelectableItem<String>]) {
            self.snapshots
                .borrow_mut()
                .push(items.iter().map(|item| item.label.clone()).collect());
        }
    }

    #[test]
    fn duplicate_keys_never_increase_the_count() {
        let mut list = list_of(&["A", "B"]);

        list.add_all([("B".to_owned(), "B"), ("C".to_owned(), "C")], false);
        list.add_all([("A".to_owned(), "A"), ("A".to_owned(), "A")], true);

        assert_eq!(list.len(), 3);
        assert_eq!(list.labels(), vec!["A", "B", "C"]);
        assert!(list.selected_indexes().is_empty());
    }

    #[test]
    fn same_label_with_different_keys_keeps_both_rows() {
        let mut list = SelectableList::default();

        list.add_all([(1_i64, "Alex Smith"), (2_i64, "Alex Smith")], false);

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_all_respects_checked_flag() {
        let mut list = SelectableList::default();

        list.add_all([(1_i64, "one"), (2_i64, "two")], true);

        assert_eq!(list.selected_indexes(), vec![0, 1]);
        assert_eq!(list.selected_keys(), vec![1, 2]);
    }

    #[test]
    fn select_all_covers_full_index_range() {
        let mut list = list_of(&["A", "B", "C", "D"]);

        list.select_all();

        assert_eq!(list.selected_indexes(), (0..4).collect::<Vec<_>>());

        list.unselect_all();
        assert!(list.selected_indexes().is_empty());
    }

    #[test]
    fn deleting_first_and_last_leaves_middle() {
        let mut list = list_of(&["A", "B", "C"]);
        list.set_selected(0, true);
        list.set_selected(2, true);

        let removed = list.delete_selected(None);

        assert_eq!(list.labels(), vec!["B"]);
        assert_eq!(removed.len(), 2);
    }

    #[test]
    fn pending_indexes_shift_down_after_each_removal() {
        let mut list = list_of(&["A", "B", "C", "D", "E"]);
        list.toggle(1);
        list.toggle(3);

        let mut seen = Vec::new();
        let mut record = |item: &SelectableItem<String>| seen.push(item.label.clone());
        list.delete_selected(Some(&mut record));

        assert_eq!(list.labels(), vec!["A", "C", "E"]);
        assert_eq!(seen, vec!["B", "D"]);
    }

    #[test]
    fn adjacent_selection_is_removed_completely() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        list.toggle(1);
        list.toggle(2);
        list.toggle(3);

        list.delete_selected(None);

        assert_eq!(list.labels(), vec!["A"]);
    }

    #[test]
    fn selected_labels_follow_display_order() {
        let mut list = list_of(&["A", "B", "C"]);
        list.toggle(2);
        list.toggle(0);

        assert_eq!(list.selected_labels(), vec!["A", "C"]);
    }

    #[test]
    fn out_of_range_toggle_is_rejected() {
        let mut list = list_of(&["A"]);

        assert!(!list.toggle(5));
        assert!(!list.set_selected(1, true));
        assert!(list.selected_indexes().is_empty());
    }

    #[test]
    fn observers_see_every_mutation() {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let mut list = SelectableList::default();
        list.subscribe(Box::new(RecordingObserver {
            snapshots: Rc::clone(&snapshots),
        }));

        list.add_all([("A".to_owned(), "A"), ("B".to_owned(), "B")], false);
        list.select_all();
        list.delete_selected(None);
        list.clear();

        let snapshots = snapshots.borrow();
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots[0], vec!["A", "B"]);
        assert!(snapshots[2].is_empty());
    }
}
