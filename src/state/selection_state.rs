//! SelectionState - Caller-owned Row Selection

use hashlink::LinkedHashSet;

use crate::domain::row::Row;

/// Insertion-ordered set of selected row ids
#[derive(Debug, Clone)]
pub struct SelectionSet {
    ids: LinkedHashSet<String>,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self {
            ids: LinkedHashSet::new(),
        }
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids.len() == other.ids.len() && self.ids.iter().all(|id| other.ids.contains(id))
    }
}

impl SelectionSet {
    /// Build a set from ids; duplicates collapse onto their first position
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = LinkedHashSet::new();
        for id in ids {
            set.insert(id.into());
        }
        Self { ids: set }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Proposed next selection after toggling one row
    pub fn toggled(&self, id: &str) -> Vec<String> {
        if self.ids.contains(id) {
            self.ids.iter().filter(|s| s.as_str() != id).cloned().collect()
        } else {
            let mut next = self.ids();
            next.push(id.to_string());
            next
        }
    }

    /// Proposed next selection for the select-all control.
    ///
    /// Compares sizes only: when the selection is as large as the row set it
    /// clears, otherwise every row id is selected. Ids collapse, so rows that
    /// share an id (several rows without one all read `"undefined"`) can never
    /// reach the row count; select-all then keeps proposing the same set.
    pub fn toggled_all(&self, rows: &[Row], id_key: &str) -> Vec<String> {
        if self.ids.len() == rows.len() {
            Vec::new()
        } else {
            Self::row_ids(rows, id_key).ids()
        }
    }

    /// Whether the header checkbox shows checked
    pub fn all_selected(&self, row_count: usize) -> bool {
        row_count > 0 && self.ids.len() == row_count
    }

    fn row_ids(rows: &[Row], id_key: &str) -> Self {
        Self::from_ids(rows.iter().map(|row| row.id(id_key)))
    }

    /// Drop ids that no longer match a row
    pub fn retain_rows(&mut self, rows: &[Row], id_key: &str) {
        let live = Self::row_ids(rows, id_key);
        self.ids = self
            .ids
            .iter()
            .filter(|id| live.contains(id))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row::new().with("id", *id)).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let set = SelectionSet::default();
        let next = set.toggled("a");
        assert_eq!(next, ["a"]);

        let set = SelectionSet::from_ids(next);
        assert!(set.toggled("a").is_empty());
        assert_eq!(set.toggled("b"), ["a", "b"]);
    }

    #[test]
    fn test_toggle_all_from_none_to_all_to_none() {
        let data = rows(&["1", "2", "3"]);
        let set = SelectionSet::default();

        let all = set.toggled_all(&data, "id");
        assert_eq!(all, ["1", "2", "3"]);

        let set = SelectionSet::from_ids(all);
        assert!(set.all_selected(data.len()));
        assert!(set.toggled_all(&data, "id").is_empty());
    }

    #[test]
    fn test_partial_selection_selects_all() {
        let data = rows(&["1", "2"]);
        let set = SelectionSet::from_ids(["2"]);
        assert!(!set.all_selected(data.len()));
        assert_eq!(set.toggled_all(&data, "id"), ["1", "2"]);
    }

    #[test]
    fn test_stale_ids_count_toward_size() {
        let data = rows(&["1", "2"]);
        let set = SelectionSet::from_ids(["1", "gone"]);
        assert!(set.all_selected(data.len()));
        assert!(set.toggled_all(&data, "id").is_empty());
    }

    #[test]
    fn test_empty_rows_never_all_selected() {
        let set = SelectionSet::default();
        assert!(!set.all_selected(0));
        assert!(set.toggled_all(&[], "id").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = SelectionSet::from_ids(["x", "y", "x"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.ids(), ["x", "y"]);
        assert_eq!(set, SelectionSet::from_ids(["y", "x"]));
    }

    #[test]
    fn test_retain_rows() {
        let mut set = SelectionSet::from_ids(["1", "gone", "2"]);
        set.retain_rows(&rows(&["2", "1"]), "id");
        assert_eq!(set.ids(), ["1", "2"]);
    }

    #[test]
    fn test_custom_id_key() {
        let data = vec![Row::new().with("uid", 10), Row::new().with("uid", 11)];
        let set = SelectionSet::default();
        assert_eq!(set.toggled_all(&data, "uid"), ["10", "11"]);
        assert_eq!(set.toggled_all(&data, "id"), ["undefined"]);
    }

    #[test]
    fn test_rows_without_ids_stay_unaddressable() {
        let data = vec![Row::new().with("name", "a"), Row::new().with("name", "b")];
        let set = SelectionSet::default();

        let all = set.toggled_all(&data, "id");
        assert_eq!(all, ["undefined"]);

        // One collapsed id never matches two rows
        let set = SelectionSet::from_ids(all);
        assert!(!set.all_selected(data.len()));
        assert_eq!(set.toggled_all(&data, "id"), ["undefined"]);
    }
}
