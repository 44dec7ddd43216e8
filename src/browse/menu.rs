/// The selectable neighbour menu for the current vertex.
///
/// Items mirror the store's neighbour order as of the last rebuild. An
/// empty menu has no selection; a non-empty one always has exactly one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuModel {
    items: Vec<String>,
    selected: Option<usize>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the items, cursor reset to the top.
    pub fn rebuild(&mut self, neighbours: &[String]) {
        self.items = neighbours.to_vec();
        self.selected = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Replace the items after an in-place mutation, keeping the cursor as
    /// close to where it was as the new length allows.
    pub fn rebuild_preserving(&mut self, neighbours: &[String], old_index: usize) {
        self.items = neighbours.to_vec();
        self.selected = if self.items.is_empty() {
            None
        } else {
            Some(old_index.min(self.items.len() - 1))
        };
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted item.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|idx| self.items[idx].as_str())
    }

    /// Cursor position and highlighted item together.
    pub fn selection(&self) -> Option<(usize, &str)> {
        self.selected.map(|idx| (idx, self.items[idx].as_str()))
    }

    /// Move the cursor one item up, clamped at the top. Returns whether it
    /// moved.
    pub fn select_prev(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor one item down, clamped at the bottom.
    pub fn select_next(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx + 1 < self.items.len() => {
                self.selected = Some(idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Jump a whole page of `rows` toward the top, clamped.
    pub fn page_up(&mut self, rows: usize) -> bool {
        let rows = rows.max(1);
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx.saturating_sub(rows));
                true
            }
            _ => false,
        }
    }

    /// Jump a whole page of `rows` toward the bottom, clamped.
    pub fn page_down(&mut self, rows: usize) -> bool {
        let rows = rows.max(1);
        match self.selected {
            Some(idx) if idx + 1 < self.items.len() => {
                self.selected = Some((idx + rows).min(self.items.len() - 1));
                true
            }
            _ => false,
        }
    }

    /// First row of the page holding the cursor, for a window of `rows`
    /// visible rows. The list scrolls by whole pages, not line by line.
    pub fn page_offset(&self, rows: usize) -> usize {
        let rows = rows.max(1);
        match self.selected {
            Some(idx) => (idx / rows) * rows,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn rebuild_selects_the_top() {
        let mut menu = MenuModel::new();
        menu.rebuild(&items(&["a", "b", "c"]));
        assert_eq!(menu.selected_index(), Some(0));
        assert_eq!(menu.selected(), Some("a"));
    }

    #[test]
    fn empty_menu_has_no_selection() {
        let mut menu = MenuModel::new();
        menu.rebuild(&items(&["a"]));
        menu.rebuild(&[]);
        assert!(menu.is_empty());
        assert_eq!(menu.selected_index(), None);
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn rebuild_preserving_clamps_to_the_new_end() {
        let mut menu = MenuModel::new();
        menu.rebuild_preserving(&items(&["a", "b"]), 4);
        assert_eq!(
            menu.selected_index(),
            Some(1),
            "an out-of-range cursor clamps to the last item"
        );

        menu.rebuild_preserving(&items(&["a", "b", "c"]), 1);
        assert_eq!(menu.selected_index(), Some(1), "an in-range cursor stays put");
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut menu = MenuModel::new();
        menu.rebuild(&items(&["a", "b"]));
        assert!(!menu.select_prev(), "already at the top");
        assert!(menu.select_next());
        assert!(!menu.select_next(), "already at the bottom");
        assert_eq!(menu.selected(), Some("b"));
    }

    #[test]
    fn cursor_moves_are_no_ops_on_an_empty_menu() {
        let mut menu = MenuModel::new();
        assert!(!menu.select_prev());
        assert!(!menu.select_next());
        assert!(!menu.page_up(5));
        assert!(!menu.page_down(5));
    }

    #[test]
    fn paging_jumps_whole_pages_and_clamps() {
        let labels: Vec<String> = (0..12).map(|i| format!("v{i}")).collect();
        let mut menu = MenuModel::new();
        menu.rebuild(&labels);

        assert!(menu.page_down(5));
        assert_eq!(menu.selected_index(), Some(5));
        assert!(menu.page_down(5));
        assert_eq!(menu.selected_index(), Some(10));
        assert!(menu.page_down(5));
        assert_eq!(menu.selected_index(), Some(11), "clamped to the last item");
        assert!(!menu.page_down(5));

        assert!(menu.page_up(5));
        assert_eq!(menu.selected_index(), Some(6));
        assert!(menu.page_up(5));
        assert!(menu.page_up(5));
        assert_eq!(menu.selected_index(), Some(0), "clamped to the top");
    }

    #[test]
    fn page_offset_windows_by_whole_pages() {
        let labels: Vec<String> = (0..12).map(|i| format!("v{i}")).collect();
        let mut menu = MenuModel::new();
        menu.rebuild(&labels);
        assert_eq!(menu.page_offset(5), 0);

        menu.rebuild_preserving(&labels, 7);
        assert_eq!(menu.page_offset(5), 5);

        menu.rebuild_preserving(&labels, 11);
        assert_eq!(menu.page_offset(5), 10);
    }

    #[test]
    fn selection_pairs_index_and_item() {
        let mut menu = MenuModel::new();
        menu.rebuild(&items(&["a", "b"]));
        menu.select_next();
        assert_eq!(menu.selection(), Some((1, "b")));
        assert_eq!(menu.len(), 2);
    }
}
