use crate::browse::BrowseError;
use crate::browse::history::NavigationState;
use crate::browse::layout::{self, Layout};
use crate::browse::menu::MenuModel;
use crate::browse::surface::ScreenView;
use crate::graph::store::GraphStore;

const FOOTER_HINT: &str =
    "[j/k] move  [Enter] go  [Bksp] back  [d/D] delete edge/vertex  [q] quit";

/// Everything the input layer can ask the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveSelectionUp,
    MoveSelectionDown,
    PageUp,
    PageDown,
    /// Step onto the highlighted neighbour.
    Advance,
    /// Step back along the history.
    Back,
    DeleteSelectedVertex,
    DeleteSelectedEdge,
    /// Reserved; currently does nothing.
    InsertVertex,
    /// Reserved; currently does nothing.
    InsertEdge,
    Exit,
}

/// What a command did, as the session loop needs to know it.
///
/// Benign refusals (empty menu, protected root, back at the root) are
/// `Unchanged`: silent no-ops with nothing to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    /// Only the menu cursor moved.
    Selection,
    /// Position, history, or the graph itself changed.
    View,
    Quit,
}

fn cursor_outcome(moved: bool) -> Outcome {
    if moved { Outcome::Selection } else { Outcome::Unchanged }
}

/// The browsing engine: the graph plus the navigation and menu state
/// derived from it. The engine is the store's only reader and writer for
/// the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Browser {
    pub(crate) store: GraphStore,
    pub(crate) nav: NavigationState,
    pub(crate) menu: MenuModel,
}

impl Browser {
    pub fn new(store: GraphStore) -> Self {
        Self {
            store,
            nav: NavigationState::new(),
            menu: MenuModel::new(),
        }
    }

    /// Begin browsing at `root`, which must be a vertex of the store.
    pub fn start(&mut self, root: &str) -> Result<(), BrowseError> {
        if !self.store.contains(root) {
            return Err(BrowseError::UnknownRoot(root.to_string()));
        }
        self.nav.start(root)?;
        self.menu.rebuild(self.store.neighbours_of(root));
        Ok(())
    }

    /// Apply one command. `layout` supplies the page size for the paging
    /// commands. Store mutation and model rebuild happen inside this one
    /// call; no input is processed in between.
    pub fn apply(&mut self, command: Command, layout: &Layout) -> Result<Outcome, BrowseError> {
        let current = match self.nav.current() {
            Some(current) => current.to_string(),
            None => return Err(BrowseError::NotStarted),
        };

        let outcome = match command {
            Command::Exit => Outcome::Quit,
            Command::MoveSelectionUp => cursor_outcome(self.menu.select_prev()),
            Command::MoveSelectionDown => cursor_outcome(self.menu.select_next()),
            Command::PageUp => cursor_outcome(self.menu.page_up(layout.list_rows())),
            Command::PageDown => cursor_outcome(self.menu.page_down(layout.list_rows())),
            Command::Advance => match self.menu.selected().map(str::to_string) {
                Some(target) => {
                    self.nav.advance(target);
                    self.rebuild_menu();
                    Outcome::View
                }
                None => Outcome::Unchanged,
            },
            Command::Back => {
                if self.nav.back() {
                    self.rebuild_menu();
                    Outcome::View
                } else {
                    Outcome::Unchanged
                }
            }
            Command::DeleteSelectedVertex => self.delete_selected_vertex(),
            Command::DeleteSelectedEdge => self.delete_selected_edge(&current),
            Command::InsertVertex | Command::InsertEdge => Outcome::Unchanged,
        };
        Ok(outcome)
    }

    /// Rebuild the menu from the store for the current vertex, keeping the
    /// cursor where the new length allows. Resize recovery calls this; a
    /// resize is a view event, not a navigation event.
    pub fn refresh_menu(&mut self) {
        match self.menu.selected_index() {
            Some(idx) => self.rebuild_menu_preserving(idx),
            None => self.rebuild_menu(),
        }
    }

    /// Build one frame of render requests. Adjacency is fetched fresh from
    /// the store on every call; nothing here is cached between frames.
    pub fn view(&self, layout: &Layout) -> Result<ScreenView, BrowseError> {
        let current = self.nav.current().ok_or(BrowseError::NotStarted)?;
        let width = usize::from(layout.width);
        let rows = layout.list_rows();

        let offset = self.menu.page_offset(rows);
        let end = (offset + rows).min(self.menu.len());
        let menu_rows: Vec<String> = self.menu.items()[offset..end]
            .iter()
            .map(|item| layout::truncate_to_width(item, layout.menu_inner()))
            .collect();
        let selected_row = if self.menu.is_empty() || rows == 0 {
            None
        } else {
            self.menu.selected_index().map(|idx| idx - offset)
        };

        let selected = self.menu.selected();
        let onward: &[String] = match selected {
            Some(selected) => self.store.neighbours_of(selected),
            None => &[],
        };
        let neighbour_rows: Vec<String> = onward
            .iter()
            .take(rows)
            .map(|n| layout::truncate_to_width(n, layout.neighbour_inner()))
            .collect();
        let preview_rows: Vec<String> = onward
            .iter()
            .take(rows)
            .map(|n| {
                let packed = layout::pack_neighbour_list(self.store.neighbours_of(n));
                layout::truncate_to_width(&packed, layout.preview_inner())
            })
            .collect();

        Ok(ScreenView {
            status: layout::truncate_to_width(
                &layout::pack_history_line(self.nav.history(), width),
                width,
            ),
            menu_title: layout::truncate_to_width(current, layout.menu_inner()),
            menu_rows,
            selected_row,
            neighbour_title: selected
                .map(|s| layout::truncate_to_width(s, layout.neighbour_inner()))
                .unwrap_or_default(),
            neighbour_rows,
            preview_rows,
            footer: layout::truncate_to_width(FOOTER_HINT, width),
        })
    }

    fn rebuild_menu(&mut self) {
        let neighbours = match self.nav.current() {
            Some(current) => self.store.neighbours_of(current),
            None => &[],
        };
        self.menu.rebuild(neighbours);
    }

    fn rebuild_menu_preserving(&mut self, old_index: usize) {
        let neighbours = match self.nav.current() {
            Some(current) => self.store.neighbours_of(current),
            None => &[],
        };
        self.menu.rebuild_preserving(neighbours, old_index);
    }

    fn delete_selected_vertex(&mut self) -> Outcome {
        let Some((old_index, target)) = self.menu.selection() else {
            return Outcome::Unchanged;
        };
        if self.nav.root() == Some(target) {
            // The root must survive the session; refuse before touching
            // the store.
            return Outcome::Unchanged;
        }
        let target = target.to_string();
        self.store.remove_vertex(&target);
        self.nav.scrub(&target);
        self.rebuild_menu_preserving(old_index);
        Outcome::View
    }

    fn delete_selected_edge(&mut self, current: &str) -> Outcome {
        let Some((old_index, target)) = self.menu.selection() else {
            return Outcome::Unchanged;
        };
        let target = target.to_string();
        self.store.remove_edge(current, &target);
        self.rebuild_menu_preserving(old_index);
        Outcome::View
    }
}
