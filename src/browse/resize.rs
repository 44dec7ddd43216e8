//! Deferred terminal-resize recovery.
//!
//! A resize notification only flips a flag; the real work happens at the
//! session loop's safe point, so notification bursts coalesce into one
//! recovery and no panel is rebuilt mid-draw.

use crate::browse::command::Browser;
use crate::browse::layout::{self, Layout};
use crate::browse::surface::{Surface, SurfaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ResizeState {
    #[default]
    Stable,
    Pending,
}

#[derive(Debug, Default)]
pub struct ResizeCoordinator {
    state: ResizeState,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the screen geometry went stale. Safe from notification
    /// context: it touches nothing but the flag.
    pub fn note_resize(&mut self) {
        self.state = ResizeState::Pending;
    }

    pub fn is_pending(&self) -> bool {
        self.state == ResizeState::Pending
    }

    /// Recover from a pending resize: tear the panels down, re-read the
    /// terminal size, recompute the layout, recreate the panels, and
    /// refresh the menu for the new page size. Returns the new layout, or
    /// `None` when nothing was pending.
    ///
    /// A failing surface is fatal; the error propagates and the
    /// coordinator stays pending.
    pub fn drain<S: Surface>(
        &mut self,
        browser: &mut Browser,
        surface: &mut S,
    ) -> Result<Option<Layout>, SurfaceError> {
        if !self.is_pending() {
            return Ok(None);
        }
        surface.destroy_panels();
        let (width, height) = surface.dimensions()?;
        let next = layout::compute_layout(width, height);
        surface.create_panels(&next)?;
        browser.refresh_menu();
        self.state = ResizeState::Stable;
        Ok(Some(next))
    }
}
