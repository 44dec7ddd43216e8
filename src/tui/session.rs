use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::browse::command::{Browser, Outcome};
use crate::browse::layout;
use crate::browse::resize::ResizeCoordinator;
use crate::browse::surface::Surface;
use crate::graph::store::GraphStore;
use crate::tui::input;
use crate::tui::screen::TerminalSurface;

/// Browse `store` interactively until the user exits.
pub fn run(store: GraphStore) -> Result<()> {
    let root = store
        .begin()
        .context("the graph is empty, nothing to browse")?
        .to_string();
    let mut browser = Browser::new(store);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut surface = TerminalSurface::new(Terminal::new(backend)?);

    let (width, height) = surface.dimensions()?;
    let mut current_layout = layout::compute_layout(width, height);
    surface.create_panels(&current_layout)?;
    browser.start(&root)?;

    let mut resize = ResizeCoordinator::new();
    let mut stale = true;

    loop {
        if let Some(next) = resize.drain(&mut browser, &mut surface)? {
            current_layout = next;
            stale = true;
        }
        if stale {
            let view = browser.view(&current_layout)?;
            surface.present(&view)?;
            stale = false;
        }

        match event::read()? {
            Event::Key(key) => {
                if matches!(key.kind, KeyEventKind::Release | KeyEventKind::Repeat) {
                    continue;
                }
                let Some(command) = input::command_for_key(key) else {
                    continue;
                };
                match browser.apply(command, &current_layout)? {
                    Outcome::Quit => break,
                    Outcome::Selection | Outcome::View => stale = true,
                    Outcome::Unchanged => {}
                }
            }
            Event::Resize(_, _) => resize.note_resize(),
            _ => {}
        }
    }

    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
