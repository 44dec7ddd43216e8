use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::browse::layout::Layout;
use crate::browse::surface::{ScreenView, Surface, SurfaceError};

/// Smallest terminal the three-panel screen fits in: each side panel needs
/// its border plus one content column, the panel body one list row.
pub const MIN_WIDTH: u16 = 12;
pub const MIN_HEIGHT: u16 = 5;

/// The real screen: a ratatui terminal plus the panel rectangles derived
/// from the engine's layout.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    panels: Option<PanelSet>,
}

#[derive(Debug, Clone, Copy)]
struct PanelSet {
    status: Rect,
    menu: Rect,
    neighbours: Rect,
    preview: Rect,
    footer: Rect,
}

impl PanelSet {
    fn from_layout(layout: &Layout) -> Self {
        let top = layout.status_row + 1;
        Self {
            status: Rect::new(0, layout.status_row, layout.width, 1),
            menu: Rect::new(0, top, layout.current_width, layout.panel_height),
            neighbours: Rect::new(
                layout.current_width,
                top,
                layout.neighbour_width,
                layout.panel_height,
            ),
            preview: Rect::new(
                layout.current_width + layout.neighbour_width,
                top,
                layout.preview_width,
                layout.panel_height,
            ),
            footer: Rect::new(0, layout.footer_row, layout.width, 1),
        }
    }
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            panels: None,
        }
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn dimensions(&mut self) -> Result<(u16, u16), SurfaceError> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn create_panels(&mut self, layout: &Layout) -> Result<(), SurfaceError> {
        if layout.width < MIN_WIDTH || layout.height < MIN_HEIGHT {
            return Err(SurfaceError::TooSmall {
                width: layout.width,
                height: layout.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        self.panels = Some(PanelSet::from_layout(layout));
        Ok(())
    }

    fn destroy_panels(&mut self) {
        self.panels = None;
    }

    fn present(&mut self, view: &ScreenView) -> Result<(), SurfaceError> {
        let Some(panels) = self.panels else {
            return Err(SurfaceError::PanelsNotReady);
        };
        self.terminal.draw(|frame| {
            // A shrink racing this frame must not paint outside the buffer,
            // so every rect is clipped to the frame area.
            let area = frame.area();

            let status = panels.status.intersection(area);
            if !status.is_empty() {
                frame.render_widget(
                    Paragraph::new(view.status.as_str())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    status,
                );
            }

            let menu = panels.menu.intersection(area);
            if !menu.is_empty() {
                let rows: Vec<Line> = view
                    .menu_rows
                    .iter()
                    .enumerate()
                    .map(|(row, item)| {
                        if view.selected_row == Some(row) {
                            Line::from(Span::styled(
                                item.as_str(),
                                Style::default()
                                    .fg(Color::White)
                                    .bg(Color::DarkGray)
                                    .add_modifier(Modifier::BOLD),
                            ))
                        } else {
                            Line::from(item.as_str())
                        }
                    })
                    .collect();
                frame.render_widget(
                    Paragraph::new(rows).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(view.menu_title.as_str()),
                    ),
                    menu,
                );
            }

            let neighbours = panels.neighbours.intersection(area);
            if !neighbours.is_empty() {
                let rows: Vec<Line> = view
                    .neighbour_rows
                    .iter()
                    .map(|row| Line::from(row.as_str()))
                    .collect();
                frame.render_widget(
                    Paragraph::new(rows).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(view.neighbour_title.as_str()),
                    ),
                    neighbours,
                );
            }

            let preview = panels.preview.intersection(area);
            if !preview.is_empty() {
                let rows: Vec<Line> = view
                    .preview_rows
                    .iter()
                    .map(|row| Line::from(row.as_str()))
                    .collect();
                frame.render_widget(
                    Paragraph::new(rows).block(Block::default().borders(Borders::ALL)),
                    preview,
                );
            }

            let footer = panels.footer.intersection(area);
            if !footer.is_empty() {
                frame.render_widget(
                    Paragraph::new(view.footer.as_str())
                        .style(Style::default().fg(Color::DarkGray)),
                    footer,
                );
            }
        })?;
        Ok(())
    }
}
