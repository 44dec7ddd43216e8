use std::io;

use thiserror::Error;

use crate::browse::layout::Layout;

/// Failure to acquire or use a rendering resource. Always fatal: the
/// session tears down instead of retrying.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("panels have not been created")]
    PanelsNotReady,
    #[error(transparent)]
    Backend(#[from] io::Error),
}

/// One fully prepared frame: every string already truncated to its panel's
/// inner width. The surface positions and paints; it never re-derives
/// content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenView {
    /// Packed history for the status row.
    pub status: String,
    /// Menu panel title: the current vertex.
    pub menu_title: String,
    /// Visible page of the neighbour menu.
    pub menu_rows: Vec<String>,
    /// Index into `menu_rows` of the highlighted item.
    pub selected_row: Option<usize>,
    /// Neighbour panel title: the highlighted neighbour.
    pub neighbour_title: String,
    /// Neighbours of the highlighted neighbour, one per row.
    pub neighbour_rows: Vec<String>,
    /// Comma-packed onward neighbours, one row per neighbour row.
    pub preview_rows: Vec<String>,
    /// Key hints for the bottom row.
    pub footer: String,
}

/// Handle to the screen the session draws through. The engine drives it
/// but never writes cells itself; implementations own the real terminal
/// resources.
pub trait Surface {
    /// Current terminal size as `(width, height)`.
    fn dimensions(&mut self) -> Result<(u16, u16), SurfaceError>;

    /// Allocate panel windows for `layout`, replacing any previous set.
    fn create_panels(&mut self, layout: &Layout) -> Result<(), SurfaceError>;

    /// Release the panel windows. Harmless when none exist.
    fn destroy_panels(&mut self);

    /// Paint one prepared frame onto the created panels.
    fn present(&mut self, view: &ScreenView) -> Result<(), SurfaceError>;
}
