//! Pure panel geometry and text fitting.
//!
//! Everything here is a function of its arguments. The central invariant:
//! identical terminal dimensions always derive an identical layout, so a
//! resize can recompute the whole geometry from scratch instead of patching
//! it.

/// Derived screen geometry: status row on top, footer on the last row,
/// three bordered panels between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    /// Rows spanned by the panels (everything between status and footer).
    pub panel_height: u16,
    pub current_width: u16,
    pub neighbour_width: u16,
    pub preview_width: u16,
    pub status_row: u16,
    pub footer_row: u16,
}

impl Layout {
    /// Rows available for list items inside a bordered panel.
    pub fn list_rows(&self) -> usize {
        usize::from(self.panel_height.saturating_sub(2))
    }

    /// Columns available for text inside the menu panel border.
    pub fn menu_inner(&self) -> usize {
        usize::from(self.current_width.saturating_sub(2))
    }

    /// Columns available for text inside the neighbour panel border.
    pub fn neighbour_inner(&self) -> usize {
        usize::from(self.neighbour_width.saturating_sub(2))
    }

    /// Columns available for text inside the preview panel border.
    pub fn preview_inner(&self) -> usize {
        usize::from(self.preview_width.saturating_sub(2))
    }
}

/// Derive the panel geometry for a `width x height` terminal.
///
/// The menu and neighbour panels each take a quarter of the width, the
/// preview panel the remainder.
pub fn compute_layout(width: u16, height: u16) -> Layout {
    let quarter = width / 4;
    Layout {
        width,
        height,
        panel_height: height.saturating_sub(2),
        current_width: quarter,
        neighbour_width: quarter,
        preview_width: width - 2 * quarter,
        status_row: 0,
        footer_row: height.saturating_sub(1),
    }
}

/// Hard-cut `text` to at most `max` characters. No ellipsis; a cut tail is
/// how these panels show overflow.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Pack the most recent stretch of `history` into one status line of fewer
/// than `max` characters.
///
/// Walks backward from the current vertex, prepending `"entry | "` while
/// the line still fits, and stops at the first entry that does not. The
/// result is always a contiguous suffix of the trail and entries are never
/// truncated; if the current vertex alone overflows it is returned whole
/// and the caller display-cuts it.
pub fn pack_history_line(history: &[String], max: usize) -> String {
    let mut entries = history.iter().rev();
    let Some(tail) = entries.next() else {
        return String::new();
    };
    let mut line = tail.clone();
    for entry in entries {
        if line.chars().count() + entry.chars().count() + 3 >= max {
            break;
        }
        line = format!("{entry} | {line}");
    }
    line
}

/// Comma-join `items` for one preview row. The caller truncates.
pub fn pack_neighbour_list(items: &[String]) -> String {
    items.join(",")
}
