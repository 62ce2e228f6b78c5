//! Core type definitions for the application

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// Direction of a cursor move in the album grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

/// Widest grid the result view will lay out
pub const MAX_GRID_COLUMNS: usize = 12;

/// Move a grid cursor, staying inside `[0, len)`.
///
/// Vertical moves that would leave the grid keep the cursor where it is.
pub fn move_in_grid(index: usize, len: usize, columns: usize, direction: GridMove) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let index = index.min(len - 1);

    match direction {
        GridMove::Left => index.saturating_sub(1),
        GridMove::Right => (index + 1).min(len - 1),
        GridMove::Up => index.checked_sub(columns).unwrap_or(index),
        GridMove::Down => index
            .checked_add(columns)
            .filter(|&below| below < len)
            .unwrap_or(index),
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Text as typed, before debouncing
    pub search_query: String,
    pub grid_selected: usize,
    pub grid_columns: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            grid_selected: 0,
            grid_columns: 4,
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycles() {
        assert_eq!(ActiveSection::Search.next(), ActiveSection::Results);
        assert_eq!(ActiveSection::Results.next(), ActiveSection::Search);
    }

    #[test]
    fn test_grid_horizontal_moves_clamp() {
        assert_eq!(move_in_grid(0, 10, 4, GridMove::Left), 0);
        assert_eq!(move_in_grid(3, 10, 4, GridMove::Right), 4);
        assert_eq!(move_in_grid(9, 10, 4, GridMove::Right), 9);
    }

    #[test]
    fn test_grid_vertical_moves() {
        assert_eq!(move_in_grid(5, 10, 4, GridMove::Up), 1);
        assert_eq!(move_in_grid(1, 10, 4, GridMove::Up), 1);
        assert_eq!(move_in_grid(5, 10, 4, GridMove::Down), 9);
        // Last row is partial: no card below index 6
        assert_eq!(move_in_grid(6, 10, 4, GridMove::Down), 6);
    }

    #[test]
    fn test_grid_empty_and_out_of_range() {
        assert_eq!(move_in_grid(3, 0, 4, GridMove::Down), 0);
        assert_eq!(move_in_grid(42, 5, 4, GridMove::Left), 3);
        assert_eq!(move_in_grid(2, 5, 0, GridMove::Down), 3);
    }

    #[test]
    fn test_grid_huge_column_count_stays_put() {
        assert_eq!(move_in_grid(1, 5, usize::MAX, GridMove::Down), 1);
        assert_eq!(move_in_grid(1, 5, usize::MAX, GridMove::Up), 1);
        assert_eq!(move_in_grid(1, 5, usize::MAX, GridMove::Right), 2);
    }
}
